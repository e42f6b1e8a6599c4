/// A structural change to the pipeline, reported to whoever tracks unsaved work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineChange {
    NodeAdded { node_id: String },
    NodeRemoved { node_id: String },
    NodeMoved { node_id: String },
    Connected { connection_id: String },
    Disconnected { connection_ids: Vec<String> },
    Reset,
}

/// Receiver of [`PipelineChange`] notifications.
pub trait ChangeSink {
    fn record(&mut self, change: PipelineChange);
}

impl ChangeSink for Vec<PipelineChange> {
    fn record(&mut self, change: PipelineChange) {
        self.push(change);
    }
}
