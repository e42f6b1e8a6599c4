use super::events::{EndpointParser, PrefixEndpointParser};
use crate::error::ConnectionError;
use crate::model::{Anchors, ChangeSink, Connection, PipelineChange, PipelineState};
use tracing::{debug, warn};

/// Applies drag-to-connect and drag-to-disconnect gestures to the graph.
pub struct ConnectionManager {
    parser: Box<dyn EndpointParser>,
}

impl Default for ConnectionManager {
    fn default() -> Self {
        Self::new(Box::new(PrefixEndpointParser::default()))
    }
}

impl ConnectionManager {
    pub fn new(parser: Box<dyn EndpointParser>) -> Self {
        Self { parser }
    }

    /// Resolves both raw endpoints and connects them.
    pub fn on_connect(
        &self,
        state: &mut PipelineState,
        changes: &mut dyn ChangeSink,
        source_raw: &str,
        target_raw: &str,
        anchors: Anchors,
    ) -> Result<Connection, ConnectionError> {
        let source_id = self.parser.parse_endpoint(source_raw)?;
        let target_id = self.parser.parse_endpoint(target_raw)?;

        let already_connected = state
            .connections()
            .iter()
            .any(|c| c.links(&source_id, &target_id));

        let connection = state
            .add_connection(&source_id, &target_id, anchors)
            .inspect_err(|e| warn!(%source_id, %target_id, "connect rejected: {}", e))?;

        if !already_connected {
            changes.record(PipelineChange::Connected {
                connection_id: connection.id.clone(),
            });
        }
        Ok(connection)
    }

    /// Removes the connection running from the source endpoint to the target
    /// endpoint. The reverse direction is never matched.
    pub fn on_disconnect(
        &self,
        state: &mut PipelineState,
        changes: &mut dyn ChangeSink,
        source_raw: &str,
        target_raw: &str,
    ) -> Result<Vec<Connection>, ConnectionError> {
        let source_id = self.parser.parse_endpoint(source_raw)?;
        let target_id = self.parser.parse_endpoint(target_raw)?;

        let removed = state.remove_connections_between(&source_id, &target_id);
        if removed.is_empty() {
            debug!(%source_id, %target_id, "disconnect matched no connection");
        } else {
            changes.record(PipelineChange::Disconnected {
                connection_ids: removed.iter().map(|c| c.id.clone()).collect(),
            });
        }
        Ok(removed)
    }
}
