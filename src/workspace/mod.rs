//! The canvas controller: owns the pipeline and routes every user action
//! through layout, click pairing, connection handling and validation.
//!
//! Everything here runs on a single logical owner. Nothing is shared across
//! threads and no lock is taken; store round-trips are modelled as a
//! `begin_*`/`finish_*` pair so a caller driving real network requests can
//! resume on its own event loop.

use crate::canvas::{CanvasEvent, ClickDisambiguator, ConnectionManager};
use crate::config::WorkspaceConfig;
use crate::error::{ConnectionError, GraphError, PersistenceError, PrerequisiteError};
use crate::layout::LayoutAllocator;
use crate::model::{
    Anchors, ChangeSink, Connection, Node, PhaseCompletionStatus, PhaseType, PipelineChange,
    PipelineState, Position,
};
use crate::persistence::{
    self, DirtyTracker, PipelineDocument, ProjectDocument, ProjectStore, RequestSequencer,
    SaveTicket,
};
use crate::validation::{PhaseGrant, PrerequisiteValidator};
use chrono::Utc;
use tracing::{error, info, warn};

mod builder;
mod notice;

pub use builder::WorkspaceBuilder;
pub use notice::{Notice, NoticeLevel};

/// What a canvas event led to.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasOutcome {
    /// A click pair selected a node and its phase may be opened.
    Selected(PhaseGrant),
    /// A click pair selected a node, but its phase's prerequisites are unmet.
    Denied(PrerequisiteError),
    /// First click of a possible pair; nothing happens yet.
    Pending,
    Connected(Connection),
    Disconnected(Vec<Connection>),
    Moved,
    Rejected(ConnectionError),
    /// The event named a node that is not on the canvas.
    Ignored,
}

pub struct Workspace {
    config: WorkspaceConfig,
    state: PipelineState,
    status: PhaseCompletionStatus,
    layout: LayoutAllocator,
    clicks: ClickDisambiguator,
    connections: ConnectionManager,
    validator: PrerequisiteValidator,
    tracker: DirtyTracker,
    loads: RequestSequencer,
    saves: RequestSequencer,
    notices: Vec<Notice>,
    project_id: Option<String>,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Workspace {
    pub fn builder() -> WorkspaceBuilder {
        WorkspaceBuilder::new()
    }

    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    pub fn status(&self) -> &PhaseCompletionStatus {
        &self.status
    }

    pub fn clicks(&self) -> &ClickDisambiguator {
        &self.clicks
    }

    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.tracker.is_dirty()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    // --- Graph editing ---

    /// Places a node for `phase` (toolbox click).
    ///
    /// A second node of the same type is refused with an informational notice
    /// and the pipeline is left as it was.
    pub fn add_phase(&mut self, phase: PhaseType) -> Result<Node, GraphError> {
        match self.state.add_node(phase, &self.layout) {
            Ok(node) => {
                self.tracker.record(PipelineChange::NodeAdded {
                    node_id: node.id.clone(),
                });
                Ok(node)
            }
            Err(e) => {
                warn!(%phase, "node creation rejected: {}", e);
                self.notices.push(Notice::info(e.to_string()));
                Err(e)
            }
        }
    }

    /// Deletes a node together with its connections. Unknown ids are ignored.
    pub fn remove_node(&mut self, node_id: &str) -> Option<Node> {
        let node = self.state.remove_node(node_id)?;
        self.tracker.record(PipelineChange::NodeRemoved {
            node_id: node.id.clone(),
        });
        Some(node)
    }

    pub fn move_node(&mut self, node_id: &str, position: Position) -> bool {
        let moved = self.state.move_node(node_id, position);
        if moved {
            self.tracker.record(PipelineChange::NodeMoved {
                node_id: node_id.to_string(),
            });
        }
        moved
    }

    pub fn connect(
        &mut self,
        source_raw: &str,
        target_raw: &str,
        anchors: Anchors,
    ) -> Result<Connection, ConnectionError> {
        self.connections
            .on_connect(&mut self.state, &mut self.tracker, source_raw, target_raw, anchors)
            .inspect_err(|e| self.notices.push(Notice::error(e.to_string())))
    }

    pub fn disconnect(
        &mut self,
        source_raw: &str,
        target_raw: &str,
    ) -> Result<Vec<Connection>, ConnectionError> {
        self.connections
            .on_disconnect(&mut self.state, &mut self.tracker, source_raw, target_raw)
            .inspect_err(|e| self.notices.push(Notice::error(e.to_string())))
    }

    /// Feeds one raw drawing-surface event through the matching component.
    pub fn handle_event(&mut self, event: CanvasEvent) -> CanvasOutcome {
        match event {
            CanvasEvent::Click { node_id, time } => match self.clicks.click(&node_id, time) {
                Some(selected) => match self.open_node(&selected) {
                    Some(Ok(grant)) => CanvasOutcome::Selected(grant),
                    Some(Err(e)) => CanvasOutcome::Denied(e),
                    None => CanvasOutcome::Ignored,
                },
                None => CanvasOutcome::Pending,
            },
            CanvasEvent::Connect {
                source_raw,
                target_raw,
                source_anchor,
                target_anchor,
            } => {
                let anchors = Anchors::new(source_anchor, target_anchor);
                match self.connect(&source_raw, &target_raw, anchors) {
                    Ok(connection) => CanvasOutcome::Connected(connection),
                    Err(e) => CanvasOutcome::Rejected(e),
                }
            }
            CanvasEvent::Disconnect {
                source_raw,
                target_raw,
            } => match self.disconnect(&source_raw, &target_raw) {
                Ok(removed) => CanvasOutcome::Disconnected(removed),
                Err(e) => CanvasOutcome::Rejected(e),
            },
            CanvasEvent::Drag { node_id, position } => {
                if self.move_node(&node_id, position) {
                    CanvasOutcome::Moved
                } else {
                    CanvasOutcome::Ignored
                }
            }
        }
    }

    /// Empties the pipeline and clears every completion flag.
    pub fn reset(&mut self) {
        self.state.reset();
        self.status.reset();
        self.clicks.clear();
        self.tracker.record(PipelineChange::Reset);
        info!("pipeline reset");
    }

    // --- Phase access ---

    /// Checks whether the editor for `phase` may be opened. A denial is also
    /// recorded as an error notice.
    pub fn validate(&mut self, phase: PhaseType) -> Result<PhaseGrant, PrerequisiteError> {
        self.validator
            .validate(phase, &self.state, &self.status)
            .inspect_err(|e| self.notices.push(Notice::error(e.to_string())))
    }

    /// Validates the phase of the node `node_id`. `None` when no such node exists.
    pub fn open_node(&mut self, node_id: &str) -> Option<Result<PhaseGrant, PrerequisiteError>> {
        let phase = self.state.node(node_id)?.phase;
        Some(self.validate(phase))
    }

    pub fn access_report(&self) -> Vec<(PhaseType, Result<PhaseGrant, PrerequisiteError>)> {
        self.validator.access_report(&self.state, &self.status)
    }

    /// Callback for a phase editor once the processing service has answered.
    ///
    /// Only a success sets the flag; a failed run leaves an earlier success in place.
    pub fn report_completion(&mut self, phase: PhaseType, success: bool) {
        if !success {
            warn!(%phase, "phase processing failed");
            return;
        }
        if self.status.set(phase, true) {
            info!(%phase, "phase completed");
        }
    }

    // --- Persistence ---

    pub fn to_document(&self) -> PipelineDocument {
        persistence::to_document(&self.state, &self.status)
    }

    /// Captures the pipeline for a save request.
    pub fn begin_save(&mut self) -> (SaveTicket, PipelineDocument) {
        let ticket = SaveTicket {
            ticket: self.saves.issue(),
            revision: self.tracker.revision(),
            at: Utc::now(),
        };
        let mut document = self.to_document();
        document.last_saved = Some(ticket.at);
        (ticket, document)
    }

    /// Applies the result of a save request.
    ///
    /// `lastSaved` is stamped only if the pipeline did not change while the
    /// request was in flight.
    pub fn finish_save(
        &mut self,
        ticket: SaveTicket,
        result: Result<(), PersistenceError>,
    ) -> Result<(), PersistenceError> {
        self.saves.accept(ticket.ticket)?;
        if let Err(e) = result {
            error!("saving pipeline failed: {}", e);
            self.notices.push(Notice::error(e.to_string()));
            return Err(e);
        }
        if self.tracker.mark_saved(ticket.revision) {
            self.state.mark_saved(ticket.at);
        }
        info!(ticket = ticket.ticket, "pipeline saved");
        Ok(())
    }

    pub fn save_to(
        &mut self,
        store: &mut dyn ProjectStore,
        project_id: &str,
    ) -> Result<(), PersistenceError> {
        let (ticket, document) = self.begin_save();
        let result = store.save_pipeline(project_id, &document);
        self.finish_save(ticket, result)?;
        self.project_id = Some(project_id.to_string());
        Ok(())
    }

    pub fn begin_load(&mut self) -> u64 {
        self.loads.issue()
    }

    /// Replaces the whole workspace with a loaded project.
    ///
    /// On any failure the current pipeline is kept untouched.
    pub fn finish_load(
        &mut self,
        ticket: u64,
        result: Result<ProjectDocument, PersistenceError>,
    ) -> Result<(), PersistenceError> {
        self.loads.accept(ticket)?;
        let restored = result.and_then(|project| {
            persistence::restore_project(&project).map(|restored| (project.id, restored))
        });
        let (project_id, (state, status)) = match restored {
            Ok(loaded) => loaded,
            Err(e) => {
                error!("loading project failed: {}", e);
                self.notices.push(Notice::error(e.to_string()));
                return Err(e);
            }
        };

        info!(
            nodes = state.nodes().len(),
            connections = state.connections().len(),
            "project loaded"
        );
        self.state = state;
        self.status = status;
        self.clicks.clear();
        self.tracker.mark_clean();
        if project_id.is_some() {
            self.project_id = project_id;
        }
        Ok(())
    }

    pub fn load_from(
        &mut self,
        store: &dyn ProjectStore,
        project_id: &str,
    ) -> Result<(), PersistenceError> {
        let ticket = self.begin_load();
        let result = store.load_project(project_id);
        self.finish_load(ticket, result)?;
        self.project_id = Some(project_id.to_string());
        Ok(())
    }
}
