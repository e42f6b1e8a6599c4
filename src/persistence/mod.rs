//! Conversion between the in-memory pipeline and the JSON the project store
//! keeps. Network I/O is left to a [`ProjectStore`] implementation.

use crate::error::PersistenceError;
use crate::model::{Connection, Node, PhaseCompletionStatus, PhaseType, PipelineState, display_label};
use ahash::AHashSet;
use tracing::warn;

pub mod document;
pub mod project;
pub mod store;
pub mod tracker;

pub use document::{ConnectionRecord, NodeRecord, PipelineDocument};
pub use project::ProjectDocument;
pub use store::{FileProjectStore, MemoryProjectStore, ProjectStore};
pub use tracker::{DirtyTracker, RequestSequencer, SaveTicket};

/// Captures the pipeline and completion flags as a store document.
pub fn to_document(state: &PipelineState, status: &PhaseCompletionStatus) -> PipelineDocument {
    PipelineDocument {
        nodes: state.nodes().iter().map(NodeRecord::from).collect(),
        connections: state.connections().iter().map(ConnectionRecord::from).collect(),
        last_saved: state.last_saved(),
        completion_status: Some(*status),
    }
}

/// Serializes the pipeline and completion flags to JSON.
pub fn serialize(
    state: &PipelineState,
    status: &PhaseCompletionStatus,
) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string(&to_document(state, status))?)
}

/// Restores a pipeline from JSON with its original ids and positions.
///
/// Completion comes from the document's `completionStatus`; a document
/// without one restores with nothing completed.
pub fn deserialize(json: &str) -> Result<(PipelineState, PhaseCompletionStatus), PersistenceError> {
    let document: PipelineDocument = serde_json::from_str(json)?;
    let status = document.completion_status.unwrap_or_default();
    Ok((from_document(&document)?, status))
}

/// Parses a full `getProject` response, inferring completion from its
/// artifacts when the pipeline does not record it.
pub fn deserialize_project(
    json: &str,
) -> Result<(PipelineState, PhaseCompletionStatus), PersistenceError> {
    let project: ProjectDocument = serde_json::from_str(json)?;
    restore_project(&project)
}

pub fn restore_project(
    project: &ProjectDocument,
) -> Result<(PipelineState, PhaseCompletionStatus), PersistenceError> {
    Ok((from_document(&project.pipeline)?, project.completion_status()))
}

/// Rebuilds the graph from a document without re-running layout.
pub fn from_document(document: &PipelineDocument) -> Result<PipelineState, PersistenceError> {
    let mut state = PipelineState::new();
    let mut seen_ids = AHashSet::new();

    for record in &document.nodes {
        let phase: PhaseType =
            record
                .type_name
                .parse()
                .map_err(|_| PersistenceError::UnknownPhase {
                    node_id: record.id.clone(),
                    type_name: record.type_name.clone(),
                })?;
        if !seen_ids.insert(record.id.as_str()) {
            return Err(PersistenceError::DuplicateNode {
                node_id: record.id.clone(),
            });
        }
        let node = Node {
            id: record.id.clone(),
            phase,
            label: record
                .label
                .clone()
                .unwrap_or_else(|| display_label(&record.type_name)),
            position: record.position,
        };
        state
            .insert_node(node)
            .map_err(|_| PersistenceError::DuplicateNode {
                node_id: record.id.clone(),
            })?;
    }

    for record in &document.connections {
        let source = endpoint(&state, record, &record.source_node_id)?;
        let target = endpoint(&state, record, &record.target_node_id)?;
        let pair_taken = state
            .connections()
            .iter()
            .any(|c| c.links(&record.source_node_id, &record.target_node_id));
        if pair_taken {
            warn!(connection_id = %record.id, "skipping repeated connection");
            continue;
        }
        if state.connection(&record.id).is_some() {
            return Err(PersistenceError::ConnectionIdCollision {
                connection_id: record.id.clone(),
            });
        }
        let connection = Connection {
            id: record.id.clone(),
            source_node_id: record.source_node_id.clone(),
            target_node_id: record.target_node_id.clone(),
            source_type: source,
            target_type: target,
            source_anchor: record.source_anchor.clone(),
            target_anchor: record.target_anchor.clone(),
        };
        state.push_connection(connection);
    }

    if let Some(at) = document.last_saved {
        state.mark_saved(at);
    }
    Ok(state)
}

fn endpoint(
    state: &PipelineState,
    record: &ConnectionRecord,
    node_id: &str,
) -> Result<PhaseType, PersistenceError> {
    state
        .node(node_id)
        .map(|n| n.phase)
        .ok_or_else(|| PersistenceError::DanglingConnection {
            connection_id: record.id.clone(),
            node_id: node_id.to_string(),
        })
}
