use super::PhaseType;
use serde::{Deserialize, Serialize};

/// Derives the identifier of the connection from `source_id` to `target_id`.
///
/// The same ordered pair always yields the same id.
pub fn connection_id(source_id: &str, target_id: &str) -> String {
    format!("{}{}", source_id, target_id)
}

/// A directed edge between two nodes, carrying pipeline data flow.
///
/// Endpoints are held by node id; the endpoint types are cached at connection
/// time so topology checks never need to resolve the nodes again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: String,
    pub source_node_id: String,
    pub target_node_id: String,
    pub source_type: PhaseType,
    pub target_type: PhaseType,
    #[serde(default)]
    pub source_anchor: String,
    #[serde(default)]
    pub target_anchor: String,
}

impl Connection {
    pub fn links(&self, source_id: &str, target_id: &str) -> bool {
        self.source_node_id == source_id && self.target_node_id == target_id
    }

    pub fn touches(&self, node_id: &str) -> bool {
        self.source_node_id == node_id || self.target_node_id == node_id
    }
}

/// Opaque anchor identifiers reported by the drawing surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Anchors {
    pub source: String,
    pub target: String,
}

impl Anchors {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}
