use crate::model::{Connection, Node, PhaseCompletionStatus, Position};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The pipeline as exchanged with the project store.
///
/// Node and connection types are kept as plain strings here so that an
/// unknown type can be reported against the node that carries it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineDocument {
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub connections: Vec<ConnectionRecord>,
    #[serde(default)]
    pub last_saved: Option<DateTime<Utc>>,
    /// Written on every save; older projects omit it and have their
    /// completion inferred from artifacts instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_status: Option<PhaseCompletionStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRecord {
    pub id: String,
    pub source_node_id: String,
    pub target_node_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
    #[serde(default)]
    pub source_anchor: String,
    #[serde(default)]
    pub target_anchor: String,
}

impl From<&Node> for NodeRecord {
    fn from(node: &Node) -> Self {
        Self {
            id: node.id.clone(),
            type_name: node.phase.to_string(),
            label: Some(node.label.clone()),
            position: node.position,
        }
    }
}

impl From<&Connection> for ConnectionRecord {
    fn from(connection: &Connection) -> Self {
        Self {
            id: connection.id.clone(),
            source_node_id: connection.source_node_id.clone(),
            target_node_id: connection.target_node_id.clone(),
            source_type: Some(connection.source_type.to_string()),
            target_type: Some(connection.target_type.to_string()),
            source_anchor: connection.source_anchor.clone(),
            target_anchor: connection.target_anchor.clone(),
        }
    }
}
