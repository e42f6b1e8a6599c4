use super::{Anchors, Connection, Node, PhaseType, Position, connection_id};
use crate::error::GraphError;
use crate::layout::LayoutAllocator;
use chrono::{DateTime, Utc};
use tracing::debug;

/// The aggregate root of the canvas: every node and connection in the pipeline.
///
/// Holds at most one node per phase type, and never a connection whose
/// endpoints are missing. Every structural mutation clears `last_saved`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PipelineState {
    nodes: Vec<Node>,
    connections: Vec<Connection>,
    last_saved: Option<DateTime<Utc>>,
}

impl PipelineState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.last_saved
    }

    pub fn mark_saved(&mut self, at: DateTime<Utc>) {
        self.last_saved = Some(at);
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, node_id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == node_id)
    }

    pub fn find_node_by_type(&self, phase: PhaseType) -> Option<&Node> {
        self.nodes.iter().find(|n| n.phase == phase)
    }

    pub fn connection(&self, connection_id: &str) -> Option<&Connection> {
        self.connections.iter().find(|c| c.id == connection_id)
    }

    /// All connections with `node_id` at either end.
    pub fn connections_of<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a Connection> {
        self.connections.iter().filter(move |c| c.touches(node_id))
    }

    /// True when a drawn edge runs directly from a `source` node to a `target` node.
    pub fn has_physical_connection(&self, source: PhaseType, target: PhaseType) -> bool {
        self.connections
            .iter()
            .any(|c| c.source_type == source && c.target_type == target)
    }

    /// Creates a node for `phase`, placing it with `layout`.
    pub fn add_node(
        &mut self,
        phase: PhaseType,
        layout: &LayoutAllocator,
    ) -> Result<Node, GraphError> {
        if self.find_node_by_type(phase).is_some() {
            return Err(GraphError::DuplicateNodeType { phase });
        }
        let node = Node::new(
            layout.next_id(phase, &self.nodes),
            phase,
            layout.next_position(&self.nodes),
        );
        self.insert_node(node.clone())?;
        Ok(node)
    }

    /// Inserts a fully formed node, keeping its id and position as given.
    pub fn insert_node(&mut self, node: Node) -> Result<(), GraphError> {
        if self.find_node_by_type(node.phase).is_some() {
            return Err(GraphError::DuplicateNodeType { phase: node.phase });
        }
        debug!(node_id = %node.id, phase = %node.phase, "node added");
        self.nodes.push(node);
        self.last_saved = None;
        Ok(())
    }

    /// Removes a node and every connection that references it.
    ///
    /// Unknown ids are ignored.
    pub fn remove_node(&mut self, node_id: &str) -> Option<Node> {
        let index = self.nodes.iter().position(|n| n.id == node_id)?;
        let node = self.nodes.remove(index);
        let before = self.connections.len();
        self.connections.retain(|c| !c.touches(node_id));
        debug!(
            node_id,
            pruned = before - self.connections.len(),
            "node removed"
        );
        self.last_saved = None;
        Some(node)
    }

    /// Updates the position of a node after a drag. Returns `false` for unknown ids.
    pub fn move_node(&mut self, node_id: &str, position: Position) -> bool {
        match self.nodes.iter_mut().find(|n| n.id == node_id) {
            Some(node) => {
                node.position = position;
                self.last_saved = None;
                true
            }
            None => false,
        }
    }

    /// Connects two existing nodes.
    ///
    /// Connecting a pair that is already connected returns the existing connection.
    /// A derived id already held by a different pair is rejected.
    pub fn add_connection(
        &mut self,
        source_id: &str,
        target_id: &str,
        anchors: Anchors,
    ) -> Result<Connection, GraphError> {
        if source_id == target_id {
            return Err(GraphError::SelfConnection {
                node_id: source_id.to_string(),
            });
        }
        let source_type = self.resolve(source_id)?.phase;
        let target_type = self.resolve(target_id)?.phase;

        if let Some(existing) = self.connections.iter().find(|c| c.links(source_id, target_id)) {
            return Ok(existing.clone());
        }
        let id = connection_id(source_id, target_id);
        if self.connection(&id).is_some() {
            return Err(GraphError::ConnectionIdCollision { connection_id: id });
        }

        let connection = Connection {
            id,
            source_node_id: source_id.to_string(),
            target_node_id: target_id.to_string(),
            source_type,
            target_type,
            source_anchor: anchors.source,
            target_anchor: anchors.target,
        };
        debug!(connection_id = %connection.id, "connection added");
        self.connections.push(connection.clone());
        self.last_saved = None;
        Ok(connection)
    }

    /// Removes a connection by id. Unknown ids are ignored.
    pub fn remove_connection(&mut self, connection_id: &str) -> Option<Connection> {
        let index = self.connections.iter().position(|c| c.id == connection_id)?;
        self.last_saved = None;
        debug!(connection_id, "connection removed");
        Some(self.connections.remove(index))
    }

    /// Removes every connection running from `source_id` to `target_id`.
    ///
    /// Matching is order-sensitive: the reverse edge is left alone.
    pub fn remove_connections_between(&mut self, source_id: &str, target_id: &str) -> Vec<Connection> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.connections)
            .into_iter()
            .partition(|c| c.links(source_id, target_id));
        self.connections = kept;
        if !removed.is_empty() {
            debug!(source_id, target_id, count = removed.len(), "connections removed");
            self.last_saved = None;
        }
        removed
    }

    pub(crate) fn push_connection(&mut self, connection: Connection) {
        self.connections.push(connection);
    }

    /// Empties the pipeline.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn resolve(&self, node_id: &str) -> Result<&Node, GraphError> {
        self.node(node_id).ok_or_else(|| GraphError::UnknownNode {
            node_id: node_id.to_string(),
        })
    }
}
