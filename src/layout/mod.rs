use crate::config::LayoutConfig;
use crate::model::{Node, PhaseType, Position};

/// Chooses positions and identifiers for newly created nodes.
///
/// Nodes are laid out left to right in creation order on a single row. The
/// spacing is wide enough relative to a node's footprint that no collision
/// check is needed. Given the same prior nodes, the allocator always returns
/// the same answer.
#[derive(Debug, Clone, Default)]
pub struct LayoutAllocator {
    config: LayoutConfig,
}

impl LayoutAllocator {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Position for the next node, one slot to the right of the previous one.
    pub fn next_position(&self, existing: &[Node]) -> Position {
        let slot = existing.len() as f64;
        Position::new(
            self.config.origin_x + slot * self.config.spacing_x,
            self.config.origin_y,
        )
    }

    /// Identifier for the next node of `phase`: `{type}-{count + 1}`.
    ///
    /// If that id is still taken (a lower-numbered sibling was removed), the
    /// counter keeps climbing until it finds a free one.
    pub fn next_id(&self, phase: PhaseType, existing: &[Node]) -> String {
        let mut counter = existing.iter().filter(|n| n.phase == phase).count() + 1;
        loop {
            let id = format!("{}-{}", phase, counter);
            if !existing.iter().any(|n| n.id == id) {
                return id;
            }
            counter += 1;
        }
    }
}
