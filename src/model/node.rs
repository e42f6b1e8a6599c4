use super::PhaseType;
use serde::{Deserialize, Serialize};

/// A point in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A canvas-placed instance of one pipeline phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// `{type}-{counter}`, unique within the pipeline.
    pub id: String,
    #[serde(rename = "type")]
    pub phase: PhaseType,
    pub label: String,
    pub position: Position,
}

impl Node {
    pub fn new(id: impl Into<String>, phase: PhaseType, position: Position) -> Self {
        Self {
            id: id.into(),
            phase,
            label: phase.label(),
            position,
        }
    }
}
