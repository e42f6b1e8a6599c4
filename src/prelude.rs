//! One-line import for building and checking pipelines.
//!
//! Brings in the workspace controller, the graph model, the validator, the
//! persistence functions and every error type, plus a boxed `Result` alias for
//! quick tools and examples.
//!
//! # Example
//!
//! ```rust,no_run
//! use phasegraph::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let project_json = std::fs::read_to_string("path/to/project.json")?;
//! let (state, status) = deserialize_project(&project_json)?;
//!
//! let validator = PrerequisiteValidator::default();
//! for (phase, access) in validator.access_report(&state, &status) {
//!     println!("{}: {:?}", phase, access.map(|grant| grant.node_id));
//! }
//! # Ok(())
//! # }
//! ```

// Controller
pub use crate::workspace::{CanvasOutcome, Notice, NoticeLevel, Workspace, WorkspaceBuilder};

// Graph model
pub use crate::model::{
    Anchors, Connection, Node, PhaseCompletionStatus, PhaseType, PipelineChange, PipelineState,
    Position,
};

// Canvas input
pub use crate::canvas::{CanvasEvent, ClickDisambiguator, ConnectionManager, EndpointParser};

// Layout and validation
pub use crate::layout::LayoutAllocator;
pub use crate::validation::{PhaseGrant, PrerequisiteValidator};

// Persistence
pub use crate::persistence::{
    MemoryProjectStore, PipelineDocument, ProjectDocument, ProjectStore, deserialize,
    deserialize_project, serialize,
};

// Configuration
pub use crate::config::{Sequencing, WorkspaceConfig};

// Error types
pub use crate::error::{
    ConfigError, ConnectionError, FailureReason, GraphError, PersistenceError, PrerequisiteError,
};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
