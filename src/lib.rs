//! # Phasegraph - Compiler Pipeline Graph and Validation Engine
//!
//! **Phasegraph** is the engine behind a canvas on which a user assembles a
//! compiler pipeline (Source → Lexer → Parser → Analyser → Translator, with an
//! optional Optimiser branch) and runs each phase against a remote processing
//! service. It owns the node/connection model, node placement, click pairing,
//! and the prerequisite checks that decide whether a phase's editor may open.
//! Rendering, the phase editors and the processing service live elsewhere.
//!
//! ## Core Workflow
//!
//! 1.  **Place Nodes**: `Workspace::add_phase` puts one node per phase on the canvas.
//! 2.  **Feed Canvas Events**: raw click, connect, disconnect and drag events
//!     from the drawing surface go through `Workspace::handle_event`.
//! 3.  **Open Phases**: a double click (or `Workspace::validate`) checks the
//!     phase's prerequisites before its editor is handed control.
//! 4.  **Report Completion**: once the service has processed a phase, the
//!     editor calls `Workspace::report_completion`, unlocking the next one.
//! 5.  **Persist**: `Workspace::save_to` / `load_from` exchange the pipeline
//!     with a `ProjectStore`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use phasegraph::prelude::*;
//!
//! let mut workspace = Workspace::builder().build();
//! workspace.add_phase(PhaseType::Source)?;
//! workspace.add_phase(PhaseType::Lexer)?;
//!
//! // The drawing surface prefixes its node ids with "N-".
//! workspace.handle_event(CanvasEvent::Connect {
//!     source_raw: "N-source-1".to_string(),
//!     target_raw: "N-lexer-1".to_string(),
//!     source_anchor: "right".to_string(),
//!     target_anchor: "left".to_string(),
//! });
//!
//! // The lexer stays locked until the source phase has been processed.
//! assert!(workspace.validate(PhaseType::Lexer).is_err());
//! workspace.report_completion(PhaseType::Source, true);
//!
//! match workspace.validate(PhaseType::Lexer) {
//!     Ok(grant) => println!("open editor for {:?}", grant.node_id),
//!     Err(e) => println!("denied ({}): {}", e.reason(), e),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod canvas;
pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod persistence;
pub mod prelude;
pub mod validation;
pub mod workspace;
