use crate::model::PhaseType;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors raised by the in-memory graph model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("A '{phase}' node already exists in the pipeline")]
    DuplicateNodeType { phase: PhaseType },

    #[error("Node '{node_id}' does not exist in the pipeline")]
    UnknownNode { node_id: String },

    #[error("Node '{node_id}' cannot be connected to itself")]
    SelfConnection { node_id: String },

    #[error("Connection id '{connection_id}' is already used by a different pair of nodes")]
    ConnectionIdCollision { connection_id: String },

    #[error("'{0}' is not a known pipeline phase")]
    UnknownPhase(String),
}

/// Tag identifying why a phase could not be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureReason {
    MissingNode,
    NotCompleted,
    NotConnected,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::MissingNode => write!(f, "missing-node"),
            FailureReason::NotCompleted => write!(f, "not-completed"),
            FailureReason::NotConnected => write!(f, "not-connected"),
        }
    }
}

/// Errors returned by the prerequisite validator when access to a phase is denied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrerequisiteError {
    #[error("Add a {phase} node to the pipeline first")]
    MissingNode { phase: PhaseType },

    #[error("The {phase} phase has not been processed successfully yet")]
    NotCompleted { phase: PhaseType },

    #[error("Connect the {predecessor} node to the {target} node first")]
    NotConnected {
        predecessor: PhaseType,
        target: PhaseType,
    },
}

impl PrerequisiteError {
    pub fn reason(&self) -> FailureReason {
        match self {
            PrerequisiteError::MissingNode { .. } => FailureReason::MissingNode,
            PrerequisiteError::NotCompleted { .. } => FailureReason::NotCompleted,
            PrerequisiteError::NotConnected { .. } => FailureReason::NotConnected,
        }
    }
}

/// Errors that can occur while translating drawing-surface connection events.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    #[error("Endpoint '{raw}' does not name a node")]
    MalformedEndpoint { raw: String },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Errors produced at the project-store boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    #[error("Failed to parse pipeline JSON: {0}")]
    Json(String),

    #[error("Node '{node_id}' has an unknown type: '{type_name}'")]
    UnknownPhase { node_id: String, type_name: String },

    #[error("Node '{node_id}' is listed more than once or shares its type with another node")]
    DuplicateNode { node_id: String },

    #[error(
        "Connection '{connection_id}' references node '{node_id}', which is not part of the pipeline"
    )]
    DanglingConnection {
        connection_id: String,
        node_id: String,
    },

    #[error("Connection '{connection_id}' reuses an id already held by a different pair of nodes")]
    ConnectionIdCollision { connection_id: String },

    #[error("Discarded response for request #{ticket}; request #{latest} was issued after it")]
    StaleResponse { ticket: u64, latest: u64 },

    #[error("Project store request failed: {0}")]
    Transport(String),
}

impl From<serde_json::Error> for PersistenceError {
    fn from(e: serde_json::Error) -> Self {
        PersistenceError::Json(e.to_string())
    }
}

/// Errors that can occur while loading a workspace configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Could not read configuration file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
