use crate::config::DEFAULT_ENDPOINT_PREFIX;
use crate::error::ConnectionError;
use crate::model::Position;
use serde::{Deserialize, Serialize};

/// A raw event reported by the drawing surface.
///
/// Endpoint ids in `connect`/`disconnect` carry the surface's own prefix and
/// must go through an [`EndpointParser`] before they name a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CanvasEvent {
    #[serde(rename_all = "camelCase")]
    Click { node_id: String, time: u64 },

    #[serde(rename_all = "camelCase")]
    Connect {
        source_raw: String,
        target_raw: String,
        #[serde(default)]
        source_anchor: String,
        #[serde(default)]
        target_anchor: String,
    },

    #[serde(rename_all = "camelCase")]
    Disconnect {
        source_raw: String,
        target_raw: String,
    },

    #[serde(rename_all = "camelCase")]
    Drag { node_id: String, position: Position },
}

/// Recovers a logical node id from a drawing-surface endpoint id.
pub trait EndpointParser: Send + Sync {
    fn parse_endpoint(&self, raw: &str) -> Result<String, ConnectionError>;
}

/// Strips a fixed prefix (`N-source-1` -> `source-1`). Ids without the prefix
/// pass through unchanged.
#[derive(Debug, Clone)]
pub struct PrefixEndpointParser {
    prefix: String,
}

impl PrefixEndpointParser {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for PrefixEndpointParser {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT_PREFIX)
    }
}

impl EndpointParser for PrefixEndpointParser {
    fn parse_endpoint(&self, raw: &str) -> Result<String, ConnectionError> {
        let trimmed = raw.trim();
        let id = trimmed.strip_prefix(self.prefix.as_str()).unwrap_or(trimmed);
        if id.is_empty() {
            return Err(ConnectionError::MalformedEndpoint {
                raw: raw.to_string(),
            });
        }
        Ok(id.to_string())
    }
}
