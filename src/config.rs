use crate::error::ConfigError;
use crate::model::PhaseType;
use serde::{Deserialize, Serialize};
use std::fs;

/// Default window, in milliseconds, within which two clicks on the same node select it.
pub const DEFAULT_CLICK_THRESHOLD_MS: u64 = 300;

/// Default prefix the drawing surface puts in front of node ids.
pub const DEFAULT_ENDPOINT_PREFIX: &str = "N-";

/// Placement of newly created nodes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub origin_x: f64,
    pub origin_y: f64,
    pub spacing_x: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            origin_x: 100.0,
            origin_y: 150.0,
            spacing_x: 250.0,
        }
    }
}

/// How completions of overlapping load/save requests are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sequencing {
    /// Every completion is applied; whichever resolves last wins.
    #[default]
    LastWriterWins,
    /// Completions of requests superseded by a newer one are discarded.
    Tokens,
}

/// Tunables for a [`Workspace`](crate::workspace::Workspace).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkspaceConfig {
    pub click_threshold_ms: u64,
    pub layout: LayoutConfig,
    pub endpoint_prefix: String,
    pub optimiser_prerequisite: PhaseType,
    pub sequencing: Sequencing,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            click_threshold_ms: DEFAULT_CLICK_THRESHOLD_MS,
            layout: LayoutConfig::default(),
            endpoint_prefix: DEFAULT_ENDPOINT_PREFIX.to_string(),
            optimiser_prerequisite: PhaseType::Translator,
            sequencing: Sequencing::default(),
        }
    }
}

impl WorkspaceConfig {
    /// Load a configuration from a JSON file. Missing keys take their defaults.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.click_threshold_ms == 0 {
            return Err(ConfigError::Invalid(
                "clickThresholdMs must be greater than zero".to_string(),
            ));
        }
        if self.layout.spacing_x.is_nan() || self.layout.spacing_x <= 0.0 {
            return Err(ConfigError::Invalid(
                "layout.spacingX must be greater than zero".to_string(),
            ));
        }
        if self.optimiser_prerequisite == PhaseType::Optimiser {
            return Err(ConfigError::Invalid(
                "the optimiser cannot be its own prerequisite".to_string(),
            ));
        }
        Ok(())
    }
}
