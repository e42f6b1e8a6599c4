use super::Workspace;
use crate::canvas::{ClickDisambiguator, ConnectionManager, EndpointParser, PrefixEndpointParser};
use crate::config::WorkspaceConfig;
use crate::layout::LayoutAllocator;
use crate::model::{PhaseCompletionStatus, PipelineState};
use crate::persistence::{DirtyTracker, RequestSequencer};
use crate::validation::PrerequisiteValidator;

pub struct WorkspaceBuilder {
    config: WorkspaceConfig,
    parser: Option<Box<dyn EndpointParser>>,
}

impl WorkspaceBuilder {
    pub fn new() -> Self {
        Self {
            config: WorkspaceConfig::default(),
            parser: None,
        }
    }

    pub fn with_config(mut self, config: WorkspaceConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the prefix-stripping parser derived from the config.
    pub fn with_endpoint_parser(mut self, parser: Box<dyn EndpointParser>) -> Self {
        self.parser = Some(parser);
        self
    }

    pub fn build(self) -> Workspace {
        let config = self.config;
        let parser = self.parser.unwrap_or_else(|| {
            Box::new(PrefixEndpointParser::new(config.endpoint_prefix.clone()))
        });
        Workspace {
            state: PipelineState::new(),
            status: PhaseCompletionStatus::default(),
            layout: LayoutAllocator::new(config.layout),
            clicks: ClickDisambiguator::new(config.click_threshold_ms),
            connections: ConnectionManager::new(parser),
            validator: PrerequisiteValidator::new(config.optimiser_prerequisite),
            tracker: DirtyTracker::default(),
            loads: RequestSequencer::new(config.sequencing),
            saves: RequestSequencer::new(config.sequencing),
            notices: Vec::new(),
            project_id: None,
            config,
        }
    }
}

impl Default for WorkspaceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
