//! Decides whether the user may open a phase's editor.
//!
//! A phase other than `source` opens only when its predecessor has a node on
//! the canvas, a drawn edge runs from that node to the phase's node, and the
//! predecessor has been processed successfully. Topology is re-checked on
//! every attempt: an edge deleted after its phase completed blocks access
//! again.

use crate::error::PrerequisiteError;
use crate::model::{PhaseCompletionStatus, PhaseType, PipelineState};
use tracing::{info, warn};

mod rules;

pub use rules::{Requirement, RequirementTable};

/// Permission to open the editor for `phase`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseGrant {
    pub phase: PhaseType,
    /// The node whose editor to open. `None` only for a `source` phase
    /// with no node on the canvas yet.
    pub node_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PrerequisiteValidator {
    table: RequirementTable,
}

impl PrerequisiteValidator {
    pub fn new(optimiser_prerequisite: PhaseType) -> Self {
        Self {
            table: RequirementTable::new(optimiser_prerequisite),
        }
    }

    /// Checks access to `phase`, short-circuiting on the first failed check.
    ///
    /// Order of checks: predecessor node present, target node present,
    /// predecessor connected to target, predecessor completed.
    pub fn validate(
        &self,
        phase: PhaseType,
        state: &PipelineState,
        status: &PhaseCompletionStatus,
    ) -> Result<PhaseGrant, PrerequisiteError> {
        let target_node = state.find_node_by_type(phase);

        let Some(requirement) = self.table.requirement(phase) else {
            return Ok(PhaseGrant {
                phase,
                node_id: target_node.map(|n| n.id.clone()),
            });
        };

        let result = Self::check(requirement, state, status).and_then(|()| {
            target_node
                .map(|n| PhaseGrant {
                    phase,
                    node_id: Some(n.id.clone()),
                })
                .ok_or(PrerequisiteError::MissingNode { phase })
        });

        match &result {
            Ok(_) => info!(%phase, "phase access granted"),
            Err(e) => warn!(%phase, reason = %e.reason(), "phase access denied: {}", e),
        }
        result
    }

    fn check(
        requirement: Requirement,
        state: &PipelineState,
        status: &PhaseCompletionStatus,
    ) -> Result<(), PrerequisiteError> {
        let Requirement { phase, predecessor } = requirement;

        if state.find_node_by_type(predecessor).is_none() {
            return Err(PrerequisiteError::MissingNode { phase: predecessor });
        }
        if state.find_node_by_type(phase).is_none() {
            return Err(PrerequisiteError::MissingNode { phase });
        }
        if !state.has_physical_connection(predecessor, phase) {
            return Err(PrerequisiteError::NotConnected {
                predecessor,
                target: phase,
            });
        }
        if !status.is_completed(predecessor) {
            return Err(PrerequisiteError::NotCompleted { phase: predecessor });
        }
        Ok(())
    }

    /// Access outcome for every phase, in pipeline order with the optimiser last.
    pub fn access_report(
        &self,
        state: &PipelineState,
        status: &PhaseCompletionStatus,
    ) -> Vec<(PhaseType, Result<PhaseGrant, PrerequisiteError>)> {
        PhaseType::ALL
            .into_iter()
            .map(|phase| (phase, self.validate(phase, state, status)))
            .collect()
    }
}
