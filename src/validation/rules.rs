use crate::model::PhaseType;
use ahash::AHashMap;
use itertools::Itertools;

/// The phase that must be placed, connected and completed before `phase` opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    pub phase: PhaseType,
    pub predecessor: PhaseType,
}

/// Lookup of each phase's required predecessor.
///
/// Main-line phases require the phase right before them; the optimiser
/// branch requires whichever phase it is configured to hang off.
#[derive(Debug, Clone)]
pub struct RequirementTable {
    predecessors: AHashMap<PhaseType, PhaseType>,
}

impl RequirementTable {
    pub fn new(optimiser_prerequisite: PhaseType) -> Self {
        let mut predecessors: AHashMap<PhaseType, PhaseType> = PhaseType::ORDER
            .into_iter()
            .tuple_windows()
            .map(|(before, after)| (after, before))
            .collect();
        predecessors.insert(PhaseType::Optimiser, optimiser_prerequisite);
        Self { predecessors }
    }

    /// `None` means the phase has no prerequisites.
    pub fn requirement(&self, phase: PhaseType) -> Option<Requirement> {
        self.predecessors
            .get(&phase)
            .map(|&predecessor| Requirement { phase, predecessor })
    }
}

impl Default for RequirementTable {
    fn default() -> Self {
        Self::new(PhaseType::Translator)
    }
}
