use super::PhaseType;
use serde::{Deserialize, Serialize};

/// Records which phases the processing service has completed successfully.
///
/// A flag is only ever set by a successful processing report, never by
/// placing a node or drawing a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseCompletionStatus {
    pub source: bool,
    pub lexer: bool,
    pub parser: bool,
    pub analyser: bool,
    pub translator: bool,
}

impl PhaseCompletionStatus {
    /// Returns the flag for `phase`. The optimiser has no flag and always reads `false`.
    pub fn is_completed(&self, phase: PhaseType) -> bool {
        match phase {
            PhaseType::Source => self.source,
            PhaseType::Lexer => self.lexer,
            PhaseType::Parser => self.parser,
            PhaseType::Analyser => self.analyser,
            PhaseType::Translator => self.translator,
            PhaseType::Optimiser => false,
        }
    }

    /// Sets the flag for `phase`, returning `false` when the phase has no flag.
    pub fn set(&mut self, phase: PhaseType, completed: bool) -> bool {
        let slot = match phase {
            PhaseType::Source => &mut self.source,
            PhaseType::Lexer => &mut self.lexer,
            PhaseType::Parser => &mut self.parser,
            PhaseType::Analyser => &mut self.analyser,
            PhaseType::Translator => &mut self.translator,
            PhaseType::Optimiser => return false,
        };
        *slot = completed;
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn completed_phases(&self) -> Vec<PhaseType> {
        PhaseType::ORDER
            .into_iter()
            .filter(|p| self.is_completed(*p))
            .collect()
    }
}
