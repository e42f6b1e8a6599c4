use crate::error::GraphError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One stage of the compiler pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseType {
    Source,
    Lexer,
    Parser,
    Analyser,
    Translator,
    Optimiser,
}

/// Display names for the known phase types.
const LABELS: &[(&str, &str)] = &[
    ("source", "Source Code"),
    ("lexer", "Lexer"),
    ("parser", "Parser"),
    ("analyser", "Analyser"),
    ("translator", "Translator"),
    ("optimiser", "Optimiser"),
];

impl PhaseType {
    /// The main line of the pipeline, in processing order.
    pub const ORDER: [PhaseType; 5] = [
        PhaseType::Source,
        PhaseType::Lexer,
        PhaseType::Parser,
        PhaseType::Analyser,
        PhaseType::Translator,
    ];

    /// Every phase type a node can have, including the optimiser branch.
    pub const ALL: [PhaseType; 6] = [
        PhaseType::Source,
        PhaseType::Lexer,
        PhaseType::Parser,
        PhaseType::Analyser,
        PhaseType::Translator,
        PhaseType::Optimiser,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseType::Source => "source",
            PhaseType::Lexer => "lexer",
            PhaseType::Parser => "parser",
            PhaseType::Analyser => "analyser",
            PhaseType::Translator => "translator",
            PhaseType::Optimiser => "optimiser",
        }
    }

    pub fn label(&self) -> String {
        display_label(self.as_str())
    }

    /// The phase immediately before this one on the main line.
    ///
    /// Returns `None` for `source` and for the `optimiser` branch, whose
    /// prerequisite is configurable.
    pub fn predecessor(&self) -> Option<PhaseType> {
        let index = Self::ORDER.iter().position(|p| p == self)?;
        index.checked_sub(1).map(|i| Self::ORDER[i])
    }
}

impl fmt::Display for PhaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhaseType {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PhaseType::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| GraphError::UnknownPhase(s.to_string()))
    }
}

/// Looks up the display name for a node type, capitalizing the type name
/// when it is not in the table.
pub fn display_label(type_name: &str) -> String {
    if let Some((_, label)) = LABELS.iter().find(|(name, _)| *name == type_name) {
        return (*label).to_string();
    }
    let mut chars = type_name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
