use super::document::PipelineDocument;
use crate::model::PhaseCompletionStatus;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A project as returned by the store: the pipeline plus whatever each phase
/// produced when it last ran.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub pipeline: PipelineDocument,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_tree: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_table: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translated_code: Option<String>,
}

impl ProjectDocument {
    pub fn new(id: impl Into<String>, pipeline: PipelineDocument) -> Self {
        Self {
            id: Some(id.into()),
            pipeline,
            ..Self::default()
        }
    }

    /// Completion as recorded in the pipeline, or inferred from artifacts
    /// when the pipeline predates explicit recording.
    pub fn completion_status(&self) -> PhaseCompletionStatus {
        self.pipeline
            .completion_status
            .unwrap_or_else(|| self.inferred_completion())
    }

    /// Treats each non-empty artifact as proof that its phase ran.
    ///
    /// An empty-but-valid result (no tokens, say) reads as "not completed".
    pub fn inferred_completion(&self) -> PhaseCompletionStatus {
        PhaseCompletionStatus {
            source: has_text(&self.source_code),
            lexer: self.tokens.as_ref().is_some_and(|t| !t.is_empty()),
            parser: has_value(&self.parse_tree),
            analyser: has_value(&self.symbol_table),
            translator: has_text(&self.translated_code),
        }
    }
}

fn has_text(text: &Option<String>) -> bool {
    text.as_deref().is_some_and(|t| !t.trim().is_empty())
}

fn has_value(value: &Option<Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(fields)) => !fields.is_empty(),
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}
