//! Shared types for the qualification pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The four pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    /// Parse/structure the raw submission into contact and company facts.
    Extract,
    /// Infer company attributes (industry, size, location).
    Enrich,
    /// Score the lead against the target criteria rubric.
    Score,
    /// Produce an actionable recommendation.
    Recommend,
}

impl StageKind {
    /// Fixed execution order. Transitions are unconditional and forward-only.
    pub const ALL: [StageKind; 4] = [Self::Extract, Self::Enrich, Self::Score, Self::Recommend];

    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Extract => "extract",
            Self::Enrich => "enrich",
            Self::Score => "score",
            Self::Recommend => "recommend",
        }
    }
}

/// One stage of the pipeline — a single LLM call.
///
/// `role` and `goal` describe the agent persona (system prompt);
/// `instructions` is the task itself (user prompt).
#[derive(Debug, Clone)]
pub struct StageSpec {
    pub kind: StageKind,
    pub role: String,
    pub goal: String,
    pub instructions: String,
    pub expected_output: String,
}

/// Raw text output of a completed stage.
///
/// Contractually unstructured: prompts request a JSON-like shape, but nothing
/// downstream parses or validates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageOutput {
    pub kind: StageKind,
    pub text: String,
}

/// Result of a complete pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualificationReport {
    pub run_id: Uuid,
    /// The final stage's output, verbatim — the one thing shown to the user.
    pub result: String,
    /// All stage outputs in execution order.
    pub transcript: Vec<StageOutput>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_order_is_fixed() {
        assert_eq!(
            StageKind::ALL,
            [
                StageKind::Extract,
                StageKind::Enrich,
                StageKind::Score,
                StageKind::Recommend
            ]
        );
    }

    #[test]
    fn stage_labels() {
        assert_eq!(StageKind::Extract.label(), "extract");
        assert_eq!(StageKind::Recommend.label(), "recommend");
    }

    #[test]
    fn stage_kind_serializes_snake_case() {
        let json = serde_json::to_value(StageKind::Enrich).unwrap();
        assert_eq!(json, "enrich");
    }
}
