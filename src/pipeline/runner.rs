//! Sequential stage runner with context threading.
//!
//! Stages run strictly in order, one LLM call each. Stage N's prompt carries
//! the verbatim outputs of stages 1..N-1. Any stage failure aborts the whole
//! run — completed stage outputs are discarded, never surfaced, and nothing
//! is retried.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::error::PipelineError;
use crate::llm::provider::{ChatMessage, CompletionRequest, LlmProvider};
use crate::pipeline::types::{QualificationReport, StageOutput, StageSpec};

/// Temperature for stage calls (deterministic-ish).
const STAGE_TEMPERATURE: f32 = 0.3;

/// Max tokens per stage response.
const STAGE_MAX_TOKENS: u32 = 1024;

/// Runs stage specs through the LLM, threading context between them.
///
/// A fresh `Pipeline` is cheap to build per request; it holds no state
/// beyond the provider handle.
pub struct Pipeline {
    llm: Arc<dyn LlmProvider>,
}

impl Pipeline {
    pub fn new(llm: Arc<dyn LlmProvider>) -> Self {
        Self { llm }
    }

    /// Run all stages in order and return the full report.
    pub async fn run(&self, stages: &[StageSpec]) -> Result<QualificationReport, PipelineError> {
        if stages.is_empty() {
            return Err(PipelineError::NoStages);
        }

        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        let mut transcript: Vec<StageOutput> = Vec::with_capacity(stages.len());

        info!(
            run_id = %run_id,
            stages = stages.len(),
            model = self.llm.model_name(),
            "Starting qualification run"
        );

        for spec in stages {
            info!(run_id = %run_id, stage = spec.kind.label(), "Running stage");

            let system = format!("You are: {}.\nYour goal: {}", spec.role, spec.goal);
            let user = build_stage_prompt(spec, &transcript);

            let request = CompletionRequest::new(vec![
                ChatMessage::system(system),
                ChatMessage::user(user),
            ])
            .with_temperature(STAGE_TEMPERATURE)
            .with_max_tokens(STAGE_MAX_TOKENS);

            let response = self.llm.complete(request).await.map_err(|e| {
                error!(
                    run_id = %run_id,
                    stage = spec.kind.label(),
                    error = %e,
                    "Stage failed, aborting run"
                );
                PipelineError::StageFailed {
                    stage: spec.kind.label().to_string(),
                    source: e,
                }
            })?;

            debug!(
                run_id = %run_id,
                stage = spec.kind.label(),
                chars = response.content.len(),
                "Stage complete"
            );

            transcript.push(StageOutput {
                kind: spec.kind,
                text: response.content,
            });
        }

        // Non-empty: we bailed above if stages was empty.
        let result = transcript
            .last()
            .map(|out| out.text.clone())
            .unwrap_or_default();

        info!(run_id = %run_id, "Qualification run complete");

        Ok(QualificationReport {
            run_id,
            result,
            transcript,
            started_at,
            finished_at: Utc::now(),
        })
    }
}

/// Build the user prompt for one stage: its instructions, expected output,
/// and the literal outputs of every earlier stage (and no others).
fn build_stage_prompt(spec: &StageSpec, prior: &[StageOutput]) -> String {
    let mut prompt = spec.instructions.clone();
    prompt.push_str("\n\nExpected output: ");
    prompt.push_str(&spec.expected_output);

    if !prior.is_empty() {
        prompt.push_str("\n\nContext from previous stages:");
        for output in prior {
            prompt.push_str(&format!("\n\n--- {} ---\n{}", output.kind.label(), output.text));
        }
    }

    prompt
}
