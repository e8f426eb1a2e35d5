//! REST endpoints for submitting leads.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::config::QualifierConfig;
use crate::error::ValidationError;
use crate::lead::{EmailLead, FormLead};
use crate::llm::provider::LlmProvider;
use crate::pipeline::{Pipeline, StageSpec, email_stages, form_stages};

/// Application state shared across handlers.
///
/// Stage specs are built fresh per request — nothing here is mutated.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn LlmProvider>,
    pub config: Arc<QualifierConfig>,
}

/// Build the Axum router with lead submission and health routes.
pub fn lead_routes(llm: Arc<dyn LlmProvider>, config: Arc<QualifierConfig>) -> Router {
    let state = AppState { llm, config };

    Router::new()
        .route("/health", get(health))
        .route("/api/leads/email", post(qualify_email))
        .route("/api/leads/form", post(qualify_form))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ── Health ──────────────────────────────────────────────────────────────

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "lead-qualify"
    }))
}

// ── Lead submission ─────────────────────────────────────────────────────

async fn qualify_email(State(state): State<AppState>, Json(lead): Json<EmailLead>) -> Response {
    if let Err(e) = lead.validate() {
        return validation_response(e);
    }
    info!(sender = %lead.sender_email, "Email lead submitted");
    let stages = email_stages(&lead, &state.config.target);
    run_pipeline(&state, stages).await
}

async fn qualify_form(State(state): State<AppState>, Json(lead): Json<FormLead>) -> Response {
    if let Err(e) = lead.validate() {
        return validation_response(e);
    }
    info!(email = %lead.email, company = %lead.company, "Form lead submitted");
    let stages = form_stages(&lead, &state.config.target);
    run_pipeline(&state, stages).await
}

/// Run the pipeline and map the outcome to an HTTP response.
///
/// Success returns the final stage's text verbatim plus the transcript.
/// Any stage failure maps to a single 500 — no partial results.
async fn run_pipeline(state: &AppState, stages: Vec<StageSpec>) -> Response {
    let pipeline = Pipeline::new(Arc::clone(&state.llm));
    match pipeline.run(&stages).await {
        Ok(report) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "run_id": report.run_id,
                "result": report.result,
                "transcript": report.transcript,
            })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Qualification run failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": format!("Lead qualification failed: {e}"),
                })),
            )
                .into_response()
        }
    }
}

/// 422 with the offending field named structurally, plus the full message.
fn validation_response(e: ValidationError) -> Response {
    let field = match &e {
        ValidationError::MissingField { field } => field,
        ValidationError::InvalidEmail { field, .. } => field,
    };
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(serde_json::json!({
            "field": field,
            "error": e.to_string(),
        })),
    )
        .into_response()
}
