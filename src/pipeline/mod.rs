//! Four-stage lead qualification pipeline.
//!
//! Extract → Enrich → Score → Recommend, strictly sequential. Each stage is
//! one LLM call; later stages receive the verbatim text outputs of all
//! earlier stages as context.

pub mod adapters;
pub mod runner;
pub mod types;

pub use adapters::{email_stages, form_stages};
pub use runner::Pipeline;
pub use types::{QualificationReport, StageKind, StageOutput, StageSpec};
