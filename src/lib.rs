//! Lead Qualify — four-stage LLM lead qualification pipeline behind a REST API.

pub mod config;
pub mod error;
pub mod lead;
pub mod llm;
pub mod pipeline;
pub mod scoring;
pub mod server;
