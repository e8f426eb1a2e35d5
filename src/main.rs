use std::sync::Arc;

use lead_qualify::config::QualifierConfig;
use lead_qualify::error::Result;
use lead_qualify::llm::{LlmBackend, LlmConfig, create_provider, credential_from_env};
use lead_qualify::server::lead_routes;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // Credential is a fatal precondition — no requests are served without it.
    let (backend, api_key) = credential_from_env().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("  export OPENAI_API_KEY=sk-...");
        eprintln!("  (or ANTHROPIC_API_KEY=sk-ant-... for the Anthropic backend)");
        std::process::exit(1);
    });

    let config = QualifierConfig::from_env();

    eprintln!("🎯 Lead Qualify v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Model: {}", config.model);
    eprintln!(
        "   Backend: {}",
        match backend {
            LlmBackend::OpenAi => "openai",
            LlmBackend::Anthropic => "anthropic",
        }
    );
    eprintln!("   Target industries: {}", config.target.industries.join(", "));
    eprintln!("   Target sizes: {}", config.target.company_sizes.join(", "));
    eprintln!("   Target regions: {}", config.target.regions.join(", "));
    eprintln!("   API: http://0.0.0.0:{}/api/leads/{{email,form}}", config.port);

    let llm = create_provider(&LlmConfig {
        backend,
        api_key,
        model: config.model.clone(),
    })?;

    let port = config.port;
    let app = lead_routes(llm, Arc::new(config));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    tracing::info!(port, "Lead qualification server started");
    axum::serve(listener, app).await?;

    Ok(())
}
