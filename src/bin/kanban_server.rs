//! HTTP server exposing the AI task-generation proxy.
//!
//! Configuration is read from the environment, see [`kanban::config`].
//! Run with `cargo run --bin kanban-server`.

use std::sync::Arc;

use kanban::config::AppConfig;
use kanban::server::{ApiState, router};
use kanban::suggestion::adapters::GeminiClient;
use kanban::suggestion::ports::GenerationClient;
use kanban::suggestion::services::SuggestionPipeline;
use kanban::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init();

    let config = AppConfig::from_env().inspect_err(|err| {
        tracing::error!("invalid configuration: {err}");
    })?;
    let client: Arc<dyn GenerationClient> = Arc::new(GeminiClient::new(config.gemini.clone())?);
    if !client.is_configured() {
        tracing::warn!("GEMINI_API_KEY is not set; generation requests will fail");
    }
    let pipeline = SuggestionPipeline::with_config(client, config.suggestions);
    let app = router(Arc::new(ApiState::new(pipeline)));

    let addr = config.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        model = %config.gemini.model,
        max_suggestions = config.suggestions.max_suggestions,
        "kanban server listening on {addr}"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
