use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use agrilingo::application::services::{AnalysisPipeline, ProviderGateway};
use agrilingo::infrastructure::observability::{TracingConfig, init_tracing};
use agrilingo::infrastructure::vulavula::VulavulaClient;
use agrilingo::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(
        TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    );

    match settings.provider.api_token.as_deref() {
        Some(token) => tracing::info!(token_length = token.len(), "Lelapa.ai API token loaded"),
        None => tracing::error!(
            "Lelapa.ai API token not found; analysis endpoints will answer 503 until it is configured"
        ),
    }

    let client = Arc::new(VulavulaClient::from_settings(&settings.provider)?);
    let gateway = ProviderGateway::new(client, settings.pipeline.retry_policy());
    let pipeline = Arc::new(AnalysisPipeline::new(gateway, settings.pipeline.timeouts()));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    let router = create_router(AppState::new(pipeline, settings));

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
