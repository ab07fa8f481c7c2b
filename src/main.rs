//! ELVIA Concierge HTTP server.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use elvia_concierge::adapters::{
    app_router, MistralConfig, MistralConnector, QrPassportService, SharedSecretVerifier,
    TokioCommitLatency,
};
use elvia_concierge::application::{AssistantSessionAdapter, ConciergeService, PageStateMachine};
use elvia_concierge::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    tracing::info!(
        environment = ?config.server.environment,
        commit_latency_ms = config.commit.latency_ms,
        assistant_configured = config.ai.has_api_key(),
        "Starting ELVIA Concierge"
    );

    let mistral = MistralConfig::default()
        .with_model(config.ai.model.clone())
        .with_base_url(config.ai.base_url.clone())
        .with_temperature(config.ai.temperature)
        .with_timeout(config.ai.timeout());
    let connector = MistralConnector::new(mistral)?;

    let machine = PageStateMachine::new(
        Arc::new(SharedSecretVerifier::new(config.auth.shared_secret.clone())),
        Arc::new(TokioCommitLatency::new(config.commit.latency())),
        Arc::new(QrPassportService::new()),
    );
    let assistant = AssistantSessionAdapter::new(Arc::new(connector));
    let service = ConciergeService::new(machine, assistant)?
        .with_default_credential(config.ai.api_key.clone());

    let app = app_router(Arc::new(service), &config.server.cors_origins_list());

    let addr = config.server.socket_addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind to {}: {}", addr, e);
            return Err(format!("Failed to bind to {}: {}", addr, e).into());
        }
    };

    tracing::info!("Listening on http://{}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        return Err(format!("Server error: {}", e).into());
    }

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.server.log_level.clone().into());

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
