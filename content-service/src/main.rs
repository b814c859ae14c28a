use content_service::config::ContentConfig;
use content_service::services::metrics::init_metrics;
use content_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = ContentConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_tracing(
        "content-service",
        &config.observability.log_level,
        config.observability.otlp_endpoint.as_deref(),
    );

    if let Err(e) = init_metrics() {
        tracing::warn!("Metrics exporter disabled: {}", e);
    }

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
