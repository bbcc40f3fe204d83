use service_core::observability::init_tracing;
use translation_service::config::TranslationConfig;
use translation_service::startup::Application;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = TranslationConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let otlp_endpoint =
        std::env::var("OTLP_ENDPOINT").unwrap_or_else(|_| "http://tempo:4317".to_string());
    init_tracing("translation-service", &config.common.log_level, &otlp_endpoint);

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
