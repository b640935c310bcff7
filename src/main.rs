use oasis_qa_service::config::AppConfig;
use oasis_qa_service::observability::init_tracing;
use oasis_qa_service::startup::Application;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("info");

    let config = AppConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        anyhow::anyhow!("Startup error: {}", e)
    })?;

    app.run_until_stopped().await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
