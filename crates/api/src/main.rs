use std::sync::Arc;

use anyhow::Context;

use pasieka_api::AppContext;
use pasieka_assistant::OpenAiAssistant;
use pasieka_infra::ingest::{sheet::workbook_from_json, snapshot_from_json};
use pasieka_infra::{AppConfig, EntityStore, InMemoryEntityStore, SheetEntityStore, StoreBackend};

fn build_store(config: &AppConfig) -> anyhow::Result<Arc<dyn EntityStore>> {
    let seed = match &config.seed_file {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read seed file {}", path.display()))?,
        ),
        None => None,
    };

    let store: Arc<dyn EntityStore> = match (config.store, seed) {
        (StoreBackend::Memory, None) => Arc::new(InMemoryEntityStore::new()),
        (StoreBackend::Memory, Some(json)) => Arc::new(InMemoryEntityStore::from_snapshot(
            snapshot_from_json(&json).context("invalid seed document")?,
        )),
        (StoreBackend::Sheet, None) => Arc::new(SheetEntityStore::new()),
        (StoreBackend::Sheet, Some(json)) => Arc::new(SheetEntityStore::from_workbook(
            workbook_from_json(&json).context("invalid seed workbook")?,
        )),
    };
    Ok(store)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    pasieka_observability::init(config.log_format);

    let store = build_store(&config)?;
    let settings = &config.assistant;
    if settings.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY not set; /ask-ai will answer 500");
    }
    let assistant = Arc::new(OpenAiAssistant::new(
        settings.api_key.clone(),
        settings.model.clone(),
        settings.base_url.clone(),
    ));

    let ctx = AppContext::new(store, assistant, config.dashboard.clone());
    let app = pasieka_api::build_app(ctx);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(addr = %listener.local_addr()?, store = ?config.store, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}
