//! Shop assistant server binary

use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use shop_agent_config::{load_settings, StoreProfile, Vocabulary};
use shop_agent_core::{GenerativeModel, HistoryStore};
use shop_agent_engine::{ChatEngine, Collaborators};
use shop_agent_llm::GeminiBackend;
use shop_agent_server::{create_router, AppState};
use shop_agent_store::{
    MemoryCatalog, MemoryFaqStore, MemoryHistory, MemoryOrderStore, MemorySocialLinks,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::var("SHOP_AGENT_CONFIG").ok().map(PathBuf::from);
    let settings = load_settings(config_path.as_deref())?;

    let vocabulary = match std::env::var("SHOP_AGENT_VOCABULARY") {
        Ok(path) => Vocabulary::load(path)?,
        Err(_) => Vocabulary::default(),
    };
    let profile = StoreProfile::default();

    let generative: Arc<dyn GenerativeModel> =
        Arc::new(GeminiBackend::new(settings.generative.clone())?);
    let history: Arc<MemoryHistory> = Arc::new(MemoryHistory::new());

    let collaborators = Collaborators {
        catalog: Arc::new(MemoryCatalog::with_demo_data()),
        faqs: Arc::new(MemoryFaqStore::with_demo_data()),
        social: Arc::new(MemorySocialLinks::with_demo_data()),
        orders: Arc::new(MemoryOrderStore::new()),
        history: history.clone(),
        generative,
    };

    let engine = Arc::new(ChatEngine::new(
        collaborators,
        &vocabulary,
        profile,
        settings.engine.clone(),
    ));

    let state = AppState::new(engine, history as Arc<dyn HistoryStore>);
    let router = create_router(state, &settings.server.cors_origins);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    tracing::info!(%addr, "shop assistant listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
