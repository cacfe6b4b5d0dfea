//! Shared application state

use std::sync::Arc;

use shop_agent_core::HistoryStore;
use shop_agent_engine::ChatEngine;

/// State shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ChatEngine>,
    /// The same history store the engine appends to; exposed for the
    /// history list/delete endpoints
    pub history: Arc<dyn HistoryStore>,
}

impl AppState {
    pub fn new(engine: Arc<ChatEngine>, history: Arc<dyn HistoryStore>) -> Self {
        Self { engine, history }
    }
}
