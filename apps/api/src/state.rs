use std::sync::Arc;

use crate::companion::session::SessionStore;
use crate::llm_client::LanguageModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// Live model. `None` (no API key, or TEST_MODE) means canned replies only.
    pub model: Option<Arc<dyn LanguageModel>>,
}
