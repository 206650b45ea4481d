use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::GenerationService;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; every request owns its own inputs.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable generation backend. Default: GeminiClient.
    pub generator: Arc<dyn GenerationService>,
}
