use std::sync::Arc;

use crate::config::Config;
use crate::services::providers::RecommendationProvider;

/// Shared application state: immutable config plus the generation provider.
/// No mutable state is held across requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub provider: Arc<dyn RecommendationProvider>,
}

impl AppState {
    pub fn new(config: Config, provider: Arc<dyn RecommendationProvider>) -> Self {
        Self {
            config: Arc::new(config),
            provider,
        }
    }
}
