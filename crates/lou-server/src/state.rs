use lou::providers::base::Provider;
use std::sync::Arc;

/// Shared application state
///
/// Holds nothing mutable; requests only share the provider's connection pool.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn Provider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self { provider }
    }
}
