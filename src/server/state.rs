//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::research::ResearchService;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Cloned into every worker; the service's HTTP client pool is shared, not
/// copied.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Research pipeline
    pub service: ResearchService,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Config, service: ResearchService) -> Self {
        Self {
            config: Arc::new(config),
            service,
        }
    }
}
