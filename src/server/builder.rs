//! Server builder and run_server function

use crate::config::Config;
use crate::core::research::ResearchService;
use crate::server::server::HttpServer;
use crate::utils::error::{GatewayError, Result};
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    service: Option<ResearchService>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a prebuilt service instead of one created from the Gemini settings
    pub fn with_service(mut self, service: ResearchService) -> Self {
        self.service = Some(service);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| GatewayError::Config("Configuration is required".to_string()))?;

        match self.service {
            Some(service) => Ok(HttpServer::with_service(&config, service)),
            None => HttpServer::new(&config),
        }
    }
}

/// Run the server with an already loaded configuration
pub async fn run_server(config: Config) -> Result<()> {
    info!("🚀 Starting Research Assistant gateway");

    let server = ServerBuilder::new().with_config(config.clone()).build()?;

    info!(
        "🌐 Server starting at: http://{}:{}",
        config.server().host,
        config.server().port
    );
    info!("📋 API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   POST /api/research/process - Summarize or suggest");
    info!(
        "🔑 Gemini key placement: {}",
        config.gemini().key_placement
    );

    server.start().await
}
