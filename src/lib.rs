//! # Research Assistant
//!
//! Turns research requests into Gemini prompts and returns the generated text.
//!
//! A request names an operation and carries some text:
//!
//! - `summarize` asks the model for a short summary;
//! - `suggest` asks for related topics and further reading.
//!
//! The crate can be used as a library, served over HTTP by the
//! `research-gateway` binary, or driven from the shell with `research-cli`.
//!
//! ## Library use
//!
//! ```rust,no_run
//! use research_assistant::{GeminiSettings, ResearchRequest, ResearchService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = GeminiSettings::new(
//!         "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent?key=",
//!         std::env::var("GEMINI_API_KEY")?,
//!     );
//!     let service = ResearchService::from_settings(&settings)?;
//!
//!     let request = ResearchRequest::new("summarize", "Cats are mammals.");
//!     println!("{}", service.process_content(&request).await?);
//!     Ok(())
//! }
//! ```
//!
//! ## Gateway mode
//!
//! ```rust,no_run
//! use research_assistant::{Config, Gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/research.yaml").await?;
//!     Gateway::new(config)?.run().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::{Config, GeminiSettings, KeyPlacement};
pub use utils::error::{GatewayError, Result};

pub use core::research::{
    Extraction, GeminiClient, InferenceBackend, Operation, ResearchError, ResearchRequest,
    ResearchResult, ResearchService, build_prompt, extract_text,
};

use tracing::info;

/// The research gateway: configuration plus HTTP server
pub struct Gateway {
    config: Config,
    server: server::HttpServer,
}

impl Gateway {
    /// Create a new gateway instance
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating new gateway instance");

        let server = server::HttpServer::new(&config)?;

        Ok(Self { config, server })
    }

    /// Run the gateway server
    pub async fn run(self) -> Result<()> {
        info!("Starting Research Assistant gateway");
        info!("Configuration: {:#?}", self.config);

        self.server.start().await
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Gateway build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
            rust_version: env!("RUST_VERSION"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
