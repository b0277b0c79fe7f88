//! Research Assistant gateway
//!
//! HTTP front end for the summarize/suggest pipeline.

use clap::Parser;
use research_assistant::config::{Config, DEFAULT_CONFIG_PATH, EnvOverrides};
use research_assistant::server;
use research_assistant::utils::logging::init_tracing;
use std::process::ExitCode;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "research-gateway", version, about = "Research Assistant HTTP gateway")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "RESEARCH_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Override the bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut overrides = EnvOverrides::from_process();
    if let Some(host) = &cli.host {
        overrides.set("RESEARCH_HOST", host.clone());
    }
    if let Some(port) = cli.port {
        overrides.set("RESEARCH_PORT", port.to_string());
    }

    let config = match Config::load(&cli.config, &overrides).await {
        Ok(config) => config,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(config.logging());

    match server::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Gateway stopped with error: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
