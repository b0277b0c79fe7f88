//! One-shot research CLI
//!
//! Runs a single summarize/suggest request and prints the result.

use clap::Parser;
use research_assistant::config::{Config, DEFAULT_CONFIG_PATH, EnvOverrides};
use research_assistant::utils::logging::init_tracing;
use research_assistant::{ResearchRequest, ResearchService};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "research-cli", version, about = "Summarize text or suggest further reading")]
struct Cli {
    /// Operation to run (`summarize` or `suggest`)
    operation: String,

    /// Text to process
    #[arg(short, long, conflicts_with = "file")]
    text: Option<String>,

    /// Read the text from a file; stdin is used when neither is given
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Path to the YAML configuration file
    #[arg(short, long, env = "RESEARCH_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: String,
}

fn read_content(cli: &Cli) -> std::io::Result<String> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }
    if let Some(path) = &cli.file {
        return std::fs::read_to_string(path);
    }
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match Config::load(&cli.config, &EnvOverrides::from_process()).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(config.logging());

    let content = match read_content(&cli) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error: failed to read input: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let service = match ResearchService::from_settings(config.gemini()) {
        Ok(service) => service,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let request = ResearchRequest::new(cli.operation, content);
    match service.process_content(&request).await {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
