//! Haiku generation CLI
//!
//! Generates a 5-7-5 haiku themed on a seed keyword, using Datamuse for
//! related words and their syllable counts.
//!
//! # Usage
//!
//! ```bash
//! # Plain three-line output
//! haiku_cli ocean
//!
//! # Constrain every word to a starting letter
//! haiku_cli ocean --starts-with s
//!
//! # Structured output
//! haiku_cli ocean --format json
//! ```

use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::process::ExitCode;
use std::sync::Arc;

use haiku_gen::datamuse::DatamuseClient;
use haiku_gen::haiku::HaikuGenerator;
use haiku_gen::HaikuError;

const USAGE_HINT: &str = "usage: haiku_cli <keyword> [--starts-with <letter>]";

#[derive(Parser)]
#[command(name = "haiku_cli")]
#[command(version = "0.1.0")]
#[command(about = "Generate a 5-7-5 haiku from a seed keyword")]
struct Cli {
    /// Keyword the poem is themed on
    keyword: String,

    /// Restrict candidate words to this starting letter (only the first
    /// character is used)
    #[arg(long, short)]
    starts_with: Option<String>,

    /// Output format: text or json
    #[arg(long, short = 'o', default_value = "text", value_enum)]
    format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    match run(&cli).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.format == OutputFormat::Json {
                println!(
                    r#"{{"error": "{}"}}"#,
                    e.replace('"', "\\\"").replace('\n', "\\n")
                );
            } else {
                eprintln!("{}: {}", "error".red().bold(), e);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), String> {
    let client = DatamuseClient::new().map_err(|e| e.to_string())?;
    let generator = HaikuGenerator::new(Arc::new(client));
    let starts_with = cli.starts_with.as_deref().and_then(|s| s.chars().next());

    let haiku = generator
        .generate(&cli.keyword, starts_with)
        .await
        .map_err(|e| match e {
            HaikuError::EmptyKeyword => format!("{e}\n{USAGE_HINT}"),
            HaikuError::Starved { .. } => {
                format!("{e}\ntry a more common keyword, or drop --starts-with")
            }
        })?;

    match cli.format {
        OutputFormat::Json => {
            let body = serde_json::to_string_pretty(&haiku).map_err(|e| e.to_string())?;
            println!("{body}");
        }
        OutputFormat::Text => {
            for line in haiku.lines() {
                println!("{line}");
            }
        }
    }

    Ok(())
}
