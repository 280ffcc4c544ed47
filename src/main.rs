//! # Main Entry Point
//!
//! Initializes the application:
//! - Domain: Configuration and Types
//! - Infrastructure: Stdio console
//! - Application: Strategy tables, Wizard state, Router, Export, Logging
//! - Interface: Command Handlers
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::application::export::ExportFormat;
use crate::domain::config::AppConfig;
use crate::infrastructure::console::StdioConsole;
use crate::interface::commands::{generate, wizard};
use crate::strings::logs;

#[derive(Parser, Debug)]
#[command(name = "gtm-wizard", version, about = "Go-to-market strategy questionnaire")]
struct Cli {
    /// Path to a YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory exported strategies are written to
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    /// Fail on answers that match no lookup row instead of using defaults
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Answer the questionnaire interactively (default)
    Wizard,
    /// Generate a strategy from a YAML answers file
    Generate {
        #[arg(short, long)]
        answers: PathBuf,

        #[arg(long, value_enum, default_value = "text")]
        format: ExportFormat,

        /// Print the document instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
    /// List the accepted value for every option field
    Options,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load Configuration
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(dir) = cli.output_dir {
        config.export.directory = dir;
    }
    if cli.strict {
        config.lookups.strict = true;
    }

    // 2. Logging Setup
    let _guard = application::logging::init(&config.logging)?;
    tracing::info!("{}", logs::STARTUP);

    // 3. Dispatch
    match cli.command.unwrap_or(Commands::Wizard) {
        Commands::Wizard => {
            let console = StdioConsole::new();
            wizard::run(&config, &console).await?;
        }
        Commands::Generate {
            answers,
            format,
            stdout,
        } => {
            let output = generate::handle_generate(&config, &answers, format, stdout)?;
            println!("{output}");
        }
        Commands::Options => println!("{}", strings::help::options_text()),
    }

    Ok(())
}
