//! # StartupView - Startup and investor directory
//!
//! Entry point: parses the command line, loads configuration, wires the
//! document store into the directory and runs the requested command.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - Dependency Injection & Wiring           │
//! │    │                                                            │
//! │    ├── Loads:   AppConfig (config.rs)                           │
//! │    ├── Creates: ConfiguredStore (adapter: fixture / Firestore)  │
//! │    ├── Creates: Directory (use case)                            │
//! │    └── Runs:    serve | one-shot command | browse REPL          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Usage:
//!   startupview --fixture demos/directory.yaml browse
//!   startupview --config startupview.yaml serve --bind 0.0.0.0:3000
//!   startupview --fixture demos/directory.yaml investor v1 --json

mod commands;
mod config;
mod interactive;
mod render;

use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use startupview_adapter::controller;
use startupview_domain::{IndustryId, InvestorId, StartupId};
use startupview_usecase::Directory;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::commands::OutputFormat;
use crate::config::AppConfig;
use crate::interactive::Browser;

#[derive(Parser)]
#[command(name = "startupview")]
#[command(about = "StartupView - Browse startups, their investors and industries")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (JSON or YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Serve documents from a fixture file instead of the configured store
    #[arg(long, global = true)]
    fixture: Option<PathBuf>,

    /// Output views as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the views over HTTP
    Serve {
        /// Address to bind, overriding the configuration
        #[arg(short, long)]
        bind: Option<SocketAddr>,
    },
    /// List startups
    Startups {
        /// Only startups of this industry id
        #[arg(short, long)]
        industry: Option<String>,
    },
    /// Show one startup
    Startup { id: String },
    /// List investors
    Investors,
    /// Show one investor with its investments
    Investor { id: String },
    /// List industries
    Industries,
    /// Browse interactively
    Browse,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };

    // RUST_LOG wins over the configured level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let store = config::build_store(config.store.as_ref(), cli.fixture.as_deref())?;
    info!(store = store.kind(), "document store ready");
    let directory = Directory::new(Arc::new(store));

    let format = OutputFormat::from_json_flag(cli.json);
    let mut out = io::stdout();
    let loaded = match cli.command {
        Commands::Serve { bind } => {
            let addr = bind.unwrap_or(config.server.bind);
            controller::serve(directory, addr)
                .await
                .with_context(|| format!("serving on {}", addr))?;
            true
        }
        Commands::Startups { industry } => {
            let industry = industry.filter(|id| !id.is_empty()).map(IndustryId::new);
            commands::startups(&directory, industry, format, &mut out).await?
        }
        Commands::Startup { id } => {
            commands::startup(&directory, StartupId::new(id), format, &mut out).await?
        }
        Commands::Investors => commands::investors(&directory, format, &mut out).await?,
        Commands::Investor { id } => {
            commands::investor(&directory, InvestorId::new(id), format, &mut out).await?
        }
        Commands::Industries => commands::industries(&directory, format, &mut out).await?,
        Commands::Browse => {
            Browser::new(directory).run().await?;
            true
        }
    };

    Ok(if loaded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
