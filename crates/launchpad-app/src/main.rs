//! # Launchpad - Rocket registry with launch codes
//!
//! This is the main entry point that wires everything together.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - Dependency Injection & Wiring           │
//! │    │                                                            │
//! │    ├── Creates: InMemoryRocketRepository (adapter)             │
//! │    ├── Creates: RandomLaunchCodeGenerator (adapter)            │
//! │    ├── Creates: RocketService (use case)                       │
//! │    └── Serves:  RocketController responses as JSON on stdout   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Usage:
//!   launchpad                       - Create the configured seed rockets and read them back
//!   launchpad create <NAME>...      - Create rockets
//!   launchpad get <ID>              - Look up a rocket
//!   launchpad batch [--count N]     - Create N rockets concurrently

mod batch;
mod commands;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use launchpad_adapter::controller::RocketController;
use launchpad_adapter::generator::RandomLaunchCodeGenerator;
use launchpad_adapter::repository::InMemoryRocketRepository;
use launchpad_usecase::RocketService;
use shared::LaunchpadConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "launchpad")]
#[command(about = "Launchpad - create rockets and hand out launch codes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (.json, .yaml, .yml); falls back to $LAUNCHPAD_CONFIG
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create one rocket per name
    Create {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Look up a rocket by id
    Get { id: String },
    /// Create many rockets concurrently and check their launch codes
    Batch {
        #[arg(short = 'n', long, default_value_t = 100)]
        count: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = LaunchpadConfig::load(cli.config.as_deref())?;

    // Initialize logging. Logs go to stderr, responses to stdout.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // ========================================
    // Dependency Injection - Wire up the system
    // ========================================

    let repository = InMemoryRocketRepository::new();
    let service = RocketService::new(repository.clone(), RandomLaunchCodeGenerator::new());
    let controller = RocketController::new(Arc::new(service));

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Some(Commands::Create { names }) => commands::create(&controller, &names, &mut stdout)?,
        Some(Commands::Get { id }) => commands::get(&controller, &id, &mut stdout)?,
        Some(Commands::Batch { count }) => {
            commands::batch(controller, count, config.batch_workers, &mut stdout).await?;
        }
        None => {
            commands::seed(&controller, &config.seed_rockets, &mut stdout)?;
            info!("   ✓ {} rockets stored", repository.count()?);
        }
    }

    Ok(())
}
