mod runner;

use clap::Parser;
use raffle_core::{RaffleConfig, RaffleError, RaffleSession, Storage};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "raffle")]
#[command(about = "Console raffle - timed registration and a random winner draw")]
#[command(version)]
struct Cli {
    /// Data directory for the registrant log and timer state
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "raffle={},raffle_core={}",
            log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get data directory
    let data_dir = cli.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("raffle")
    });

    let storage = Storage::new(&data_dir).await?;
    let session = RaffleSession::open(&storage, RaffleConfig::default(), chrono::Utc::now()).await?;

    if let Err(e) = runner::run(session).await {
        match e {
            RaffleError::Io(e) => {
                eprintln!("Error: file operation failed: {}", e);
            }
            _ => {
                eprintln!("Error: {}", e);
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
