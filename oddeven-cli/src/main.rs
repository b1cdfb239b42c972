mod commands;
mod config;

use clap::{Parser, Subcommand};
use config::CliConfig;
use oddeven_game::OddEvenError;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "oddeven")]
#[command(about = "Odd/Even CLI 2-player parity game")]
#[command(version)]
struct Cli {
    /// Data directory for game state
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deploy a fresh game with empty records
    Deploy {
        /// Replace an existing game without asking
        #[arg(short, long)]
        force: bool,
    },
    /// Player 1 commits to a parity and a number
    Init {
        /// 1 = even, 2 = odd
        choice: u8,
        /// Number between 1 and 10
        number: u8,
    },
    /// Player 2 plays a number and resolves the game
    Play {
        /// Number between 1 and 10
        number: u8,
    },
    /// Show the current and the last game
    Status,
    /// Play one full round on an in-memory game
    Demo {
        /// Player 1 choice (1 = even, 2 = odd)
        #[arg(long, default_value_t = 1)]
        choice: u8,
        /// Player 1 number
        #[arg(long, default_value_t = 5)]
        p1: u8,
        /// Player 2 number
        #[arg(long, default_value_t = 6)]
        p2: u8,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = CliConfig::from_args(cli.data_dir, cli.verbose);

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_filter()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    config.validate()?;
    tracing::debug!("Using state file {}", config.state_path().display());

    // Ensure data directory exists
    tokio::fs::create_dir_all(&config.data_dir).await?;

    // Execute command
    let result = match cli.command {
        Commands::Deploy { force } => commands::deploy(&config, force).await,
        Commands::Init { choice, number } => commands::init_game(&config, choice, number).await,
        Commands::Play { number } => commands::play_game(&config, number).await,
        Commands::Status => commands::show_status(&config).await,
        Commands::Demo { choice, p1, p2 } => commands::run_demo(choice, p1, p2),
    };

    if let Err(e) = result {
        match e {
            OddEvenError::NotDeployed { path } => {
                eprintln!("Error: No game found at {}", path.display());
                eprintln!("Use 'oddeven deploy' to start one");
            }
            OddEvenError::Serialization(err) => {
                eprintln!("Error: Game state is corrupted: {}", err);
                eprintln!("Use 'oddeven deploy --force' to start over");
            }
            OddEvenError::InvalidState(reason) => {
                eprintln!("Error: Game state is corrupted: {}", reason);
                eprintln!("Use 'oddeven deploy --force' to start over");
            }
            _ => {
                eprintln!("Error: {}", e);
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
