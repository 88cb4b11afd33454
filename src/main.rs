use anyhow::Result;
use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};
use coinlens::core::log::init_logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for coinlens::AppCommand {
    fn from(cmd: Commands) -> coinlens::AppCommand {
        match cmd {
            Commands::Dashboard {
                coin,
                start,
                end,
                out_dir,
            } => coinlens::AppCommand::Dashboard(coinlens::cli::dashboard::DashboardRequest {
                coin,
                start,
                end,
                out_dir,
            }),
            Commands::Coins => coinlens::AppCommand::Coins,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display the price dashboard for a coin and date range
    Dashboard {
        /// Coin to analyze, by name, CoinGecko id, or ticker (e.g. "Bitcoin")
        #[arg(long)]
        coin: Option<String>,

        /// Start of the date range (YYYY-MM-DD)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// End of the date range (YYYY-MM-DD)
        #[arg(long)]
        end: Option<NaiveDate>,

        /// Directory where chart images are written
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// List supported coins
    Coins,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => coinlens::cli::setup::setup(),
        Some(cmd) => coinlens::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
