//! Adboard CLI
//!
//! Command-line dashboard for the campaign backend.
//!
//! # Usage
//!
//! ```bash
//! adboard login --username demo --password demo
//! adboard campaigns list --channel TV --min-budget 500 --sort desc
//! adboard campaigns create --name "Summer Sale" --start-date 2024-06-01 \
//!     --end-date 2024-06-30 --total-budget 1000 --spent-budget 200 --channel TV
//! adboard campaigns delete 7
//! adboard logout
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use adboard_core::constants::DEFAULT_API_BASE_URL;
use adboard_core::filters::SortOrder;

mod commands;
mod context;
mod output;
mod token_store;

#[derive(Parser)]
#[command(name = "adboard")]
#[command(version)]
#[command(about = "Campaign management dashboard", long_about = None)]
struct Cli {
    /// Base URL of the campaign backend
    #[arg(long, env = "ADBOARD_API_URL", default_value = DEFAULT_API_BASE_URL)]
    api_url: String,

    /// Directory holding the session tokens (defaults to the platform
    /// config dir)
    #[arg(long, env = "ADBOARD_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, short, value_enum, default_value = "table")]
    format: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and persist the session
    Login {
        #[arg(long, short)]
        username: String,
        #[arg(long, short)]
        password: String,
    },
    /// Sign out and clear the persisted session
    Logout,
    /// Inspect or refresh the current session
    Session {
        #[command(subcommand)]
        action: SessionCommands,
    },
    /// Manage campaigns
    Campaigns {
        #[command(subcommand)]
        action: CampaignCommands,
    },
}

#[derive(Subcommand)]
enum SessionCommands {
    /// Show the current session state
    Status,
    /// Rotate the tokens using the refresh endpoint
    Refresh,
}

#[derive(Subcommand)]
pub enum CampaignCommands {
    /// List campaigns, optionally filtered and sorted
    List {
        /// Keep only campaigns running on every given channel (repeatable)
        #[arg(long = "channel")]
        channels: Vec<String>,
        /// Minimum planned budget, inclusive
        #[arg(long)]
        min_budget: Option<f64>,
        /// Maximum planned budget, inclusive
        #[arg(long)]
        max_budget: Option<f64>,
        /// Keep campaigns starting on or after this date (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<String>,
        /// Keep campaigns ending on or before this date (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<String>,
        /// Sort direction for the planned-budget ordering
        #[arg(long, value_enum, default_value = "asc")]
        sort: SortArg,
    },
    /// Create a new campaign
    Create {
        #[arg(long)]
        name: String,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: String,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end_date: String,
        /// Planned budget
        #[arg(long)]
        total_budget: String,
        /// Spent budget
        #[arg(long)]
        spent_budget: String,
        /// Channel the campaign runs on (repeatable)
        #[arg(long = "channel")]
        channels: Vec<String>,
    },
    /// Replace an existing campaign
    Update {
        /// Identifier of the campaign to replace
        id: String,
        #[arg(long)]
        name: String,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: String,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end_date: String,
        /// Planned budget
        #[arg(long)]
        total_budget: String,
        /// Spent budget
        #[arg(long)]
        spent_budget: String,
        /// Channel the campaign runs on (repeatable)
        #[arg(long = "channel")]
        channels: Vec<String>,
    },
    /// Delete a campaign
    Delete { id: String },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortArg {
    Asc,
    Desc,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Asc => SortOrder::Asc,
            SortArg::Desc => SortOrder::Desc,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let context = context::initialize_context(&cli.api_url, cli.config_dir)?;

    match cli.command {
        Commands::Login { username, password } => {
            commands::auth::login(&context, &username, &password).await
        }
        Commands::Logout => commands::auth::logout(&context),
        Commands::Session { action } => match action {
            SessionCommands::Status => commands::auth::status(&context),
            SessionCommands::Refresh => commands::auth::refresh(&context).await,
        },
        Commands::Campaigns { action } => {
            commands::campaigns::handle(action, &context, cli.format).await
        }
    }
}
