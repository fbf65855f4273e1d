use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "hostdeck")]
#[command(version)]
#[command(about = "Guest review dashboard for short-let property managers")]
struct Cli {
    /// Increase verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only show errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: OutputFormat,

    /// Write logs to this file (rotated daily) instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest from all sources and list reviews
    Reviews {
        /// Only reviews for this listing (exact name)
        #[arg(long)]
        listing: Option<String>,

        /// Inclusive lower bound on the overall rating
        #[arg(long, value_name = "RATING")]
        min_rating: Option<f64>,

        /// Only reviews carrying this category ("all" matches everything)
        #[arg(long)]
        category: Option<String>,

        /// Only reviews from this channel ("all" matches everything)
        #[arg(long)]
        channel: Option<String>,

        /// Only reviews submitted at or after this date
        /// (YYYY-MM-DD or RFC 3339)
        #[arg(long, value_name = "DATE")]
        since: Option<String>,

        /// Only manager-approved reviews
        #[arg(long)]
        approved_only: bool,

        /// Case-insensitive substring over listing, guest and review text
        #[arg(long)]
        search: Option<String>,
    },

    /// Grant or withdraw a review's manager approval
    Approve {
        /// Review id (integer or string)
        id: String,

        /// Withdraw approval instead of granting it
        #[arg(long)]
        revoke: bool,
    },

    /// Approved reviews for one listing, the public display view
    Approved {
        /// Listing name (exact)
        listing: String,
    },

    /// Summary statistics across all reviews
    Analytics,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the current configuration
    Show {
        /// Show the API key unmasked
        #[arg(long)]
        full: bool,
    },
    /// Interactively set up sources and credentials
    Init,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet, cli.log_file.clone())
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    let output = Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Reviews {
            listing,
            min_rating,
            category,
            channel,
            since,
            approved_only,
            search,
        } => {
            commands::reviews::run_reviews(
                listing,
                min_rating,
                category,
                channel,
                since,
                approved_only,
                search,
                &output,
            )
            .await
        }
        Commands::Approve { id, revoke } => {
            commands::approve::run_approve(&id, !revoke, &output).await
        }
        Commands::Approved { listing } => commands::approved::run_approved(&listing, &output).await,
        Commands::Analytics => commands::analytics::run_analytics(&output).await,
        Commands::Config { command } => match command {
            ConfigCommands::Show { full } => commands::config::run_show(full, &output),
            ConfigCommands::Init => commands::config::run_init(&output),
        },
    }
}
