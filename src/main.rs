//! Friend Circle - command-line front end
//!
//! Add, re-evaluate, remove, and list friends stored in a plain-text data
//! file. Logs go to stderr; command output goes to stdout.

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

use cli::config::ConfigAction;
use cli::helpers::GlobalOptions;

#[derive(Parser)]
#[command(name = "friend-circle")]
#[command(about = "Track friendships by scoring them across relationship criteria", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Set log level
    #[arg(short, long, default_value = "warn", global = true)]
    log_level: String,

    /// Config file (overrides FRIEND_CIRCLE_CONFIG and the default location)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Data file (overrides FRIEND_CIRCLE_DATA and the config file)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Criteria file (overrides FRIEND_CIRCLE_CRITERIA and the config file)
    #[arg(long, global = true)]
    criteria_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new friend
    Add {
        /// Friend's name
        name: String,

        /// Gender (M or F)
        #[arg(short, long, default_value = "M")]
        gender: String,

        /// All scores, comma-separated, in criteria order
        #[arg(long)]
        scores: Option<String>,

        /// One score as criterion=value (criterion name or 1-based position)
        #[arg(short, long)]
        score: Vec<String>,
    },

    /// Re-evaluate or edit a friend
    Edit {
        /// Position as shown by `list`
        position: usize,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New gender (M or F)
        #[arg(short, long)]
        gender: Option<String>,

        /// New score as criterion=value (criterion name or 1-based position)
        #[arg(short, long)]
        score: Vec<String>,
    },

    /// Remove a friend
    Remove {
        /// Position as shown by `list`
        position: usize,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List friends from highest to lowest total score
    List {
        /// all, men, women, top, min:<total>, or a category (e.g. super-friend)
        #[arg(short, long, default_value = "all")]
        filter: String,
    },

    /// Show one friend in detail
    Show {
        /// Position as shown by `list`
        position: usize,
    },

    /// Show the active scoring criteria
    Criteria,

    /// Export friends as JSON, JSON Lines, or Markdown
    Export {
        /// Output path (prints JSON to stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Initialize tracing
    let level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("friend_circle={}", level.as_str().to_lowercase()))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr) // Write logs to stderr, not stdout
        .init();

    debug!("friend-circle v{} starting...", env!("CARGO_PKG_VERSION"));

    let globals = GlobalOptions {
        config: args.config,
        data_file: args.data_file,
        criteria_file: args.criteria_file,
    };

    match args.command {
        Commands::Add {
            name,
            gender,
            scores,
            score,
        } => cli::add::handle(name, gender, scores, score, &globals),
        Commands::Edit {
            position,
            name,
            gender,
            score,
        } => cli::edit::handle(position, name, gender, score, &globals),
        Commands::Remove { position, yes } => cli::remove::handle(position, yes, &globals),
        Commands::List { filter } => cli::list::handle(filter, &globals),
        Commands::Show { position } => cli::list::handle_show(position, &globals),
        Commands::Criteria => cli::criteria::handle(&globals),
        Commands::Export { output } => cli::export::handle(output, &globals),
        Commands::Config { action } => cli::config::handle(action, &globals),
    }
}
