//! # Recall CLI (`rcl`)
//!
//! The `rcl` binary is the primary interface for Recall. It provides
//! commands for database initialization, recording search submissions,
//! fetching suggestions, and inspecting or resetting the history.
//!
//! ## Usage
//!
//! ```bash
//! rcl --config ./config/recall.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `rcl init` | Create the SQLite database and slots table |
//! | `rcl suggest "<query>"` | Print suggestions for the current query text |
//! | `rcl record "<query>"` | Record a submitted search into the history |
//! | `rcl history` | Print the full history, most recent first |
//! | `rcl clear` | Reset the history to the seed list |
//! | `rcl completions <shell>` | Emit shell completion definitions |
//!
//! ## Examples
//!
//! ```bash
//! # Initialize the database
//! rcl init --config ./config/recall.toml
//!
//! # Record a submitted search
//! rcl record "quarterly report"
//!
//! # Suggestions while typing (matched spans wrapped in >>> <<<)
//! rcl suggest "qua"
//!
//! # Suggestions without markers, e.g. for piping into a picker
//! rcl suggest "qua" --plain
//!
//! # Suggest and record in one step (the submit path)
//! rcl suggest "quarterly report" --record
//! ```

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use recall::{config, history, migrate, record, suggest};

/// Recall CLI — a local-first search history and suggestion engine.
///
/// All commands accept a `--config` flag pointing to a TOML
/// configuration file. See `config/recall.example.toml` for a full
/// example.
#[derive(Parser)]
#[command(
    name = "rcl",
    about = "Recall — a local-first search history and suggestion engine",
    version,
    long_about = "Recall keeps a capped, deduplicated, most-recent-first history of \
    accepted search submissions in a SQLite-backed key-value slot and serves bounded \
    suggestion lists from it by literal case-insensitive substring containment."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/recall.toml`. Database path, history cap,
    /// suggestion limit, and the seed list are read from this file.
    #[arg(long, global = true, default_value = "./config/recall.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Initialize the database schema.
    ///
    /// Creates the SQLite database file and the `slots` key-value
    /// table. This command is idempotent — running it multiple times
    /// is safe.
    Init,

    /// Print suggestions for the current query text.
    ///
    /// An empty query returns the most recent history entries.
    /// Otherwise every entry containing the query as a literal
    /// case-insensitive substring is returned, in history order,
    /// truncated to the suggestion limit.
    Suggest {
        /// The query text as currently typed.
        query: String,

        /// Maximum number of suggestions to return.
        #[arg(long)]
        limit: Option<usize>,

        /// Print bare entries without `>>>`/`<<<` match markers.
        #[arg(long)]
        plain: bool,

        /// Print the suggestions as a JSON array.
        #[arg(long, conflicts_with = "plain")]
        json: bool,

        /// Also record the query into the history after suggesting.
        #[arg(long)]
        record: bool,
    },

    /// Record a submitted search into the history.
    ///
    /// The query is trimmed; an empty query is ignored. Any existing
    /// entry equal under case-insensitive comparison is replaced, the
    /// new entry is placed first, and the history is truncated to the
    /// configured cap.
    Record {
        /// The submitted search query.
        query: String,
    },

    /// Print the full history, most recent first.
    ///
    /// Shows the seed list when no searches have been recorded yet or
    /// the persisted state is unreadable.
    History,

    /// Reset the history to the seed list.
    Clear,

    /// Emit shell completion definitions to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Completions don't require config
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(*shell, &mut cmd, "rcl", &mut std::io::stdout());
        return Ok(());
    }

    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Init => {
            migrate::run_migrations(&cfg).await?;
            println!("Database initialized successfully.");
        }
        Commands::Suggest {
            query,
            limit,
            plain,
            json,
            record,
        } => {
            suggest::run_suggest(&cfg, &query, limit, plain, json, record).await?;
        }
        Commands::Record { query } => {
            record::run_record(&cfg, &query).await?;
        }
        Commands::History => {
            history::run_history(&cfg).await?;
        }
        Commands::Clear => {
            history::run_clear(&cfg).await?;
        }
        Commands::Completions { .. } => {
            // Handled above (before config loading)
            unreachable!()
        }
    }

    Ok(())
}
