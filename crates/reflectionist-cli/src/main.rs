//! Reflectionist CLI - record and review timestamped reflections.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod logging;
mod output;

use commands::{create, describe, init, list};

#[derive(Parser)]
#[command(name = "reflectionist")]
#[command(version)]
#[command(about = "Record what happened, how you felt and what you learned")]
struct Cli {
    /// Path to the config file
    /// (default: $XDG_CONFIG_HOME/reflectionist/config.toml or ~/.config/reflectionist/config.toml)
    #[arg(long, global = true, env = "REFLECTIONIST_CONFIG")]
    config: Option<PathBuf>,
    /// Log filter directive, e.g. `debug` or `reflectionist_store=debug`
    #[arg(long, global = true, env = "REFLECTIONIST_LOG", default_value = logging::DEFAULT_FILTER)]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the config file and the reflections database
    Init {
        /// Path of the reflections database (default: ~/.<user>_reflections.json)
        #[arg(long = "db-path", short = 'd')]
        db_path: Option<PathBuf>,
    },
    /// Create a new reflection
    Create {
        /// What happened that affected me? (prompted when omitted)
        #[arg(long)]
        happened: Option<String>,
        /// How did I feel then and now? (prompted when omitted)
        #[arg(long)]
        felt: Option<String>,
        /// What did I learn about myself? (prompted when omitted)
        #[arg(long)]
        learned: Option<String>,
    },
    /// List all reflections, newest first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Describe a reflection given its id
    Describe {
        /// Position in the newest-first list (0 is the most recent)
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level);

    let result = config::resolve_config_path(cli.config).and_then(|config_path| {
        match cli.command {
            Commands::Init { db_path } => init::run(&config_path, db_path),
            Commands::Create {
                happened,
                felt,
                learned,
            } => create::run(&config_path, happened, felt, learned),
            Commands::List { json } => list::run(&config_path, json),
            Commands::Describe { id } => describe::run(&config_path, id),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
