//! Operator CLI for mask.exe save profiles.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use mask_core::config::DEFAULT_STORAGE_KEY;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mask",
    about = "mask.exe - inspect and debug save profiles",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding the save file
    #[arg(short, long, default_value = ".", global = true)]
    dir: PathBuf,

    /// Storage key (the save file is `<key>.json`)
    #[arg(short, long, default_value = DEFAULT_STORAGE_KEY, global = true)]
    key: String,

    /// Log engine activity to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the persistent record
    Show {
        /// Print the stored JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Reset the save to defaults
    Clear,

    /// Resolve an ending from a final choice and the last mask worn
    Resolve {
        /// Final choice: wear, destroy, give
        choice: String,

        /// Last non-hunger path entered
        #[arg(short, long)]
        last: Option<String>,
    },

    /// Commit one ending against the save
    Commit {
        /// Ending id (e.g. A1, B_generic, T0_SCRIPT_BREAK_EARLY)
        ending: String,

        /// Paths completed during the run
        #[arg(short, long, num_args = 1..)]
        completed: Vec<String>,

        /// Commit even if the existing save cannot be loaded
        #[arg(long)]
        force: bool,
    },

    /// List every ending
    Endings,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Show { json } => commands::show::run(&cli.dir, &cli.key, json),
        Commands::Clear => commands::clear::run(&cli.dir, &cli.key),
        Commands::Resolve { choice, last } => commands::resolve::run(&choice, last.as_deref()),
        Commands::Commit {
            ending,
            completed,
            force,
        } => commands::commit::run(&cli.dir, &cli.key, &ending, &completed, force),
        Commands::Endings => commands::endings::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
