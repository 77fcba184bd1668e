//! CLI frontend for the Donjon dungeon crawl.

mod commands;
mod console;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser)]
#[command(
    name = "donjon",
    about = "Donjon: a French text dungeon crawl",
    version,
    propagate_version = true
)]
struct Cli {
    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the dungeon in the terminal
    Play {
        /// Directory containing the content files (default: current directory)
        #[arg(short, long, default_value = ".")]
        data_dir: PathBuf,

        /// RNG seed for reproducible traps
        #[arg(long)]
        seed: Option<u64>,

        /// Save file path
        #[arg(long, default_value = dj_engine::DEFAULT_SAVE_FILE)]
        save: PathBuf,

        /// Maximum number of carried items
        #[arg(long, default_value = "3")]
        max_inventory: usize,

        /// Restore the last save before playing
        #[arg(long)]
        resume: bool,

        /// Read player input from a file instead of stdin
        #[arg(long)]
        script: Option<PathBuf>,
    },

    /// Load the content files and report problems
    Check {
        /// Directory containing the content files (default: current directory)
        #[arg(short, long, default_value = ".")]
        data_dir: PathBuf,
    },

    /// Create a new directory with a small playable dungeon
    Init {
        /// Name of the directory to create
        name: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            data_dir,
            seed,
            save,
            max_inventory,
            resume,
            script,
        } => commands::play::run(&commands::play::PlayOptions {
            data_dir,
            seed,
            save,
            max_inventory,
            resume,
            script,
        }),
        Commands::Check { data_dir } => commands::check::run(&data_dir),
        Commands::Init { name } => commands::init::run(&name),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Warnings by default. `RUST_LOG` wins over the default, `-v` wins over both.
fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn);
    builder.parse_default_env();
    match verbosity {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.init();
}
