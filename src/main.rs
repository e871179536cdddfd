//! Scramble CLI - play Suburban Scramble in the terminal or score a game.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Suburban Scramble - a two-team town-claiming board game
#[derive(Parser, Debug)]
#[command(name = "scramble")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    options: cli::GameOptions,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play on an interactive board
    Play,

    /// Apply a sequence of town clicks and print the scoreboard
    Run {
        /// Town names, one click each, in order
        clicks: Vec<String>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Suppress click-by-click output
        #[arg(short, long)]
        quiet: bool,
    },

    /// List and validate the towns on the board
    Regions {
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Show the board rows instead of the table
        #[arg(short, long)]
        board: bool,
    },
}

fn init_tracing(log_file: Option<&Path>, interactive: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(path) = log_file {
        match File::create(path) {
            Ok(file) => {
                tracing_subscriber::registry()
                    .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                    .with(env_filter)
                    .init();
                tracing::info!(path = %path.display(), "Logging initialized");
                return;
            }
            Err(e) => eprintln!("Failed to open log file {}: {e}", path.display()),
        }
    }

    // The board owns the terminal; without a log file it stays silent.
    if interactive {
        tracing_subscriber::registry().with(env_filter).init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(env_filter)
            .init();
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_tracing(
        args.options.log_file.as_deref(),
        matches!(args.command, Commands::Play),
    );

    let result = match args.command {
        Commands::Play => cli::play::execute(&args.options),

        Commands::Run {
            clicks,
            format,
            quiet,
        } => cli::run::execute(&args.options, clicks, format, quiet),

        Commands::Regions { format, board } => {
            cli::regions::execute(&args.options, format, board)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
