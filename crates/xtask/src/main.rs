//! Development tasks for the dungeon content set
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod dirs;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::{CheckContent, InspectContent};

/// Development tasks for the dungeon content set
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for dungeon content", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Load a content directory and print its classes and templates
    InspectContent(InspectContent),

    /// Load a content directory and report every skipped entry
    CheckContent(CheckContent),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for CONTENT_DIR and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::InspectContent(cmd) => cmd.execute(),
        Command::CheckContent(cmd) => cmd.execute(),
    }
}
