//! Development tasks for the critical data stores
//!
//! Inspects and maintains file-backed categories on disk.
//! Run with: `cargo xtask <command>`

mod commands;
mod dirs;

use anyhow::Result;
use clap::Parser;
use commands::{Clean, List, Read, Verify};

/// Development tasks for the critical data stores
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for critical data", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List categories and stored items
    List(List),

    /// Read and inspect a stored item
    Read(Read),

    /// Verify checksums of stored records
    Verify(Verify),

    /// Clean stored critical data
    Clean(Clean),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for CRITICAL_DATA_DIR and other env vars)
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
        Command::List(cmd) => cmd.execute(),
        Command::Read(cmd) => cmd.execute(),
        Command::Verify(cmd) => cmd.execute(),
        Command::Clean(cmd) => cmd.execute(),
    }
}
