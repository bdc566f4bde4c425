//! analytics CLI - item service and dataset conversion
//!
//! Entry point for the `analytics` command-line tool:
//! - `serve`: HTTP API for items and events (SQLite by default, `DATABASE_URL` to override)
//! - `convert`: turn every CSV in the dataset directory into a sibling JSON file

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "analytics",
    author,
    version,
    about = "Item API server and CSV to JSON dataset converter"
)]
struct Cli {
    /// Enable debug logging (unless RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server (items CRUD, events)
    Serve(commands::serve::ServeArgs),
    /// Convert every CSV file in the dataset directory to JSON
    Convert(commands::convert::ConvertArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before parsing so `env = "DATABASE_URL"` args can see it
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Convert(args) => commands::run_convert(args)?,
    }
    Ok(())
}
