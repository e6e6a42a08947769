//! quotesite CLI - serve and manage the quote collection
//!
//! - `serve`: run the HTTP server (pages + JSON API)
//! - `migrate`: create tables and seed themes
//! - `add` / `import`: insert quotes, creating authors as needed
//! - `random`: print a random quote

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "quotesite",
    author,
    version,
    about = "Quote-sharing website and collection tooling"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces via OpenTelemetry OTLP (requires the `telemetry` feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Create tables and seed themes (idempotent)
    Migrate(commands::migrate::MigrateArgs),
    /// Add a single quote
    Add(commands::add::AddArgs),
    /// Import quotes from a JSON array or NDJSON file
    Import(commands::import::ImportArgs),
    /// Print a random quote
    Random(commands::random::RandomArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })
    .ok();

    let result = match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::Migrate(args) => commands::run_migrate(args).await,
        Commands::Add(args) => commands::run_add(args).await,
        Commands::Import(args) => commands::run_import(args).await,
        Commands::Random(args) => commands::run_random(args).await,
    };

    tracing_setup::shutdown_otel();
    result
}
