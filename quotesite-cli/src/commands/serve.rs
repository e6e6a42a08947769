//! HTTP server command

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use quotesite_server::db::migrations;
use quotesite_server::http::{run_server, AppState, ServerConfig};

use super::{load_config, DatabaseArgs};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: [server] bind, or 127.0.0.1:3000)
    #[arg(long, short = 'b', env = "QUOTESITE_BIND")]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Skip schema bootstrap on startup
    #[arg(long)]
    pub no_migrate: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = load_config()?;

    let bind_addr = match args.bind {
        Some(addr) => addr,
        None => config.server.bind_addr().context("Invalid [server] bind")?,
    };

    let database = args.db.open(&config).await?;

    if !args.no_migrate {
        migrations::run(database.pool())
            .await
            .context("Failed to bootstrap schema")?;
    }

    let server_config = ServerConfig {
        bind_addr,
        cors_permissive: args.cors_permissive || config.server.cors_permissive,
    };

    tracing::info!("Starting quotesite server on {}", bind_addr);

    run_server(AppState::new(database), server_config)
        .await
        .context("Server error")?;

    Ok(())
}
