//! Schema bootstrap command

use anyhow::{Context, Result};
use clap::Parser;

use quotesite_server::db::migrations;

use super::{load_config, DatabaseArgs};

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Create tables and seed themes. Safe to run repeatedly.
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let config = load_config()?;
    let database = args.db.open(&config).await?;

    migrations::run(database.pool())
        .await
        .context("Failed to bootstrap schema")?;

    println!("Schema is up to date");
    Ok(())
}
