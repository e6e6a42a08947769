//! Command implementations for the quotesite CLI

pub mod add;
pub mod import;
pub mod migrate;
pub mod random;
pub mod serve;

pub use add::run_add;
pub use import::run_import;
pub use migrate::run_migrate;
pub use random::run_random;
pub use serve::run_serve;

use anyhow::{Context, Result};
use clap::Args;

use quotesite_core::QuotesiteConfig;
use quotesite_server::db::{connect, Database};

/// Connection flags shared by every database-backed command
#[derive(Args, Debug, Clone, Default)]
pub struct DatabaseArgs {
    /// Database URL (overrides config/environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

impl DatabaseArgs {
    /// Resolve the connection string: flag, then environment, then
    /// `~/.quotesite/config.toml`.
    pub fn resolve(&self, config: &QuotesiteConfig) -> Result<String> {
        match self.database_url.as_deref().filter(|u| !u.is_empty()) {
            Some(url) => Ok(url.to_string()),
            None => config.database.connection_url().context(
                "No database configured. Set --database-url, DATABASE_URL, \
                 DATABASE_HOST/DATABASE_NAME, or [database] in ~/.quotesite/config.toml",
            ),
        }
    }

    /// Open a pool and wrap it in a [`Database`].
    pub async fn open(&self, config: &QuotesiteConfig) -> Result<Database> {
        let url = self.resolve(config)?;
        let pool = connect(&config.database, &url)
            .await
            .context("Failed to create database pool")?;
        Ok(Database::new(pool))
    }
}

/// Load config from disk and environment.
pub fn load_config() -> Result<QuotesiteConfig> {
    QuotesiteConfig::load().context("Failed to load ~/.quotesite/config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_config() {
        let args = DatabaseArgs {
            database_url: Some("postgres://flag/db".into()),
        };
        let mut config = QuotesiteConfig::default();
        config.database.url = Some("postgres://config/db".into());

        assert_eq!(args.resolve(&config).unwrap(), "postgres://flag/db");
    }

    #[test]
    fn falls_back_to_config() {
        let mut config = QuotesiteConfig::default();
        config.database.host = Some("db.local".into());
        config.database.name = Some("quotes".into());

        let url = DatabaseArgs::default().resolve(&config).unwrap();
        assert_eq!(url, "postgres://db.local/quotes");
    }

    #[test]
    fn missing_database_is_an_error() {
        let err = DatabaseArgs::default()
            .resolve(&QuotesiteConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("No database configured"));
    }
}
