/// Structured error types for quotesite-core.
///
/// The binary wraps these with `anyhow` context; library callers can match
/// on the variants.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file exists but could not be read
    #[error("failed to read config file {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },

    /// Config file is not valid TOML for [`crate::QuotesiteConfig`]
    #[error("invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Neither a database url nor host credentials were supplied
    #[error(
        "database not configured: set DATABASE_URL, or DATABASE_HOST / DATABASE_USERNAME / DATABASE_PASSWORD"
    )]
    MissingDatabase,

    /// Bind address could not be parsed
    #[error("invalid bind address '{value}'")]
    InvalidBind { value: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
