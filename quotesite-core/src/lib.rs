//! quotesite-core: shared building blocks for the quotesite workspace
//!
//! Holds everything that does not need a database or an HTTP stack:
//! configuration loading, pagination parsing, validation errors and
//! the download-settings model.

pub mod author;
pub mod config;
pub mod download;
pub mod error;
pub mod pagination;
pub mod validation;

pub use author::display_name;
pub use config::{DatabaseConfig, QuotesiteConfig, ServerSection};
pub use download::{DownloadSetting, DownloadSettings};
pub use error::ConfigError;
pub use pagination::{Page, DEFAULT_LIMIT, DEFAULT_OFFSET, MAX_LIMIT};
pub use validation::{parse_optional_id, ValidationError, ValidationErrors};
