//! quotesite-server: quote store and HTTP server
//!
//! Serves quote pages, random redirects and the JSON list/detail API
//! backed by Postgres.

pub mod db;
pub mod http;
pub mod models;

pub use db::{Database, DbError, QuoteStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use models::{Author, Listing, NewQuote, QuoteFilters, QuoteWithAuthor};
