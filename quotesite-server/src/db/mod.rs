//! Database layer - connection pool, schema bootstrap and the quote store
//!
//! # Design Principles
//!
//! - Every value reaches SQL as a bound parameter
//! - Rows decode through `FromRow`; shape mismatches are errors
//! - List and count queries share one filter predicate
//! - Multi-step writes run in a single transaction

pub mod database;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod store;

pub use database::Database;
pub use error::DbError;
pub use pool::{connect, create_pool, create_pool_with_options};
pub use store::QuoteStore;
