//! The quote store capability consumed by the HTTP layer

use async_trait::async_trait;
use uuid::Uuid;

use quotesite_core::{DownloadSettings, Page};

use super::DbError;
use crate::models::{Author, NewQuote, QuoteFilters, QuoteWithAuthor};

/// Read and write access to quotes, authors, themes and download events.
///
/// Absence of a row is `Ok(None)`; `Err` always means the store itself
/// failed. Implementations hold no per-request state.
#[async_trait]
pub trait QuoteStore: Send + Sync + 'static {
    /// Round-trip to the store without touching any table.
    async fn ping(&self) -> Result<(), DbError>;

    async fn find_quote_by_id(&self, id: i64) -> Result<Option<QuoteWithAuthor>, DbError>;

    async fn find_quote_by_text(&self, text: &str) -> Result<Option<QuoteWithAuthor>, DbError>;

    async fn find_author_by_id(&self, id: i64) -> Result<Option<Author>, DbError>;

    /// Number of active quotes by the author, 0 when none.
    async fn find_author_quote_count(&self, author_id: i64) -> Result<i64, DbError>;

    /// Id of a random active quote other than `exclude`.
    async fn find_random_quote(&self, exclude: Option<i64>) -> Result<Option<i64>, DbError>;

    /// Id of a random active quote by `author_id` other than `exclude`.
    async fn find_random_quote_by_author_id(
        &self,
        author_id: i64,
        exclude: Option<i64>,
    ) -> Result<Option<i64>, DbError>;

    async fn find_quotes(
        &self,
        filters: QuoteFilters,
        page: Page,
    ) -> Result<Vec<QuoteWithAuthor>, DbError>;

    /// Count matching the same predicate as [`QuoteStore::find_quotes`].
    async fn count_quotes(&self, filters: QuoteFilters) -> Result<i64, DbError>;

    async fn find_authors(&self, page: Page) -> Result<Vec<Author>, DbError>;

    async fn count_authors(&self) -> Result<i64, DbError>;

    /// Insert a quote, reusing or creating its author atomically.
    /// Returns the new quote id.
    async fn insert_quote(&self, quote: NewQuote) -> Result<i64, DbError>;

    /// Add or remove one like on a theme. Returns false when the theme
    /// does not exist.
    async fn toggle_like(&self, color_scheme: &str, is_liked: bool) -> Result<bool, DbError>;

    /// Record the non-empty settings of one download under a shared event id.
    /// Returns `None` without touching the store when nothing was set.
    async fn save_download_settings(
        &self,
        quote_id: i64,
        settings: &DownloadSettings,
    ) -> Result<Option<Uuid>, DbError>;
}
