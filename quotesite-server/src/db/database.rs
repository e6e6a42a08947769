//! PostgreSQL implementation of [`QuoteStore`]
//!
//! Handles the quote tables with these patterns:
//! - lookups: JOIN quotes with authors, active rows only
//! - list/count: one predicate builder feeds both queries
//! - insert: author find-or-create and quote insert in one transaction
//! - download events: single multi-row INSERT with bound values

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use quotesite_core::{DownloadSetting, DownloadSettings, Page};

use super::{DbError, QuoteStore};
use crate::models::{Author, NewQuote, QuoteFilters, QuoteWithAuthor};

const QUOTE_SELECT: &str = "SELECT quotes.id, quotes.quote, quotes.author_id, \
     authors.first_name, authors.last_name, authors.image_url \
     FROM quotes JOIN authors ON quotes.author_id = authors.id";

const AUTHOR_SELECT: &str =
    "SELECT authors.id, authors.first_name, authors.last_name, authors.image_url FROM authors";

/// Quote store backed by a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Append the WHERE clause used by both quote listing and counting.
fn push_quote_filters(builder: &mut QueryBuilder<'static, Postgres>, filters: QuoteFilters) {
    builder.push(" WHERE quotes.is_active");
    if let Some(author_id) = filters.author_id {
        builder.push(" AND quotes.author_id = ");
        builder.push_bind(author_id);
    }
}

fn find_quotes_query(filters: QuoteFilters, page: Page) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(QUOTE_SELECT);
    push_quote_filters(&mut builder, filters);
    builder.push(" ORDER BY quotes.id LIMIT ");
    builder.push_bind(page.limit);
    builder.push(" OFFSET ");
    builder.push_bind(page.offset);
    builder
}

fn count_quotes_query(filters: QuoteFilters) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM quotes");
    push_quote_filters(&mut builder, filters);
    builder
}

fn download_settings_query(
    event_id: Uuid,
    quote_id: i64,
    entries: Vec<(DownloadSetting, String)>,
) -> QueryBuilder<'static, Postgres> {
    let mut builder =
        QueryBuilder::new("INSERT INTO download_settings (event_id, setting, value, quote_id) ");
    builder.push_values(entries, |mut row, (setting, value)| {
        row.push_bind(event_id)
            .push_bind(setting.as_str())
            .push_bind(value)
            .push_bind(quote_id);
    });
    builder
}

#[async_trait]
impl QuoteStore for Database {
    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn find_quote_by_id(&self, id: i64) -> Result<Option<QuoteWithAuthor>, DbError> {
        let quote = sqlx::query_as::<_, QuoteWithAuthor>(&format!(
            "{QUOTE_SELECT} WHERE quotes.is_active AND quotes.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(quote)
    }

    async fn find_quote_by_text(&self, text: &str) -> Result<Option<QuoteWithAuthor>, DbError> {
        let quote = sqlx::query_as::<_, QuoteWithAuthor>(&format!(
            "{QUOTE_SELECT} WHERE quotes.is_active AND quotes.quote = $1 ORDER BY quotes.id LIMIT 1"
        ))
        .bind(text)
        .fetch_optional(&self.pool)
        .await?;

        Ok(quote)
    }

    async fn find_author_by_id(&self, id: i64) -> Result<Option<Author>, DbError> {
        let author = sqlx::query_as::<_, Author>(&format!("{AUTHOR_SELECT} WHERE authors.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(author)
    }

    async fn find_author_quote_count(&self, author_id: i64) -> Result<i64, DbError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM quotes WHERE quotes.is_active AND quotes.author_id = $1",
        )
        .bind(author_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn find_random_quote(&self, exclude: Option<i64>) -> Result<Option<i64>, DbError> {
        let id: Option<i64> = sqlx::query_scalar(
            r#"
            SELECT quotes.id
            FROM quotes JOIN authors ON quotes.author_id = authors.id
            WHERE quotes.is_active
              AND ($1::BIGINT IS NULL OR quotes.id <> $1)
            ORDER BY random()
            LIMIT 1
            "#,
        )
        .bind(exclude)
        .fetch_optional(&self.pool)
        .await?;

        tracing::debug!(?exclude, picked = ?id, "random quote");
        Ok(id)
    }

    async fn find_random_quote_by_author_id(
        &self,
        author_id: i64,
        exclude: Option<i64>,
    ) -> Result<Option<i64>, DbError> {
        let id: Option<i64> = sqlx::query_scalar(
            r#"
            SELECT quotes.id
            FROM quotes JOIN authors ON quotes.author_id = authors.id
            WHERE quotes.is_active
              AND quotes.author_id = $1
              AND ($2::BIGINT IS NULL OR quotes.id <> $2)
            ORDER BY random()
            LIMIT 1
            "#,
        )
        .bind(author_id)
        .bind(exclude)
        .fetch_optional(&self.pool)
        .await?;

        tracing::debug!(author_id, ?exclude, picked = ?id, "random quote by author");
        Ok(id)
    }

    async fn find_quotes(
        &self,
        filters: QuoteFilters,
        page: Page,
    ) -> Result<Vec<QuoteWithAuthor>, DbError> {
        let mut query = find_quotes_query(filters, page);
        let quotes = query
            .build_query_as::<QuoteWithAuthor>()
            .fetch_all(&self.pool)
            .await?;

        Ok(quotes)
    }

    async fn count_quotes(&self, filters: QuoteFilters) -> Result<i64, DbError> {
        let mut query = count_quotes_query(filters);
        let count = query
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn find_authors(&self, page: Page) -> Result<Vec<Author>, DbError> {
        let authors = sqlx::query_as::<_, Author>(&format!(
            "{AUTHOR_SELECT} ORDER BY authors.id LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(authors)
    }

    async fn count_authors(&self) -> Result<i64, DbError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authors")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn insert_quote(&self, quote: NewQuote) -> Result<i64, DbError> {
        let raw = serde_json::to_string(&quote.raw)?;

        // Dropping `tx` without commit rolls back every statement below.
        let mut tx = self.pool.begin().await?;

        let existing: Option<i64> = sqlx::query_scalar(
            r#"
            SELECT id FROM authors
            WHERE first_name = $1 AND last_name IS NOT DISTINCT FROM $2
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(&quote.first_name)
        .bind(quote.last_name.as_deref())
        .fetch_optional(&mut *tx)
        .await?;

        let author_id = match existing {
            Some(id) => id,
            None => {
                let id: i64 = sqlx::query_scalar(
                    "INSERT INTO authors (first_name, last_name) VALUES ($1, $2) RETURNING id",
                )
                .bind(&quote.first_name)
                .bind(quote.last_name.as_deref())
                .fetch_one(&mut *tx)
                .await?;
                tracing::debug!(author_id = id, first_name = %quote.first_name, "created author");
                id
            }
        };

        let quote_id: i64 = sqlx::query_scalar(
            "INSERT INTO quotes (quote, author_id, raw) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&quote.quote)
        .bind(author_id)
        .bind(raw)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(quote_id, author_id, "inserted quote");
        Ok(quote_id)
    }

    async fn toggle_like(&self, color_scheme: &str, is_liked: bool) -> Result<bool, DbError> {
        let delta: i32 = if is_liked { 1 } else { -1 };

        let result = sqlx::query("UPDATE themes SET likes = likes + $2 WHERE name = $1")
            .bind(color_scheme)
            .bind(delta)
            .execute(&self.pool)
            .await?;

        let updated = result.rows_affected() > 0;
        if !updated {
            tracing::debug!(color_scheme, "like toggled for unknown theme");
        }
        Ok(updated)
    }

    async fn save_download_settings(
        &self,
        quote_id: i64,
        settings: &DownloadSettings,
    ) -> Result<Option<Uuid>, DbError> {
        let entries = settings.entries();
        if entries.is_empty() {
            return Ok(None);
        }

        let event_id = Uuid::new_v4();
        let rows = entries.len();

        let mut query = download_settings_query(event_id, quote_id, entries);
        query
            .build()
            .execute(&self.pool)
            .await?;

        tracing::debug!(%event_id, quote_id, rows, "recorded download settings");
        Ok(Some(event_id))
    }
}
