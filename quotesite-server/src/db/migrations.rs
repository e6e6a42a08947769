//! Schema bootstrap for the quote tables
//!
//! Every statement is idempotent so this runs on each server start.

use sqlx::PgPool;

use super::DbError;

/// Theme rows created on bootstrap so likes have something to count against
pub const DEFAULT_THEMES: &[&str] = &["light", "dark"];

/// Create tables, indexes and default themes if they do not exist
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running quote store migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS authors (
            id BIGSERIAL PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name TEXT,
            image_url TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS quotes (
            id BIGSERIAL PRIMARY KEY,
            quote TEXT NOT NULL,
            author_id BIGINT NOT NULL REFERENCES authors(id),
            raw TEXT NOT NULL DEFAULT '{}',
            is_active BOOLEAN NOT NULL DEFAULT TRUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS themes (
            name TEXT PRIMARY KEY,
            likes INTEGER NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS download_settings (
            id BIGSERIAL PRIMARY KEY,
            event_id UUID NOT NULL,
            setting TEXT NOT NULL,
            value TEXT NOT NULL,
            quote_id BIGINT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_quotes_author_id ON quotes(author_id)")
        .execute(pool)
        .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_authors_name ON authors(first_name, last_name)",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_download_settings_event ON download_settings(event_id)")
        .execute(pool)
        .await?;

    for theme in DEFAULT_THEMES {
        sqlx::query("INSERT INTO themes (name) VALUES ($1) ON CONFLICT (name) DO NOTHING")
            .bind(*theme)
            .execute(pool)
            .await?;
    }

    tracing::info!("Quote store migrations complete");
    Ok(())
}
