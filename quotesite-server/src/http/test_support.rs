//! In-memory store and router helpers for handler tests
//!
//! Compiled for this crate's tests and, through the `test-support`
//! feature, for dependent crates' tests.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use axum::Router;
use uuid::Uuid;

use quotesite_core::{DownloadSettings, Page};

use crate::db::{DbError, QuoteStore};
use crate::http::server::{build_router, AppState};
use crate::models::{Author, NewQuote, QuoteFilters, QuoteWithAuthor};

/// One recorded download setting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRow {
    pub event_id: Uuid,
    pub setting: String,
    pub value: String,
    pub quote_id: i64,
}

#[derive(Default)]
struct State {
    quotes: Vec<QuoteWithAuthor>,
    themes: Vec<(String, i64)>,
    downloads: Vec<DownloadRow>,
    unreachable: bool,
}

/// Deterministic [`QuoteStore`]: the "random" pick is the first match in
/// insertion order. Clones share state.
#[derive(Clone, Default)]
pub struct FakeStore {
    state: Arc<Mutex<State>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quote(self, id: i64, author_id: i64, text: &str, first_name: &str) -> Self {
        self.lock().quotes.push(QuoteWithAuthor {
            id,
            quote: text.to_string(),
            author_id,
            first_name: first_name.to_string(),
            last_name: None,
            image_url: None,
        });
        self
    }

    pub fn with_theme(self, name: &str, likes: i64) -> Self {
        self.lock().themes.push((name.to_string(), likes));
        self
    }

    /// Make every `ping` fail as if the database were down.
    pub fn unreachable(self) -> Self {
        self.lock().unreachable = true;
        self
    }

    pub fn likes(&self, name: &str) -> Option<i64> {
        self.lock()
            .themes
            .iter()
            .find(|(theme, _)| theme == name)
            .map(|(_, likes)| *likes)
    }

    pub fn download_rows(&self) -> Vec<DownloadRow> {
        self.lock().downloads.clone()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn authors(&self) -> Vec<Author> {
        let mut authors: Vec<Author> = Vec::new();
        for quote in &self.lock().quotes {
            if !authors.iter().any(|a| a.id == quote.author_id) {
                authors.push(Author {
                    id: quote.author_id,
                    first_name: quote.first_name.clone(),
                    last_name: quote.last_name.clone(),
                    image_url: quote.image_url.clone(),
                });
            }
        }
        authors.sort_by_key(|a| a.id);
        authors
    }

    fn matching(&self, filters: QuoteFilters) -> Vec<QuoteWithAuthor> {
        let mut quotes: Vec<_> = self
            .lock()
            .quotes
            .iter()
            .filter(|q| filters.author_id.map_or(true, |id| q.author_id == id))
            .cloned()
            .collect();
        quotes.sort_by_key(|q| q.id);
        quotes
    }
}

fn paginate<T>(items: Vec<T>, page: Page) -> Vec<T> {
    items
        .into_iter()
        .skip(page.offset as usize)
        .take(page.limit as usize)
        .collect()
}

#[async_trait]
impl QuoteStore for FakeStore {
    async fn ping(&self) -> Result<(), DbError> {
        if self.lock().unreachable {
            return Err(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    async fn find_quote_by_id(&self, id: i64) -> Result<Option<QuoteWithAuthor>, DbError> {
        Ok(self.lock().quotes.iter().find(|q| q.id == id).cloned())
    }

    async fn find_quote_by_text(&self, text: &str) -> Result<Option<QuoteWithAuthor>, DbError> {
        Ok(self.lock().quotes.iter().find(|q| q.quote == text).cloned())
    }

    async fn find_author_by_id(&self, id: i64) -> Result<Option<Author>, DbError> {
        Ok(self.authors().into_iter().find(|a| a.id == id))
    }

    async fn find_author_quote_count(&self, author_id: i64) -> Result<i64, DbError> {
        self.count_quotes(QuoteFilters {
            author_id: Some(author_id),
        })
        .await
    }

    async fn find_random_quote(&self, exclude: Option<i64>) -> Result<Option<i64>, DbError> {
        Ok(self
            .lock()
            .quotes
            .iter()
            .map(|q| q.id)
            .find(|id| Some(*id) != exclude))
    }

    async fn find_random_quote_by_author_id(
        &self,
        author_id: i64,
        exclude: Option<i64>,
    ) -> Result<Option<i64>, DbError> {
        Ok(self
            .lock()
            .quotes
            .iter()
            .filter(|q| q.author_id == author_id)
            .map(|q| q.id)
            .find(|id| Some(*id) != exclude))
    }

    async fn find_quotes(
        &self,
        filters: QuoteFilters,
        page: Page,
    ) -> Result<Vec<QuoteWithAuthor>, DbError> {
        Ok(paginate(self.matching(filters), page))
    }

    async fn count_quotes(&self, filters: QuoteFilters) -> Result<i64, DbError> {
        Ok(self.matching(filters).len() as i64)
    }

    async fn find_authors(&self, page: Page) -> Result<Vec<Author>, DbError> {
        Ok(paginate(self.authors(), page))
    }

    async fn count_authors(&self) -> Result<i64, DbError> {
        Ok(self.authors().len() as i64)
    }

    async fn insert_quote(&self, quote: NewQuote) -> Result<i64, DbError> {
        let author_id = self
            .authors()
            .iter()
            .find(|a| a.first_name == quote.first_name && a.last_name == quote.last_name)
            .map(|a| a.id)
            .unwrap_or_else(|| self.authors().iter().map(|a| a.id).max().unwrap_or(0) + 1);

        let mut state = self.lock();
        let id = state.quotes.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        state.quotes.push(QuoteWithAuthor {
            id,
            quote: quote.quote,
            author_id,
            first_name: quote.first_name,
            last_name: quote.last_name,
            image_url: None,
        });
        Ok(id)
    }

    async fn toggle_like(&self, color_scheme: &str, is_liked: bool) -> Result<bool, DbError> {
        let delta = if is_liked { 1 } else { -1 };
        let mut state = self.lock();
        match state.themes.iter_mut().find(|(name, _)| name == color_scheme) {
            Some((_, likes)) => {
                *likes += delta;
                Ok(true)
            }
            None => Ok(false),
        }
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
        self.lock()
            .downloads
            .extend(entries.into_iter().map(|(setting, value)| DownloadRow {
                event_id,
                setting: setting.to_string(),
                value,
                quote_id,
            }));
        Ok(Some(event_id))
    }
}

/// Full application router backed by `store`
pub fn app(store: FakeStore) -> Router {
    build_router(AppState::new(store), false)
}
