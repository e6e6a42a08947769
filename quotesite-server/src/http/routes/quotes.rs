//! Quote endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use quotesite_core::{parse_optional_id, DownloadSettings, Page, ValidationErrors};

use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, ValidId};
use crate::http::server::AppState;
use crate::models::{Listing, QuoteFilters, QuoteWithAuthor};

#[derive(Debug, Default, Deserialize)]
pub struct QuoteListParams {
    pub author_id: Option<String>,
    pub offset: Option<String>,
    pub limit: Option<String>,
}

impl QuoteListParams {
    /// Validate every parameter, collecting all violations.
    fn parse(&self) -> Result<(QuoteFilters, Page), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let author_id = parse_optional_id("author_id", self.author_id.as_deref())
            .unwrap_or_else(|e| {
                errors.push(e);
                None
            });

        let page = Page::parse(self.offset.as_deref(), self.limit.as_deref()).unwrap_or_else(|e| {
            errors.extend(e);
            Page::default()
        });

        errors.into_result((QuoteFilters { author_id }, page))
    }
}

/// Response when download settings were recorded
#[derive(Debug, Serialize, Deserialize)]
pub struct DownloadRecorded {
    pub event_id: Uuid,
}

/// GET /api/quotes - list active quotes, optionally by author
async fn list_quotes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QuoteListParams>,
) -> Result<Json<Listing<QuoteWithAuthor>>, ApiError> {
    let (filters, page) = params.parse()?;

    let (results, total) = tokio::try_join!(
        state.store.find_quotes(filters, page),
        state.store.count_quotes(filters)
    )?;

    Ok(Json(Listing {
        offset: page.offset,
        limit: page.limit,
        results,
        total,
    }))
}

/// GET /api/quotes/{id} - get a single active quote
async fn get_quote(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<QuoteWithAuthor>, ApiError> {
    let quote = state
        .store
        .find_quote_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            resource: "quote",
            id: id.to_string(),
        })?;

    Ok(Json(quote))
}

/// POST /api/quotes/{id}/download-settings - record the settings of one download
async fn save_download_settings(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    ApiJson(settings): ApiJson<DownloadSettings>,
) -> Result<Response, ApiError> {
    let recorded = state.store.save_download_settings(id, &settings).await?;

    Ok(match recorded {
        Some(event_id) => (StatusCode::CREATED, Json(DownloadRecorded { event_id })).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

/// Quote routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/quotes", get(list_quotes))
        .route("/api/quotes/{id}", get(get_quote))
        .route("/api/quotes/{id}/download-settings", post(save_download_settings))
}
