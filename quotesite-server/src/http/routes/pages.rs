//! Browser-facing pages: quote view and random redirects

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use serde::Deserialize;

use quotesite_core::parse_optional_id;

use crate::http::error::ApiError;
use crate::http::render;
use crate::http::server::AppState;

/// `?quote_id=` carried by the random links so the current quote is skipped
#[derive(Debug, Default, Deserialize)]
pub struct RandomParams {
    pub quote_id: Option<String>,
}

impl RandomParams {
    /// Quote to exclude. A malformed value is ignored rather than rejected
    /// since these links come from rendered pages.
    fn exclude(&self) -> Option<i64> {
        parse_optional_id("quote_id", self.quote_id.as_deref())
            .ok()
            .flatten()
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(render::not_found_page())).into_response()
}

/// Router fallback for unknown paths
pub async fn fallback() -> Response {
    not_found()
}

fn redirect_to(id: Option<i64>) -> Response {
    match id {
        Some(id) => Redirect::temporary(&format!("/{}", id)).into_response(),
        None => not_found(),
    }
}

/// GET / - redirect to a random quote
async fn home(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let id = state.store.find_random_quote(None).await?;
    Ok(redirect_to(id))
}

/// GET /random?quote_id= - redirect to a random quote other than the current one
async fn random(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RandomParams>,
) -> Result<Response, ApiError> {
    let id = state.store.find_random_quote(params.exclude()).await?;
    Ok(redirect_to(id))
}

/// GET /author/{author_id}?quote_id= - redirect to another quote by the same author
async fn author_random(
    State(state): State<Arc<AppState>>,
    Path(author_id): Path<String>,
    Query(params): Query<RandomParams>,
) -> Result<Response, ApiError> {
    let Ok(author_id) = author_id.parse::<i64>() else {
        return Ok(not_found());
    };

    let id = state
        .store
        .find_random_quote_by_author_id(author_id, params.exclude())
        .await?;
    Ok(redirect_to(id))
}

/// GET /{quote_id} - render one quote
async fn quote_page(
    State(state): State<Arc<AppState>>,
    Path(quote_id): Path<String>,
) -> Result<Response, ApiError> {
    let Ok(quote_id) = quote_id.parse::<i64>() else {
        return Ok(not_found());
    };

    match state.store.find_quote_by_id(quote_id).await? {
        Some(quote) => Ok(Html(render::quote_page(&quote)).into_response()),
        None => Ok(not_found()),
    }
}

/// Page routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home))
        .route("/random", get(random))
        .route("/author/{author_id}", get(author_random))
        .route("/{quote_id}", get(quote_page))
}
