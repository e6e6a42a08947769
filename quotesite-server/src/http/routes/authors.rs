//! Author endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use quotesite_core::Page;

use crate::http::error::ApiError;
use crate::http::extractors::ValidId;
use crate::http::server::AppState;
use crate::models::{Author, Listing};

/// Raw `offset`/`limit` query values, validated by [`Page::parse`]
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub offset: Option<String>,
    pub limit: Option<String>,
}

/// Single author with their active quote count
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthorDetail {
    pub author: Author,
    pub quote_count: i64,
}

/// GET /api/authors - list authors with pagination
async fn list_authors(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Listing<Author>>, ApiError> {
    let page = Page::parse(params.offset.as_deref(), params.limit.as_deref())?;

    let (results, total) = tokio::try_join!(
        state.store.find_authors(page),
        state.store.count_authors()
    )?;

    Ok(Json(Listing {
        offset: page.offset,
        limit: page.limit,
        results,
        total,
    }))
}

/// GET /api/authors/{id} - get a single author
async fn get_author(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<AuthorDetail>, ApiError> {
    let author = state
        .store
        .find_author_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            resource: "author",
            id: id.to_string(),
        })?;

    let quote_count = state.store.find_author_quote_count(id).await?;

    Ok(Json(AuthorDetail {
        author,
        quote_count,
    }))
}

/// Author routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/authors", get(list_authors))
        .route("/api/authors/{id}", get(get_author))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::http::test_support::{app, FakeStore};

    async fn get(store: FakeStore, uri: &str) -> Response {
        app(store)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json(response: Response) -> Value {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn three_authors() -> FakeStore {
        FakeStore::new()
            .with_quote(1, 1, "One.", "Ann")
            .with_quote(2, 2, "Two.", "Bob")
            .with_quote(3, 3, "Three.", "Cy")
    }

    #[tokio::test]
    async fn lists_with_defaults() {
        let response = get(three_authors(), "/api/authors").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json(response).await;
        assert_eq!(body["offset"], 0);
        assert_eq!(body["limit"], 10);
        assert_eq!(body["total"], 3);
        assert_eq!(body["results"].as_array().unwrap().len(), 3);
        assert_eq!(body["results"][0]["first_name"], "Ann");
    }

    #[tokio::test]
    async fn paginates_but_total_is_unaffected() {
        let body = json(get(three_authors(), "/api/authors?offset=1&limit=1").await).await;
        assert_eq!(body["results"].as_array().unwrap().len(), 1);
        assert_eq!(body["results"][0]["first_name"], "Bob");
        assert_eq!(body["total"], 3);
    }

    #[tokio::test]
    async fn clamps_limit() {
        let body = json(get(three_authors(), "/api/authors?limit=9999").await).await;
        assert_eq!(body["limit"], 100);
    }

    #[tokio::test]
    async fn rejects_non_numeric_offset() {
        let response = get(three_authors(), "/api/authors?offset=abc").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json(response).await;
        let errors = body["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].as_str().unwrap().contains("offset"));
    }

    #[tokio::test]
    async fn reports_all_violations() {
        let response = get(three_authors(), "/api/authors?offset=abc&limit=xyz").await;
        let body = json(response).await;
        assert_eq!(body["errors"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn gets_author_with_count() {
        let store = three_authors().with_quote(4, 1, "Ann again.", "Ann");
        let body = json(get(store, "/api/authors/1").await).await;
        assert_eq!(body["author"]["first_name"], "Ann");
        assert_eq!(body["quote_count"], 2);
    }

    #[tokio::test]
    async fn missing_author_is_404() {
        let response = get(three_authors(), "/api/authors/99").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn non_numeric_author_id_is_400() {
        let response = get(three_authors(), "/api/authors/abc").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
