//! Theme like counter

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::post,
    Router,
};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::extractors::ApiJson;
use crate::http::server::AppState;

#[derive(Debug, Deserialize)]
pub struct LikeRequest {
    pub is_liked: bool,
}

/// POST /api/themes/{name}/like - add or remove one like
async fn toggle_like(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    ApiJson(req): ApiJson<LikeRequest>,
) -> Result<StatusCode, ApiError> {
    if state.store.toggle_like(&name, req.is_liked).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound {
            resource: "theme",
            id: name,
        })
    }
}

/// Theme routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/themes/{name}/like", post(toggle_like))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use axum::response::Response;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::http::test_support::{app, FakeStore};

    async fn like(store: FakeStore, theme: &str, is_liked: bool) -> Response {
        app(store)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/api/themes/{}/like", theme))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(format!(r#"{{"is_liked":{}}}"#, is_liked)))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn like_then_unlike_is_neutral() {
        let store = FakeStore::new().with_theme("dark", 5);

        let response = like(store.clone(), "dark", true).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(store.likes("dark"), Some(6));

        like(store.clone(), "dark", false).await;
        assert_eq!(store.likes("dark"), Some(5));
    }

    #[tokio::test]
    async fn unlike_can_go_negative() {
        let store = FakeStore::new().with_theme("light", 0);
        like(store.clone(), "light", false).await;
        assert_eq!(store.likes("light"), Some(-1));
    }

    #[tokio::test]
    async fn unknown_theme_is_404() {
        let response = like(FakeStore::new(), "neon", true).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    async fn errors(response: Response) -> Vec<Value> {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        json["errors"].as_array().cloned().unwrap_or_default()
    }

    #[tokio::test]
    async fn wrongly_typed_body_is_json_422() {
        let store = FakeStore::new().with_theme("dark", 0);
        let response = app(store.clone())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/themes/dark/like")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"is_liked":"yes"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(errors(response).await.len(), 1);
        assert_eq!(store.likes("dark"), Some(0));
    }

    #[tokio::test]
    async fn missing_content_type_is_json_415() {
        let response = app(FakeStore::new().with_theme("dark", 0))
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/themes/dark/like")
                    .body(Body::from(r#"{"is_liked":true}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(errors(response).await.len(), 1);
    }

    #[tokio::test]
    async fn unparseable_body_is_json_400() {
        let response = like_raw("{not json").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(errors(response).await.len(), 1);
    }

    async fn like_raw(body: &'static str) -> Response {
        app(FakeStore::new().with_theme("dark", 0))
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/themes/dark/like")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}
