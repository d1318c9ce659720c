//! JSON body extractor with the shared error body.

use crate::errors::AppError;
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// Drop-in replacement for [`axum::Json`] on the request side.
///
/// Syntax errors, type mismatches (an unknown enum value, a malformed date)
/// and missing fields all become 400; a missing `Content-Type` stays 415.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(ApiJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::post};
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    #[allow(dead_code)]
    struct Payload {
        count: u8,
    }

    async fn status_for(content_type: Option<&str>, body: &'static str) -> StatusCode {
        let app = Router::new().route("/", post(|ApiJson(_p): ApiJson<Payload>| async { "ok" }));
        let mut request = Request::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            request = request.header("content-type", ct);
        }
        app.oneshot(request.body(Body::from(body)).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_accepts_valid_body() {
        assert_eq!(status_for(Some("application/json"), r#"{"count":1}"#).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_type_mismatch_is_bad_request() {
        let status = status_for(Some("application/json"), r#"{"count":"many"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_syntax_error_is_bad_request() {
        assert_eq!(status_for(Some("application/json"), "{").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_oversized_body_is_payload_too_large() {
        let app = Router::new().route("/", post(|ApiJson(_p): ApiJson<Payload>| async { "ok" }));
        let body = format!(r#"{{"count":1,"pad":"{}"}}"#, "x".repeat(3 * 1024 * 1024));
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_unsupported() {
        let status = status_for(None, r#"{"count":1}"#).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
