//! JSON body extraction with the API's error envelope.
//!
//! axum's `Json` extractor rejects with plain-text bodies and requires a
//! `Content-Type: application/json` header. `JsonBody` parses any body as
//! JSON and reports every failure as `ApiError::InvalidJson` (400).

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Extracts and deserializes a JSON request body.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::InvalidJson(e.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| {
                tracing::debug!(error = %e, "Rejected request body");
                ApiError::InvalidJson(e.to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        name: String,
    }

    async fn extract(body: &'static str) -> Result<JsonBody<Payload>, ApiError> {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(body))
            .unwrap();
        JsonBody::<Payload>::from_request(request, &()).await
    }

    #[tokio::test]
    async fn test_parses_without_content_type() {
        let JsonBody(payload) = extract(r#"{"name": "x"}"#).await.unwrap();
        assert_eq!(payload.name, "x");
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_json() {
        let err = extract("{not json").await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidJson(_)));
    }

    #[tokio::test]
    async fn test_missing_field_is_invalid_json() {
        let err = extract("{}").await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidJson(ref msg) if msg.contains("name")));
    }
}
