//! API key authentication middleware

use axum::{
    body::Body,
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::AppError;

/// Header carrying the client's API key
pub const API_KEY_HEADER: &str = "X-API-Key";

/// API Key authentication state
#[derive(Clone)]
pub struct ApiKeyAuth {
    api_key: Option<String>,
}

impl ApiKeyAuth {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }

    /// Check request headers against the configured key.
    /// Every request is allowed when no key is configured.
    pub fn is_authorized(&self, headers: &HeaderMap) -> bool {
        match &self.api_key {
            None => true,
            Some(expected) => headers
                .get(API_KEY_HEADER)
                .and_then(|v| v.to_str().ok())
                .is_some_and(|provided| provided == expected),
        }
    }
}

/// Reject requests without a valid `X-API-Key` header
pub async fn auth_middleware(request: Request<Body>, next: Next) -> Response {
    let authorized = request
        .extensions()
        .get::<ApiKeyAuth>()
        .is_none_or(|auth| auth.is_authorized(request.headers()));

    if !authorized {
        tracing::warn!(path = %request.uri().path(), "Rejected request with missing or invalid API key");
        return AppError::Unauthorized("Missing or invalid API key".to_string()).into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_no_key_configured_allows_everything() {
        let auth = ApiKeyAuth::new(None);
        assert!(auth.is_authorized(&HeaderMap::new()));
    }

    #[test]
    fn test_key_must_match() {
        let auth = ApiKeyAuth::new(Some("secret".to_string()));
        let mut headers = HeaderMap::new();
        assert!(!auth.is_authorized(&headers));

        headers.insert(API_KEY_HEADER, HeaderValue::from_static("wrong"));
        assert!(!auth.is_authorized(&headers));

        headers.insert(API_KEY_HEADER, HeaderValue::from_static("secret"));
        assert!(auth.is_authorized(&headers));
    }
}
