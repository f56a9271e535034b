//! The shared API client: base URL handling, bearer attachment and the
//! common request/response path every endpoint goes through.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::env;
use std::sync::Arc;
use walkies_core::error::{Result, WalkiesError};
use walkies_core::session::TokenSource;

/// Fallback when `WALKIES_API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Client for the marketplace REST API.
///
/// Reads the current bearer token through the injected [`TokenSource`] on
/// every request, so it always reflects the session store's state without
/// holding a copy of the token itself.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenSource>,
}

/// Shapes a server error body can take; whichever field is present wins.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Extracts a human-readable message from a non-2xx response body.
///
/// Tries a JSON `message`/`error` field first, then the raw body text, then
/// a generic `Error <status>` string.
fn extract_error_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body)
        && let Some(message) = parsed.message.or(parsed.error)
        && !message.trim().is_empty()
    {
        return message;
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    format!("Error {}", status)
}

impl ApiClient {
    /// Creates a client against an explicit base URL.
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenSource>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            tokens,
        }
    }

    /// Creates a client from the `WALKIES_API_URL` environment variable,
    /// falling back to the local default.
    pub fn from_env(tokens: Arc<dyn TokenSource>) -> Self {
        let base_url =
            env::var("WALKIES_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url, tokens)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attaches the current bearer token, when one is present.
    async fn auth_request(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(token) = self.tokens.token().await {
            request.header("Authorization", format!("Bearer {}", token))
        } else {
            request
        }
    }

    pub(crate) async fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.auth_request(self.http.get(self.url(path))).await
    }

    pub(crate) async fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.auth_request(self.http.post(self.url(path))).await
    }

    pub(crate) async fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.auth_request(self.http.put(self.url(path))).await
    }

    /// Sends a request and decodes the JSON response.
    ///
    /// A transport failure, a non-2xx status and an undecodable body each map
    /// to their own error variant; nothing panics across this boundary.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(|e| WalkiesError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_error_message(status.as_u16(), &body);
            tracing::debug!("API error ({}): {}", status, message);
            return Err(WalkiesError::api(status.as_u16(), message));
        }

        response.json::<T>().await.map_err(|e| WalkiesError::Serialization {
            format: "JSON".to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoToken;

    #[async_trait::async_trait]
    impl TokenSource for NoToken {
        async fn token(&self) -> Option<String> {
            None
        }
    }

    #[test]
    fn test_extract_error_message_prefers_json_message() {
        assert_eq!(
            extract_error_message(400, r#"{"message": "pet name is required"}"#),
            "pet name is required"
        );
        assert_eq!(
            extract_error_message(400, r#"{"error": "bad request"}"#),
            "bad request"
        );
    }

    #[test]
    fn test_extract_error_message_falls_back_to_body_text() {
        assert_eq!(extract_error_message(500, "upstream timeout"), "upstream timeout");
        // Valid JSON without a known field still falls through to the raw body
        assert_eq!(extract_error_message(500, r#"{"detail": "x"}"#), r#"{"detail": "x"}"#);
    }

    #[test]
    fn test_extract_error_message_generic_when_empty() {
        assert_eq!(extract_error_message(503, ""), "Error 503");
        assert_eq!(extract_error_message(404, "  \n"), "Error 404");
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalised() {
        let client = ApiClient::new("http://localhost:3000/", Arc::new(NoToken));
        assert_eq!(client.url("/api/pets"), "http://localhost:3000/api/pets");
    }
}
