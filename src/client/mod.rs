pub mod github;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde_json::Value;

/// Failures surfaced by the GitHub client stack.
///
/// Nothing below the orchestrator recovers from these; they propagate upward
/// unchanged until either a handler maps them to a response body or the
/// profile service renders them into the error card.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Rejected before any network I/O happens.
    #[error("username is required and must be a non-empty string")]
    InvalidArgument,
    /// The upstream answered with a non-success status.
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },
    /// The request itself could not be completed (DNS, connect, read).
    #[error("network request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// A 2xx response whose body we could not make sense of.
    #[error("malformed GitHub response: {0}")]
    Malformed(String),
}

/// Thin wrapper over a preconfigured `reqwest::Client`.
///
/// One outbound GET per call, no retries, no timeout beyond the transport's
/// own resolution. Default headers carry the API identity so call sites
/// don't repeat them.
#[derive(Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
}

impl HttpClient {
    pub fn new(user_agent: &str, token: Option<&str>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent).expect("invalid user agent"),
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        if let Some(token) = token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .expect("invalid GITHUB_API_TOKEN value");
            headers.insert(AUTHORIZATION, value);
        }

        let inner = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("could not build HTTP client");

        HttpClient { inner }
    }

    /// Issue a single GET and decode the body as JSON.
    ///
    /// A non-success status is normalized into `ClientError::Http` carrying
    /// the numeric status and its canonical reason; the body of a failed
    /// response is discarded, never decoded.
    pub async fn get(&self, url: &str) -> Result<Value, ClientError> {
        let response = self.inner.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ClientError::Malformed(format!("invalid JSON body: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_message_carries_status_and_text() {
        let err = ClientError::Http {
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
    }

    #[test]
    fn invalid_argument_message_matches_contract() {
        assert_eq!(
            ClientError::InvalidArgument.to_string(),
            "username is required and must be a non-empty string"
        );
    }

    #[actix_rt::test]
    async fn connection_failure_maps_to_transport() {
        // Nothing listens on this port; the connect itself must fail.
        let client = HttpClient::new("octoview-test", None);
        let err = client
            .get("http://127.0.0.1:1/users/nobody")
            .await
            .expect_err("connect should fail");
        assert!(matches!(err, ClientError::Transport(_)));
        assert!(err.to_string().starts_with("network request failed"));
    }
}
