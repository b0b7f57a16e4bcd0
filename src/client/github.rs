use super::{ClientError, HttpClient};
use crate::models::profile::Profile;

use serde_json::Value;

/// The profile-lookup seam. `GithubApi` is the real implementation; tests
/// substitute their own doubles when driving the orchestrator.
#[async_trait]
pub trait IProfile {
    async fn get_user_profile(&self, username: &str) -> Result<Profile, ClientError>;
}

/// GitHub REST API client for user lookups.
#[derive(Clone)]
pub struct GithubApi {
    http: HttpClient,
    base_url: String,
}

impl GithubApi {
    pub fn new(base_url: &str, token: Option<&str>, user_agent: &str) -> Self {
        GithubApi {
            http: HttpClient::new(user_agent, token),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    // Plain concatenation: usernames are used as a raw path segment, with no
    // escaping of reserved URL characters.
    fn user_url(&self, username: &str) -> String {
        format!("{}/users/{}", self.base_url, username)
    }

    /// Fetch the raw user JSON without decoding it into a model. This is the
    /// proxy's path: the body is relayed to the browser as-is.
    pub async fn fetch_user_raw(&self, username: &str) -> Result<Value, ClientError> {
        self.http.get(&self.user_url(username)).await
    }
}

#[async_trait]
impl IProfile for GithubApi {
    /// Validate the username, fetch, and decode into a `Profile`.
    ///
    /// The empty-username check happens before any network call. A 2xx body
    /// missing `login` fails decoding and is reported as `Malformed` rather
    /// than producing a profile with no handle.
    async fn get_user_profile(&self, username: &str) -> Result<Profile, ClientError> {
        if username.trim().is_empty() {
            return Err(ClientError::InvalidArgument);
        }

        let raw = self.fetch_user_raw(username).await?;
        serde_json::from_value::<Profile>(raw)
            .map_err(|e| ClientError::Malformed(format!("unexpected user payload: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn api() -> GithubApi {
        // The port is never dialled by the validation tests.
        GithubApi::new("http://127.0.0.1:1", None, "octoview-test")
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace("   ")]
    fn rejects_blank_usernames_before_any_io(#[case] username: &str) {
        let err = actix_rt::System::new()
            .block_on(api().get_user_profile(username))
            .expect_err("blank usernames must be rejected");
        assert!(matches!(err, ClientError::InvalidArgument));
    }

    #[test]
    fn user_url_concatenates_base_and_login() {
        assert_eq!(api().user_url("octocat"), "http://127.0.0.1:1/users/octocat");
        // Reserved characters pass through unescaped.
        assert_eq!(api().user_url("a/b"), "http://127.0.0.1:1/users/a/b");
    }

    #[test]
    fn missing_login_is_a_malformed_response() {
        let raw = serde_json::json!({ "name": "No Handle" });
        let err = serde_json::from_value::<Profile>(raw)
            .map_err(|e| ClientError::Malformed(e.to_string()))
            .expect_err("login is required");
        assert!(matches!(err, ClientError::Malformed(_)));
    }
}
