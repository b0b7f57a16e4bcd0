use chrono::DateTime;

/// One fetched GitHub user, as returned by `GET /users/{username}`.
///
/// Everything except `login` is optional; the numeric counts default to zero
/// when the upstream omits them. Constructed once per successful fetch and
/// never mutated; a new search simply supersedes the previous instance.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Profile {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub twitter_username: Option<String>,
    pub email: Option<String>,
    pub html_url: Option<String>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    pub created_at: Option<String>,
}

impl Profile {
    /// The display name: `name` when non-empty, falling back to the handle.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.login,
        }
    }

    /// `created_at` rendered as an en-US long date ("January 5, 2020").
    /// `None` when the timestamp is absent or not RFC 3339.
    pub fn formatted_join_date(&self) -> Option<String> {
        let raw = self.created_at.as_deref()?;
        let date = DateTime::parse_from_rfc3339(raw).ok()?;
        Some(date.format("%B %-d, %Y").to_string())
    }

    /// The blog field with an `https://` scheme prepended when it has none.
    /// `None` when the field is absent or empty.
    pub fn blog_url(&self) -> Option<String> {
        let blog = self.blog.as_deref().filter(|b| !b.is_empty())?;
        if blog.starts_with("http") {
            Some(blog.to_string())
        } else {
            Some(format!("https://{}", blog))
        }
    }

    /// Twitter profile URL built from the handle, when one is set.
    pub fn twitter_url(&self) -> Option<String> {
        self.twitter_username
            .as_deref()
            .filter(|handle| !handle.is_empty())
            .map(|handle| format!("https://twitter.com/{}", handle))
    }

    /// Link to the user's GitHub page. Falls back to a URL built from the
    /// handle so the renderer's GitHub link is always present.
    pub fn profile_url(&self) -> String {
        match self.html_url.as_deref() {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => format!("https://github.com/{}", self.login),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn profile(login: &str) -> Profile {
        serde_json::from_value(serde_json::json!({ "login": login }))
            .expect("minimal profile should decode")
    }

    #[test]
    fn decodes_counts_and_falls_back_to_zero() {
        let p: Profile = serde_json::from_value(serde_json::json!({
            "login": "testuser",
            "public_repos": 20,
            "followers": 100,
            "following": 50,
        }))
        .expect("decode");
        assert_eq!(p.public_repos, 20);
        assert_eq!(profile("bare").followers, 0);
    }

    #[test]
    fn display_name_prefers_non_empty_name() {
        let mut p = profile("octocat");
        assert_eq!(p.display_name(), "octocat");
        p.name = Some(String::new());
        assert_eq!(p.display_name(), "octocat");
        p.name = Some("The Octocat".to_string());
        assert_eq!(p.display_name(), "The Octocat");
    }

    #[test]
    fn join_date_renders_long_form_or_nothing() {
        let mut p = profile("octocat");
        assert_eq!(p.formatted_join_date(), None);
        p.created_at = Some("2011-01-25T18:44:36Z".to_string());
        assert_eq!(p.formatted_join_date().as_deref(), Some("January 25, 2011"));
        p.created_at = Some("not a date".to_string());
        assert_eq!(p.formatted_join_date(), None);
    }

    #[rstest]
    #[case::schemeless("example.com", Some("https://example.com"))]
    #[case::https("https://example.com", Some("https://example.com"))]
    #[case::http("http://example.com", Some("http://example.com"))]
    #[case::empty("", None)]
    fn blog_url_gains_a_scheme_when_missing(
        #[case] blog: &str,
        #[case] expected: Option<&str>,
    ) {
        let mut p = profile("octocat");
        p.blog = Some(blog.to_string());
        assert_eq!(p.blog_url().as_deref(), expected);
        p.blog = None;
        assert_eq!(p.blog_url(), None);
    }

    #[test]
    fn twitter_url_only_when_handle_present() {
        let mut p = profile("octocat");
        assert_eq!(p.twitter_url(), None);
        p.twitter_username = Some("octo".to_string());
        assert_eq!(p.twitter_url().as_deref(), Some("https://twitter.com/octo"));
    }

    #[test]
    fn profile_url_falls_back_to_handle() {
        let mut p = profile("octocat");
        assert_eq!(p.profile_url(), "https://github.com/octocat");
        p.html_url = Some("https://github.com/The-Octocat".to_string());
        assert_eq!(p.profile_url(), "https://github.com/The-Octocat");
    }
}
