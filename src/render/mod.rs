use crate::client::ClientError;
use crate::models::profile::Profile;

/// The three mutually exclusive card states, dispatched by a single render
/// function.
pub enum LoadView<'a> {
    Loading,
    Ready(&'a Profile),
    Failed(&'a ClientError),
}

/// Produce the profile-card markup for a view. The caller replaces its
/// container content wholesale; there is no incremental diffing.
pub fn render(view: LoadView<'_>) -> String {
    match view {
        LoadView::Loading => render_loading(),
        LoadView::Ready(profile) => render_profile(profile),
        LoadView::Failed(error) => render_error(error),
    }
}

fn render_loading() -> String {
    r#"<div class="profile-card">
    <div class="loading">
        <div class="spinner"></div>
        Fetching profile data...
    </div>
</div>"#
        .to_string()
}

// The card is born with the `show` class: there is no paint frame to defer
// for when rendering server-side.
fn render_profile(profile: &Profile) -> String {
    format!(
        r#"<div class="profile-card show">
{header}
{details}
{links}
</div>"#,
        header = render_header(profile),
        details = render_details(profile),
        links = render_links(profile),
    )
}

fn render_header(profile: &Profile) -> String {
    let mut info = String::new();
    info.push_str(&format!(
        r#"<h2 class="profile-name">{}</h2>
<p class="profile-username">@{}</p>"#,
        escape(profile.display_name()),
        escape(&profile.login),
    ));

    // Optional lines are omitted entirely when the field is absent.
    if let Some(bio) = non_empty(&profile.bio) {
        info.push_str(&format!("\n<p class=\"profile-bio\">{}</p>", escape(bio)));
    }
    if let Some(location) = non_empty(&profile.location) {
        info.push_str(&format!(
            "\n<p class=\"profile-meta\">&#128205; {}</p>",
            escape(location)
        ));
    }
    if let Some(company) = non_empty(&profile.company) {
        info.push_str(&format!(
            "\n<p class=\"profile-meta\">&#127970; {}</p>",
            escape(company)
        ));
    }

    let avatar = match non_empty(&profile.avatar_url) {
        Some(url) => format!(
            r#"<img src="{}" alt="{}" class="avatar">"#,
            escape(url),
            escape(profile.display_name()),
        ),
        None => String::new(),
    };

    format!(
        r#"<div class="profile-header">
{avatar}
<div class="profile-info">
{info}
</div>
</div>"#
    )
}

fn render_details(profile: &Profile) -> String {
    let mut items = vec![
        detail_item(&profile.public_repos.to_string(), "Repositories"),
        detail_item(&profile.followers.to_string(), "Followers"),
        detail_item(&profile.following.to_string(), "Following"),
    ];
    if let Some(joined) = profile.formatted_join_date() {
        items.push(detail_item(&joined, "Joined GitHub"));
    }

    format!(
        "<div class=\"profile-details\">\n{}\n</div>",
        items.join("\n")
    )
}

fn detail_item(value: &str, label: &str) -> String {
    format!(
        r#"<div class="detail-item">
<span class="detail-value">{}</span>
<span class="detail-label">{}</span>
</div>"#,
        escape(value),
        label,
    )
}

fn render_links(profile: &Profile) -> String {
    let mut links = Vec::new();

    // The GitHub link is unconditional; the rest appear only when their
    // derived value exists.
    links.push(profile_link(&profile.profile_url(), "View on GitHub"));

    if let Some(blog) = profile.blog_url() {
        links.push(profile_link(&blog, "Website"));
    }
    if let Some(twitter) = profile.twitter_url() {
        links.push(profile_link(&twitter, "Twitter"));
    }
    if let Some(email) = non_empty(&profile.email) {
        links.push(profile_link(&format!("mailto:{}", email), "Email"));
    }

    format!("<div class=\"profile-links\">{}</div>", links.join(""))
}

fn profile_link(href: &str, label: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank" class="profile-link">{}</a>"#,
        escape(href),
        label,
    )
}

fn render_error(error: &ClientError) -> String {
    format!(
        r#"<div class="profile-card show">
    <div class="error">
        <h3>Error</h3>
        <p>{}</p>
    </div>
</div>"#,
        escape(&error.to_string()),
    )
}

/// Full search page wrapping an already-rendered card.
pub fn page(username: &str, card: &str, button_label: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>GitHub Profile Viewer</title>
<style>
body {{ font-family: sans-serif; max-width: 640px; margin: 2rem auto; }}
.profile-card {{ border: 1px solid #ddd; border-radius: 8px; padding: 1rem; }}
.profile-details {{ display: flex; gap: 1rem; }}
.detail-value {{ font-weight: bold; display: block; }}
.error {{ color: #c0392b; }}
</style>
</head>
<body>
<form id="searchForm" action="/" method="get">
    <input id="usernameInput" name="username" value="{username}" placeholder="GitHub username">
    <button id="searchBtn" type="submit">{label}</button>
    <a id="quickLoadBtn" href="/?username={default}">Quick load</a>
</form>
<div id="profileContainer">
{card}
</div>
</body>
</html>"#,
        username = escape(username),
        label = button_label,
        default = crate::service::DEFAULT_USERNAME,
        card = card,
    )
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        serde_json::from_value(serde_json::json!({
            "login": "testuser",
            "name": "Test User",
            "followers": 100,
            "following": 50,
            "public_repos": 20,
        }))
        .expect("profile should decode")
    }

    #[test]
    fn success_card_shows_name_handle_and_counts() {
        let html = render(LoadView::Ready(&profile()));
        assert!(html.contains("Test User"));
        assert!(html.contains("@testuser"));
        assert!(html.contains(r#"<span class="detail-value">20</span>"#));
        assert!(html.contains("Repositories"));
        assert!(html.contains("profile-card show"));
    }

    #[test]
    fn optional_blocks_are_omitted_not_empty() {
        let mut p = profile();
        p.bio = None;
        p.email = None;
        p.twitter_username = None;
        p.blog = None;
        let html = render(LoadView::Ready(&p));
        assert!(!html.contains("profile-bio"));
        assert!(!html.contains("mailto:"));
        assert!(!html.contains("twitter.com"));
        assert!(html.contains("View on GitHub"));
        // No created_at on the fixture either, so the join item disappears.
        assert!(!html.contains("Joined GitHub"));
    }

    #[test]
    fn conditional_links_appear_with_their_fields() {
        let mut p = profile();
        p.blog = Some("example.com".to_string());
        p.twitter_username = Some("testuser".to_string());
        p.email = Some("test@example.com".to_string());
        let html = render(LoadView::Ready(&p));
        assert!(html.contains(r#"href="https://example.com""#));
        assert!(html.contains(r#"href="https://twitter.com/testuser""#));
        assert!(html.contains(r#"href="mailto:test@example.com""#));
    }

    #[test]
    fn user_content_is_escaped() {
        let mut p = profile();
        p.bio = Some("<script>alert(1)</script>".to_string());
        let html = render(LoadView::Ready(&p));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn loading_card_is_a_fixed_placeholder() {
        let html = render(LoadView::Loading);
        assert!(html.contains("Fetching profile data..."));
        assert!(!html.contains("show"));
    }

    #[test]
    fn error_card_carries_the_message() {
        let err = ClientError::Http {
            status: 404,
            status_text: "Not Found".to_string(),
        };
        let html = render(LoadView::Failed(&err));
        assert!(html.contains("HTTP 404: Not Found"));
        assert!(html.contains("profile-card show"));
    }
}
