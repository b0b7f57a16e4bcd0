use crate::client::ClientError;
use crate::state::AppState;

use actix_web::{get, web, HttpResponse};
use serde_json::json;

/// Same-origin proxy in front of `GET https://api.github.com/users/{username}`.
///
/// A 2xx upstream body is relayed as-is. Anything else becomes a fixed-shape
/// 500 JSON body; upstream error bodies are never forwarded to the browser.
#[get("/{username}")]
async fn user(path: web::Path<String>, state: AppState) -> HttpResponse {
    let username = path.into_inner();

    match state.github.fetch_user_raw(&username).await {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(ClientError::Http { status, .. }) => {
            log::error!(
                "GitHub responded {} for proxied user lookup: {}",
                status,
                username
            );
            HttpResponse::InternalServerError().json(json!({
                "error": format!("GitHub API error: {}", status),
            }))
        }
        Err(e) => {
            log::error!("proxied user lookup failed for {}: {}", username, e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Failed to fetch GitHub user data",
                "details": e.to_string(),
            }))
        }
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(user);
}
