use crate::render;
use crate::service::{ProfileContainer, DEFAULT_USERNAME};
use crate::state::AppState;

use actix_web::{get, http::header::ContentType, web, HttpResponse};

#[derive(Deserialize, Debug)]
pub struct SearchQuery {
    username: Option<String>,
}

/// Server-rendered search page. The form submits back here with
/// `?username=`; without one we load the default profile, same as the
/// quick-load link.
#[get("/")]
async fn index(query: web::Query<SearchQuery>, state: AppState) -> HttpResponse {
    let username = query
        .into_inner()
        .username
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| DEFAULT_USERNAME.to_string());

    let container = ProfileContainer::new();
    state.service.load_profile(&username, &container).await;

    let page = render::page(&username, &container.html(), container.ui().button_label());

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page)
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(index);
}
