use crate::state::AppState;

use actix_web::{get, web, Result};
use chrono::{SecondsFormat, Utc};

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Health {
    pub status: &'static str,
    pub timestamp: String,
    pub github_api_token_configured: bool,
}

#[get("")]
async fn health(state: AppState) -> Result<web::Json<Health>> {
    Ok(web::Json(Health {
        status: "OK",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        github_api_token_configured: state.config.github_api_token.is_some(),
    }))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}
