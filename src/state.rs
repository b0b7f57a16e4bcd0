use crate::client::github::GithubApi;
use crate::config::Config;
use crate::service::ProfileService;

pub struct State {
    pub config: Config,
    pub github: GithubApi,
    pub service: ProfileService<GithubApi>,
}

pub type AppStateRaw = std::sync::Arc<State>;
pub type AppState = actix_web::web::Data<AppStateRaw>;
