use crate::client::github::GithubApi;
use crate::events::{EventKind, EventPublisher, ProfileEvent};
use crate::service::ProfileService;
use crate::state::*;

use std::env;
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub github_api_base: String,
    pub github_api_token: Option<String>,
    pub gh_user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 3000,
            github_api_base: "https://api.github.com".to_string(),
            github_api_token: None,
            gh_user_agent: concat!("octoview/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Config {
    pub fn parse_from_env() -> Self {
        // Load environment variables from a .env file. This is used for dev workflows.
        dotenv::dotenv().ok();

        let mut env_vars: std::collections::HashMap<String, String> = env::vars().collect();

        // Note: it's okay to panic in places like this, because a malformed
        // environment means we can't launch the server at all, and it only
        // happens at startup.

        let defaults = Config::default();

        let port = match env_vars.remove("PORT") {
            Some(p) => p.parse::<u16>().expect("invalid port"),
            None => defaults.port,
        };

        let github_api_base = env_vars
            .remove("GITHUB_API_BASE")
            .map(|base| base.trim_end_matches('/').to_string())
            .unwrap_or(defaults.github_api_base);

        // The token is optional: without it we still talk to GitHub, just
        // unauthenticated and subject to the anonymous rate limit.
        let github_api_token = env_vars
            .remove("GITHUB_API_TOKEN")
            .filter(|t| !t.is_empty());

        let gh_user_agent = env_vars
            .remove("GH_USER_AGENT")
            .unwrap_or(defaults.gh_user_agent);

        Config {
            port,
            github_api_base,
            github_api_token,
            gh_user_agent,
        }
    }

    pub fn into_state(self) -> AppStateRaw {
        info!(
            "config: port={} github_api_base={} token_configured={}",
            self.port,
            self.github_api_base,
            self.github_api_token.is_some()
        );

        let github = GithubApi::new(
            &self.github_api_base,
            self.github_api_token.as_deref(),
            &self.gh_user_agent,
        );

        let events = EventPublisher::new();
        register_logging_subscribers(&events);

        let service = ProfileService::new(github.clone(), events);

        Arc::new(State {
            config: self,
            github,
            service,
        })
    }
}

/// Observability subscribers for the profile-load lifecycle. One per event,
/// logging through the ambient logger.
fn register_logging_subscribers(events: &EventPublisher) {
    events.subscribe(EventKind::LoadStart, |event| {
        if let ProfileEvent::LoadStart { username } = event {
            info!("profile load started: {}", username);
        }
        Ok(())
    });

    events.subscribe(EventKind::LoadSuccess, |event| {
        if let ProfileEvent::LoadSuccess { profile } = event {
            info!("profile loaded successfully: {}", profile.login);
        }
        Ok(())
    });

    events.subscribe(EventKind::LoadError, |event| {
        if let ProfileEvent::LoadError { message } = event {
            log::error!("profile load failed: {}", message);
        }
        Ok(())
    });
}

#[derive(clap::Parser, Debug)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
pub struct Opts {
    // The number of occurrences of the `v/verbose` flag
    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[clap(short, long, parse(from_occurrences))]
    pub verbose: u8,
}

impl Opts {
    pub fn parse_from_args() -> (JoinHandle, Self) {
        use clap::Parser;
        let opt: Self = Opts::parse();

        let level = match opt.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _more => LevelFilter::Trace,
        };

        let formater = BaseFormater::new()
            .local(true)
            .color(true)
            .level(4)
            .formater(format);
        let filter = BaseFilter::new()
            .starts_with(true)
            .notfound(true)
            .max_level(level)
            .chain(
                "reqwest",
                if opt.verbose > 1 {
                    LevelFilter::Debug
                } else {
                    LevelFilter::Warn
                },
            );

        let handle = NonblockLogger::new()
            .filter(filter)
            .unwrap()
            .formater(formater)
            .log_to_stdout()
            .map_err(|e| eprintln!("failed to init nonblock_logger: {:?}", e))
            .unwrap();

        info!("opt: {:?}", opt);

        (handle, opt)
    }
}

use nonblock_logger::{
    log::{LevelFilter, Record},
    BaseFilter, BaseFormater, FixedLevel, JoinHandle, NonblockLogger,
};

pub fn format(base: &BaseFormater, record: &Record) -> String {
    let level = FixedLevel::with_color(record.level(), base.color_get())
        .length(base.level_get())
        .into_colored()
        .into_coloredfg();

    format!(
        "[{} {}#{}:{} {}] {}\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S.%3f"),
        level,
        record.module_path().unwrap_or("*"),
        record.line().unwrap_or(0),
        nonblock_logger::current_thread_name(),
        record.args()
    )
}
