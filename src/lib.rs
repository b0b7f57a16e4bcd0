#[macro_use]
extern crate nonblock_logger;
#[macro_use]
extern crate async_trait;
#[macro_use]
extern crate serde;
#[macro_use]
extern crate lazy_static;

pub mod client;
pub mod config;
pub mod events;
pub mod handlers;
pub mod models;
pub mod render;
pub mod service;
pub mod state;

use config::Config;

lazy_static! {
    pub static ref CONFIG: Config = Config::parse_from_env();
}
