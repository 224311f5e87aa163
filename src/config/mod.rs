#[allow(clippy::module_inception)]
mod config;

pub use config::{Config, ListConfig, default_config_path, get_api_key, load_config, save_config};
