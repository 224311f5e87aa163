// Module declarations
pub mod cli;
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod filtering;
pub mod formatting;
pub mod logging;
pub mod models;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use cli::build_cli;
pub use cli_context::{CliContext, CliContextBuilder};
pub use client::LinearClient;
pub use config::{Config, ListConfig, load_config, save_config};
pub use error::{LinearError, LinearResult};
pub use models::*;
