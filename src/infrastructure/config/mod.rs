//! Application configuration.

/// Configuration file structure.
pub mod app_config;
/// Command line arguments.
pub mod args;

pub use app_config::{AppConfig, LogLevel};
pub use args::CliArgs;
