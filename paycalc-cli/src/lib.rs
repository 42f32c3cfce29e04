pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod render;
pub mod utils;

pub use cli::{Cli, Command};
pub use commands::run;
pub use config::{Config, ConfigError};
