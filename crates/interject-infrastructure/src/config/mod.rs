//! Configuration
//!
//! Layered application configuration: defaults, then an optional TOML file,
//! then `INTERJECT__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, BotConfig, LoggingConfig};
