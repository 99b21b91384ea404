//! Configuration types

use crate::constants::{DEFAULT_AUTO_SYNC, DEFAULT_LOG_LEVEL};
use interject_domain::InjectionSettings;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything `setup` and the demo bot read at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Annotation classification settings
    #[serde(default)]
    pub injection: InjectionSettings,

    /// Defaults applied to registered commands
    #[serde(default)]
    pub bot: BotConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level name, or any filter directive accepted by `INTERJECT_LOG`
    pub level: String,

    /// Emit JSON lines instead of human-readable text
    pub json_format: bool,

    /// Also write to a daily-rolling file derived from this path
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Command registration defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Guilds that receive commands registered without explicit guild ids
    pub default_guild_ids: Vec<u64>,

    /// Whether commands are synced after registration
    pub auto_sync: bool,

    /// Register commands only in `default_guild_ids`, never globally
    pub test_guilds_only: bool,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            default_guild_ids: Vec::new(),
            auto_sync: DEFAULT_AUTO_SYNC,
            test_guilds_only: false,
        }
    }
}
