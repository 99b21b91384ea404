//! Infrastructure defaults
//!
//! Classification constants live in `interject_domain::constants`.

/// File looked up by [`ConfigLoader`](crate::config::ConfigLoader)
pub const DEFAULT_CONFIG_FILENAME: &str = "interject.toml";

/// Directory searched under the working directory and the user config dir
pub const DEFAULT_CONFIG_DIR: &str = "interject";

/// `INTERJECT__BOT__AUTO_SYNC=false` overrides `bot.auto_sync`
pub const CONFIG_ENV_PREFIX: &str = "INTERJECT";
pub const CONFIG_ENV_SEPARATOR: &str = "__";

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Full filter directive taking precedence over `logging.level`
pub const LOG_FILTER_ENV: &str = "INTERJECT_LOG";

/// Rolling file stem when `logging.file_output` has none
pub const DEFAULT_LOG_FILE_STEM: &str = "interject";

/// Commands are synced after registration unless configured otherwise
pub const DEFAULT_AUTO_SYNC: bool = true;
