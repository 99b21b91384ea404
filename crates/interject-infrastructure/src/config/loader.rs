//! Configuration loader
//!
//! Figment merges, later sources winning:
//! 1. `AppConfig::default()`
//! 2. A TOML file, either the explicit path or the first discovered `interject.toml`
//! 3. Environment variables such as `INTERJECT__BOT__AUTO_SYNC=false`

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use interject_domain::{Error, InjectionSettings, Result};
use tracing::{debug, warn};

use crate::config::{AppConfig, BotConfig, LoggingConfig};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::parse_log_level;

/// Loads [`AppConfig`] from defaults, a TOML file and the environment
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Read this file instead of searching for `interject.toml`
    ///
    /// A missing file is logged and skipped, not an error.
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Merge all sources and validate the result
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
        if let Some(path) = self.toml_source() {
            debug!(path = %path.display(), "Merging configuration file");
            figment = figment.merge(Toml::file(path));
        }

        let prefix = format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix);
        let config: AppConfig = figment
            .merge(Env::prefixed(&prefix).split(CONFIG_ENV_SEPARATOR))
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&config)?;
        Ok(config)
    }

    /// Write `config` as TOML that [`load`](Self::load) reads back
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let rendered = toml::to_string_pretty(config).context("Failed to render config as TOML")?;
        std::fs::write(path.as_ref(), rendered).io_context("Failed to write config file")
    }

    fn toml_source(&self) -> Option<PathBuf> {
        if let Some(path) = &self.config_path {
            if path.exists() {
                return Some(path.clone());
            }
            warn!(path = %path.display(), "Configuration file not found, using defaults");
            return None;
        }

        let cwd = std::env::current_dir().ok();
        let candidates = [
            cwd.as_ref().map(|dir| dir.join(DEFAULT_CONFIG_FILENAME)),
            cwd.as_ref()
                .map(|dir| dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::config_dir().map(|dir| dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];
        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

/// Programmatic configuration, bypassing files and environment
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    pub fn with_injection(mut self, injection: InjectionSettings) -> Self {
        self.config.injection = injection;
        self
    }

    pub fn with_bot(mut self, bot: BotConfig) -> Self {
        self.config.bot = bot;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level)?;
    validate_injection_config(&config.injection)?;
    validate_bot_config(&config.bot)?;
    Ok(())
}

fn validate_injection_config(settings: &InjectionSettings) -> Result<()> {
    let lists = [
        ("framework_namespaces", &settings.framework_namespaces),
        ("container_namespaces", &settings.container_namespaces),
        ("marker_origins", &settings.marker_origins),
    ];
    for (field, entries) in lists {
        if entries.iter().any(|entry| entry.trim().is_empty()) {
            return Err(Error::configuration(format!(
                "injection.{field} cannot contain empty entries"
            )));
        }
    }
    Ok(())
}

fn validate_bot_config(bot: &BotConfig) -> Result<()> {
    if bot.test_guilds_only && bot.default_guild_ids.is_empty() {
        return Err(Error::configuration(
            "bot.default_guild_ids cannot be empty when test_guilds_only is enabled",
        ));
    }
    Ok(())
}
