//! Registration options
//!
//! [`CommandOptions`] mirrors the host framework's command registration
//! arguments and is passed through unchanged, apart from guild ids which are
//! validated and defaults filled in from [`BotConfig`].

use interject_domain::constants::DEFAULT_COMMAND_DESCRIPTION;
use interject_domain::{Error, Result};
use interject_infrastructure::BotConfig;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::collections::HashMap;

/// Where an application can be installed for a command to be available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallType {
    Guild,
    User,
}

/// Where a command can be used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionContextType {
    Guild,
    BotDm,
    PrivateChannel,
}

/// Options of the command registration adapters
///
/// Guild ids are kept as raw JSON values so lists coming from
/// configuration can be validated at registration time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandOptions {
    /// Command name, defaults to the callback name
    pub name: Option<String>,
    /// Command description, defaults to `"-"`
    pub description: Option<String>,
    pub default_member_permissions: Option<u64>,
    pub dm_permission: Option<bool>,
    pub nsfw: Option<bool>,
    pub install_types: Option<Vec<InstallType>>,
    pub contexts: Option<Vec<InteractionContextType>>,
    /// Guilds to register in, globally when absent
    pub guild_ids: Option<Vec<JsonValue>>,
    /// Option name to parameter name
    pub connectors: HashMap<String, String>,
    pub auto_sync: Option<bool>,
    pub extras: Map<String, JsonValue>,
}

impl CommandOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn default_member_permissions(mut self, permissions: u64) -> Self {
        self.default_member_permissions = Some(permissions);
        self
    }

    pub fn dm_permission(mut self, allowed: bool) -> Self {
        self.dm_permission = Some(allowed);
        self
    }

    pub fn nsfw(mut self, nsfw: bool) -> Self {
        self.nsfw = Some(nsfw);
        self
    }

    pub fn install_types(mut self, install_types: Vec<InstallType>) -> Self {
        self.install_types = Some(install_types);
        self
    }

    pub fn contexts(mut self, contexts: Vec<InteractionContextType>) -> Self {
        self.contexts = Some(contexts);
        self
    }

    pub fn guild_ids<I, V>(mut self, guild_ids: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<JsonValue>,
    {
        self.guild_ids = Some(guild_ids.into_iter().map(Into::into).collect());
        self
    }

    /// Bind the option `option` to the callback parameter `parameter`
    pub fn connector<O: Into<String>, P: Into<String>>(mut self, option: O, parameter: P) -> Self {
        self.connectors.insert(option.into(), parameter.into());
        self
    }

    pub fn auto_sync(mut self, auto_sync: bool) -> Self {
        self.auto_sync = Some(auto_sync);
        self
    }

    pub fn extra<K: Into<String>, V: Into<JsonValue>>(mut self, key: K, value: V) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    /// Validate and fill in defaults
    pub fn resolve(&self, default_name: &str, defaults: &BotConfig) -> Result<CommandMetadata> {
        let explicit = self
            .guild_ids
            .as_deref()
            .map(validate_guild_ids)
            .transpose()?;
        let guild_ids = if defaults.test_guilds_only {
            Some(defaults.default_guild_ids.clone())
        } else {
            explicit.or_else(|| {
                (!defaults.default_guild_ids.is_empty())
                    .then(|| defaults.default_guild_ids.clone())
            })
        };

        Ok(CommandMetadata {
            name: self
                .name
                .clone()
                .unwrap_or_else(|| default_name.to_string()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| DEFAULT_COMMAND_DESCRIPTION.to_string()),
            default_member_permissions: self.default_member_permissions,
            dm_permission: self.dm_permission,
            nsfw: self.nsfw,
            install_types: self.install_types.clone(),
            contexts: self.contexts.clone(),
            guild_ids,
            auto_sync: self.auto_sync.unwrap_or(defaults.auto_sync),
            extras: self.extras.clone(),
        })
    }
}

/// Validated command registration data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandMetadata {
    pub name: String,
    pub description: String,
    pub default_member_permissions: Option<u64>,
    pub dm_permission: Option<bool>,
    pub nsfw: Option<bool>,
    pub install_types: Option<Vec<InstallType>>,
    pub contexts: Option<Vec<InteractionContextType>>,
    /// `None` registers the command globally
    pub guild_ids: Option<Vec<u64>>,
    pub auto_sync: bool,
    pub extras: Map<String, JsonValue>,
}

impl CommandMetadata {
    pub fn is_global(&self) -> bool {
        self.guild_ids.is_none()
    }
}

/// Options of subcommands and subcommand groups
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubCommandOptions {
    pub name: Option<String>,
    pub description: Option<String>,
    pub connectors: HashMap<String, String>,
    pub extras: Map<String, JsonValue>,
}

impl SubCommandOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn connector<O: Into<String>, P: Into<String>>(mut self, option: O, parameter: P) -> Self {
        self.connectors.insert(option.into(), parameter.into());
        self
    }

    pub fn extra<K: Into<String>, V: Into<JsonValue>>(mut self, key: K, value: V) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }
}

/// Kind of a slash command option
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionKind {
    /// A value option; holds the declared type of its parameter
    Value(String),
    SubCommand,
    SubCommandGroup,
}

/// One option of a slash command as registered with the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    pub name: String,
    pub description: String,
    pub kind: OptionKind,
    pub required: bool,
    /// Nested options of subcommands and groups
    pub options: Vec<OptionSpec>,
}

impl OptionSpec {
    pub(crate) fn nested(name: &str, description: &str, kind: OptionKind) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            kind,
            required: false,
            options: Vec::new(),
        }
    }
}

/// Check that every guild id is a non-negative integer
///
/// ```
/// use interject_commands::validate_guild_ids;
/// use serde_json::json;
///
/// assert_eq!(validate_guild_ids(&[json!(1), json!(2)]).unwrap(), vec![1, 2]);
/// assert!(validate_guild_ids(&[json!("1")]).is_err());
/// ```
pub fn validate_guild_ids(guild_ids: &[JsonValue]) -> Result<Vec<u64>> {
    guild_ids
        .iter()
        .map(|entry| {
            entry.as_u64().ok_or_else(|| {
                Error::invalid_argument(format!(
                    "guild_ids must be a sequence of integer ids, got {entry}"
                ))
            })
        })
        .collect()
}
