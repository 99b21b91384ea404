//! Slash commands
//!
//! Adding the first subcommand or group to a slash command replaces the
//! command's own options: a command with children only routes to them.
//! When invoked, the parent callback (and the group callback, if any) runs
//! with the bare interaction before the subcommand receives the options.

use interject_domain::constants::DEFAULT_COMMAND_DESCRIPTION;
use interject_domain::{Callback, Error, Result, Value};
use serde_json::{Map, Value as JsonValue};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use super::call_bound;
use crate::binding::option_specs;
use crate::constants::{KIND_SLASH_COMMAND, KIND_SUB_COMMAND, KIND_SUB_COMMAND_GROUP};
use crate::interaction::Interaction;
use crate::options::{CommandMetadata, CommandOptions, OptionKind, OptionSpec, SubCommandOptions};
use crate::registrar::Registrar;

impl Registrar {
    /// Register `callback` as a slash command
    pub fn slash_command(
        &self,
        options: CommandOptions,
        callback: &Callback,
    ) -> Result<InvokableSlashCommand> {
        Self::check_target(callback)?;
        let metadata = options.resolve(callback.name(), self.defaults())?;
        let wrapped = self.register(callback, KIND_SLASH_COMMAND, &metadata.name)?;
        let body_options = option_specs(wrapped.signature(), &options.connectors, 0);
        Ok(InvokableSlashCommand {
            metadata,
            callback: wrapped,
            connectors: options.connectors,
            body_options,
            sub_commands: BTreeMap::new(),
            groups: BTreeMap::new(),
            cog: None,
            registrar: self.clone(),
        })
    }

    fn sub_command(&self, options: SubCommandOptions, callback: &Callback) -> Result<SubCommand> {
        Self::check_target(callback)?;
        let name = child_name(&options, callback);
        let wrapped = self.register(callback, KIND_SUB_COMMAND, &name)?;
        Ok(SubCommand::new(name, options, wrapped))
    }
}

/// A registered slash command
pub struct InvokableSlashCommand {
    metadata: CommandMetadata,
    callback: Callback,
    connectors: HashMap<String, String>,
    body_options: Vec<OptionSpec>,
    sub_commands: BTreeMap<String, SubCommand>,
    groups: BTreeMap<String, SubCommandGroup>,
    cog: Option<Value>,
    registrar: Registrar,
}

/// A direct child of a slash command
#[derive(Debug, Clone, Copy)]
pub enum SlashChild<'a> {
    SubCommand(&'a SubCommand),
    Group(&'a SubCommandGroup),
}

impl InvokableSlashCommand {
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn description(&self) -> &str {
        &self.metadata.description
    }

    pub fn metadata(&self) -> &CommandMetadata {
        &self.metadata
    }

    /// The injected callback; its signature is what the host sees
    pub fn callback(&self) -> &Callback {
        &self.callback
    }

    /// Options registered with the host
    pub fn options(&self) -> &[OptionSpec] {
        &self.body_options
    }

    /// Attach the state handed to receiver parameters of this command and its children
    pub fn with_cog(mut self, cog: Value) -> Self {
        self.cog = Some(cog);
        self
    }

    pub fn child(&self, name: &str) -> Option<SlashChild<'_>> {
        self.sub_commands
            .get(name)
            .map(SlashChild::SubCommand)
            .or_else(|| self.groups.get(name).map(SlashChild::Group))
    }

    pub fn has_children(&self) -> bool {
        !self.sub_commands.is_empty() || !self.groups.is_empty()
    }

    /// Add a subcommand under this command
    pub fn sub_command(
        &mut self,
        options: SubCommandOptions,
        callback: &Callback,
    ) -> Result<&mut SubCommand> {
        self.ensure_free(&child_name(&options, callback))?;
        let sub = self.registrar.sub_command(options, callback)?;
        self.clear_own_options();
        self.body_options.push(sub.option.clone());
        Ok(self.sub_commands.entry(sub.name.clone()).or_insert(sub))
    }

    /// Add a subcommand group under this command
    pub fn sub_command_group(
        &mut self,
        options: SubCommandOptions,
        callback: &Callback,
    ) -> Result<&mut SubCommandGroup> {
        let name = child_name(&options, callback);
        self.ensure_free(&name)?;
        Registrar::check_target(callback)?;
        let wrapped = self
            .registrar
            .register(callback, KIND_SUB_COMMAND_GROUP, &name)?;
        let description = options
            .description
            .clone()
            .unwrap_or_else(|| DEFAULT_COMMAND_DESCRIPTION.to_string());
        let group = SubCommandGroup {
            option: OptionSpec::nested(&name, &description, OptionKind::SubCommandGroup),
            name: name.clone(),
            callback: wrapped,
            extras: options.extras,
            sub_commands: BTreeMap::new(),
            registrar: self.registrar.clone(),
        };
        self.clear_own_options();
        self.body_options.push(group.option.clone());
        Ok(self.groups.entry(name).or_insert(group))
    }

    /// Run this command for `interaction`
    pub async fn invoke(&self, interaction: &Interaction) -> Result<Value> {
        let path = interaction.path();
        if !self.has_children() {
            if path.len() > 1 {
                return Err(Error::invalid_argument(format!(
                    "{} has no subcommand '{}'",
                    self.name(),
                    path[1..].join(" ")
                )));
            }
            return call_bound(&self.callback, &self.connectors, self.cog.clone(), interaction).await;
        }

        let bare = interaction.without_options();
        call_bound(&self.callback, &self.connectors, self.cog.clone(), &bare).await?;

        let child = path.get(1).ok_or_else(|| {
            Error::invalid_argument(format!("{} requires a subcommand", self.name()))
        })?;
        match self.child(child) {
            Some(SlashChild::SubCommand(sub)) => sub.invoke(self.cog.clone(), interaction).await,
            Some(SlashChild::Group(group)) => {
                call_bound(&group.callback, &HashMap::new(), self.cog.clone(), &bare).await?;
                let name = path.get(2).ok_or_else(|| {
                    Error::invalid_argument(format!("{} {} requires a subcommand", self.name(), group.name))
                })?;
                let sub = group.sub_commands.get(name).ok_or_else(|| {
                    Error::invalid_argument(format!(
                        "{} {} has no subcommand '{name}'",
                        self.name(),
                        group.name
                    ))
                })?;
                sub.invoke(self.cog.clone(), interaction).await
            }
            None => Err(Error::invalid_argument(format!(
                "{} has no subcommand '{child}'",
                self.name()
            ))),
        }
    }

    fn ensure_free(&self, name: &str) -> Result<()> {
        if self.child(name).is_some() {
            return Err(Error::invalid_argument(format!(
                "{} already has a child named '{name}'",
                self.name()
            )));
        }
        Ok(())
    }

    fn clear_own_options(&mut self) {
        if !self.has_children() && !self.body_options.is_empty() {
            debug!(
                command = self.name(),
                cleared = self.body_options.len(),
                "Replacing command options with subcommands"
            );
            self.body_options.clear();
        }
    }
}

impl std::fmt::Debug for InvokableSlashCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvokableSlashCommand")
            .field("metadata", &self.metadata)
            .field("options", &self.body_options)
            .finish_non_exhaustive()
    }
}

/// A subcommand of a slash command or group
#[derive(Debug)]
pub struct SubCommand {
    name: String,
    callback: Callback,
    connectors: HashMap<String, String>,
    extras: Map<String, JsonValue>,
    option: OptionSpec,
}

impl SubCommand {
    fn new(name: String, options: SubCommandOptions, callback: Callback) -> Self {
        let description = options
            .description
            .unwrap_or_else(|| DEFAULT_COMMAND_DESCRIPTION.to_string());
        let mut option = OptionSpec::nested(&name, &description, OptionKind::SubCommand);
        option.options = option_specs(callback.signature(), &options.connectors, 0);
        Self {
            name,
            callback,
            connectors: options.connectors,
            extras: options.extras,
            option,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.option.description
    }

    pub fn callback(&self) -> &Callback {
        &self.callback
    }

    pub fn extras(&self) -> &Map<String, JsonValue> {
        &self.extras
    }

    /// The option representing this subcommand in its parent
    pub fn option(&self) -> &OptionSpec {
        &self.option
    }

    async fn invoke(&self, cog: Option<Value>, interaction: &Interaction) -> Result<Value> {
        call_bound(&self.callback, &self.connectors, cog, interaction).await
    }
}

/// A group of subcommands under a slash command
#[derive(Debug)]
pub struct SubCommandGroup {
    name: String,
    callback: Callback,
    extras: Map<String, JsonValue>,
    sub_commands: BTreeMap<String, SubCommand>,
    option: OptionSpec,
    registrar: Registrar,
}

impl SubCommandGroup {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn callback(&self) -> &Callback {
        &self.callback
    }

    pub fn extras(&self) -> &Map<String, JsonValue> {
        &self.extras
    }

    /// The option representing this group in its parent
    pub fn option(&self) -> &OptionSpec {
        &self.option
    }

    pub fn sub_command_names(&self) -> impl Iterator<Item = &str> {
        self.sub_commands.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&SubCommand> {
        self.sub_commands.get(name)
    }

    /// Add a subcommand to this group
    pub fn sub_command(
        &mut self,
        options: SubCommandOptions,
        callback: &Callback,
    ) -> Result<&mut SubCommand> {
        let name = child_name(&options, callback);
        if self.sub_commands.contains_key(&name) {
            return Err(Error::invalid_argument(format!(
                "{} already has a subcommand named '{name}'",
                self.name
            )));
        }
        let sub = self.registrar.sub_command(options, callback)?;
        self.option.options.push(sub.option.clone());
        Ok(self.sub_commands.entry(name).or_insert(sub))
    }
}

fn child_name(options: &SubCommandOptions, callback: &Callback) -> String {
    options
        .name
        .clone()
        .unwrap_or_else(|| callback.name().to_string())
}
