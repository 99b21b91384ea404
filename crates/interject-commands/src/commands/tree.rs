//! Command tree
//!
//! Holds every registered command, persistent view and modal, and routes
//! interactions to them by kind and name.

use interject_domain::{Error, Result, Value};
use std::collections::BTreeMap;
use tracing::debug;

use crate::commands::{ContextMenuCommand, ContextMenuKind, InvokableSlashCommand};
use crate::constants::{KIND_MODAL, KIND_SLASH_COMMAND};
use crate::interaction::{Interaction, InteractionKind};
use crate::options::CommandMetadata;
use crate::ui::{Modal, View};

/// Registered commands and components of one bot
#[derive(Debug, Default)]
pub struct CommandTree {
    slash: BTreeMap<String, InvokableSlashCommand>,
    user: BTreeMap<String, ContextMenuCommand>,
    message: BTreeMap<String, ContextMenuCommand>,
    views: Vec<View>,
    modals: BTreeMap<String, Modal>,
}

impl CommandTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_slash_command(&mut self, command: InvokableSlashCommand) -> Result<()> {
        if self.slash.contains_key(command.name()) {
            return Err(Error::already_registered(command.name(), KIND_SLASH_COMMAND));
        }
        debug!(command = command.name(), "Added slash command");
        self.slash.insert(command.name().to_string(), command);
        Ok(())
    }

    pub fn add_user_command(&mut self, command: ContextMenuCommand) -> Result<()> {
        Self::add_context_menu(&mut self.user, ContextMenuKind::User, command)
    }

    pub fn add_message_command(&mut self, command: ContextMenuCommand) -> Result<()> {
        Self::add_context_menu(&mut self.message, ContextMenuKind::Message, command)
    }

    /// Keep `view` listening for component interactions
    pub fn add_view(&mut self, view: View) {
        self.views.push(view);
    }

    pub fn add_modal(&mut self, modal: Modal) -> Result<()> {
        if self.modals.contains_key(modal.custom_id()) {
            return Err(Error::already_registered(modal.custom_id(), KIND_MODAL));
        }
        self.modals.insert(modal.custom_id().to_string(), modal);
        Ok(())
    }

    /// Slash command named `name`
    pub fn get(&self, name: &str) -> Option<&InvokableSlashCommand> {
        self.slash.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut InvokableSlashCommand> {
        self.slash.get_mut(name)
    }

    pub fn user_command(&self, name: &str) -> Option<&ContextMenuCommand> {
        self.user.get(name)
    }

    pub fn message_command(&self, name: &str) -> Option<&ContextMenuCommand> {
        self.message.get(name)
    }

    pub fn slash_commands(&self) -> impl Iterator<Item = &InvokableSlashCommand> {
        self.slash.values()
    }

    /// Metadata of every command that syncs automatically
    pub fn commands_to_sync(&self) -> Vec<&CommandMetadata> {
        self.slash
            .values()
            .map(InvokableSlashCommand::metadata)
            .chain(self.user.values().map(ContextMenuCommand::metadata))
            .chain(self.message.values().map(ContextMenuCommand::metadata))
            .filter(|metadata| metadata.auto_sync)
            .collect()
    }

    /// Route `interaction` to the command or component it targets
    pub async fn dispatch(&self, interaction: &Interaction) -> Result<Value> {
        debug!(kind = ?interaction.kind(), name = interaction.name(), "Dispatching interaction");
        match interaction.kind() {
            InteractionKind::SlashCommand => {
                let command = self
                    .get(interaction.name())
                    .ok_or_else(|| unknown("slash command", interaction.name()))?;
                command.invoke(interaction).await
            }
            InteractionKind::UserCommand => {
                let command = self
                    .user_command(interaction.name())
                    .ok_or_else(|| unknown("user command", interaction.name()))?;
                command.invoke(interaction).await
            }
            InteractionKind::MessageCommand => {
                let command = self
                    .message_command(interaction.name())
                    .ok_or_else(|| unknown("message command", interaction.name()))?;
                command.invoke(interaction).await
            }
            InteractionKind::Component => {
                let view = self
                    .views
                    .iter()
                    .find(|view| view.item(interaction.name()).is_some())
                    .ok_or_else(|| unknown("component", interaction.name()))?;
                view.dispatch(interaction).await
            }
            InteractionKind::ModalSubmit => {
                let modal = self
                    .modals
                    .get(interaction.name())
                    .ok_or_else(|| unknown("modal", interaction.name()))?;
                modal.submit(interaction).await
            }
        }
    }

    fn add_context_menu(
        commands: &mut BTreeMap<String, ContextMenuCommand>,
        kind: ContextMenuKind,
        command: ContextMenuCommand,
    ) -> Result<()> {
        if command.kind() != kind {
            return Err(Error::invalid_argument(format!(
                "{} is a {}, not a {}",
                command.name(),
                command.kind().as_str(),
                kind.as_str()
            )));
        }
        if commands.contains_key(command.name()) {
            return Err(Error::already_registered(command.name(), kind.as_str()));
        }
        commands.insert(command.name().to_string(), command);
        Ok(())
    }
}

fn unknown(kind: &str, name: &str) -> Error {
    Error::invalid_argument(format!("no {kind} named '{name}'"))
}
