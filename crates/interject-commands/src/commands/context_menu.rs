//! User and message context menu commands
//!
//! The callback receives the interaction followed by the targeted user or
//! message. Context menu commands take no options.

use interject_domain::{Callback, Error, Result, Value};
use std::collections::HashMap;

use crate::binding::Binder;
use crate::constants::{KIND_MESSAGE_COMMAND, KIND_USER_COMMAND};
use crate::interaction::Interaction;
use crate::options::{CommandMetadata, CommandOptions};
use crate::registrar::Registrar;

/// Which context menu a command appears in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextMenuKind {
    User,
    Message,
}

impl ContextMenuKind {
    /// Marker kind recorded on registered callbacks
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => KIND_USER_COMMAND,
            Self::Message => KIND_MESSAGE_COMMAND,
        }
    }
}

impl Registrar {
    /// Register `callback` as a user context menu command
    pub fn user_command(&self, options: CommandOptions, callback: &Callback) -> Result<ContextMenuCommand> {
        self.context_menu(ContextMenuKind::User, options, callback)
    }

    /// Register `callback` as a message context menu command
    pub fn message_command(
        &self,
        options: CommandOptions,
        callback: &Callback,
    ) -> Result<ContextMenuCommand> {
        self.context_menu(ContextMenuKind::Message, options, callback)
    }

    fn context_menu(
        &self,
        kind: ContextMenuKind,
        options: CommandOptions,
        callback: &Callback,
    ) -> Result<ContextMenuCommand> {
        Self::check_target(callback)?;
        let metadata = options.resolve(callback.name(), self.defaults())?;
        let wrapped = self.register(callback, kind.as_str(), &metadata.name)?;
        Ok(ContextMenuCommand {
            kind,
            metadata,
            callback: wrapped,
            cog: None,
        })
    }
}

/// A registered user or message command
#[derive(Debug)]
pub struct ContextMenuCommand {
    kind: ContextMenuKind,
    metadata: CommandMetadata,
    callback: Callback,
    cog: Option<Value>,
}

impl ContextMenuCommand {
    pub fn kind(&self) -> ContextMenuKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn metadata(&self) -> &CommandMetadata {
        &self.metadata
    }

    pub fn callback(&self) -> &Callback {
        &self.callback
    }

    /// Attach the state handed to a receiver parameter
    pub fn with_cog(mut self, cog: Value) -> Self {
        self.cog = Some(cog);
        self
    }

    /// Run this command for `interaction`
    pub async fn invoke(&self, interaction: &Interaction) -> Result<Value> {
        let target = interaction.target().cloned().ok_or_else(|| {
            Error::invalid_argument(format!("{} was invoked without a target", self.name()))
        })?;
        let connectors = HashMap::new();
        let args = Binder::new(self.callback.signature(), &connectors)
            .with_state(self.cog.clone())
            .with_extra(target)
            .bind(interaction)?;
        self.callback.call(args).await
    }
}
