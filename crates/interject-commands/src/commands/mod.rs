//! Application commands
//!
//! Slash commands with their subcommands and groups, user and message
//! context menu commands, and the [`CommandTree`] dispatching interactions
//! to them.

pub mod context_menu;
pub mod slash;
pub mod tree;

pub use context_menu::{ContextMenuCommand, ContextMenuKind};
pub use slash::{InvokableSlashCommand, SlashChild, SubCommand, SubCommandGroup};
pub use tree::CommandTree;

use interject_domain::{Callback, Result, Value};
use std::collections::HashMap;

use crate::binding::Binder;
use crate::interaction::Interaction;
use crate::options::CommandOptions;
use crate::registrar::Registrar;

/// Register `callback` as a slash command through the process-wide container
pub fn slash_command(options: CommandOptions, callback: &Callback) -> Result<InvokableSlashCommand> {
    Registrar::global().slash_command(options, callback)
}

/// Register `callback` as a user context menu command through the process-wide container
pub fn user_command(options: CommandOptions, callback: &Callback) -> Result<ContextMenuCommand> {
    Registrar::global().user_command(options, callback)
}

/// Register `callback` as a message context menu command through the process-wide container
pub fn message_command(options: CommandOptions, callback: &Callback) -> Result<ContextMenuCommand> {
    Registrar::global().message_command(options, callback)
}

/// Bind `interaction` to the visible signature of `callback` and call it
pub(crate) async fn call_bound(
    callback: &Callback,
    connectors: &HashMap<String, String>,
    state: Option<Value>,
    interaction: &Interaction,
) -> Result<Value> {
    let args = Binder::new(callback.signature(), connectors)
        .with_state(state)
        .bind(interaction)?;
    callback.call(args).await
}
