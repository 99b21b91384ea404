//! # Registration Adapters
//!
//! Registers async callbacks with an in-process command and component tree.
//! Every callback is injected and its signature rewritten before the tree
//! sees it, so the tree only ever binds the parameters it owns.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`commands`] | Slash commands, subcommands, context menus, the command tree |
//! | [`ui`] | Buttons, selects, modals and the views holding them |
//! | [`options`] | Registration options and guild id validation |
//! | [`binding`] | Mapping an interaction onto a visible signature |
//! | [`registrar`] | Shared validation and wrapping for every adapter |

pub mod binding;
pub mod commands;
pub mod constants;
pub mod interaction;
pub mod options;
pub mod registrar;
pub mod ui;

pub use commands::{
    CommandTree, ContextMenuCommand, ContextMenuKind, InvokableSlashCommand, SlashChild,
    SubCommand, SubCommandGroup, message_command, slash_command, user_command,
};
pub use interaction::{Interaction, InteractionKind, Message, User};
pub use options::{
    CommandMetadata, CommandOptions, InstallType, InteractionContextType, OptionKind, OptionSpec,
    SubCommandOptions, validate_guild_ids,
};
pub use registrar::Registrar;
pub use ui::{
    Button, ButtonOptions, ButtonStyle, Item, Modal, ModalOptions, Select, SelectChoice,
    SelectKind, SelectOptions, TextInput, TextInputStyle, View,
};
