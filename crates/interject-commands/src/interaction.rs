//! Interactions delivered by the host
//!
//! An [`Interaction`] is what the tree hands to the first regular parameter
//! of every callback. Options carry already-typed [`Value`]s.

use interject_domain::Value;

/// A user, as targeted by user commands
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    pub id: u64,
    pub name: String,
}

/// A message, as targeted by message commands
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message {
    pub id: u64,
    pub author_id: u64,
    pub content: String,
}

/// What triggered an interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    SlashCommand,
    UserCommand,
    MessageCommand,
    Component,
    ModalSubmit,
}

/// A single interaction
#[derive(Debug, Clone)]
pub struct Interaction {
    kind: InteractionKind,
    path: Vec<String>,
    guild_id: Option<u64>,
    user_id: u64,
    target: Option<Value>,
    options: Vec<(String, Value)>,
}

impl Interaction {
    fn new(kind: InteractionKind, path: Vec<String>) -> Self {
        Self {
            kind,
            path,
            guild_id: None,
            user_id: 0,
            target: None,
            options: Vec::new(),
        }
    }

    /// Slash command invocation; `path` is the command name followed by
    /// subcommand group and subcommand names, separated by whitespace
    pub fn slash(path: &str) -> Self {
        Self::new(
            InteractionKind::SlashCommand,
            path.split_whitespace().map(str::to_string).collect(),
        )
    }

    /// User context menu invocation on `target`
    pub fn user_command(name: &str, target: User) -> Self {
        let mut interaction = Self::new(InteractionKind::UserCommand, vec![name.to_string()]);
        interaction.target = Some(Value::new(target));
        interaction
    }

    /// Message context menu invocation on `target`
    pub fn message_command(name: &str, target: Message) -> Self {
        let mut interaction = Self::new(InteractionKind::MessageCommand, vec![name.to_string()]);
        interaction.target = Some(Value::new(target));
        interaction
    }

    /// Click or selection on the component with `custom_id`
    pub fn component(custom_id: &str) -> Self {
        Self::new(InteractionKind::Component, vec![custom_id.to_string()])
    }

    /// Submission of the modal with `custom_id`
    pub fn modal_submit(custom_id: &str) -> Self {
        Self::new(InteractionKind::ModalSubmit, vec![custom_id.to_string()])
    }

    pub fn with_option<S: Into<String>>(mut self, name: S, value: Value) -> Self {
        self.options.push((name.into(), value));
        self
    }

    pub fn with_guild(mut self, guild_id: u64) -> Self {
        self.guild_id = Some(guild_id);
        self
    }

    pub fn with_user(mut self, user_id: u64) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn kind(&self) -> InteractionKind {
        self.kind
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Command name or component custom id
    pub fn name(&self) -> &str {
        self.path.first().map_or("", String::as_str)
    }

    pub fn guild_id(&self) -> Option<u64> {
        self.guild_id
    }

    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    /// Target user or message of a context menu command
    pub fn target(&self) -> Option<&Value> {
        self.target.as_ref()
    }

    pub fn options(&self) -> &[(String, Value)] {
        &self.options
    }

    /// Value of the option named `name`
    pub fn option(&self, name: &str) -> Option<&Value> {
        self.options
            .iter()
            .find(|(option, _)| option == name)
            .map(|(_, value)| value)
    }

    /// Same interaction without options, as seen by parent commands
    pub fn without_options(&self) -> Self {
        Self {
            options: Vec::new(),
            ..self.clone()
        }
    }
}
