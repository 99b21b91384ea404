//! Command line interface
//!
//! Each subcommand simulates one interaction and prints the callback result.

use clap::{Parser, Subcommand};
use interject::commands::{Interaction, Registrar, User};
use interject::infrastructure::logging::init_logging;
use interject::infrastructure::setup_with_slot;
use interject::{AppConfig, ConfigLoader, ContainerSlot, Error, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::bot::{ClickCounter, build_tree, container};

/// Command line interface for the greeter bot
#[derive(Parser, Debug)]
#[command(name = "greeter-bot")]
#[command(about = "Greeter Bot - Simulated interactions with injected services")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Greeting used by the Greetings service
    #[arg(long, default_value = "Hello")]
    pub greeting: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Interaction to simulate
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run a slash command, e.g. `slash "settings show"`
    Slash {
        /// Command path, subcommands separated by spaces
        path: String,

        /// Option as `name=value`; repeatable
        #[arg(short = 'o', long = "option", value_parser = parse_option)]
        options: Vec<(String, String)>,
    },

    /// Run a user context menu command against a user
    User {
        /// Command name
        command: String,

        /// Target user id
        #[arg(long)]
        id: u64,

        /// Target user name
        #[arg(long = "name")]
        user_name: String,
    },

    /// Click a button
    Click {
        /// Custom id of the button
        custom_id: String,
    },

    /// Print the commands that would be synced, as JSON
    List,
}

/// Load configuration, initialize logging and execute the command
pub async fn run(cli: Cli) -> Result<String, Box<dyn std::error::Error>> {
    let loader = match &cli.config {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let config = loader.load()?;
    init_logging(&config.logging)?;
    info!(command = ?cli.command, "Starting greeter bot");

    execute(&cli.command, &config, &cli.greeting).await
}

/// Build the bot from `config` and execute `command` against it
pub async fn execute(
    command: &Command,
    config: &AppConfig,
    greeting: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let slot = Arc::new(ContainerSlot::new());
    setup_with_slot(&slot, Arc::new(container(greeting)));
    let registrar = Registrar::from_config(config, slot);
    let tree = build_tree(&registrar, Arc::new(ClickCounter::default()))?;

    let interaction = match command {
        Command::List => return Ok(serde_json::to_string_pretty(&tree.commands_to_sync())?),
        Command::Slash { path, options } => options
            .iter()
            .fold(Interaction::slash(path), |interaction, (name, value)| {
                interaction.with_option(name.as_str(), option_value(value))
            }),
        Command::User {
            command,
            id,
            user_name,
        } => Interaction::user_command(
            command,
            User {
                id: *id,
                name: user_name.clone(),
            },
        ),
        Command::Click { custom_id } => Interaction::component(custom_id),
    };

    let value = tree.dispatch(&interaction).await?;
    Ok(describe(&value))
}

/// Numbers become `u64` options, everything else stays text
fn option_value(raw: &str) -> Value {
    raw.parse::<u64>()
        .map_or_else(|_| Value::new(raw.to_string()), Value::new)
}

fn describe(value: &Value) -> String {
    if let Some(text) = value.downcast::<String>() {
        text.to_string()
    } else if value.is::<()>() {
        "ok".to_string()
    } else {
        format!("<{}>", value.type_name())
    }
}

fn parse_option(raw: &str) -> Result<(String, String), Error> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| Error::invalid_argument(format!("expected name=value, got '{raw}'")))?;
    if name.trim().is_empty() {
        return Err(Error::invalid_argument("option name cannot be empty"));
    }
    Ok((name.trim().to_string(), value.to_string()))
}
