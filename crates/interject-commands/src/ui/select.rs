//! Select menus
//!
//! Five kinds share one implementation. Picked values arrive in the
//! `values` option as a `Vec<String>`; string selects only accept values of
//! their own choices.

use interject_domain::{Callback, Error, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_SELECT_CHOICES, MAX_SELECT_VALUES, SELECT_VALUES_OPTION};
use crate::interaction::Interaction;
use crate::registrar::Registrar;
use crate::ui::validate_row;

/// What a select menu lets the user pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectKind {
    String,
    User,
    Role,
    Mentionable,
    Channel,
}

impl SelectKind {
    /// Marker kind recorded on registered callbacks
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string select",
            Self::User => "user select",
            Self::Role => "role select",
            Self::Mentionable => "mentionable select",
            Self::Channel => "channel select",
        }
    }
}

/// One choice of a string select
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectChoice {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub default: bool,
}

impl SelectChoice {
    pub fn new<L: Into<String>, V: Into<String>>(label: L, value: V) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            description: None,
            default: false,
        }
    }

    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Options of the select adapters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectOptions {
    /// Defaults to the callback name
    pub custom_id: Option<String>,
    pub placeholder: Option<String>,
    pub min_values: u8,
    pub max_values: u8,
    pub disabled: bool,
    pub row: Option<u8>,
    /// Choices of a string select
    pub choices: Vec<SelectChoice>,
    /// Channel types offered by a channel select
    pub channel_types: Vec<String>,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            custom_id: None,
            placeholder: None,
            min_values: 1,
            max_values: 1,
            disabled: false,
            row: None,
            choices: Vec::new(),
            channel_types: Vec::new(),
        }
    }
}

impl SelectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn custom_id<S: Into<String>>(mut self, custom_id: S) -> Self {
        self.custom_id = Some(custom_id.into());
        self
    }

    pub fn placeholder<S: Into<String>>(mut self, placeholder: S) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn values(mut self, min_values: u8, max_values: u8) -> Self {
        self.min_values = min_values;
        self.max_values = max_values;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn row(mut self, row: u8) -> Self {
        self.row = Some(row);
        self
    }

    pub fn choice(mut self, choice: SelectChoice) -> Self {
        self.choices.push(choice);
        self
    }

    pub fn channel_type<S: Into<String>>(mut self, channel_type: S) -> Self {
        self.channel_types.push(channel_type.into());
        self
    }

    fn validate(&self, kind: SelectKind, custom_id: &str) -> Result<()> {
        let fail = |message: String| Err(Error::invalid_argument(format!("{custom_id}: {message}")));

        if self.max_values == 0 || self.max_values > MAX_SELECT_VALUES {
            return fail(format!("max_values must be between 1 and {MAX_SELECT_VALUES}"));
        }
        if self.min_values > self.max_values {
            return fail("min_values cannot exceed max_values".to_string());
        }
        if kind == SelectKind::String {
            if self.choices.is_empty() || self.choices.len() > MAX_SELECT_CHOICES {
                return fail(format!(
                    "a string select needs between 1 and {MAX_SELECT_CHOICES} choices"
                ));
            }
            if usize::from(self.max_values) > self.choices.len() {
                return fail("max_values cannot exceed the number of choices".to_string());
            }
        } else if !self.choices.is_empty() {
            return fail(format!("a {} has no choices", kind.as_str()));
        }
        if kind != SelectKind::Channel && !self.channel_types.is_empty() {
            return fail("channel_types only apply to channel selects".to_string());
        }
        validate_row(custom_id, self.row)
    }
}

impl Registrar {
    /// Register `callback` as a select menu of `kind`
    pub fn select(&self, kind: SelectKind, options: SelectOptions, callback: &Callback) -> Result<Select> {
        Self::check_target(callback)?;
        let custom_id = options
            .custom_id
            .clone()
            .unwrap_or_else(|| callback.name().to_string());
        options.validate(kind, &custom_id)?;
        let wrapped = self.register(callback, kind.as_str(), &custom_id)?;
        Ok(Select {
            kind,
            custom_id,
            options,
            callback: wrapped,
        })
    }
}

/// A select menu with an injected callback
#[derive(Debug, Clone)]
pub struct Select {
    kind: SelectKind,
    custom_id: String,
    options: SelectOptions,
    callback: Callback,
}

impl Select {
    /// Register `callback` as a select of `kind` through the process-wide container
    pub fn new(kind: SelectKind, options: SelectOptions, callback: &Callback) -> Result<Self> {
        Registrar::global().select(kind, options, callback)
    }

    pub fn string(options: SelectOptions, callback: &Callback) -> Result<Self> {
        Self::new(SelectKind::String, options, callback)
    }

    pub fn user(options: SelectOptions, callback: &Callback) -> Result<Self> {
        Self::new(SelectKind::User, options, callback)
    }

    pub fn role(options: SelectOptions, callback: &Callback) -> Result<Self> {
        Self::new(SelectKind::Role, options, callback)
    }

    pub fn mentionable(options: SelectOptions, callback: &Callback) -> Result<Self> {
        Self::new(SelectKind::Mentionable, options, callback)
    }

    pub fn channel(options: SelectOptions, callback: &Callback) -> Result<Self> {
        Self::new(SelectKind::Channel, options, callback)
    }

    pub fn kind(&self) -> SelectKind {
        self.kind
    }

    pub fn custom_id(&self) -> &str {
        &self.custom_id
    }

    pub fn options(&self) -> &SelectOptions {
        &self.options
    }

    pub fn row(&self) -> Option<u8> {
        self.options.row
    }

    pub fn callback(&self) -> &Callback {
        &self.callback
    }

    /// Check the picked values carried by `interaction`
    pub fn validate_values(&self, interaction: &Interaction) -> Result<()> {
        let values = interaction
            .option(SELECT_VALUES_OPTION)
            .and_then(|value| value.downcast::<Vec<String>>())
            .unwrap_or_default();
        let count = values.len();
        if count < usize::from(self.options.min_values) || count > usize::from(self.options.max_values) {
            return Err(Error::invalid_argument(format!(
                "{}: expected between {} and {} values, got {count}",
                self.custom_id, self.options.min_values, self.options.max_values
            )));
        }
        if self.kind == SelectKind::String {
            if let Some(unknown) = values
                .iter()
                .find(|value| !self.options.choices.iter().any(|c| &c.value == *value))
            {
                return Err(Error::invalid_argument(format!(
                    "{}: '{unknown}' is not one of the choices",
                    self.custom_id
                )));
            }
        }
        Ok(())
    }
}
