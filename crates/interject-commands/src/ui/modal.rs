//! Modals
//!
//! Submitted text arrives as `String` options keyed by the custom id of
//! each text input.

use interject_domain::{Callback, Error, Result, Value};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::commands::call_bound;
use crate::constants::{
    DEFAULT_MODAL_TIMEOUT_SECS, KIND_MODAL, MAX_MODAL_COMPONENTS, MAX_TEXT_INPUT_LENGTH,
};
use crate::interaction::{Interaction, InteractionKind};
use crate::registrar::Registrar;

/// Size of a text input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextInputStyle {
    #[default]
    Short,
    Paragraph,
}

/// A text input of a modal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextInput {
    pub custom_id: String,
    pub label: String,
    #[serde(default)]
    pub style: TextInputStyle,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default = "default_required")]
    pub required: bool,
    #[serde(default)]
    pub min_length: Option<u16>,
    #[serde(default)]
    pub max_length: Option<u16>,
}

fn default_required() -> bool {
    true
}

impl TextInput {
    pub fn new<I: Into<String>, L: Into<String>>(custom_id: I, label: L) -> Self {
        Self {
            custom_id: custom_id.into(),
            label: label.into(),
            style: TextInputStyle::Short,
            placeholder: None,
            required: true,
            min_length: None,
            max_length: None,
        }
    }

    pub fn paragraph(mut self) -> Self {
        self.style = TextInputStyle::Paragraph;
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn placeholder<S: Into<String>>(mut self, placeholder: S) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn length(mut self, min_length: u16, max_length: u16) -> Self {
        self.min_length = Some(min_length);
        self.max_length = Some(max_length);
        self
    }

    fn validate(&self) -> Result<()> {
        let min = self.min_length.unwrap_or(0);
        let max = self.max_length.unwrap_or(MAX_TEXT_INPUT_LENGTH);
        if min > max || max > MAX_TEXT_INPUT_LENGTH {
            return Err(Error::invalid_argument(format!(
                "{}: length bounds must satisfy min <= max <= {MAX_TEXT_INPUT_LENGTH}",
                self.custom_id
            )));
        }
        Ok(())
    }

    /// Check a submitted value against this input
    fn check(&self, submitted: Option<&str>) -> Result<()> {
        let Some(text) = submitted.filter(|text| !text.is_empty()) else {
            if self.required {
                return Err(Error::invalid_argument(format!(
                    "'{}' is required",
                    self.custom_id
                )));
            }
            return Ok(());
        };
        let length = text.chars().count();
        let min = usize::from(self.min_length.unwrap_or(0));
        let max = usize::from(self.max_length.unwrap_or(MAX_TEXT_INPUT_LENGTH));
        if length < min || length > max {
            return Err(Error::invalid_argument(format!(
                "'{}' must be between {min} and {max} characters, got {length}",
                self.custom_id
            )));
        }
        Ok(())
    }
}

/// Options of the modal adapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalOptions {
    pub title: String,
    /// Defaults to the callback name
    #[serde(default)]
    pub custom_id: Option<String>,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub components: Vec<TextInput>,
}

fn default_timeout() -> u64 {
    DEFAULT_MODAL_TIMEOUT_SECS
}

impl ModalOptions {
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
            custom_id: None,
            timeout_secs: DEFAULT_MODAL_TIMEOUT_SECS,
            components: Vec::new(),
        }
    }

    pub fn custom_id<S: Into<String>>(mut self, custom_id: S) -> Self {
        self.custom_id = Some(custom_id.into());
        self
    }

    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn component(mut self, input: TextInput) -> Self {
        self.components.push(input);
        self
    }

    fn validate(&self, custom_id: &str) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::invalid_argument(format!("{custom_id}: title cannot be empty")));
        }
        if self.components.is_empty() || self.components.len() > MAX_MODAL_COMPONENTS {
            return Err(Error::invalid_argument(format!(
                "{custom_id}: a modal holds between 1 and {MAX_MODAL_COMPONENTS} components"
            )));
        }
        let mut seen = HashSet::new();
        for input in &self.components {
            if !seen.insert(input.custom_id.as_str()) {
                return Err(Error::invalid_argument(format!(
                    "{custom_id}: duplicate text input '{}'",
                    input.custom_id
                )));
            }
            input.validate()?;
        }
        Ok(())
    }
}

impl Registrar {
    /// Register `callback` as the submit handler of a modal
    pub fn modal(&self, options: ModalOptions, callback: &Callback) -> Result<Modal> {
        Self::check_target(callback)?;
        let custom_id = options
            .custom_id
            .clone()
            .unwrap_or_else(|| callback.name().to_string());
        options.validate(&custom_id)?;
        let wrapped = self.register(callback, KIND_MODAL, &custom_id)?;
        Ok(Modal {
            custom_id,
            options,
            callback: wrapped,
            state: None,
        })
    }
}

/// A modal with an injected submit callback
#[derive(Debug, Clone)]
pub struct Modal {
    custom_id: String,
    options: ModalOptions,
    callback: Callback,
    state: Option<Value>,
}

impl Modal {
    /// Register `callback` as a modal through the process-wide container
    pub fn new(options: ModalOptions, callback: &Callback) -> Result<Self> {
        Registrar::global().modal(options, callback)
    }

    /// Attach the state handed to a receiver parameter
    pub fn with_state(mut self, state: Value) -> Self {
        self.state = Some(state);
        self
    }

    pub fn custom_id(&self) -> &str {
        &self.custom_id
    }

    pub fn title(&self) -> &str {
        &self.options.title
    }

    pub fn timeout_secs(&self) -> u64 {
        self.options.timeout_secs
    }

    pub fn components(&self) -> &[TextInput] {
        &self.options.components
    }

    pub fn callback(&self) -> &Callback {
        &self.callback
    }

    /// Validate the submitted text and run the callback
    pub async fn submit(&self, interaction: &Interaction) -> Result<Value> {
        if interaction.kind() != InteractionKind::ModalSubmit {
            return Err(Error::invalid_argument(format!(
                "{} only handles modal submissions",
                self.custom_id
            )));
        }
        for input in &self.options.components {
            let submitted = interaction
                .option(&input.custom_id)
                .and_then(|value| value.downcast::<String>());
            input.check(submitted.as_deref().map(String::as_str))?;
        }
        call_bound(&self.callback, &HashMap::new(), self.state.clone(), interaction).await
    }
}
