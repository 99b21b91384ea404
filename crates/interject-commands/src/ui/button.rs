//! Buttons

use interject_domain::{Callback, Result};
use serde::{Deserialize, Serialize};

use crate::constants::KIND_BUTTON;
use crate::registrar::Registrar;
use crate::ui::validate_row;

/// Visual style of a button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonStyle {
    Primary,
    #[default]
    Secondary,
    Success,
    Danger,
}

/// Options of the button adapter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonOptions {
    pub label: Option<String>,
    /// Defaults to the callback name
    pub custom_id: Option<String>,
    pub style: ButtonStyle,
    pub disabled: bool,
    pub emoji: Option<String>,
    /// Row in the view, placed automatically when absent
    pub row: Option<u8>,
}

impl ButtonOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label<S: Into<String>>(mut self, label: S) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn custom_id<S: Into<String>>(mut self, custom_id: S) -> Self {
        self.custom_id = Some(custom_id.into());
        self
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn emoji<S: Into<String>>(mut self, emoji: S) -> Self {
        self.emoji = Some(emoji.into());
        self
    }

    pub fn row(mut self, row: u8) -> Self {
        self.row = Some(row);
        self
    }
}

impl Registrar {
    /// Register `callback` as a button
    pub fn button(&self, options: ButtonOptions, callback: &Callback) -> Result<Button> {
        Self::check_target(callback)?;
        let custom_id = options
            .custom_id
            .clone()
            .unwrap_or_else(|| callback.name().to_string());
        validate_row(&custom_id, options.row)?;
        let wrapped = self.register(callback, KIND_BUTTON, &custom_id)?;
        Ok(Button {
            custom_id,
            options,
            callback: wrapped,
        })
    }
}

/// A button with an injected callback
#[derive(Debug, Clone)]
pub struct Button {
    custom_id: String,
    options: ButtonOptions,
    callback: Callback,
}

impl Button {
    /// Register `callback` as a button through the process-wide container
    pub fn new(options: ButtonOptions, callback: &Callback) -> Result<Self> {
        Registrar::global().button(options, callback)
    }

    pub fn custom_id(&self) -> &str {
        &self.custom_id
    }

    pub fn label(&self) -> Option<&str> {
        self.options.label.as_deref()
    }

    pub fn style(&self) -> ButtonStyle {
        self.options.style
    }

    pub fn is_disabled(&self) -> bool {
        self.options.disabled
    }

    pub fn row(&self) -> Option<u8> {
        self.options.row
    }

    pub fn callback(&self) -> &Callback {
        &self.callback
    }
}
