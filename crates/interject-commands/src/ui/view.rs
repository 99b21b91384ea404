//! Views
//!
//! A [`View`] holds up to 25 buttons and selects laid out in five rows of
//! width five. A button takes one unit of width, a select a whole row.

use interject_domain::{Callback, Error, Result, Value};
use std::collections::HashMap;
use tracing::debug;

use crate::commands::call_bound;
use crate::constants::{MAX_VIEW_ITEMS, MAX_VIEW_ROWS, ROW_WIDTH};
use crate::interaction::{Interaction, InteractionKind};
use crate::ui::{Button, Select};

/// A component held by a view
#[derive(Debug, Clone)]
pub enum Item {
    Button(Button),
    Select(Select),
}

impl Item {
    pub fn custom_id(&self) -> &str {
        match self {
            Self::Button(button) => button.custom_id(),
            Self::Select(select) => select.custom_id(),
        }
    }

    pub fn row(&self) -> Option<u8> {
        match self {
            Self::Button(button) => button.row(),
            Self::Select(select) => select.row(),
        }
    }

    pub fn callback(&self) -> &Callback {
        match self {
            Self::Button(button) => button.callback(),
            Self::Select(select) => select.callback(),
        }
    }

    fn width(&self) -> u8 {
        match self {
            Self::Button(_) => 1,
            Self::Select(_) => ROW_WIDTH,
        }
    }
}

impl From<Button> for Item {
    fn from(button: Button) -> Self {
        Self::Button(button)
    }
}

impl From<Select> for Item {
    fn from(select: Select) -> Self {
        Self::Select(select)
    }
}

/// A set of components sharing one state
#[derive(Debug, Clone, Default)]
pub struct View {
    state: Option<Value>,
    items: Vec<Item>,
    timeout_secs: Option<u64>,
}

impl View {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the state handed to receiver parameters of item callbacks
    pub fn with_state(mut self, state: Value) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    pub fn state(&self) -> Option<&Value> {
        self.state.as_ref()
    }

    pub fn timeout_secs(&self) -> Option<u64> {
        self.timeout_secs
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, custom_id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.custom_id() == custom_id)
    }

    /// Add `item`, checking the layout limits
    pub fn add_item<I: Into<Item>>(&mut self, item: I) -> Result<&mut Self> {
        let item = item.into();
        if self.items.len() >= MAX_VIEW_ITEMS {
            return Err(Error::invalid_argument(format!(
                "a view holds at most {MAX_VIEW_ITEMS} items"
            )));
        }
        if self.item(item.custom_id()).is_some() {
            return Err(Error::invalid_argument(format!(
                "duplicate custom id '{}' in view",
                item.custom_id()
            )));
        }

        if !fits(self.items.iter().chain(std::iter::once(&item))) {
            return Err(Error::invalid_argument(format!(
                "no room left for '{}' in view",
                item.custom_id()
            )));
        }

        self.items.push(item);
        Ok(self)
    }

    /// Run the callback of the item targeted by `interaction`
    pub async fn dispatch(&self, interaction: &Interaction) -> Result<Value> {
        if interaction.kind() != InteractionKind::Component {
            return Err(Error::invalid_argument(
                "views only handle component interactions",
            ));
        }
        let item = self.item(interaction.name()).ok_or_else(|| {
            Error::invalid_argument(format!("no item '{}' in view", interaction.name()))
        })?;
        if let Item::Select(select) = item {
            select.validate_values(interaction)?;
        }
        debug!(custom_id = item.custom_id(), "Dispatching component");
        call_bound(item.callback(), &HashMap::new(), self.state.clone(), interaction).await
    }
}

/// Whether `items` can be laid out
///
/// Pinned items take their row first; the rest fill the first row with
/// enough width left, in insertion order.
fn fits<'a>(items: impl Iterator<Item = &'a Item> + Clone) -> bool {
    let mut rows = [0u8; MAX_VIEW_ROWS as usize];
    for item in items.clone() {
        let Some(row) = item.row() else { continue };
        match rows.get_mut(usize::from(row)) {
            Some(used) if *used + item.width() <= ROW_WIDTH => *used += item.width(),
            _ => return false,
        }
    }
    for item in items.filter(|item| item.row().is_none()) {
        match rows.iter_mut().find(|used| **used + item.width() <= ROW_WIDTH) {
            Some(used) => *used += item.width(),
            None => return false,
        }
    }
    true
}
