//! Message components
//!
//! Buttons and selects live in a [`View`]; modals are submitted on their
//! own. Component callbacks get the view (or modal) state through their
//! receiver and the interaction as their first regular parameter.

pub mod button;
pub mod modal;
pub mod select;
pub mod view;

pub use button::{Button, ButtonOptions, ButtonStyle};
pub use modal::{Modal, ModalOptions, TextInput, TextInputStyle};
pub use select::{Select, SelectChoice, SelectKind, SelectOptions};
pub use view::{Item, View};

use interject_domain::{Error, Result};

use crate::constants::MAX_VIEW_ROWS;

pub(crate) fn validate_row(custom_id: &str, row: Option<u8>) -> Result<()> {
    match row {
        Some(row) if row >= MAX_VIEW_ROWS => Err(Error::invalid_argument(format!(
            "{custom_id}: row must be between 0 and {}, got {row}",
            MAX_VIEW_ROWS - 1
        ))),
        _ => Ok(()),
    }
}
