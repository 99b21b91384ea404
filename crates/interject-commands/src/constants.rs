//! Registration constants

// ============================================================================
// REGISTRATION KINDS
// ============================================================================

/// Marker kind of slash commands
pub const KIND_SLASH_COMMAND: &str = "slash command";

/// Marker kind of subcommands
pub const KIND_SUB_COMMAND: &str = "sub command";

/// Marker kind of subcommand groups
pub const KIND_SUB_COMMAND_GROUP: &str = "sub command group";

/// Marker kind of user context menu commands
pub const KIND_USER_COMMAND: &str = "user command";

/// Marker kind of message context menu commands
pub const KIND_MESSAGE_COMMAND: &str = "message command";

/// Marker kind of buttons
pub const KIND_BUTTON: &str = "button";

/// Marker kind of modals
pub const KIND_MODAL: &str = "modal";

// ============================================================================
// COMPONENT LIMITS
// ============================================================================

/// Rows available in a view
pub const MAX_VIEW_ROWS: u8 = 5;

/// Width units available in a single row
pub const ROW_WIDTH: u8 = 5;

/// Items a view may hold
pub const MAX_VIEW_ITEMS: usize = 25;

/// Upper bound of `max_values` on a select
pub const MAX_SELECT_VALUES: u8 = 25;

/// Choices a string select may offer
pub const MAX_SELECT_CHOICES: usize = 25;

/// Components a modal may hold
pub const MAX_MODAL_COMPONENTS: usize = 5;

/// Default modal timeout in seconds
pub const DEFAULT_MODAL_TIMEOUT_SECS: u64 = 600;

/// Maximum length of a text input value
pub const MAX_TEXT_INPUT_LENGTH: u16 = 4000;

// ============================================================================
// OPTION NAMES
// ============================================================================

/// Option carrying the values picked in a select
pub const SELECT_VALUES_OPTION: &str = "values";
