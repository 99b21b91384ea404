//! # Interject
//!
//! Dependency injection for chat bot command and component callbacks.
//!
//! Callbacks declare the services they need next to the parameters the bot
//! framework supplies. Registering a callback hides the service parameters
//! from the framework and resolves them from the active container, in a
//! fresh request scope, every time the callback fires.
//!
//! ## Example
//!
//! ```ignore
//! use interject::{Arguments, Callback, CatalogContainer, CommandOptions, Interaction, Signature};
//! use std::sync::Arc;
//!
//! interject::setup(Arc::new(
//!     CatalogContainer::builder().provide_value(UserService::new()).build(),
//! ));
//!
//! let ping = Callback::new(
//!     Signature::builder("ping")
//!         .param::<Interaction>("inter")
//!         .param::<UserService>("users")
//!         .build(),
//!     |args: Arguments| async move { /* ... */ },
//! );
//! let command = interject::slash_command(CommandOptions::new(), &ping)?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - annotations, callbacks, values, errors and the container port
//! - `application` - annotation classifier, signature rewriter, injector
//! - `infrastructure` - configuration, logging and the dill container adapter
//! - `commands` - slash, context menu and component registration adapters

/// Domain layer - annotations, callbacks and the container port
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use interject_domain::*;
}

/// Application layer - classification and injection
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use interject_application::*;
}

/// Infrastructure layer - config, logging and DI container
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use interject_infrastructure::*;
}

/// Registration adapters - commands, components and the command tree
///
/// Re-exports from the commands crate for convenience
pub mod commands {
    pub use interject_commands::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the injector and container slot
pub use application::{ContainerSlot, Injector, inject, wrap_callback};

// Re-export setup and the default container
pub use infrastructure::{AppConfig, CatalogContainer, ConfigLoader, setup};

// Re-export the registration adapters
pub use commands::{
    Button, ButtonOptions, CommandOptions, CommandTree, Interaction, Modal, ModalOptions,
    Registrar, Select, SelectKind, SelectOptions, SubCommandOptions, View, message_command,
    slash_command, user_command,
};
