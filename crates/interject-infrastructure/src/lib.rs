//! # Infrastructure Layer
//!
//! Technical concerns around the injection core: where configuration comes
//! from, how logs are written, and how a real container backs the
//! [`Container`](interject_domain::Container) port.
//!
//! ## Module Categories
//!
//! ### Configuration & DI
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered TOML / environment configuration |
//! | [`di`] | dill-backed container adapter and setup |
//! | [`constants`] | Centralized infrastructure constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, BotConfig, ConfigLoader, LoggingConfig};
pub use di::{CatalogContainer, ContainerBuilder, setup, setup_with_slot};
pub use error_ext::ErrorContext;
