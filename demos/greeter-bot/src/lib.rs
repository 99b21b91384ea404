//! # Greeter Bot
//!
//! A small bot showing how services reach command and component callbacks.
//! Interactions are read from the command line instead of a gateway
//! connection, so every path through the injector can be tried locally.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`bot`] | Services, the container and the registered commands |
//! | [`cli`] | Command line parsing and the run loop |

pub mod bot;
pub mod cli;

pub use cli::{Cli, run};
