//! # Interject Domain Layer
//!
//! Core types shared by every other layer of the injection adapter.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy and `Result` alias |
//! | [`value_objects`] | Type paths, annotations, signatures, runtime values, callbacks |
//! | [`ports`] | Contracts the external container must satisfy |
//! | [`constants`] | Namespaces and names the classifier relies on |
//!
//! The domain layer holds no global state and performs no I/O.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{Container, ScopedRequest};
pub use value_objects::*;
