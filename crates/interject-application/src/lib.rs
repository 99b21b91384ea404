//! Application Layer - Interject
//!
//! The parameter-injection resolver. Everything here is independent of any
//! concrete container or bot framework.
//!
//! ## Components
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`classifier`] | Decides who supplies each parameter |
//! | [`signature`] | Produces the signature the host framework sees |
//! | [`registry`] | Process-wide slot holding the active container |
//! | [`injector`] | Runs callbacks inside a container request scope |
//!
//! ## Data Flow
//!
//! ```text
//! Callback ──▶ rebuild_signature ──▶ visible signature (host introspection)
//!     │
//!     └──────▶ Injector::inject ──▶ per call: scope → resolve → call → close
//! ```

pub mod classifier;
pub mod injector;
pub mod registry;
pub mod signature;

pub use classifier::Classifier;
pub use injector::{Injector, inject, wrap_callback};
pub use registry::ContainerSlot;
pub use signature::{is_visible, rebuild_signature};
