//! Ports
//!
//! Contracts implemented outside the core. The core only drives a container;
//! it never resolves dependencies itself.

pub mod container;

pub use container::{Container, ScopedRequest};
