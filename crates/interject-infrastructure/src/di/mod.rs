//! Dependency Injection
//!
//! A dill [`Catalog`](dill::Catalog) adapted to the
//! [`Container`](interject_domain::Container) port, and the setup step that
//! makes it the active container.
//!
//! ```text
//! ContainerBuilder ──build──▶ CatalogContainer ──setup──▶ ContainerSlot
//!   provide_value                   │                          │
//!   provide_arc                     │ enter_scope              │ require
//!   provide_scoped                  ▼                          ▼
//!                              CatalogScope  ◀──────────── Injector
//! ```

pub mod bootstrap;
pub mod catalog;

pub use bootstrap::{injector_for, setup, setup_with_slot};
pub use catalog::{CatalogContainer, ContainerBuilder};
