//! Explicit-dependency markers
//!
//! Wrapping a parameter type in [`Inject`] forces it to be resolved from the
//! container, whatever the wrapped type would otherwise classify as:
//!
//! ```
//! use interject_domain::{Annotation, Inject, Signature};
//!
//! struct Clock;
//!
//! let signature = Signature::builder("tick")
//!     .param::<Inject<Clock>>("clock")
//!     .build();
//! assert_eq!(signature.parameters()[0].annotation(), &Annotation::of::<Inject<Clock>>());
//! ```
//!
//! [`FromContainer`] plays the same role as metadata of an annotated type,
//! see [`SignatureBuilder::annotated`](crate::SignatureBuilder::annotated).

use std::marker::PhantomData;
use std::sync::Arc;

/// Type-level marker: resolve `T` from the container
pub struct Inject<T: ?Sized>(PhantomData<fn() -> Arc<T>>);

/// Metadata marker: the annotated type is container-owned
#[derive(Debug, Clone, Copy, Default)]
pub struct FromContainer;
