//! Container port
//!
//! The narrow capability the injector needs from a DI container:
//!
//! ```text
//! Container ──enter_scope()──▶ ScopedRequest ──resolve(annotation)──▶ Value
//!                                    │
//!                                    └──close()  (exactly once, on every exit path)
//! ```

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{Annotation, Value};

/// Async, request-scoping dependency container
#[async_trait]
pub trait Container: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Open a request scope; scoped providers may perform async setup here
    async fn enter_scope(&self) -> Result<Box<dyn ScopedRequest>>;
}

/// A single request scope of a [`Container`]
#[async_trait]
pub trait ScopedRequest: Send + Sync {
    /// Resolve the type described by `annotation`
    ///
    /// Returns `Error::MissingProvider` when nothing is bound for the type.
    async fn resolve(&self, annotation: &Annotation) -> Result<Value>;

    /// Release scoped resources
    ///
    /// Synchronous so that it can run from `Drop` when an invocation is
    /// cancelled. Implementations must tolerate repeated calls.
    fn close(&mut self);
}
