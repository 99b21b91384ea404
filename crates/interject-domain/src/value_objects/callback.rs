//! Callbacks
//!
//! A [`Callback`] is the declared signature of an application callback plus
//! its handler. Handlers are either async (a boxed `Send` future) or blocking;
//! only async callbacks may be injected or registered.

use std::fmt;
use std::future::Future;
use std::sync::{Arc, OnceLock};

use futures::future::{self, BoxFuture, FutureExt};

use crate::error::{Error, Result};
use crate::value_objects::signature::Signature;
use crate::value_objects::value::{Arguments, Value};

/// Future returned by an invoked callback
pub type CallbackFuture = BoxFuture<'static, Result<Value>>;

/// Async handler function
pub type AsyncHandler = Arc<dyn Fn(Arguments) -> CallbackFuture + Send + Sync>;

/// Blocking handler function
pub type BlockingHandler = Arc<dyn Fn(Arguments) -> Result<Value> + Send + Sync>;

/// Callback body
#[derive(Clone)]
pub enum Handler {
    Async(AsyncHandler),
    Blocking(BlockingHandler),
}

/// Records what a callback was registered as
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMarker {
    /// Command or component kind (e.g. `slash command`, `button`)
    pub kind: String,
    /// Registered name
    pub name: String,
}

/// Shared handle to a declared callback
#[derive(Clone)]
pub struct Callback {
    inner: Arc<CallbackInner>,
}

struct CallbackInner {
    signature: Signature,
    handler: Handler,
    marker: OnceLock<CommandMarker>,
}

impl Callback {
    /// Declare an async callback
    pub fn new<F, Fut>(signature: Signature, f: F) -> Self
    where
        F: Fn(Arguments) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value>> + Send + 'static,
    {
        Self::from_handler(
            signature,
            Handler::Async(Arc::new(move |args| f(args).boxed())),
        )
    }

    /// Declare a blocking callback
    pub fn blocking<F>(signature: Signature, f: F) -> Self
    where
        F: Fn(Arguments) -> Result<Value> + Send + Sync + 'static,
    {
        Self::from_handler(signature, Handler::Blocking(Arc::new(f)))
    }

    pub fn from_handler(signature: Signature, handler: Handler) -> Self {
        Self {
            inner: Arc::new(CallbackInner {
                signature,
                handler,
                marker: OnceLock::new(),
            }),
        }
    }

    pub fn signature(&self) -> &Signature {
        &self.inner.signature
    }

    pub fn name(&self) -> &str {
        self.inner.signature.name()
    }

    pub fn handler(&self) -> &Handler {
        &self.inner.handler
    }

    pub fn is_async(&self) -> bool {
        matches!(self.inner.handler, Handler::Async(_))
    }

    /// A new, unregistered callback sharing this handler
    pub fn with_signature(&self, signature: Signature) -> Self {
        Self::from_handler(signature, self.inner.handler.clone())
    }

    /// Invoke the handler
    pub fn call(&self, args: Arguments) -> CallbackFuture {
        match &self.inner.handler {
            Handler::Async(handler) => (handler.as_ref())(args),
            Handler::Blocking(handler) => future::ready((handler.as_ref())(args)).boxed(),
        }
    }

    pub fn command_marker(&self) -> Option<&CommandMarker> {
        self.inner.marker.get()
    }

    /// Attach the command marker; a callback can only be registered once
    pub fn mark_registered(&self, kind: &str, name: &str) -> Result<()> {
        let marker = CommandMarker {
            kind: kind.to_string(),
            name: name.to_string(),
        };
        self.inner.marker.set(marker).map_err(|_| {
            let existing = self
                .inner
                .marker
                .get()
                .map(|m| m.kind.clone())
                .unwrap_or_default();
            Error::already_registered(self.name(), existing)
        })
    }

    /// Whether both handles point at the same callback
    pub fn ptr_eq(&self, other: &Callback) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("signature", &self.inner.signature.to_string())
            .field("async", &self.is_async())
            .field("marker", &self.inner.marker.get())
            .finish()
    }
}
