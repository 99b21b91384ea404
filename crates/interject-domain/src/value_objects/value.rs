//! Runtime values and call arguments

use std::any::{Any, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};

/// Type-erased shared value
///
/// Holds an `Arc<T>` for any `T: ?Sized`, so trait objects handed out by a
/// container travel through the same channel as plain values.
#[derive(Clone)]
pub struct Value {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Value {
    /// Wrap an owned value
    pub fn new<T: Send + Sync + 'static>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Wrap an already shared value
    pub fn from_arc<T: ?Sized + Send + Sync + 'static>(value: Arc<T>) -> Self {
        Self {
            inner: Arc::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// The unit value returned by callbacks with nothing to report
    pub fn unit() -> Self {
        Self::new(())
    }

    /// Recover the shared value if it holds a `T`
    pub fn downcast<T: ?Sized + Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.inner.downcast_ref::<Arc<T>>().cloned()
    }

    pub fn is<T: ?Sized + Send + Sync + 'static>(&self) -> bool {
        self.inner.is::<Arc<T>>()
    }

    /// Name of the wrapped type
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("type_name", &self.type_name)
            .finish()
    }
}

/// Arguments of a single callback invocation
#[derive(Debug, Clone, Default)]
pub struct Arguments {
    positional: Vec<Value>,
    keyword: HashMap<String, Value>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style keyword insertion
    pub fn with<S: Into<String>>(mut self, name: S, value: Value) -> Self {
        self.insert(name, value);
        self
    }

    /// Builder-style positional insertion
    pub fn with_positional(mut self, value: Value) -> Self {
        self.positional.push(value);
        self
    }

    pub fn push_positional(&mut self, value: Value) {
        self.positional.push(value);
    }

    /// Bind a keyword argument, replacing any previous binding
    pub fn insert<S: Into<String>>(&mut self, name: S, value: Value) {
        self.keyword.insert(name.into(), value);
    }

    /// Whether a keyword argument is bound under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.keyword.contains_key(name)
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.keyword.get(name)
    }

    /// Typed keyword lookup
    pub fn get<T: ?Sized + Send + Sync + 'static>(&self, name: &str) -> Option<Arc<T>> {
        self.keyword.get(name).and_then(Value::downcast::<T>)
    }

    /// Typed keyword lookup that fails when the argument is absent or mistyped
    pub fn require<T: ?Sized + Send + Sync + 'static>(&self, name: &str) -> Result<Arc<T>> {
        self.get::<T>(name).ok_or_else(|| {
            Error::invalid_argument(format!(
                "argument '{name}' is missing or is not a {}",
                type_name::<T>()
            ))
        })
    }

    /// Typed positional lookup
    pub fn positional_at<T: ?Sized + Send + Sync + 'static>(&self, index: usize) -> Option<Arc<T>> {
        self.positional.get(index).and_then(Value::downcast::<T>)
    }

    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    pub fn keyword(&self) -> &HashMap<String, Value> {
        &self.keyword
    }
}
