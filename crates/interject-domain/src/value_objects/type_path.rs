//! Namespace-qualified type names

use std::fmt;

use crate::constants::{PRIMITIVE_TYPES, STRUCTURAL_ORIGINS};
use crate::value_objects::annotation::Annotation;

/// A type name as reported by `std::any::type_name`, without generic arguments
///
/// The first path segment is the declaring namespace (the crate name for
/// user types, `core`/`alloc`/`std` for the standard library).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypePath(String);

impl TypePath {
    /// Create a type path from its textual form
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self(text.into().trim().to_string())
    }

    /// Type path of `T`, stripped of generic arguments
    ///
    /// ```
    /// use interject_domain::TypePath;
    ///
    /// let path = TypePath::of::<Option<String>>();
    /// assert_eq!(path.as_str(), "core::option::Option");
    /// ```
    pub fn of<T: ?Sized + 'static>() -> Self {
        Annotation::of::<T>()
            .origin()
            .cloned()
            .unwrap_or_else(|| Self::new(std::any::type_name::<T>()))
    }

    /// Textual form
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Declaring namespace (first path segment)
    ///
    /// Trait objects report the namespace of their principal trait.
    pub fn namespace(&self) -> &str {
        let text = self
            .0
            .trim_start_matches("dyn ")
            .trim_start_matches("impl ");
        let end = text
            .find(|c: char| !(c.is_alphanumeric() || c == '_'))
            .unwrap_or(text.len());
        if end == 0 { &self.0 } else { &text[..end] }
    }

    /// Last path segment
    pub fn name(&self) -> &str {
        self.0.rsplit("::").next().unwrap_or(&self.0)
    }

    /// Whether the path belongs to `namespace` or one of its `namespace_*` siblings
    ///
    /// A namespace containing `::` is matched as a module prefix instead.
    pub fn in_namespace(&self, namespace: &str) -> bool {
        if namespace.contains("::") {
            let text = self
                .0
                .trim_start_matches("dyn ")
                .trim_start_matches("impl ");
            return text
                .strip_prefix(namespace)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"));
        }
        let own = self.namespace();
        own == namespace
            || own
                .strip_prefix(namespace)
                .is_some_and(|rest| rest.starts_with('_'))
    }

    /// Whether this is a language primitive or a function pointer
    pub fn is_primitive(&self) -> bool {
        PRIMITIVE_TYPES.contains(&self.0.as_str())
            || self.0.starts_with("fn(")
            || self.0.starts_with("unsafe fn")
            || self.0.starts_with("extern ")
    }

    /// Whether this is the origin of a reference, pointer, tuple, slice or array
    ///
    /// Opaque leaves such as `<T as Trait>::Assoc` are not structural.
    pub fn is_structural(&self) -> bool {
        STRUCTURAL_ORIGINS.contains(&self.0.as_str())
            || (self.0.starts_with("[; ") && self.0.ends_with(']'))
    }
}

impl fmt::Display for TypePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypePath {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
