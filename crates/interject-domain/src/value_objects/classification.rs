//! Classification results

use crate::value_objects::annotation::Annotation;

/// Who supplies a parameter's value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The host framework supplies it (interaction objects, option values)
    FrameworkOwned,
    /// Resolved from the container; a missing provider is tolerated
    Dependency,
    /// Explicitly marked; the inner annotation is resolved and must exist
    ExplicitDependency(Annotation),
}

impl Classification {
    /// Whether the host framework supplies the value
    pub fn is_framework_owned(&self) -> bool {
        matches!(self, Self::FrameworkOwned)
    }

    /// Whether the container supplies the value
    pub fn is_dependency(&self) -> bool {
        !self.is_framework_owned()
    }
}

/// Kind of a type path, as seen by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OriginKind {
    /// Language primitive or standard library type
    Builtin,
    /// Type of the host framework or of this library
    Framework,
    /// Explicit-dependency marker wrapper
    GenericWrapper,
    /// Anything else; assumed container-resolvable
    Unknown,
}
