//! Annotation Classifier
//!
//! A total, side-effect-free visitor over [`Annotation`] that decides whether
//! the host framework or the container supplies a parameter.
//!
//! | Annotation | Classification |
//! |------------|----------------|
//! | no annotation | framework-owned (never injected) |
//! | primitive, `core`/`alloc`/`std`, host framework, this library | framework-owned |
//! | `Inject<T>` or another configured marker | explicit dependency on `T` |
//! | annotated with container metadata | explicit dependency on the base type |
//! | generic composing only framework-owned parts | framework-owned |
//! | anything else (including `Option<Service>`) | dependency |

use interject_domain::constants::{ADAPTER_NAMESPACE_PREFIX, BUILTIN_NAMESPACES};
use interject_domain::{Annotation, Classification, Inject, InjectionSettings, OriginKind, TypePath};

/// Classifies parameter annotations
#[derive(Debug, Clone)]
pub struct Classifier {
    settings: InjectionSettings,
    marker: TypePath,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(InjectionSettings::default())
    }
}

impl Classifier {
    pub fn new(settings: InjectionSettings) -> Self {
        Self {
            settings,
            marker: TypePath::of::<Inject<()>>(),
        }
    }

    pub fn settings(&self) -> &InjectionSettings {
        &self.settings
    }

    /// Classify a parameter annotation
    pub fn classify(&self, annotation: &Annotation) -> Classification {
        match annotation {
            Annotation::Empty => Classification::FrameworkOwned,
            Annotation::Generic { origin, args }
                if self.origin_kind(origin) == OriginKind::GenericWrapper && args.len() == 1 =>
            {
                Classification::ExplicitDependency(args[0].clone())
            }
            Annotation::Annotated { base, metadata } => {
                if metadata.iter().any(|m| self.is_container_metadata(m)) {
                    Classification::ExplicitDependency((**base).clone())
                } else {
                    self.classify(base)
                }
            }
            _ if self.composes_framework_only(annotation) => Classification::FrameworkOwned,
            _ => Classification::Dependency,
        }
    }

    /// Whether the host framework supplies a parameter with this annotation
    pub fn is_framework_owned(&self, annotation: &Annotation) -> bool {
        self.classify(annotation).is_framework_owned()
    }

    /// Kind of a single type path
    pub fn origin_kind(&self, path: &TypePath) -> OriginKind {
        if self.is_marker(path) {
            OriginKind::GenericWrapper
        } else if Self::is_builtin(path) {
            OriginKind::Builtin
        } else if self.is_framework(path) {
            OriginKind::Framework
        } else {
            OriginKind::Unknown
        }
    }

    fn composes_framework_only(&self, annotation: &Annotation) -> bool {
        match annotation {
            Annotation::Empty => true,
            Annotation::Leaf(path) => self.is_framework_kind(path),
            Annotation::Generic { origin, args } => {
                self.is_framework_kind(origin)
                    && args.iter().all(|arg| self.composes_framework_only(arg))
            }
            Annotation::Annotated { .. } => self.is_framework_owned(annotation),
        }
    }

    fn is_framework_kind(&self, path: &TypePath) -> bool {
        matches!(
            self.origin_kind(path),
            OriginKind::Builtin | OriginKind::Framework
        )
    }

    fn is_marker(&self, path: &TypePath) -> bool {
        *path == self.marker
            || self
                .settings
                .marker_origins
                .iter()
                .any(|origin| origin == path.as_str())
    }

    fn is_builtin(path: &TypePath) -> bool {
        path.is_structural()
            || path.is_primitive()
            || BUILTIN_NAMESPACES.contains(&path.namespace())
    }

    fn is_framework(&self, path: &TypePath) -> bool {
        path.in_namespace(ADAPTER_NAMESPACE_PREFIX)
            || self
                .settings
                .framework_namespaces
                .iter()
                .any(|namespace| path.in_namespace(namespace))
    }

    fn is_container_metadata(&self, path: &TypePath) -> bool {
        self.settings
            .container_namespaces
            .iter()
            .any(|namespace| path.in_namespace(namespace))
    }
}
