//! Classification settings

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CONTAINER_NAMESPACES, DEFAULT_FRAMEWORK_NAMESPACES};

/// Namespaces that drive annotation classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InjectionSettings {
    /// Namespaces owned by the host interaction framework
    pub framework_namespaces: Vec<String>,

    /// Namespaces whose metadata marks an annotated type as container-owned
    pub container_namespaces: Vec<String>,

    /// Additional generic origins treated like `Inject<T>`
    pub marker_origins: Vec<String>,
}

impl Default for InjectionSettings {
    fn default() -> Self {
        Self {
            framework_namespaces: DEFAULT_FRAMEWORK_NAMESPACES
                .iter()
                .map(ToString::to_string)
                .collect(),
            container_namespaces: DEFAULT_CONTAINER_NAMESPACES
                .iter()
                .map(ToString::to_string)
                .collect(),
            marker_origins: Vec::new(),
        }
    }
}

impl InjectionSettings {
    /// Add a host framework namespace
    pub fn with_framework_namespace<S: Into<String>>(mut self, namespace: S) -> Self {
        self.framework_namespaces.push(namespace.into());
        self
    }

    /// Add a generic origin that acts as an explicit marker
    pub fn with_marker_origin<S: Into<String>>(mut self, origin: S) -> Self {
        self.marker_origins.push(origin.into());
        self
    }
}
