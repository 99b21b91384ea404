//! Active-Container Registry
//!
//! A single slot holding the container every injected callback resolves
//! from. The slot is written once during setup, before any interaction is
//! dispatched, and only read afterwards; ordering between the two is the
//! responsibility of the host integration.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use interject_domain::{Container, Error, Result};
use once_cell::sync::Lazy;

static GLOBAL_SLOT: Lazy<Arc<ContainerSlot>> = Lazy::new(|| Arc::new(ContainerSlot::new()));

/// Holder of the active container
pub struct ContainerSlot {
    active: ArcSwapOption<Arc<dyn Container>>,
}

impl ContainerSlot {
    /// An empty slot
    pub fn new() -> Self {
        Self {
            active: ArcSwapOption::empty(),
        }
    }

    /// The process-wide slot used by [`inject`](crate::inject) and `setup`
    pub fn global() -> Arc<Self> {
        Arc::clone(&GLOBAL_SLOT)
    }

    /// Store the active container, replacing any previous one
    pub fn set(&self, container: Arc<dyn Container>) {
        self.active.store(Some(Arc::new(container)));
    }

    /// The active container, if one was set
    pub fn get(&self) -> Option<Arc<dyn Container>> {
        self.active.load_full().map(|container| Arc::clone(container.as_ref()))
    }

    /// The active container, or `ContainerNotInitialized`
    pub fn require(&self) -> Result<Arc<dyn Container>> {
        self.get().ok_or(Error::ContainerNotInitialized)
    }

    pub fn is_set(&self) -> bool {
        self.active.load().is_some()
    }

    /// Forget the active container
    pub fn clear(&self) {
        self.active.store(None);
    }
}

impl Default for ContainerSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ContainerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContainerSlot")
            .field("container", &self.get().map(|c| c.name().to_string()))
            .finish()
    }
}
