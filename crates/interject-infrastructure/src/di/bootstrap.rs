//! Container setup
//!
//! Installs a container as the active one. Call once at startup, before
//! any interaction is dispatched:
//!
//! ```rust,ignore
//! let container = CatalogContainer::builder()
//!     .provide_value(UserService::new())
//!     .build();
//! setup(Arc::new(container));
//! ```

use crate::config::AppConfig;
use interject_application::{Classifier, ContainerSlot, Injector};
use interject_domain::Container;
use std::sync::Arc;
use tracing::{info, warn};

/// Make `container` the active container of the process-wide slot
pub fn setup(container: Arc<dyn Container>) -> Arc<ContainerSlot> {
    let slot = ContainerSlot::global();
    setup_with_slot(&slot, container);
    slot
}

/// Make `container` the active container of `slot`
pub fn setup_with_slot(slot: &ContainerSlot, container: Arc<dyn Container>) {
    if slot.is_set() {
        warn!(
            container = container.name(),
            "Replacing the active container"
        );
    }
    info!(container = container.name(), "Container installed");
    slot.set(container);
}

/// Injector resolving from `slot` and classifying with the configured namespaces
pub fn injector_for(config: &AppConfig, slot: Arc<ContainerSlot>) -> Injector {
    Injector::new(slot, Classifier::new(config.injection.clone()))
}
