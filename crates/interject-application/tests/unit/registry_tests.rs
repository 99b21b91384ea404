//! Active-Container Registry Tests

use interject_application::ContainerSlot;
use interject_domain::Error;
use std::sync::Arc;

use crate::test_utils::FakeContainer;

#[test]
fn test_new_slot_is_empty() {
    let slot = ContainerSlot::new();
    assert!(!slot.is_set());
    assert!(slot.get().is_none());
    assert!(matches!(slot.require(), Err(Error::ContainerNotInitialized)));
}

#[test]
fn test_set_then_get() {
    let slot = ContainerSlot::new();
    let container = FakeContainer::new().into_arc();
    slot.set(Arc::clone(&container));

    let active = slot.require().expect("container should be set");
    assert!(Arc::ptr_eq(&active, &container));
    assert_eq!(active.name(), "fake");
}

#[test]
fn test_set_replaces_previous_container() {
    let slot = ContainerSlot::new();
    let first = FakeContainer::new().into_arc();
    let second = FakeContainer::new().into_arc();
    slot.set(Arc::clone(&first));
    slot.set(Arc::clone(&second));

    let active = slot.get().expect("container should be set");
    assert!(Arc::ptr_eq(&active, &second));
}

#[test]
fn test_clear_forgets_container() {
    let slot = ContainerSlot::new();
    slot.set(FakeContainer::new().into_arc());
    slot.clear();
    assert!(!slot.is_set());
}

#[test]
fn test_global_slot_is_shared() {
    assert!(Arc::ptr_eq(&ContainerSlot::global(), &ContainerSlot::global()));
}
