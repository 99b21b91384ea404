//! Annotation and TypePath Tests

use interject_domain::{Annotation, FromContainer, Inject, TypePath};
use std::any::type_name;

struct UserService;

#[test]
fn test_leaf_annotation_for_plain_type() {
    let annotation = Annotation::of::<UserService>();
    assert_eq!(
        annotation,
        Annotation::Leaf(TypePath::new(type_name::<UserService>()))
    );
    assert!(annotation.args().is_empty());
}

#[test]
fn test_generic_annotation_splits_origin_and_args() {
    let annotation = Annotation::of::<Option<UserService>>();
    match &annotation {
        Annotation::Generic { origin, args } => {
            assert_eq!(origin.as_str(), "core::option::Option");
            assert_eq!(args, &vec![Annotation::of::<UserService>()]);
        }
        other => panic!("Expected generic annotation, got {other:?}"),
    }
}

#[test]
fn test_marker_inner_key_matches_inner_type_name() {
    let annotation = Annotation::of::<Inject<UserService>>();
    let inner = &annotation.args()[0];
    assert_eq!(inner.key().as_deref(), Some(type_name::<UserService>()));
    assert_eq!(annotation.origin(), Some(&TypePath::of::<Inject<()>>()));
}

#[test]
fn test_annotated_key_is_base_key() {
    let annotation = Annotation::annotated(
        Annotation::of::<UserService>(),
        vec![TypePath::of::<FromContainer>()],
    );
    assert_eq!(annotation.key(), Annotation::of::<UserService>().key());
    assert!(annotation.to_string().starts_with("Annotated<"));
}

#[test]
fn test_empty_annotation_has_no_key() {
    assert!(Annotation::Empty.is_empty());
    assert_eq!(Annotation::Empty.key(), None);
    assert_eq!(Annotation::Empty.origin(), None);
}

#[test]
fn test_type_path_namespace() {
    assert_eq!(TypePath::of::<String>().namespace(), "alloc");
    assert_eq!(TypePath::new("u64").namespace(), "u64");
    assert_eq!(TypePath::new("()").namespace(), "()");
    assert_eq!(
        TypePath::new("dyn serenity::Repo + core::marker::Send").namespace(),
        "serenity"
    );
    assert_eq!(TypePath::of::<UserService>().namespace(), "unit");
}

#[test]
fn test_type_path_in_namespace_matches_siblings() {
    let path = TypePath::new("interject_commands::ui::Button");
    assert!(path.in_namespace("interject"));
    assert!(path.in_namespace("interject_commands"));
    assert!(!path.in_namespace("inter"));
    assert_eq!(path.name(), "Button");
}

#[test]
fn test_type_path_primitives() {
    assert!(TypePath::new("u8").is_primitive());
    assert!(TypePath::new("fn(i32) -> i32").is_primitive());
    assert!(!TypePath::of::<String>().is_primitive());
}

#[test]
fn test_type_path_structural_origins() {
    for origin in ["&", "&mut", "*const", "*mut", "(..)", "[]", "[; 4]"] {
        assert!(TypePath::new(origin).is_structural(), "{origin}");
    }
    assert!(!TypePath::new("<my_app::Repo as my_app::Pool>::Conn").is_structural());
    assert!(!TypePath::new("[").is_structural());
    assert!(!TypePath::of::<String>().is_structural());
}

#[test]
fn test_type_path_in_module_prefix() {
    let path = TypePath::new("my_app::host::Interaction");
    assert!(path.in_namespace("my_app::host"));
    assert!(!path.in_namespace("my_app::hos"));
    assert!(!path.in_namespace("my_app::other"));
}
