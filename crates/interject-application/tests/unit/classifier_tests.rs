//! Annotation Classifier Tests

use interject_application::Classifier;
use interject_domain::{
    Annotation, Classification, FromContainer, Inject, InjectionSettings, OriginKind, TypePath,
};
use std::collections::HashMap;
use std::sync::Arc;

pub mod host {
    pub struct Interaction;
    pub struct Member;
}

pub struct UserService;
pub struct Marker;

/// Classifier treating the `host` module as the bot framework
pub fn classifier() -> Classifier {
    let path = TypePath::of::<host::Interaction>();
    let namespace = path
        .as_str()
        .rsplit_once("::")
        .map(|(module, _)| module.to_string())
        .unwrap_or_default();
    Classifier::new(InjectionSettings::default().with_framework_namespace(namespace))
}

fn classify<T: ?Sized + 'static>() -> Classification {
    classifier().classify(&Annotation::of::<T>())
}

#[test]
fn test_builtins_are_framework_owned() {
    assert_eq!(classify::<u64>(), Classification::FrameworkOwned);
    assert_eq!(classify::<&str>(), Classification::FrameworkOwned);
    assert_eq!(classify::<String>(), Classification::FrameworkOwned);
    assert_eq!(classify::<Vec<Option<i32>>>(), Classification::FrameworkOwned);
    assert_eq!(
        classify::<HashMap<String, (bool, f64)>>(),
        Classification::FrameworkOwned
    );
    assert_eq!(classify::<()>(), Classification::FrameworkOwned);
}

#[test]
fn test_framework_types_are_framework_owned() {
    assert_eq!(classify::<host::Interaction>(), Classification::FrameworkOwned);
    assert_eq!(
        classify::<Option<host::Member>>(),
        Classification::FrameworkOwned
    );
    assert_eq!(
        classify::<Arc<host::Interaction>>(),
        Classification::FrameworkOwned
    );
}

#[test]
fn test_library_types_are_framework_owned() {
    assert_eq!(classify::<FromContainer>(), Classification::FrameworkOwned);
    assert_eq!(classify::<Classifier>(), Classification::FrameworkOwned);
}

#[test]
fn test_unknown_types_are_dependencies() {
    assert_eq!(classify::<UserService>(), Classification::Dependency);
    assert_eq!(classify::<Arc<UserService>>(), Classification::Dependency);
}

#[test]
fn test_mixed_generic_is_dependency() {
    assert_eq!(classify::<Option<UserService>>(), Classification::Dependency);
    assert_eq!(
        classify::<(host::Interaction, UserService)>(),
        Classification::Dependency
    );
}

#[test]
fn test_marker_is_explicit_dependency_on_inner_type() {
    assert_eq!(
        classify::<Inject<UserService>>(),
        Classification::ExplicitDependency(Annotation::of::<UserService>())
    );
}

#[test]
fn test_marker_inner_type_is_not_reclassified() {
    assert_eq!(
        classify::<Inject<String>>(),
        Classification::ExplicitDependency(Annotation::of::<String>())
    );
    assert_eq!(
        classify::<Inject<host::Interaction>>(),
        Classification::ExplicitDependency(Annotation::of::<host::Interaction>())
    );
}

#[test]
fn test_annotated_with_container_metadata_is_explicit() {
    let annotation = Annotation::annotated(
        Annotation::of::<UserService>(),
        vec![TypePath::of::<FromContainer>()],
    );
    assert_eq!(
        classifier().classify(&annotation),
        Classification::ExplicitDependency(Annotation::of::<UserService>())
    );
}

#[test]
fn test_annotated_with_foreign_metadata_classifies_base() {
    let annotation = Annotation::annotated(
        Annotation::of::<host::Interaction>(),
        vec![TypePath::of::<Marker>()],
    );
    assert_eq!(
        classifier().classify(&annotation),
        Classification::FrameworkOwned
    );
}

#[test]
fn test_empty_annotation_is_never_a_dependency() {
    assert_eq!(
        classifier().classify(&Annotation::Empty),
        Classification::FrameworkOwned
    );
}

#[test]
fn test_configured_marker_origin() {
    struct Wrapper<T>(T);
    let origin = TypePath::of::<Wrapper<()>>();
    let classifier = Classifier::new(
        InjectionSettings::default().with_marker_origin(origin.as_str()),
    );
    assert_eq!(
        classifier.classify(&Annotation::of::<Wrapper<u8>>()),
        Classification::ExplicitDependency(Annotation::of::<u8>())
    );
    assert_eq!(classifier.origin_kind(&origin), OriginKind::GenericWrapper);
}

#[test]
fn test_origin_kinds() {
    let classifier = classifier();
    assert_eq!(
        classifier.origin_kind(&TypePath::of::<Vec<u8>>()),
        OriginKind::Builtin
    );
    assert_eq!(
        classifier.origin_kind(&TypePath::new("&")),
        OriginKind::Builtin
    );
    assert_eq!(
        classifier.origin_kind(&TypePath::of::<host::Member>()),
        OriginKind::Framework
    );
    assert_eq!(
        classifier.origin_kind(&TypePath::of::<Inject<()>>()),
        OriginKind::GenericWrapper
    );
    assert_eq!(
        classifier.origin_kind(&TypePath::of::<UserService>()),
        OriginKind::Unknown
    );
}

#[test]
fn test_qualified_path_leaf_is_dependency() {
    let classifier = classifier();
    let annotation = Annotation::parse("<my_app::Repo as my_app::Pool>::Conn");
    assert_eq!(classifier.classify(&annotation), Classification::Dependency);
    assert_eq!(
        classifier.origin_kind(&TypePath::new("<my_app::Repo as my_app::Pool>::Conn")),
        OriginKind::Unknown
    );

    assert_eq!(classify::<[u8; 4]>(), Classification::FrameworkOwned);
    assert_eq!(classify::<&mut [UserService]>(), Classification::Dependency);
}

#[test]
fn test_forward_reference_text_is_dependency() {
    let annotation = Annotation::parse("my_app::services::NotYetDefined");
    assert_eq!(classifier().classify(&annotation), Classification::Dependency);
}
