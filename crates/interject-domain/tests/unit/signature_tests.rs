//! Signature Tests

use interject_domain::{
    Annotation, FromContainer, Inject, ParameterKind, Signature, TypePath,
};

struct Interaction;
struct UserService;

#[test]
fn test_builder_preserves_declaration_order() {
    let signature = Signature::builder("hello")
        .receiver()
        .param::<Interaction>("inter")
        .param::<UserService>("svc")
        .var_positional("args")
        .var_keyword("kwargs")
        .build();

    let names: Vec<&str> = signature.parameters().iter().map(|p| p.name()).collect();
    assert_eq!(names, ["self", "inter", "svc", "args", "kwargs"]);

    let kinds: Vec<ParameterKind> = signature.parameters().iter().map(|p| p.kind()).collect();
    assert_eq!(
        kinds,
        [
            ParameterKind::Receiver,
            ParameterKind::PositionalOrKeyword,
            ParameterKind::PositionalOrKeyword,
            ParameterKind::VarPositional,
            ParameterKind::VarKeyword,
        ]
    );
    assert_eq!(signature.var_keyword().map(|p| p.name()), Some("kwargs"));
}

#[test]
fn test_inject_shorthand_wraps_in_marker() {
    let signature = Signature::builder("f").inject::<UserService>("svc").build();
    assert_eq!(
        signature.parameter("svc").map(|p| p.annotation().clone()),
        Some(Annotation::of::<Inject<UserService>>())
    );
}

#[test]
fn test_annotated_parameter_records_metadata() {
    let signature = Signature::builder("f")
        .annotated::<UserService, FromContainer>("tag")
        .build();
    match signature.parameter("tag").map(|p| p.annotation()) {
        Some(Annotation::Annotated { base, metadata }) => {
            assert_eq!(**base, Annotation::of::<UserService>());
            assert_eq!(metadata, &vec![TypePath::of::<FromContainer>()]);
        }
        other => panic!("Expected annotated parameter, got {other:?}"),
    }
}

#[test]
fn test_untyped_parameter_is_empty() {
    let signature = Signature::builder("f").untyped("anything").build();
    assert!(signature.parameters()[0].annotation().is_empty());
}

#[test]
fn test_display_renders_parameters() {
    let signature = Signature::builder("ping")
        .param::<u64>("count")
        .var_keyword("kwargs")
        .build();
    assert_eq!(signature.to_string(), "ping(count: u64, **kwargs)");
}

#[test]
fn test_with_parameters_keeps_name() {
    let signature = Signature::builder("ping").param::<u64>("count").build();
    let reduced = signature.with_parameters(Vec::new());
    assert_eq!(reduced.name(), "ping");
    assert!(reduced.is_empty());
}
