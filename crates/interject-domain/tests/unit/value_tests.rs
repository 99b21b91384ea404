//! Value and Arguments Tests

use interject_domain::{Arguments, Error, Value};
use std::sync::Arc;

trait Greeter: Send + Sync {
    fn greet(&self) -> String;
}

struct English;

impl Greeter for English {
    fn greet(&self) -> String {
        "hello".to_string()
    }
}

#[test]
fn test_value_downcast_roundtrip() {
    let value = Value::new(42_u64);
    assert!(value.is::<u64>());
    assert_eq!(value.downcast::<u64>().as_deref(), Some(&42));
    assert!(value.downcast::<String>().is_none());
    assert_eq!(value.type_name(), "u64");
}

#[test]
fn test_value_holds_trait_objects() {
    let greeter: Arc<dyn Greeter> = Arc::new(English);
    let value = Value::from_arc(greeter);
    let back = value.downcast::<dyn Greeter>().expect("trait object");
    assert_eq!(back.greet(), "hello");
}

#[test]
fn test_arguments_keyword_lookup() {
    let args = Arguments::new()
        .with("name", Value::new("ferris".to_string()))
        .with_positional(Value::new(7_i32));

    assert!(args.contains("name"));
    assert_eq!(args.get::<String>("name").as_deref().map(String::as_str), Some("ferris"));
    assert_eq!(args.positional_at::<i32>(0).as_deref(), Some(&7));
    assert_eq!(args.positional().len(), 1);
}

#[test]
fn test_arguments_require_reports_name() {
    let args = Arguments::new().with("count", Value::new(1_u8));
    match args.require::<String>("count") {
        Err(Error::InvalidArgument { message }) => assert!(message.contains("count")),
        other => panic!("Expected InvalidArgument, got {other:?}"),
    }
}
