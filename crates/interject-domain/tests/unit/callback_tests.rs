//! Callback Tests

use interject_domain::{Arguments, Callback, Error, Signature, Value};

fn signature() -> Signature {
    Signature::builder("hello").param::<u64>("count").build()
}

#[tokio::test]
async fn test_async_callback_invocation() {
    let callback = Callback::new(signature(), |args: Arguments| async move {
        let count = args.require::<u64>("count")?;
        Ok::<_, Error>(Value::new(*count * 2))
    });
    assert!(callback.is_async());

    let result = callback
        .call(Arguments::new().with("count", Value::new(21_u64)))
        .await
        .expect("callback should succeed");
    assert_eq!(result.downcast::<u64>().as_deref(), Some(&42));
}

#[tokio::test]
async fn test_blocking_callback_invocation() {
    let callback = Callback::blocking(signature(), |_| Ok(Value::unit()));
    assert!(!callback.is_async());
    assert!(callback.call(Arguments::new()).await.is_ok());
}

#[test]
fn test_marker_can_only_be_set_once() {
    let callback = Callback::blocking(signature(), |_| Ok(Value::unit()));
    assert!(callback.command_marker().is_none());

    callback
        .mark_registered("slash command", "hello")
        .expect("first registration");
    let again = callback.clone().mark_registered("user command", "hello");
    match again {
        Err(Error::AlreadyRegistered { name, kind }) => {
            assert_eq!(name, "hello");
            assert_eq!(kind, "slash command");
        }
        other => panic!("Expected AlreadyRegistered, got {other:?}"),
    }
}

#[test]
fn test_with_signature_creates_fresh_callback() {
    let callback = Callback::blocking(signature(), |_| Ok(Value::unit()));
    callback.mark_registered("button", "hello").expect("mark");

    let rewritten = callback.with_signature(Signature::builder("hello").build());
    assert!(!rewritten.ptr_eq(&callback));
    assert!(rewritten.command_marker().is_none());
    assert!(callback.ptr_eq(&callback.clone()));
}
