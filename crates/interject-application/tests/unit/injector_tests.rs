//! Injection Executor Tests

use interject_application::{ContainerSlot, Injector};
use interject_domain::{Arguments, Callback, Error, Inject, Signature, Value};
use std::sync::Arc;
use std::time::Duration;

use crate::classifier_tests::{UserService, classifier, host};
use crate::test_utils::FakeContainer;

struct Greeting(&'static str);

fn injector(container: Option<&FakeContainer>) -> Injector {
    let slot = Arc::new(ContainerSlot::new());
    if let Some(container) = container {
        slot.set(container.clone().into_arc());
    }
    Injector::new(slot, classifier())
}

fn container() -> FakeContainer {
    FakeContainer::new()
        .provide::<UserService, _>(|| UserService)
        .provide::<Greeting, _>(|| Greeting("hi"))
}

/// Callback reporting which keyword arguments it received
fn hello(signature: Signature) -> Callback {
    Callback::new(signature, |args: Arguments| async move {
        let mut bound: Vec<String> = args.keyword().keys().cloned().collect();
        bound.sort();
        Ok::<_, Error>(Value::new(bound))
    })
}

fn bound(value: &Value) -> Vec<String> {
    value
        .downcast::<Vec<String>>()
        .map(|names| Vec::clone(&names))
        .unwrap_or_default()
}

#[tokio::test]
async fn test_dependency_is_resolved_next_to_host_argument() {
    let fake = container();
    let wrapped = injector(Some(&fake))
        .wrap(&hello(
            Signature::builder("hello")
                .param::<host::Interaction>("inter")
                .param::<UserService>("svc")
                .build(),
        ))
        .expect("wrap");

    let visible: Vec<&str> = wrapped
        .signature()
        .parameters()
        .iter()
        .map(|p| p.name())
        .collect();
    assert_eq!(visible, ["inter"]);

    let result = wrapped
        .call(Arguments::new().with("inter", Value::new(host::Interaction)))
        .await
        .expect("call");
    assert_eq!(bound(&result), ["inter", "svc"]);
    assert_eq!(fake.opened(), 1);
    assert_eq!(fake.closed(), 1);
}

#[tokio::test]
async fn test_explicit_dependency_receives_resolved_value() {
    let fake = container();
    let callback = Callback::new(
        Signature::builder("greet")
            .param::<host::Interaction>("inter")
            .inject::<Greeting>("greeting")
            .build(),
        |args: Arguments| async move {
            let greeting = args.require::<Greeting>("greeting")?;
            Ok::<_, Error>(Value::new(greeting.0.to_string()))
        },
    );

    let wrapped = injector(Some(&fake)).wrap(&callback).expect("wrap");
    let result = wrapped
        .call(Arguments::new().with("inter", Value::new(host::Interaction)))
        .await
        .expect("call");
    assert_eq!(result.downcast::<String>().as_deref().map(String::as_str), Some("hi"));
}

#[tokio::test]
async fn test_explicit_dependency_without_provider_fails() {
    let fake = FakeContainer::new();
    let wrapped = injector(Some(&fake))
        .wrap(&hello(
            Signature::builder("hello")
                .param::<Inject<UserService>>("svc")
                .build(),
        ))
        .expect("wrap");

    let err = wrapped.call(Arguments::new()).await.unwrap_err();
    assert!(err.is_missing_provider(), "unexpected error: {err}");
    assert_eq!(fake.closed(), 1);
}

#[tokio::test]
async fn test_plain_dependency_without_provider_is_left_unbound() {
    let fake = FakeContainer::new();
    let wrapped = injector(Some(&fake))
        .wrap(&hello(
            Signature::builder("hello")
                .param::<host::Interaction>("inter")
                .param::<Option<UserService>>("svc")
                .build(),
        ))
        .expect("wrap");

    let result = wrapped
        .call(Arguments::new().with("inter", Value::new(host::Interaction)))
        .await
        .expect("call");
    assert_eq!(bound(&result), ["inter"]);
}

#[tokio::test]
async fn test_failing_provider_propagates_and_closes_scope() {
    let fake = FakeContainer::new().failing::<UserService>();
    let wrapped = injector(Some(&fake))
        .wrap(&hello(
            Signature::builder("hello").param::<UserService>("svc").build(),
        ))
        .expect("wrap");

    let err = wrapped.call(Arguments::new()).await.unwrap_err();
    assert!(matches!(err, Error::Resolution { .. }), "unexpected error: {err}");
    assert_eq!(fake.opened(), 1);
    assert_eq!(fake.closed(), 1);
}

#[tokio::test]
async fn test_caller_supplied_arguments_are_not_resolved() {
    let fake = container();
    let callback = Callback::new(
        Signature::builder("hello").param::<Greeting>("greeting").build(),
        |args: Arguments| async move {
            let greeting = args.require::<Greeting>("greeting")?;
            Ok::<_, Error>(Value::new(greeting.0.to_string()))
        },
    );
    let wrapped = injector(Some(&fake)).inject(&callback).expect("inject");

    let result = wrapped
        .call(Arguments::new().with("greeting", Value::new(Greeting("override"))))
        .await
        .expect("call");
    assert_eq!(
        result.downcast::<String>().as_deref().map(String::as_str),
        Some("override")
    );
    assert_eq!(fake.resolved.load(std::sync::atomic::Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_inject_keeps_original_signature() {
    let signature = Signature::builder("hello")
        .param::<host::Interaction>("inter")
        .param::<UserService>("svc")
        .build();
    let wrapped = injector(None).inject(&hello(signature.clone())).expect("inject");
    assert_eq!(wrapped.signature(), &signature);
}

#[tokio::test]
async fn test_blocking_callback_is_rejected_at_wrap_time() {
    let callback = Callback::blocking(
        Signature::builder("sync_handler").param::<UserService>("svc").build(),
        |_| Ok(Value::unit()),
    );
    match injector(None).wrap(&callback) {
        Err(Error::InvalidTarget { callback }) => assert_eq!(callback, "sync_handler"),
        other => panic!("Expected InvalidTarget, got {other:?}"),
    }
}

#[tokio::test]
async fn test_call_before_setup_fails_without_invoking_callback() {
    let slot = Arc::new(ContainerSlot::new());
    let injector = Injector::new(Arc::clone(&slot), classifier());
    let invoked = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let flag = Arc::clone(&invoked);
    let callback = Callback::new(Signature::builder("early").build(), move |_| {
        let flag = Arc::clone(&flag);
        async move {
            flag.store(true, std::sync::atomic::Ordering::SeqCst);
            Ok::<_, Error>(Value::unit())
        }
    });

    let wrapped = injector.wrap(&callback).expect("wrap before setup succeeds");
    let err = wrapped.call(Arguments::new()).await.unwrap_err();
    assert!(matches!(err, Error::ContainerNotInitialized));
    assert!(!invoked.load(std::sync::atomic::Ordering::SeqCst));

    let fake = container();
    slot.set(fake.clone().into_arc());
    wrapped.call(Arguments::new()).await.expect("call after setup");
    assert!(invoked.load(std::sync::atomic::Ordering::SeqCst));
}

#[tokio::test]
async fn test_each_call_gets_its_own_scope() {
    let fake = container();
    let wrapped = injector(Some(&fake))
        .wrap(&hello(
            Signature::builder("hello").param::<UserService>("svc").build(),
        ))
        .expect("wrap");

    let calls = (0..5).map(|_| wrapped.call(Arguments::new()));
    for result in futures::future::join_all(calls).await {
        result.expect("call");
    }
    assert_eq!(fake.opened(), 5);
    assert_eq!(fake.closed(), 5);
}

#[tokio::test]
async fn test_callback_error_closes_scope() {
    let fake = container();
    let callback = Callback::new(
        Signature::builder("boom").param::<UserService>("svc").build(),
        |_| async { Err::<Value, _>(Error::callback("boom")) },
    );
    let wrapped = injector(Some(&fake)).wrap(&callback).expect("wrap");

    assert!(wrapped.call(Arguments::new()).await.is_err());
    assert_eq!(fake.closed(), 1);
}

#[tokio::test]
async fn test_cancelled_call_closes_scope() {
    let fake = container();
    let callback = Callback::new(
        Signature::builder("slow").param::<UserService>("svc").build(),
        |_| async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok::<_, Error>(Value::unit())
        },
    );
    let wrapped = injector(Some(&fake)).wrap(&callback).expect("wrap");

    let outcome =
        tokio::time::timeout(Duration::from_millis(20), wrapped.call(Arguments::new())).await;
    assert!(outcome.is_err());
    assert_eq!(fake.opened(), 1);
    assert_eq!(fake.closed(), 1);
}

#[tokio::test]
async fn test_panicking_callback_closes_scope() {
    let fake = container();
    let callback = Callback::new(
        Signature::builder("panics").param::<UserService>("svc").build(),
        |args: Arguments| async move {
            if args.contains("svc") {
                panic!("handler bug");
            }
            Ok::<_, Error>(Value::unit())
        },
    );
    let wrapped = injector(Some(&fake)).wrap(&callback).expect("wrap");

    let joined = tokio::spawn(wrapped.call(Arguments::new())).await;
    assert!(joined.is_err());
    assert_eq!(fake.closed(), 1);
}
