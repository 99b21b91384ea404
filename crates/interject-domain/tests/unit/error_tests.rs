//! Error Tests

use interject_domain::Error;

#[test]
fn test_missing_provider_detection() {
    let error = Error::missing_provider("my_app::UserService");
    assert!(error.is_missing_provider());
    assert!(error.to_string().contains("my_app::UserService"));
    assert!(!Error::resolution("my_app::UserService", "boom").is_missing_provider());
}

#[test]
fn test_already_registered_message() {
    let error = Error::already_registered("hello", "slash command");
    assert_eq!(
        error.to_string(),
        "Already registered: hello is already registered as a slash command"
    );
}

#[test]
fn test_callback_error_keeps_source() {
    let io = std::io::Error::other("disk gone");
    let error = Error::callback_with_source("handler failed", io);
    match error {
        Error::Callback { message, source } => {
            assert_eq!(message, "handler failed");
            assert!(source.is_some());
        }
        _ => panic!("Expected Callback error"),
    }
}
