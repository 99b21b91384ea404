//! Context Menu Command Tests

use interject_commands::{CommandOptions, ContextMenuKind, Interaction, Message, User};
use interject_domain::{Arguments, Callback, Error, Signature, Value};

use crate::test_utils::{Greeter, registrar, text};

fn describe_user() -> Callback {
    Callback::new(
        Signature::builder("Describe")
            .param::<Interaction>("inter")
            .param::<User>("user")
            .param::<Greeter>("greeter")
            .build(),
        |args: Arguments| async move {
            let user = args.require::<User>("user")?;
            let greeter = args.require::<Greeter>("greeter")?;
            Ok::<_, Error>(Value::new(format!("{} {}", greeter.greeting, user.name)))
        },
    )
}

fn ada() -> User {
    User {
        id: 7,
        name: "ada".to_string(),
    }
}

#[tokio::test]
async fn test_user_command_binds_target_after_interaction() {
    let command = registrar()
        .user_command(CommandOptions::new(), &describe_user())
        .expect("register");
    assert_eq!(command.kind(), ContextMenuKind::User);
    assert_eq!(command.name(), "Describe");

    let visible: Vec<&str> = command
        .callback()
        .signature()
        .parameters()
        .iter()
        .map(|p| p.name())
        .collect();
    assert_eq!(visible, ["inter", "user"]);

    let result = command
        .invoke(&Interaction::user_command("Describe", ada()))
        .await;
    assert_eq!(text(result), "hello ada");
}

#[tokio::test]
async fn test_message_command_receives_message() {
    let callback = Callback::new(
        Signature::builder("Quote")
            .param::<Interaction>("inter")
            .param::<Message>("message")
            .build(),
        |args: Arguments| async move {
            let message = args.require::<Message>("message")?;
            Ok::<_, Error>(Value::new(format!("> {}", message.content)))
        },
    );
    let command = registrar()
        .message_command(CommandOptions::new().name("Quote message"), &callback)
        .expect("register");
    assert_eq!(command.kind(), ContextMenuKind::Message);

    let message = Message {
        id: 1,
        author_id: 7,
        content: "hi there".to_string(),
    };
    let result = command
        .invoke(&Interaction::message_command("Quote message", message))
        .await;
    assert_eq!(text(result), "> hi there");
}

#[tokio::test]
async fn test_invocation_without_target_is_invalid() {
    let command = registrar()
        .user_command(CommandOptions::new(), &describe_user())
        .expect("register");

    let err = command
        .invoke(&Interaction::slash("Describe"))
        .await
        .expect_err("no target");
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_kind_names_are_marker_kinds() {
    assert_eq!(ContextMenuKind::User.as_str(), "user command");
    assert_eq!(ContextMenuKind::Message.as_str(), "message command");
}
