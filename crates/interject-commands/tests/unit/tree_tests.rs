//! Command Tree Tests

use interject_commands::{
    ButtonOptions, CommandOptions, CommandTree, Interaction, Message, ModalOptions,
    SubCommandOptions, TextInput, User, View,
};
use interject_domain::{Arguments, Callback, Error, Signature, Value};

use crate::test_utils::{noop, registrar, string, text};
use crate::ui_tests::echo_body;

fn tree() -> CommandTree {
    let registrar = registrar();
    let mut tree = CommandTree::new();

    let mut config = registrar
        .slash_command(CommandOptions::new().name("config"), &noop("config"))
        .expect("config");
    config
        .sub_command(SubCommandOptions::new(), &noop("show"))
        .expect("show");
    tree.add_slash_command(config).expect("add config");
    tree.add_slash_command(
        registrar
            .slash_command(CommandOptions::new().auto_sync(false), &noop("ping"))
            .expect("ping"),
    )
    .expect("add ping");
    tree.add_user_command(
        registrar
            .user_command(CommandOptions::new(), &target_name("Inspect"))
            .expect("inspect"),
    )
    .expect("add inspect");

    let mut view = View::new();
    view.add_item(
        registrar
            .button(ButtonOptions::new().custom_id("confirm"), &noop("confirm"))
            .expect("button"),
    )
    .expect("add button");
    tree.add_view(view);

    tree.add_modal(
        registrar
            .modal(
                ModalOptions::new("Feedback")
                    .custom_id("feedback")
                    .component(TextInput::new("body", "Body")),
                &echo_body("feedback"),
            )
            .expect("modal"),
    )
    .expect("add modal");
    tree
}

fn target_name(name: &str) -> Callback {
    Callback::new(
        Signature::builder(name)
            .param::<Interaction>("inter")
            .param::<User>("user")
            .build(),
        |args: Arguments| async move {
            let user = args.require::<User>("user")?;
            Ok::<_, Error>(Value::new(user.name.clone()))
        },
    )
}

#[tokio::test]
async fn test_dispatch_routes_by_kind_and_name() {
    let tree = tree();

    assert_eq!(text(tree.dispatch(&Interaction::slash("ping")).await), "ping");
    assert_eq!(text(tree.dispatch(&Interaction::slash("config show")).await), "show");
    let user = User {
        id: 3,
        name: "grace".to_string(),
    };
    assert_eq!(
        text(tree.dispatch(&Interaction::user_command("Inspect", user)).await),
        "grace"
    );
    assert_eq!(
        text(tree.dispatch(&Interaction::component("confirm")).await),
        "confirm"
    );
    assert_eq!(
        text(
            tree.dispatch(&Interaction::modal_submit("feedback").with_option("body", string("great")))
                .await
        ),
        "great"
    );
}

#[tokio::test]
async fn test_unknown_targets_are_invalid() {
    let tree = tree();
    for interaction in [
        Interaction::slash("missing"),
        Interaction::message_command(
            "Inspect",
            Message {
                id: 1,
                author_id: 2,
                content: String::new(),
            },
        ),
        Interaction::component("cancel"),
        Interaction::modal_submit("survey"),
    ] {
        let err = tree.dispatch(&interaction).await.expect_err("unknown target");
        assert!(matches!(err, Error::InvalidArgument { .. }), "{err}");
    }
}

#[test]
fn test_duplicate_names_are_rejected() {
    let registrar = registrar();
    let mut tree = CommandTree::new();
    tree.add_slash_command(
        registrar
            .slash_command(CommandOptions::new().name("ping"), &noop("ping"))
            .expect("first"),
    )
    .expect("add first");

    let err = tree
        .add_slash_command(
            registrar
                .slash_command(CommandOptions::new().name("ping"), &noop("pong"))
                .expect("second"),
        )
        .expect_err("duplicate name");
    assert!(matches!(err, Error::AlreadyRegistered { .. }));
}

#[test]
fn test_context_menu_kind_must_match() {
    let command = registrar()
        .message_command(CommandOptions::new(), &noop("Quote"))
        .expect("register");
    let err = CommandTree::new()
        .add_user_command(command)
        .expect_err("wrong menu");
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_commands_to_sync_skips_manual_commands() {
    let tree = tree();
    let names: Vec<&str> = tree
        .commands_to_sync()
        .into_iter()
        .map(|metadata| metadata.name.as_str())
        .collect();
    assert_eq!(names, ["config", "Inspect"]);
}
