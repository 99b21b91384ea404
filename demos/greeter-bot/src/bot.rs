//! Services and commands of the greeter bot

use interject::commands::{
    ButtonOptions, ButtonStyle, CommandOptions, CommandTree, Interaction, Registrar,
    SubCommandOptions, User, View,
};
use interject::{Arguments, Callback, CatalogContainer, Error, Inject, Result, Signature, Value};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use tracing::debug;

/// Builds greetings; one instance serves the whole bot
pub struct Greetings {
    greeting: String,
}

impl Greetings {
    pub fn new<S: Into<String>>(greeting: S) -> Self {
        Self {
            greeting: greeting.into(),
        }
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    pub fn greet(&self, name: &str) -> String {
        format!("{}, {name}!", self.greeting)
    }
}

/// Identifies one handled interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(pub u64);

/// State of the click counter view
#[derive(Debug, Default)]
pub struct ClickCounter(AtomicUsize);

impl ClickCounter {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Container with a bot-wide [`Greetings`] and a [`RequestId`] per interaction
pub fn container(greeting: &str) -> CatalogContainer {
    let next_id = Arc::new(AtomicU64::new(1));
    CatalogContainer::builder()
        .with_name("greeter-bot")
        .provide_value(Greetings::new(greeting))
        .provide_scoped_with_finalizer(
            move |_| {
                let id = next_id.fetch_add(1, Ordering::SeqCst);
                async move { Ok::<_, Error>(RequestId(id)) }
            },
            |request: &RequestId| debug!(request = request.0, "Request finished"),
        )
        .build()
}

/// Register every command and component of the bot
pub fn build_tree(registrar: &Registrar, counter: Arc<ClickCounter>) -> Result<CommandTree> {
    let mut tree = CommandTree::new();

    tree.add_slash_command(
        registrar.slash_command(CommandOptions::new().description("Greet someone"), &greet())?,
    )?;

    let mut settings = registrar.slash_command(
        CommandOptions::new()
            .description("Bot settings")
            .default_member_permissions(0x20),
        &settings(),
    )?;
    settings.sub_command(
        SubCommandOptions::new().description("Show the greeting in use"),
        &show(),
    )?;
    tree.add_slash_command(settings)?;

    tree.add_user_command(registrar.user_command(CommandOptions::new(), &wave())?)?;

    let mut view = View::new()
        .with_state(Value::from_arc(counter))
        .with_timeout(180);
    view.add_item(registrar.button(
        ButtonOptions::new().label("Click me").style(ButtonStyle::Primary),
        &clicks(),
    )?)?;
    tree.add_view(view);

    Ok(tree)
}

/// `/greet name [times]`
fn greet() -> Callback {
    Callback::new(
        Signature::builder("greet")
            .param::<Interaction>("inter")
            .param::<String>("name")
            .param::<Option<u64>>("times")
            .param::<Greetings>("greetings")
            .param::<Inject<RequestId>>("request")
            .build(),
        |args: Arguments| async move {
            let name = args.require::<String>("name")?;
            let times = args.get::<u64>("times").map_or(1, |times| *times);
            let greetings = args.require::<Greetings>("greetings")?;
            let request = args.require::<RequestId>("request")?;
            debug!(request = request.0, times, "Greeting");
            let text = vec![greetings.greet(&name); usize::try_from(times).unwrap_or(1)].join(" ");
            Ok::<_, Error>(Value::new(text))
        },
    )
}

/// `/settings`, runs before any of its subcommands
fn settings() -> Callback {
    Callback::new(
        Signature::builder("settings")
            .param::<Interaction>("inter")
            .build(),
        |args: Arguments| async move {
            let inter = args.require::<Interaction>("inter")?;
            debug!(user = inter.user_id(), "Settings requested");
            Ok::<_, Error>(Value::unit())
        },
    )
}

/// `/settings show`
fn show() -> Callback {
    Callback::new(
        Signature::builder("show")
            .param::<Interaction>("inter")
            .param::<Greetings>("greetings")
            .build(),
        |args: Arguments| async move {
            let greetings = args.require::<Greetings>("greetings")?;
            Ok::<_, Error>(Value::new(format!("greeting: {}", greetings.greeting())))
        },
    )
}

/// User menu `Wave`
fn wave() -> Callback {
    Callback::new(
        Signature::builder("Wave")
            .param::<Interaction>("inter")
            .param::<User>("user")
            .param::<Greetings>("greetings")
            .build(),
        |args: Arguments| async move {
            let user = args.require::<User>("user")?;
            let greetings = args.require::<Greetings>("greetings")?;
            Ok::<_, Error>(Value::new(greetings.greet(&user.name)))
        },
    )
}

/// Button `clicks`, counting on the view state
fn clicks() -> Callback {
    Callback::new(
        Signature::builder("clicks")
            .receiver()
            .param::<Interaction>("inter")
            .build(),
        |args: Arguments| async move {
            let counter = args
                .positional_at::<ClickCounter>(0)
                .ok_or_else(|| Error::callback("click counter state missing"))?;
            let count = counter.0.fetch_add(1, Ordering::SeqCst) + 1;
            Ok::<_, Error>(Value::new(format!("clicked {count} times")))
        },
    )
}
