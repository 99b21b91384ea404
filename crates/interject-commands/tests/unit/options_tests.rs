//! Registration Options Tests

use interject_commands::{
    CommandOptions, InstallType, InteractionContextType, validate_guild_ids,
};
use interject_domain::Error;
use interject_infrastructure::BotConfig;
use serde_json::json;

#[test]
fn test_guild_ids_must_be_non_negative_integers() {
    assert_eq!(
        validate_guild_ids(&[json!(10), json!(20)]).expect("valid"),
        vec![10, 20]
    );
    for bad in [json!(-1), json!(1.5), json!("1"), json!(null)] {
        let err = validate_guild_ids(&[bad]).expect_err("invalid id");
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }
}

#[test]
fn test_resolve_fills_name_and_description() {
    let metadata = CommandOptions::new()
        .resolve("ping", &BotConfig::default())
        .expect("resolve");
    assert_eq!(metadata.name, "ping");
    assert_eq!(metadata.description, "-");
    assert!(metadata.is_global());
    assert!(metadata.auto_sync);
}

#[test]
fn test_explicit_guild_ids_win_over_defaults() {
    let defaults = BotConfig {
        default_guild_ids: vec![1],
        ..BotConfig::default()
    };
    let metadata = CommandOptions::new()
        .guild_ids([5_u64])
        .resolve("ping", &defaults)
        .expect("resolve");
    assert_eq!(metadata.guild_ids, Some(vec![5]));
}

#[test]
fn test_test_guilds_only_overrides_explicit_ids() {
    let defaults = BotConfig {
        default_guild_ids: vec![1, 2],
        auto_sync: true,
        test_guilds_only: true,
    };
    let metadata = CommandOptions::new()
        .guild_ids([5_u64])
        .auto_sync(false)
        .resolve("ping", &defaults)
        .expect("resolve");
    assert_eq!(metadata.guild_ids, Some(vec![1, 2]));
    assert!(!metadata.auto_sync);
}

#[test]
fn test_invalid_ids_fail_even_in_test_guild_mode() {
    let defaults = BotConfig {
        default_guild_ids: vec![1],
        auto_sync: true,
        test_guilds_only: true,
    };
    let err = CommandOptions::new()
        .guild_ids([json!("nope")])
        .resolve("ping", &defaults)
        .expect_err("invalid id");
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_options_deserialize_from_configuration() {
    let options: CommandOptions = serde_json::from_value(json!({
        "name": "ban",
        "default_member_permissions": 4,
        "dm_permission": false,
        "install_types": ["guild"],
        "contexts": ["guild", "bot_dm"],
        "guild_ids": [123],
        "connectors": { "member": "target" },
        "extras": { "category": "moderation" }
    }))
    .expect("deserialize");

    assert_eq!(options.install_types, Some(vec![InstallType::Guild]));
    assert_eq!(
        options.contexts,
        Some(vec![InteractionContextType::Guild, InteractionContextType::BotDm])
    );
    assert_eq!(options.connectors.get("member").map(String::as_str), Some("target"));

    let metadata = options.resolve("ban_member", &BotConfig::default()).expect("resolve");
    assert_eq!(metadata.name, "ban");
    assert_eq!(metadata.default_member_permissions, Some(4));
    assert_eq!(metadata.guild_ids, Some(vec![123]));
    assert_eq!(metadata.extras.get("category"), Some(&json!("moderation")));
}
