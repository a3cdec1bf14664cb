//! Cross-component integration tests
//!
//! These tests exercise the catalog, store, and placeholder engine
//! together, the way a data-access layer consumes them.

use std::collections::HashMap;

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use hub_email_templates::config::{AppConfig, Settings};
use hub_email_templates::template::{
    collect_placeholders, compile, create_default_template, get_statistics, missing_placeholders,
    MemoryTemplateStore, SystemVariables, TemplateType,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn fixed_system() -> SystemVariables {
    SystemVariables::new(
        "Analytics Hub",
        "https://hub.example.com",
        Utc.with_ymd_and_hms(2026, 8, 27, 9, 30, 0).unwrap(),
    )
}

fn vars(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[tokio::test]
async fn provision_validate_and_compile_invitation() {
    init_tracing();
    let store = MemoryTemplateStore::new();
    let template = create_default_template(&store, "invitation", Uuid::new_v4())
        .await
        .unwrap();

    // The canned invitation requires user_name and invitation_url on top
    // of the system-provided app_name.
    let required = collect_placeholders(&template);
    assert!(required.iter().any(|n| n == "user_name"));
    assert!(required.iter().any(|n| n == "invitation_url"));

    let variables = vars(&[
        ("{{user_name}}", "Ada"),
        ("{{invitation_url}}", "https://hub.example.com/invite/abc"),
        ("{{app_name}}", "Analytics Hub"),
    ]);
    assert!(missing_placeholders(&template, &variables).is_empty());

    let compiled = compile(&template, &variables, &fixed_system());
    assert_eq!(compiled.subject, "You're invited to join Analytics Hub");
    assert!(compiled.html_content.contains("Hello Ada,"));
    assert!(compiled
        .html_content
        .contains("href=\"https://hub.example.com/invite/abc\""));

    let text = compiled.text_content.expect("canned templates carry a text body");
    assert!(text.contains("Hello Ada,"));
    assert!(text.ends_with("Analytics Hub Team"));
}

#[tokio::test]
async fn validation_reports_gaps_before_compile_tolerates_them() {
    init_tracing();
    let store = MemoryTemplateStore::new();
    let template = create_default_template(&store, "password_reset", Uuid::new_v4())
        .await
        .unwrap();

    let partial = vars(&[("{{user_name}}", "Ada")]);
    let missing = missing_placeholders(&template, &partial);
    assert!(missing.iter().any(|n| n == "reset_url"));

    // Compilation still succeeds; the unresolved token survives verbatim.
    let compiled = compile(&template, &partial, &fixed_system());
    assert!(compiled.html_content.contains("{{reset_url}}"));
}

#[tokio::test]
async fn settings_feed_system_variables_into_compile() {
    init_tracing();
    let settings = Settings {
        app: AppConfig {
            name: "Indonet Analytics Hub".to_string(),
            url: "https://analytics.indonet.example".to_string(),
        },
    };

    let store = MemoryTemplateStore::new();
    let template = create_default_template(&store, "welcome", Uuid::new_v4())
        .await
        .unwrap();

    let compiled = compile(
        &template,
        &vars(&[("{{user_name}}", "Ada")]),
        &settings.system_variables(),
    );
    assert_eq!(compiled.subject, "Welcome to Indonet Analytics Hub!");
    assert!(compiled
        .html_content
        .contains("href=\"https://analytics.indonet.example\""));
}

#[tokio::test]
async fn statistics_track_provisioned_templates() {
    init_tracing();
    let store = MemoryTemplateStore::new();
    let creator = Uuid::new_v4();

    for type_value in ["invitation", "invitation", "welcome", "made_up_type"] {
        create_default_template(&store, type_value, creator)
            .await
            .unwrap();
    }

    let stats = get_statistics(&store).await.unwrap();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.by_type[&TemplateType::Invitation], 2);
    assert_eq!(stats.by_type[&TemplateType::Welcome], 1);
    // Unknown types are provisioned as general.
    assert_eq!(stats.by_type[&TemplateType::General], 1);
    assert_eq!(stats.by_type.values().sum::<u64>(), stats.total);
}
