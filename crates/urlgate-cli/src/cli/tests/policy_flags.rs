//! Tests for the global policy flags and how they become option overrides.

use super::parse_cli;
use std::path::Path;
use urlgate_core::ValidatorOptions;

#[test]
fn no_flags_means_no_overrides() {
    let cli = parse_cli(&["urlgate", "config"]);
    assert!(cli.policy.config.is_none());
    assert_eq!(cli.policy.overrides(), ValidatorOptions::default());
}

#[test]
fn flags_before_and_after_subcommand() {
    let cli = parse_cli(&[
        "urlgate",
        "--any-scheme",
        "check",
        "body.json",
        "--allow-domain",
        "example.com",
        "--allow-domain",
        "cdn.example.com",
        "--field",
        "nested.url",
        "--message",
        "Bad link",
        "--config",
        "/etc/urlgate.toml",
    ]);
    assert_eq!(cli.policy.config.as_deref(), Some(Path::new("/etc/urlgate.toml")));

    let overrides = cli.policy.overrides();
    assert_eq!(overrides.http_only, Some(false));
    assert_eq!(overrides.error_message.as_deref(), Some("Bad link"));
    assert_eq!(
        overrides.fields_to_validate,
        Some(vec!["nested.url".to_string()])
    );
    assert_eq!(
        overrides.allowed_domains,
        Some(vec!["example.com".to_string(), "cdn.example.com".to_string()])
    );
}

#[test]
fn overrides_keep_file_values_for_missing_flags() {
    let cli = parse_cli(&["urlgate", "--field", "avatar", "check"]);
    let file = ValidatorOptions::new().http_only(false).error_message("From file");
    let policy = file.merge(cli.policy.overrides()).build();
    assert!(!policy.http_only());
    assert_eq!(policy.error_message(), "From file");
    assert_eq!(policy.fields_to_validate(), ["avatar".to_string()]);
}
