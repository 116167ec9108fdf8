use std::time::Duration;

use sarvam_tools::application::services::PollPolicy;
use sarvam_tools::presentation::{Environment, Settings};

fn defaults() -> Settings {
    Settings::builder(Environment::Test)
        .unwrap()
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap()
}

#[test]
fn given_no_overrides_when_loading_then_uses_defaults() {
    let settings = defaults();

    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.sarvam.base_url, "https://api.sarvam.ai");
    assert_eq!(settings.sarvam.request_timeout(), Duration::from_secs(60));
    assert_eq!(settings.sarvam.poll_policy(), PollPolicy::default());
    assert!(!settings.logging.enable_json);
}

#[test]
fn given_poll_deadline_override_when_loading_then_policy_has_deadline() {
    let settings: Settings = Settings::builder(Environment::Test)
        .unwrap()
        .set_override("sarvam.poll_deadline_secs", 90)
        .unwrap()
        .set_override("sarvam.poll_interval_ms", 250)
        .unwrap()
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap();

    let policy = settings.sarvam.poll_policy();

    assert_eq!(policy.deadline, Some(Duration::from_secs(90)));
    assert_eq!(policy.interval, Duration::from_millis(250));
    assert_eq!(policy.total_wait(), Duration::from_secs(15));
}

#[test]
fn given_sarvam_settings_when_building_toolset_config_then_carries_base_url() {
    let settings = defaults();

    let config = settings.sarvam.toolset_config();

    assert_eq!(config.base_url, "https://api.sarvam.ai");
    assert_eq!(config.poll_policy.max_attempts, 60);
}

#[test]
fn given_environment_names_when_parsing_then_case_insensitive() {
    assert_eq!(
        Environment::try_from("PROD".to_string()),
        Ok(Environment::Prod)
    );
    assert_eq!(
        Environment::try_from("production".to_string()),
        Ok(Environment::Prod)
    );
    assert_eq!(
        Environment::try_from("Local".to_string()),
        Ok(Environment::Local)
    );
    assert!(Environment::try_from("staging".to_string()).is_err());
}

#[test]
fn given_environment_when_naming_settings_file_then_uses_lowercase_name() {
    assert_eq!(Environment::Test.settings_file(), "appsettings.test");
    assert_eq!(Environment::Prod.to_string(), "prod");
}

#[test]
fn given_logging_settings_when_building_tracing_config_then_uses_level_as_filter() {
    let settings = defaults();

    let tracing = settings.logging.tracing_config(Environment::Test);

    assert_eq!(tracing.environment, "test");
    assert_eq!(tracing.default_filter, settings.logging.level);
    assert!(!tracing.json_format);
}

#[test]
fn given_api_key_when_debug_formatting_settings_then_key_is_redacted() {
    let settings: Settings = Settings::builder(Environment::Test)
        .unwrap()
        .set_override("sarvam.api_key", "sk-live-secret")
        .unwrap()
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap();

    let rendered = format!("{:?}", settings);

    assert_eq!(settings.sarvam.api_key, "sk-live-secret");
    assert!(!rendered.contains("sk-live-secret"));
    assert!(rendered.contains("[REDACTED]"));
    assert!(rendered.contains("https://api.sarvam.ai"));
}
