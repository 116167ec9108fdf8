use sarvam_tools::infrastructure::observability::TracingConfig;

#[test]
fn given_default_config_when_created_then_filter_targets_this_crate() {
    let config = TracingConfig::default();

    assert!(config.default_filter.contains("sarvam_tools=debug"));
    assert!(config.default_filter.contains("tower_http=debug"));
}
