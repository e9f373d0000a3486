//! Tests for search configuration.

use super::*;

#[test]
fn test_defaults() {
    let config = SearchConfig::default();
    assert_eq!(config.thread_count, ThreadCount::Auto);
    assert_eq!(config.fork_depth, DEFAULT_FORK_DEPTH);
    assert!(config.log_progress);
}

#[test]
fn test_toml_parsing() {
    let toml = r#"
        fork_depth = 2
        log_progress = false
        thread_count = { count = 4 }
    "#;

    let config = SearchConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.fork_depth, 2);
    assert!(!config.log_progress);
    assert_eq!(config.thread_count, ThreadCount::Count(4));
}

#[test]
fn test_toml_missing_fields_use_defaults() {
    let config = SearchConfig::from_toml_str("thread_count = \"auto\"").unwrap();
    assert_eq!(config, SearchConfig::default());
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        fork_depth: 5
        thread_count:
          count: 2
    "#;

    let config = SearchConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.fork_depth, 5);
    assert_eq!(config.thread_count, ThreadCount::Count(2));
    assert!(config.log_progress);
}

#[test]
fn test_zero_threads_rejected() {
    let err = SearchConfig::from_toml_str("thread_count = { count = 0 }").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_malformed_toml_rejected() {
    let err = SearchConfig::from_toml_str("fork_depth = \"deep\"").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file() {
    let err = SearchConfig::load("/nonexistent/search.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let config = SearchConfig::new()
        .with_fork_depth(1)
        .with_thread_count(ThreadCount::Count(3))
        .with_log_progress(false);

    assert_eq!(config.fork_depth, 1);
    assert_eq!(config.thread_count.resolve(), 3);
    assert!(!config.log_progress);
}

#[test]
fn test_thread_count_display() {
    assert_eq!(format!("{}", ThreadCount::Auto), "Auto");
    assert_eq!(format!("{}", ThreadCount::Count(6)), "6");
}

#[test]
fn test_thread_count_resolve_auto() {
    assert!(ThreadCount::Auto.resolve() > 0);
}
