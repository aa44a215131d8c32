use moment::config::Config;
use moment::{constants, DateFormat};
use std::fs;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.calendar.time_zone, "local");
    assert_eq!(config.calendar.format, DateFormat::default());
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Unknown time zone should fail
    config.calendar.time_zone = "Atlantis/Capital".to_string();
    assert!(config.validate().is_err());

    // Reset and test an unrecognized format specifier
    config.calendar.time_zone = "Europe/Madrid".to_string();
    assert!(config.validate().is_ok());
    config.calendar.format = DateFormat::new("%Y %Q");
    assert!(config.validate().is_err());

    // Reset and test an unknown log level
    config.calendar.format = DateFormat::default();
    config.logging.level = "chatty".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("time_zone = \"local\""));
    assert!(toml_str.contains(&format!("format = \"{}\"", constants::DEFAULT_FORMAT)));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[calendar]
time_zone = "Asia/Kolkata"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.calendar.time_zone, "Asia/Kolkata");
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.calendar.format, DateFormat::default());
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("moment.toml");
    fs::write(
        &path,
        r#"
[calendar]
time_zone = "America/Chicago"
format = "%d/%m/%Y"

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.calendar.time_zone, "America/Chicago");
    assert_eq!(config.calendar.format, DateFormat::new("%d/%m/%Y"));
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("moment.toml");
    fs::write(&path, "[calendar]\ntime_zone = \"Moon/Base\"\n").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Moon/Base"));
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");
    let err = Config::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_generate_default_config_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    Config::generate_default_config(&path).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# moment Configuration File"));

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded.calendar.time_zone, "local");
    assert_eq!(loaded.calendar.format, DateFormat::default());
}
