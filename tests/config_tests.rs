//! Configuration loading and validation.

use std::fs;
use std::path::PathBuf;

use paceline::config::Config;
use paceline::error::{ConfigError, Error};

fn write_temp_config(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("paceline.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn loads_minimal_config_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(
        &dir,
        r#"
[backend]
url = "https://proj.backend.example/"
"#,
    );

    let config = Config::load(&path).expect("minimal config loads");

    assert_eq!(config.backend.url, "https://proj.backend.example/");
    assert_eq!(config.backend.courses_table, "courses");
    assert_eq!(config.backend.records_table, "running_records");
    assert_eq!(config.backend.music_table, "running_music");
    assert_eq!(config.catalog.page_limit, 20);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, "pretty");
}

#[test]
fn rejects_malformed_backend_url() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(
        &dir,
        r#"
[backend]
url = "not a url"
"#,
    );

    match Config::load(&path) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "backend.url",
            ..
        })) => {}
        Err(err) => panic!("expected invalid backend.url, got {err}"),
        Ok(config) => panic!("expected rejection, got url {}", config.backend.url),
    }
}

#[test]
fn rejects_out_of_range_page_limit() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(
        &dir,
        r#"
[backend]
url = "https://proj.backend.example/"

[catalog]
page_limit = 0
"#,
    );

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "catalog.page_limit",
            ..
        }))
    ));
}

#[test]
fn rejects_unknown_logging_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(
        &dir,
        r#"
[backend]
url = "https://proj.backend.example/"

[logging]
level = "debug"
format = "yaml"
"#,
    );

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "logging.format",
            ..
        }))
    ));
}

#[test]
fn rejects_unparseable_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(&dir, "[backend\nurl =");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    let config = Config::load_or_default(&path).expect("defaults load");
    assert_eq!(config.backend.url, "http://localhost:54321/");
}

#[test]
fn missing_file_errors_on_plain_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}
