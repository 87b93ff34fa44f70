mod common;
use crate::common::init_tracing;

use std::io::Write;

use tempfile::NamedTempFile;

use pollwatch::config::load_from_path;
use pollwatch::errors::PollwatchError;

#[test]
fn full_config_file_parses() {
    init_tracing();
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
poll_interval_ms = 200
watch = ["src", "templates/**/*.html"]
ignore = ["src/generated"]
extensions = ["rs", "html"]
"#
    )
    .unwrap();

    let cfg = load_from_path(file.path()).unwrap();
    assert_eq!(cfg.poll_interval_ms, 200);
    assert_eq!(cfg.watch, vec!["src", "templates/**/*.html"]);
    assert_eq!(cfg.ignore, vec!["src/generated"]);
    assert_eq!(cfg.extensions, vec!["rs", "html"]);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    init_tracing();
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"watch = ["src"]"#).unwrap();

    let cfg = load_from_path(file.path()).unwrap();
    assert_eq!(cfg.poll_interval_ms, 0);
    assert_eq!(cfg.watch, vec!["src"]);
    assert!(cfg.ignore.is_empty());
    assert!(cfg.extensions.is_empty());
}

#[test]
fn invalid_toml_returns_structured_error() {
    init_tracing();
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "watch = [unterminated").unwrap();

    let result = load_from_path(file.path());
    assert!(matches!(result, Err(PollwatchError::TomlError(_))));
}

#[test]
fn missing_explicit_config_file_is_an_io_error() {
    init_tracing();
    let result = load_from_path("definitely/not/here/Pollwatch.toml");
    assert!(matches!(result, Err(PollwatchError::IoError(_))));
}
