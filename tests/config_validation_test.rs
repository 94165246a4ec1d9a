use std::collections::HashMap;
use std::io::Write;

use lithium::config::{AppConfig, LogFormat};

fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
    Some(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn port_defaults_to_8080() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_from(&dir.path().join("missing.toml"), env(&[])).unwrap();

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.host, "0.0.0.0");
}

#[test]
fn file_overrides_defaults() {
    let file = write_config(
        r#"
[server]
host = "127.0.0.1"
port = 9000

[logging]
level = "debug"
format = "json"
"#,
    );

    let config = AppConfig::load_from(file.path(), env(&[])).unwrap();

    assert_eq!(config.server.bind_address(), "127.0.0.1:9000");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn environment_overrides_file() {
    let file = write_config(
        r#"
[server]
port = 9000
"#,
    );

    let config = AppConfig::load_from(
        file.path(),
        env(&[
            ("LITHIUM_SERVER_PORT", "9090"),
            ("LITHIUM_LOGGING_FORMAT", "json"),
        ]),
    )
    .unwrap();

    assert_eq!(config.server.port, 9090);
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn blank_log_level_falls_back_to_info() {
    let file = write_config(
        r#"
[logging]
level = "   "
"#,
    );

    let config = AppConfig::load_from(file.path(), env(&[])).unwrap();
    assert_eq!(config.logging.level, "info");
}

#[test]
fn unknown_log_format_is_rejected() {
    let config = AppConfig::load_from(
        std::path::Path::new("missing.toml"),
        env(&[("LITHIUM_LOGGING_FORMAT", "xml")]),
    );
    assert!(config.is_err());
}

#[test]
fn invalid_port_reports_key_only_in_source() {
    use std::error::Error as _;

    let err = AppConfig::load_from(
        std::path::Path::new("missing.toml"),
        env(&[("LITHIUM_SERVER_PORT", "70000")]),
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "invalid configuration");
    let source = err.source().expect("config error keeps its cause");
    assert!(source.to_string().contains("port"), "unexpected cause: {source}");
}
