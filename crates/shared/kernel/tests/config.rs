use lectio_kernel::config::load_config;
use lectio_kernel::domain::config::ApiConfig;
use std::fs;
use tempfile::tempdir;

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let cfg: ApiConfig = load_config(Some(dir.path().join("absent"))).unwrap();

    assert_eq!(cfg.server.port, 4583);
    assert_eq!(cfg.upstream.base_url, "https://www.bible.com/bible");
}

#[test]
fn file_values_are_applied() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("server.toml");
    fs::write(
        &path,
        r#"
[server]
port = 8088

[upstream]
base_url = "http://127.0.0.1:1/bible"
timeout_secs = 3

[upstream.versions]
NASB = 2692

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let cfg: ApiConfig = load_config(Some(&path)).unwrap();
    assert_eq!(cfg.server.port, 8088);
    assert_eq!(cfg.upstream.base_url, "http://127.0.0.1:1/bible");
    assert_eq!(cfg.upstream.timeout_secs, 3);
    assert_eq!(cfg.upstream.versions.get("NASB"), Some(&2692));
    assert_eq!(cfg.logging.level, "debug");
}

#[test]
fn malformed_file_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("server.toml");
    fs::write(&path, "[server\nport = ").unwrap();

    let err = load_config::<ApiConfig>(Some(&path)).unwrap_err();
    assert!(err.to_string().starts_with("Config error (Failed to build config)"));
}
