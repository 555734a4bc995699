//! Only one global subscriber can exist per process, so every test here is serial and
//! tolerates a subscriber installed by an earlier test.

use lectio_domain::config::LoggingConfig;
use lectio_logger::{LevelFilter, Logger, LoggerError};
use serial_test::serial;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
#[serial]
fn file_output_creates_prefixed_log_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let directory = temp.path().join("logs");

    let logger = match Logger::builder()
        .name("lectio-file")
        .console(false)
        .directory(&directory)
        .level(LevelFilter::INFO)
        .init()
    {
        Ok(logger) => logger,
        Err(LoggerError::SetGlobalDefault { .. }) => return Ok(()),
        Err(e) => return Err(e.into()),
    };

    assert!(logger.writes_files());
    tracing::info!(book = "JHN", chapter = 3, "fetched chapter");
    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&directory)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let file_name = log_file.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    assert!(file_name.starts_with("lectio-file"));
    assert!(fs::metadata(&log_file)?.len() > 0, "log file should not be empty");
    Ok(())
}

#[test]
#[serial]
fn second_install_is_rejected() {
    let first = Logger::builder().name("lectio-first").init();
    let second = Logger::builder().name("lectio-second").init();

    let err = second.expect_err("a second subscriber must not be installed");
    assert!(matches!(err, LoggerError::SetGlobalDefault { .. }));
    drop(first);
}

#[test]
#[serial]
fn config_section_drives_the_builder() {
    let temp = tempdir().expect("temp dir");
    let config = LoggingConfig {
        level: "debug".to_owned(),
        json: true,
        directory: Some(temp.path().to_path_buf()),
    };

    match Logger::from_config("lectio-config", &config) {
        Ok(logger) => assert!(logger.writes_files()),
        Err(LoggerError::SetGlobalDefault { .. }) => {},
        Err(e) => panic!("unexpected error: {e}"),
    }
    assert!(temp.path().exists());
}
