use cadastro_domain::config::LoggingConfig;
use cadastro_logger::Logger;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn file_logging_creates_json_log_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");
    let config = LoggingConfig {
        level: "info".into(),
        directory: Some(log_dir.clone()),
        json: true,
        max_files: 2,
    };

    let logger = Logger::from_config("integration-file", &config)?;
    assert!(logger.writes_files());

    tracing::info!(cpf_valid = true, "hello from integration test");
    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    let line = contents.lines().find(|l| l.contains("hello from integration test")).expect("event logged");
    assert!(line.trim_start().starts_with('{'), "file output should be JSON: {line}");

    Ok(())
}
