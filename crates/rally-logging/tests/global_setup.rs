//! ---
//! rally_section: "01-logging"
//! rally_subsection: "integration-tests"
//! rally_type: "source"
//! rally_scope: "code"
//! rally_description: "Process-wide logger installation and reconfiguration."
//! rally_version: "v0.1.0"
//! rally_owner: "tbd"
//! ---
//! The global subscriber is process state, so the whole lifecycle runs in a
//! single test.
use std::fs;
use std::path::Path;

use rally_logging::{
    get_logger, is_configured, setup_logging_with, LogFormat, LogLevel, LogTarget,
    LoggingSettings,
};

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn setup_installs_once_and_reconfigures_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let pretty_path = dir.path().join("pretty.log");
    let json_path = dir.path().join("json").join("records.log");

    assert!(!is_configured());
    setup_logging_with(
        &LoggingSettings::new(LogLevel::Info, LogFormat::Pretty)
            .with_target(LogTarget::File(pretty_path.clone())),
    )
    .unwrap();
    assert!(is_configured());

    let logger = get_logger("x");
    logger.info("hello");
    logger.debug("below threshold");

    let pretty = read_lines(&pretty_path);
    assert_eq!(pretty.len(), 1);
    assert!(pretty[0].contains("hello"));

    // Reconfigure twice; records must not be duplicated by stacked layers.
    let json_settings = LoggingSettings::new(LogLevel::Debug, LogFormat::StructuredJson)
        .with_target(LogTarget::File(json_path.clone()));
    setup_logging_with(&json_settings).unwrap();
    setup_logging_with(&json_settings).unwrap();

    get_logger("x").info("hello");

    let records = read_lines(&json_path);
    let messages: Vec<serde_json::Value> = records
        .iter()
        .map(|line| serde_json::from_str(line).unwrap())
        .filter(|record: &serde_json::Value| record["logger"] == "x")
        .collect();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["message"], "hello");
    assert_eq!(messages[0]["level"], "INFO");

    // The previous target no longer receives anything.
    assert_eq!(read_lines(&pretty_path).len(), 1);

    // Raising the threshold applies to loggers handed out earlier.
    setup_logging_with(
        &LoggingSettings::new(LogLevel::Error, LogFormat::StructuredJson)
            .with_target(LogTarget::File(json_path.clone())),
    )
    .unwrap();
    let before = read_lines(&json_path).len();
    logger.warn("suppressed");
    logger.error("kept");
    let after = read_lines(&json_path);
    assert_eq!(after.len(), before + 1);
    assert!(after.last().unwrap().contains("kept"));
}
