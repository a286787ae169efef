use crate::logging::{LogTarget, Logger};
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static TEST_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn temp_log_dir() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let uniq = TEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("level-extractor-logs-{nanos}-{uniq}"))
}

fn file_logger() -> Logger {
    let mut logger = Logger::new();
    logger.set_log_dir(temp_log_dir());
    logger.set_file_logging_enabled(true);
    logger
}

#[test]
fn file_logging_is_off_by_default() {
    let logger = Logger::new();
    assert!(!logger.file_logging_enabled());
    logger.info("console line", LogTarget::ConsoleAndFile);
    assert!(logger.log_path().is_none());
}

#[test]
fn logger_defers_file_creation_until_needed() {
    let logger = file_logger();
    assert!(logger.log_path().is_none());

    // Console-only should not create a log file.
    logger.info("console only", LogTarget::ConsoleOnly);
    assert!(logger.log_path().is_none());

    logger.info("file line", LogTarget::FileOnly);
    let path = logger.log_path().expect("log path should be set");
    assert!(path.starts_with(logger.log_dir()));
    let contents = fs::read_to_string(path).unwrap();
    assert!(contents.contains("file line"));
    assert!(contents.contains("INFO"));
}

#[test]
fn logger_writes_levels_and_combined_targets() {
    let logger = file_logger();

    logger.warn("warn line", LogTarget::FileOnly);
    logger.error("error line", LogTarget::ConsoleAndFile);

    let path = logger.log_path().expect("log path should be set");
    let contents = fs::read_to_string(path).unwrap();
    assert!(contents.contains("WARN"));
    assert!(contents.contains("warn line"));
    assert!(contents.contains("ERROR"));
    assert!(contents.contains("error line"));
}

#[test]
fn log_dir_is_frozen_once_file_is_open() {
    let mut logger = file_logger();
    logger.info("open it", LogTarget::FileOnly);
    let first = logger.log_dir().to_path_buf();

    logger.set_log_dir("elsewhere");
    assert_eq!(logger.log_dir(), first.as_path());
}

#[test]
fn unusable_log_dir_degrades_to_console() {
    let blocker = temp_log_dir();
    fs::write(&blocker, "not a directory").unwrap();

    let mut logger = Logger::new();
    logger.set_log_dir(&blocker);
    logger.set_file_logging_enabled(true);
    logger.info("still fine", LogTarget::ConsoleAndFile);
    assert!(logger.log_path().is_none());
}

#[test]
fn level_names_pad_to_a_fixed_column() {
    use crate::logging::LogLevel;
    assert_eq!(format!("{:<5}|", LogLevel::Info), "INFO |");
    assert_eq!(format!("{:<5}|", LogLevel::Error), "ERROR|");
}
