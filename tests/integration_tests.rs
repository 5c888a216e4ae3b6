//! Integration tests for the sync logger system
//!
//! These tests verify:
//! - Threshold filtering across every filter configuration
//! - The exact composed line format, color codes included
//! - Tag template resolution
//! - Positional parameter substitution rules
//! - File appender round-trips

use serde_json::json;
use std::fs;
use std::sync::{Arc, Mutex};
use sync_logger_system::appenders::FileAppender;
use sync_logger_system::core::{
    Appender, LevelFilter, Logger, LoggerError, LogLevel, LogParam, Result,
};
use tempfile::TempDir;

/// Appender that keeps lines in memory so tests can assert on deliveries.
struct CollectingAppender {
    lines: Arc<Mutex<Vec<String>>>,
}

impl Appender for CollectingAppender {
    fn append(&mut self, line: &str) -> Result<()> {
        self.lines.lock().unwrap().push(line.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "collecting"
    }
}

fn logger_with(level: LevelFilter) -> (Logger, Arc<Mutex<Vec<String>>>) {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let logger = Logger::builder()
        .level(level)
        .appender(CollectingAppender {
            lines: Arc::clone(&lines),
        })
        .build();
    (logger, lines)
}

/// Run all six level methods against a logger and collect the results.
fn log_all_levels(logger: &Logger, message: &str) -> Vec<Option<String>> {
    vec![
        logger.trace(message, &[]).unwrap(),
        logger.debug(message, &[]).unwrap(),
        logger.info(message, &[]).unwrap(),
        logger.warn(message, &[]).unwrap(),
        logger.error(message, &[]).unwrap(),
        logger.fatal(message, &[]).unwrap(),
    ]
}

const EXPECTED_LINES: [&str; 6] = [
    "\x1b[41m[TRACE]\x1b[49m This is cool!",
    "\x1b[34m[DEBUG]\x1b[39m This is cool!",
    "\x1b[32m[INFO]\x1b[39m This is cool!",
    "\x1b[33m[WARN]\x1b[39m This is cool!",
    "\x1b[31m[ERROR]\x1b[39m This is cool!",
    "\x1b[35m[FATAL]\x1b[39m This is cool!",
];

#[test]
fn test_level_all_logs_everything() {
    let (logger, lines) = logger_with(LevelFilter::All);

    let results = log_all_levels(&logger, "This is cool!");
    for (result, expected) in results.iter().zip(EXPECTED_LINES) {
        assert_eq!(result.as_deref(), Some(expected));
    }
    assert_eq!(lines.lock().unwrap().len(), 6);
}

#[test]
fn test_level_off_logs_nothing() {
    let (logger, lines) = logger_with(LevelFilter::Off);

    let results = log_all_levels(&logger, "This is cool!");
    assert!(results.iter().all(Option::is_none));
    assert!(lines.lock().unwrap().is_empty());
}

#[test]
fn test_each_threshold_gates_less_severe_levels() {
    // For a threshold at rank r, exactly the levels with rank <= r pass.
    let thresholds = [
        (LogLevel::Trace, 6),
        (LogLevel::Debug, 5),
        (LogLevel::Info, 4),
        (LogLevel::Warn, 3),
        (LogLevel::Error, 2),
        (LogLevel::Fatal, 1),
    ];

    for (threshold, passing_count) in thresholds {
        let (logger, lines) = logger_with(LevelFilter::Level(threshold));
        let results = log_all_levels(&logger, "This is cool!");

        let logged: Vec<&str> = results.iter().flatten().map(String::as_str).collect();
        assert_eq!(
            logged.len(),
            passing_count,
            "threshold {:?} should pass {} levels",
            threshold,
            passing_count
        );
        // The most severe levels always come last in the sweep.
        assert_eq!(logged, &EXPECTED_LINES[6 - passing_count..]);
        assert_eq!(lines.lock().unwrap().len(), passing_count);
    }
}

#[test]
fn test_plain_message_is_prefix_plus_message() {
    let (logger, _lines) = logger_with(LevelFilter::All);

    let line = logger.info("This is cool!", &[]).unwrap().unwrap();
    assert_eq!(line, "\x1b[32m[INFO]\x1b[39m This is cool!");
}

#[test]
fn test_fatal_with_mixed_params() {
    let (logger, _lines) = logger_with(LevelFilter::All);

    let line = logger
        .fatal(
            "This is {} {}!",
            &[LogParam::from("cool"), LogParam::from(json!({"test": "what"}))],
        )
        .unwrap()
        .unwrap();
    assert_eq!(
        line,
        "\x1b[35m[FATAL]\x1b[39m This is cool {\"test\":\"what\"}!"
    );
}

#[test]
fn test_fatal_threshold_suppresses_warn() {
    let (logger, lines) = logger_with(LevelFilter::Level(LogLevel::Fatal));

    assert_eq!(logger.warn("x", &[]).unwrap(), None);
    let line = logger.fatal("x", &[]).unwrap().unwrap();
    assert_eq!(line, "\x1b[35m[FATAL]\x1b[39m x");
    assert_eq!(lines.lock().unwrap().as_slice(), [line.as_str()]);
}

#[test]
fn test_tag_template_with_resolvers() {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let logger = Logger::builder()
        .level(LevelFilter::All)
        .tag_template("{bingo} | {bongo} |")
        .tag_resolver("bingo", || "BINGO!".to_string())
        .tag_resolver("bongo", || "BONGO :D".to_string())
        .appender(CollectingAppender {
            lines: Arc::clone(&lines),
        })
        .build();

    let line = logger.info("This is cool!", &[]).unwrap().unwrap();
    assert_eq!(
        line,
        "\x1b[32m[INFO]\x1b[39m BINGO! | BONGO :D | This is cool!"
    );
}

#[test]
fn test_tag_template_level_token() {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let logger = Logger::builder()
        .level(LevelFilter::All)
        .tag_template("{level}:")
        .appender(CollectingAppender {
            lines: Arc::clone(&lines),
        })
        .build();

    let line = logger.error("broken", &[]).unwrap().unwrap();
    assert_eq!(line, "\x1b[31m[ERROR]\x1b[39m error: broken");

    let line = logger.debug("details", &[]).unwrap().unwrap();
    assert_eq!(line, "\x1b[34m[DEBUG]\x1b[39m debug: details");
}

#[test]
fn test_blank_tag_template_adds_no_separator() {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let logger = Logger::builder()
        .level(LevelFilter::All)
        .tag_template("   ")
        .appender(CollectingAppender {
            lines: Arc::clone(&lines),
        })
        .build();

    let line = logger.info("bare", &[]).unwrap().unwrap();
    assert_eq!(line, "\x1b[32m[INFO]\x1b[39m bare");
}

#[test]
fn test_param_count_laws() {
    let (logger, _lines) = logger_with(LevelFilter::All);

    // Fewer params than placeholders: trailing placeholders stay literal.
    let line = logger
        .info("{} {} {}", &[LogParam::from("one")])
        .unwrap()
        .unwrap();
    assert_eq!(line, "\x1b[32m[INFO]\x1b[39m one {} {}");

    // More params than placeholders: extras ignored.
    let line = logger
        .info("just {}", &[LogParam::from("one"), LogParam::from("two")])
        .unwrap()
        .unwrap();
    assert_eq!(line, "\x1b[32m[INFO]\x1b[39m just one");

    // Equal counts: all resolved.
    let line = logger
        .info("{} and {}", &[LogParam::from(1), LogParam::from(2)])
        .unwrap()
        .unwrap();
    assert_eq!(line, "\x1b[32m[INFO]\x1b[39m 1 and 2");
}

#[test]
fn test_type_directed_stringification() {
    let (logger, _lines) = logger_with(LevelFilter::All);

    let params = [
        LogParam::from(json!({"test": "what"})),
        LogParam::from(json!([{"test": "what"}])),
        LogParam::Undefined,
        LogParam::Null,
        LogParam::from(false),
        LogParam::function("connect"),
    ];
    let line = logger
        .info("{} {} {} {} {} {}", &params)
        .unwrap()
        .unwrap();
    assert_eq!(
        line,
        "\x1b[32m[INFO]\x1b[39m {\"test\":\"what\"} [{\"test\":\"what\"}] undefined null false connect"
    );
}

#[test]
fn test_file_appender_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("round_trip.log");

    let logger = Logger::builder()
        .level(LevelFilter::All)
        .appender(FileAppender::new(&log_file))
        .build();

    let line = logger.info("This is cool!", &[]).unwrap().unwrap();

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content, format!("{}\n", line));
}

#[test]
fn test_file_appender_appends_across_calls() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("multi.log");

    let logger = Logger::builder()
        .level(LevelFilter::All)
        .appender(FileAppender::new(&log_file))
        .build();

    let first = logger.warn("first", &[]).unwrap().unwrap();
    let second = logger.error("second", &[]).unwrap().unwrap();

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content, format!("{}\n{}\n", first, second));
}

#[test]
fn test_file_appender_keeps_existing_content() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("existing.log");
    fs::write(&log_file, "pre-existing\n").unwrap();

    let logger = Logger::builder()
        .level(LevelFilter::All)
        .appender(FileAppender::new(&log_file))
        .build();
    let line = logger.info("new entry", &[]).unwrap().unwrap();

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content, format!("pre-existing\n{}\n", line));
}

#[test]
fn test_filtered_call_writes_nothing_to_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("filtered.log");

    let logger = Logger::builder()
        .level(LogLevel::Error)
        .appender(FileAppender::new(&log_file))
        .build();

    assert_eq!(logger.debug("hidden", &[]).unwrap(), None);
    assert!(!log_file.exists(), "filtered calls must not touch the sink");
}

#[test]
fn test_unwritable_sink_fails_loud() {
    let logger = Logger::builder()
        .level(LevelFilter::All)
        .appender(FileAppender::new("/nonexistent-dir/sub/app.log"))
        .build();

    let err = logger.info("boom", &[]).unwrap_err();
    assert!(matches!(err, LoggerError::FileAppenderError { .. }));
}

#[test]
fn test_formatting_anomalies_never_fail_the_call() {
    let (logger, _lines) = logger_with(LevelFilter::All);

    // Placeholder-free message with params supplied: message unchanged.
    let line = logger
        .info("no placeholders here", &[LogParam::from("spare")])
        .unwrap()
        .unwrap();
    assert_eq!(line, "\x1b[32m[INFO]\x1b[39m no placeholders here");

    // Lone placeholder with no params at all: left verbatim.
    let line = logger.info("dangling {}", &[]).unwrap().unwrap();
    assert_eq!(line, "\x1b[32m[INFO]\x1b[39m dangling {}");
}
