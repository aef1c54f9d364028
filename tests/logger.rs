//! Tests for the combined gate-and-emit contract.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use treelog::{Entry, Level, Log, NullLogger, RootLogger, Value};

/// Captures delivered entries so tests can assert on them after the drain.
fn capture() -> (Arc<Mutex<Vec<Entry>>>, impl Fn(&Entry) + Send + Sync) {
    let logs = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&logs);
    (logs, move |entry: &Entry| {
        sink.lock().unwrap().push(entry.clone());
    })
}

#[test]
fn gate_and_emit_at_err_threshold() {
    let root = RootLogger::new("parent", Level::Err);
    let (logs, reporter) = capture();
    root.set_reporter(reporter);

    assert!(!root.warn(&[]));
    assert!(!root.info(&[]));
    assert!(root.err(&[]));
    assert!(root.err(&["Something went".into(), "wrong".into()]));
    assert!(!root.warn(&["this should be ignored".into()]));
    assert!(!root.info(&["this should be ignored".into()]));

    root.stop(Duration::from_secs(5));

    let logs = logs.lock().unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].level, Level::Err);
    assert_eq!(logs[0].source, vec!["parent".to_string()]);
    assert_eq!(logs[0].data[0], Value::Text("Something went".to_string()));
    assert_eq!(logs[0].data[1], Value::Text("wrong".to_string()));
}

#[test]
fn gate_check_produces_no_entry() {
    let root = RootLogger::new("parent", Level::Everything);
    let (logs, reporter) = capture();
    root.set_reporter(reporter);

    assert!(root.info(&[]));
    assert!(root.warn(&[]));
    assert!(root.err(&[]));

    root.stop(Duration::from_secs(5));
    assert!(logs.lock().unwrap().is_empty());
}

#[test]
fn threshold_sweep() {
    let root = RootLogger::new("parent", Level::Info);
    root.set_reporter(|_: &Entry| {});

    root.set_level(Level::Nothing);
    assert!(!root.info(&[]));
    assert!(!root.warn(&[]));
    assert!(!root.err(&[]));

    root.set_level(Level::Err);
    assert!(!root.info(&[]));
    assert!(!root.warn(&[]));
    assert!(root.err(&[]));

    root.set_level(Level::Warn);
    assert!(!root.info(&[]));
    assert!(root.warn(&[]));
    assert!(root.err(&[]));

    root.set_level(Level::Info);
    assert!(root.info(&[]));
    assert!(root.warn(&[]));
    assert!(root.err(&[]));

    root.set_level(Level::Everything);
    assert!(root.info(&[]));
    assert!(root.warn(&[]));
    assert!(root.err(&[]));

    root.stop(Duration::from_secs(5));
}

#[test]
fn set_level_is_shared_with_descendants() {
    let root = RootLogger::new("parent", Level::Nothing);
    let child = root.child("child");
    assert!(!child.err(&[]));

    root.set_level(Level::Everything);
    assert!(child.err(&[]));
    assert!(child.info(&[]));

    root.stop(Duration::from_secs(5));
}

#[test]
fn entry_carries_timestamp_and_failure_values() {
    let root = RootLogger::new("parent", Level::Everything);
    let (logs, reporter) = capture();
    root.set_reporter(reporter);

    let before = chrono::Local::now();
    let err = std::io::Error::other("disk on fire");
    assert!(root.err(&[Value::failure(&err), Value::Int(7)]));
    root.stop(Duration::from_secs(5));

    let logs = logs.lock().unwrap();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].when >= before);
    assert_eq!(logs[0].data[0], Value::Failure("disk on fire".to_string()));
    assert_eq!(logs[0].data[1], Value::Int(7));
}

#[test]
fn null_logger_never_logs() {
    let null = NullLogger;
    assert!(!null.info(&[]));
    assert!(!null.warn(&[]));
    assert!(!null.err(&[]));
    assert!(!null.err(&["ignored".into()]));
}

#[test]
fn null_logger_is_object_safe() {
    let logger: &dyn Log = &NullLogger;
    assert!(!logger.info(&["still ignored".into()]));
}
