//! Shared utilities for integration tests.

use std::sync::Arc;

use ctxlog::dispatch::{override_sink, OverrideGuard};
use ctxlog::sink::CaptureSink;
use ctxlog::LogRecord;

/// Route global logging into a fresh capture sink for the guard's lifetime.
pub fn capture_global() -> (Arc<CaptureSink>, OverrideGuard<'static>) {
    let sink = Arc::new(CaptureSink::new());
    let guard = override_sink(sink.clone());
    (sink, guard)
}

/// Decode the most recent captured envelope.
pub fn last_record(sink: &CaptureSink) -> LogRecord {
    let message = sink.last_message().expect("nothing was captured");
    serde_json::from_str(&message).expect("captured message is not a log record")
}

/// Assert the record carries no context and was logged from `file`.
#[allow(dead_code)]
pub fn assert_plain_record(record: &LogRecord, file: &str, message: &str) {
    assert!(record.context.is_empty(), "Context is non-empty: {:?}", record.context);
    assert!(
        record.logger.ends_with(file),
        "Invalid logger {}. Expected logger to have suffix {}",
        record.logger,
        file
    );
    assert_eq!(record.message, message);
}
