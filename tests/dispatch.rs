//! End-to-end tests of the global logging entry points.

use std::cell::Cell;
use std::fmt;
use std::sync::Arc;

use ctxlog::dispatch::{current, override_sink};
use ctxlog::sink::CaptureSink;
use ctxlog::{debugc, errorc, infoc, with_request_id, with_user_id, Context, Level, LogError};

mod common;

const THIS_FILE: &str = "tests/dispatch.rs";

#[test]
fn test_debugc() {
    let (sink, _guard) = common::capture_global();

    debugc(&Context::background(), "Some log message");

    assert_eq!(sink.messages(Level::Debug).len(), 1);
    common::assert_plain_record(&common::last_record(&sink), THIS_FILE, "Some log message");
}

#[test]
fn test_debugf() {
    let (sink, _guard) = common::capture_global();

    ctxlog::debugf!("Some {} message", "log");

    assert_eq!(sink.messages(Level::Debug).len(), 1);
    common::assert_plain_record(&common::last_record(&sink), THIS_FILE, "Some log message");
}

#[test]
fn test_infoc() {
    let (sink, _guard) = common::capture_global();

    infoc(&Context::background(), "Some log message");

    assert_eq!(sink.messages(Level::Info).len(), 1);
    common::assert_plain_record(&common::last_record(&sink), THIS_FILE, "Some log message");
}

#[test]
fn test_infof() {
    let (sink, _guard) = common::capture_global();

    ctxlog::infof!("Some {} message", "log");

    assert_eq!(sink.messages(Level::Info).len(), 1);
    common::assert_plain_record(&common::last_record(&sink), THIS_FILE, "Some log message");
}

#[test]
fn test_errorc() {
    let (sink, _guard) = common::capture_global();

    let err = errorc(&Context::background(), "Some log message");

    assert_eq!(sink.messages(Level::Error).len(), 1);
    common::assert_plain_record(&common::last_record(&sink), THIS_FILE, "Some log message");
    assert_eq!(err.to_string(), sink.last_message().unwrap());
}

#[test]
fn test_errorf() {
    let (sink, _guard) = common::capture_global();

    let err = ctxlog::errorf!("Some {} message", "log");

    assert_eq!(sink.messages(Level::Error).len(), 1);
    common::assert_plain_record(&common::last_record(&sink), THIS_FILE, "Some log message");
    assert_eq!(err.message(), sink.last_message().unwrap());
}

#[test]
fn test_function_forms_match_macros() {
    let (sink, _guard) = common::capture_global();

    ctxlog::infof(format_args!("{}-{}", "a", 1));

    common::assert_plain_record(&common::last_record(&sink), THIS_FILE, "a-1");
}

#[test]
fn test_context_is_carried() {
    let (sink, _guard) = common::capture_global();
    let ctx = with_user_id(&with_request_id(&Context::background(), "foo"), "bar");

    infoc(&ctx, "with context");

    let record = common::last_record(&sink);
    assert_eq!(record.context.len(), 2);
    assert_eq!(record.context["request-id"], "foo");
    assert_eq!(record.context["user-id"], "bar");
    assert!(record.logger.ends_with(THIS_FILE));
    assert_eq!(record.message, "with context");
}

#[test]
fn test_wire_shape() {
    let (sink, _guard) = common::capture_global();
    let ctx = Context::background().with_request_id("foo").with_user_id("bar");

    infoc(&ctx, "hello");

    let raw = sink.last_message().unwrap();
    assert!(raw.starts_with(r#"{"Context":{"request-id":"foo","user-id":"bar"},"Logger":""#));
    assert!(raw.ends_with(r#"tests/dispatch.rs","Message":"hello"}"#));
}

#[test]
fn test_error_chaining() {
    fn fail(code: u16) -> Result<(), LogError> {
        Err(ctxlog::errorf!("upstream returned {}", code))
    }

    let (sink, _guard) = common::capture_global();
    let err = fail(503).unwrap_err();

    assert_eq!(common::last_record(&sink).message, "upstream returned 503");
    assert!(err.to_string().contains("upstream returned 503"));
}

#[test]
fn test_producer_not_invoked_when_discarded() {
    struct Counted<'a>(&'a Cell<u32>);
    impl fmt::Display for Counted<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.set(self.0.get() + 1);
            f.write_str("counted")
        }
    }

    let sink = Arc::new(CaptureSink::discarding());
    let _guard = override_sink(sink.clone());
    let formatted = Cell::new(0);

    ctxlog::debugf!("{}", Counted(&formatted));
    ctxlog::infof!("{}", Counted(&formatted));
    debugc(&Context::background().with_user_id("u"), "skipped");

    assert_eq!(formatted.get(), 0);
    assert_eq!(sink.len(), 3);
    assert!(sink.records().iter().all(|r| r.message.is_none()));
}

#[test]
fn test_override_then_restore_leaves_no_state() {
    let first = Arc::new(CaptureSink::new());
    {
        let _guard = override_sink(first.clone());
        infoc(&Context::background(), "first");
        assert_eq!(current().sink().name(), "capture");
    }

    let (second, _guard) = common::capture_global();
    infoc(&Context::background(), "second");

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert_eq!(common::last_record(&second).message, "second");
}

#[test]
fn test_helper_override_nests_inside_test_override() {
    let outer = Arc::new(CaptureSink::new());
    let _outer_guard = override_sink(outer.clone());
    {
        let (inner, _inner_guard) = common::capture_global();
        infoc(&Context::background(), "inner");
        assert_eq!(common::last_record(&inner).message, "inner");
    }

    infoc(&Context::background(), "outer");
    assert_eq!(outer.len(), 1);
    assert_eq!(common::last_record(&outer).message, "outer");
}
