//! JSON encoding of log records.

use std::io;
use std::panic::Location;

use serde::Serialize;
use serde_json::ser::Formatter;

use super::record::LogRecord;
use crate::context::Context;

/// Encode a log record for `message`, attributing it to the caller's file.
#[track_caller]
pub fn serialize_log_message(ctx: &Context, message: &str) -> String {
    serialize_log_message_from(Location::caller().file(), ctx, message)
}

/// Encode a log record attributed to an explicit logger name.
///
/// The output is compact JSON with `<`, `>`, `&`, U+2028 and U+2029 written
/// as `\u` escapes, the same bytes Go's `encoding/json` produces for the
/// record. If encoding fails the error is reported through `tracing` and the
/// bare message is returned instead.
pub fn serialize_log_message_from(logger: &str, ctx: &Context, message: &str) -> String {
    let record = LogRecord::new(ctx, logger, message);
    match encode(&record) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!(error = %e, logger, "Failed to encode log record");
            record.message
        }
    }
}

fn encode(record: &LogRecord) -> serde_json::Result<String> {
    let mut buf = Vec::with_capacity(128);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, HtmlSafeFormatter);
    record.serialize(&mut ser)?;
    // Only ASCII escapes are spliced between whole UTF-8 fragments.
    Ok(String::from_utf8(buf)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
}

/// Compact formatter that additionally escapes HTML-significant characters
/// and the JavaScript line separators.
struct HtmlSafeFormatter;

impl Formatter for HtmlSafeFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            let escape = match ch {
                '<' => "\\u003c",
                '>' => "\\u003e",
                '&' => "\\u0026",
                '\u{2028}' => "\\u2028",
                '\u{2029}' => "\\u2029",
                _ => continue,
            };
            writer.write_all(fragment[start..i].as_bytes())?;
            writer.write_all(escape.as_bytes())?;
            start = i + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> LogRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_empty_context_message() {
        let message = "This is a log message";
        let record = decode(&serialize_log_message(&Context::background(), message));

        assert!(record.context.is_empty());
        assert!(record.logger.ends_with("src/envelope/builder.rs"));
        assert_eq!(record.message, message);
    }

    #[test]
    fn test_populated_context_message() {
        let ctx = Context::background()
            .with_request_id("foo")
            .with_user_id("bar");
        let record = decode(&serialize_log_message(&ctx, "This is a log message"));

        assert_eq!(record.context.len(), 2);
        assert_eq!(record.context["request-id"], "foo");
        assert_eq!(record.context["user-id"], "bar");
        assert!(record.logger.ends_with("src/envelope/builder.rs"));
    }

    #[test]
    fn test_explicit_logger() {
        let record = decode(&serialize_log_message_from(
            "billing/invoice.rs",
            &Context::background(),
            "m",
        ));
        assert_eq!(record.logger, "billing/invoice.rs");
    }

    #[test]
    fn test_message_is_escaped() {
        let message = "quote \" backslash \\ newline \n";
        let record = decode(&serialize_log_message(&Context::background(), message));
        assert_eq!(record.message, message);
    }

    #[test]
    fn test_html_characters_are_escaped() {
        let json = serialize_log_message_from("x.rs", &Context::background(), "a<b>&c\u{2028}");
        assert_eq!(
            json,
            r#"{"Context":{},"Logger":"x.rs","Message":"a\u003cb\u003e\u0026c\u2028"}"#
        );
    }

    #[test]
    fn test_context_values_are_escaped() {
        let ctx = Context::background()
            .with_request_id("<r&1>")
            .with_user_id("u\u{2029}");
        let json = serialize_log_message_from("x.rs", &ctx, "plain");
        assert_eq!(
            json,
            r#"{"Context":{"request-id":"\u003cr\u00261\u003e","user-id":"u\u2029"},"Logger":"x.rs","Message":"plain"}"#
        );

        let record = decode(&json);
        assert_eq!(record.context["request-id"], "<r&1>");
        assert_eq!(record.context["user-id"], "u\u{2029}");
    }
}
