//! Leveled log sinks.
//!
//! # Responsibilities
//! - Define the interface the dispatcher forwards records through
//! - Adapt that interface onto concrete backends (tracing, byte streams)
//! - Provide an in-memory sink for tests and embedders
//!
//! # Design Decisions
//! - Sinks receive a producer closure, never a pre-built string
//! - A sink that filters a level out must not invoke the producer
//! - Error-level calls always yield a [`LogError`] mirroring the message

pub mod capture;
pub mod level;
pub mod stream;
pub mod tracing_sink;

pub use capture::{CaptureSink, CapturedRecord};
pub use level::Level;
pub use stream::StreamSink;
pub use tracing_sink::TracingSink;

use crate::error::LogError;

/// Deferred message construction handed to a sink.
///
/// Calling it performs the full context serialization and JSON encoding.
pub type MessageProducer<'a> = &'a dyn Fn() -> String;

/// Underlying leveled logging backend.
pub trait LogSink: Send + Sync {
    /// Log at debug level, invoking `producer` only if debug is enabled.
    fn debug(&self, producer: MessageProducer<'_>);

    /// Log at info level, invoking `producer` only if info is enabled.
    fn info(&self, producer: MessageProducer<'_>);

    /// Log at error level and return an error mirroring the message.
    fn error(&self, producer: MessageProducer<'_>) -> LogError;

    /// Short name used in diagnostics.
    fn name(&self) -> &'static str {
        "custom"
    }
}
