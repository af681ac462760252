//! Sink backed by the `tracing` crate.

use super::{LogSink, MessageProducer};
use crate::error::LogError;

/// Target attached to every event this sink emits.
pub const TARGET: &str = "ctxlog";

/// Forwards records to the current `tracing` subscriber.
///
/// Level filtering is whatever the installed subscriber decides; the
/// producer runs only inside an enabled callsite.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn debug(&self, producer: MessageProducer<'_>) {
        tracing::debug!(target: TARGET, "{}", producer());
    }

    fn info(&self, producer: MessageProducer<'_>) {
        tracing::info!(target: TARGET, "{}", producer());
    }

    fn error(&self, producer: MessageProducer<'_>) -> LogError {
        let message = producer();
        tracing::error!(target: TARGET, "{}", message);
        LogError::new(message)
    }

    fn name(&self) -> &'static str {
        "tracing"
    }
}
