//! In-memory sink that records what the dispatcher hands it.

use std::sync::{Mutex, PoisonError};

use super::{Level, LogSink, MessageProducer};
use crate::error::LogError;

/// One call received by a [`CaptureSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRecord {
    pub level: Level,
    /// The producer's output, or `None` when the sink discarded the call.
    pub message: Option<String>,
}

/// Sink that stores every call in memory.
///
/// By default it invokes the producer and keeps the result. A discarding
/// sink records only that a call arrived, which lets tests observe that no
/// message was built.
#[derive(Debug, Default)]
pub struct CaptureSink {
    discard: bool,
    records: Mutex<Vec<CapturedRecord>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that never invokes the producer.
    pub fn discarding() -> Self {
        Self {
            discard: true,
            records: Mutex::new(Vec::new()),
        }
    }

    /// Everything captured so far, oldest first.
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.lock().clone()
    }

    /// Captured messages at `level`, oldest first.
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|r| r.level == level)
            .filter_map(|r| r.message.clone())
            .collect()
    }

    /// The most recent captured message, at any level.
    pub fn last_message(&self) -> Option<String> {
        self.lock().iter().rev().find_map(|r| r.message.clone())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<CapturedRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn capture(&self, level: Level, producer: MessageProducer<'_>) -> Option<String> {
        let message = (!self.discard).then(producer);
        self.lock().push(CapturedRecord {
            level,
            message: message.clone(),
        });
        message
    }
}

impl LogSink for CaptureSink {
    fn debug(&self, producer: MessageProducer<'_>) {
        self.capture(Level::Debug, producer);
    }

    fn info(&self, producer: MessageProducer<'_>) {
        self.capture(Level::Info, producer);
    }

    fn error(&self, producer: MessageProducer<'_>) -> LogError {
        LogError::new(self.capture(Level::Error, producer).unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "capture"
    }
}
