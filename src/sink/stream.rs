//! Sink writing JSON lines to byte streams.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use super::{Level, LogSink, MessageProducer};
use crate::error::LogError;

type SharedWriter = Mutex<Box<dyn Write + Send>>;

/// Writes one record per line, filtering by a minimum level.
///
/// Debug and info records go to `out`; error records go to `err`.
pub struct StreamSink {
    threshold: Level,
    out: SharedWriter,
    err: SharedWriter,
}

impl StreamSink {
    /// Create a sink over arbitrary writers.
    pub fn new(
        threshold: Level,
        out: impl Write + Send + 'static,
        err: impl Write + Send + 'static,
    ) -> Self {
        Self {
            threshold,
            out: Mutex::new(Box::new(out)),
            err: Mutex::new(Box::new(err)),
        }
    }

    /// Create a sink over the process's stdout and stderr.
    pub fn stdio(threshold: Level) -> Self {
        Self::new(threshold, io::stdout(), io::stderr())
    }

    /// Minimum level this sink lets through.
    pub fn threshold(&self) -> Level {
        self.threshold
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.threshold
    }

    fn write_line(writer: &SharedWriter, line: &str) {
        let mut writer = writer.lock().unwrap_or_else(PoisonError::into_inner);
        // Write failures are dropped; a logger has nowhere to report them.
        let _ = writeln!(writer, "{}", line).and_then(|_| writer.flush());
    }
}

impl LogSink for StreamSink {
    fn debug(&self, producer: MessageProducer<'_>) {
        if self.is_enabled(Level::Debug) {
            Self::write_line(&self.out, &producer());
        }
    }

    fn info(&self, producer: MessageProducer<'_>) {
        if self.is_enabled(Level::Info) {
            Self::write_line(&self.out, &producer());
        }
    }

    fn error(&self, producer: MessageProducer<'_>) -> LogError {
        let message = producer();
        if self.is_enabled(Level::Error) {
            Self::write_line(&self.err, &message);
        }
        LogError::new(message)
    }

    fn name(&self) -> &'static str {
        "stream"
    }
}

impl std::fmt::Debug for StreamSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamSink")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}
