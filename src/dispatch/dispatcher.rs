//! Injectable dispatcher bound to one sink.

use std::fmt;
use std::panic::Location;
use std::sync::Arc;

use crate::config::{LoggerConfig, SinkKind};
use crate::context::Context;
use crate::envelope::serialize_log_message_from;
use crate::error::{ConfigError, LogError};
use crate::sink::{LogSink, StreamSink, TracingSink};

/// Routes log calls to a [`LogSink`], building envelopes lazily.
#[derive(Clone)]
pub struct Dispatcher {
    sink: Arc<dyn LogSink>,
}

impl Dispatcher {
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self { sink }
    }

    /// Build a dispatcher for the sink a configuration selects.
    pub fn from_config(config: &LoggerConfig) -> Result<Self, ConfigError> {
        let level = config.parsed_level()?;
        let sink: Arc<dyn LogSink> = match config.sink {
            SinkKind::Tracing => Arc::new(TracingSink),
            SinkKind::Stdio => Arc::new(StreamSink::stdio(level)),
        };
        Ok(Self::new(sink))
    }

    pub fn sink(&self) -> &Arc<dyn LogSink> {
        &self.sink
    }

    #[track_caller]
    pub fn debugc(&self, ctx: &Context, message: &str) {
        self.debug_at(Location::caller().file(), ctx, &|| message.to_owned());
    }

    #[track_caller]
    pub fn infoc(&self, ctx: &Context, message: &str) {
        self.info_at(Location::caller().file(), ctx, &|| message.to_owned());
    }

    #[track_caller]
    pub fn errorc(&self, ctx: &Context, message: &str) -> LogError {
        self.error_at(Location::caller().file(), ctx, &|| message.to_owned())
    }

    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.debug_at(Location::caller().file(), &Context::background(), &|| args.to_string());
    }

    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.info_at(Location::caller().file(), &Context::background(), &|| args.to_string());
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) -> LogError {
        self.error_at(Location::caller().file(), &Context::background(), &|| args.to_string())
    }

    /// Debug-level call with an explicit logger name and a lazy message.
    pub fn debug_at(&self, logger: &str, ctx: &Context, message: &dyn Fn() -> String) {
        self.sink
            .debug(&|| serialize_log_message_from(logger, ctx, &message()));
    }

    /// Info-level call with an explicit logger name and a lazy message.
    pub fn info_at(&self, logger: &str, ctx: &Context, message: &dyn Fn() -> String) {
        self.sink
            .info(&|| serialize_log_message_from(logger, ctx, &message()));
    }

    /// Error-level call with an explicit logger name and a lazy message.
    pub fn error_at(&self, logger: &str, ctx: &Context, message: &dyn Fn() -> String) -> LogError {
        self.sink
            .error(&|| serialize_log_message_from(logger, ctx, &message()))
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(Arc::new(TracingSink))
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("sink", &self.sink.name())
            .finish()
    }
}
