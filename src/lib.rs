//! Context-aware structured logging façade.
//!
//! Request-scoped values ride on an explicit [`Context`]; every log call
//! wraps them with the call site and message into a JSON envelope
//!
//! ```text
//! {"Context":{"request-id":"...","user-id":"..."},"Logger":"src/api.rs","Message":"..."}
//! ```
//!
//! and hands the sink a closure that builds it, so filtered-out levels cost
//! nothing beyond the call.
//!
//! ```
//! use ctxlog::{infoc, with_request_id, with_user_id, Context};
//!
//! let ctx = with_user_id(&Context::background(), "u-42");
//! let ctx = with_request_id(&ctx, "req-7");
//! infoc(&ctx, "order placed");
//! ctxlog::debugf!("cache miss for {}", "order:7");
//! ```

// Request-scoped data
pub mod context;
pub mod envelope;

// Dispatch and backends
pub mod dispatch;
pub mod sink;

// Cross-cutting concerns
pub mod config;
pub mod error;
pub mod observability;

pub use config::LoggerConfig;
pub use context::{
    request_id, serialize_context, user_id, with_new_request_id, with_request_id, with_user_id,
    Context, ContextKey,
};
pub use dispatch::{debugc, debugf, errorc, errorf, infoc, infof, Dispatcher, Registry};
pub use envelope::{serialize_log_message, LogRecord};
pub use error::{ConfigError, LogError};
pub use sink::{Level, LogSink};
