//! Log envelope construction.
//!
//! # Data Flow
//! ```text
//! (Context, call site, message)
//!     → record.rs (LogRecord { Context, Logger, Message })
//!     → builder.rs (serde_json encoding, failures absorbed)
//!     → JSON string handed back to the sink's producer
//! ```
//!
//! # Design Decisions
//! - Field names and order are a wire contract: `Context`, `Logger`, `Message`
//! - `Logger` is the caller's source path, captured without stack walking
//! - Encoding never fails outward; logging must not break the caller

pub mod builder;
pub mod record;

pub use builder::{serialize_log_message, serialize_log_message_from};
pub use record::LogRecord;
