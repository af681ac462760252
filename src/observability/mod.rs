//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! LoggerConfig
//!     → logging.rs (EnvFilter + fmt layer, pretty or JSON)
//!     → global tracing subscriber
//!
//! Consumers:
//!     → TracingSink events (target "ctxlog")
//!     → the crate's own diagnostics (reloads, encoder failures)
//! ```
//!
//! # Design Decisions
//! - RUST_LOG, when set, wins over the configured level
//! - Installation is fallible instead of panicking when a subscriber exists

pub mod logging;

pub use logging::{build_filter, init_logging};
