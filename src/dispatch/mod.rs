//! Level dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! debugc / infoc / errorc, debugf! / infof! / errorf!
//!     → api.rs (capture call site, resolve current dispatcher)
//!     → registry.rs (arc-swap load of the installed Dispatcher)
//!     → dispatcher.rs (wrap envelope building in a producer closure)
//!     → LogSink (invokes the producer only for enabled levels)
//! ```
//!
//! # Design Decisions
//! - Nothing is formatted or serialized before the sink asks for it
//! - The installed dispatcher is swapped atomically, never mutated
//! - A `Dispatcher` can be injected directly, bypassing the registry

pub mod api;
pub mod dispatcher;
mod macros;
pub mod registry;

pub use api::{debugc, debugf, errorc, errorf, infoc, infof};
pub use dispatcher::Dispatcher;
pub use registry::{current, install, override_sink, OverrideGuard, Registry};
