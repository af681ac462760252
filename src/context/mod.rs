//! Request-scoped context subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → accessors.rs (with_user_id / with_request_id derive a child Context)
//!     → Context passed explicitly down the call chain
//!     → serialize.rs (known keys → ordered map) at log time
//! ```
//!
//! # Design Decisions
//! - Contexts are immutable; attaching a value yields a new child
//! - Children see parent values, siblings never see each other
//! - Only the closed set of keys in keys.rs is ever serialized
//! - No thread-locals: the context travels as a parameter

pub mod accessors;
pub mod keys;
pub mod scope;
pub mod serialize;

pub use accessors::{request_id, user_id, with_new_request_id, with_request_id, with_user_id};
pub use keys::ContextKey;
pub use scope::Context;
pub use serialize::serialize_context;
