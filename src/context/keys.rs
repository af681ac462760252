//! Well-known context keys.

use std::fmt;

/// The closed set of keys a [`Context`](super::Context) can carry.
///
/// Callers cannot introduce keys of their own, so serialized contexts never
/// carry anything outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContextKey {
    UserId,
    RequestId,
}

impl ContextKey {
    /// Every known key, in serialization order.
    pub const ALL: [ContextKey; 2] = [ContextKey::RequestId, ContextKey::UserId];

    /// Name of the key as it appears in the emitted JSON.
    pub const fn as_str(self) -> &'static str {
        match self {
            ContextKey::UserId => "user-id",
            ContextKey::RequestId => "request-id",
        }
    }
}

impl fmt::Display for ContextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
