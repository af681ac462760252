//! Typed accessors for the well-known context keys.

use std::sync::Arc;

use uuid::Uuid;

use super::keys::ContextKey;
use super::scope::Context;

impl Context {
    /// Derive a child context carrying the given user id.
    #[must_use]
    pub fn with_user_id(&self, user_id: impl Into<Arc<str>>) -> Self {
        self.with_value(ContextKey::UserId, user_id)
    }

    /// Derive a child context carrying the given request id.
    #[must_use]
    pub fn with_request_id(&self, request_id: impl Into<Arc<str>>) -> Self {
        self.with_value(ContextKey::RequestId, request_id)
    }

    /// Derive a child context carrying a freshly generated UUID v4 request id.
    #[must_use]
    pub fn with_new_request_id(&self) -> Self {
        self.with_request_id(Uuid::new_v4().to_string())
    }

    /// The user id, if one was attached.
    pub fn user_id(&self) -> Option<&str> {
        self.value(ContextKey::UserId)
    }

    /// The request id, if one was attached.
    pub fn request_id(&self) -> Option<&str> {
        self.value(ContextKey::RequestId)
    }
}

/// Return a copy of `ctx` carrying `user_id`.
#[must_use]
pub fn with_user_id(ctx: &Context, user_id: impl Into<Arc<str>>) -> Context {
    ctx.with_user_id(user_id)
}

/// Return a copy of `ctx` carrying `request_id`.
#[must_use]
pub fn with_request_id(ctx: &Context, request_id: impl Into<Arc<str>>) -> Context {
    ctx.with_request_id(request_id)
}

/// Return a copy of `ctx` carrying a new random request id.
#[must_use]
pub fn with_new_request_id(ctx: &Context) -> Context {
    ctx.with_new_request_id()
}

/// The user id carried by `ctx`, if any.
pub fn user_id(ctx: &Context) -> Option<&str> {
    ctx.user_id()
}

/// The request id carried by `ctx`, if any.
pub fn request_id(ctx: &Context) -> Option<&str> {
    ctx.request_id()
}
