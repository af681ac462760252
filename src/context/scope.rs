//! Immutable, chainable context carrier.

use std::fmt;
use std::sync::Arc;

use super::keys::ContextKey;

/// A single attached value, linked to the context it was derived from.
struct Entry {
    key: ContextKey,
    value: Arc<str>,
    parent: Option<Arc<Entry>>,
}

/// Request-scoped key/value carrier passed explicitly along a call chain.
///
/// A `Context` is never mutated. [`Context::with_value`] returns a child that
/// shares its parent's entries, so cloning and deriving are O(1) and a
/// context can be read from any number of threads at once.
#[derive(Clone, Default)]
pub struct Context {
    head: Option<Arc<Entry>>,
}

impl Context {
    /// The empty root context.
    pub const fn background() -> Self {
        Self { head: None }
    }

    /// Derive a child context carrying `value` under `key`.
    ///
    /// `self` is left untouched; the child shadows any value `self` already
    /// holds for the same key.
    #[must_use]
    pub fn with_value(&self, key: ContextKey, value: impl Into<Arc<str>>) -> Self {
        Self {
            head: Some(Arc::new(Entry {
                key,
                value: value.into(),
                parent: self.head.clone(),
            })),
        }
    }

    /// Look up the nearest value for `key` in this context's ancestry.
    pub fn value(&self, key: ContextKey) -> Option<&str> {
        self.entries()
            .find(|entry| entry.key == key)
            .map(|entry| &*entry.value)
    }

    /// True when no value has been attached anywhere in the ancestry.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn entries(&self) -> impl Iterator<Item = &Entry> {
        std::iter::successors(self.head.as_deref(), |entry| entry.parent.as_deref())
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for key in ContextKey::ALL {
            if let Some(value) = self.value(key) {
                map.entry(&key.as_str(), &value);
            }
        }
        map.finish()
    }
}

impl Drop for Context {
    // Unlink uniquely-owned entries iteratively; recursive Arc drops
    // overflow the stack on long chains.
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(entry) = next {
            match Arc::try_unwrap(entry) {
                Ok(mut owned) => next = owned.parent.take(),
                Err(_) => break,
            }
        }
    }
}
