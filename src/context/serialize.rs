//! Context → string map conversion.

use std::collections::BTreeMap;

use super::keys::ContextKey;
use super::scope::Context;

/// Collect every well-known key set on `ctx` into an ordered map.
///
/// Unset keys are omitted. With nothing set the map is empty, so it encodes
/// as `{}` rather than `null`.
pub fn serialize_context(ctx: &Context) -> BTreeMap<String, String> {
    ContextKey::ALL
        .into_iter()
        .filter_map(|key| {
            ctx.value(key)
                .map(|value| (key.as_str().to_owned(), value.to_owned()))
        })
        .collect()
}
