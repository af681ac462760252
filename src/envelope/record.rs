//! The serialized log record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::context::{serialize_context, Context};

/// One log call's worth of data, in its wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LogRecord {
    /// Serialized well-known context keys; empty when none are set.
    #[serde(default)]
    pub context: BTreeMap<String, String>,

    /// Call site that produced the record, ending with its source path.
    pub logger: String,

    /// Final, fully formatted message text.
    pub message: String,
}

impl LogRecord {
    /// Snapshot `ctx` and combine it with the logger and message.
    pub fn new(ctx: &Context, logger: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            context: serialize_context(ctx),
            logger: logger.into(),
            message: message.into(),
        }
    }
}
