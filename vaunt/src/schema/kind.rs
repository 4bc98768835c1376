//! Schema kind discriminant.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The JSON-Schema `type` of a [`SchemaNode`](super::SchemaNode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    /// `true` / `false`.
    Boolean,
    /// Whole numbers.
    Integer,
    /// Any JSON number.
    Number,
    /// Text.
    String,
    /// Ordered sequence of items.
    Array,
    /// Keyed properties.
    Object,
    /// Unconstrained value.
    Any,
    /// JSON `null`.
    Null,
}

impl SchemaKind {
    /// Returns the JSON-Schema type name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Any => "any",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
