//! Mismatch diagnostics produced by contract validation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable diagnostic codes.
pub mod codes {
    /// No provider contract is published on the expected endpoint.
    pub const MISSING_ENDPOINT: &str = "MISSING_ENDPOINT";
    /// Consumer and provider nodes are of different kinds.
    pub const SCHEMA_KIND_MISMATCH: &str = "SCHEMA_KIND_MISMATCH";
    /// A constraint field differs.
    pub const FIELD_MISMATCH: &str = "FIELD_MISMATCH";
    /// The provider lacks properties the consumer reads.
    pub const PROPERTY_MISSING: &str = "PROPERTY_MISSING";
    /// No candidate carries the expected schema id.
    pub const MISSING_SCHEMA_ID: &str = "MISSING_SCHEMA_ID";
    /// Several candidates carry the expected schema id.
    pub const DUPLICATE_MATCH: &str = "DUPLICATE_MATCH";
}

/// One reason an expectation is not satisfied.
///
/// Every variant keeps enough detail to diagnose the mismatch by hand; the
/// [`Display`](fmt::Display) rendering is what ends up in
/// [`ValidationResult::errors`](crate::core::ValidationResult::errors).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Diagnostic {
    /// No provider contract is published on the expected endpoint.
    MissingEndpoint {
        /// Rendered `<type> <name>`.
        endpoint: String,
    },
    /// Consumer and provider nodes are of different kinds.
    SchemaKindMismatch {
        /// Property path of the nodes.
        path: String,
        /// Consumer `<id,kind>` label.
        consumer: String,
        /// Provider `<id,kind>` label.
        provider: String,
    },
    /// A constraint field differs.
    FieldMismatch {
        /// Property path of the node.
        path: String,
        /// Consumer node id.
        schema_id: Option<String>,
        /// Field name as it appears in JSON-Schema.
        field: String,
        /// Rendered consumer value.
        consumer: String,
        /// Rendered provider value.
        provider: String,
    },
    /// The provider lacks properties the consumer reads.
    PropertyMissing {
        /// Property path of the object node.
        path: String,
        /// Consumer node id.
        schema_id: Option<String>,
        /// Names the consumer declares but the provider does not.
        missing: Vec<String>,
        /// Names the provider declares.
        offered: Vec<String>,
    },
    /// No endpoint candidate carries the expected root schema id.
    MissingSchemaId {
        /// Rendered `<type> <name>`.
        endpoint: String,
        /// Expected id.
        schema_id: Option<String>,
    },
    /// Several endpoint candidates carry the expected root schema id.
    DuplicateMatch {
        /// Rendered `<type> <name>`.
        endpoint: String,
        /// Expected id.
        schema_id: Option<String>,
        /// Number of matching provider contracts.
        count: usize,
    },
}

impl Diagnostic {
    /// Returns the stable code of this diagnostic.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingEndpoint { .. } => codes::MISSING_ENDPOINT,
            Self::SchemaKindMismatch { .. } => codes::SCHEMA_KIND_MISMATCH,
            Self::FieldMismatch { .. } => codes::FIELD_MISMATCH,
            Self::PropertyMissing { .. } => codes::PROPERTY_MISSING,
            Self::MissingSchemaId { .. } => codes::MISSING_SCHEMA_ID,
            Self::DuplicateMatch { .. } => codes::DUPLICATE_MATCH,
        }
    }

    /// Returns the mismatching field name for field diagnostics.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::FieldMismatch { field, .. } => Some(field.as_str()),
            Self::PropertyMissing { .. } => Some("properties"),
            _ => None,
        }
    }

    /// Returns the property path for schema diagnostics.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::SchemaKindMismatch { path, .. }
            | Self::FieldMismatch { path, .. }
            | Self::PropertyMissing { path, .. } => Some(path.as_str()),
            _ => None,
        }
    }
}

fn id_or_dash(id: Option<&String>) -> &str {
    id.map_or("-", String::as_str)
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEndpoint { endpoint } => write!(f, "missing endpoint: {endpoint}"),
            Self::SchemaKindMismatch {
                path,
                consumer,
                provider,
            } => write!(
                f,
                "schema kind mismatch: consumer={consumer}, provider={provider} (at {path})"
            ),
            Self::FieldMismatch {
                path,
                schema_id,
                field,
                consumer,
                provider,
            } => write!(
                f,
                "schema {} has mismatching {field}: consumer={consumer}, provider={provider} (at {path})",
                id_or_dash(schema_id.as_ref())
            ),
            Self::PropertyMissing {
                path,
                schema_id,
                missing,
                offered,
            } => write!(
                f,
                "schema {} is missing properties [{}] expected by consumer, provider offers [{}] (at {path})",
                id_or_dash(schema_id.as_ref()),
                missing.join(", "),
                offered.join(", ")
            ),
            Self::MissingSchemaId { endpoint, schema_id } => write!(
                f,
                "missing message with schema id {} at {endpoint}",
                id_or_dash(schema_id.as_ref())
            ),
            Self::DuplicateMatch {
                endpoint,
                schema_id,
                count,
            } => write!(
                f,
                "duplicate match: {count} provider contracts with schema id {} at {endpoint}",
                id_or_dash(schema_id.as_ref())
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_endpoint_display() {
        let d = Diagnostic::MissingEndpoint {
            endpoint: "QUEUE orders".to_string(),
        };
        assert_eq!(d.to_string(), "missing endpoint: QUEUE orders");
        assert_eq!(d.code(), codes::MISSING_ENDPOINT);
        assert_eq!(d.field(), None);
    }

    #[test]
    fn test_kind_mismatch_display() {
        let d = Diagnostic::SchemaKindMismatch {
            path: "$.amount".to_string(),
            consumer: "<a,integer>".to_string(),
            provider: "<b,string>".to_string(),
        };
        assert_eq!(
            d.to_string(),
            "schema kind mismatch: consumer=<a,integer>, provider=<b,string> (at $.amount)"
        );
        assert_eq!(d.path(), Some("$.amount"));
    }

    #[test]
    fn test_field_mismatch_display() {
        let d = Diagnostic::FieldMismatch {
            path: "$".to_string(),
            schema_id: None,
            field: "pattern".to_string(),
            consumer: "\"^a$\"".to_string(),
            provider: "null".to_string(),
        };
        assert_eq!(
            d.to_string(),
            "schema - has mismatching pattern: consumer=\"^a$\", provider=null (at $)"
        );
        assert_eq!(d.field(), Some("pattern"));
    }

    #[test]
    fn test_property_missing_display() {
        let d = Diagnostic::PropertyMissing {
            path: "$".to_string(),
            schema_id: Some("Order".to_string()),
            missing: vec!["ts".to_string()],
            offered: vec!["id".to_string()],
        };
        assert_eq!(
            d.to_string(),
            "schema Order is missing properties [ts] expected by consumer, provider offers [id] (at $)"
        );
        assert_eq!(d.field(), Some("properties"));
    }

    #[test]
    fn test_candidate_policy_displays() {
        let missing = Diagnostic::MissingSchemaId {
            endpoint: "TOPIC t".to_string(),
            schema_id: Some("Evt".to_string()),
        };
        assert_eq!(missing.to_string(), "missing message with schema id Evt at TOPIC t");

        let duplicate = Diagnostic::DuplicateMatch {
            endpoint: "TOPIC t".to_string(),
            schema_id: Some("Evt".to_string()),
            count: 2,
        };
        assert_eq!(
            duplicate.to_string(),
            "duplicate match: 2 provider contracts with schema id Evt at TOPIC t"
        );
    }

    #[test]
    fn test_serialized_with_code_tag() {
        let d = Diagnostic::MissingEndpoint {
            endpoint: "QUEUE q".to_string(),
        };
        let value = serde_json::to_value(&d).unwrap();
        assert_eq!(value["code"], serde_json::json!("MISSING_ENDPOINT"));
    }
}
