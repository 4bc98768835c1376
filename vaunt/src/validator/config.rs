//! Validator configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::compare::CompareOptions;
use crate::errors::Result;

/// How an expectation is resolved when several provider contracts share
/// its endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CandidatePolicy {
    /// The first candidate, in publish order, with no diagnostics wins.
    #[default]
    FirstCompatible,
    /// Exactly one candidate must carry the expectation's root schema id.
    UniqueSchemaId,
}

impl fmt::Display for CandidatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstCompatible => write!(f, "first-compatible"),
            Self::UniqueSchemaId => write!(f, "unique-schema-id"),
        }
    }
}

/// Configuration for a [`ContractValidator`](super::ContractValidator).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Candidate disambiguation policy.
    #[serde(default)]
    pub candidate_policy: CandidatePolicy,
    /// Reject a constrained consumer enum against an unconstrained provider.
    #[serde(default)]
    pub strict_enums: bool,
    /// Optional cap on property nesting depth; schemas of any depth are
    /// compared when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

impl ValidatorConfig {
    /// Creates a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the candidate policy.
    #[must_use]
    pub fn with_candidate_policy(mut self, policy: CandidatePolicy) -> Self {
        self.candidate_policy = policy;
        self
    }

    /// Enables or disables strict enum comparison.
    #[must_use]
    pub fn with_strict_enums(mut self, strict: bool) -> Self {
        self.strict_enums = strict;
        self
    }

    /// Caps property nesting depth; deeper schemas abort the call.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Parses a configuration from JSON; missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Options handed to the comparator layer.
    #[must_use]
    pub fn compare_options(&self) -> CompareOptions {
        CompareOptions {
            strict_enums: self.strict_enums,
            max_depth: self.max_depth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::VauntError;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ValidatorConfig::default();
        assert_eq!(config.candidate_policy, CandidatePolicy::FirstCompatible);
        assert!(!config.strict_enums);
        assert_eq!(config.max_depth, None);
        assert_eq!(config.compare_options(), CompareOptions::default());
    }

    #[test]
    fn test_builder() {
        let config = ValidatorConfig::new()
            .with_candidate_policy(CandidatePolicy::UniqueSchemaId)
            .with_strict_enums(true)
            .with_max_depth(8);

        let options = config.compare_options();
        assert!(options.strict_enums);
        assert_eq!(options.max_depth, Some(8));
        assert_eq!(config.candidate_policy.to_string(), "unique-schema-id");
    }

    #[test]
    fn test_from_json_partial() {
        let config = ValidatorConfig::from_json_str(r#"{"candidate_policy": "unique-schema-id"}"#)
            .unwrap();
        assert_eq!(config.candidate_policy, CandidatePolicy::UniqueSchemaId);
        assert_eq!(config.max_depth, None);

        let empty = ValidatorConfig::from_json_str("{}").unwrap();
        assert_eq!(empty, ValidatorConfig::default());
    }

    #[test]
    fn test_from_json_invalid_policy() {
        let err = ValidatorConfig::from_json_str(r#"{"candidate_policy": "best"}"#).unwrap_err();
        assert!(matches!(err, VauntError::Serialization(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"strict_enums": true, "max_depth": 10}}"#).unwrap();

        let config = ValidatorConfig::from_file(file.path()).unwrap();
        assert!(config.strict_enums);
        assert_eq!(config.max_depth, Some(10));

        let missing = ValidatorConfig::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(missing, VauntError::Io(_)));
    }
}
