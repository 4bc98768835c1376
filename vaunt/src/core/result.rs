//! Validation outcome types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Verdict for one expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    /// A provider contract satisfies the expectation.
    Ok,
    /// No provider contract satisfies the expectation.
    Failed,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Failed => write!(f, "FAILED"),
        }
    }
}

/// Result of validating one expectation contract against a provider.
///
/// Built once by the validator and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    subject: String,
    outcome: Outcome,
    errors: Vec<String>,
}

impl ValidationResult {
    /// Creates a passing result.
    #[must_use]
    pub fn success(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            outcome: Outcome::Ok,
            errors: Vec::new(),
        }
    }

    /// Creates a failing result with a single error.
    #[must_use]
    pub fn failure(subject: impl Into<String>, error: impl Into<String>) -> Self {
        Self::failures(subject, vec![error.into()])
    }

    /// Creates a failing result with several errors.
    #[must_use]
    pub fn failures(subject: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            subject: subject.into(),
            outcome: Outcome::Failed,
            errors,
        }
    }

    /// Rendering of the expectation this result is about.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The verdict.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Human readable mismatch descriptions; empty on success.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Returns true if the expectation is satisfied.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.outcome == Outcome::Ok
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.outcome, self.subject)?;
        for error in &self.errors {
            write!(f, "\n  - {error}")?;
        }
        Ok(())
    }
}
