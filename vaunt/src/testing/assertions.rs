//! Test assertions for schema comparisons and validation results.

use crate::compare::{compare, Diagnostic};
use crate::core::{Outcome, ValidationResult};
use crate::schema::SchemaNode;

fn diagnostics(consumer: &SchemaNode, provider: &SchemaNode) -> Vec<Diagnostic> {
    match compare(consumer, provider) {
        Ok(diagnostics) => diagnostics,
        Err(err) => panic!("Comparison aborted: {err}"),
    }
}

/// Asserts that `provider` satisfies `consumer`.
pub fn assert_compatible(consumer: &SchemaNode, provider: &SchemaNode) {
    let found = diagnostics(consumer, provider);
    assert!(
        found.is_empty(),
        "Expected compatible schemas, got diagnostics: {:#?}",
        found.iter().map(ToString::to_string).collect::<Vec<_>>()
    );
}

/// Asserts that comparison fails and that one diagnostic names `field`.
///
/// `field` is a JSON-Schema field name (`pattern`, `enums`, `properties`, ...).
pub fn assert_incompatible_on(consumer: &SchemaNode, provider: &SchemaNode, field: &str) {
    let found = diagnostics(consumer, provider);
    assert!(
        found.iter().any(|d| d.field() == Some(field)),
        "Expected a mismatch on '{}', got: {:?}",
        field,
        found.iter().map(ToString::to_string).collect::<Vec<_>>()
    );
}

/// Asserts that comparison fails with a kind mismatch and nothing else.
pub fn assert_kind_mismatch(consumer: &SchemaNode, provider: &SchemaNode) {
    let found = diagnostics(consumer, provider);
    assert!(
        matches!(found.as_slice(), [Diagnostic::SchemaKindMismatch { .. }]),
        "Expected a single kind mismatch, got: {:?}",
        found
    );
}

/// Asserts that the result is `OK`.
pub fn assert_result_ok(result: &ValidationResult) {
    assert_eq!(
        result.outcome(),
        Outcome::Ok,
        "Expected OK for '{}', got errors: {:?}",
        result.subject(),
        result.errors()
    );
}

/// Asserts that the result is `FAILED` with an error containing `needle`.
pub fn assert_result_failed(result: &ValidationResult, needle: &str) {
    assert_eq!(
        result.outcome(),
        Outcome::Failed,
        "Expected FAILED for '{}'",
        result.subject()
    );
    assert!(
        result.errors().iter().any(|e| e.contains(needle)),
        "Expected an error containing '{}', got: {:?}",
        needle,
        result.errors()
    );
}

/// Asserts that every result is `OK`.
pub fn assert_all_ok(results: &[ValidationResult]) {
    let failed: Vec<_> = results.iter().filter(|r| !r.is_ok()).collect();
    assert!(
        failed.is_empty(),
        "Expected all results OK, failed: {:#?}",
        failed.iter().map(ToString::to_string).collect::<Vec<_>>()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_compatible_passes() {
        assert_compatible(&SchemaNode::string(), &SchemaNode::string());
    }

    #[test]
    #[should_panic(expected = "Expected compatible schemas")]
    fn test_assert_compatible_panics() {
        assert_compatible(&SchemaNode::string(), &SchemaNode::integer());
    }

    #[test]
    fn test_assert_incompatible_on() {
        let consumer = SchemaNode::string().with_required(true);
        assert_incompatible_on(&consumer, &SchemaNode::string(), "required");
    }

    #[test]
    fn test_assert_kind_mismatch() {
        assert_kind_mismatch(&SchemaNode::any(), &SchemaNode::null());
    }

    #[test]
    fn test_result_assertions() {
        assert_result_ok(&ValidationResult::success("QUEUE q"));
        assert_result_failed(
            &ValidationResult::failure("QUEUE q", "missing endpoint: QUEUE q"),
            "missing endpoint",
        );
        assert_all_ok(&[ValidationResult::success("a"), ValidationResult::success("b")]);
    }

    #[test]
    #[should_panic(expected = "Expected all results OK")]
    fn test_assert_all_ok_panics() {
        assert_all_ok(&[ValidationResult::failure("a", "boom")]);
    }
}
