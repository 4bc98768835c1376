//! State threaded through one schema comparison.

use serde::{Deserialize, Serialize};

use super::layers::render;
use super::registry::ComparatorRegistry;
use super::Diagnostic;
use crate::errors::{Result, VauntError};
use crate::schema::SchemaNode;

/// Knobs that change how schema trees are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareOptions {
    /// Treat "consumer enumerates, provider does not" as incompatible.
    pub strict_enums: bool,
    /// Property nesting past which the comparison aborts. Unlimited when unset.
    pub max_depth: Option<usize>,
}

/// Accumulates diagnostics while walking a consumer/provider schema pair.
///
/// Comparators report into the context instead of returning early, so one
/// pass collects every mismatch in the tree.
pub struct Comparison<'r> {
    registry: &'r ComparatorRegistry,
    options: CompareOptions,
    path: Vec<String>,
    diagnostics: Vec<Diagnostic>,
}

impl<'r> Comparison<'r> {
    pub(super) fn new(registry: &'r ComparatorRegistry, options: CompareOptions) -> Self {
        Self {
            registry,
            options,
            path: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Returns the options of this comparison.
    #[must_use]
    pub fn options(&self) -> CompareOptions {
        self.options
    }

    /// Renders the current property path, `$` at the root.
    #[must_use]
    pub fn path(&self) -> String {
        if self.path.is_empty() {
            "$".to_string()
        } else {
            format!("$.{}", self.path.join("."))
        }
    }

    /// Diagnostics collected so far.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Compares two nodes at the current path.
    ///
    /// Nodes of different kinds produce exactly one kind-mismatch diagnostic
    /// and nothing else; same-kind nodes go to the registered comparator.
    pub fn dispatch(&mut self, consumer: &SchemaNode, provider: &SchemaNode) -> Result<()> {
        let registry = self.registry;
        match (consumer, provider) {
            (SchemaNode::Boolean(c), SchemaNode::Boolean(p)) => registry.boolean.compare(c, p, self),
            (SchemaNode::Integer(c), SchemaNode::Integer(p)) => registry.integer.compare(c, p, self),
            (SchemaNode::Number(c), SchemaNode::Number(p)) => registry.number.compare(c, p, self),
            (SchemaNode::String(c), SchemaNode::String(p)) => registry.string.compare(c, p, self),
            (SchemaNode::Array(c), SchemaNode::Array(p)) => registry.array.compare(c, p, self),
            (SchemaNode::Object(c), SchemaNode::Object(p)) => registry.object.compare(c, p, self),
            (SchemaNode::Any(c), SchemaNode::Any(p)) => registry.any.compare(c, p, self),
            (SchemaNode::Null(c), SchemaNode::Null(p)) => registry.null.compare(c, p, self),
            _ => {
                self.report(Diagnostic::SchemaKindMismatch {
                    path: self.path(),
                    consumer: consumer.label(),
                    provider: provider.label(),
                });
                Ok(())
            }
        }
    }

    /// Compares two property nodes one level below the current path.
    pub fn descend(
        &mut self,
        property: &str,
        consumer: &SchemaNode,
        provider: &SchemaNode,
    ) -> Result<()> {
        self.path.push(property.to_string());
        if let Some(limit) = self.options.max_depth {
            if self.path.len() > limit {
                let path = self.path();
                self.path.pop();
                return Err(VauntError::DepthLimitExceeded { limit, path });
            }
        }
        let result = self.dispatch(consumer, provider);
        self.path.pop();
        result
    }

    /// Records a diagnostic.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Records a field mismatch at the current path.
    pub fn field_mismatch(
        &mut self,
        schema_id: Option<&str>,
        field: &str,
        consumer: String,
        provider: String,
    ) {
        self.report(Diagnostic::FieldMismatch {
            path: self.path(),
            schema_id: schema_id.map(str::to_string),
            field: field.to_string(),
            consumer,
            provider,
        });
    }

    /// Checks a scalar field: an unset consumer value accepts anything,
    /// a set one must equal the provider's.
    pub fn check<T>(
        &mut self,
        schema_id: Option<&str>,
        field: &str,
        consumer: Option<&T>,
        provider: Option<&T>,
    ) where
        T: PartialEq + Serialize + ?Sized,
    {
        if consumer.is_some() && consumer != provider {
            self.field_mismatch(schema_id, field, render(consumer), render(provider));
        }
    }

    /// Consumes the context and returns the collected diagnostics.
    #[must_use]
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl std::fmt::Debug for Comparison<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Comparison")
            .field("options", &self.options)
            .field("path", &self.path())
            .field("diagnostics", &self.diagnostics.len())
            .finish_non_exhaustive()
    }
}
