//! Comparator registry and schema dispatch.

use std::sync::LazyLock;

use super::kinds::{
    ArrayComparator, BooleanComparator, NumericComparator, ObjectComparator, SimpleComparator,
    StringComparator,
};
use super::{CompareOptions, Comparison, Diagnostic};
use crate::errors::Result;
use crate::schema::{
    ArraySchema, BooleanSchema, NumberSchema, ObjectSchema, SchemaNode, SimpleSchema,
    StringSchema,
};

/// Compares a consumer node against a provider node of the same kind.
///
/// Implementations report mismatches into the [`Comparison`]; an `Err` means
/// the comparison itself is broken and aborts the whole validation call.
pub trait Comparator<S>: Send + Sync {
    /// Compares `consumer` against `provider`.
    fn compare(&self, consumer: &S, provider: &S, cx: &mut Comparison<'_>) -> Result<()>;
}

impl<S, F> Comparator<S> for F
where
    F: Fn(&S, &S, &mut Comparison<'_>) -> Result<()> + Send + Sync,
{
    fn compare(&self, consumer: &S, provider: &S, cx: &mut Comparison<'_>) -> Result<()> {
        self(consumer, provider, cx)
    }
}

/// Exactly one comparator per schema kind.
///
/// Every kind has its own slot, so a registry can never be missing or hold
/// two comparators for a kind. Slots can be swapped to test alternate
/// comparison rules.
pub struct ComparatorRegistry {
    pub(super) boolean: Box<dyn Comparator<BooleanSchema>>,
    pub(super) integer: Box<dyn Comparator<NumberSchema>>,
    pub(super) number: Box<dyn Comparator<NumberSchema>>,
    pub(super) string: Box<dyn Comparator<StringSchema>>,
    pub(super) array: Box<dyn Comparator<ArraySchema>>,
    pub(super) object: Box<dyn Comparator<ObjectSchema>>,
    pub(super) any: Box<dyn Comparator<SimpleSchema>>,
    pub(super) null: Box<dyn Comparator<SimpleSchema>>,
}

impl ComparatorRegistry {
    /// Creates the registry with the standard compatibility rules.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            boolean: Box::new(BooleanComparator),
            integer: Box::new(NumericComparator),
            number: Box::new(NumericComparator),
            string: Box::new(StringComparator),
            array: Box::new(ArrayComparator),
            object: Box::new(ObjectComparator),
            any: Box::new(SimpleComparator),
            null: Box::new(SimpleComparator),
        }
    }

    /// Replaces the `boolean` comparator.
    #[must_use]
    pub fn with_boolean(mut self, comparator: impl Comparator<BooleanSchema> + 'static) -> Self {
        self.boolean = Box::new(comparator);
        self
    }

    /// Replaces the `integer` comparator.
    #[must_use]
    pub fn with_integer(mut self, comparator: impl Comparator<NumberSchema> + 'static) -> Self {
        self.integer = Box::new(comparator);
        self
    }

    /// Replaces the `number` comparator.
    #[must_use]
    pub fn with_number(mut self, comparator: impl Comparator<NumberSchema> + 'static) -> Self {
        self.number = Box::new(comparator);
        self
    }

    /// Replaces the `string` comparator.
    #[must_use]
    pub fn with_string(mut self, comparator: impl Comparator<StringSchema> + 'static) -> Self {
        self.string = Box::new(comparator);
        self
    }

    /// Replaces the `array` comparator.
    #[must_use]
    pub fn with_array(mut self, comparator: impl Comparator<ArraySchema> + 'static) -> Self {
        self.array = Box::new(comparator);
        self
    }

    /// Replaces the `object` comparator.
    #[must_use]
    pub fn with_object(mut self, comparator: impl Comparator<ObjectSchema> + 'static) -> Self {
        self.object = Box::new(comparator);
        self
    }

    /// Replaces the `any` comparator.
    #[must_use]
    pub fn with_any(mut self, comparator: impl Comparator<SimpleSchema> + 'static) -> Self {
        self.any = Box::new(comparator);
        self
    }

    /// Replaces the `null` comparator.
    #[must_use]
    pub fn with_null(mut self, comparator: impl Comparator<SimpleSchema> + 'static) -> Self {
        self.null = Box::new(comparator);
        self
    }

    /// Compares two schema trees; an empty result means compatible.
    pub fn compare(
        &self,
        consumer: &SchemaNode,
        provider: &SchemaNode,
        options: CompareOptions,
    ) -> Result<Vec<Diagnostic>> {
        let mut cx = Comparison::new(self, options);
        cx.dispatch(consumer, provider)?;
        Ok(cx.finish())
    }
}

impl Default for ComparatorRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for ComparatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComparatorRegistry").finish_non_exhaustive()
    }
}

/// Read-only standard registry behind [`compare`].
static STANDARD: LazyLock<ComparatorRegistry> = LazyLock::new(ComparatorRegistry::standard);

/// Compares two schema trees with the standard rules and default options.
pub fn compare(consumer: &SchemaNode, provider: &SchemaNode) -> Result<Vec<Diagnostic>> {
    STANDARD.compare(consumer, provider, CompareOptions::default())
}

/// Like [`compare`], rendering each diagnostic to its message.
pub fn compare_messages(consumer: &SchemaNode, provider: &SchemaNode) -> Result<Vec<String>> {
    Ok(compare(consumer, provider)?
        .iter()
        .map(ToString::to_string)
        .collect())
}
