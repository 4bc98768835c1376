//! Standard per-kind comparators.

use super::layers::{
    compare_container, compare_simple, compare_value, render, render_node, render_node_map,
};
use super::{Comparator, Comparison, Diagnostic};
use crate::errors::Result;
use crate::schema::{
    ArraySchema, BooleanSchema, NumberSchema, ObjectSchema, SimpleSchema, StringSchema,
};

/// Compares `boolean` nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanComparator;

impl Comparator<BooleanSchema> for BooleanComparator {
    fn compare(
        &self,
        consumer: &BooleanSchema,
        provider: &BooleanSchema,
        cx: &mut Comparison<'_>,
    ) -> Result<()> {
        compare_value(&consumer.value, &provider.value, cx);
        Ok(())
    }
}

/// Compares `integer` and `number` nodes.
///
/// Bounds must match exactly when the consumer sets them; there is no
/// range-overlap reasoning.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericComparator;

impl Comparator<NumberSchema> for NumericComparator {
    fn compare(
        &self,
        consumer: &NumberSchema,
        provider: &NumberSchema,
        cx: &mut Comparison<'_>,
    ) -> Result<()> {
        compare_value(&consumer.value, &provider.value, cx);
        let id = consumer.value.simple.base.id.as_deref();

        cx.check(
            id,
            "exclusiveMaximum",
            consumer.exclusive_maximum.as_ref(),
            provider.exclusive_maximum.as_ref(),
        );
        cx.check(
            id,
            "exclusiveMinimum",
            consumer.exclusive_minimum.as_ref(),
            provider.exclusive_minimum.as_ref(),
        );
        cx.check(id, "maximum", consumer.maximum.as_ref(), provider.maximum.as_ref());
        cx.check(id, "minimum", consumer.minimum.as_ref(), provider.minimum.as_ref());
        cx.check(
            id,
            "multipleOf",
            consumer.multiple_of.as_ref(),
            provider.multiple_of.as_ref(),
        );
        Ok(())
    }
}

/// Compares `string` nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringComparator;

impl Comparator<StringSchema> for StringComparator {
    fn compare(
        &self,
        consumer: &StringSchema,
        provider: &StringSchema,
        cx: &mut Comparison<'_>,
    ) -> Result<()> {
        compare_value(&consumer.value, &provider.value, cx);
        let id = consumer.value.simple.base.id.as_deref();

        cx.check(id, "minLength", consumer.min_length.as_ref(), provider.min_length.as_ref());
        cx.check(id, "maxLength", consumer.max_length.as_ref(), provider.max_length.as_ref());
        cx.check(id, "pattern", consumer.pattern.as_ref(), provider.pattern.as_ref());
        Ok(())
    }
}

/// Compares `array` nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayComparator;

impl Comparator<ArraySchema> for ArrayComparator {
    fn compare(
        &self,
        consumer: &ArraySchema,
        provider: &ArraySchema,
        cx: &mut Comparison<'_>,
    ) -> Result<()> {
        compare_container(&consumer.container, &provider.container, cx);
        let id = consumer.container.simple.base.id.as_deref();

        cx.check(
            id,
            "additionalItems",
            consumer.additional_items.as_ref(),
            provider.additional_items.as_ref(),
        );

        let (c_items, p_items) = (consumer.items.as_deref(), provider.items.as_deref());
        if c_items.is_some() && c_items != p_items {
            cx.field_mismatch(id, "items", render_node(c_items), render_node(p_items));
        }

        cx.check(id, "maxItems", consumer.max_items.as_ref(), provider.max_items.as_ref());
        cx.check(id, "minItems", consumer.min_items.as_ref(), provider.min_items.as_ref());
        cx.check(
            id,
            "uniqueItems",
            consumer.unique_items.as_ref(),
            provider.unique_items.as_ref(),
        );
        Ok(())
    }
}

/// Compares `object` nodes, recursing into shared properties.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectComparator;

impl Comparator<ObjectSchema> for ObjectComparator {
    fn compare(
        &self,
        consumer: &ObjectSchema,
        provider: &ObjectSchema,
        cx: &mut Comparison<'_>,
    ) -> Result<()> {
        compare_container(&consumer.container, &provider.container, cx);
        let id = consumer.container.simple.base.id.as_deref();

        cx.check(
            id,
            "additionalProperties",
            consumer.additional_properties.as_ref(),
            provider.additional_properties.as_ref(),
        );
        if consumer.dependencies.is_some() && consumer.dependencies != provider.dependencies {
            cx.field_mismatch(
                id,
                "dependencies",
                render(consumer.dependencies.as_ref()),
                render(provider.dependencies.as_ref()),
            );
        }
        if consumer.pattern_properties.is_some()
            && consumer.pattern_properties != provider.pattern_properties
        {
            cx.field_mismatch(
                id,
                "patternProperties",
                render_node_map(consumer.pattern_properties.as_ref()),
                render_node_map(provider.pattern_properties.as_ref()),
            );
        }

        let missing: Vec<String> = consumer
            .properties
            .keys()
            .filter(|name| !provider.properties.contains_key(*name))
            .cloned()
            .collect();
        if !missing.is_empty() {
            cx.report(Diagnostic::PropertyMissing {
                path: cx.path(),
                schema_id: id.map(str::to_string),
                missing,
                offered: provider.properties.keys().cloned().collect(),
            });
            return Ok(());
        }

        for (name, consumer_property) in &consumer.properties {
            if let Some(provider_property) = provider.properties.get(name) {
                cx.descend(name, consumer_property, provider_property)?;
            }
        }
        Ok(())
    }
}

/// Compares `any` and `null` nodes on their simple-type fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleComparator;

impl Comparator<SimpleSchema> for SimpleComparator {
    fn compare(
        &self,
        consumer: &SimpleSchema,
        provider: &SimpleSchema,
        cx: &mut Comparison<'_>,
    ) -> Result<()> {
        compare_simple(&consumer.simple, &provider.simple, cx);
        Ok(())
    }
}
