//! Field comparison layers shared by the per-kind comparators.
//!
//! Each layer runs the layer below it first and then checks its own fields,
//! so a concrete comparator only adds the fields of its kind.

use serde::Serialize;
use std::collections::BTreeMap;

use super::Comparison;
use crate::schema::{ContainerTypeFields, JsonFields, SchemaNode, SimpleTypeFields, ValueTypeFields};

/// Renders a field value for a diagnostic.
pub(crate) fn render<T: Serialize + ?Sized>(value: Option<&T>) -> String {
    match value {
        None => "null".to_string(),
        Some(v) => serde_json::to_string(v).unwrap_or_else(|_| "<unrenderable>".to_string()),
    }
}

/// Renders a nested schema as its `<id,kind>` label.
pub(crate) fn render_node(node: Option<&SchemaNode>) -> String {
    node.map_or_else(|| "null".to_string(), SchemaNode::label)
}

pub(crate) fn render_nodes(nodes: Option<&[SchemaNode]>) -> String {
    nodes.map_or_else(
        || "null".to_string(),
        |nodes| {
            let labels: Vec<_> = nodes.iter().map(SchemaNode::label).collect();
            format!("[{}]", labels.join(", "))
        },
    )
}

pub(crate) fn render_node_map(nodes: Option<&BTreeMap<String, SchemaNode>>) -> String {
    nodes.map_or_else(
        || "null".to_string(),
        |nodes| {
            let entries: Vec<_> = nodes
                .iter()
                .map(|(name, node)| format!("{name}={}", node.label()))
                .collect();
            format!("{{{}}}", entries.join(", "))
        },
    )
}

/// Enumeration subsumption.
///
/// | consumer | provider | verdict |
/// |---|---|---|
/// | empty | empty | compatible |
/// | empty | non-empty | incompatible |
/// | non-empty | empty | compatible unless `strict` |
/// | non-empty | non-empty | provider must contain every consumer value |
pub(crate) fn enumeration_compatible<'a, T, C, P>(consumer: C, provider: P, strict: bool) -> bool
where
    T: PartialEq + 'a,
    C: IntoIterator<Item = &'a T>,
    P: IntoIterator<Item = &'a T>,
{
    let consumer: Vec<&T> = consumer.into_iter().collect();
    let provider: Vec<&T> = provider.into_iter().collect();
    match (consumer.is_empty(), provider.is_empty()) {
        (true, true) => true,
        (true, false) => false,
        (false, true) => !strict,
        (false, false) => consumer.iter().all(|value| provider.contains(value)),
    }
}

/// Common fields present on every node.
pub(crate) fn compare_json(consumer: &JsonFields, provider: &JsonFields, cx: &mut Comparison<'_>) {
    let id = consumer.id.as_deref();

    cx.check(id, "$ref", consumer.reference.as_ref(), provider.reference.as_ref());
    cx.check(
        id,
        "$schema",
        consumer.schema_version.as_ref(),
        provider.schema_version.as_ref(),
    );
    cx.check(id, "disallow", consumer.disallow.as_deref(), provider.disallow.as_deref());
    cx.check(id, "extends", consumer.extends.as_deref(), provider.extends.as_deref());

    // A provider may require more than the consumer asks for, never less.
    if consumer.required == Some(true) && provider.required != Some(true) {
        cx.field_mismatch(
            id,
            "required",
            render(consumer.required.as_ref()),
            render(provider.required.as_ref()),
        );
    }

    cx.check(id, "readonly", consumer.readonly.as_ref(), provider.readonly.as_ref());
    cx.check(
        id,
        "description",
        consumer.description.as_ref(),
        provider.description.as_ref(),
    );
}

/// Fields of every concrete kind.
pub(crate) fn compare_simple(
    consumer: &SimpleTypeFields,
    provider: &SimpleTypeFields,
    cx: &mut Comparison<'_>,
) {
    compare_json(&consumer.base, &provider.base, cx);
    let id = consumer.base.id.as_deref();

    cx.check(id, "default", consumer.default.as_ref(), provider.default.as_ref());
    cx.check(id, "links", consumer.links.as_deref(), provider.links.as_deref());
    cx.check(id, "pathStart", consumer.path_start.as_ref(), provider.path_start.as_ref());
    cx.check(id, "title", consumer.title.as_ref(), provider.title.as_ref());
}

/// Fields of boolean, integer, number and string nodes.
pub(crate) fn compare_value(
    consumer: &ValueTypeFields,
    provider: &ValueTypeFields,
    cx: &mut Comparison<'_>,
) {
    compare_simple(&consumer.simple, &provider.simple, cx);
    let id = consumer.simple.base.id.as_deref();

    if !enumeration_compatible(
        consumer.enums.iter().flatten(),
        provider.enums.iter().flatten(),
        cx.options().strict_enums,
    ) {
        cx.field_mismatch(
            id,
            "enums",
            render(consumer.enums.as_ref()),
            render(provider.enums.as_ref()),
        );
    }

    cx.check(id, "format", consumer.format.as_ref(), provider.format.as_ref());
}

/// Fields of array and object nodes.
pub(crate) fn compare_container(
    consumer: &ContainerTypeFields,
    provider: &ContainerTypeFields,
    cx: &mut Comparison<'_>,
) {
    compare_simple(&consumer.simple, &provider.simple, cx);
    let id = consumer.simple.base.id.as_deref();
    let strict = cx.options().strict_enums;

    if !enumeration_compatible(
        consumer.enums.iter().flatten(),
        provider.enums.iter().flatten(),
        strict,
    ) {
        cx.field_mismatch(
            id,
            "enums",
            render(consumer.enums.as_ref()),
            render(provider.enums.as_ref()),
        );
    }

    if !enumeration_compatible(
        consumer.one_of.iter().flatten(),
        provider.one_of.iter().flatten(),
        strict,
    ) {
        cx.field_mismatch(
            id,
            "oneOf",
            render_nodes(consumer.one_of.as_deref()),
            render_nodes(provider.one_of.as_deref()),
        );
    }
}
