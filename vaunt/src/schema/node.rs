//! JSON-Schema-like constraint tree.
//!
//! Field groups mirror the layering of JSON-Schema types: every node has the
//! [`JsonFields`], every concrete kind adds [`SimpleTypeFields`], value kinds
//! add [`ValueTypeFields`] and containers add [`ContainerTypeFields`]. The
//! groups are flattened on the wire, so a node reads like ordinary
//! draft-03 JSON-Schema.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::SchemaKind;
use crate::errors::Result;

/// Fields shared by every schema node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JsonFields {
    /// Opaque node label used in diagnostics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// `$ref` URI.
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// `$schema` URI.
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
    /// Disallowed types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disallow: Option<Vec<String>>,
    /// Extended schema references.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<Vec<String>>,
    /// Whether a value must be present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Whether the value is read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readonly: Option<bool>,
    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Hyper-schema link attached to a node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkDescriptor {
    /// Link target.
    pub href: Option<String>,
    /// Link relation.
    pub rel: Option<String>,
    /// Schema of the link target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_schema: Option<Box<SchemaNode>>,
    /// HTTP method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Request encoding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enctype: Option<String>,
    /// Schema of the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Box<SchemaNode>>,
    /// Human readable title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Media type of the target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
}

/// Fields shared by every concrete schema kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimpleTypeFields {
    /// Common fields.
    #[serde(flatten)]
    pub base: JsonFields,
    /// Default value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    /// Hyper-schema links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<LinkDescriptor>>,
    /// Hyper-schema path start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_start: Option<String>,
    /// Human readable title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Fields of the primitive value kinds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValueTypeFields {
    /// Simple-type fields.
    #[serde(flatten)]
    pub simple: SimpleTypeFields,
    /// Enumerated allowed values; empty means unconstrained.
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enums: Option<BTreeSet<String>>,
    /// Format hint such as `date-time`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// Fields of the container kinds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContainerTypeFields {
    /// Simple-type fields.
    #[serde(flatten)]
    pub simple: SimpleTypeFields,
    /// Enumerated allowed values; empty means unconstrained.
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enums: Option<BTreeSet<String>>,
    /// Alternative schemas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<SchemaNode>>,
}

/// Schema of the `any` and `null` kinds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleSchema {
    /// Simple-type fields.
    #[serde(flatten)]
    pub simple: SimpleTypeFields,
}

/// Schema of the `boolean` kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BooleanSchema {
    /// Value-type fields.
    #[serde(flatten)]
    pub value: ValueTypeFields,
}

/// Schema of the `integer` and `number` kinds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumberSchema {
    /// Value-type fields.
    #[serde(flatten)]
    pub value: ValueTypeFields,
    /// Whether `maximum` is exclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<bool>,
    /// Whether `minimum` is exclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<bool>,
    /// Upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    /// Lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    /// Required divisor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<f64>,
}

/// Schema of the `string` kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StringSchema {
    /// Value-type fields.
    #[serde(flatten)]
    pub value: ValueTypeFields,
    /// Minimum length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    /// Maximum length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    /// Regular expression the value must match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl StringSchema {
    /// Creates an unconstrained string schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pattern.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Sets the enumerated values.
    #[must_use]
    pub fn with_enums<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.value.enums = Some(values.into_iter().map(Into::into).collect());
        self
    }
}

/// Schema of the `array` kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArraySchema {
    /// Container fields.
    #[serde(flatten)]
    pub container: ContainerTypeFields,
    /// Whether items beyond `items` are allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_items: Option<bool>,
    /// Item schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaNode>>,
    /// Maximum item count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,
    /// Minimum item count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,
    /// Whether items must be distinct.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_items: Option<bool>,
}

/// Schema of the `object` kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ObjectSchema {
    /// Container fields.
    #[serde(flatten)]
    pub container: ContainerTypeFields,
    /// Whether undeclared properties are allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<bool>,
    /// Property dependencies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<BTreeMap<String, Vec<String>>>,
    /// Schemas for properties matching a pattern.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_properties: Option<BTreeMap<String, SchemaNode>>,
    /// Declared properties.
    pub properties: BTreeMap<String, SchemaNode>,
}

impl ObjectSchema {
    /// Creates an object schema without properties.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, node: SchemaNode) -> Self {
        self.properties.insert(name.into(), node);
        self
    }
}

/// One node of a schema tree.
///
/// The variant is fixed at construction; comparison dispatches on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SchemaNode {
    /// `boolean`.
    Boolean(BooleanSchema),
    /// `integer`.
    Integer(NumberSchema),
    /// `number`.
    Number(NumberSchema),
    /// `string`.
    String(StringSchema),
    /// `array`.
    Array(ArraySchema),
    /// `object`.
    Object(ObjectSchema),
    /// `any`.
    Any(SimpleSchema),
    /// `null`.
    Null(SimpleSchema),
}

impl SchemaNode {
    /// Creates an unconstrained boolean node.
    #[must_use]
    pub fn boolean() -> Self {
        Self::Boolean(BooleanSchema::default())
    }

    /// Creates an unconstrained integer node.
    #[must_use]
    pub fn integer() -> Self {
        Self::Integer(NumberSchema::default())
    }

    /// Creates an unconstrained number node.
    #[must_use]
    pub fn number() -> Self {
        Self::Number(NumberSchema::default())
    }

    /// Creates an unconstrained string node.
    #[must_use]
    pub fn string() -> Self {
        Self::String(StringSchema::default())
    }

    /// Creates an array node with the given item schema.
    #[must_use]
    pub fn array_of(items: Self) -> Self {
        Self::Array(ArraySchema {
            items: Some(Box::new(items)),
            ..ArraySchema::default()
        })
    }

    /// Creates an object node without properties.
    #[must_use]
    pub fn object() -> Self {
        Self::Object(ObjectSchema::default())
    }

    /// Creates an `any` node.
    #[must_use]
    pub fn any() -> Self {
        Self::Any(SimpleSchema::default())
    }

    /// Creates a `null` node.
    #[must_use]
    pub fn null() -> Self {
        Self::Null(SimpleSchema::default())
    }

    /// Parses a node from a JSON-Schema document.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Returns the node kind.
    #[must_use]
    pub fn kind(&self) -> SchemaKind {
        match self {
            Self::Boolean(_) => SchemaKind::Boolean,
            Self::Integer(_) => SchemaKind::Integer,
            Self::Number(_) => SchemaKind::Number,
            Self::String(_) => SchemaKind::String,
            Self::Array(_) => SchemaKind::Array,
            Self::Object(_) => SchemaKind::Object,
            Self::Any(_) => SchemaKind::Any,
            Self::Null(_) => SchemaKind::Null,
        }
    }

    /// Returns the simple-type fields every kind carries.
    #[must_use]
    pub fn simple(&self) -> &SimpleTypeFields {
        match self {
            Self::Boolean(s) => &s.value.simple,
            Self::Integer(s) | Self::Number(s) => &s.value.simple,
            Self::String(s) => &s.value.simple,
            Self::Array(s) => &s.container.simple,
            Self::Object(s) => &s.container.simple,
            Self::Any(s) | Self::Null(s) => &s.simple,
        }
    }

    fn simple_mut(&mut self) -> &mut SimpleTypeFields {
        match self {
            Self::Boolean(s) => &mut s.value.simple,
            Self::Integer(s) | Self::Number(s) => &mut s.value.simple,
            Self::String(s) => &mut s.value.simple,
            Self::Array(s) => &mut s.container.simple,
            Self::Object(s) => &mut s.container.simple,
            Self::Any(s) | Self::Null(s) => &mut s.simple,
        }
    }

    /// Returns the common fields.
    #[must_use]
    pub fn base(&self) -> &JsonFields {
        &self.simple().base
    }

    /// Returns the node id, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.base().id.as_deref()
    }

    /// Returns true when the node is marked `required: true`.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.base().required == Some(true)
    }

    /// Short `<id,kind>` label used in diagnostics.
    #[must_use]
    pub fn label(&self) -> String {
        format!("<{},{}>", self.id().unwrap_or("-"), self.kind())
    }

    /// Sets the id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.simple_mut().base.id = Some(id.into());
        self
    }

    /// Sets the `required` flag.
    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.simple_mut().base.required = Some(required);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.simple_mut().base.description = Some(description.into());
        self
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.simple_mut().title = Some(title.into());
        self
    }
}

impl From<StringSchema> for SchemaNode {
    fn from(schema: StringSchema) -> Self {
        Self::String(schema)
    }
}

impl From<ArraySchema> for SchemaNode {
    fn from(schema: ArraySchema) -> Self {
        Self::Array(schema)
    }
}

impl From<ObjectSchema> for SchemaNode {
    fn from(schema: ObjectSchema) -> Self {
        Self::Object(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parse_string_node() {
        let node = SchemaNode::from_json(json!({
            "type": "string",
            "id": "urn:jsonschema:Code",
            "required": true,
            "pattern": "^[0-9]+$",
            "maxLength": 8,
            "enum": ["A", "B"]
        }))
        .unwrap();

        assert_eq!(node.kind(), SchemaKind::String);
        assert_eq!(node.id(), Some("urn:jsonschema:Code"));
        assert!(node.is_required());

        let SchemaNode::String(s) = node else {
            panic!("expected string node");
        };
        assert_eq!(s.pattern.as_deref(), Some("^[0-9]+$"));
        assert_eq!(s.max_length, Some(8));
        assert_eq!(s.value.enums.unwrap().len(), 2);
    }

    #[test]
    fn test_parse_nested_object() {
        let node = SchemaNode::from_json(json!({
            "type": "object",
            "id": "urn:jsonschema:Order",
            "$schema": "http://json-schema.org/draft-03/schema#",
            "properties": {
                "id": {"type": "integer", "minimum": 1},
                "lines": {"type": "array", "items": {"type": "string"}, "minItems": 1},
                "meta": {"type": "any"}
            },
            "dependencies": {"lines": ["id"]}
        }))
        .unwrap();

        let SchemaNode::Object(obj) = &node else {
            panic!("expected object node");
        };
        assert_eq!(obj.properties.len(), 3);
        assert_eq!(obj.properties["id"].kind(), SchemaKind::Integer);
        assert_eq!(obj.properties["meta"].kind(), SchemaKind::Any);
        assert_eq!(
            obj.container.simple.base.schema_version.as_deref(),
            Some("http://json-schema.org/draft-03/schema#")
        );
        let SchemaNode::Array(lines) = &obj.properties["lines"] else {
            panic!("expected array node");
        };
        assert_eq!(lines.min_items, Some(1));
        assert_eq!(lines.items.as_deref().map(SchemaNode::kind), Some(SchemaKind::String));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let node = SchemaNode::from_json(json!({
            "type": "boolean",
            "x-vendor": {"anything": 1}
        }))
        .unwrap();
        assert_eq!(node, SchemaNode::boolean());
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result = SchemaNode::from_json(json!({"type": "tuple"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_uses_schema_keys() {
        let node: SchemaNode = StringSchema::new().with_pattern("^x$").into();
        let node = node.with_id("code").with_required(true);
        let value = serde_json::to_value(&node).unwrap();

        assert_eq!(
            value,
            json!({"type": "string", "id": "code", "required": true, "pattern": "^x$"})
        );
    }

    #[test]
    fn test_serialize_round_trip_object() {
        let node: SchemaNode = ObjectSchema::new()
            .with_property("id", SchemaNode::integer().with_required(true))
            .with_property("tags", SchemaNode::array_of(SchemaNode::string()))
            .into();

        let text = serde_json::to_string(&node).unwrap();
        let parsed: SchemaNode = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, node);
    }

    #[test]
    fn test_label() {
        assert_eq!(SchemaNode::integer().with_id("n").label(), "<n,integer>");
        assert_eq!(SchemaNode::null().label(), "<-,null>");
    }

    #[test]
    fn test_builders_touch_common_fields() {
        let node = SchemaNode::number()
            .with_description("amount")
            .with_title("Amount");
        assert_eq!(node.base().description.as_deref(), Some("amount"));
        assert_eq!(node.simple().title.as_deref(), Some("Amount"));
    }
}
