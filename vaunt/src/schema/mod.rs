//! Schema model.
//!
//! This module contains:
//! - The [`SchemaKind`] discriminant
//! - The [`SchemaNode`] tree and its per-kind field groups

mod kind;
mod node;

pub use kind::SchemaKind;
pub use node::{
    ArraySchema, BooleanSchema, ContainerTypeFields, JsonFields, LinkDescriptor, NumberSchema,
    ObjectSchema, SchemaNode, SimpleSchema, SimpleTypeFields, StringSchema, ValueTypeFields,
};
