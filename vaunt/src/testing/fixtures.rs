//! Sample schemas and services for tests and benchmarks.

use crate::core::{DestinationType, Service};
use crate::representation::ServiceBuilder;
use crate::schema::{ArraySchema, ObjectSchema, SchemaNode, StringSchema};

/// Name of the sample provider service.
pub const PROVIDER: &str = "order-service";

/// Name of the sample consumer service.
pub const CONSUMER: &str = "billing-service";

/// An `OrderPlaced` event schema with nested customer and line items.
#[must_use]
pub fn order_schema() -> SchemaNode {
    let customer: SchemaNode = ObjectSchema::new()
        .with_property("id", SchemaNode::integer().with_required(true))
        .with_property("email", StringSchema::new().with_pattern("^.+@.+$").into())
        .into();

    let line: SchemaNode = ObjectSchema::new()
        .with_property("sku", SchemaNode::string().with_required(true))
        .with_property("quantity", SchemaNode::integer())
        .into();

    let lines = ArraySchema {
        items: Some(Box::new(line.with_id("Line"))),
        ..ArraySchema::default()
    };

    let order: SchemaNode = ObjectSchema::new()
        .with_property("id", SchemaNode::integer().with_required(true))
        .with_property(
            "status",
            StringSchema::new()
                .with_enums(["PLACED", "PAID", "SHIPPED"])
                .into(),
        )
        .with_property("customer", customer.with_id("Customer"))
        .with_property("lines", SchemaNode::Array(lines))
        .into();
    order.with_id("OrderPlaced")
}

/// The provider side: publishes `OrderPlaced` on a topic and replies on a
/// temporary queue.
#[must_use]
pub fn provider_service() -> Service {
    ServiceBuilder::new(PROVIDER)
        .produces(DestinationType::Topic, "orders", order_schema())
        .produces(
            DestinationType::TemporaryQueue,
            "order-service-reply",
            SchemaNode::string().with_id("Ack"),
        )
        .build()
}

/// A consumer reading a subset of `OrderPlaced` and the reply queue.
#[must_use]
pub fn consumer_service() -> Service {
    let order: SchemaNode = ObjectSchema::new()
        .with_property("id", SchemaNode::integer().with_required(true))
        .with_property(
            "status",
            StringSchema::new().with_enums(["PLACED", "PAID"]).into(),
        )
        .into();

    ServiceBuilder::new(CONSUMER)
        .expects(PROVIDER, DestinationType::Topic, "orders", order.with_id("OrderPlaced"))
        .expects(
            PROVIDER,
            DestinationType::TemporaryQueue,
            "billing-reply",
            SchemaNode::string().with_id("Ack"),
        )
        .build()
}

/// An object schema `width` properties wide and `depth` levels deep.
#[must_use]
pub fn wide_object(width: usize, depth: usize) -> SchemaNode {
    let mut node = ObjectSchema::new();
    for i in 0..width {
        let child = if depth > 1 {
            wide_object(width, depth - 1)
        } else {
            SchemaNode::string().with_description(format!("field {i}"))
        };
        node = node.with_property(format!("p{i}"), child);
    }
    node.into()
}
