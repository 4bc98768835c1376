//! Destinations and contracts.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::schema::SchemaNode;

/// The kind of messaging endpoint a contract is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DestinationType {
    /// Point-to-point queue.
    Queue,
    /// Publish/subscribe topic.
    Topic,
    /// Reply queue whose name is generated at runtime.
    TemporaryQueue,
}

impl DestinationType {
    /// Returns true when destination names are irrelevant for matching.
    #[must_use]
    pub fn is_temporary(&self) -> bool {
        matches!(self, Self::TemporaryQueue)
    }
}

impl fmt::Display for DestinationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Queue => write!(f, "QUEUE"),
            Self::Topic => write!(f, "TOPIC"),
            Self::TemporaryQueue => write!(f, "TEMPORARY_QUEUE"),
        }
    }
}

/// A message shape flowing through one destination.
///
/// On the provider side it is a capability ("I emit `schema` to this
/// destination"); on the consumer side an expectation ("I read `schema` from
/// this destination of some provider").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    /// Endpoint kind.
    pub destination_type: DestinationType,
    /// Endpoint name.
    pub destination_name: String,
    /// Message schema.
    #[serde(alias = "body")]
    pub schema: SchemaNode,
}

impl Contract {
    /// Creates a new contract.
    #[must_use]
    pub fn new(
        destination_type: DestinationType,
        destination_name: impl Into<String>,
        schema: SchemaNode,
    ) -> Self {
        Self {
            destination_type,
            destination_name: destination_name.into(),
            schema,
        }
    }

    /// Returns true when `provider` is published on the endpoint this
    /// (consumer) contract reads from.
    ///
    /// Temporary queues match on type alone; everything else needs the same
    /// type and an identical, case-sensitive name.
    #[must_use]
    pub fn endpoint_matches(&self, provider: &Self) -> bool {
        if self.destination_type.is_temporary() {
            return provider.destination_type.is_temporary();
        }
        self.destination_type == provider.destination_type
            && self.destination_name == provider.destination_name
    }

    /// Renders the endpoint as `<type> <name>`.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{} {}", self.destination_type, self.destination_name)
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (schema {})",
            self.destination_type,
            self.destination_name,
            self.schema.id().unwrap_or("-")
        )
    }
}
