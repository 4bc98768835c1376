//! Declaration API for service representations.

use crate::core::{Capabilities, Contract, DestinationType, Expectations, Service};
use crate::schema::SchemaNode;

/// Declares what a service produces and what it expects from others.
///
/// ```
/// use vaunt::core::DestinationType;
/// use vaunt::representation::ServiceBuilder;
/// use vaunt::schema::SchemaNode;
///
/// let service = ServiceBuilder::new("orders")
///     .produces(DestinationType::Topic, "order-placed", SchemaNode::object())
///     .expects("billing", DestinationType::Queue, "invoices", SchemaNode::object())
///     .build();
///
/// assert_eq!(service.capabilities.contracts.len(), 1);
/// assert_eq!(service.expectations.contracts_for("billing").len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ServiceBuilder {
    name: String,
    capabilities: Vec<Contract>,
    expectations: Expectations,
}

impl ServiceBuilder {
    /// Starts a declaration for the service `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capabilities: Vec::new(),
            expectations: Expectations::new(),
        }
    }

    /// Declares a message this service publishes.
    #[must_use]
    pub fn produces(
        mut self,
        destination_type: DestinationType,
        destination_name: impl Into<String>,
        schema: SchemaNode,
    ) -> Self {
        self.capabilities
            .push(Contract::new(destination_type, destination_name, schema));
        self
    }

    /// Declares a message this service reads from `provider`.
    #[must_use]
    pub fn expects(
        mut self,
        provider: impl Into<String>,
        destination_type: DestinationType,
        destination_name: impl Into<String>,
        schema: SchemaNode,
    ) -> Self {
        self.expectations.push(
            provider,
            Contract::new(destination_type, destination_name, schema),
        );
        self
    }

    /// Adds an already built capability.
    #[must_use]
    pub fn capability(mut self, contract: Contract) -> Self {
        self.capabilities.push(contract);
        self
    }

    /// Adds an already built expectation on `provider`.
    #[must_use]
    pub fn expectation(mut self, provider: impl Into<String>, contract: Contract) -> Self {
        self.expectations.push(provider, contract);
        self
    }

    /// Finishes the declaration.
    #[must_use]
    pub fn build(self) -> Service {
        Service::new(
            self.name,
            Capabilities::new(self.capabilities),
            self.expectations,
        )
    }
}
