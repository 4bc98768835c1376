//! # Vaunt
//!
//! Consumer-driven contract checking for asynchronous messaging.
//!
//! Services describe the messages they publish (capabilities) and the
//! messages they read from other services (expectations). Vaunt checks, from
//! those descriptions alone, that every expectation is satisfied by some
//! message the provider publishes on the same destination:
//!
//! - **Endpoint matching**: queues and topics match by type and name,
//!   temporary queues by type only
//! - **Schema comparison**: JSON-Schema trees are compared field by field;
//!   whatever the consumer leaves open, the provider may choose freely
//! - **Diagnostics**: each failed expectation keeps the field, consumer value
//!   and provider value of every mismatch
//!
//! ## Quick Start
//!
//! ```rust
//! use vaunt::prelude::*;
//!
//! let provider = ServiceBuilder::new("orders")
//!     .produces(DestinationType::Topic, "order-placed", SchemaNode::integer())
//!     .build();
//! let consumer = ServiceBuilder::new("billing")
//!     .expects("orders", DestinationType::Topic, "order-placed", SchemaNode::integer())
//!     .build();
//!
//! let results = ContractValidator::new().validate(&consumer, &provider)?;
//! assert!(results.iter().all(ValidationResult::is_ok));
//! # Ok::<(), VauntError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod compare;
pub mod core;
pub mod errors;
pub mod representation;
pub mod schema;
pub mod testing;
pub mod validator;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::compare::{
        compare, CompareOptions, Comparator, ComparatorRegistry, Comparison, Diagnostic,
    };
    pub use crate::core::{
        Capabilities, Contract, DestinationType, Expectations, Outcome, Service,
        ValidationResult,
    };
    pub use crate::errors::{Result, VauntError};
    pub use crate::representation::{
        parse_contracts, parse_service, read_service, write_service, ServiceBuilder,
    };
    pub use crate::schema::{
        ArraySchema, BooleanSchema, NumberSchema, ObjectSchema, SchemaKind, SchemaNode,
        SimpleSchema, StringSchema,
    };
    pub use crate::validator::{CandidatePolicy, ContractValidator, ValidatorConfig};
}
