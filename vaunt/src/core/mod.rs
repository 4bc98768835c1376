//! Core domain model types for vaunt.
//!
//! This module contains the fundamental types used throughout the engine:
//! - Destinations and contracts
//! - Service capabilities and expectations
//! - Validation outcomes

mod destination;
mod result;
mod service;

pub use destination::{Contract, DestinationType};
pub use result::{Outcome, ValidationResult};
pub use service::{Capabilities, Expectations, Service};
