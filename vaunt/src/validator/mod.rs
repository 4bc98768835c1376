//! Contract validation.
//!
//! [`ContractValidator`] binds each consumer expectation to the provider
//! contracts published on the same endpoint and reports one
//! [`ValidationResult`](crate::core::ValidationResult) per expectation.

mod config;
mod matcher;
mod orchestrator;

#[cfg(test)]
mod integration_tests;

pub use config::{CandidatePolicy, ValidatorConfig};
pub use matcher::find_candidates;
pub use orchestrator::ContractValidator;
