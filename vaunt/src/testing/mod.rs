//! Testing utilities for contract validation.
//!
//! This module provides:
//! - Assertions over schema comparisons and validation results
//! - Sample schemas and services

mod assertions;
mod fixtures;

pub use assertions::{
    assert_all_ok, assert_compatible, assert_incompatible_on, assert_kind_mismatch,
    assert_result_failed, assert_result_ok,
};
pub use fixtures::{
    consumer_service, order_schema, provider_service, wide_object, CONSUMER, PROVIDER,
};
