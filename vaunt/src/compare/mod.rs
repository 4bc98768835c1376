//! Schema compatibility comparison.
//!
//! A consumer schema is compared against a provider schema node by node.
//! Nodes of the same kind go to the comparator registered for that kind;
//! nodes of different kinds yield a single kind-mismatch diagnostic.
//!
//! Field rules shared by all kinds:
//!
//! - a field the consumer leaves unset accepts any provider value
//! - a field the consumer sets must equal the provider's value
//! - `required` is asymmetric: a required consumer needs a required provider
//! - enumerations are compared by subsumption
//! - object properties must be a subset of the provider's properties

mod context;
mod diagnostic;
mod kinds;
mod layers;
mod registry;

pub use context::{CompareOptions, Comparison};
pub use diagnostic::{codes, Diagnostic};
pub use kinds::{
    ArrayComparator, BooleanComparator, NumericComparator, ObjectComparator, SimpleComparator,
    StringComparator,
};
pub use registry::{compare, compare_messages, Comparator, ComparatorRegistry};
