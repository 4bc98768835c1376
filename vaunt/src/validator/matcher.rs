//! Endpoint matching between expectations and published contracts.

use crate::core::Contract;

/// Returns every capability published on the endpoint `expectation` reads
/// from, in publish order.
#[must_use]
pub fn find_candidates<'a>(capabilities: &'a [Contract], expectation: &Contract) -> Vec<&'a Contract> {
    capabilities
        .iter()
        .filter(|capability| expectation.endpoint_matches(capability))
        .collect()
}
