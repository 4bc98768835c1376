//! Per-expectation validation against a provider's published contracts.

use std::sync::Arc;
use tracing::{debug, info, warn};

use super::config::{CandidatePolicy, ValidatorConfig};
use super::matcher::find_candidates;
use crate::compare::{ComparatorRegistry, Diagnostic};
use crate::core::{Contract, Service, ValidationResult};
use crate::errors::Result;

/// Checks a consumer's expectations against a provider's capabilities.
///
/// Each expectation is resolved in one pass:
///
/// 1. find every provider contract on the expected endpoint
/// 2. fail with `missing endpoint` when there are none
/// 3. compare the expected schema against each candidate in publish order
/// 4. succeed on the first candidate without diagnostics
/// 5. otherwise fail with the diagnostics of every candidate, each prefixed
///    with the candidate that produced it
///
/// Contract mismatches never abort the call. Only a broken comparator does,
/// or a schema deeper than an explicitly configured `max_depth`.
#[derive(Debug, Clone)]
pub struct ContractValidator {
    registry: Arc<ComparatorRegistry>,
    config: ValidatorConfig,
}

impl ContractValidator {
    /// Creates a validator with the standard comparators and default config.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: Arc::new(ComparatorRegistry::standard()),
            config: ValidatorConfig::default(),
        }
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the comparator registry.
    #[must_use]
    pub fn with_registry(mut self, registry: Arc<ComparatorRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates every expectation `consumer` holds on `provider`.
    ///
    /// Returns one result per expectation, in declaration order. A consumer
    /// with no expectations on `provider` yields an empty list.
    pub fn validate(&self, consumer: &Service, provider: &Service) -> Result<Vec<ValidationResult>> {
        let expectations = consumer.expectations.contracts_for(&provider.name);
        if expectations.is_empty() {
            warn!(
                consumer = %consumer.name,
                provider = %provider.name,
                "Consumer has no expectations on provider"
            );
            return Ok(Vec::new());
        }

        let results = self.validate_contracts(expectations, &provider.capabilities.contracts)?;
        let failed = results.iter().filter(|r| !r.is_ok()).count();
        info!(
            consumer = %consumer.name,
            provider = %provider.name,
            expectations = results.len(),
            failed,
            "Validated service contracts"
        );
        Ok(results)
    }

    /// Validates `expectations` against `capabilities`, one result per
    /// expectation, in input order.
    pub fn validate_contracts(
        &self,
        expectations: &[Contract],
        capabilities: &[Contract],
    ) -> Result<Vec<ValidationResult>> {
        expectations
            .iter()
            .map(|expectation| self.validate_expectation(expectation, capabilities))
            .collect()
    }

    fn validate_expectation(
        &self,
        expectation: &Contract,
        capabilities: &[Contract],
    ) -> Result<ValidationResult> {
        let subject = expectation.to_string();
        let endpoint = expectation.endpoint();
        let mut candidates = find_candidates(capabilities, expectation);
        debug!(
            expectation = %subject,
            candidates = candidates.len(),
            "Resolving expectation"
        );

        if candidates.is_empty() {
            warn!(endpoint = %endpoint, "No provider contract on expected endpoint");
            return Ok(ValidationResult::failure(
                subject,
                Diagnostic::MissingEndpoint { endpoint }.to_string(),
            ));
        }

        if self.config.candidate_policy == CandidatePolicy::UniqueSchemaId {
            let schema_id = expectation.schema.id();
            candidates.retain(|candidate| candidate.schema.id() == schema_id);
            let failure = match candidates.len() {
                0 => Some(Diagnostic::MissingSchemaId {
                    endpoint,
                    schema_id: schema_id.map(str::to_string),
                }),
                1 => None,
                count => Some(Diagnostic::DuplicateMatch {
                    endpoint,
                    schema_id: schema_id.map(str::to_string),
                    count,
                }),
            };
            if let Some(diagnostic) = failure {
                warn!(expectation = %subject, "{}", diagnostic);
                return Ok(ValidationResult::failure(subject, diagnostic.to_string()));
            }
        }

        let options = self.config.compare_options();
        let mut near_misses = Vec::with_capacity(candidates.len());
        for (index, candidate) in candidates.iter().enumerate() {
            let diagnostics = self
                .registry
                .compare(&expectation.schema, &candidate.schema, options)?;
            debug!(
                expectation = %subject,
                candidate = index + 1,
                diagnostics = diagnostics.len(),
                "Compared candidate"
            );
            if diagnostics.is_empty() {
                return Ok(ValidationResult::success(subject));
            }
            near_misses.push((index + 1, *candidate, diagnostics));
        }

        let errors = near_misses
            .into_iter()
            .flat_map(|(n, candidate, diagnostics)| {
                diagnostics
                    .into_iter()
                    .map(move |diagnostic| format!("candidate {n} ({candidate}): {diagnostic}"))
            })
            .collect();
        Ok(ValidationResult::failures(subject, errors))
    }
}

impl Default for ContractValidator {
    fn default() -> Self {
        Self::new()
    }
}
