//! Service representation: what a service produces and what it consumes.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Contract;

/// Contracts a service publishes, in publish order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Capabilities {
    /// Published contracts.
    #[serde(default)]
    pub contracts: Vec<Contract>,
}

impl Capabilities {
    /// Creates capabilities from a contract list.
    #[must_use]
    pub fn new(contracts: Vec<Contract>) -> Self {
        Self { contracts }
    }
}

/// Contracts a service expects, grouped by provider name.
///
/// Providers keep first-seen order and each provider's contracts keep
/// insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Expectations {
    entries: Vec<(String, Vec<Contract>)>,
}

impl Expectations {
    /// Creates an empty expectation set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a contract expected from `provider`.
    pub fn push(&mut self, provider: impl Into<String>, contract: Contract) {
        self.provider_entry(provider.into()).push(contract);
    }

    fn provider_entry(&mut self, provider: String) -> &mut Vec<Contract> {
        let index = match self.entries.iter().position(|(name, _)| *name == provider) {
            Some(index) => index,
            None => {
                self.entries.push((provider, Vec::new()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }

    /// Returns the contracts expected from `provider`, empty when none.
    #[must_use]
    pub fn contracts_for(&self, provider: &str) -> &[Contract] {
        self.entries
            .iter()
            .find(|(name, _)| name == provider)
            .map(|(_, contracts)| contracts.as_slice())
            .unwrap_or(&[])
    }

    /// Iterates over provider names in first-seen order.
    pub fn providers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Iterates over `(provider, contracts)` groups.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Contract])> {
        self.entries
            .iter()
            .map(|(name, contracts)| (name.as_str(), contracts.as_slice()))
    }

    /// Total number of expected contracts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, contracts)| contracts.len()).sum()
    }

    /// Returns true if no contracts are expected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct ProviderMap<'a>(&'a [(String, Vec<Contract>)]);

impl Serialize for ProviderMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (provider, contracts) in self.0 {
            map.serialize_entry(provider, contracts)?;
        }
        map.end()
    }
}

impl Serialize for Expectations {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Expectations", 1)?;
        state.serialize_field("providerNameToContracts", &ProviderMap(&self.entries))?;
        state.end()
    }
}

struct OrderedContracts(Expectations);

impl<'de> Deserialize<'de> for OrderedContracts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct ProviderMapVisitor;

        impl<'de> Visitor<'de> for ProviderMapVisitor {
            type Value = OrderedContracts;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of provider names to contract lists")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut expectations = Expectations::new();
                // Repeated keys extend the earlier group.
                while let Some((provider, contracts)) =
                    access.next_entry::<String, Vec<Contract>>()?
                {
                    expectations.provider_entry(provider).extend(contracts);
                }
                Ok(OrderedContracts(expectations))
            }
        }

        deserializer.deserialize_map(ProviderMapVisitor)
    }
}

impl<'de> Deserialize<'de> for Expectations {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(rename = "providerNameToContracts")]
            providers: Option<OrderedContracts>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(raw.providers.map(|p| p.0).unwrap_or_default())
    }
}

/// A service's published capabilities and consumed expectations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Service name; consumers refer to providers by this.
    pub name: String,
    /// What the service produces.
    #[serde(default)]
    pub capabilities: Capabilities,
    /// What the service consumes, per provider.
    #[serde(default)]
    pub expectations: Expectations,
}

impl Service {
    /// Creates a new service.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        capabilities: Capabilities,
        expectations: Expectations,
    ) -> Self {
        Self {
            name: name.into(),
            capabilities,
            expectations,
        }
    }
}
