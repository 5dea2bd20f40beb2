//! Contract registry
//!
//! Provides [`ContractRegistry`] mapping every [`Profile`] (the role an
//! attribute container plays in a document) to its [`ConformanceContract`].

use std::collections::HashMap;
use std::fmt;

use aveas_attribute::{AttributeGroup, AttributeKind};
use once_cell::sync::Lazy;

use crate::classification::{Classification, ContainerRole};
use crate::container::AttributeContainer;
use crate::contract::{ConformanceContract, ConformanceReport};
use crate::error::ConformanceError;

/// Role of an attribute container within a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Profile {
    /// Static data of an object
    Object(Classification),
    /// Per-frame data of an object
    ObjectInFrame(Classification),
    /// Data of the scenario context
    ScenarioContext,
    /// Data of the environment context
    EnvironmentContext,
    /// Data of an event
    Event,
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object(c) => write!(f, "object '{c}'"),
            Self::ObjectInFrame(c) => write!(f, "object-in-frame '{c}'"),
            Self::ScenarioContext => f.write_str("scenario context"),
            Self::EnvironmentContext => f.write_str("environment context"),
            Self::Event => f.write_str("event"),
        }
    }
}

static STANDARD: Lazy<ContractRegistry> = Lazy::new(ContractRegistry::with_defaults);

/// Registry of conformance contracts
#[derive(Debug, Default, Clone)]
pub struct ContractRegistry {
    contracts: HashMap<Profile, ConformanceContract>,
}

impl ContractRegistry {
    /// Create new empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            contracts: HashMap::new(),
        }
    }

    /// Create registry with the contracts of the format
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        for classification in Classification::ALL.iter().copied() {
            registry.register(
                Profile::Object(classification),
                ConformanceContract::for_classification(ContainerRole::Static, classification),
            );
            registry.register(
                Profile::ObjectInFrame(classification),
                ConformanceContract::for_classification(ContainerRole::Dynamic, classification),
            );
        }

        registry.register(
            Profile::ScenarioContext,
            ConformanceContract::new(std::iter::empty(), AttributeKind::in_group(AttributeGroup::Scenario)),
        );
        registry.register(
            Profile::EnvironmentContext,
            ConformanceContract::new(std::iter::empty(), AttributeKind::in_group(AttributeGroup::Environment)),
        );
        registry.register(
            Profile::Event,
            ConformanceContract::new(AttributeKind::in_group(AttributeGroup::Event), std::iter::empty()),
        );

        registry
    }

    /// Shared registry holding the default contracts
    #[inline]
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Register or replace a contract
    pub fn register(&mut self, profile: Profile, contract: ConformanceContract) {
        self.contracts.insert(profile, contract);
    }

    /// Contract for a profile
    #[inline]
    #[must_use]
    pub fn contract(&self, profile: Profile) -> Option<&ConformanceContract> {
        self.contracts.get(&profile)
    }

    /// Check if a profile has a contract
    #[inline]
    #[must_use]
    pub fn contains(&self, profile: Profile) -> bool {
        self.contracts.contains_key(&profile)
    }

    /// Remove a contract
    #[inline]
    pub fn remove(&mut self, profile: Profile) -> Option<ConformanceContract> {
        self.contracts.remove(&profile)
    }

    /// All registered profiles, sorted
    #[must_use]
    pub fn profiles(&self) -> Vec<Profile> {
        let mut profiles: Vec<_> = self.contracts.keys().copied().collect();
        profiles.sort_unstable();
        profiles
    }

    /// Number of registered contracts
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    /// Whether no contract is registered
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }

    /// Evaluate a container under a profile's contract
    ///
    /// # Errors
    /// Returns [`ConformanceError::UnknownProfile`] if no contract is registered
    pub fn evaluate(
        &self,
        profile: Profile,
        container: &AttributeContainer,
    ) -> Result<ConformanceReport, ConformanceError> {
        self.contract(profile)
            .map(|contract| contract.evaluate(container))
            .ok_or(ConformanceError::UnknownProfile(profile))
    }

    /// Check a container under a profile's contract
    ///
    /// # Errors
    /// - [`ConformanceError::UnknownProfile`] if no contract is registered
    /// - any error of [`ConformanceContract::check`]
    pub fn check(&self, profile: Profile, container: &AttributeContainer) -> Result<(), ConformanceError> {
        self.evaluate(profile, container)?.into_result()
    }
}
