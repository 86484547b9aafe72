// Copyright 2024 OctoFHIR Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Operator catalog
//!
//! Registration happens on a [`CatalogBuilder`]; [`CatalogBuilder::build`]
//! freezes it into an immutable [`OperatorCatalog`] that can be shared across
//! threads without locking. The catalog has two layers: the overridable layer
//! that platforms write into and the internal layer of platform-independent
//! defaults consulted when the first has no entry.

use log::debug;
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

use super::names::OperatorNames;
use super::operator::Operator;
use super::operators;
use super::selector::Selector;
use crate::config::OperatorConfig;
use crate::error::{OperatorError, OperatorResult};
use crate::platform::Platform;

static STANDARD_CATALOG: LazyLock<OperatorCatalog> =
    LazyLock::new(|| CatalogBuilder::standard().build());

/// Mutable registration phase of an operator catalog
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    operators: FxHashMap<Selector, Operator>,
    internal: FxHashMap<Selector, Operator>,
    names: OperatorNames,
    config: OperatorConfig,
}

impl CatalogBuilder {
    /// Create an empty builder with no operators and no names
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder holding the standard operators, defaults and names
    pub fn standard() -> Self {
        let mut builder = Self {
            names: OperatorNames::standard(),
            ..Self::default()
        };
        operators::register_builtin_operators(&mut builder);
        operators::register_internal_operators(&mut builder);
        builder
    }

    /// Use a configuration for the catalog being built
    pub fn with_config(mut self, config: OperatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Let a platform contribute its overrides
    pub fn with_platform(mut self, platform: &dyn Platform) -> Self {
        debug!("Registering operator overrides for platform {}", platform.name());
        platform.register_operators(&mut self);
        self
    }

    /// Insert into the overridable layer, replacing any operator with the same selector
    pub fn add_operator(&mut self, operator: Operator) -> &mut Self {
        if let Some(previous) = self.operators.insert(operator.selector(), operator) {
            debug!(
                "Replaced operator {} ({})",
                previous.selector(),
                self.names.name(previous.selector())
            );
        }
        self
    }

    /// Insert into the internal default layer
    pub fn add_internal_operator(&mut self, operator: Operator) -> &mut Self {
        self.internal.insert(operator.selector(), operator);
        self
    }

    /// Remove an operator from the overridable layer
    pub fn remove_operator(&mut self, selector: Selector) -> Option<Operator> {
        self.operators.remove(&selector)
    }

    /// Register a platform operator name for a selector
    pub fn register(&mut self, selector: Selector, name: impl Into<String>) -> &mut Self {
        self.names.register(selector, name);
        self
    }

    /// Operator currently registered in the overridable layer
    pub fn operator(&self, selector: Selector) -> Option<&Operator> {
        self.operators.get(&selector)
    }

    /// Freeze the builder into a catalog
    pub fn build(self) -> OperatorCatalog {
        debug!(
            "Built operator catalog with {} operators and {} internal defaults",
            self.operators.len(),
            self.internal.len()
        );
        OperatorCatalog {
            operators: self.operators,
            internal: self.internal,
            names: self.names,
            config: self.config,
        }
    }
}

/// Immutable operator catalog
#[derive(Debug, Clone)]
pub struct OperatorCatalog {
    operators: FxHashMap<Selector, Operator>,
    internal: FxHashMap<Selector, Operator>,
    names: OperatorNames,
    config: OperatorConfig,
}

impl OperatorCatalog {
    /// Shared standard catalog, built on first use
    pub fn standard() -> &'static OperatorCatalog {
        &STANDARD_CATALOG
    }

    /// Look up an operator, falling back to the internal defaults when configured
    pub fn lookup(&self, selector: Selector) -> Option<&Operator> {
        self.operators.get(&selector).or_else(|| {
            if self.config.fallback_to_internal {
                self.internal.get(&selector)
            } else {
                None
            }
        })
    }

    /// Look up an operator or fail with [`OperatorError::UnknownOperator`]
    pub fn require(&self, selector: Selector) -> OperatorResult<&Operator> {
        self.lookup(selector).ok_or(OperatorError::UnknownOperator {
            selector: selector.value(),
        })
    }

    /// Operator in the overridable layer only
    pub fn operator(&self, selector: Selector) -> Option<&Operator> {
        self.operators.get(&selector)
    }

    /// Operator in the internal default layer only
    pub fn internal_operator(&self, selector: Selector) -> Option<&Operator> {
        self.internal.get(&selector)
    }

    /// Look up an operator by platform name
    pub fn lookup_by_name(&self, name: &str) -> OperatorResult<&Operator> {
        let selector = self
            .names
            .selector(name)
            .ok_or_else(|| OperatorError::UnknownOperatorName {
                name: name.to_string(),
            })?;
        self.require(selector)
    }

    /// Platform name of a selector, or its decimal value when unnamed
    pub fn operator_name(&self, selector: Selector) -> String {
        self.names.name(selector).into_owned()
    }

    /// Selector registered for a platform name
    pub fn selector_for_name(&self, name: &str) -> Option<Selector> {
        self.names.selector(name)
    }

    /// Name table
    pub fn names(&self) -> &OperatorNames {
        &self.names
    }

    /// Configuration the catalog was built with
    pub fn config(&self) -> &OperatorConfig {
        &self.config
    }

    /// Number of operators in the overridable layer
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// Whether the overridable layer is empty
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Operators of the overridable layer ordered by selector
    pub fn iter(&self) -> impl Iterator<Item = &Operator> {
        let mut operators: Vec<&Operator> = self.operators.values().collect();
        operators.sort_by_key(|op| op.selector());
        operators.into_iter()
    }

    /// Operators of the internal layer ordered by selector
    pub fn internal_iter(&self) -> impl Iterator<Item = &Operator> {
        let mut operators: Vec<&Operator> = self.internal.values().collect();
        operators.sort_by_key(|op| op.selector());
        operators.into_iter()
    }
}

impl Default for OperatorCatalog {
    fn default() -> Self {
        CatalogBuilder::standard().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::operators::math;

    #[test]
    fn test_standard_catalog_is_shared() {
        let a = OperatorCatalog::standard();
        let b = OperatorCatalog::standard();
        assert!(std::ptr::eq(a, b));
        assert!(a.len() > 130);
    }

    #[test]
    fn test_add_operator_replaces_by_selector() {
        let mut builder = CatalogBuilder::standard();
        builder.add_operator(Operator::simple_function(Selector::ABS, "FABS"));
        let catalog = builder.build();
        assert_eq!(
            catalog.lookup(Selector::ABS).map(|op| op.database_strings().to_vec()),
            Some(vec!["FABS(".to_string(), ")".to_string()])
        );
    }

    #[test]
    fn test_fallback_to_internal_layer() {
        let mut builder = CatalogBuilder::standard();
        builder.remove_operator(Selector::LIKE);
        let catalog = builder.clone().build();
        assert!(catalog.operator(Selector::LIKE).is_none());
        assert!(catalog.lookup(Selector::LIKE).is_some());

        let strict = builder
            .with_config(OperatorConfig {
                fallback_to_internal: false,
                ..OperatorConfig::default()
            })
            .build();
        assert!(strict.lookup(Selector::LIKE).is_none());
    }

    #[test]
    fn test_lookup_by_name() {
        let catalog = OperatorCatalog::standard();
        let op = catalog.lookup_by_name("Locate").unwrap();
        assert_eq!(op.selector(), Selector::LOCATE);
        assert_eq!(
            catalog.lookup_by_name("Nope"),
            Err(OperatorError::UnknownOperatorName {
                name: "Nope".to_string()
            })
        );
    }

    #[test]
    fn test_register_name_in_builder() {
        let mut builder = CatalogBuilder::new();
        builder.add_operator(math::abs());
        builder.register(Selector::ABS, "Absolute");
        let catalog = builder.build();
        assert_eq!(catalog.operator_name(Selector::ABS), "Absolute");
        assert_eq!(catalog.selector_for_name("Absolute"), Some(Selector::ABS));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_iter_is_sorted() {
        let selectors: Vec<i32> = OperatorCatalog::standard()
            .iter()
            .map(|op| op.selector().value())
            .collect();
        let mut sorted = selectors.clone();
        sorted.sort_unstable();
        assert_eq!(selectors, sorted);
    }
}
