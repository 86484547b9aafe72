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

//! In-memory operator evaluation
//!
//! Predicates and scalar functions are evaluated against materialized values when
//! the semantics can be reproduced exactly. Everything else fails with
//! [`OperatorError::CannotConform`](crate::error::OperatorError::CannotConform),
//! telling the caller to run the expression on the database instead.

pub mod function;
pub mod like;
pub mod relation;

pub use function::apply_function;
pub use like::conform_like;
pub use relation::{does_relation_conform, values_equal};

use crate::error::{OperatorError, OperatorResult};
use crate::model::SqlValue;
use crate::platform::Platform;
use crate::registry::{Operator, OperatorCatalog, Selector};

/// Evaluates catalog operators against in-memory values
pub struct InMemoryEvaluator<'a> {
    catalog: &'a OperatorCatalog,
    platform: &'a dyn Platform,
}

impl<'a> InMemoryEvaluator<'a> {
    /// Create an evaluator over a catalog and platform
    pub fn new(catalog: &'a OperatorCatalog, platform: &'a dyn Platform) -> Self {
        Self { catalog, platform }
    }

    fn operator(&self, selector: Selector) -> OperatorResult<&'a Operator> {
        self.catalog.lookup(selector).ok_or_else(|| {
            OperatorError::cannot_conform(selector.to_string(), "is not registered")
        })
    }

    fn label(&self, operator: &Operator) -> String {
        if let Some(name) = operator.name() {
            return name.to_string();
        }
        operator
            .database_strings()
            .iter()
            .map(|fragment| fragment.trim_matches(|c: char| c == '(' || c == ')' || c.is_whitespace()))
            .find(|keyword| !keyword.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.catalog.operator_name(operator.selector()))
    }

    /// Evaluate `left <selector> right`
    pub fn evaluate(&self, selector: Selector, left: &SqlValue, right: &SqlValue) -> OperatorResult<bool> {
        let operator = self.operator(selector)?;
        does_relation_conform(&self.label(operator), selector, left, right, self.platform)
    }

    /// Apply a scalar function to `source` with `args`
    pub fn apply_scalar_function(
        &self,
        selector: Selector,
        source: &SqlValue,
        args: &[SqlValue],
    ) -> OperatorResult<SqlValue> {
        let operator = self.operator(selector)?;
        apply_function(&self.label(operator), selector, source, args)
    }
}
