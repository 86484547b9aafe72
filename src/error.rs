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

//! Error types for operator lookup, printing and in-memory conformance

use thiserror::Error;

/// Result type for operator operations
pub type OperatorResult<T> = Result<T, OperatorError>;

/// Operator errors
///
/// `CannotConform` is the only condition raised by the in-memory evaluator. It is
/// recoverable: the caller should re-issue the predicate against the database.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OperatorError {
    /// The predicate or function cannot be evaluated in memory
    #[error("Cannot conform expression in memory: operator '{operator}' {reason}")]
    CannotConform {
        /// Name of the operator being evaluated
        operator: String,
        /// What prevented evaluation
        reason: String,
    },

    /// The operator is a placeholder that a platform has to replace before printing
    #[error("Operator '{operator}' is incomplete and must be supplied by the platform")]
    IncompleteOperator {
        /// Name of the incomplete operator
        operator: String,
    },

    /// Print fragments do not line up with the argument slots
    #[error(
        "Operator '{operator}' has {fragments} print fragments for {slots} argument slots"
    )]
    FragmentMismatch {
        /// Operator name
        operator: String,
        /// Number of print fragments
        fragments: usize,
        /// Number of argument slots from the argument-index permutation
        slots: usize,
    },

    /// The argument-index permutation references a missing argument
    #[error("Operator '{operator}' references argument {index} but only {available} were supplied")]
    ArgumentIndexOutOfRange {
        /// Operator name
        operator: String,
        /// Referenced argument index
        index: usize,
        /// Number of supplied arguments
        available: usize,
    },

    /// REF or DEREF was applied to an expression without a table alias
    #[error("Operator '{operator}' requires an object expression with a table alias")]
    MissingTableAlias {
        /// Operator name
        operator: String,
    },

    /// No operator is registered for the selector
    #[error("Unknown operator selector {selector}")]
    UnknownOperator {
        /// The selector that was looked up
        selector: i32,
    },

    /// No operator is registered under the name
    #[error("Unknown operator name '{name}'")]
    UnknownOperatorName {
        /// The name that was looked up
        name: String,
    },
}

impl OperatorError {
    /// Create a cannot-conform error
    pub fn cannot_conform(operator: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::CannotConform {
            operator: operator.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error signals "evaluate against the data source instead"
    pub fn is_cannot_conform(&self) -> bool {
        matches!(self, Self::CannotConform { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cannot_conform_message() {
        let err = OperatorError::cannot_conform("Like", "pattern contains '_'");
        assert!(err.is_cannot_conform());
        assert_eq!(
            err.to_string(),
            "Cannot conform expression in memory: operator 'Like' pattern contains '_'"
        );
    }

    #[test]
    fn test_other_errors_are_not_conform_failures() {
        let err = OperatorError::UnknownOperator { selector: 999 };
        assert!(!err.is_cannot_conform());
        assert_eq!(err.to_string(), "Unknown operator selector 999");
    }
}
