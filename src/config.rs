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

//! Operator catalog and platform configuration

use serde::{Deserialize, Serialize};

/// How the composer treats operators whose fragments do not match their arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FragmentValidation {
    /// Reject mismatched fragment counts with an error
    #[default]
    Strict,
    /// Print what lines up and drop the rest
    Lenient,
}

/// Configuration for catalog lookup and the generic platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatorConfig {
    /// Fragment/argument validation mode used when printing
    pub fragment_validation: FragmentValidation,

    /// Whether `lookup` falls back to the internal default operators
    pub fallback_to_internal: bool,

    /// Disable parameter binding for a whole call when an operator cannot bind
    pub dynamic_sql_for_functions: bool,

    /// Maximum number of compiled REGEXP patterns kept by the platform
    pub regex_cache_size: usize,
}

impl OperatorConfig {
    /// Create a configuration with custom settings
    pub fn new(
        fragment_validation: FragmentValidation,
        fallback_to_internal: bool,
        dynamic_sql_for_functions: bool,
        regex_cache_size: usize,
    ) -> Self {
        Self {
            fragment_validation,
            fallback_to_internal,
            dynamic_sql_for_functions,
            regex_cache_size,
        }
    }

    /// Strict printing with binding disabled for operators that cannot bind
    pub fn strict() -> Self {
        Self {
            fragment_validation: FragmentValidation::Strict,
            fallback_to_internal: true,
            dynamic_sql_for_functions: true,
            regex_cache_size: 256,
        }
    }

    /// Tolerant printing that truncates mismatched fragments
    pub fn lenient() -> Self {
        Self {
            fragment_validation: FragmentValidation::Lenient,
            fallback_to_internal: true,
            dynamic_sql_for_functions: false,
            regex_cache_size: 256,
        }
    }

    /// Parse a configuration from JSON, missing fields take their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl Default for OperatorConfig {
    fn default() -> Self {
        Self {
            fragment_validation: FragmentValidation::Strict,
            fallback_to_internal: true,
            dynamic_sql_for_functions: false,
            regex_cache_size: 128,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_config_default() {
        let config = OperatorConfig::default();
        assert_eq!(config.fragment_validation, FragmentValidation::Strict);
        assert!(config.fallback_to_internal);
        assert!(!config.dynamic_sql_for_functions);
        assert_eq!(config.regex_cache_size, 128);
    }

    #[test]
    fn test_operator_config_presets() {
        let strict = OperatorConfig::strict();
        assert_eq!(strict.fragment_validation, FragmentValidation::Strict);
        assert!(strict.dynamic_sql_for_functions);

        let lenient = OperatorConfig::lenient();
        assert_eq!(lenient.fragment_validation, FragmentValidation::Lenient);
        assert!(!lenient.dynamic_sql_for_functions);
    }

    #[test]
    fn test_operator_config_partial_json() {
        let config =
            OperatorConfig::from_json(r#"{"fragment_validation": "lenient", "regex_cache_size": 4}"#)
                .unwrap();
        assert_eq!(config.fragment_validation, FragmentValidation::Lenient);
        assert_eq!(config.regex_cache_size, 4);
        assert!(config.fallback_to_internal);
    }
}
