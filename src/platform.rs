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

//! Database platform seam
//!
//! A platform decides how identifiers are delimited, whether operators that
//! cannot bind parameters force a whole call to inline them, how REGEXP is
//! evaluated in memory, and which operators it overrides in the catalog.

use log::trace;
use lru::LruCache;
use parking_lot::Mutex;
use regex::Regex;
use std::num::NonZeroUsize;

use crate::config::{FragmentValidation, OperatorConfig};
use crate::model::SqlValue;
use crate::registry::CatalogBuilder;

/// Bounded cache of compiled full-match patterns
#[derive(Debug)]
pub struct RegexCache {
    cache: Option<Mutex<LruCache<String, Regex>>>,
}

impl RegexCache {
    /// Create a cache holding at most `capacity` patterns; zero disables caching
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: NonZeroUsize::new(capacity).map(|cap| Mutex::new(LruCache::new(cap))),
        }
    }

    /// Compile a pattern anchored at both ends, reusing a cached compilation
    pub fn get(&self, pattern: &str) -> Result<Regex, regex::Error> {
        let Some(cache) = &self.cache else {
            return compile_full_match(pattern);
        };

        if let Some(regex) = cache.lock().get(pattern) {
            return Ok(regex.clone());
        }

        let regex = compile_full_match(pattern)?;
        cache.lock().put(pattern.to_string(), regex.clone());
        Ok(regex)
    }

    /// Number of cached patterns
    pub fn len(&self) -> usize {
        self.cache.as_ref().map_or(0, |cache| cache.lock().len())
    }

    /// Whether no pattern is cached
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn compile_full_match(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{pattern})$"))
}

/// Full-match REGEXP semantics shared by platforms
///
/// Both null matches, one null does not. `None` means the operands cannot be
/// evaluated in memory.
pub fn conform_regexp_with(cache: &RegexCache, value: &SqlValue, pattern: &SqlValue) -> Option<bool> {
    match (value, pattern) {
        (SqlValue::Null, SqlValue::Null) => Some(true),
        (SqlValue::Null, _) | (_, SqlValue::Null) => Some(false),
        (SqlValue::String(text), SqlValue::String(pattern)) => match cache.get(pattern) {
            Ok(regex) => Some(regex.is_match(text)),
            Err(err) => {
                trace!("REGEXP pattern {pattern:?} does not compile: {err}");
                None
            }
        },
        _ => None,
    }
}

/// Behaviour that varies between databases
pub trait Platform: Send + Sync {
    /// Platform name used in logs and listings
    fn name(&self) -> &str;

    /// Configuration the platform was created with
    fn config(&self) -> &OperatorConfig;

    /// Whether operators that cannot bind parameters disable binding for the whole call
    fn is_dynamic_sql_required_for_functions(&self) -> bool {
        self.config().dynamic_sql_for_functions
    }

    /// How fragment and argument counts are checked when printing
    fn fragment_validation(&self) -> FragmentValidation {
        self.config().fragment_validation
    }

    /// Delimit a table alias or identifier
    fn delimit_identifier(&self, identifier: &str) -> String {
        identifier.to_string()
    }

    /// Evaluate `value REGEXP pattern` in memory; `None` when not possible
    fn conform_regexp(&self, value: &SqlValue, pattern: &SqlValue) -> Option<bool>;

    /// Contribute operator overrides and names to a catalog
    fn register_operators(&self, _builder: &mut CatalogBuilder) {}
}

/// Platform with standard SQL printing and no operator overrides
#[derive(Debug)]
pub struct GenericPlatform {
    name: String,
    config: OperatorConfig,
    delimiters: Option<(String, String)>,
    regex_cache: RegexCache,
}

impl GenericPlatform {
    /// Create a generic platform from a configuration
    pub fn new(config: OperatorConfig) -> Self {
        Self {
            name: "generic".to_string(),
            regex_cache: RegexCache::new(config.regex_cache_size),
            delimiters: None,
            config,
        }
    }

    /// Rename the platform
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Delimit identifiers with the given start and end strings
    pub fn with_delimiters(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.delimiters = Some((start.into(), end.into()));
        self
    }

    /// Compiled pattern cache
    pub fn regex_cache(&self) -> &RegexCache {
        &self.regex_cache
    }
}

impl Default for GenericPlatform {
    fn default() -> Self {
        Self::new(OperatorConfig::default())
    }
}

impl Platform for GenericPlatform {
    fn name(&self) -> &str {
        &self.name
    }

    fn config(&self) -> &OperatorConfig {
        &self.config
    }

    fn delimit_identifier(&self, identifier: &str) -> String {
        match &self.delimiters {
            Some((start, end)) => format!("{start}{identifier}{end}"),
            None => identifier.to_string(),
        }
    }

    fn conform_regexp(&self, value: &SqlValue, pattern: &SqlValue) -> Option<bool> {
        conform_regexp_with(&self.regex_cache, value, pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regexp_is_full_match() {
        let platform = GenericPlatform::default();
        let text = SqlValue::from("abc123");
        assert_eq!(platform.conform_regexp(&text, &SqlValue::from("[a-z]+[0-9]+")), Some(true));
        assert_eq!(platform.conform_regexp(&text, &SqlValue::from("[a-z]+")), Some(false));
    }

    #[test]
    fn test_regexp_nulls_and_invalid_patterns() {
        let platform = GenericPlatform::default();
        assert_eq!(platform.conform_regexp(&SqlValue::Null, &SqlValue::Null), Some(true));
        assert_eq!(platform.conform_regexp(&SqlValue::Null, &SqlValue::from("a")), Some(false));
        assert_eq!(platform.conform_regexp(&SqlValue::from("a"), &SqlValue::from("(")), None);
        assert_eq!(platform.conform_regexp(&SqlValue::Integer(1), &SqlValue::from("1")), None);
    }

    #[test]
    fn test_regex_cache_is_bounded() {
        let cache = RegexCache::new(2);
        for pattern in ["a", "b", "c"] {
            cache.get(pattern).unwrap();
        }
        assert_eq!(cache.len(), 2);

        let disabled = RegexCache::new(0);
        assert!(disabled.get("a+").unwrap().is_match("aaa"));
        assert!(disabled.is_empty());
    }

    #[test]
    fn test_platform_settings_follow_config() {
        let platform = GenericPlatform::new(OperatorConfig::strict()).with_delimiters("\"", "\"");
        assert!(platform.is_dynamic_sql_required_for_functions());
        assert_eq!(platform.fragment_validation(), FragmentValidation::Strict);
        assert_eq!(platform.delimit_identifier("t0"), "\"t0\"");
        assert_eq!(GenericPlatform::default().delimit_identifier("t0"), "t0");
    }
}
