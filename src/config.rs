//! Parse and search options, decodable from TOML.
//!
//! Discovering where configuration lives is left to the embedding application;
//! this module only decodes text or an explicitly named file.

use crate::error::ConfigError;
use crate::types::EntityKind;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default cap on results returned by a search.
pub const DEFAULT_MAX_RESULTS: usize = 50;

/// Default fuzzy distance threshold (0 = perfect match only, 1 = match anything).
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.4;

/// Options for a single parse run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ParseOptions {
    /// Only extract these entity kinds. `None` keeps every kind.
    pub entity_kinds: Option<Vec<EntityKind>>,
    pub include_private: bool,
    /// Reserved; parsing does not enforce a timeout.
    pub timeout_ms: Option<u64>,
}

impl ParseOptions {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub(crate) fn wants_kind(&self, kind: EntityKind) -> bool {
        self.entity_kinds
            .as_ref()
            .is_none_or(|kinds| kinds.contains(&kind))
    }
}

/// Per-field weights applied by the simple engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleWeights {
    pub name: f64,
    pub qualified_name: f64,
    pub brief_description: f64,
}

impl Default for SimpleWeights {
    fn default() -> Self {
        Self {
            name: 1.0,
            qualified_name: 0.8,
            brief_description: 0.3,
        }
    }
}

/// Per-field weights applied by the fuzzy engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyWeights {
    pub name: f64,
    pub qualified_name: f64,
    pub brief_description: f64,
}

impl Default for FuzzyWeights {
    fn default() -> Self {
        Self {
            name: 0.5,
            qualified_name: 0.3,
            brief_description: 0.2,
        }
    }
}

/// Complete search engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub case_sensitive: bool,
    /// Only the exact-equality tier may match.
    pub exact_match: bool,
    pub max_results: usize,
    pub highlight: bool,
    pub include_descriptions: bool,
    pub fuzzy_threshold: f64,
    /// Reserved; searches do not enforce a timeout.
    pub timeout_ms: Option<u64>,
    pub simple_weights: SimpleWeights,
    pub fuzzy_weights: FuzzyWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            exact_match: false,
            max_results: DEFAULT_MAX_RESULTS,
            highlight: true,
            include_descriptions: true,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            timeout_ms: None,
            simple_weights: SimpleWeights::default(),
            fuzzy_weights: FuzzyWeights::default(),
        }
    }
}

impl SearchConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Overlays every option that is set onto this configuration.
    pub fn merge(&mut self, options: &SearchOptions) {
        if let Some(case_sensitive) = options.case_sensitive {
            self.case_sensitive = case_sensitive;
        }
        if let Some(exact_match) = options.exact_match {
            self.exact_match = exact_match;
        }
        if let Some(max_results) = options.max_results {
            self.max_results = max_results;
        }
        if let Some(highlight) = options.highlight {
            self.highlight = highlight;
        }
        if let Some(include_descriptions) = options.include_descriptions {
            self.include_descriptions = include_descriptions;
        }
        if let Some(threshold) = options.fuzzy_threshold {
            self.fuzzy_threshold = threshold.clamp(0.0, 1.0);
        }
        if let Some(timeout_ms) = options.timeout_ms {
            tracing::warn!(
                "timeout_ms={} is reserved and not enforced by search engines",
                timeout_ms
            );
            self.timeout_ms = Some(timeout_ms);
        }
        if let Some(weights) = options.simple_weights {
            self.simple_weights = weights;
        }
        if let Some(weights) = options.fuzzy_weights {
            self.fuzzy_weights = weights;
        }
    }
}

/// A partial configuration: only the fields that are `Some` are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub case_sensitive: Option<bool>,
    pub exact_match: Option<bool>,
    pub max_results: Option<usize>,
    pub highlight: Option<bool>,
    pub include_descriptions: Option<bool>,
    pub fuzzy_threshold: Option<f64>,
    pub timeout_ms: Option<u64>,
    pub simple_weights: Option<SimpleWeights>,
    pub fuzzy_weights: Option<FuzzyWeights>,
}

impl SearchOptions {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

/// Loads a [`SearchConfig`] from an explicit TOML file path.
pub fn load_search_config(path: &Path) -> anyhow::Result<SearchConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read search config at {}", path.display()))?;
    SearchConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to parse search config at {}", path.display()))
}
