//! The search strategy interface and the closed set of engines behind it.

use super::fuzzy::FuzzyEngine;
use super::query::SearchQuery;
use super::result::SearchOutcome;
use super::semantic::SemanticEngine;
use super::simple::SimpleEngine;
use crate::config::{SearchConfig, SearchOptions};
use crate::entity::Entity;
use crate::error::SearchError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    #[default]
    Simple,
    Fuzzy,
    Semantic,
}

impl EngineKind {
    pub const ALL: [Self; 3] = [Self::Simple, Self::Fuzzy, Self::Semantic];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Fuzzy => "fuzzy",
            Self::Semantic => "semantic",
        }
    }
}

impl Display for EngineKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search engine '{0}' (expected simple, fuzzy or semantic)")]
pub struct UnknownEngine(pub String);

impl FromStr for EngineKind {
    type Err = UnknownEngine;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownEngine(s.to_string()))
    }
}

/// Operations every search engine supports.
pub trait SearchStrategy {
    fn kind(&self) -> EngineKind;

    fn config(&self) -> &SearchConfig;

    /// Overlays the options that are set onto the current configuration.
    fn configure(&mut self, options: &SearchOptions);

    /// Replaces the entity snapshot searched by later calls.
    fn load_entities(&mut self, entities: Vec<Entity>);

    /// Runs one query against the loaded snapshot.
    ///
    /// Statistics for this call are returned with its results.
    fn search(&self, query: &SearchQuery) -> Result<SearchOutcome<'_>, SearchError>;
}

/// A search engine selected by [`EngineKind`].
#[derive(Debug, Clone)]
pub enum SearchEngine {
    Simple(SimpleEngine),
    Fuzzy(FuzzyEngine),
    Semantic(SemanticEngine),
}

impl SearchEngine {
    pub fn new(kind: EngineKind) -> Self {
        Self::with_config(kind, SearchConfig::default())
    }

    pub fn with_config(kind: EngineKind, config: SearchConfig) -> Self {
        match kind {
            EngineKind::Simple => Self::Simple(SimpleEngine::new(config)),
            EngineKind::Fuzzy => Self::Fuzzy(FuzzyEngine::new(config)),
            EngineKind::Semantic => Self::Semantic(SemanticEngine::new(config)),
        }
    }

    fn strategy(&self) -> &dyn SearchStrategy {
        match self {
            Self::Simple(engine) => engine,
            Self::Fuzzy(engine) => engine,
            Self::Semantic(engine) => engine,
        }
    }

    fn strategy_mut(&mut self) -> &mut dyn SearchStrategy {
        match self {
            Self::Simple(engine) => engine,
            Self::Fuzzy(engine) => engine,
            Self::Semantic(engine) => engine,
        }
    }
}

impl SearchStrategy for SearchEngine {
    fn kind(&self) -> EngineKind {
        self.strategy().kind()
    }

    fn config(&self) -> &SearchConfig {
        self.strategy().config()
    }

    fn configure(&mut self, options: &SearchOptions) {
        self.strategy_mut().configure(options);
    }

    fn load_entities(&mut self, entities: Vec<Entity>) {
        tracing::debug!("Loading {} entities into {} engine", entities.len(), self.kind());
        self.strategy_mut().load_entities(entities);
    }

    fn search(&self, query: &SearchQuery) -> Result<SearchOutcome<'_>, SearchError> {
        self.strategy().search(query)
    }
}
