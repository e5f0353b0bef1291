//! Placeholder for embedding-based search. Every search fails loudly.

use super::engine::{EngineKind, SearchStrategy};
use super::query::SearchQuery;
use super::result::SearchOutcome;
use crate::config::{SearchConfig, SearchOptions};
use crate::entity::Entity;
use crate::error::SearchError;

#[derive(Debug, Clone, Default)]
pub struct SemanticEngine {
    config: SearchConfig,
    entities: Vec<Entity>,
}

impl SemanticEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            entities: Vec::new(),
        }
    }
}

impl SearchStrategy for SemanticEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Semantic
    }

    fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn configure(&mut self, options: &SearchOptions) {
        self.config.merge(options);
    }

    fn load_entities(&mut self, entities: Vec<Entity>) {
        self.entities = entities;
    }

    fn search(&self, query: &SearchQuery) -> Result<SearchOutcome<'_>, SearchError> {
        tracing::warn!(
            "Semantic search requested for '{}' over {} entities but is not implemented",
            query.term,
            self.entities.len()
        );
        Err(SearchError::NotImplemented {
            engine: EngineKind::Semantic,
        })
    }
}
