//! Approximate lexical engine tolerant to typos.
//!
//! Each indexed field is compared against the term by normalized Levenshtein
//! distance over term-length windows. A field matches when its distance is
//! within the configured threshold; an entity's distance is the weighted mean
//! of its field distances, with unmatched fields counting as 1.

use super::engine::{EngineKind, SearchStrategy};
use super::highlight::Highlight;
use super::index::FuzzyIndex;
use super::query::{FoldedText, SearchQuery};
use super::result::{Field, FieldMatch, SearchOutcome, SearchResult};
use super::scoring::MatchType;
use crate::config::{FuzzyWeights, SearchConfig, SearchOptions};
use crate::entity::Entity;
use crate::error::SearchError;
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct FuzzyEngine {
    config: SearchConfig,
    entities: Vec<Entity>,
    /// `None` until entities are loaded.
    index: Option<FuzzyIndex>,
}

impl FuzzyEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            entities: Vec::new(),
            index: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.index.is_some()
    }

    /// Distance threshold in effect; exact-match mode only admits perfect matches.
    fn threshold(&self) -> f64 {
        if self.config.exact_match {
            0.0
        } else {
            self.config.fuzzy_threshold
        }
    }

    fn rebuild_index(&mut self) {
        self.index = Some(FuzzyIndex::build(
            &self.entities,
            self.config.case_sensitive,
            self.config.include_descriptions,
        ));
    }

    fn score_entity<'a>(
        &self,
        index: &FuzzyIndex,
        position: usize,
        entity: &'a Entity,
        term: &[char],
    ) -> Option<SearchResult<'a>> {
        let threshold = self.threshold();
        let weights = &self.config.fuzzy_weights;
        let mut weighted_distance = 0.0;
        let mut total_weight = 0.0;
        let mut matched_fields = Vec::new();
        let mut highlights = Vec::new();

        for indexed in index.fields(position) {
            let weight = field_weight(weights, indexed.field);
            total_weight += weight;

            let Some(window) = indexed.best_window(term).filter(|w| w.distance <= threshold) else {
                weighted_distance += weight;
                continue;
            };

            weighted_distance += weight * window.distance;
            matched_fields.push(FieldMatch {
                field_name: indexed.field,
                match_type: MatchType::Fuzzy,
                score: 1.0 - window.distance,
            });
            if self.config.highlight
                && let Some(text) = indexed.field.value(entity)
            {
                let (start, length) = indexed.folded.original_span(window.start, window.length);
                highlights.push(Highlight::new(indexed.field, text, start, length));
            }
        }

        if matched_fields.is_empty() {
            return None;
        }
        let distance = if total_weight > 0.0 {
            weighted_distance / total_weight
        } else {
            0.0
        };
        Some(SearchResult {
            entity,
            relevance: (1.0 - distance).clamp(0.0, 1.0),
            matched_fields,
            highlights: self.config.highlight.then_some(highlights),
        })
    }
}

fn field_weight(weights: &FuzzyWeights, field: Field) -> f64 {
    match field {
        Field::Name => weights.name,
        Field::QualifiedName => weights.qualified_name,
        Field::BriefDescription => weights.brief_description,
    }
}

impl SearchStrategy for FuzzyEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Fuzzy
    }

    fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn configure(&mut self, options: &SearchOptions) {
        let before = (self.config.case_sensitive, self.config.include_descriptions);
        self.config.merge(options);
        let after = (self.config.case_sensitive, self.config.include_descriptions);
        if before != after && self.index.is_some() {
            tracing::debug!("Rebuilding fuzzy index after configuration change");
            self.rebuild_index();
        }
    }

    fn load_entities(&mut self, entities: Vec<Entity>) {
        self.entities = entities;
        self.rebuild_index();
    }

    fn search(&self, query: &SearchQuery) -> Result<SearchOutcome<'_>, SearchError> {
        let started = Instant::now();
        let index = self.index.as_ref().ok_or(SearchError::EngineNotLoaded {
            engine: EngineKind::Fuzzy,
        })?;

        let candidates: Vec<(usize, &Entity)> = self
            .entities
            .iter()
            .enumerate()
            .filter(|(_, entity)| query.accepts(entity))
            .collect();
        let cap = query.result_cap(self.config.max_results);

        let Some(term) = query.effective_term() else {
            tracing::debug!("Blank search term matches nothing");
            return Ok(SearchOutcome::ranked(Vec::new(), candidates.len(), cap, started));
        };
        let term: Vec<char> = FoldedText::new(term, index.case_sensitive()).text.chars().collect();

        let matches: Vec<SearchResult<'_>> = candidates
            .iter()
            .filter_map(|&(position, entity)| self.score_entity(index, position, entity, &term))
            .collect();

        let outcome = SearchOutcome::ranked(matches, candidates.len(), cap, started);
        tracing::debug!(
            "Fuzzy search (threshold {}) matched {} of {} entities, returning {}",
            self.threshold(),
            outcome.stats.matched_entities,
            outcome.stats.total_entities,
            outcome.stats.returned_results
        );
        Ok(outcome)
    }
}
