//! Deterministic lexical engine: exact, prefix and substring tiers per field.

use super::engine::{EngineKind, SearchStrategy};
use super::highlight::Highlight;
use super::query::{FoldedText, SearchQuery};
use super::result::{Field, FieldMatch, SearchOutcome, SearchResult};
use super::scoring::score_field;
use crate::config::{SearchConfig, SearchOptions, SimpleWeights};
use crate::entity::Entity;
use crate::error::SearchError;
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct SimpleEngine {
    config: SearchConfig,
    entities: Vec<Entity>,
}

impl SimpleEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            entities: Vec::new(),
        }
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    fn score_entity<'a>(&self, entity: &'a Entity, term: &str) -> Option<SearchResult<'a>> {
        let mut relevance = 0.0;
        let mut matched_fields = Vec::new();
        let mut highlights = Vec::new();

        for field in Field::ALL {
            if field == Field::BriefDescription && !self.config.include_descriptions {
                continue;
            }
            let Some(text) = field.value(entity) else {
                continue;
            };

            let folded = FoldedText::new(text, self.config.case_sensitive);
            let Some(tier) = score_field(&folded.text, term, self.config.exact_match) else {
                continue;
            };

            relevance += tier.score * field_weight(&self.config.simple_weights, field);
            matched_fields.push(FieldMatch {
                field_name: field,
                match_type: tier.match_type,
                score: tier.score,
            });
            if self.config.highlight {
                let (start, length) = folded.original_span(tier.start, tier.length);
                highlights.push(Highlight::new(field, text, start, length));
            }
        }

        if matched_fields.is_empty() {
            return None;
        }
        Some(SearchResult {
            entity,
            relevance: f64::min(relevance, 1.0),
            matched_fields,
            highlights: self.config.highlight.then_some(highlights),
        })
    }
}

fn field_weight(weights: &SimpleWeights, field: Field) -> f64 {
    match field {
        Field::Name => weights.name,
        Field::QualifiedName => weights.qualified_name,
        Field::BriefDescription => weights.brief_description,
    }
}

impl SearchStrategy for SimpleEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Simple
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
        let started = Instant::now();
        let candidates: Vec<&Entity> = self.entities.iter().filter(|e| query.accepts(e)).collect();
        let cap = query.result_cap(self.config.max_results);

        let Some(term) = query.effective_term() else {
            tracing::debug!("Blank search term matches nothing");
            return Ok(SearchOutcome::ranked(Vec::new(), candidates.len(), cap, started));
        };
        let term = FoldedText::new(term, self.config.case_sensitive).text;

        let matches: Vec<SearchResult<'_>> = candidates
            .iter()
            .filter_map(|entity| self.score_entity(entity, &term))
            .collect();

        let outcome = SearchOutcome::ranked(matches, candidates.len(), cap, started);
        tracing::debug!(
            "Simple search for '{}' matched {} of {} entities, returning {}",
            term,
            outcome.stats.matched_entities,
            outcome.stats.total_entities,
            outcome.stats.returned_results
        );
        Ok(outcome)
    }
}
