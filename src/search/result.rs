//! Values returned by a search: ranked results plus statistics.

use super::highlight::Highlight;
use super::scoring::MatchType;
use crate::entity::Entity;
use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// An entity field the lexical engines score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    QualifiedName,
    BriefDescription,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Name, Self::QualifiedName, Self::BriefDescription];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::QualifiedName => "qualifiedName",
            Self::BriefDescription => "briefDescription",
        }
    }

    /// The field's text on an entity, if it has one.
    pub fn value(self, entity: &Entity) -> Option<&str> {
        match self {
            Self::Name => Some(&entity.name),
            Self::QualifiedName => Some(&entity.qualified_name),
            Self::BriefDescription => entity.brief_description.as_deref(),
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMatch {
    pub field_name: Field,
    pub match_type: MatchType,
    pub score: f64,
}

/// One ranked hit, borrowing the entity from the engine's snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<'a> {
    pub entity: &'a Entity,
    /// In `[0, 1]`; higher is better.
    pub relevance: f64,
    pub matched_fields: Vec<FieldMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<Highlight>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    /// Entities considered after the kind filter.
    pub total_entities: usize,
    /// Entities with at least one matched field.
    pub matched_entities: usize,
    /// Results left after the result cap.
    pub returned_results: usize,
    pub elapsed_ms: u64,
    /// Always false: searches are never cached.
    pub cache_used: bool,
}

/// Results of one search together with the statistics of that same call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome<'a> {
    pub results: Vec<SearchResult<'a>>,
    pub stats: SearchStats,
}

impl<'a> SearchOutcome<'a> {
    /// Sorts matches by descending relevance, keeping snapshot order on ties,
    /// then applies the result cap and fills in the stats.
    pub(crate) fn ranked(
        mut matches: Vec<SearchResult<'a>>,
        considered: usize,
        cap: usize,
        started: std::time::Instant,
    ) -> Self {
        let matched = matches.len();
        // sort_by is stable
        matches.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));
        matches.truncate(cap);
        let stats = SearchStats {
            total_entities: considered,
            matched_entities: matched,
            returned_results: matches.len(),
            elapsed_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            cache_used: false,
        };
        Self {
            results: matches,
            stats,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }
}
