//! The value handed from the extraction pipeline to its consumers.

use crate::entity::Entity;
use ahash::AHashMap;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// A recoverable failure recorded during a parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseError {
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseMetadata {
    pub version: String,
    /// XML documents present in the input directory.
    pub total_files: usize,
    /// Compound documents processed after filtering.
    pub processed_files: usize,
    pub total_entities: usize,
    pub elapsed_ms: u64,
    /// Always false: parse results are never cached.
    pub cache_used: bool,
}

/// Entities extracted from one Doxygen directory, plus metadata and recorded errors.
///
/// Entities form a flat list; containers and their members are interleaved
/// (container first) and linked only through [`MemberReference`](crate::MemberReference) ids.
#[derive(Debug, Clone, Serialize)]
pub struct ParseResult {
    entities: Vec<Entity>,
    pub metadata: ParseMetadata,
    pub errors: Vec<ParseError>,
    #[serde(skip)]
    by_id: AHashMap<String, usize>,
}

impl ParseResult {
    pub(crate) fn new(entities: Vec<Entity>, metadata: ParseMetadata, errors: Vec<ParseError>) -> Self {
        let by_id = entities
            .iter()
            .enumerate()
            .map(|(index, entity)| (entity.id.clone(), index))
            .collect();
        Self {
            entities,
            metadata,
            errors,
            by_id,
        }
    }

    /// Extracted entities in index order; containers precede their members.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Looks up an entity by id.
    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.by_id
            .get(id)
            .and_then(|&index| self.entities.get(index))
            .filter(|entity| entity.id == id)
    }

    /// Resolves a container's member references to the members that were extracted.
    ///
    /// References to members filtered out of this result are skipped.
    pub fn members_of<'a>(&'a self, container: &'a Entity) -> impl Iterator<Item = &'a Entity> + 'a {
        container
            .members()
            .iter()
            .filter_map(|member| self.entity(&member.id))
    }

    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(|e| e.severity == Severity::Error)
    }

    /// Consumes the result, keeping only the entity list (e.g. to load a search engine).
    pub fn into_entities(self) -> Vec<Entity> {
        self.entities
    }
}
