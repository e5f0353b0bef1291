//! Query description and case folding shared by the engines.

use crate::entity::Entity;
use crate::types::EntityKind;
use serde::{Deserialize, Serialize};

/// One search request against a loaded engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub term: String,
    /// Only consider entities of these kinds. `None` considers every entity.
    #[serde(default)]
    pub kinds: Option<Vec<EntityKind>>,
    /// Per-query result cap; the engine's `max_results` still applies.
    #[serde(default)]
    pub limit: Option<usize>,
}

impl SearchQuery {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_kinds(mut self, kinds: impl IntoIterator<Item = EntityKind>) -> Self {
        self.kinds = Some(kinds.into_iter().collect());
        self
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The term with surrounding whitespace removed, or `None` when nothing is left.
    ///
    /// A blank term matches no entity.
    pub fn effective_term(&self) -> Option<&str> {
        let term = self.term.trim();
        (!term.is_empty()).then_some(term)
    }

    pub(crate) fn accepts(&self, entity: &Entity) -> bool {
        self.kinds
            .as_ref()
            .is_none_or(|kinds| kinds.contains(&entity.kind))
    }

    /// Smaller of the per-query limit and the engine maximum.
    pub(crate) fn result_cap(&self, max_results: usize) -> usize {
        self.limit.map_or(max_results, |limit| limit.min(max_results))
    }
}

/// Text folded for comparison, remembering where each folded char came from.
///
/// Terms and field values are both folded through this type so they follow the
/// same per-char rule. Folding can expand one char into several (`İ` → `i̇`), so
/// positions in the folded text are mapped back through `origin` before they are
/// reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FoldedText {
    pub text: String,
    /// Original char index of each folded char.
    pub origin: Vec<usize>,
}

impl FoldedText {
    pub(crate) fn new(text: &str, case_sensitive: bool) -> Self {
        let mut folded = String::with_capacity(text.len());
        let mut origin = Vec::with_capacity(text.len());
        for (index, c) in text.chars().enumerate() {
            if case_sensitive {
                folded.push(c);
                origin.push(index);
            } else {
                for lower in c.to_lowercase() {
                    folded.push(lower);
                    origin.push(index);
                }
            }
        }
        Self {
            text: folded,
            origin,
        }
    }

    pub(crate) fn char_len(&self) -> usize {
        self.origin.len()
    }

    /// Maps a span of folded chars to `(start, length)` in original chars.
    pub(crate) fn original_span(&self, start: usize, length: usize) -> (usize, usize) {
        if length == 0 || start >= self.origin.len() {
            return (self.origin.get(start).copied().unwrap_or(start), 0);
        }
        let last = (start + length - 1).min(self.origin.len() - 1);
        let original_start = self.origin[start];
        (original_start, self.origin[last] + 1 - original_start)
    }
}
