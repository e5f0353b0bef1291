//! Approximate-match index built by the fuzzy engine when entities are loaded.

use super::query::FoldedText;
use super::result::Field;
use super::scoring::{WindowMatch, best_window};
use crate::entity::Entity;

/// One folded field value, pre-split into chars for window comparison.
#[derive(Debug, Clone)]
pub(crate) struct IndexedField {
    pub field: Field,
    pub folded: FoldedText,
    pub chars: Vec<char>,
}

impl IndexedField {
    fn new(field: Field, text: &str, case_sensitive: bool) -> Self {
        let folded = FoldedText::new(text, case_sensitive);
        let chars = folded.text.chars().collect();
        Self {
            field,
            folded,
            chars,
        }
    }

    pub(crate) fn best_window(&self, term: &[char]) -> Option<WindowMatch> {
        best_window(&self.chars, term)
    }
}

/// Indexed fields of every loaded entity, in snapshot order.
#[derive(Debug, Clone, Default)]
pub(crate) struct FuzzyIndex {
    entries: Vec<Vec<IndexedField>>,
    case_sensitive: bool,
}

impl FuzzyIndex {
    pub(crate) fn build(entities: &[Entity], case_sensitive: bool, include_descriptions: bool) -> Self {
        let entries = entities
            .iter()
            .map(|entity| {
                Field::ALL
                    .into_iter()
                    .filter(|&field| field != Field::BriefDescription || include_descriptions)
                    .filter_map(|field| {
                        field
                            .value(entity)
                            .filter(|text| !text.is_empty())
                            .map(|text| IndexedField::new(field, text, case_sensitive))
                    })
                    .collect()
            })
            .collect();
        Self {
            entries,
            case_sensitive,
        }
    }

    pub(crate) const fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub(crate) fn fields(&self, position: usize) -> &[IndexedField] {
        self.entries.get(position).map(Vec::as_slice).unwrap_or_default()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
