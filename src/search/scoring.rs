//! Field-level match scoring shared by the lexical engines.

use rapidfuzz::distance::levenshtein;
use serde::Serialize;

/// Score of an exact field match.
pub const EXACT_SCORE: f64 = 1.0;
/// Score of a prefix field match.
pub const PREFIX_SCORE: f64 = 0.9;
/// Lowest score a substring match can reach (match at the very end of the field).
pub const SUBSTRING_BASE: f64 = 0.5;
/// Span added to [`SUBSTRING_BASE`] as the match moves towards the start of the field.
pub const SUBSTRING_RANGE: f64 = 0.3;

/// How a field matched the query term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Exact,
    Prefix,
    Substring,
    Fuzzy,
    Semantic,
}

/// A scored match of the term inside one folded field value.
///
/// `start` and `length` count chars of the folded field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TierMatch {
    pub match_type: MatchType,
    pub score: f64,
    pub start: usize,
    pub length: usize,
}

/// Tiered lexical match: exact, then prefix, then substring.
///
/// Both arguments must already be folded the same way. With `exact_only` only
/// the first tier is tried.
pub(crate) fn score_field(field: &str, term: &str, exact_only: bool) -> Option<TierMatch> {
    let term_len = term.chars().count();

    if field == term {
        return Some(TierMatch {
            match_type: MatchType::Exact,
            score: EXACT_SCORE,
            start: 0,
            length: term_len,
        });
    }
    if exact_only || term.is_empty() {
        return None;
    }

    if field.starts_with(term) {
        return Some(TierMatch {
            match_type: MatchType::Prefix,
            score: PREFIX_SCORE,
            start: 0,
            length: term_len,
        });
    }

    let byte_pos = field.find(term)?;
    let position = field[..byte_pos].chars().count();
    let field_len = field.chars().count();
    Some(TierMatch {
        match_type: MatchType::Substring,
        score: substring_score(position, field_len),
        start: position,
        length: term_len,
    })
}

/// `0.5 + 0.3 × (1 − position / field_len)`: earlier matches score higher.
pub(crate) fn substring_score(position: usize, field_len: usize) -> f64 {
    if field_len == 0 {
        return SUBSTRING_BASE;
    }
    SUBSTRING_BASE + SUBSTRING_RANGE * (1.0 - position as f64 / field_len as f64)
}

/// Best approximate occurrence of a term inside a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct WindowMatch {
    /// Normalized edit distance in `[0, 1]`.
    pub distance: f64,
    pub start: usize,
    pub length: usize,
}

/// Finds the term-length window of `field` closest to `term` by normalized
/// Levenshtein distance. Fields shorter than the term are compared whole.
///
/// Returns `None` only when the term is empty.
pub(crate) fn best_window(field: &[char], term: &[char]) -> Option<WindowMatch> {
    if term.is_empty() {
        return None;
    }
    if field.len() <= term.len() {
        return Some(WindowMatch {
            distance: levenshtein::normalized_distance(field.iter().copied(), term.iter().copied()),
            start: 0,
            length: field.len(),
        });
    }

    let mut best: Option<WindowMatch> = None;
    for (start, window) in field.windows(term.len()).enumerate() {
        let distance = levenshtein::normalized_distance(window.iter().copied(), term.iter().copied());
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(WindowMatch {
                distance,
                start,
                length: term.len(),
            });
            if distance == 0.0 {
                break;
            }
        }
    }
    best
}
