//! Highlight spans with a short surrounding context.

use super::result::Field;
use serde::Serialize;

/// Chars of context kept on each side of a highlighted span.
pub const CONTEXT_RADIUS: usize = 40;

const ELLIPSIS: &str = "...";

/// A matched span inside one field of an entity.
///
/// `start` and `length` count chars of the original field text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub field: Field,
    pub start: usize,
    pub length: usize,
    /// The span with up to [`CONTEXT_RADIUS`] chars on each side, marked with
    /// `...` where the field text was clipped.
    pub context: String,
}

impl Highlight {
    pub(crate) fn new(field: Field, text: &str, start: usize, length: usize) -> Self {
        Self {
            field,
            start,
            length,
            context: context_window(text, start, length),
        }
    }
}

fn context_window(text: &str, start: usize, length: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let from = start.saturating_sub(CONTEXT_RADIUS).min(chars.len());
    let to = (start + length + CONTEXT_RADIUS).min(chars.len());

    let mut context = String::new();
    if from > 0 {
        context.push_str(ELLIPSIS);
    }
    context.extend(&chars[from..to.max(from)]);
    if to < chars.len() {
        context.push_str(ELLIPSIS);
    }
    context
}
