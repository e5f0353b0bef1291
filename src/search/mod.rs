//! Lexical search and ranking over an entity snapshot.
//!
//! Engines share one [`SearchStrategy`] interface and are selected through
//! [`SearchEngine`]. A search never mutates the engine; its statistics come
//! back in the same [`SearchOutcome`] as its results.

pub mod engine;
pub mod fuzzy;
pub mod highlight;
pub(crate) mod index;
pub mod query;
pub mod result;
pub mod scoring;
pub mod semantic;
pub mod simple;

pub use engine::{EngineKind, SearchEngine, SearchStrategy, UnknownEngine};
pub use fuzzy::FuzzyEngine;
pub use highlight::Highlight;
pub use query::SearchQuery;
pub use result::{Field, FieldMatch, SearchOutcome, SearchResult, SearchStats};
pub use scoring::MatchType;
pub use semantic::SemanticEngine;
pub use simple::SimpleEngine;
