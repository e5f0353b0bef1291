//! Doxygen XML entity extraction and lexical search.
//!
//! [`parse`] turns a Doxygen XML output directory into a flat list of typed
//! [`Entity`] values. A [`SearchEngine`] loaded with those entities ranks them
//! against query terms.

pub mod config;
pub mod doxygen;
pub mod entity;
pub mod error;
pub mod search;
pub mod tracing;
pub mod types;

pub use config::{ParseOptions, SearchConfig, SearchOptions};
pub use doxygen::{ParseError, ParseMetadata, ParseResult, Severity, parse};
pub use entity::{
    BaseClass, ClassDetails, Entity, EntityDetails, EnumDetails, EnumValue, FunctionDetails,
    MemberReference, NamespaceDetails, Parameter,
};
pub use error::{ConfigError, DoxygenError, SearchError};
pub use search::{
    EngineKind, Field, FieldMatch, Highlight, MatchType, SearchEngine, SearchOutcome, SearchQuery,
    SearchResult, SearchStats, SearchStrategy,
};
pub use types::{EntityKind, Visibility};
