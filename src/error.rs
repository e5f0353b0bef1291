//! Error handling types and utilities.

use crate::search::EngineKind;
use std::path::PathBuf;

/// A specialized Result type for extraction pipeline operations.
pub type Result<T, E = DoxygenError> = std::result::Result<T, E>;

/// Errors raised while reading and interpreting a Doxygen XML directory.
///
/// Directory, index and top-level read failures abort a parse. The remaining
/// variants describe a single compound or member and end up as recorded
/// [`ParseError`](crate::ParseError)s instead.
#[derive(Debug, thiserror::Error)]
pub enum DoxygenError {
    #[error("Directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid Doxygen XML directory {}: {reason}", path.display())]
    InvalidStructure { path: PathBuf, reason: String },

    #[error("Malformed index document {}: {reason}", path.display())]
    MalformedIndex { path: PathBuf, reason: String },

    #[error("Malformed compound document {}: {reason}", path.display())]
    MalformedDocument { path: PathBuf, reason: String },

    #[error("<{element}> is missing its '{attribute}' attribute")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    #[error("Unsupported entity kind '{kind}'")]
    UnsupportedKind { kind: String },
}

/// Errors raised by a search engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("The {engine} engine has no entities loaded; call load_entities first")]
    EngineNotLoaded { engine: EngineKind },

    #[error("The {engine} engine is not implemented")]
    NotImplemented { engine: EngineKind },
}

/// Error returned when options cannot be decoded from TOML.
#[derive(Debug, thiserror::Error)]
#[error("Invalid configuration: {0}")]
pub struct ConfigError(#[from] pub toml::de::Error);
