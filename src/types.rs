//! Symbol kind and visibility enums shared by the extraction pipeline and the search engines.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Class,
    Struct,
    Function,
    Method,
    Namespace,
    Enum,
    Typedef,
    Variable,
    Define,
}

impl EntityKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Function => "function",
            Self::Method => "method",
            Self::Namespace => "namespace",
            Self::Enum => "enum",
            Self::Typedef => "typedef",
            Self::Variable => "variable",
            Self::Define => "define",
        }
    }

    /// Class and struct entities act as method owners.
    pub const fn is_record(self) -> bool {
        matches!(self, Self::Class | Self::Struct)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a kind string names no known entity kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown entity kind '{0}'")]
pub struct UnknownKind(pub String);

impl FromStr for EntityKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "class" => Ok(Self::Class),
            "struct" => Ok(Self::Struct),
            "function" => Ok(Self::Function),
            "method" => Ok(Self::Method),
            "namespace" => Ok(Self::Namespace),
            "enum" => Ok(Self::Enum),
            "typedef" => Ok(Self::Typedef),
            "variable" => Ok(Self::Variable),
            "define" => Ok(Self::Define),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

/// Entity kinds that a compound of the given Doxygen kind can contribute.
///
/// Compounds whose kind is not listed contribute nothing under a kind filter.
pub fn compound_entity_kinds(compound_kind: &str) -> &'static [EntityKind] {
    match compound_kind {
        "class" => &[EntityKind::Class, EntityKind::Method, EntityKind::Enum],
        "struct" => &[EntityKind::Struct, EntityKind::Method, EntityKind::Enum],
        "namespace" => &[
            EntityKind::Namespace,
            EntityKind::Function,
            EntityKind::Enum,
        ],
        "file" => &[EntityKind::Function, EntityKind::Enum],
        "enum" => &[EntityKind::Enum],
        _ => &[],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    /// Reads a Doxygen `prot` attribute. Absent or unrecognised values resolve to public.
    pub fn from_prot(prot: Option<&str>) -> Self {
        match prot {
            Some("protected") => Self::Protected,
            Some("private") => Self::Private,
            _ => Self::Public,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }
}

/// Splits a `::`-scoped name at its rightmost separator and returns the enclosing scope.
///
/// - `ns::inner::Widget` → `Some("ns::inner")`
/// - `Widget` → `None`
pub fn enclosing_scope(qualified_name: &str) -> Option<&str> {
    qualified_name
        .rfind("::")
        .map(|index| &qualified_name[..index])
}

/// Returns the last `::` segment of a scoped name.
pub fn simple_name(qualified_name: &str) -> &str {
    qualified_name
        .rfind("::")
        .map_or(qualified_name, |index| &qualified_name[index + 2..])
}
