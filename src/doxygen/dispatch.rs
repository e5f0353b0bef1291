//! Selection of the entity builder for a Doxygen kind discriminator.

use super::builders;
use super::schema::RawDef;
use crate::entity::Entity;
use crate::error::{DoxygenError, Result};

/// The closed set of entity builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Builder {
    Class,
    Function,
    Namespace,
    Enum,
}

/// Kind discriminator → builder.
const BUILDERS: &[(&str, Builder)] = &[
    ("class", Builder::Class),
    ("struct", Builder::Class),
    ("function", Builder::Function),
    ("namespace", Builder::Namespace),
    ("enum", Builder::Enum),
];

impl Builder {
    /// Looks up the builder for a `kind` attribute value.
    pub(crate) fn for_kind(kind: &str) -> Result<Self> {
        BUILDERS
            .iter()
            .find(|(name, _)| *name == kind)
            .map(|(_, builder)| *builder)
            .ok_or_else(|| DoxygenError::UnsupportedKind {
                kind: kind.to_string(),
            })
    }

    /// Builds the entity for `def`, with `parent` as the enclosing container if any.
    pub(crate) fn build(self, def: &RawDef, parent: Option<&Entity>) -> Result<Entity> {
        match self {
            Self::Class => builders::build_class(def, parent),
            Self::Function => builders::build_function(def, parent),
            Self::Namespace => builders::build_namespace(def, parent),
            Self::Enum => builders::build_enum(def, parent),
        }
    }
}
