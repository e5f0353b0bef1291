//! Typed entity model produced by the extraction pipeline.
//!
//! Every entity carries the same base fields and one kind-specific detail variant.
//! Containers never own their members: a class or namespace lists lightweight
//! [`MemberReference`]s whose ids resolve against the flat entity list of a
//! [`ParseResult`](crate::ParseResult).

use crate::types::{EntityKind, Visibility};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id: String,
    pub name: String,
    pub qualified_name: String,
    pub kind: EntityKind,
    pub file: String,
    pub line: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brief_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_description: Option<String>,
    pub visibility: Visibility,
    pub details: EntityDetails,
}

impl Entity {
    /// Member references for container entities, empty otherwise.
    pub fn members(&self) -> &[MemberReference] {
        match &self.details {
            EntityDetails::Class(class) => &class.members,
            EntityDetails::Namespace(namespace) => &namespace.members,
            EntityDetails::Function(_) | EntityDetails::Enum(_) => &[],
        }
    }

    pub const fn as_class(&self) -> Option<&ClassDetails> {
        match &self.details {
            EntityDetails::Class(class) => Some(class),
            _ => None,
        }
    }

    pub const fn as_function(&self) -> Option<&FunctionDetails> {
        match &self.details {
            EntityDetails::Function(function) => Some(function),
            _ => None,
        }
    }

    pub const fn as_namespace(&self) -> Option<&NamespaceDetails> {
        match &self.details {
            EntityDetails::Namespace(namespace) => Some(namespace),
            _ => None,
        }
    }

    pub const fn as_enum(&self) -> Option<&EnumDetails> {
        match &self.details {
            EntityDetails::Enum(enumeration) => Some(enumeration),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "variant", rename_all = "lowercase")]
pub enum EntityDetails {
    Class(ClassDetails),
    Function(FunctionDetails),
    Namespace(NamespaceDetails),
    Enum(EnumDetails),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDetails {
    pub base_classes: Vec<BaseClass>,
    pub members: Vec<MemberReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_params: Option<Vec<String>>,
    /// True iff any member definition is pure virtual.
    pub is_abstract: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseClass {
    pub name: String,
    pub qualified_name: String,
    pub visibility: Visibility,
    pub is_virtual: bool,
}

/// Weak link from a container to one of its members, resolved by id lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberReference {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub visibility: Visibility,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDetails {
    pub return_type: String,
    pub parameters: Vec<Parameter>,
    pub is_const: bool,
    pub is_static: bool,
    pub is_virtual: bool,
    pub is_inline: bool,
    pub is_pure_virtual: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_params: Option<Vec<String>>,
    /// Qualified name of the owning class; only set for methods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Exception specifications are not extracted; this stays `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exceptions: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceDetails {
    pub members: Vec<MemberReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_namespace: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumDetails {
    pub values: Vec<EnumValue>,
    pub is_strong: bool,
    /// Omitted when the source leaves the type blank (language default applies).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underlying_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
