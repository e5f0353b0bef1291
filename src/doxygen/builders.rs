//! Entity builders: one per entity variant, sharing the base-field extraction.

use super::schema::{RawDef, RawEnumValue};
use crate::entity::{
    BaseClass, ClassDetails, EntityDetails, EnumDetails, EnumValue, Entity, FunctionDetails,
    MemberReference, NamespaceDetails, Parameter,
};
use crate::error::{DoxygenError, Result};
use crate::types::{EntityKind, Visibility, enclosing_scope, simple_name};

/// Virtuality tag Doxygen writes for `= 0` members.
const PURE_VIRTUAL: &str = "pure-virtual";
const VIRTUAL: &str = "virtual";

/// Base fields shared by every entity variant.
struct Base {
    id: String,
    name: String,
    qualified_name: String,
    file: String,
    line: u32,
    brief_description: Option<String>,
    detailed_description: Option<String>,
    visibility: Visibility,
}

impl Base {
    fn into_entity(self, kind: EntityKind, details: EntityDetails) -> Entity {
        Entity {
            id: self.id,
            name: self.name,
            qualified_name: self.qualified_name,
            kind,
            file: self.file,
            line: self.line,
            brief_description: self.brief_description,
            detailed_description: self.detailed_description,
            visibility: self.visibility,
            details,
        }
    }
}

/// Extracts the base fields with their fixed precedence chains.
///
/// - name: simple part of `<compoundname>`, else `<name>`, else empty
/// - qualified name: `<qualifiedname>`, else `<compoundname>`, else `<name>`, else empty
fn build_base(def: &RawDef) -> Result<Base> {
    let id = def.id.clone().ok_or(DoxygenError::MissingAttribute {
        element: def_tag(def),
        attribute: "id",
    })?;

    let name = def
        .compound_name
        .as_deref()
        .map(simple_name)
        .or(def.name.as_deref())
        .unwrap_or_default()
        .to_string();

    let qualified_name = def
        .qualified_name
        .clone()
        .or_else(|| def.compound_name.clone())
        .or_else(|| def.name.clone())
        .unwrap_or_default();

    Ok(Base {
        id,
        name,
        qualified_name,
        file: def.file.clone().unwrap_or_default(),
        line: def.line.unwrap_or_default(),
        brief_description: def.brief.clone(),
        detailed_description: def.detailed.clone(),
        visibility: Visibility::from_prot(def.prot.as_deref()),
    })
}

const fn def_tag(def: &RawDef) -> &'static str {
    if def.compound_name.is_some() {
        "compounddef"
    } else {
        "memberdef"
    }
}

/// Builds a class or struct entity from a compound definition.
pub(crate) fn build_class(def: &RawDef, _parent: Option<&Entity>) -> Result<Entity> {
    let base = build_base(def)?;
    let kind = if def.kind == "struct" {
        EntityKind::Struct
    } else {
        EntityKind::Class
    };

    let base_classes = def
        .base_refs
        .iter()
        .map(|base_ref| {
            let qualified_name = if base_ref.name.is_empty() {
                base_ref.refid.clone().unwrap_or_default()
            } else {
                base_ref.name.clone()
            };
            BaseClass {
                name: simple_name(&base_ref.name).to_string(),
                qualified_name,
                visibility: Visibility::from_prot(base_ref.prot.as_deref()),
                is_virtual: base_ref.virt.as_deref() == Some(VIRTUAL),
            }
        })
        .collect();

    let is_abstract = def
        .member_defs()
        .any(|member| member.virt.as_deref() == Some(PURE_VIRTUAL));

    let details = ClassDetails {
        base_classes,
        members: member_references(def),
        template_params: template_params(def),
        is_abstract,
        namespace: enclosing_scope(&base.qualified_name).map(str::to_string),
    };
    Ok(base.into_entity(kind, EntityDetails::Class(details)))
}

/// Builds a namespace entity from a compound definition.
pub(crate) fn build_namespace(def: &RawDef, _parent: Option<&Entity>) -> Result<Entity> {
    let base = build_base(def)?;
    let details = NamespaceDetails {
        members: member_references(def),
        parent_namespace: enclosing_scope(&base.qualified_name).map(str::to_string),
    };
    Ok(base.into_entity(EntityKind::Namespace, EntityDetails::Namespace(details)))
}

/// Builds an enum entity from an enum member (or compound) definition.
pub(crate) fn build_enum(def: &RawDef, _parent: Option<&Entity>) -> Result<Entity> {
    let base = build_base(def)?;
    let details = EnumDetails {
        values: def.enum_values.iter().map(enum_value).collect(),
        is_strong: def.is_strong,
        underlying_type: def
            .type_text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string),
    };
    Ok(base.into_entity(EntityKind::Enum, EntityDetails::Enum(details)))
}

/// Builds a function entity; it becomes a method when its parent is a class or struct.
pub(crate) fn build_function(def: &RawDef, parent: Option<&Entity>) -> Result<Entity> {
    let base = build_base(def)?;
    let owner = parent.filter(|p| p.kind.is_record());
    let kind = if owner.is_some() {
        EntityKind::Method
    } else {
        EntityKind::Function
    };

    let virt = def.virt.as_deref();
    let details = FunctionDetails {
        return_type: def.type_text.clone().unwrap_or_default(),
        parameters: def
            .params
            .iter()
            .map(|param| Parameter {
                name: param.name.clone().unwrap_or_default(),
                type_name: param.type_text.clone(),
                default_value: param.default_value.clone(),
                description: param.description.clone(),
            })
            .collect(),
        is_const: def.is_const,
        is_static: def.is_static,
        is_virtual: virt == Some(VIRTUAL) || virt == Some(PURE_VIRTUAL),
        is_inline: def.is_inline,
        is_pure_virtual: virt == Some(PURE_VIRTUAL),
        template_params: template_params(def),
        parent_class: owner.map(|p| p.qualified_name.clone()),
        namespace: enclosing_scope(&base.qualified_name).map(str::to_string),
        exceptions: None,
    };
    Ok(base.into_entity(kind, EntityDetails::Function(details)))
}

/// Strips a leading `=` and surrounding whitespace; nothing left means no explicit value.
fn explicit_value(initializer: &str) -> Option<String> {
    let trimmed = initializer.trim();
    let value = trimmed.strip_prefix('=').unwrap_or(trimmed).trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn enum_value(raw: &RawEnumValue) -> EnumValue {
    EnumValue {
        name: raw.name.clone(),
        value: raw.initializer.as_deref().and_then(explicit_value),
        description: raw.brief.clone().or_else(|| raw.detailed.clone()),
    }
}

fn template_params(def: &RawDef) -> Option<Vec<String>> {
    (!def.template_params.is_empty()).then(|| def.template_params.clone())
}

/// Nested compounds first, then member definitions in section order.
fn member_references(def: &RawDef) -> Vec<MemberReference> {
    let inner = def.inner_refs.iter().map(|inner| MemberReference {
        id: inner.refid.clone(),
        name: simple_name(&inner.name).to_string(),
        kind: inner.kind.to_string(),
        visibility: Visibility::from_prot(inner.prot.as_deref()),
    });

    let members = def.member_defs().filter_map(|member| {
        Some(MemberReference {
            id: member.id.clone()?,
            name: member.name.clone().unwrap_or_default(),
            kind: member.kind.clone(),
            visibility: Visibility::from_prot(member.prot.as_deref()),
        })
    });

    inner.chain(members).collect()
}
