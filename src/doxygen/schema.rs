//! Typed decoding of Doxygen compound documents.
//!
//! Builders never touch XML. Each `<compounddef>` or `<memberdef>` is decoded once
//! into a [`RawDef`] whose optional fields spell out exactly what the source
//! provided, so the precedence chains in the builders operate on plain data.

use super::text::{flatten, flatten_non_empty};
use ahash::AHashMap;
use roxmltree::{Document, Node};

/// A decoded `<compounddef>` or `<memberdef>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RawDef {
    pub id: Option<String>,
    pub kind: String,
    pub prot: Option<String>,
    /// `<compoundname>`, the fully scoped name of a compound.
    pub compound_name: Option<String>,
    /// `<name>`, the local name of a member.
    pub name: Option<String>,
    /// `<qualifiedname>`, emitted by newer Doxygen releases for members.
    pub qualified_name: Option<String>,
    pub type_text: Option<String>,
    pub brief: Option<String>,
    pub detailed: Option<String>,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub is_const: bool,
    pub is_static: bool,
    pub is_inline: bool,
    pub is_strong: bool,
    pub virt: Option<String>,
    pub base_refs: Vec<RawBaseRef>,
    pub template_params: Vec<String>,
    pub params: Vec<RawParam>,
    pub enum_values: Vec<RawEnumValue>,
    pub inner_refs: Vec<RawInnerRef>,
    pub sections: Vec<RawSection>,
}

impl RawDef {
    /// Iterates every member definition across all sections, in document order.
    pub(crate) fn member_defs(&self) -> impl Iterator<Item = &Self> {
        self.sections.iter().flat_map(|section| section.members.iter())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RawSection {
    pub kind: String,
    pub members: Vec<RawDef>,
}

/// `<basecompoundref>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawBaseRef {
    pub name: String,
    pub refid: Option<String>,
    pub prot: Option<String>,
    pub virt: Option<String>,
}

/// `<innerclass>` / `<innernamespace>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawInnerRef {
    pub refid: String,
    pub kind: &'static str,
    pub name: String,
    pub prot: Option<String>,
}

/// `<param>` of a function member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawParam {
    pub name: Option<String>,
    pub type_text: String,
    pub default_value: Option<String>,
    pub description: Option<String>,
}

/// `<enumvalue>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawEnumValue {
    pub name: String,
    pub initializer: Option<String>,
    pub brief: Option<String>,
    pub detailed: Option<String>,
}

/// Decodes the first `<compounddef>` of a compound document.
///
/// Accepts either a `<doxygen>` wrapper or a bare `<compounddef>` root.
pub(crate) fn decode_compound(text: &str) -> Result<RawDef, String> {
    let doc = Document::parse(text).map_err(|e| e.to_string())?;
    let root = doc.root_element();

    let compound = if root.has_tag_name("compounddef") {
        Some(root)
    } else if root.has_tag_name("doxygen") {
        child(root, "compounddef")
    } else {
        return Err(format!(
            "expected <doxygen> root element, found <{}>",
            root.tag_name().name()
        ));
    };

    compound
        .map(decode_def)
        .ok_or_else(|| "document contains no <compounddef>".to_string())
}

/// Decodes a `<compounddef>` or `<memberdef>` element.
fn decode_def(node: Node<'_, '_>) -> RawDef {
    let mut def = RawDef {
        id: attr(node, "id"),
        kind: node.attribute("kind").unwrap_or_default().to_string(),
        prot: attr(node, "prot"),
        is_const: node.attribute("const") == Some("yes"),
        is_static: node.attribute("static") == Some("yes"),
        is_inline: node.attribute("inline") == Some("yes"),
        is_strong: node.attribute("strong") == Some("yes"),
        virt: attr(node, "virt"),
        ..RawDef::default()
    };

    let param_docs = child(node, "detaileddescription")
        .map(decode_parameter_docs)
        .unwrap_or_default();

    for element in node.children().filter(Node::is_element) {
        match element.tag_name().name() {
            "compoundname" => def.compound_name = flatten_non_empty(element),
            "name" => def.name = flatten_non_empty(element),
            "qualifiedname" => def.qualified_name = flatten_non_empty(element),
            "type" => def.type_text = Some(flatten(element)),
            "briefdescription" => def.brief = flatten_non_empty(element),
            "detaileddescription" => def.detailed = flatten_non_empty(element),
            "location" => {
                def.file = attr(element, "file");
                def.line = element
                    .attribute("line")
                    .and_then(|line| line.trim().parse().ok());
            }
            "basecompoundref" => def.base_refs.push(RawBaseRef {
                name: flatten(element),
                refid: attr(element, "refid"),
                prot: attr(element, "prot"),
                virt: attr(element, "virt"),
            }),
            "innerclass" | "innernamespace" => {
                if let Some(refid) = attr(element, "refid") {
                    def.inner_refs.push(RawInnerRef {
                        refid,
                        kind: if element.has_tag_name("innerclass") {
                            "class"
                        } else {
                            "namespace"
                        },
                        name: flatten(element),
                        prot: attr(element, "prot"),
                    });
                }
            }
            "templateparamlist" => {
                def.template_params = element
                    .children()
                    .filter(|n| n.has_tag_name("param"))
                    .filter_map(decode_template_param)
                    .collect();
            }
            "param" => def.params.push(decode_param(element, &param_docs)),
            "enumvalue" => {
                if let Some(value) = decode_enum_value(element) {
                    def.enum_values.push(value);
                }
            }
            "sectiondef" => def.sections.push(RawSection {
                kind: element.attribute("kind").unwrap_or_default().to_string(),
                members: element
                    .children()
                    .filter(|n| n.has_tag_name("memberdef"))
                    .map(decode_def)
                    .collect(),
            }),
            _ => {}
        }
    }

    def
}

fn decode_param(node: Node<'_, '_>, param_docs: &AHashMap<String, String>) -> RawParam {
    let name = child(node, "declname")
        .or_else(|| child(node, "defname"))
        .and_then(flatten_non_empty);
    let description = child(node, "briefdescription")
        .and_then(flatten_non_empty)
        .or_else(|| name.as_ref().and_then(|n| param_docs.get(n).cloned()));

    RawParam {
        type_text: child(node, "type").map(flatten).unwrap_or_default(),
        default_value: child(node, "defval").and_then(flatten_non_empty),
        description,
        name,
    }
}

/// Renders a template parameter as written, e.g. `typename T` or `int N = 4`.
fn decode_template_param(node: Node<'_, '_>) -> Option<String> {
    let type_text = child(node, "type").map(flatten).unwrap_or_default();
    let mut rendered = type_text.clone();

    if let Some(declname) = child(node, "declname").and_then(flatten_non_empty)
        && !type_text.ends_with(declname.as_str())
    {
        if !rendered.is_empty() {
            rendered.push(' ');
        }
        rendered.push_str(&declname);
    }
    if let Some(defval) = child(node, "defval").and_then(flatten_non_empty) {
        rendered.push_str(" = ");
        rendered.push_str(&defval);
    }

    (!rendered.is_empty()).then_some(rendered)
}

fn decode_enum_value(node: Node<'_, '_>) -> Option<RawEnumValue> {
    let name = child(node, "name").and_then(flatten_non_empty)?;
    Some(RawEnumValue {
        name,
        initializer: child(node, "initializer").map(flatten),
        brief: child(node, "briefdescription").and_then(flatten_non_empty),
        detailed: child(node, "detaileddescription").and_then(flatten_non_empty),
    })
}

/// Collects `@param` documentation from `<parameterlist kind="param">` blocks.
fn decode_parameter_docs(detailed: Node<'_, '_>) -> AHashMap<String, String> {
    let mut docs = AHashMap::new();
    let items = detailed
        .descendants()
        .filter(|n| n.has_tag_name("parameterlist") && n.attribute("kind") == Some("param"))
        .flat_map(|list| list.children().filter(|n| n.has_tag_name("parameteritem")));

    for item in items {
        let Some(description) = child(item, "parameterdescription").and_then(flatten_non_empty)
        else {
            continue;
        };
        let names = item
            .descendants()
            .filter(|n| n.has_tag_name("parametername"))
            .filter_map(flatten_non_empty);
        for name in names {
            docs.entry(name).or_insert_with(|| description.clone());
        }
    }
    docs
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(name))
}

fn attr(node: Node<'_, '_>, name: &str) -> Option<String> {
    node.attribute(name)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};

    const WIDGET: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<doxygen version="1.9.8">
  <compounddef id="classns_1_1Widget" kind="class" language="C++" prot="public">
    <compoundname>ns::Widget</compoundname>
    <basecompoundref refid="classns_1_1Base" prot="public" virt="virtual">ns::Base</basecompoundref>
    <innerclass refid="classns_1_1Widget_1_1Style" prot="private">ns::Widget::Style</innerclass>
    <templateparamlist>
      <param><type>typename T</type></param>
      <param><type>int</type><declname>N</declname><defval>4</defval></param>
    </templateparamlist>
    <sectiondef kind="public-func">
      <memberdef kind="function" id="w_draw" prot="public" static="no" const="yes" inline="no" virt="pure-virtual">
        <type>void</type>
        <name>draw</name>
        <param><type>int</type><declname>x</declname><defval>0</defval></param>
        <param><type>int</type><declname>y</declname></param>
        <briefdescription><para>Draws it.</para></briefdescription>
        <detaileddescription>
          <para>
            <parameterlist kind="param">
              <parameteritem>
                <parameternamelist><parametername>y</parametername></parameternamelist>
                <parameterdescription><para>Vertical offset.</para></parameterdescription>
              </parameteritem>
            </parameterlist>
          </para>
        </detaileddescription>
        <location file="widget.h" line="12"/>
      </memberdef>
    </sectiondef>
    <briefdescription><para>A widget.</para></briefdescription>
    <detaileddescription/>
    <location file="widget.h" line="8" column="1"/>
  </compounddef>
</doxygen>"#;

    #[test]
    fn test_decode_compound_fields() {
        let_assert!(Ok(def) = decode_compound(WIDGET));
        check!(def.id.as_deref() == Some("classns_1_1Widget"));
        check!(def.kind == "class");
        check!(def.compound_name.as_deref() == Some("ns::Widget"));
        check!(def.brief.as_deref() == Some("A widget."));
        check!(def.detailed.is_none());
        check!(def.file.as_deref() == Some("widget.h"));
        check!(def.line == Some(8));
        check!(def.template_params == vec!["typename T".to_string(), "int N = 4".to_string()]);
        check!(def.base_refs.len() == 1);
        check!(def.base_refs[0].name == "ns::Base");
        check!(def.inner_refs[0].kind == "class");
        check!(def.inner_refs[0].prot.as_deref() == Some("private"));
    }

    #[test]
    fn test_decode_member_fields() {
        let_assert!(Ok(def) = decode_compound(WIDGET));
        let members: Vec<_> = def.member_defs().collect();
        check!(members.len() == 1);

        let draw = members[0];
        check!(draw.name.as_deref() == Some("draw"));
        check!(draw.is_const);
        check!(!draw.is_static);
        check!(draw.virt.as_deref() == Some("pure-virtual"));
        check!(draw.type_text.as_deref() == Some("void"));
        check!(draw.params.len() == 2);
        check!(draw.params[0].default_value.as_deref() == Some("0"));
        check!(draw.params[0].description.is_none());
        check!(draw.params[1].description.as_deref() == Some("Vertical offset."));
    }

    #[test]
    fn test_decode_rejects_foreign_root() {
        let_assert!(Err(reason) = decode_compound("<html><body/></html>"));
        check!(reason.contains("<html>"));
    }

    #[test]
    fn test_decode_requires_compounddef() {
        check!(decode_compound("<doxygen version=\"1.9\"/>").is_err());
        check!(decode_compound("<doxygen><compounddef").is_err());
    }
}
