//! Interpretation of the Doxygen `index.xml` document.

use super::text::flatten;
use crate::error::{DoxygenError, Result};
use roxmltree::Document;
use serde::Serialize;
use std::path::Path;

/// Root element every Doxygen index document carries.
const INDEX_ROOT: &str = "doxygenindex";

/// The compound listing of an index document, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoxygenIndex {
    pub version: String,
    pub compounds: Vec<CompoundRef>,
}

/// One `<compound>` entry of the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompoundRef {
    pub refid: String,
    pub kind: String,
    pub name: String,
}

impl CompoundRef {
    /// File name of the document describing this compound.
    pub fn document_name(&self) -> String {
        format!("{}.xml", self.refid)
    }
}

/// Parses index text into its version tag and ordered compound list.
///
/// `path` is only used to give errors context. Compounds without a `refid`
/// cannot be resolved to a document and are dropped.
pub fn parse_index(text: &str, path: &Path) -> Result<DoxygenIndex> {
    let malformed = |reason: String| DoxygenError::MalformedIndex {
        path: path.to_path_buf(),
        reason,
    };

    let doc = Document::parse(text).map_err(|e| malformed(e.to_string()))?;
    let root = doc.root_element();
    if !root.has_tag_name(INDEX_ROOT) {
        return Err(malformed(format!(
            "expected <{}> root element, found <{}>",
            INDEX_ROOT,
            root.tag_name().name()
        )));
    }

    let mut compounds = Vec::new();
    for node in root.children().filter(|n| n.has_tag_name("compound")) {
        let Some(refid) = node.attribute("refid").filter(|r| !r.trim().is_empty()) else {
            tracing::debug!("Skipping index compound without refid");
            continue;
        };
        compounds.push(CompoundRef {
            refid: refid.trim().to_string(),
            kind: node.attribute("kind").unwrap_or_default().to_string(),
            name: node
                .children()
                .find(|n| n.has_tag_name("name"))
                .map(flatten)
                .unwrap_or_default(),
        });
    }

    Ok(DoxygenIndex {
        version: root.attribute("version").unwrap_or_default().to_string(),
        compounds,
    })
}
