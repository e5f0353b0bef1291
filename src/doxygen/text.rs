//! Flattening of Doxygen documentation markup into plain text.

use roxmltree::Node;

/// Recursively flattens a documentation node into plain text.
///
/// Leaves are trimmed and empty pieces dropped. A `<para>` child is separated from
/// its neighbours by a newline; any other pair of neighbouring pieces is joined with
/// a single space. Comments and processing instructions are ignored.
pub(crate) fn flatten(node: Node<'_, '_>) -> String {
    if node.is_text() {
        return node.text().map(str::trim).unwrap_or_default().to_string();
    }

    let mut out = String::new();
    let mut previous_was_para = false;
    for child in node.children() {
        if !child.is_element() && !child.is_text() {
            continue;
        }

        let is_para = child.has_tag_name("para");
        let piece = flatten(child);
        if piece.is_empty() {
            continue;
        }

        if !out.is_empty() {
            out.push(if is_para || previous_was_para { '\n' } else { ' ' });
        }
        out.push_str(&piece);
        previous_was_para = is_para;
    }
    out
}

/// Flattens a node and maps blank text to `None`.
pub(crate) fn flatten_non_empty(node: Node<'_, '_>) -> Option<String> {
    let text = flatten(node);
    (!text.is_empty()).then_some(text)
}
