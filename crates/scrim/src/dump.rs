//! Debug rendering of a document subtree.

use std::fmt::{self, Write};

use crate::{
    dom::Document,
    error::{Error, Result},
    id::NodeId,
};

/// Render the subtree at `root` as indented markup, one node per line. Text
/// nodes are quoted, and the focused element is flagged. This is a debug
/// function.
pub fn dump(doc: &Document, root: NodeId) -> Result<String> {
    let mut out = String::new();
    dump_node(&mut out, doc, root, 0)?;
    Ok(out)
}

/// Write one node and recurse into its children.
fn dump_node(out: &mut String, doc: &Document, id: NodeId, level: usize) -> Result<()> {
    let el = doc.get(id)?;
    let indent = "    ".repeat(level);
    let fmt_err = |e: fmt::Error| Error::Invalid(e.to_string());

    if el.is_text() {
        writeln!(out, "{indent}{:?}", el.text().unwrap_or_default()).map_err(fmt_err)?;
        return Ok(());
    }

    write!(out, "{indent}<{}", el.tag()).map_err(fmt_err)?;
    for (k, v) in el.attrs() {
        if v.is_empty() {
            write!(out, " {k}").map_err(fmt_err)?;
        } else {
            write!(out, " {k}={v:?}").map_err(fmt_err)?;
        }
    }
    write!(out, ">").map_err(fmt_err)?;
    if doc.is_focused(id) {
        write!(out, " [focused]").map_err(fmt_err)?;
    }
    writeln!(out).map_err(fmt_err)?;

    for child in el.children() {
        dump_node(out, doc, *child, level + 1)?;
    }
    Ok(())
}
