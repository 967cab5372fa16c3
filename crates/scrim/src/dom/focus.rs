//! Which elements can take focus, and in what order Tab visits them.
//!
//! An element is *focusable* when it can receive focus at all (programmatic
//! focus included) and *tabbable* when it also takes part in sequential Tab
//! navigation. A negative `tabindex` makes an element focusable but not
//! tabbable. Anything inside a subtree carrying the `hidden` attribute is
//! neither.

use super::{
    document::Document,
    element::Element,
    tree::{Walk, preorder},
};
use crate::id::NodeId;

/// Form controls that honor the `disabled` attribute.
const DISABLEABLE: &[&str] = &["button", "input", "select", "textarea"];

/// Parsed `tabindex`, if present and numeric.
fn tabindex(el: &Element) -> Option<i32> {
    el.attr("tabindex").and_then(|t| t.trim().parse().ok())
}

/// Element-local focusability, ignoring ancestors.
pub fn element_focusable(el: &Element) -> bool {
    if el.is_text() {
        return false;
    }
    if DISABLEABLE.contains(&el.tag()) && el.has_attr("disabled") {
        return false;
    }
    if tabindex(el).is_some() || el.has_attr("contenteditable") {
        return true;
    }
    match el.tag() {
        "a" | "area" => el.has_attr("href"),
        "input" => el.attr("type") != Some("hidden"),
        "button" | "select" | "textarea" => true,
        _ => false,
    }
}

/// Element-local tabbability, ignoring ancestors.
pub fn element_tabbable(el: &Element) -> bool {
    element_focusable(el) && tabindex(el).is_none_or(|t| t >= 0)
}

/// Is `id` or any ancestor hidden?
fn in_hidden_subtree(doc: &Document, id: NodeId) -> bool {
    super::tree::ancestors(doc, id)
        .into_iter()
        .filter_map(|a| doc.nodes.get(a))
        .any(|el| el.has_attr("hidden"))
}

/// Can `id` receive focus?
pub fn is_focusable(doc: &Document, id: NodeId) -> bool {
    doc.nodes.get(id).is_some_and(element_focusable) && !in_hidden_subtree(doc, id)
}

/// Does `id` take part in sequential navigation?
pub fn is_tabbable(doc: &Document, id: NodeId) -> bool {
    doc.nodes.get(id).is_some_and(element_tabbable) && !in_hidden_subtree(doc, id)
}

/// Tabbable descendants of `container` in document order, excluding the
/// container itself. Hidden subtrees are pruned. The result is computed from
/// the live tree on every call.
pub fn tabbable_within(doc: &Document, container: NodeId) -> Vec<NodeId> {
    if in_hidden_subtree(doc, container) {
        return Vec::new();
    }
    let mut found = Vec::new();
    let walked = preorder(doc, container, &mut |id, el| -> Walk<()> {
        if el.has_attr("hidden") {
            return Walk::Skip;
        }
        if id != container && element_tabbable(el) {
            found.push(id);
        }
        Walk::Continue
    });
    match walked {
        Ok(_) => found,
        Err(_) => Vec::new(),
    }
}

/// The element sequential navigation moves to from `current` across the whole
/// connected document. `None` means focus leaves the document.
pub fn sequential_target(
    doc: &Document,
    current: Option<NodeId>,
    backwards: bool,
) -> Option<NodeId> {
    let Ok(all) = super::tree::descendants(doc, doc.body()) else {
        return None;
    };
    let pos = current.and_then(|c| all.iter().position(|id| *id == c));
    let tabbable = |id: &&NodeId| is_tabbable(doc, **id);
    match (pos, backwards) {
        (Some(p), false) => all[p + 1..].iter().find(tabbable).copied(),
        (Some(p), true) => all[..p].iter().rev().find(tabbable).copied(),
        (None, false) => all.iter().find(tabbable).copied(),
        (None, true) => all.iter().rev().find(tabbable).copied(),
    }
}

/// The nearest focusable element at or above `start`.
pub fn nearest_focusable(doc: &Document, start: NodeId) -> Option<NodeId> {
    super::tree::ancestors(doc, start)
        .into_iter()
        .find(|id| is_focusable(doc, *id))
}
