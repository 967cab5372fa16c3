//! Utilities for walking the element tree.

use super::{document::Document, element::Element};
use crate::{error::Result, id::NodeId};

/// Walk is the return value from traversal closures.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Walk<T> {
    /// Skip the children of this node and continue walking.
    Skip,
    /// Stop walking and return a value.
    Handle(T),
    /// Continue walking.
    Continue,
}

impl<T> Walk<T> {
    /// The handle value of the traversal, if any.
    pub fn value(self) -> Option<T> {
        match self {
            Self::Handle(v) => Some(v),
            _ => None,
        }
    }

    /// Did the traversal return Handle?
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handle(_))
    }

    /// Did the traversal return Continue?
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue)
    }
}

/// A preorder (document order) traversal of the subtree at `root`.
///
/// - Walk::Skip prunes all children of the current node from the traversal.
/// - Walk::Handle stops the traversal and the contained value is returned.
/// - A missing node anywhere in the subtree is an error.
pub fn preorder<T>(
    doc: &Document,
    root: NodeId,
    f: &mut dyn FnMut(NodeId, &Element) -> Walk<T>,
) -> Result<Walk<T>> {
    let node = doc.get(root)?;
    let mut res = f(root, node);
    if res.is_continue() {
        for child in &node.children {
            if let Walk::Handle(t) = preorder(doc, *child, f)? {
                res = Walk::Handle(t);
                break;
            }
        }
    }
    // Skip is not propagated upwards, so we translate it to continue.
    Ok(match res {
        Walk::Skip => Walk::Continue,
        _ => res,
    })
}

/// Collect the ids of the subtree at `root` in document order, `root` first.
pub fn descendants(doc: &Document, root: NodeId) -> Result<Vec<NodeId>> {
    let mut ids = Vec::new();
    preorder(doc, root, &mut |id, _| -> Walk<()> {
        ids.push(id);
        Walk::Continue
    })?;
    Ok(ids)
}

/// Return `start` and its ancestors, nearest first.
pub fn ancestors(doc: &Document, start: NodeId) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current = Some(start);
    while let Some(id) = current {
        let Some(node) = doc.nodes.get(id) else {
            break;
        };
        path.push(id);
        current = node.parent;
    }
    path
}
