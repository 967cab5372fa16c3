//! Keeps Tab navigation inside a container.
//!
//! The focusable set is recomputed from the live tree on every Tab press and
//! never cached, so slot content that changes while the dialog is open is
//! always seen as it is now. The cost is one linear walk of the container per
//! keystroke.

use tracing::trace;

use crate::{
    dom::{Document, focus, tree},
    event::DomEvent,
    id::NodeId,
};

/// Elements inside `container` that Tab can reach, in document order.
pub fn compute_focusable(doc: &Document, container: NodeId) -> Vec<NodeId> {
    focus::tabbable_within(doc, container)
}

/// Wrap Tab navigation at the ends of the container's focusable set.
///
/// Tab from the last element, or from any focused element after it, moves to
/// the first; Shift+Tab from the first, or from anything before it, moves to
/// the last. Both cases suppress the default action. Position is taken in
/// document order, so focus parked on an element Tab cannot reach (a negative
/// `tabindex`) still wraps instead of leaving the container. Every other case,
/// including an empty set and events that are not Tab presses, is left to the
/// default tab order.
pub fn handle_tab_key(doc: &mut Document, event: &mut DomEvent, container: NodeId) {
    let Some(key) = event.key() else {
        return;
    };
    if !key.is_tabbing() {
        return;
    }
    let focusable = compute_focusable(doc, container);
    let (Some(first), Some(last)) = (focusable.first().copied(), focusable.last().copied())
    else {
        return;
    };
    let Some(active) = doc.active_element() else {
        return;
    };
    let Ok(order) = tree::descendants(doc, container) else {
        return;
    };
    let position = |id: NodeId| order.iter().position(|o| *o == id);
    let (Some(at), Some(first_at), Some(last_at)) =
        (position(active), position(first), position(last))
    else {
        return;
    };
    if key.is_shift_tab() {
        if at <= first_at {
            event.prevent_default();
            doc.focus(last);
            trace!(?container, "focus wrapped to last element");
        }
    } else if at >= last_at {
        event.prevent_default();
        doc.focus(first);
        trace!(?container, "focus wrapped to first element");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::Result,
        event::{
            Event,
            key::{Key, KeyCode, Shift},
        },
    };

    /// A container with three buttons, attached to the body.
    fn three() -> Result<(Document, NodeId, Vec<NodeId>)> {
        let mut doc = Document::new();
        let body = doc.body();
        let container = doc.create_element("div");
        doc.append_child(body, container)?;
        let mut buttons = Vec::new();
        for _ in 0..3 {
            let b = doc.create_element("button");
            doc.append_child(container, b)?;
            buttons.push(b);
        }
        Ok((doc, container, buttons))
    }

    fn press(doc: &mut Document, container: NodeId, key: Key) -> DomEvent {
        let target = doc.active_element().unwrap_or(container);
        let mut ev = DomEvent::new(Event::Key(key), target);
        handle_tab_key(doc, &mut ev, container);
        ev
    }

    #[test]
    fn wraps_forward_from_last() -> Result<()> {
        let (mut doc, container, b) = three()?;
        doc.focus(b[2]);
        let ev = press(&mut doc, container, KeyCode::Tab.into());
        assert!(ev.default_prevented());
        assert_eq!(doc.active_element(), Some(b[0]));
        Ok(())
    }

    #[test]
    fn wraps_backward_from_first() -> Result<()> {
        let (mut doc, container, b) = three()?;
        doc.focus(b[0]);
        let ev = press(&mut doc, container, Shift + KeyCode::Tab);
        assert!(ev.default_prevented());
        assert_eq!(doc.active_element(), Some(b[2]));

        doc.focus(b[0]);
        let ev = press(&mut doc, container, KeyCode::BackTab.into());
        assert!(ev.default_prevented());
        assert_eq!(doc.active_element(), Some(b[2]));
        Ok(())
    }

    #[test]
    fn middle_positions_use_default_order() -> Result<()> {
        let (mut doc, container, b) = three()?;
        doc.focus(b[1]);
        let ev = press(&mut doc, container, KeyCode::Tab.into());
        assert!(!ev.default_prevented());
        let ev = press(&mut doc, container, Shift + KeyCode::Tab);
        assert!(!ev.default_prevented());
        assert_eq!(doc.active_element(), Some(b[1]));

        // Forward tab on the first and backward tab on the last are not wraps.
        doc.focus(b[0]);
        assert!(!press(&mut doc, container, KeyCode::Tab.into()).default_prevented());
        doc.focus(b[2]);
        assert!(!press(&mut doc, container, Shift + KeyCode::Tab).default_prevented());
        Ok(())
    }

    #[test]
    fn empty_set_does_nothing() -> Result<()> {
        let mut doc = Document::new();
        let body = doc.body();
        let container = doc.create_element("div");
        let text = doc.create_text("nothing to focus");
        doc.append_child(body, container)?;
        doc.append_child(container, text)?;
        let ev = press(&mut doc, container, KeyCode::Tab.into());
        assert!(!ev.default_prevented());
        assert_eq!(doc.active_element(), None);
        Ok(())
    }

    #[test]
    fn single_element_wraps_onto_itself() -> Result<()> {
        let mut doc = Document::new();
        let body = doc.body();
        let container = doc.create_element("div");
        let only = doc.create_element("button");
        doc.append_child(body, container)?;
        doc.append_child(container, only)?;
        doc.focus(only);
        assert!(press(&mut doc, container, KeyCode::Tab.into()).default_prevented());
        assert!(press(&mut doc, container, Shift + KeyCode::Tab).default_prevented());
        assert_eq!(doc.active_element(), Some(only));
        Ok(())
    }

    #[test]
    fn recomputes_after_mutation() -> Result<()> {
        let (mut doc, container, b) = three()?;
        let extra = doc.create_element("button");
        doc.append_child(container, extra)?;
        doc.focus(b[2]);
        assert!(!press(&mut doc, container, KeyCode::Tab.into()).default_prevented());

        doc.focus(extra);
        assert!(press(&mut doc, container, KeyCode::Tab.into()).default_prevented());
        assert_eq!(doc.active_element(), Some(b[0]));

        doc.set_attr(b[0], "disabled", "")?;
        doc.focus(b[1]);
        let ev = press(&mut doc, container, Shift + KeyCode::Tab);
        assert!(ev.default_prevented());
        assert_eq!(doc.active_element(), Some(extra));
        Ok(())
    }

    #[test]
    fn untabbable_ends_still_wrap() -> Result<()> {
        let mut doc = Document::new();
        let body = doc.body();
        let container = doc.create_element("div");
        doc.append_child(body, container)?;
        let mut kids = Vec::new();
        for tabindex in ["-1", "0", "0", "0", "-1"] {
            let el = doc.create_element("button");
            doc.set_attr(el, "tabindex", tabindex)?;
            doc.append_child(container, el)?;
            kids.push(el);
        }
        let outside = doc.create_element("button");
        doc.append_child(body, outside)?;
        assert_eq!(compute_focusable(&doc, container), kids[1..4].to_vec());

        assert!(doc.focus(kids[4]));
        assert!(press(&mut doc, container, KeyCode::Tab.into()).default_prevented());
        assert_eq!(doc.active_element(), Some(kids[1]));

        assert!(doc.focus(kids[0]));
        assert!(press(&mut doc, container, Shift + KeyCode::Tab).default_prevented());
        assert_eq!(doc.active_element(), Some(kids[3]));
        Ok(())
    }

    #[test]
    fn ignores_other_keys() -> Result<()> {
        let (mut doc, container, b) = three()?;
        doc.focus(b[2]);
        let ev = press(&mut doc, container, KeyCode::Enter.into());
        assert!(!ev.default_prevented());
        assert_eq!(doc.active_element(), Some(b[2]));
        Ok(())
    }
}
