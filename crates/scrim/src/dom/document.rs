use std::rc::Rc;

use slotmap::SlotMap;
use tracing::trace;

use super::{
    element::Element,
    focus,
    tree::{self, Walk, preorder},
};
use crate::{
    error::{Error, Result},
    event::{DomEvent, Event, EventType, key::Key, mouse::Button},
    id::NodeId,
};

/// An event listener. Listeners get mutable access to the document so they can
/// move focus, and to the event so they can suppress its default action.
pub type Listener = Rc<dyn Fn(&mut Document, &mut DomEvent) -> Result<()>>;

/// The element arena, the body element, and the focused element.
pub struct Document {
    /// Element storage arena.
    pub(crate) nodes: SlotMap<NodeId, Element>,
    /// The body element. Always present, never removed.
    body: NodeId,
    /// Currently focused element.
    active: Option<NodeId>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document containing only a body.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let body = nodes.insert(Element::new("body"));
        Self {
            nodes,
            body,
            active: None,
        }
    }

    /// The body element.
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Number of live elements in the arena, body and text nodes included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A document always holds its body, so it is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Look up an element.
    pub fn get(&self, id: NodeId) -> Result<&Element> {
        self.nodes.get(id).ok_or(Error::NodeNotFound(id))
    }

    /// Look up an element mutably.
    fn get_mut(&mut self, id: NodeId) -> Result<&mut Element> {
        self.nodes.get_mut(id).ok_or(Error::NodeNotFound(id))
    }

    /// Does the arena still hold `id`?
    pub fn exists(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.insert(Element::new(tag))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.nodes.insert(Element::text_node(text))
    }

    /// Return the tag of an element.
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id).map(Element::tag)
    }

    /// Return an attribute value.
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.nodes.get(id).and_then(|n| n.attr(name))
    }

    /// Is the attribute present on the element?
    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.nodes.get(id).is_some_and(|n| n.has_attr(name))
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) -> Result<()> {
        self.get_mut(id)?.attrs.insert(name.into(), value.into());
        Ok(())
    }

    /// Remove an attribute. Removing an absent attribute is not an error.
    pub fn remove_attr(&mut self, id: NodeId, name: &str) -> Result<()> {
        self.get_mut(id)?.attrs.remove(name);
        Ok(())
    }

    /// Append a class to the `class` attribute unless already present.
    pub fn add_class(&mut self, id: NodeId, class: &str) -> Result<()> {
        let node = self.get_mut(id)?;
        if node.has_class(class) {
            return Ok(());
        }
        let value = match node.attr("class") {
            Some(existing) if !existing.trim().is_empty() => format!("{existing} {class}"),
            _ => class.to_string(),
        };
        node.attrs.insert("class".into(), value);
        Ok(())
    }

    /// Entries of the element's `class` attribute.
    pub fn classes(&self, id: NodeId) -> Vec<&str> {
        self.nodes.get(id).map(Element::classes).unwrap_or_default()
    }

    /// Does the element carry `class`?
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.nodes.get(id).is_some_and(|n| n.has_class(class))
    }

    /// Replace the children of `id` with a single text node.
    pub fn set_text(&mut self, id: NodeId, text: &str) -> Result<()> {
        self.clear_children(id)?;
        let t = self.create_text(text);
        self.append_child(id, t)
    }

    /// Concatenated text of the subtree at `id`.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        let walked = preorder(self, id, &mut |_, el| -> Walk<()> {
            if let Some(t) = el.text() {
                out.push_str(t);
            }
            Walk::Continue
        });
        if walked.is_err() {
            return String::new();
        }
        out
    }

    /// Return the parent of an element.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|n| n.parent)
    }

    /// Return the children of an element. Unknown ids have no children.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id).map(Element::children).unwrap_or(&[])
    }

    /// Is `node` equal to or a descendant of `ancestor`?
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        tree::ancestors(self, node).contains(&ancestor)
    }

    /// Is the element reachable from the body?
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.contains(self.body, id)
    }

    /// Append `child` as the last child of `parent`. A child that already has a
    /// parent is moved.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.get(parent)?;
        self.get(child)?;
        if child == self.body {
            return Err(Error::Hierarchy("the body cannot be re-parented".into()));
        }
        if self.contains(child, parent) {
            return Err(Error::Hierarchy(
                "cannot append a node under its own subtree".into(),
            ));
        }
        if self.get(parent)?.is_text() {
            return Err(Error::Hierarchy("text nodes cannot have children".into()));
        }
        if let Some(old) = self.get(child)?.parent {
            self.unlink(old, child)?;
        }
        self.get_mut(parent)?.children.push(child);
        self.get_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Detach `child` from `parent`. The child stays in the arena.
    ///
    /// Fails with [`Error::NotAChild`] when `child` is not currently a child of
    /// `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.get(parent)?;
        if self.get(child)?.parent != Some(parent) {
            return Err(Error::NotAChild { parent, child });
        }
        self.unlink(parent, child)?;
        if self.active.is_some_and(|a| self.contains(child, a)) {
            trace!("focused element detached, clearing focus");
            self.active = None;
        }
        Ok(())
    }

    /// Break the parent/child link in both directions.
    fn unlink(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.get_mut(parent)?.children.retain(|c| *c != child);
        self.get_mut(child)?.parent = None;
        Ok(())
    }

    /// Detach `id` and free its whole subtree from the arena.
    pub fn destroy(&mut self, id: NodeId) -> Result<()> {
        if id == self.body {
            return Err(Error::Hierarchy("the body cannot be destroyed".into()));
        }
        if let Some(parent) = self.get(id)?.parent {
            self.remove_child(parent, id)?;
        }
        let doomed = tree::descendants(self, id)?;
        if self.active.is_some_and(|a| doomed.contains(&a)) {
            self.active = None;
        }
        for d in doomed {
            self.nodes.remove(d);
        }
        Ok(())
    }

    /// Destroy every child of `id`.
    pub fn clear_children(&mut self, id: NodeId) -> Result<()> {
        let children = self.get(id)?.children.clone();
        for child in children {
            self.destroy(child)?;
        }
        Ok(())
    }

    /// Find a connected element by its `id` attribute.
    pub fn get_element_by_id(&self, element_id: &str) -> Option<NodeId> {
        preorder(self, self.body, &mut |id, el| {
            if el.attr("id") == Some(element_id) {
                Walk::Handle(id)
            } else {
                Walk::Continue
            }
        })
        .ok()
        .and_then(Walk::value)
    }

    /// Descendants of `root` (excluding `root`) matching `pred`, in document
    /// order.
    pub fn query_all(&self, root: NodeId, pred: impl Fn(&Element) -> bool) -> Vec<NodeId> {
        tree::descendants(self, root)
            .unwrap_or_default()
            .into_iter()
            .filter(|id| *id != root && self.nodes.get(*id).is_some_and(&pred))
            .collect()
    }

    /// The focused element, if any.
    pub fn active_element(&self) -> Option<NodeId> {
        self.active
    }

    /// Is `id` the focused element?
    pub fn is_focused(&self, id: NodeId) -> bool {
        self.active == Some(id)
    }

    /// Focus an element. Only connected, focusable elements accept focus.
    /// Returns `true` if the element is focused afterwards.
    pub fn focus(&mut self, id: NodeId) -> bool {
        if !self.is_connected(id) || !focus::is_focusable(self, id) {
            trace!(?id, "focus refused");
            return false;
        }
        self.active = Some(id);
        true
    }

    /// Clear focus.
    pub fn blur(&mut self) {
        self.active = None;
    }

    /// Register a listener on an element.
    pub fn add_listener(
        &mut self,
        id: NodeId,
        ty: EventType,
        listener: impl Fn(&mut Self, &mut DomEvent) -> Result<()> + 'static,
    ) -> Result<()> {
        self.get_mut(id)?.listeners.push((ty, Rc::new(listener)));
        Ok(())
    }

    /// Dispatch `event` at `target`, bubbling through its ancestors. No default
    /// action is applied.
    pub fn dispatch(&mut self, target: NodeId, event: Event) -> Result<DomEvent> {
        self.get(target)?;
        let ty = event.event_type();
        let mut ev = DomEvent::new(event, target);
        for id in tree::ancestors(self, target) {
            let listeners: Vec<Listener> = match self.nodes.get(id) {
                Some(node) => node
                    .listeners
                    .iter()
                    .filter(|(t, _)| *t == ty)
                    .map(|(_, l)| Rc::clone(l))
                    .collect(),
                None => continue,
            };
            ev.current_target = id;
            for listener in listeners {
                listener(self, &mut ev)?;
            }
            if ev.propagation_stopped() {
                break;
            }
        }
        Ok(ev)
    }

    /// Press a key. The event is dispatched at the focused element (or the body)
    /// and, unless suppressed, Tab and Shift+Tab move focus in document order.
    pub fn key_down(&mut self, key: Key) -> Result<DomEvent> {
        let target = self
            .active
            .filter(|a| self.is_connected(*a))
            .unwrap_or(self.body);
        let ev = self.dispatch(target, Event::Key(key))?;
        if !ev.default_prevented() && key.is_tabbing() {
            match focus::sequential_target(self, self.active, key.is_shift_tab()) {
                Some(next) => {
                    self.focus(next);
                }
                None => self.blur(),
            }
        }
        Ok(ev)
    }

    /// Click an element with the primary button. Unless suppressed, the
    /// nearest focusable element at or above the target takes focus, and
    /// focus is cleared when there is none.
    pub fn click(&mut self, target: NodeId) -> Result<DomEvent> {
        let ev = self.dispatch(target, Event::Click(Button::Left))?;
        if !ev.default_prevented() {
            match focus::nearest_focusable(self, target) {
                Some(f) => {
                    self.focus(f);
                }
                None => self.blur(),
            }
        }
        Ok(ev)
    }
}
