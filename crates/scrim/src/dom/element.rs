use std::collections::BTreeMap;

use super::document::Listener;
use crate::{event::EventType, id::NodeId};

/// Tag used for text nodes.
pub const TEXT_TAG: &str = "#text";

/// Element data stored in the document arena.
pub struct Element {
    /// Lowercase tag name, or [`TEXT_TAG`] for text nodes.
    pub(crate) tag: String,
    /// Attributes, kept sorted so output is deterministic.
    pub(crate) attrs: BTreeMap<String, String>,
    /// Text payload for text nodes.
    pub(crate) text: Option<String>,

    /// Parent in the arena tree.
    pub(crate) parent: Option<NodeId>,
    /// Children in document order.
    pub(crate) children: Vec<NodeId>,

    /// Registered event listeners, in registration order.
    pub(crate) listeners: Vec<(EventType, Listener)>,
}

impl Element {
    /// A fresh, detached element.
    pub(crate) fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: BTreeMap::new(),
            text: None,
            parent: None,
            children: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// A fresh, detached text node.
    pub(crate) fn text_node(text: &str) -> Self {
        Self {
            tag: TEXT_TAG.into(),
            text: Some(text.into()),
            ..Self::new(TEXT_TAG)
        }
    }

    /// Return the tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Is this a text node?
    pub fn is_text(&self) -> bool {
        self.tag == TEXT_TAG
    }

    /// Return an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Is the attribute present, with any value?
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Iterate attributes in name order.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Whitespace-separated entries of the `class` attribute.
    pub fn classes(&self) -> Vec<&str> {
        self.attr("class")
            .map(|c| c.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Does the `class` attribute contain `class`?
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().contains(&class)
    }

    /// Text payload for text nodes.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Return the parent, if any.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Return the children.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Number of listeners registered for an event type.
    pub fn listener_count(&self, ty: EventType) -> usize {
        self.listeners.iter().filter(|(t, _)| *t == ty).count()
    }
}
