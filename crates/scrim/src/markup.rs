//! Declarative element descriptions used as slot content.

use std::{fmt, rc::Rc};

use crate::{dom::Document, error::Result, event::EventType, id::NodeId};

/// A shareable, argument-free callback. This is the type of a dialog's `hide`
/// property and of click handlers attached through [`Markup::on_click`].
#[derive(Clone)]
pub struct Callback(Rc<dyn Fn()>);

impl Callback {
    /// Wrap a closure.
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invoke the callback.
    pub fn call(&self) {
        (self.0)();
    }

    /// Do two callbacks share the same closure?
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback")
    }
}

impl<F: Fn() + 'static> From<F> for Callback {
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

/// A child of a [`Markup`] element.
#[derive(Debug, Clone)]
enum Node {
    /// A nested element.
    Element(Markup),
    /// A text run.
    Text(String),
}

/// An element description that can be built into a [`Document`] any number of
/// times.
///
/// ```ignore
/// let ok = Markup::new("button")
///     .class("rf-btn")
///     .text("OK")
///     .on_click(|| println!("ok"));
/// ```
#[derive(Debug, Clone)]
pub struct Markup {
    /// Tag name.
    tag: String,
    /// Attributes in insertion order.
    attrs: Vec<(String, String)>,
    /// Child elements and text runs.
    children: Vec<Node>,
    /// Click handler installed on the built element.
    on_click: Option<Callback>,
}

impl Markup {
    /// An empty element with the given tag.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
            on_click: None,
        }
    }

    /// Set an attribute. Setting the same attribute again replaces it.
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.retain(|(k, _)| k != name);
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Append a class.
    pub fn class(self, class: &str) -> Self {
        let existing = self.get_attr("class").map(str::to_string);
        match existing {
            Some(c) if !c.is_empty() => self.attr("class", &format!("{c} {class}")),
            _ => self.attr("class", class),
        }
    }

    /// Set the `id` attribute.
    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    /// Append a text run.
    pub fn text(mut self, text: &str) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Append a child element.
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Install a click handler.
    pub fn on_click(mut self, cb: impl Into<Callback>) -> Self {
        self.on_click = Some(cb.into());
        self
    }

    /// Return the tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Look up an attribute.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Create the described elements in `doc` and return the (detached) root.
    pub fn build(&self, doc: &mut Document) -> Result<NodeId> {
        let id = doc.create_element(&self.tag);
        for (k, v) in &self.attrs {
            doc.set_attr(id, k, v)?;
        }
        for child in &self.children {
            let c = match child {
                Node::Element(m) => m.build(doc)?,
                Node::Text(t) => doc.create_text(t),
            };
            doc.append_child(id, c)?;
        }
        if let Some(cb) = &self.on_click {
            let cb = cb.clone();
            doc.add_listener(id, EventType::Click, move |_, _| {
                cb.call();
                Ok(())
            })?;
        }
        Ok(id)
    }

    /// Build into `doc` and append the result to `parent`.
    pub fn build_into(&self, doc: &mut Document, parent: NodeId) -> Result<NodeId> {
        let id = self.build(doc)?;
        doc.append_child(parent, id)?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn builds_nested_tree() -> Result<()> {
        let mut doc = Document::new();
        let m = Markup::new("div")
            .class("a")
            .class("b")
            .id("root")
            .child(Markup::new("p").text("one").text("two"))
            .child(Markup::new("button").attr("type", "button"));
        let body = doc.body();
        let root = m.build_into(&mut doc, body)?;

        assert_eq!(doc.attr(root, "class"), Some("a b"));
        assert_eq!(doc.get_element_by_id("root"), Some(root));
        let children = doc.children(root).to_vec();
        assert_eq!(children.len(), 2);
        assert_eq!(doc.tag(children[0]), Some("p"));
        assert_eq!(doc.text_content(children[0]), "onetwo");
        assert_eq!(doc.attr(children[1], "type"), Some("button"));
        Ok(())
    }

    #[test]
    fn attr_replaces() {
        let m = Markup::new("a").attr("href", "#x").attr("href", "#y");
        assert_eq!(m.get_attr("href"), Some("#y"));
    }

    #[test]
    fn click_handler_fires_once_per_click() -> Result<()> {
        let mut doc = Document::new();
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        let m = Markup::new("button").on_click(move || h.set(h.get() + 1));
        let body = doc.body();
        let first = m.build_into(&mut doc, body)?;
        let second = m.build_into(&mut doc, body)?;

        doc.click(first)?;
        assert_eq!(hits.get(), 1);
        doc.click(second)?;
        assert_eq!(hits.get(), 2);
        Ok(())
    }
}
