//! Helpers for driving a dialog in tests.
//!
//! A [`Harness`] owns a [`Document`] and one mounted [`Modal`] whose `hide`
//! callback counts dismissal requests. With auto-close on (the default), a
//! request is answered after each simulated input by closing the dialog, the
//! way a typical application would.

use std::{cell::Cell, rc::Rc};

use crate::{
    config::Size,
    controller::{Modal, ModalProps},
    dom::Document,
    dump::dump,
    error::{Error, Result},
    event::{DomEvent, key::Key},
    id::{NodeId, SequentialIds},
    markup::Markup,
    slot::Child,
};

/// A document with one dialog instance under test.
pub struct Harness {
    /// The document.
    pub doc: Document,
    /// The dialog under test.
    pub modal: Modal,
    /// Dismissal requests seen so far.
    dismissals: Rc<Cell<usize>>,
    /// Requests already answered by [`sync`](Self::sync).
    answered: usize,
    /// Close the dialog on each new dismissal request.
    auto_close: bool,
}

/// Builder for a [`Harness`].
#[derive(Debug)]
pub struct HarnessBuilder {
    /// Width category.
    size: Size,
    /// Initial open flag.
    open: bool,
    /// Children, or a default title/content/footer set when empty.
    children: Vec<Child>,
    /// Mount on build.
    mounted: bool,
    /// Answer dismissal requests by closing.
    auto_close: bool,
}

impl Default for HarnessBuilder {
    fn default() -> Self {
        Self {
            size: Size::default(),
            open: true,
            children: Vec::new(),
            mounted: true,
            auto_close: true,
        }
    }
}

/// The children used when a test supplies none.
pub fn default_children() -> Vec<Child> {
    vec![
        Child::title("Title"),
        Child::content(Markup::new("p").text("Body")),
        Child::footer(Markup::new("button").class("rf-btn").text("OK")),
    ]
}

impl HarnessBuilder {
    /// Set the width category.
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Set the initial open flag.
    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Append a child.
    pub fn child(mut self, child: Child) -> Self {
        self.children.push(child);
        self
    }

    /// Append children.
    pub fn children(mut self, children: impl IntoIterator<Item = Child>) -> Self {
        self.children.extend(children);
        self
    }

    /// Whether to mount on build.
    pub fn mounted(mut self, mounted: bool) -> Self {
        self.mounted = mounted;
        self
    }

    /// Whether dismissal requests close the dialog.
    pub fn auto_close(mut self, auto_close: bool) -> Self {
        self.auto_close = auto_close;
        self
    }

    /// Build the harness.
    pub fn build(self) -> Result<Harness> {
        let mut doc = Document::new();
        let dismissals = Rc::new(Cell::new(0));
        let counter = Rc::clone(&dismissals);
        let children = if self.children.is_empty() {
            default_children()
        } else {
            self.children
        };
        let props = ModalProps::builder()
            .size(self.size)
            .open(self.open)
            .hide(move || counter.set(counter.get() + 1))
            .children(children)
            .build()?;
        let mut modal = Modal::with_ids(&mut doc, props, &mut SequentialIds::new("test-"))?;
        if self.mounted {
            modal.mount(&mut doc)?;
        }
        Ok(Harness {
            doc,
            modal,
            dismissals,
            answered: 0,
            auto_close: self.auto_close,
        })
    }
}

impl Harness {
    /// Start building a harness.
    pub fn builder() -> HarnessBuilder {
        HarnessBuilder::default()
    }

    /// An open, mounted, medium dialog with the default children.
    pub fn new() -> Result<Self> {
        HarnessBuilder::default().build()
    }

    /// Press a key given in text form, e.g. `"tab"` or `"shift-tab"`.
    pub fn press(&mut self, key: &str) -> Result<DomEvent> {
        self.key(key.parse::<Key>()?)
    }

    /// Press a key.
    pub fn key(&mut self, key: impl Into<Key>) -> Result<DomEvent> {
        let ev = self.doc.key_down(key.into())?;
        self.sync()?;
        Ok(ev)
    }

    /// Click an element.
    pub fn click(&mut self, target: NodeId) -> Result<DomEvent> {
        let ev = self.doc.click(target)?;
        self.sync()?;
        Ok(ev)
    }

    /// Answer outstanding dismissal requests.
    pub fn sync(&mut self) -> Result<()> {
        let seen = self.dismissals.get();
        if seen > self.answered {
            self.answered = seen;
            if self.auto_close {
                self.modal.set_open(&mut self.doc, false)?;
            }
        }
        Ok(())
    }

    /// Number of dismissal requests so far.
    pub fn dismissals(&self) -> usize {
        self.dismissals.get()
    }

    /// Every `dialog` element in the document.
    pub fn dialogs(&self) -> Vec<NodeId> {
        self.doc.query_all(self.doc.body(), |el| el.tag() == "dialog")
    }

    /// The rendered dialog element.
    pub fn dialog(&self) -> Result<NodeId> {
        self.modal
            .surface_root()
            .ok_or_else(|| Error::Invalid("dialog is not rendered".into()))
    }

    /// The first element under the dialog carrying `class`.
    pub fn by_class(&self, class: &str) -> Result<NodeId> {
        self.doc
            .query_all(self.dialog()?, |el| el.has_class(class))
            .first()
            .copied()
            .ok_or_else(|| Error::Invalid(format!("no element with class {class}")))
    }

    /// The first element under the body with tag `tag` whose text is `text`.
    pub fn by_text(&self, tag: &str, text: &str) -> Result<NodeId> {
        self.doc
            .query_all(self.doc.body(), |el| el.tag() == tag)
            .into_iter()
            .find(|id| self.doc.text_content(*id) == text)
            .ok_or_else(|| Error::Invalid(format!("no {tag} with text {text:?}")))
    }

    /// The focused element.
    pub fn focused(&self) -> Option<NodeId> {
        self.doc.active_element()
    }

    /// Dump the whole body.
    pub fn dump(&self) -> Result<String> {
        dump(&self.doc, self.doc.body())
    }
}
