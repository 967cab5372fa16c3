//! The composed dialog: fixed layout, backdrop and keyboard handling.

use tracing::debug;

use crate::{
    config::Size,
    dom::Document,
    error::Result,
    event::EventType,
    focus_trap,
    id::NodeId,
    markup::Callback,
    slot::{DIALOG_ID, Slots, TITLE_ID, close_button},
};

/// Inline style keeping the dialog visible without the stylesheet's opening
/// transition.
const VISIBLE_STYLE: &str = "opacity: 1; visibility: visible";

/// Nested layout containers between the dialog element and the body region.
const LAYOUT: &[&[&str]] = &[
    &["rf-container--fluid", "rf-container-md"],
    &["rf-grid-row", "rf-grid-row--center"],
    &["rf-col-12", "rf-col-md-6"],
    &["rf-modal__body"],
];

/// A rendered dialog. The surface owns nothing but the id of its root; the
/// elements live in the document under the mount point they were rendered
/// into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surface {
    /// The `dialog` element.
    root: NodeId,
}

impl Surface {
    /// Build the dialog into `target` and install its handlers.
    ///
    /// The first close child fills the header, or a default close button bound
    /// to `hide` when there is none. Titles and contents fill the content
    /// region in that order, and footers follow it.
    pub fn render(
        doc: &mut Document,
        target: NodeId,
        slots: &Slots,
        size: Size,
        hide: &Callback,
    ) -> Result<Self> {
        let root = doc.create_element("dialog");
        doc.set_attr(root, "id", DIALOG_ID)?;
        doc.set_attr(root, "role", "dialog")?;
        doc.set_attr(root, "aria-labelledby", TITLE_ID)?;
        doc.set_attr(root, "data-testid", "modal")?;
        doc.set_attr(root, "style", VISIBLE_STYLE)?;
        doc.add_class(root, "rf-modal")?;
        if let Some(m) = size.modifier() {
            doc.add_class(root, m)?;
        }

        let mut body = root;
        for classes in LAYOUT {
            let div = doc.create_element("div");
            for c in *classes {
                doc.add_class(div, c)?;
            }
            doc.append_child(body, div)?;
            body = div;
        }

        let header = doc.create_element("div");
        doc.add_class(header, "rf-modal__header")?;
        doc.append_child(body, header)?;
        match slots.close.first() {
            Some(close) => close.markup().build_into(doc, header)?,
            None => close_button(hide.clone()).build_into(doc, header)?,
        };

        let content = doc.create_element("div");
        doc.add_class(content, "rf-modal__content")?;
        doc.append_child(body, content)?;
        for child in slots.title.iter().chain(&slots.content) {
            child.markup().build_into(doc, content)?;
        }
        for child in &slots.footer {
            child.markup().build_into(doc, body)?;
        }

        install_handlers(doc, root, hide)?;
        doc.append_child(target, root)?;
        Ok(Self { root })
    }

    /// Return the `dialog` element.
    pub fn root(&self) -> NodeId {
        self.root
    }
}

/// Backdrop click and keyboard handling on the dialog element.
fn install_handlers(doc: &mut Document, root: NodeId, hide: &Callback) -> Result<()> {
    let on_backdrop = hide.clone();
    doc.add_listener(root, EventType::Click, move |_, ev| {
        // Only presses on the dialog element itself, which is the backdrop
        // area around the centered column, dismiss.
        if ev.target == root {
            debug!("backdrop pressed, requesting dismissal");
            on_backdrop.call();
        }
        Ok(())
    })?;

    let on_escape = hide.clone();
    doc.add_listener(root, EventType::KeyDown, move |doc, ev| {
        let Some(key) = ev.key() else {
            return Ok(());
        };
        if key.is_escape() {
            debug!("escape pressed, requesting dismissal");
            on_escape.call();
            ev.prevent_default();
        }
        if key.is_tabbing() {
            focus_trap::handle_tab_key(doc, ev, root);
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;
    use crate::{
        markup::Markup,
        slot::{Child, classify},
    };

    fn counter() -> (Rc<Cell<usize>>, Callback) {
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        (hits, Callback::new(move || h.set(h.get() + 1)))
    }

    type Rendered = (Document, Surface, Rc<Cell<usize>>);

    fn render(children: &[Child], size: Size) -> Result<Rendered> {
        let mut doc = Document::new();
        let body = doc.body();
        let target = doc.create_element("div");
        doc.append_child(body, target)?;
        let (hits, hide) = counter();
        let slots = classify(children);
        let surface = Surface::render(&mut doc, target, &slots, size, &hide)?;
        Ok((doc, surface, hits))
    }

    fn region(doc: &Document, root: NodeId, class: &str) -> NodeId {
        doc.query_all(root, |el| el.has_class(class))[0]
    }

    #[test]
    fn root_attributes() -> Result<()> {
        let (doc, s, _) = render(&[Child::title("T")], Size::Medium)?;
        let root = s.root();
        assert_eq!(doc.tag(root), Some("dialog"));
        assert_eq!(doc.attr(root, "role"), Some("dialog"));
        assert_eq!(doc.attr(root, "id"), Some("rf-modal"));
        assert_eq!(doc.attr(root, "aria-labelledby"), Some(TITLE_ID));
        assert_eq!(doc.attr(root, "data-testid"), Some("modal"));
        assert_eq!(doc.classes(root), vec!["rf-modal"]);
        let title = doc.get_element_by_id(TITLE_ID).map(|t| doc.text_content(t));
        assert_eq!(title.as_deref(), Some("T"));
        Ok(())
    }

    #[test]
    fn size_modifier_classes() -> Result<()> {
        for (size, expected) in [
            (Size::Small, vec!["rf-modal", "rf-modal--sm"]),
            (Size::Medium, vec!["rf-modal"]),
            (Size::Large, vec!["rf-modal", "rf-modal--lg"]),
        ] {
            let (doc, s, _) = render(&[Child::title("T")], size)?;
            assert_eq!(doc.classes(s.root()), expected);
        }
        Ok(())
    }

    #[test]
    fn layout_order() -> Result<()> {
        let children = vec![
            Child::footer(Markup::new("span").text("F")),
            Child::content(Markup::new("p").text("C1")),
            Child::title("T"),
            Child::plain(Markup::new("p").text("dropped")),
            Child::content(Markup::new("p").text("C2")),
        ];
        let (doc, s, _) = render(&children, Size::Medium)?;
        let body = region(&doc, s.root(), "rf-modal__body");
        let kids = doc.children(body).to_vec();
        assert_eq!(kids.len(), 3);
        assert!(doc.has_class(kids[0], "rf-modal__header"));
        assert!(doc.has_class(kids[1], "rf-modal__content"));
        assert!(doc.has_class(kids[2], "rf-modal__footer"));
        assert_eq!(doc.text_content(kids[1]), "TC1C2");
        assert_eq!(doc.text_content(kids[2]), "F");
        assert!(!doc.text_content(s.root()).contains("dropped"));
        Ok(())
    }

    #[test]
    fn default_close_dismisses_once() -> Result<()> {
        let (mut doc, s, hits) = render(&[Child::title("T")], Size::Medium)?;
        let header = region(&doc, s.root(), "rf-modal__header");
        let buttons = doc.query_all(header, |el| el.tag() == "button");
        assert_eq!(buttons.len(), 1);
        assert_eq!(doc.attr(buttons[0], "aria-controls"), Some("rf-modal"));
        doc.click(buttons[0])?;
        assert_eq!(hits.get(), 1);
        Ok(())
    }

    #[test]
    fn supplied_close_replaces_default() -> Result<()> {
        let (own, own_cb) = counter();
        let children = vec![Child::title("T"), Child::close(own_cb)];
        let (mut doc, s, hits) = render(&children, Size::Medium)?;
        let header = region(&doc, s.root(), "rf-modal__header");
        let buttons = doc.query_all(header, |el| el.tag() == "button");
        assert_eq!(buttons.len(), 1);
        doc.click(buttons[0])?;
        assert_eq!(own.get(), 1);
        assert_eq!(hits.get(), 0);
        Ok(())
    }

    #[test]
    fn only_first_close_is_rendered() -> Result<()> {
        let children = vec![Child::close(|| {}), Child::close(|| {})];
        let (doc, s, _) = render(&children, Size::Medium)?;
        let header = region(&doc, s.root(), "rf-modal__header");
        assert_eq!(doc.children(header).len(), 1);
        Ok(())
    }

    #[test]
    fn backdrop_identity() -> Result<()> {
        let (mut doc, s, hits) = render(&[Child::title("T")], Size::Medium)?;
        let title = region(&doc, s.root(), "rf-modal__title");
        doc.click(title)?;
        let column = region(&doc, s.root(), "rf-col-12");
        doc.click(column)?;
        assert_eq!(hits.get(), 0);
        doc.click(s.root())?;
        assert_eq!(hits.get(), 1);
        Ok(())
    }
}
