//! Slot-tagged dialog children and their classification.
//!
//! Every child passed to a dialog carries an explicit [`SlotKind`] set by the
//! constructor that made it. Classification is plain equality on that tag; a
//! child made with [`Child::plain`] has no slot and is never rendered.

use std::{fmt, str::FromStr};

use tracing::debug;

use crate::{
    error::{Error, Result},
    markup::{Callback, Markup},
};

/// The id the title element carries, referenced by the dialog's
/// `aria-labelledby`.
pub const TITLE_ID: &str = "rf-modal-title-modal";

/// The id of the dialog element, referenced by close controls.
pub const DIALOG_ID: &str = "rf-modal";

/// Named regions of the dialog layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// Dialog heading.
    Title,
    /// Dialog body.
    Content,
    /// Actions row below the body.
    Footer,
    /// Dismiss control in the header.
    Close,
}

impl SlotKind {
    /// All slot kinds, in layout order.
    pub const ALL: [Self; 4] = [Self::Close, Self::Title, Self::Content, Self::Footer];
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Title => "title",
            Self::Content => "content",
            Self::Footer => "footer",
            Self::Close => "close",
        })
    }
}

impl FromStr for SlotKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "title" => Ok(Self::Title),
            "content" => Ok(Self::Content),
            "footer" => Ok(Self::Footer),
            "close" => Ok(Self::Close),
            _ => Err(Error::Invalid(format!("unknown slot kind: {s}"))),
        }
    }
}

/// A dialog child: opaque markup plus an optional slot tag.
#[derive(Debug, Clone)]
pub struct Child {
    /// Slot tag, `None` for children no slot accepts.
    slot: Option<SlotKind>,
    /// Content built into the slot's region.
    markup: Markup,
}

impl Child {
    /// Tag arbitrary markup with a slot kind.
    pub fn new(slot: SlotKind, markup: Markup) -> Self {
        Self {
            slot: Some(slot),
            markup,
        }
    }

    /// A child with no slot. Dialogs drop these.
    pub fn plain(markup: Markup) -> Self {
        Self { slot: None, markup }
    }

    /// A title heading carrying [`TITLE_ID`].
    pub fn title(text: &str) -> Self {
        Self::new(
            SlotKind::Title,
            Markup::new("h1")
                .id(TITLE_ID)
                .class("rf-modal__title")
                .text(text),
        )
    }

    /// Body content.
    pub fn content(markup: Markup) -> Self {
        Self::new(SlotKind::Content, markup)
    }

    /// A footer wrapping `markup`.
    pub fn footer(markup: Markup) -> Self {
        Self::new(
            SlotKind::Footer,
            Markup::new("div").class("rf-modal__footer").child(markup),
        )
    }

    /// A close control that invokes `on_close` when pressed.
    pub fn close(on_close: impl Into<Callback>) -> Self {
        Self::new(SlotKind::Close, close_button(on_close.into()))
    }

    /// Return the slot tag.
    pub fn slot(&self) -> Option<SlotKind> {
        self.slot
    }

    /// Return the content.
    pub fn markup(&self) -> &Markup {
        &self.markup
    }
}

/// The standard close button, bound to `on_close`.
pub fn close_button(on_close: Callback) -> Markup {
    Markup::new("button")
        .class("rf-link--close")
        .class("rf-link")
        .attr("title", "Fermer la fenêtre modale")
        .attr("aria-controls", DIALOG_ID)
        .text("Fermer")
        .on_click(move || {
            debug!("close control pressed, requesting dismissal");
            on_close.call();
        })
}

/// Children partitioned by slot kind. Order within a bucket follows input order.
#[derive(Debug, Clone, Default)]
pub struct Slots {
    /// Title children.
    pub title: Vec<Child>,
    /// Content children.
    pub content: Vec<Child>,
    /// Footer children.
    pub footer: Vec<Child>,
    /// Close children.
    pub close: Vec<Child>,
}

impl Slots {
    /// The bucket for a slot kind.
    pub fn bucket(&self, kind: SlotKind) -> &[Child] {
        match kind {
            SlotKind::Title => &self.title,
            SlotKind::Content => &self.content,
            SlotKind::Footer => &self.footer,
            SlotKind::Close => &self.close,
        }
    }

    /// Total number of classified children.
    pub fn len(&self) -> usize {
        self.title.len() + self.content.len() + self.footer.len() + self.close.len()
    }

    /// Were no children classified?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition `children` by slot kind, dropping untagged children.
pub fn classify<'a>(children: impl IntoIterator<Item = &'a Child>) -> Slots {
    let mut slots = Slots::default();
    for child in children {
        let bucket = match child.slot {
            Some(SlotKind::Title) => &mut slots.title,
            Some(SlotKind::Content) => &mut slots.content,
            Some(SlotKind::Footer) => &mut slots.footer,
            Some(SlotKind::Close) => &mut slots.close,
            None => continue,
        };
        bucket.push(child.clone());
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(kind: Option<SlotKind>, n: usize) -> Child {
        let m = Markup::new("div").attr("data-n", &n.to_string());
        match kind {
            Some(k) => Child::new(k, m),
            None => Child::plain(m),
        }
    }

    fn ns(children: &[Child]) -> Vec<&str> {
        children
            .iter()
            .filter_map(|c| c.markup().get_attr("data-n"))
            .collect()
    }

    #[test]
    fn partitions_by_tag_not_position() {
        let children = vec![
            tagged(Some(SlotKind::Footer), 0),
            tagged(Some(SlotKind::Title), 1),
            tagged(None, 2),
            tagged(Some(SlotKind::Content), 3),
            tagged(Some(SlotKind::Footer), 4),
            tagged(Some(SlotKind::Content), 5),
        ];
        let slots = classify(&children);
        assert_eq!(ns(&slots.title), vec!["1"]);
        assert_eq!(ns(&slots.content), vec!["3", "5"]);
        assert_eq!(ns(&slots.footer), vec!["0", "4"]);
        assert!(slots.close.is_empty());
        assert_eq!(slots.len(), 5);
    }

    #[test]
    fn empty_input() {
        let none: Vec<Child> = Vec::new();
        let slots = classify(&none);
        assert!(slots.is_empty());
    }

    #[test]
    fn constructors_set_tags() {
        assert_eq!(Child::title("x").slot(), Some(SlotKind::Title));
        assert_eq!(Child::title("x").markup().get_attr("id"), Some(TITLE_ID));
        assert_eq!(
            Child::content(Markup::new("p")).slot(),
            Some(SlotKind::Content)
        );
        assert_eq!(
            Child::footer(Markup::new("p")).slot(),
            Some(SlotKind::Footer)
        );
        assert_eq!(Child::close(|| {}).slot(), Some(SlotKind::Close));
        assert_eq!(Child::plain(Markup::new("p")).slot(), None);
    }

    #[test]
    fn slot_kind_names() -> Result<()> {
        for kind in SlotKind::ALL {
            assert_eq!(kind.to_string().parse::<SlotKind>()?, kind);
        }
        assert!("header".parse::<SlotKind>().is_err());
        Ok(())
    }
}
