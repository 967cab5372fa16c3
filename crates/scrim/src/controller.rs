//! The stateful dialog wrapper an application embeds.
//!
//! A [`Modal`] owns one [`MountPoint`] for its whole life. Mounting attaches
//! it to the body, unmounting detaches it, and in between the dialog is
//! rendered into it whenever the open flag is set. The controller holds no
//! dismissal logic of its own: Escape, backdrop presses and close controls
//! all call the `hide` callback, and the application answers by calling
//! [`Modal::set_open`].

use tracing::debug;

use crate::{
    config::{ModalOptions, Size},
    dom::Document,
    error::{Error, Result},
    focus_trap::compute_focusable,
    id::{IdSource, NodeId, UuidSource},
    markup::Callback,
    mount::MountPoint,
    slot::{Child, classify},
    surface::Surface,
};

/// Construction properties of a dialog.
#[derive(Debug, Clone)]
pub struct ModalProps {
    /// Width category.
    size: Size,
    /// Whether the dialog is shown.
    is_open: bool,
    /// Dismissal request channel back to the application.
    hide: Callback,
    /// Slot-tagged children, in order.
    children: Vec<Child>,
}

impl ModalProps {
    /// Start building properties.
    pub fn builder() -> ModalPropsBuilder {
        ModalPropsBuilder::default()
    }

    /// Return the width category.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Is the dialog shown?
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Return the dismissal callback.
    pub fn hide(&self) -> &Callback {
        &self.hide
    }

    /// Return the children.
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Copy with a different open flag.
    pub fn with_open(mut self, open: bool) -> Self {
        self.is_open = open;
        self
    }

    /// Copy with a different size.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }
}

/// Builder for [`ModalProps`]. `hide` and at least one child are required.
#[derive(Debug, Default)]
pub struct ModalPropsBuilder {
    /// Width category.
    size: Size,
    /// Initial open flag.
    is_open: bool,
    /// Dismissal callback.
    hide: Option<Callback>,
    /// Children collected so far.
    children: Vec<Child>,
}

impl ModalPropsBuilder {
    /// Set the width category.
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Set the open flag.
    pub fn open(mut self, open: bool) -> Self {
        self.is_open = open;
        self
    }

    /// Apply deserialized options.
    pub fn options(mut self, options: ModalOptions) -> Self {
        self.size = options.size;
        self.is_open = options.is_open;
        self
    }

    /// Set the dismissal callback.
    pub fn hide(mut self, hide: impl Into<Callback>) -> Self {
        self.hide = Some(hide.into());
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

    /// Validate and produce the properties.
    pub fn build(self) -> Result<ModalProps> {
        let hide = self.hide.ok_or(Error::MissingProperty("hide"))?;
        if self.children.is_empty() {
            return Err(Error::MissingProperty("children"));
        }
        Ok(ModalProps {
            size: self.size,
            is_open: self.is_open,
            hide,
            children: self.children,
        })
    }
}

/// The two controller states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    /// Nothing is rendered into the mount point.
    Closed,
    /// The dialog surface is rendered into the mount point.
    Open,
}

/// A dialog instance.
#[derive(Debug)]
pub struct Modal {
    /// Current properties.
    props: ModalProps,
    /// Render target, owned for the instance's lifetime.
    mount: MountPoint,
    /// Whether the instance is mounted in the application.
    mounted: bool,
    /// The rendered surface while open and mounted.
    surface: Option<Surface>,
}

impl Modal {
    /// Create an instance whose mount point takes a random UUID.
    pub fn new(doc: &mut Document, props: ModalProps) -> Result<Self> {
        Self::with_ids(doc, props, &mut UuidSource)
    }

    /// Create an instance whose mount point id comes from `ids`.
    pub fn with_ids(doc: &mut Document, props: ModalProps, ids: &mut dyn IdSource) -> Result<Self> {
        let mount = MountPoint::create(doc, ids)?;
        Ok(Self {
            props,
            mount,
            mounted: false,
            surface: None,
        })
    }

    /// Return the current state.
    pub fn state(&self) -> DialogState {
        if self.props.is_open {
            DialogState::Open
        } else {
            DialogState::Closed
        }
    }

    /// Is the open flag set?
    pub fn is_open(&self) -> bool {
        self.props.is_open
    }

    /// Is the instance mounted?
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Return the current properties.
    pub fn props(&self) -> &ModalProps {
        &self.props
    }

    /// Return the width category.
    pub fn size(&self) -> Size {
        self.props.size
    }

    /// Return the mount point.
    pub fn mount_point(&self) -> &MountPoint {
        &self.mount
    }

    /// The rendered `dialog` element, if any.
    pub fn surface_root(&self) -> Option<NodeId> {
        self.surface.map(|s| s.root())
    }

    /// Attach the mount point and render. Mounting a mounted instance does
    /// nothing.
    pub fn mount(&mut self, doc: &mut Document) -> Result<()> {
        if self.mounted {
            debug!(id = %self.mount.element_id(), "already mounted");
            return Ok(());
        }
        self.mount.attach(doc)?;
        self.mounted = true;
        self.render(doc)
    }

    /// Remove the surface and detach the mount point. Unmounting an instance
    /// that was never mounted does nothing, and nodes removed behind our back
    /// are ignored.
    pub fn unmount(&mut self, doc: &mut Document) {
        if !self.mounted {
            return;
        }
        self.clear_surface(doc);
        self.mount.detach(doc);
        self.mounted = false;
    }

    /// Change the open flag, re-rendering in place when mounted.
    pub fn set_open(&mut self, doc: &mut Document, open: bool) -> Result<()> {
        if self.props.is_open == open {
            return Ok(());
        }
        debug!(id = %self.mount.element_id(), open, "dialog state change");
        self.props.is_open = open;
        self.render(doc)
    }

    /// Replace the properties, re-rendering in place when mounted.
    pub fn update(&mut self, doc: &mut Document, props: ModalProps) -> Result<()> {
        if self.props.is_open != props.is_open {
            debug!(id = %self.mount.element_id(), open = props.is_open, "dialog state change");
        }
        self.props = props;
        self.render(doc)
    }

    /// Bring the mount point's content in line with the current properties.
    ///
    /// Does nothing before mount. When focus was inside the previous surface,
    /// it moves to the element at the same position in the new one.
    pub fn render(&mut self, doc: &mut Document) -> Result<()> {
        if !self.mounted {
            return Ok(());
        }
        let restore = self.focus_position(doc);
        self.clear_surface(doc);
        if !self.props.is_open {
            return Ok(());
        }
        let slots = classify(&self.props.children);
        let surface = Surface::render(
            doc,
            self.mount.node(),
            &slots,
            self.props.size,
            &self.props.hide,
        )?;
        if let Some(pos) = restore
            && let Some(target) = compute_focusable(doc, surface.root()).get(pos)
        {
            doc.focus(*target);
        }
        self.surface = Some(surface);
        Ok(())
    }

    /// Unmount and free the mount point.
    pub fn destroy(mut self, doc: &mut Document) {
        self.unmount(doc);
        self.mount.destroy(doc);
    }

    /// Index of the focused element within the current surface's focusable set.
    fn focus_position(&self, doc: &Document) -> Option<usize> {
        let root = self.surface?.root();
        let active = doc.active_element()?;
        compute_focusable(doc, root).iter().position(|id| *id == active)
    }

    /// Free the current surface's elements.
    fn clear_surface(&mut self, doc: &mut Document) {
        let Some(surface) = self.surface.take() else {
            return;
        };
        if doc.exists(surface.root())
            && let Err(e) = doc.destroy(surface.root())
        {
            debug!(error = %e, "surface already gone");
        }
    }
}
