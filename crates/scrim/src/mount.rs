//! A dedicated, uniquely identified attachment node under the body.

use tracing::debug;

use crate::{
    dom::Document,
    error::{Error, Result},
    id::{IdSource, NodeId},
};

/// Prefix of every mount point's element id.
pub const MOUNT_ID_PREFIX: &str = "root-modal-";

/// The render target a dialog instance owns for its whole lifetime.
///
/// The node is created detached. [`attach`](Self::attach) appends it to the
/// body and [`detach`](Self::detach) removes it again; the two always pair
/// up, and detaching a node something else already removed is not an error.
#[derive(Debug)]
pub struct MountPoint {
    /// Unique `id` attribute of the node.
    element_id: String,
    /// The attachment node.
    node: NodeId,
    /// Whether we appended the node to the body and have not removed it since.
    attached: bool,
}

impl MountPoint {
    /// Create a detached `div` with a fresh unique id.
    pub fn create(doc: &mut Document, ids: &mut dyn IdSource) -> Result<Self> {
        let element_id = format!("{MOUNT_ID_PREFIX}{}", ids.next_id());
        let node = doc.create_element("div");
        doc.set_attr(node, "id", &element_id)?;
        Ok(Self {
            element_id,
            node,
            attached: false,
        })
    }

    /// Return the element id.
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    /// Return the attachment node.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Is the mount point currently attached by us?
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Append the node to the body.
    pub fn attach(&mut self, doc: &mut Document) -> Result<()> {
        if self.attached {
            return Err(Error::AlreadyAttached(self.element_id.clone()));
        }
        let body = doc.body();
        doc.append_child(body, self.node)?;
        self.attached = true;
        debug!(id = %self.element_id, "mount point attached");
        Ok(())
    }

    /// Remove the node from the body. A node that is already gone, removed
    /// from the body or freed by someone else, is ignored.
    pub fn detach(&mut self, doc: &mut Document) {
        if !self.attached {
            return;
        }
        self.attached = false;
        let body = doc.body();
        match doc.remove_child(body, self.node) {
            Ok(()) => debug!(id = %self.element_id, "mount point detached"),
            Err(e) => debug!(id = %self.element_id, error = %e, "mount point already detached"),
        }
    }

    /// Detach and free the node.
    pub fn destroy(mut self, doc: &mut Document) {
        self.detach(doc);
        if doc.exists(self.node)
            && let Err(e) = doc.destroy(self.node)
        {
            debug!(id = %self.element_id, error = %e, "mount point not freed");
        }
    }
}
