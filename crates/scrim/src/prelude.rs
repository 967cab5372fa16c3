//! Convenience re-exports for common scrim types.

pub use crate::{
    Callback, Child, DialogState, Document, Markup, Modal, ModalOptions, ModalProps, NodeId,
    Size, SlotKind, error,
    event::{DomEvent, Event, EventType, key::Key, mouse::Button},
};

/// Common result alias for scrim operations.
pub type Result<T> = error::Result<T>;
