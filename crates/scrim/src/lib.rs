//! Scrim: an accessible modal dialog over a headless document.
//!
//! A dialog is assembled from slot-tagged children (title, content, footer and
//! close control), rendered into a dedicated mount point under the document
//! body, and dismissed by Escape, a backdrop press or a close control. While
//! open, Tab and Shift+Tab wrap within the dialog.
//!
//! # Quick Start
//!
//! - [`Document`] - The element arena with focus and event dispatch
//! - [`ModalProps`] - Size, open flag, `hide` callback and children
//! - [`Modal`] - The controller that mounts and renders a dialog
//!
//! # Module Organization
//!
//! - [`slot`] - Slot tags and classification
//! - [`focus_trap`] - Tab wrapping inside a container
//! - [`mount`] - The per-instance attachment node
//! - [`surface`] - The rendered dialog and its handlers
//! - [`controller`] - Open/closed state and lifecycle

#![warn(missing_docs)]

pub mod config;
pub mod controller;
pub mod dom;
pub mod dump;
/// Error and result types.
pub mod error;
pub mod event;
pub mod focus_trap;
pub mod id;
pub mod markup;
pub mod mount;
pub mod prelude;
pub mod slot;
pub mod surface;
pub mod testing;

pub use config::{ModalOptions, Size};
pub use controller::{DialogState, Modal, ModalProps, ModalPropsBuilder};
pub use dom::{Document, Element, Listener};
pub use error::{Error, Result};
pub use id::{IdSource, NodeId, SequentialIds, UuidSource};
pub use markup::{Callback, Markup};
pub use slot::{Child, SlotKind, classify};
