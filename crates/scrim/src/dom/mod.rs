//! A headless document: an arena of elements with a body, focus, and event
//! dispatch with bubbling and default actions.

/// The document arena and its operations.
pub mod document;
/// Element data stored in the arena.
pub mod element;
/// Focusability rules and sequential navigation order.
pub mod focus;
/// Traversal helpers.
pub mod tree;

pub use document::{Document, Listener};
pub use element::Element;
