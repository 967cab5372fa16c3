//! Events dispatched through the document.

pub mod key;
pub mod mouse;

use crate::id::NodeId;

/// The input that drives a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A key press.
    Key(key::Key),
    /// A pointer press-and-release on an element.
    Click(mouse::Button),
}

impl Event {
    /// The listener category this event is delivered to.
    pub fn event_type(&self) -> EventType {
        match self {
            Self::Key(_) => EventType::KeyDown,
            Self::Click(_) => EventType::Click,
        }
    }

    /// The key, if this is a keyboard event.
    pub fn key(&self) -> Option<key::Key> {
        match self {
            Self::Key(k) => Some(*k),
            Self::Click(_) => None,
        }
    }
}

/// Listener categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// Keyboard key down.
    KeyDown,
    /// Pointer click.
    Click,
}

/// An event in flight. Listeners receive it mutably so they can suppress the
/// default action or stop it from bubbling further.
#[derive(Debug, Clone)]
pub struct DomEvent {
    /// The input being dispatched.
    pub event: Event,
    /// The element the event originated at.
    pub target: NodeId,
    /// The element whose listeners are currently running.
    pub current_target: NodeId,
    /// Set when a listener suppressed the default action.
    default_prevented: bool,
    /// Set when a listener stopped bubbling.
    propagation_stopped: bool,
}

impl DomEvent {
    /// Construct an event aimed at `target`.
    pub fn new(event: Event, target: NodeId) -> Self {
        Self {
            event,
            target,
            current_target: target,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// Suppress the default action for this event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Has the default action been suppressed?
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Stop the event from reaching any further ancestors.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Has bubbling been stopped?
    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    /// The key, if this is a keyboard event.
    pub fn key(&self) -> Option<key::Key> {
        self.event.key()
    }
}
