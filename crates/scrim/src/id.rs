//! Node keys and the unique identifier source used for mount points.

use slotmap::new_key_type;
use uuid::Uuid;

new_key_type! {
    /// Opaque identifier for an element stored in the document arena.
    pub struct NodeId;
}

/// A source of globally unique string identifiers.
///
/// Mount points take their element id from an `IdSource` so that tests can
/// supply deterministic values.
pub trait IdSource {
    /// Produce the next identifier. Identifiers must never repeat.
    fn next_id(&mut self) -> String;
}

/// Random version 4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidSource;

impl IdSource for UuidSource {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic identifiers of the form `{prefix}{n}`.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    /// Prefix prepended to every identifier.
    prefix: String,
    /// Next counter value.
    next: u64,
}

impl SequentialIds {
    /// Start a new sequence at zero.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

impl<T: IdSource + ?Sized> IdSource for &mut T {
    fn next_id(&mut self) -> String {
        (**self).next_id()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn sequential_ids_count_up() {
        let mut ids = SequentialIds::new("t");
        assert_eq!(ids.next_id(), "t0");
        assert_eq!(ids.next_id(), "t1");
        assert_eq!(ids.next_id(), "t2");
    }

    #[test]
    fn uuid_ids_are_unique() {
        let mut ids = UuidSource;
        let seen: HashSet<String> = (0..64).map(|_| ids.next_id()).collect();
        assert_eq!(seen.len(), 64);
        assert!(seen.iter().all(|id| id.len() == 36));
    }
}
