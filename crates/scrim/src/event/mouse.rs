//! Pointer input primitives.

/// Pointer button codes.
#[derive(Debug, Default, PartialOrd, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Button {
    /// Primary button.
    #[default]
    Left,
    /// Secondary button.
    Right,
    /// Middle button.
    Middle,
}
