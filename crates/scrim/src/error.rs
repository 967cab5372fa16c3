use std::result::Result as StdResult;

use thiserror::Error;

use crate::id::NodeId;

/// Result type for scrim operations.
pub type Result<T> = StdResult<T, Error>;

/// Core error type.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// A required construction property was not supplied.
    #[error("missing required property: {0}")]
    MissingProperty(&'static str),

    /// The node is not present in the document arena.
    #[error("node not found: {0:?}")]
    NodeNotFound(NodeId),

    /// The node is not a child of the given parent.
    #[error("node {child:?} is not a child of {parent:?}")]
    NotAChild {
        /// Expected parent.
        parent: NodeId,
        /// Node that was looked up.
        child: NodeId,
    },

    #[error("hierarchy: {0}")]
    /// Structural mutation would corrupt the tree.
    Hierarchy(String),

    #[error("mount point already attached: {0}")]
    /// A mount point was attached twice without a detach in between.
    AlreadyAttached(String),

    #[error("invalid: {0}")]
    /// Invalid input error.
    Invalid(String),

    #[error("config: {0}")]
    /// Configuration could not be parsed.
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}
