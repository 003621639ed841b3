//! Typed error definitions for folder_tree.
//! Two recoverable failure families: a name that does not resolve, and a
//! relocation that breaks a structural rule. Neither is fatal to the process.

use std::fmt;
use thiserror::Error;

/// Which lookup failed to resolve a folder name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Plain lookup (descendant listing).
    Folder,
    /// The folder being moved.
    Source,
    /// The folder receiving the move.
    Destination,
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Lookup::Folder => "folder",
            Lookup::Source => "source",
            Lookup::Destination => "destination",
        };
        f.write_str(s)
    }
}

/// Structural rules a move can violate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidMove {
    #[error("self-move")]
    SelfMove,

    #[error("cross-organization move")]
    CrossOrganization,

    #[error("move into own subtree")]
    IntoOwnSubtree,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HierarchyError {
    #[error("{role} folder not found: {name}")]
    NotFound { role: Lookup, name: String },

    #[error("invalid operation: {0}")]
    InvalidOperation(InvalidMove),
}

impl HierarchyError {
    pub(crate) fn not_found(role: Lookup, name: &str) -> Self {
        HierarchyError::NotFound {
            role,
            name: name.to_string(),
        }
    }

    /// Stable numeric code for logs and exit statuses.
    pub fn code(&self) -> i32 {
        match self {
            HierarchyError::NotFound { role: Lookup::Folder, .. } => 10,
            HierarchyError::NotFound { role: Lookup::Source, .. } => 11,
            HierarchyError::NotFound { role: Lookup::Destination, .. } => 12,
            HierarchyError::InvalidOperation(InvalidMove::SelfMove) => 20,
            HierarchyError::InvalidOperation(InvalidMove::CrossOrganization) => 21,
            HierarchyError::InvalidOperation(InvalidMove::IntoOwnSubtree) => 22,
        }
    }

    /// Short machine-friendly label, used as the `kind` log field.
    pub fn kind(&self) -> &'static str {
        match self {
            HierarchyError::NotFound { .. } => "not_found",
            HierarchyError::InvalidOperation(InvalidMove::SelfMove) => "self_move",
            HierarchyError::InvalidOperation(InvalidMove::CrossOrganization) => "cross_organization",
            HierarchyError::InvalidOperation(InvalidMove::IntoOwnSubtree) => "into_own_subtree",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, HierarchyError::NotFound { .. })
    }
}

impl From<InvalidMove> for HierarchyError {
    fn from(rule: InvalidMove) -> Self {
        HierarchyError::InvalidOperation(rule)
    }
}
