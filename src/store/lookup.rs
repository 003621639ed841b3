//! Name resolution shared by descendant listing and moves.
//! Duplicate names are not rejected: the first record in collection order wins.

use crate::folder::Folder;

use super::HierarchyStore;

impl HierarchyStore {
    /// Index of the first folder named `name` in the whole collection.
    pub(super) fn position_of(&self, name: &str) -> Option<usize> {
        self.folders.iter().position(|f| f.name == name)
    }
}

/// Path of the first folder named `name` within an already-filtered set.
pub(super) fn resolve_path<'a>(folders: &'a [Folder], name: &str) -> Option<&'a str> {
    folders
        .iter()
        .find(|f| f.name == name)
        .map(|f| f.paths.as_str())
}
