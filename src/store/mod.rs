//! Hierarchy store: an owned, ordered collection of folder records.
//!
//! The tree is a derived view over the materialized paths; there are no
//! parent/child pointers. The store assumes exclusive access; callers that
//! share it across threads must wrap it in their own lock.

mod list;
mod lookup;
mod relocate;

use crate::folder::{Folder, OrgId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HierarchyStore {
    folders: Vec<Folder>,
}

impl HierarchyStore {
    /// Take ownership of an initial collection. Order is preserved as given.
    pub fn new(folders: Vec<Folder>) -> Self {
        Self { folders }
    }

    /// Live view of the backing collection.
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// First folder with this name anywhere in the collection.
    pub fn find(&self, name: &str) -> Option<&Folder> {
        self.position_of(name).map(|i| &self.folders[i])
    }

    /// Distinct organization ids in first-seen order.
    pub fn organizations(&self) -> Vec<OrgId> {
        let mut seen: Vec<OrgId> = Vec::new();
        for f in &self.folders {
            if !seen.contains(&f.org_id) {
                seen.push(f.org_id);
            }
        }
        seen
    }
}

impl From<Vec<Folder>> for HierarchyStore {
    fn from(folders: Vec<Folder>) -> Self {
        Self::new(folders)
    }
}
