//! Read-only queries: by organization, and descendants of a named folder.

use tracing::debug;

use crate::errors::{HierarchyError, Lookup};
use crate::folder::{Folder, OrgId, is_descendant_path};

use super::HierarchyStore;
use super::lookup::resolve_path;

impl HierarchyStore {
    /// Every folder owned by `org_id`, in collection order.
    ///
    /// The result is a fresh copy; an unknown organization yields an empty vec.
    pub fn list_by_org(&self, org_id: &OrgId) -> Vec<Folder> {
        let out: Vec<Folder> = self
            .folders
            .iter()
            .filter(|f| f.org_id == *org_id)
            .cloned()
            .collect();
        debug!(org_id = %org_id, count = out.len(), "Listed folders by organization");
        out
    }

    /// Proper descendants of the first folder named `name` inside `org_id`.
    ///
    /// Fails with `NotFound` when the organization has no folder of that name.
    /// A folder with no descendants yields an empty vec, not an error.
    pub fn list_descendants(
        &self,
        org_id: &OrgId,
        name: &str,
    ) -> Result<Vec<Folder>, HierarchyError> {
        let scoped = self.list_by_org(org_id);

        let ancestor = resolve_path(&scoped, name)
            .ok_or_else(|| HierarchyError::not_found(Lookup::Folder, name))?;

        let out: Vec<Folder> = scoped
            .iter()
            .filter(|f| is_descendant_path(&f.paths, ancestor))
            .cloned()
            .collect();
        debug!(org_id = %org_id, name, path = ancestor, count = out.len(), "Listed descendants");
        Ok(out)
    }
}
