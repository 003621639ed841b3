//! Moving a folder, with its whole subtree, under a new parent.
//!
//! All checks run before anything is written, so a rejected move leaves the
//! collection exactly as it was.

use tracing::{info, warn};

use crate::errors::{HierarchyError, InvalidMove, Lookup};
use crate::folder::{Folder, descendant_prefix, is_descendant_path, rebase_path};

use super::HierarchyStore;

/// A validated move, ready to apply.
#[derive(Debug)]
struct MovePlan {
    source: usize,
    old_path: String,
    new_path: String,
}

impl HierarchyStore {
    /// Re-parent `source` (and everything below it) under `destination`.
    ///
    /// Both names resolve against the whole collection, first match wins.
    /// Returns the full collection after the rewrite.
    pub fn move_folder(
        &mut self,
        source: &str,
        destination: &str,
    ) -> Result<&[Folder], HierarchyError> {
        let plan = match self.plan_move(source, destination) {
            Ok(plan) => plan,
            Err(e) => {
                warn!(code = e.code(), kind = e.kind(), source, destination, "Move rejected");
                return Err(e);
            }
        };

        let rewritten = self.apply(&plan);
        info!(
            source,
            destination,
            from = %plan.old_path,
            to = %plan.new_path,
            rewritten,
            "Moved folder"
        );
        Ok(&self.folders)
    }

    fn plan_move(&self, source: &str, destination: &str) -> Result<MovePlan, HierarchyError> {
        let src_idx = self
            .position_of(source)
            .ok_or_else(|| HierarchyError::not_found(Lookup::Source, source))?;
        let dst_idx = self
            .position_of(destination)
            .ok_or_else(|| HierarchyError::not_found(Lookup::Destination, destination))?;

        if src_idx == dst_idx {
            return Err(InvalidMove::SelfMove.into());
        }

        let src = &self.folders[src_idx];
        let dst = &self.folders[dst_idx];

        if src.org_id != dst.org_id {
            return Err(InvalidMove::CrossOrganization.into());
        }
        if is_descendant_path(&dst.paths, &src.paths) {
            return Err(InvalidMove::IntoOwnSubtree.into());
        }

        let mut new_path = descendant_prefix(&dst.paths);
        new_path.push_str(&src.name);

        Ok(MovePlan {
            source: src_idx,
            old_path: src.paths.clone(),
            new_path,
        })
    }

    /// Rewrite the source and its descendants; returns how many records changed.
    /// Descendants are matched across the whole collection, not just the source's organization.
    fn apply(&mut self, plan: &MovePlan) -> usize {
        let mut rewritten = 1;

        for (i, f) in self.folders.iter_mut().enumerate() {
            if i == plan.source {
                continue;
            }
            if let Some(p) = rebase_path(&f.paths, &plan.old_path, &plan.new_path) {
                f.paths = p;
                rewritten += 1;
            }
        }

        self.folders[plan.source].paths = plan.new_path.clone();
        rewritten
    }
}
