//! Folder record and materialized-path helpers.
//!
//! A folder's `paths` field holds its full ancestry as dot-delimited names,
//! e.g. `alpha.bravo.charlie`. A root folder's path is just its own name.
//! All ancestor/descendant checks compare against `ancestor + "."` so that
//! `alpha` never matches `alphaa`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque ownership partition identifier.
pub type OrgId = Uuid;

/// Separator between path segments.
pub const PATH_DELIMITER: char = '.';

/// Organization used by the sample generator and as the CLI default.
pub const DEFAULT_ORG_ID: &str = "c1556e17-b7c0-45a3-a6ae-9546248fb17a";

pub fn default_org_id() -> OrgId {
    Uuid::parse_str(DEFAULT_ORG_ID).unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Folder {
    pub name: String,
    pub org_id: OrgId,
    pub paths: String,
}

impl Folder {
    pub fn new(name: impl Into<String>, org_id: OrgId, paths: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            org_id,
            paths: paths.into(),
        }
    }

    /// Number of segments in the path (1 for a root).
    pub fn depth(&self) -> usize {
        self.paths.split(PATH_DELIMITER).count()
    }

    pub fn is_root(&self) -> bool {
        !self.paths.contains(PATH_DELIMITER)
    }

    /// Path of the immediate parent, `None` for roots.
    pub fn parent_path(&self) -> Option<&str> {
        self.paths
            .rsplit_once(PATH_DELIMITER)
            .map(|(parent, _)| parent)
    }
}

/// Prefix shared by every proper descendant of `path`.
#[inline]
pub fn descendant_prefix(path: &str) -> String {
    let mut prefix = String::with_capacity(path.len() + 1);
    prefix.push_str(path);
    prefix.push(PATH_DELIMITER);
    prefix
}

/// True when `candidate` lies strictly below `ancestor`.
pub fn is_descendant_path(candidate: &str, ancestor: &str) -> bool {
    candidate
        .strip_prefix(ancestor)
        .is_some_and(|rest| rest.starts_with(PATH_DELIMITER))
}

/// Re-root `path` from `old_ancestor` onto `new_ancestor`, keeping the
/// remainder intact. Returns `None` if `path` is not a proper descendant.
pub fn rebase_path(path: &str, old_ancestor: &str, new_ancestor: &str) -> Option<String> {
    let rest = path
        .strip_prefix(old_ancestor)?
        .strip_prefix(PATH_DELIMITER)?;
    let mut out = descendant_prefix(new_ancestor);
    out.push_str(rest);
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descendant_check_is_segment_aware() {
        assert!(is_descendant_path("alpha.beta", "alpha"));
        assert!(is_descendant_path("alpha.beta.gamma", "alpha.beta"));
        assert!(!is_descendant_path("alpha", "alpha"));
        assert!(!is_descendant_path("alphaa", "alpha"));
        assert!(!is_descendant_path("alphaa.beta", "alpha"));
    }

    #[test]
    fn rebase_keeps_remainder() {
        assert_eq!(
            rebase_path("alpha.bravo.charlie", "alpha.bravo", "alpha.delta.bravo").as_deref(),
            Some("alpha.delta.bravo.charlie")
        );
        assert_eq!(rebase_path("alphaa.x", "alpha", "zulu"), None);
        assert_eq!(rebase_path("alpha", "alpha", "zulu"), None);
    }

    #[test]
    fn depth_and_parent() {
        let root = Folder::new("alpha", default_org_id(), "alpha");
        assert!(root.is_root());
        assert_eq!(root.depth(), 1);
        assert_eq!(root.parent_path(), None);

        let leaf = Folder::new("charlie", default_org_id(), "alpha.bravo.charlie");
        assert!(!leaf.is_root());
        assert_eq!(leaf.depth(), 3);
        assert_eq!(leaf.parent_path(), Some("alpha.bravo"));
    }

    #[test]
    fn default_org_parses() {
        assert_eq!(default_org_id().to_string(), DEFAULT_ORG_ID);
    }

    #[test]
    fn serializes_with_wire_keys() {
        let f = Folder::new("alpha", default_org_id(), "alpha");
        let v = serde_json::to_value(&f).unwrap();
        assert_eq!(v["name"], "alpha");
        assert_eq!(v["org_id"], DEFAULT_ORG_ID);
        assert_eq!(v["paths"], "alpha");
    }
}
