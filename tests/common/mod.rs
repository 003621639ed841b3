#![allow(dead_code)]

use folder_tree::{Folder, OrgId, default_org_id};

/// alpha(bravo(charlie), delta(echo)), foxtrot in `other`, golf.
pub fn tree(other: OrgId) -> Vec<Folder> {
    let org = default_org_id();
    vec![
        Folder::new("alpha", org, "alpha"),
        Folder::new("bravo", org, "alpha.bravo"),
        Folder::new("charlie", org, "alpha.bravo.charlie"),
        Folder::new("delta", org, "alpha.delta"),
        Folder::new("echo", org, "alpha.delta.echo"),
        Folder::new("foxtrot", other, "foxtrot"),
        Folder::new("golf", org, "golf"),
    ]
}

pub fn names(folders: &[Folder]) -> Vec<&str> {
    folders.iter().map(|f| f.name.as_str()).collect()
}

pub fn path_of<'a>(folders: &'a [Folder], name: &str) -> &'a str {
    folders
        .iter()
        .find(|f| f.name == name)
        .map(|f| f.paths.as_str())
        .unwrap_or_else(|| panic!("no folder named {name}"))
}
