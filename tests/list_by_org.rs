mod common;

use folder_tree::{Folder, HierarchyStore, default_org_id};
use uuid::Uuid;

#[test]
fn empty_collection_yields_empty() {
    let store = HierarchyStore::new(Vec::new());
    assert!(store.list_by_org(&default_org_id()).is_empty());
}

#[test]
fn single_folder() {
    let f = Folder::new("alpha", default_org_id(), "alpha");
    let store = HierarchyStore::new(vec![f.clone()]);
    assert_eq!(store.list_by_org(&default_org_id()), vec![f]);
}

#[test]
fn many_folders_filtered_in_order() {
    let other = Uuid::new_v4();
    let store = HierarchyStore::new(common::tree(other));
    let got = store.list_by_org(&default_org_id());
    assert_eq!(
        common::names(&got),
        ["alpha", "bravo", "charlie", "delta", "echo", "golf"]
    );
    assert_eq!(common::names(&store.list_by_org(&other)), ["foxtrot"]);
}

#[test]
fn no_folders_in_requested_org() {
    let other = Uuid::new_v4();
    let store = HierarchyStore::new(vec![Folder::new("alpha", other, "alpha")]);
    assert!(store.list_by_org(&default_org_id()).is_empty());
}

#[test]
fn result_is_a_copy() {
    let store = HierarchyStore::new(common::tree(Uuid::new_v4()));
    let before = store.clone();
    let mut got = store.list_by_org(&default_org_id());
    got[0].paths = "tampered".into();
    got.clear();
    assert_eq!(store, before);
}
