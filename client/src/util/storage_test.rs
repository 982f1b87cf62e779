#![cfg(not(feature = "hydrate"))]

use super::*;
use content::Project;

#[test]
fn reads_are_empty_outside_the_browser() {
    assert_eq!(BrowserStorage::local().get_item("projects").expect("get"), None);
    assert_eq!(BrowserStorage::session().get_item("admin_authenticated").expect("get"), None);
}

#[test]
fn writes_are_accepted_and_dropped_outside_the_browser() {
    let storage = BrowserStorage::local();
    storage.set_item("projects", "[]").expect("set");
    storage.remove_item("projects").expect("remove");
    assert_eq!(storage.get_item("projects").expect("get"), None);
}

#[test]
fn content_store_reports_absent_collections_during_ssr() {
    assert!(content_store().load::<Project>().expect("load").is_none());
}

#[test]
fn local_and_session_are_distinct_areas() {
    assert_ne!(BrowserStorage::local(), BrowserStorage::session());
}
