use super::*;
use content::clock::StepClock;
use content::{Category, Collection, MemoryStorage, Project, ProjectFields};

fn valid_fields() -> ProjectFields {
    ProjectFields {
        title: "Tower A".to_owned(),
        description: "desc".to_owned(),
        image: "data:image/png;base64,AAAA".to_owned(),
        category: Category::Commercial,
    }
}

#[test]
fn loaded_from_without_errors_has_no_banner() {
    let state = AdminState::loaded_from(Dashboard::default(), &[]);
    assert!(state.loaded);
    assert!(state.error.is_none());
}

#[test]
fn loaded_from_reports_corrupt_collection() {
    let storage = MemoryStorage::new();
    storage.set_item("projects", "nope").expect("set");
    let (dashboard, errors) = Dashboard::load(&ContentStore::new(&storage));

    let state = AdminState::loaded_from(dashboard, &errors);

    let banner = state.error.expect("banner");
    assert!(banner.starts_with("Some saved content could not be read"));
    assert!(banner.contains("projects"));
}

#[test]
fn submit_validation_failure_does_not_set_banner() {
    let storage = MemoryStorage::new();
    let mut state = AdminState::default();

    let err = state.submit(&ContentStore::new(&storage), &StepClock::new(1)).expect_err("blank form");

    assert!(matches!(err, EditorError::Validation(_)));
    assert!(state.error.is_none());
}

#[test]
fn submit_storage_failure_sets_banner_and_keeps_draft() {
    let storage = MemoryStorage::with_quota(8);
    let mut state = AdminState::default();
    *state.dashboard.projects.form_mut() = valid_fields();

    state.submit(&ContentStore::new(&storage), &StepClock::new(1)).expect_err("quota");

    assert!(state.error.as_deref().is_some_and(|e| e.starts_with("Could not save changes")));
    assert_eq!(state.dashboard.projects.form(), &valid_fields());
}

#[test]
fn successful_submit_clears_previous_banner() {
    let storage = MemoryStorage::new();
    let mut state = AdminState { error: Some("old".to_owned()), ..AdminState::default() };
    *state.dashboard.projects.form_mut() = valid_fields();

    state.submit(&ContentStore::new(&storage), &StepClock::new(1)).expect("submit");

    assert!(state.error.is_none());
    assert_eq!(state.dashboard.projects.records().len(), 1);
}

#[test]
fn declined_delete_keeps_record() {
    let storage = MemoryStorage::new();
    let store = ContentStore::new(&storage);
    let mut state = AdminState::default();
    *state.dashboard.projects.form_mut() = valid_fields();
    state.submit(&store, &StepClock::new(9)).expect("submit");

    state.delete_project(&store, "9", false);
    assert_eq!(state.dashboard.projects.records().len(), 1);

    state.delete_project(&store, "9", true);
    assert!(state.dashboard.projects.records().is_empty());
    assert_eq!(store.load::<Project>().expect("load"), Some(Vec::new()));
}

#[test]
fn delete_of_unknown_floor_plan_is_quiet() {
    let storage = MemoryStorage::new();
    let store = ContentStore::new(&storage);
    let mut state = AdminState::default();
    state.dashboard.switch_tab(Collection::FloorPlans);

    state.delete_floor_plan(&store, "1", true);

    assert!(state.error.is_none());
    assert!(storage.is_empty());
}

#[test]
fn submit_to_unreadable_collection_sets_banner_and_keeps_blob() {
    let storage = MemoryStorage::new();
    storage.set_item("projects", r#"[{"id":"1","category":"Luxury"}]"#).expect("set");
    let store = ContentStore::new(&storage);
    let (dashboard, errors) = Dashboard::load(&store);
    let mut state = AdminState::loaded_from(dashboard, &errors);
    *state.dashboard.projects.form_mut() = valid_fields();

    state.submit(&store, &StepClock::new(1)).expect_err("locked");

    assert!(state.error.as_deref().is_some_and(|e| e.contains("Reset the list")));
    assert_eq!(
        storage.get_item("projects").expect("get").as_deref(),
        Some(r#"[{"id":"1","category":"Luxury"}]"#)
    );
}

#[test]
fn confirmed_reset_clears_banner_and_allows_saving() {
    let storage = MemoryStorage::new();
    storage.set_item("projects", "{").expect("set");
    let store = ContentStore::new(&storage);
    let (dashboard, errors) = Dashboard::load(&store);
    let mut state = AdminState::loaded_from(dashboard, &errors);

    state.reset_unreadable(&store, false);
    assert!(state.error.is_some());
    assert!(state.dashboard.is_unreadable());

    state.reset_unreadable(&store, true);
    assert!(state.error.is_none());

    *state.dashboard.projects.form_mut() = valid_fields();
    state.submit(&store, &StepClock::new(3)).expect("submit");
    assert_eq!(store.load::<Project>().expect("load").map(|p| p.len()), Some(1));
}
