use notecat_core::{resolve_selection, CatalogStore, NotebookRecord, SelectionSet, ValidationError};

fn record(name: &str, profiles: &[&str]) -> NotebookRecord {
    NotebookRecord {
        name: name.to_string(),
        description: None,
        image: None,
        processor: None,
        memory: None,
        storage: None,
        display: None,
        graphics: None,
        operating_system: None,
        positives: None,
        negatives: None,
        profiles: profiles.iter().map(|tag| tag.to_string()).collect(),
    }
}

fn loaded_store() -> CatalogStore {
    let mut store = CatalogStore::new();
    store.install(vec![
        record("A", &["gamer"]),
        record("B", &["student"]),
        record("C", &["gamer", "student"]),
    ]);
    store
}

#[test]
fn empty_selection_is_insufficient() {
    let store = loaded_store();
    let selection = SelectionSet::new();
    let err = resolve_selection(&store, &selection).unwrap_err();
    assert_eq!(err, ValidationError::InsufficientSelection);
}

#[test]
fn single_slot_is_insufficient() {
    let store = loaded_store();
    let mut selection = SelectionSet::new();
    selection.set_slot(0, Some("A".to_string()));
    let err = resolve_selection(&store, &selection).unwrap_err();
    assert_eq!(err, ValidationError::InsufficientSelection);
}

#[test]
fn duplicate_pair_collapses_and_is_insufficient() {
    let store = loaded_store();
    let mut selection = SelectionSet::new();
    selection.set_slot(0, Some("A".to_string()));
    selection.set_slot(1, Some("A".to_string()));
    let err = resolve_selection(&store, &selection).unwrap_err();
    assert_eq!(err, ValidationError::InsufficientSelection);
}

#[test]
fn all_stale_identifiers_yield_no_valid_selection() {
    let store = loaded_store();
    let mut selection = SelectionSet::new();
    selection.set_slot(0, Some("Gone".to_string()));
    selection.set_slot(1, Some("Also Gone".to_string()));
    let err = resolve_selection(&store, &selection).unwrap_err();
    assert_eq!(err, ValidationError::NoValidSelection);
}

#[test]
fn two_valid_slots_resolve_in_slot_order() {
    let store = loaded_store();
    let mut selection = SelectionSet::new();
    // Slot order deliberately differs from catalog order.
    selection.set_slot(0, Some("C".to_string()));
    selection.set_slot(2, Some("A".to_string()));
    let resolved = resolve_selection(&store, &selection).unwrap();
    let names: Vec<&str> = resolved.iter().map(|nb| nb.name.as_str()).collect();
    assert_eq!(names, vec!["C", "A"]);
}

#[test]
fn one_stale_of_two_distinct_still_resolves() {
    let store = loaded_store();
    let mut selection = SelectionSet::new();
    selection.set_slot(0, Some("A".to_string()));
    selection.set_slot(1, Some("Gone".to_string()));
    let resolved = resolve_selection(&store, &selection).unwrap();
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].name, "A");
}

#[test]
fn three_distinct_slots_resolve_to_three_records() {
    let store = loaded_store();
    let mut selection = SelectionSet::new();
    selection.set_slot(0, Some("B".to_string()));
    selection.set_slot(1, Some("A".to_string()));
    selection.set_slot(2, Some("C".to_string()));
    let resolved = resolve_selection(&store, &selection).unwrap();
    let names: Vec<&str> = resolved.iter().map(|nb| nb.name.as_str()).collect();
    assert_eq!(names, vec!["B", "A", "C"]);
}

#[test]
fn selection_against_empty_store_is_no_valid_selection() {
    let store = CatalogStore::new();
    let mut selection = SelectionSet::new();
    selection.set_slot(0, Some("A".to_string()));
    selection.set_slot(1, Some("B".to_string()));
    let err = resolve_selection(&store, &selection).unwrap_err();
    assert_eq!(err, ValidationError::NoValidSelection);
}
