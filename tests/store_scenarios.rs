//! End-to-end checks of the store, projection, and theme through the public API.

use pretty_assertions::assert_eq;
use tasklist::model::{SortKey, SortOrder, Task, ThemePreference};
use tasklist::ops::{SortState, TaskStore, project, sort_tasks};

fn texts(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|t| t.text.clone()).collect()
}

#[test]
fn add_then_delete_middle_keeps_order() {
    let mut store = TaskStore::new();
    let _a = store.add("A", "", "").unwrap();
    let b = store.add("B", "", "").unwrap();
    let _c = store.add("C", "", "").unwrap();

    store.delete(b);

    let remaining: Vec<&str> = store.tasks().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(remaining, vec!["A", "C"]);
}

#[test]
fn ids_stay_unique_across_deletes() {
    let mut store = TaskStore::new();
    let a = store.add("A", "", "").unwrap();
    store.add("B", "", "").unwrap();
    store.delete(a);
    store.add("C", "", "").unwrap();
    store.add("D", "", "").unwrap();

    let mut ids: Vec<u64> = store.tasks().iter().map(|t| t.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), store.len());
}

#[test]
fn every_add_grows_by_one() {
    let mut store = TaskStore::new();
    for (i, text) in ["one", " two ", "three\t"].iter().enumerate() {
        let id = store.add(text, "", "").unwrap();
        assert_eq!(store.len(), i + 1);
        assert!(!store.get(id).unwrap().completed);
    }
    assert_eq!(store.add("", "2024-01-01", "High"), None);
    assert_eq!(store.add("   ", "", ""), None);
    assert_eq!(store.len(), 3);
}

#[test]
fn projection_does_not_mutate_store() {
    let mut store = TaskStore::new();
    store.add("Banana", "2024-03-01", "Low");
    store.add("apple", "2024-01-15", "High");
    store.add("Cherry", "", "Medium");
    let before = store.tasks().to_vec();
    let revision = store.revision();

    let by_name = sort_tasks(store.tasks(), SortState::new(SortKey::Name, SortOrder::Asc));
    assert_eq!(texts(&by_name), vec!["apple", "Banana", "Cherry"]);
    let by_name_desc = sort_tasks(store.tasks(), SortState::new(SortKey::Name, SortOrder::Desc));
    assert_eq!(texts(&by_name_desc), vec!["Cherry", "Banana", "apple"]);

    assert_eq!(store.tasks(), before.as_slice());
    assert_eq!(store.revision(), revision);
}

#[test]
fn completed_view_tracks_toggles() {
    let mut store = TaskStore::new();
    let low = store.add("low", "", "Low").unwrap();
    let high = store.add("high", "", "High").unwrap();
    store.add("medium", "", "Medium");
    store.toggle_complete(low);
    store.toggle_complete(high);

    let sort = SortState::new(SortKey::Priority, SortOrder::Desc);
    let view = project(store.tasks(), sort);
    assert_eq!(texts(&view.tasks), vec!["high", "medium", "low"]);
    assert_eq!(texts(&view.completed), vec!["high", "low"]);

    store.toggle_complete(high);
    let view = project(store.tasks(), sort);
    assert_eq!(texts(&view.completed), vec!["low"]);
}

#[test]
fn selecting_same_key_twice_restores_ascending() {
    let mut store = TaskStore::new();
    store.add("later", "2024-03-01", "");
    store.add("sooner", "2024-01-15", "");

    let mut sort = SortState::new(SortKey::Name, SortOrder::Asc);
    sort.select(SortKey::Date);
    let first = texts(&sort_tasks(store.tasks(), sort));
    assert_eq!(first, vec!["sooner", "later"]);

    sort.select(SortKey::Date);
    assert_eq!(texts(&sort_tasks(store.tasks(), sort)), vec!["later", "sooner"]);
    sort.select(SortKey::Date);
    assert_eq!(texts(&sort_tasks(store.tasks(), sort)), first);
}

#[test]
fn update_is_a_full_replacement() {
    let mut store = TaskStore::new();
    let id = store.add("draft", "2024-01-01", "Low").unwrap();
    let mut edited = store.get(id).unwrap().clone();
    edited.text = "final".into();
    edited.date = String::new();
    edited.priority = "High".into();
    edited.completed = true;

    assert!(store.update(edited.clone()));
    assert_eq!(store.tasks(), &[edited]);
}

#[test]
fn theme_toggles_between_two_values() {
    let mut theme = ThemePreference::default();
    assert_eq!(theme, ThemePreference::Light);
    theme.toggle();
    assert_eq!(theme, ThemePreference::Dark);
    theme.toggle();
    assert_eq!(theme, ThemePreference::Light);
}
