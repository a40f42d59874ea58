use std::sync::Arc;

use chrono::{TimeZone, Utc};
use jobscraper_engine::{InMemorySlot, TemplateDraft, TemplateStore};
use uuid::Uuid;

fn fixed_clock_store(slot: InMemorySlot) -> TemplateStore<InMemorySlot> {
    TemplateStore::with_clock(
        slot,
        Arc::new(|| Utc.with_ymd_and_hms(2026, 8, 8, 12, 0, 0).unwrap()),
    )
}

fn remote_swe() -> TemplateDraft {
    TemplateDraft {
        name: "Remote SWE".to_string(),
        url: "https://x".to_string(),
        job_title: "Software Engineer".to_string(),
        location: "Remote".to_string(),
        source: "linkedin".to_string(),
    }
}

#[test]
fn create_assigns_identity_and_round_trips() {
    let store = fixed_clock_store(InMemorySlot::new());

    let created = store.create(remote_swe()).unwrap();

    assert_ne!(created.id, Uuid::nil());
    assert_eq!(
        created.created_at,
        Utc.with_ymd_and_hms(2026, 8, 8, 12, 0, 0).unwrap()
    );
    assert_eq!(created.name, "Remote SWE");
    assert_eq!(created.url, "https://x");
    assert_eq!(created.job_title, "Software Engineer");
    assert_eq!(created.location, "Remote");
    assert_eq!(created.source, "linkedin");

    let listed = store.list();
    assert_eq!(listed, vec![created]);
}

#[test]
fn list_preserves_insertion_order_and_ids_are_unique() {
    let store = fixed_clock_store(InMemorySlot::new());

    let first = store.create(remote_swe()).unwrap();
    let second = store
        .create(TemplateDraft {
            name: "NYC Analyst".to_string(),
            ..remote_swe()
        })
        .unwrap();

    assert_ne!(first.id, second.id);
    let listed = store.list();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].name, "Remote SWE");
    assert_eq!(listed[1].name, "NYC Analyst");
}

#[test]
fn delete_removes_only_the_matching_entry() {
    let store = fixed_clock_store(InMemorySlot::new());
    let first = store.create(remote_swe()).unwrap();
    let second = store
        .create(TemplateDraft {
            name: "Keeper".to_string(),
            ..remote_swe()
        })
        .unwrap();

    store.delete(first.id).unwrap();

    let listed = store.list();
    assert_eq!(listed, vec![second]);
}

#[test]
fn deleting_an_absent_id_is_a_noop() {
    let store = fixed_clock_store(InMemorySlot::new());
    let created = store.create(remote_swe()).unwrap();

    store.delete(Uuid::new_v4()).unwrap();

    assert_eq!(store.list(), vec![created]);
}

#[test]
fn empty_slot_lists_empty() {
    let store = fixed_clock_store(InMemorySlot::new());
    assert!(store.list().is_empty());
}

#[test]
fn unparseable_slot_lists_empty_without_raising() {
    scraper_logging::initialize_for_tests();
    let store = fixed_clock_store(InMemorySlot::with_raw("definitely not json"));
    assert!(store.list().is_empty());

    let store = fixed_clock_store(InMemorySlot::with_raw(r#"{"not":"an array"}"#));
    assert!(store.list().is_empty());
}

#[test]
fn create_on_a_corrupt_slot_starts_a_fresh_collection() {
    scraper_logging::initialize_for_tests();
    let store = fixed_clock_store(InMemorySlot::with_raw("garbage"));

    let created = store.create(remote_swe()).unwrap();

    assert_eq!(store.list(), vec![created]);
}

#[test]
fn empty_fields_are_accepted_unvalidated() {
    let store = fixed_clock_store(InMemorySlot::new());

    let created = store.create(TemplateDraft::default()).unwrap();

    assert_eq!(created.name, "");
    assert_eq!(created.url, "");
    assert_eq!(store.list().len(), 1);
}
