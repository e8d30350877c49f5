//! Concurrency checks for the in-memory store: racing writers never break
//! secondary-key uniqueness.

use std::sync::Barrier;
use std::thread;

use roster_core::records::{GroupRecord, UserRecord};
use roster_store::{GroupRepository, InMemoryStore, StoreError, UserRepository};

const WRITERS: usize = 16;

#[test]
fn racing_creates_with_same_user_name_admit_exactly_one() {
    let store = InMemoryStore::new();
    let barrier = Barrier::new(WRITERS);

    let outcomes: Vec<Result<UserRecord, StoreError>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..WRITERS)
            .map(|_| {
                let barrier = &barrier;
                let store = &store;
                scope.spawn(move || {
                    barrier.wait();
                    store.create_user(UserRecord::new("alice"))
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    let created = outcomes.iter().filter(|outcome| outcome.is_ok()).count();
    let conflicts = outcomes
        .iter()
        .filter(|outcome| matches!(outcome, Err(StoreError::Conflict { .. })))
        .count();
    assert_eq!(created, 1);
    assert_eq!(conflicts, WRITERS - 1);
    assert_eq!(store.count_users().unwrap(), 1);
}

#[test]
fn racing_creates_with_distinct_names_all_succeed() {
    let store = InMemoryStore::new();

    thread::scope(|scope| {
        for n in 0..WRITERS {
            let store = &store;
            scope.spawn(move || {
                store
                    .create_group(GroupRecord::new(format!("group-{n}")))
                    .unwrap();
            });
        }
    });

    let groups = store.query_groups(None).unwrap();
    assert_eq!(groups.len(), WRITERS);
    let mut ids: Vec<_> = groups.iter().filter_map(|g| g.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), WRITERS);
}

#[test]
fn racing_renames_into_one_name_admit_exactly_one() {
    let store = InMemoryStore::new();
    let originals: Vec<UserRecord> = (0..WRITERS)
        .map(|n| store.create_user(UserRecord::new(format!("user-{n}"))).unwrap())
        .collect();
    let barrier = Barrier::new(WRITERS);

    let renamed = thread::scope(|scope| {
        let handles: Vec<_> = originals
            .iter()
            .map(|original| {
                let barrier = &barrier;
                let store = &store;
                scope.spawn(move || {
                    barrier.wait();
                    store.replace_user(UserRecord {
                        user_name: "taken".into(),
                        ..original.clone()
                    })
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(Result::is_ok)
            .count()
    });

    assert_eq!(renamed, 1);
    let holders = store
        .query_users(Some(&roster_core::filter::Filter::equals("userName", "taken")))
        .unwrap();
    assert_eq!(holders.len(), 1);
}
