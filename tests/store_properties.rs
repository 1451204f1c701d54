mod common;

use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use common::{date, test_store, test_store_with_dir};
use rusqlite::Connection;
use todolist::storage::TaskStore;
use todolist::{TaskId, TodoError, WriteOutcome};

fn tasks_table_sql(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT sql FROM sqlite_master WHERE name = 'Tasks'")
        .expect("prepare schema query");
    stmt.query_map([], |row| row.get(0))
        .expect("query schema")
        .collect::<Result<Vec<String>, _>>()
        .expect("collect schema")
}

#[test]
fn create_then_list_round_trips() {
    let store = test_store();
    let existing = store.create("Existing", date(2025, 1, 1)).unwrap();

    let id = store.create("Buy milk", date(2025, 2, 14)).unwrap();
    assert_ne!(id, existing);

    let tasks = store.list().unwrap();
    let matching: Vec<_> = tasks
        .iter()
        .filter(|t| t.description == "Buy milk" && t.deadline == date(2025, 2, 14))
        .collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].id, id);
}

#[test]
fn schema_bootstrap_is_idempotent() {
    let (store, path, _dir) = test_store_with_dir();

    store.ensure_schema().unwrap();
    store.ensure_schema().unwrap();

    let conn = Connection::open(&path).unwrap();
    let before = tasks_table_sql(&conn);
    assert_eq!(before.len(), 1);

    drop(store);
    let reopened = TaskStore::open_at(&path, Duration::from_secs(5)).unwrap();
    reopened.ensure_schema().unwrap();

    assert_eq!(tasks_table_sql(&conn), before);
    assert_eq!(
        reopened.database().schema_version().unwrap(),
        todolist::storage::CURRENT_VERSION
    );
}

#[test]
fn schema_keeps_compatible_names() {
    let (_store, path, _dir) = test_store_with_dir();
    let conn = Connection::open(&path).unwrap();

    let mut stmt = conn
        .prepare("SELECT name FROM pragma_table_info('Tasks')")
        .unwrap();
    let columns: HashSet<String> = stmt
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    for column in ["Task_ID", "Task", "Deadline"] {
        assert!(columns.contains(column), "missing Tasks.{column}");
    }
}

#[test]
fn update_of_missing_id_is_a_noop() {
    let store = test_store();

    let outcome = store.update(9999, "x", date(2025, 1, 1)).unwrap();

    assert_eq!(outcome, WriteOutcome::new(0));
    assert!(outcome.is_noop());
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn delete_all_clears_but_keeps_id_counter() {
    let store = test_store();

    let n = store.create("one", date(2025, 1, 1)).unwrap();
    let n1 = store.create("two", date(2025, 1, 2)).unwrap();
    let n2 = store.create("three", date(2025, 1, 3)).unwrap();
    assert_eq!((n1, n2), (n + 1, n + 2));

    let outcome = store.delete_all().unwrap();
    assert_eq!(outcome.affected, 3);
    assert!(store.list().unwrap().is_empty());

    let next = store.create("four", date(2025, 1, 4)).unwrap();
    assert_eq!(next, n + 3);
}

#[test]
fn ids_are_never_reused_after_single_delete() {
    let store = test_store();
    let first = store.create("a", date(2025, 1, 1)).unwrap();
    let last = store.create("b", date(2025, 1, 1)).unwrap();

    store.delete_one(last).unwrap();
    let next = store.create("c", date(2025, 1, 1)).unwrap();

    assert!(next > last);
    assert!(next > first);
}

#[test]
fn list_orders_by_deadline() {
    let store = test_store();
    store.create("march", date(2025, 3, 1)).unwrap();
    store.create("january", date(2025, 1, 1)).unwrap();
    store.create("february", date(2025, 2, 1)).unwrap();

    let deadlines: Vec<_> = store.list().unwrap().iter().map(|t| t.deadline).collect();
    assert_eq!(
        deadlines,
        vec![date(2025, 1, 1), date(2025, 2, 1), date(2025, 3, 1)]
    );
}

#[test]
fn empty_description_is_rejected_before_insert() {
    let store = test_store();

    let err = store.create("", date(2025, 1, 1)).unwrap_err();
    assert!(matches!(err, TodoError::Validation(_)));
    assert!(!err.is_fatal());

    let err = store.create("   ", date(2025, 1, 1)).unwrap_err();
    assert!(matches!(err, TodoError::Validation(_)));

    assert!(store.list().unwrap().is_empty());

    // Nothing reached the backend, so no id was consumed either.
    let id = store.create("first real task", date(2025, 1, 1)).unwrap();
    assert_eq!(id, 1);
}

#[test]
fn over_long_description_is_rejected() {
    let store = test_store();
    let err = store.create(&"x".repeat(256), date(2025, 1, 1)).unwrap_err();
    assert!(matches!(err, TodoError::Validation(_)));

    store.create(&"x".repeat(255), date(2025, 1, 1)).unwrap();
}

#[test]
fn deadlines_outside_four_digit_years_are_rejected() {
    let store = test_store();
    let id = store.create("in range", date(2025, 1, 1)).unwrap();

    for deadline in [date(10000, 1, 1), date(-1, 1, 1), date(999, 12, 31)] {
        let err = store.create("far off", deadline).unwrap_err();
        assert!(matches!(err, TodoError::Validation(_)), "{deadline}: {err:?}");

        let err = store.update(id, "moved", deadline).unwrap_err();
        assert!(matches!(err, TodoError::Validation(_)), "{deadline}: {err:?}");
    }

    store.create("last day", date(9999, 12, 31)).unwrap();
    store.create("first day", date(1000, 1, 1)).unwrap();

    let deadlines: Vec<_> = store.list().unwrap().iter().map(|t| t.deadline).collect();
    assert_eq!(
        deadlines,
        vec![date(1000, 1, 1), date(2025, 1, 1), date(9999, 12, 31)]
    );
}

#[test]
fn concurrent_deletes_of_same_id_do_not_error() {
    let (store, path, _dir) = test_store_with_dir();
    let mut last: TaskId = 0;
    for i in 0..5 {
        last = store.create(&format!("task {i}"), date(2025, 1, 1)).unwrap();
    }
    assert_eq!(last, 5);

    let barrier = Arc::new(Barrier::new(2));
    let handles: Vec<_> = (0..2)
        .map(|_| {
            let path = path.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let store = TaskStore::open_at(&path, Duration::from_secs(5))?;
                barrier.wait();
                store.delete_one(5)
            })
        })
        .collect();

    let mut affected: Vec<usize> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap().affected)
        .collect();
    affected.sort_unstable();

    assert_eq!(affected, vec![0, 1]);
    assert_eq!(store.list().unwrap().len(), 4);
}

#[test]
fn locked_backend_surfaces_timeout() {
    let (_store, path, _dir) = test_store_with_dir();
    let blocked = TaskStore::open_at(&path, Duration::from_millis(100)).unwrap();

    let holder = Connection::open(&path).unwrap();
    holder.execute_batch("BEGIN EXCLUSIVE;").unwrap();

    let err = blocked.create("waits", date(2025, 1, 1)).unwrap_err();
    assert!(matches!(err, TodoError::Timeout(_)), "got {err:?}");
    assert!(err.is_query());

    holder.execute_batch("ROLLBACK;").unwrap();
    blocked.create("goes through", date(2025, 1, 1)).unwrap();
}
