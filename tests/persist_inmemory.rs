use persister::stubs::InMemoryModelStore;
use persister::{Attributes, PersisterError, StoreError};
use persister::{Persister, PersisterConfig};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

fn john_doe() -> Attributes {
  let mut attrs = Attributes::new();
  attrs.insert("first_name".into(), json!("John"));
  attrs.insert("last_name".into(), json!("Doe"));
  attrs
}

#[test]
fn create_dispatch_without_handle() {
  let store = Arc::new(InMemoryModelStore::new());
  let persister = Persister::new(store.clone(), PersisterConfig::new());

  let record = persister.persist(john_doe(), None).expect("persist");

  // create exactly once, update never
  assert_eq!(store.create_calls().len(), 1);
  assert!(store.update_calls().is_empty());

  // the returned record is the store's return value
  assert_eq!(store.get(&record.id).expect("stored"), record);
  assert_eq!(record.attributes, john_doe());
}

#[test]
fn update_dispatch_with_handle() {
  let store = Arc::new(InMemoryModelStore::new());
  let persister = Persister::new(store.clone(), PersisterConfig::new());

  let created = persister.persist(john_doe(), None).expect("create");

  let changed = persister.persist(json!({"last_name": "Smith"}), Some(&created.id)).expect("update");

  // update exactly once with the same handle, create not called again
  assert_eq!(store.create_calls().len(), 1);
  let updates = store.update_calls();
  assert_eq!(updates.len(), 1);
  assert_eq!(updates[0].1, created.id);

  assert_eq!(changed.id, created.id);
  assert_eq!(changed.attributes["last_name"], json!("Smith"));
  assert_eq!(changed.attributes["first_name"], json!("John"));
}

#[test]
fn update_unknown_handle_is_an_error() {
  let store = Arc::new(InMemoryModelStore::new());
  let persister = Persister::new(store.clone(), PersisterConfig::new());

  let missing = Uuid::new_v4();
  let err = persister.persist(john_doe(), Some(&missing)).expect_err("no record");
  assert_eq!(err.code(), 404);
  assert!(err.message().contains(&missing.to_string()));
}

#[test]
fn store_failure_surfaces_with_message_and_code() {
  let store = Arc::new(InMemoryModelStore::new());
  let persister = Persister::new(store.clone(), PersisterConfig::new());

  store.fail_next(StoreError::new("db down", 500));
  let err = persister.persist(john_doe(), None).expect_err("injected failure");

  assert_eq!(err, PersisterError::new("db down", 500));
  assert!(store.is_empty());
}

#[test]
fn injected_failure_is_consumed_by_one_call() {
  let store = Arc::new(InMemoryModelStore::new());
  let persister = Persister::new(store.clone(), PersisterConfig::new());

  store.fail_next(StoreError::new("transient", 503));
  assert!(persister.persist(john_doe(), None).is_err());

  // the next call succeeds
  let record = persister.persist(john_doe(), None).expect("retry");
  assert_eq!(store.len(), 1);
  assert_eq!(record.attributes, john_doe());
}

#[test]
fn created_records_get_fresh_ids() {
  let store = Arc::new(InMemoryModelStore::new());
  let persister = Persister::new(store.clone(), PersisterConfig::new());

  let a = persister.persist(john_doe(), None).expect("first");
  let b = persister.persist(john_doe(), None).expect("second");

  assert_ne!(a.id, b.id);
  assert_eq!(store.len(), 2);
}
