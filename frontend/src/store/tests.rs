use super::*;
use chrono::NaiveDate;
use std::rc::Rc;

struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("No localStorage".into()))
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Write { key: key.into() })
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        Err(StoreError::Write { key: key.into() })
    }
}

fn seeded(entries: Vec<(&str, &str)>) -> (Rc<MemoryStore>, StoreClient) {
    let backend = Rc::new(MemoryStore::with_entries(entries));
    let client = StoreClient::new_with_backend(backend.clone(), "timetracker");
    (backend, client)
}

#[test]
fn collections_map_to_prefixed_keys() {
    assert_eq!(
        Collection::Employees.storage_key("timetracker"),
        "timetracker_employees"
    );
    assert_eq!(
        Collection::Clients.storage_key("timetracker"),
        "timetracker_clients"
    );
    assert_eq!(
        Collection::TimeRecords.storage_key("timetracker"),
        "timetracker_records"
    );
    assert_eq!(
        Collection::Session.storage_key("demo"),
        "demo_session"
    );
}

#[test]
fn missing_collection_loads_as_empty() {
    let (_, client) = seeded(vec![]);
    assert!(client.employees().is_empty());
    assert!(client
        .try_load_all::<Employee>(Collection::Employees)
        .unwrap()
        .is_empty());
}

#[test]
fn malformed_collection_degrades_to_empty() {
    let (_, client) = seeded(vec![("timetracker_clients", "{not json")]);
    assert!(client.clients().is_empty());
    let err = client
        .try_load_all::<Client>(Collection::Clients)
        .unwrap_err();
    assert!(matches!(err, StoreError::Malformed { ref key, .. } if key == "timetracker_clients"));
}

#[test]
fn unavailable_storage_degrades_to_empty_and_reports_writes() {
    let client = StoreClient::new_with_backend(Rc::new(UnavailableStore), "timetracker");
    assert!(client.time_records().is_empty());
    assert!(client.session().is_none());
    let err = client.save_employees(&[]).unwrap_err();
    assert!(matches!(err, StoreError::Write { .. }));
}

#[test]
fn saved_collections_are_json_arrays() {
    let (backend, client) = seeded(vec![]);
    let employees = vec![Employee {
        id: "EMP001".into(),
        name: "Ana".into(),
        active: true,
    }];
    client.save_employees(&employees).unwrap();

    let raw = backend.raw("timetracker_employees").unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(value.is_array());
    assert_eq!(client.employees(), employees);
}

#[test]
fn legacy_records_load_through_the_client() {
    let (_, client) = seeded(vec![(
        "timetracker_records",
        r#"[{"id":"TR1","userId":"EMP002","date":"2024-02-01","client":"Cliente B","totalWorkTime":300}]"#,
    )]);
    let records = client.time_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].employee_id, "EMP002");
    assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
}

#[test]
fn session_round_trips_and_clears() {
    let (backend, client) = seeded(vec![]);
    let principal = Principal {
        id: "USR-1".into(),
        name: "Admin".into(),
        role: Role::Admin,
    };
    client.save_session(&principal).unwrap();
    assert_eq!(client.session(), Some(principal));

    client.clear_session().unwrap();
    assert!(client.session().is_none());
    assert!(backend.raw("timetracker_session").is_none());
}

#[test]
fn store_error_messages_name_the_key() {
    let err = StoreError::Read {
        key: "timetracker_clients".into(),
    };
    assert_eq!(err.to_string(), "failed to read `timetracker_clients`");
}

#[cfg(target_arch = "wasm32")]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_storage_backend_round_trips() {
        let client = StoreClient::new_with_backend(Rc::new(LocalStorageStore), "tt_test");
        let clients = vec![Client {
            id: "CLI-1".into(),
            name: "Acme".into(),
            active: true,
            custom_tag: None,
            created_at: None,
            updated_at: None,
        }];
        client.save_clients(&clients).unwrap();
        assert_eq!(client.clients(), clients);
        client.remove(Collection::Clients).unwrap();
        assert!(client.clients().is_empty());
    }
}
