use quotelyapp::model::Customer;
use quotelyapp::numbering;
use quotelyapp::registry;
use quotelyapp::store::fs_backend::FsBackend;
use quotelyapp::store::{StorageBackend, CUSTOMERS_KEY, INVOICE_COUNTER_KEY};
use std::fs;
use tempfile::TempDir;

fn backend(dir: &TempDir) -> FsBackend {
    FsBackend::new(dir.path().join("data"))
}

#[test]
fn values_survive_a_new_instance() {
    let dir = TempDir::new().unwrap();
    {
        let store = backend(&dir);
        registry::upsert(&store, Customer::new("Acme", Some("a@acme.test".into()), None)).unwrap();
        numbering::commit(&store, numbering::DocNumber::new(7)).unwrap();
    }

    let store = backend(&dir);
    assert_eq!(registry::list(&store).unwrap().len(), 1);
    assert_eq!(numbering::peek_next(&store).unwrap().to_string(), "0008");
}

#[test]
fn missing_file_reads_as_empty() {
    let dir = TempDir::new().unwrap();
    let store = backend(&dir);
    assert_eq!(store.get(CUSTOMERS_KEY).unwrap(), None);
    assert_eq!(numbering::peek_next(&store).unwrap().to_string(), "0001");
}

#[test]
fn corrupt_file_reads_as_empty_and_is_replaced_on_write() {
    let dir = TempDir::new().unwrap();
    let store = backend(&dir);
    fs::create_dir_all(store.root()).unwrap();
    fs::write(store.storage_path(), "{ not json").unwrap();

    assert!(registry::list(&store).unwrap().is_empty());

    store.set(INVOICE_COUNTER_KEY, "3").unwrap();
    let raw = fs::read_to_string(store.storage_path()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed[INVOICE_COUNTER_KEY], "3");
}

#[test]
fn writes_leave_no_temp_files() {
    let dir = TempDir::new().unwrap();
    let store = backend(&dir);
    for i in 0..5 {
        store.set("k", &i.to_string()).unwrap();
    }
    let leftovers: Vec<_> = fs::read_dir(store.root())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
    assert_eq!(store.get("k").unwrap().as_deref(), Some("4"));
}

#[test]
fn remove_of_missing_key_does_not_create_file() {
    let dir = TempDir::new().unwrap();
    let store = backend(&dir);
    store.remove(INVOICE_COUNTER_KEY).unwrap();
    assert!(!store.storage_path().exists());
}

#[test]
fn customers_are_stored_under_their_own_key() {
    let dir = TempDir::new().unwrap();
    let store = backend(&dir);
    registry::upsert(&store, Customer::new("bob", None, None)).unwrap();
    registry::upsert(&store, Customer::new("Alice", None, None)).unwrap();

    let raw = store.get(CUSTOMERS_KEY).unwrap().unwrap();
    let stored: Vec<Customer> = serde_json::from_str(&raw).unwrap();
    let names: Vec<_> = stored.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "bob"]);
}
