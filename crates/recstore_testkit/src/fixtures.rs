//! Test fixtures and store helpers.
//!
//! Provides convenience functions for setting up test stores
//! and common test scenarios.

use recstore_core::{Attributes, Scalar, Store, StoreConfig};
use std::path::PathBuf;
use tempfile::TempDir;

/// A test store with automatic cleanup.
pub struct TestStore {
    /// The store instance.
    pub store: Store,
    /// The temporary directory (kept alive to prevent cleanup).
    _temp_dir: Option<TempDir>,
}

impl TestStore {
    /// Creates a test store over the memory destination.
    pub fn memory() -> Self {
        let config = StoreConfig::new("json", "memory");
        Self {
            store: Store::open(&config).expect("Failed to open in-memory store"),
            _temp_dir: None,
        }
    }

    /// Creates a test store over a directory inside a fresh tempdir.
    pub fn localdir() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().join("records");
        let config = StoreConfig::json_localdir(root.to_string_lossy());

        Self {
            store: Store::open(&config).expect("Failed to open localdir store"),
            _temp_dir: Some(temp_dir),
        }
    }

    /// Returns the record directory if directory-backed, None if in-memory.
    pub fn root(&self) -> Option<PathBuf> {
        self._temp_dir.as_ref().map(|d| d.path().join("records"))
    }
}

impl std::ops::Deref for TestStore {
    type Target = Store;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

/// Runs a test against a temporary in-memory store.
///
/// # Example
///
/// ```rust,ignore
/// use recstore_testkit::with_memory_store;
///
/// #[test]
/// fn my_test() {
///     with_memory_store(|store| {
///         store.insert("a1", &sample_record(), false).unwrap();
///     });
/// }
/// ```
pub fn with_memory_store<F, R>(f: F) -> R
where
    F: FnOnce(&Store) -> R,
{
    let test_store = TestStore::memory();
    f(&test_store.store)
}

/// Runs a test against a temporary directory-backed store.
pub fn with_localdir_store<F, R>(f: F) -> R
where
    F: FnOnce(&Store, &std::path::Path) -> R,
{
    let test_store = TestStore::localdir();
    let root = test_store.root().expect("Localdir store should have a root");
    f(&test_store.store, &root)
}

/// Returns a fresh identifier that no other call has produced.
pub fn unique_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Returns a record exercising every scalar kind.
pub fn sample_record() -> Attributes {
    let mut attributes = Attributes::new();
    attributes.insert("name".to_string(), Scalar::from("Ada"));
    attributes.insert("age".to_string(), Scalar::from(36i64));
    attributes.insert("height".to_string(), Scalar::from(1.65f64));
    attributes.insert("active".to_string(), Scalar::from(true));
    attributes
}

/// Test scenario helpers.
pub mod scenarios {
    use super::*;

    /// Creates an in-memory store pre-populated with `record_count`
    /// records named `r0`, `r1`, and so on.
    pub fn populated_store(record_count: usize) -> TestStore {
        let test_store = TestStore::memory();

        for i in 0..record_count {
            let mut attributes = Attributes::new();
            attributes.insert("index".to_string(), Scalar::from(i as i64));
            attributes.insert("even".to_string(), Scalar::from(i % 2 == 0));
            test_store
                .store
                .insert(&format!("r{i}"), &attributes, false)
                .expect("Failed to insert record");
        }

        test_store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_works() {
        let test_store = TestStore::memory();
        test_store.insert("a1", &sample_record(), false).unwrap();
        assert!(test_store.contains("a1").unwrap());
        assert!(test_store.root().is_none());
    }

    #[test]
    fn localdir_store_writes_into_tempdir() {
        let test_store = TestStore::localdir();
        test_store.insert("a1", &sample_record(), false).unwrap();

        let root = test_store.root().unwrap();
        assert!(root.join("a1").is_file());
    }

    #[test]
    fn unique_ids_do_not_collide() {
        assert_ne!(unique_id(), unique_id());
    }

    #[test]
    fn populated_scenario_counts() {
        let test_store = scenarios::populated_store(10);
        let all = test_store.query_all(&Attributes::new()).unwrap();
        assert_eq!(all.len(), 10);
    }
}
