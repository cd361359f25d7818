//! Cross-crate integration test helpers.
//!
//! Provides a harness that mirrors store contents into a plain map,
//! so a sequence of operations can be checked against reference
//! semantics.

use crate::fixtures::TestStore;
use crate::generators::StoreOperation;
use recstore_core::Attributes;
use std::collections::BTreeMap;

/// A test harness tracking expected store contents.
///
/// Every mutation is applied both to the store under test and to an
/// in-memory mirror. [`StoreHarness::verify_all`] then asserts the
/// two agree.
pub struct StoreHarness {
    /// The store under test.
    pub store: TestStore,
    /// Expected contents, keyed by identifier.
    mirror: BTreeMap<String, Attributes>,
}

impl StoreHarness {
    /// Creates a harness over an in-memory store.
    pub fn new() -> Self {
        Self {
            store: TestStore::memory(),
            mirror: BTreeMap::new(),
        }
    }

    /// Creates a harness over a directory-backed store.
    pub fn localdir() -> Self {
        Self {
            store: TestStore::localdir(),
            mirror: BTreeMap::new(),
        }
    }

    /// Inserts a record (overwriting) and tracks it.
    pub fn insert(&mut self, identifier: &str, attributes: Attributes) {
        self.store
            .insert(identifier, &attributes, true)
            .expect("Failed to insert record");
        self.mirror.insert(identifier.to_string(), attributes);
    }

    /// Upserts a record and tracks it.
    pub fn update(&mut self, identifier: &str, attributes: Attributes) {
        self.store
            .update(identifier, &attributes, true)
            .expect("Failed to update record");
        self.mirror.insert(identifier.to_string(), attributes);
    }

    /// Deletes a record (ignoring absence) and untracks it.
    pub fn delete(&mut self, identifier: &str) {
        self.store
            .delete(identifier, true)
            .expect("Failed to delete record");
        self.mirror.remove(identifier);
    }

    /// Looks a record up and asserts it matches the mirror.
    pub fn find_and_verify(&self, identifier: &str) -> Option<Attributes> {
        let actual = self.store.find(identifier).expect("Failed to find record");
        assert_eq!(
            actual.as_ref(),
            self.mirror.get(identifier),
            "Record mismatch for {identifier:?}"
        );
        actual
    }

    /// Applies a generated operation.
    pub fn apply(&mut self, operation: &StoreOperation) {
        match operation {
            StoreOperation::Insert {
                identifier,
                attributes,
            } => self.insert(identifier, attributes.clone()),
            StoreOperation::Update {
                identifier,
                attributes,
            } => self.update(identifier, attributes.clone()),
            StoreOperation::Delete { identifier } => self.delete(identifier),
            StoreOperation::Find { identifier } => {
                self.find_and_verify(identifier);
            }
        }
    }

    /// Asserts the store and the mirror hold identical contents.
    pub fn verify_all(&self) {
        for (identifier, expected) in &self.mirror {
            let actual = self.store.find(identifier).expect("Failed to find record");
            assert_eq!(
                actual.as_ref(),
                Some(expected),
                "Record mismatch for {identifier:?}"
            );
        }

        let all = self
            .store
            .query_all(&Attributes::new())
            .expect("Failed to enumerate records");
        assert_eq!(all.len(), self.mirror.len(), "Record count mismatch");
    }

    /// Returns the count of tracked records.
    pub fn tracked_count(&self) -> usize {
        self.mirror.len()
    }
}

impl Default for StoreHarness {
    fn default() -> Self {
        Self::new()
    }
}
