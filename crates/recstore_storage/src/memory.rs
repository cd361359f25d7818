//! In-memory destination for testing.

use crate::destination::{Destination, EntryIter};
use crate::error::{DestinationError, DestinationResult};
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// An in-memory destination.
///
/// Entries live in process memory and are enumerated in insertion
/// order, which makes query pagination deterministic in a way
/// filesystem destinations cannot promise. Suitable for:
/// - Unit tests
/// - Integration tests
/// - Ephemeral stores that don't need persistence
///
/// # Thread Safety
///
/// This destination is thread-safe and can be shared across threads.
///
/// # Example
///
/// ```rust
/// use recstore_storage::{Destination, MemoryDestination};
///
/// let dest = MemoryDestination::new();
/// dest.store("alpha", "payload").unwrap();
/// assert_eq!(dest.retrieve("alpha").unwrap(), "payload");
/// ```
#[derive(Debug, Default)]
pub struct MemoryDestination {
    entries: RwLock<Vec<(String, String)>>,
}

impl MemoryDestination {
    /// Registry name of this destination.
    pub const NAME: &'static str = "memory";

    /// Configuration template: parameter names paired with example
    /// values. The memory destination takes no parameters.
    pub const CONF: &'static [(&'static str, &'static str)] = &[];

    /// Creates a new empty in-memory destination.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a destination from a configuration parameter map.
    ///
    /// No parameters are required; the map is ignored.
    ///
    /// # Errors
    ///
    /// Never fails; the signature matches the other destinations.
    pub fn from_conf(_conf: &BTreeMap<String, String>) -> DestinationResult<Self> {
        Ok(Self::new())
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the destination holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl Destination for MemoryDestination {
    fn init(&self) -> DestinationResult<()> {
        Ok(())
    }

    fn store(&self, identifier: &str, data: &str) -> DestinationResult<()> {
        let mut entries = self.entries.write();
        match entries.iter_mut().find(|(id, _)| id.as_str() == identifier) {
            // Replacing keeps the entry's position, so enumeration
            // order stays the original insertion order.
            Some((_, existing)) => *existing = data.to_string(),
            None => entries.push((identifier.to_string(), data.to_string())),
        }
        Ok(())
    }

    fn retrieve(&self, identifier: &str) -> DestinationResult<String> {
        self.entries
            .read()
            .iter()
            .find(|(id, _)| id.as_str() == identifier)
            .map(|(_, data)| data.clone())
            .ok_or_else(|| DestinationError::NotFound {
                identifier: identifier.to_string(),
            })
    }

    fn delete(&self, identifier: &str) -> DestinationResult<()> {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|(id, _)| id.as_str() != identifier);
        if entries.len() == before {
            return Err(DestinationError::NotFound {
                identifier: identifier.to_string(),
            });
        }
        Ok(())
    }

    fn exists(&self, identifier: &str) -> DestinationResult<bool> {
        Ok(self
            .entries
            .read()
            .iter()
            .any(|(id, _)| id.as_str() == identifier))
    }

    fn retrieve_all(&self) -> DestinationResult<EntryIter<'_>> {
        // Snapshot under the lock; the iterator then owns its data and
        // never blocks writers.
        let snapshot = self.entries.read().clone();
        Ok(Box::new(snapshot.into_iter().map(Ok)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_new_is_empty() {
        let dest = MemoryDestination::new();
        assert!(dest.is_empty());
        assert_eq!(dest.len(), 0);
    }

    #[test]
    fn memory_store_and_retrieve() {
        let dest = MemoryDestination::new();
        dest.store("alpha", "payload").unwrap();

        assert_eq!(dest.retrieve("alpha").unwrap(), "payload");
        assert_eq!(dest.len(), 1);
    }

    #[test]
    fn memory_store_replaces_in_place() {
        let dest = MemoryDestination::new();
        dest.store("a", "1").unwrap();
        dest.store("b", "2").unwrap();
        dest.store("a", "updated").unwrap();

        let entries: Vec<(String, String)> = dest
            .retrieve_all()
            .unwrap()
            .collect::<DestinationResult<_>>()
            .unwrap();
        assert_eq!(
            entries,
            vec![
                ("a".to_string(), "updated".to_string()),
                ("b".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn memory_retrieve_missing_is_not_found() {
        let dest = MemoryDestination::new();
        let result = dest.retrieve("ghost");
        assert!(matches!(result, Err(DestinationError::NotFound { .. })));
    }

    #[test]
    fn memory_delete_removes_entry() {
        let dest = MemoryDestination::new();
        dest.store("alpha", "payload").unwrap();
        dest.delete("alpha").unwrap();

        assert!(!dest.exists("alpha").unwrap());
        assert!(dest.is_empty());
    }

    #[test]
    fn memory_delete_missing_is_not_found() {
        let dest = MemoryDestination::new();
        let result = dest.delete("ghost");
        assert!(matches!(result, Err(DestinationError::NotFound { .. })));
    }

    #[test]
    fn memory_exists() {
        let dest = MemoryDestination::new();
        assert!(!dest.exists("alpha").unwrap());

        dest.store("alpha", "payload").unwrap();
        assert!(dest.exists("alpha").unwrap());
    }

    #[test]
    fn memory_retrieve_all_is_insertion_ordered() {
        let dest = MemoryDestination::new();
        dest.store("c", "3").unwrap();
        dest.store("a", "1").unwrap();
        dest.store("b", "2").unwrap();

        let ids: Vec<String> = dest
            .retrieve_all()
            .unwrap()
            .map(|entry| entry.unwrap().0)
            .collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn memory_clear() {
        let dest = MemoryDestination::new();
        dest.store("a", "1").unwrap();
        dest.store("b", "2").unwrap();

        dest.clear();
        assert!(dest.is_empty());
    }

    #[test]
    fn memory_from_conf_ignores_parameters() {
        let mut conf = BTreeMap::new();
        conf.insert("anything".to_string(), "goes".to_string());
        assert!(MemoryDestination::from_conf(&conf).is_ok());
    }
}
