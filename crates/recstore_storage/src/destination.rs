//! Storage destination trait definition.

use crate::error::DestinationResult;

/// Entries yielded by [`Destination::retrieve_all`].
///
/// The iterator is lazy and single-pass. Each item is an identifier
/// paired with the data stored under it, or the error that ended that
/// entry's read.
pub type EntryIter<'a> = Box<dyn Iterator<Item = DestinationResult<(String, String)>> + 'a>;

/// A storage destination for serialized records.
///
/// Destinations are **opaque string stores** addressed by record
/// identifier. They persist whatever text a codec produced and hand it
/// back unchanged. Destinations do not interpret the data they hold.
///
/// # Invariants
///
/// - `retrieve(id)` returns exactly the string most recently stored
///   under `id`
/// - `store` replaces silently; duplicate policy lives above, in the
///   record store
/// - Implementations must be `Send + Sync` so a store can be shared
///   across threads
///
/// # Implementors
///
/// - [`super::LocalDirDestination`] - One file per record in a local directory
/// - [`super::MemoryDestination`] - For testing and ephemeral storage
pub trait Destination: Send + Sync {
    /// Prepares the destination for use.
    ///
    /// Runs once, before any other operation, typically from the record
    /// store constructor. Implementations allocate or verify whatever
    /// they address: a directory, a connection, a remote bucket.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DestinationError::Setup`] if the destination
    /// cannot be made ready, for example when its location exists but
    /// is unusable or permissions are insufficient.
    fn init(&self) -> DestinationResult<()>;

    /// Stores `data` under `identifier`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn store(&self, identifier: &str, data: &str) -> DestinationResult<()>;

    /// Retrieves the data stored under `identifier`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DestinationError::NotFound`] if no entry exists
    /// under `identifier`, or a read error if fetching it fails.
    fn retrieve(&self, identifier: &str) -> DestinationResult<String>;

    /// Deletes the entry stored under `identifier`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DestinationError::NotFound`] if no entry exists
    /// under `identifier`, or a write error if removal fails.
    fn delete(&self, identifier: &str) -> DestinationResult<()>;

    /// Reports whether an entry exists under `identifier`.
    ///
    /// # Errors
    ///
    /// Returns an error if existence cannot be determined.
    fn exists(&self, identifier: &str) -> DestinationResult<bool>;

    /// Enumerates every stored entry as `(identifier, data)` pairs.
    ///
    /// Enumeration order is destination-defined. The iterator reads
    /// lazily; a caller that stops early never touches the remaining
    /// entries.
    ///
    /// # Errors
    ///
    /// Returns an error if enumeration cannot start. Individual items
    /// carry the error of a failed entry read; callers are expected to
    /// stop at the first failed item.
    fn retrieve_all(&self) -> DestinationResult<EntryIter<'_>>;
}
