//! Record store facade.

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::record;
use crate::registry;
use recstore_codec::{Attributes, Codec};
use recstore_storage::{Destination, DestinationError};
use tracing::debug;

/// The record store.
///
/// `Store` is the primary entry point. It binds one format codec to
/// one storage destination and exposes record-level operations:
/// - insert / insert_many
/// - find / contains
/// - update / delete
/// - query (linear scan with equality filtering)
///
/// The store holds no state of its own beyond the two bound plugins.
/// Writes flow caller -> validation -> codec -> destination; reads
/// flow destination -> codec -> caller.
///
/// # Opening a Store
///
/// Use [`Store::open`] with a [`StoreConfig`] naming registered
/// plugins:
///
/// ```rust
/// use recstore_core::{Store, StoreConfig};
///
/// let config = StoreConfig::new("json", "memory");
/// let store = Store::open(&config).unwrap();
/// ```
///
/// For a custom plugin that is not in the registry, use
/// [`Store::with_parts`] and pass the instances directly.
///
/// # Concurrency
///
/// All operations take `&self` and are synchronous. The store adds no
/// locking of its own: two stores targeting the same destination can
/// race between an existence check and the following write. See the
/// destination documentation for what that means per implementation.
pub struct Store {
    codec: Box<dyn Codec>,
    destination: Box<dyn Destination>,
}

impl Store {
    /// Opens a store from a configuration.
    ///
    /// Resolves the format and destination by registry name, builds
    /// both plugins from their parameter maps, and runs the
    /// destination's setup.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either name is not registered (`UnknownFormat` /
    ///   `UnknownDestination`)
    /// - A required construction parameter is missing or the
    ///   destination cannot be set up (`InvalidConfiguration`)
    pub fn open(config: &StoreConfig) -> StoreResult<Self> {
        debug!(
            "opening record store: format={}, destination={}",
            config.format, config.destination
        );
        let codec = registry::build_format(&config.format, &config.format_conf)?;
        let destination =
            registry::build_destination(&config.destination, &config.destination_conf)?;
        Self::with_parts(codec, destination)
    }

    /// Opens a store over pre-built plugin instances.
    ///
    /// This is the lower-level constructor for codecs or destinations
    /// that are not in the registry. The destination's setup still
    /// runs.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if destination setup fails.
    pub fn with_parts(
        codec: Box<dyn Codec>,
        destination: Box<dyn Destination>,
    ) -> StoreResult<Self> {
        destination.init()?;
        Ok(Self { codec, destination })
    }

    /// Inserts a record under `identifier`.
    ///
    /// Without `overwrite`, inserting onto an existing identifier is a
    /// `DuplicateRecord` error. With `overwrite`, the new record fully
    /// replaces whatever was stored.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRecord` if the identifier or attributes violate
    /// the data model, `DuplicateRecord` on a non-overwrite conflict,
    /// or the codec/destination failure that stopped the write.
    pub fn insert(
        &self,
        identifier: &str,
        attributes: &Attributes,
        overwrite: bool,
    ) -> StoreResult<()> {
        record::validate_identifier(identifier)?;
        if !overwrite && self.destination.exists(identifier)? {
            return Err(StoreError::duplicate_record(identifier));
        }
        record::validate_attributes(attributes)?;
        let data = self.codec.serialize(attributes)?;
        self.destination.store(identifier, &data)?;
        Ok(())
    }

    /// Inserts a batch of records in slice order.
    ///
    /// The whole batch is validated before anything is written, so a
    /// validation failure leaves the destination untouched. The write
    /// phase fails fast: a duplicate or I/O error partway through
    /// leaves the earlier records stored and the rest unwritten.
    /// There is no rollback.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Store::insert`], reported for the first
    /// offending record.
    pub fn insert_many(
        &self,
        records: &[(String, Attributes)],
        overwrite: bool,
    ) -> StoreResult<()> {
        for (identifier, attributes) in records {
            record::validate_record(identifier, attributes)?;
        }
        for (identifier, attributes) in records {
            if !overwrite && self.destination.exists(identifier)? {
                return Err(StoreError::duplicate_record(identifier));
            }
            let data = self.codec.serialize(attributes)?;
            self.destination.store(identifier, &data)?;
        }
        Ok(())
    }

    /// Looks up the record stored under `identifier`.
    ///
    /// Absence is a normal outcome: a never-inserted identifier
    /// returns `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns a read or deserialization failure if the record exists
    /// but cannot be fetched or decoded.
    pub fn find(&self, identifier: &str) -> StoreResult<Option<Attributes>> {
        record::validate_identifier(identifier)?;
        match self.destination.retrieve(identifier) {
            Ok(data) => Ok(Some(self.codec.deserialize(&data)?)),
            Err(DestinationError::NotFound { .. }) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Replaces the record stored under `identifier` with `attributes`.
    ///
    /// This is a full replace, never a field-level merge: the new
    /// mapping entirely supersedes the old one. Without `upsert`,
    /// updating a missing identifier is a `NotFound` error; with
    /// `upsert`, it behaves like an insert.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for a non-upsert update of a missing record,
    /// `InvalidRecord` on validation failure, or the codec/destination
    /// failure that stopped the write.
    pub fn update(
        &self,
        identifier: &str,
        attributes: &Attributes,
        upsert: bool,
    ) -> StoreResult<()> {
        record::validate_identifier(identifier)?;
        if !upsert && !self.destination.exists(identifier)? {
            return Err(StoreError::not_found(identifier));
        }
        record::validate_attributes(attributes)?;
        let data = self.codec.serialize(attributes)?;
        self.destination.store(identifier, &data)?;
        Ok(())
    }

    /// Deletes the record stored under `identifier`.
    ///
    /// With `ignore_missing`, deleting an absent record is silently a
    /// no-op; without it, absence is a `NotFound` error.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an absent record unless `ignore_missing`
    /// is set, or a write failure if removal fails.
    pub fn delete(&self, identifier: &str, ignore_missing: bool) -> StoreResult<()> {
        record::validate_identifier(identifier)?;
        match self.destination.delete(identifier) {
            Ok(()) => Ok(()),
            Err(DestinationError::NotFound { .. }) if ignore_missing => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Reports whether a record is stored under `identifier`.
    ///
    /// # Errors
    ///
    /// Returns a read failure if existence cannot be determined.
    pub fn contains(&self, identifier: &str) -> StoreResult<bool> {
        record::validate_identifier(identifier)?;
        Ok(self.destination.exists(identifier)?)
    }

    /// Finds records whose attributes equal every entry in `filter`.
    ///
    /// The scan enumerates records in the destination's enumeration
    /// order, deserializing each and keeping those where every filter
    /// key is present with an equal value; the empty filter matches
    /// everything. Equality is kind-exact: an integer `1` never
    /// matches a float `1.0`.
    ///
    /// `limit == 0` means unbounded. Otherwise the scan stops as soon
    /// as `offset + limit` matches have accumulated, and the first
    /// `offset` matches are dropped from the result (they are still
    /// read and deserialized). Pagination is therefore only as stable
    /// as the destination's enumeration order; a directory-backed
    /// destination makes no ordering promise across calls.
    ///
    /// # Errors
    ///
    /// Returns a read failure if enumeration fails, or a
    /// deserialization failure on the first record the codec cannot
    /// decode.
    pub fn query(
        &self,
        filter: &Attributes,
        limit: usize,
        offset: usize,
    ) -> StoreResult<Vec<(String, Attributes)>> {
        let mut matches = Vec::new();
        for entry in self.destination.retrieve_all()? {
            let (identifier, data) = entry?;
            let attributes = self.codec.deserialize(&data)?;
            if matches_filter(&attributes, filter) {
                matches.push((identifier, attributes));
                if limit > 0 && matches.len() >= offset.saturating_add(limit) {
                    break;
                }
            }
        }
        Ok(matches.into_iter().skip(offset).collect())
    }

    /// Finds every record matching `filter`, without pagination.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Store::query`].
    pub fn query_all(&self, filter: &Attributes) -> StoreResult<Vec<(String, Attributes)>> {
        self.query(filter, 0, 0)
    }
}

fn matches_filter(attributes: &Attributes, filter: &Attributes) -> bool {
    filter
        .iter()
        .all(|(key, expected)| attributes.get(key) == Some(expected))
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}
