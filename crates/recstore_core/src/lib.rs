//! # RecStore Core
//!
//! Pluggable record store: flat attribute records, serialized by a
//! format codec, persisted by a storage destination.
//!
//! A [`Store`] binds exactly one codec to exactly one destination and
//! offers record-level operations on top: insert, find, update,
//! delete, and a linear-scan query with equality filtering. Which
//! plugins a store uses is pure configuration; the operations never
//! change.
//!
//! ## Design Principles
//!
//! - Records are flat string-to-scalar mappings, validated before
//!   every write
//! - The codec owns the serialized form; the destination never
//!   interprets it
//! - Absence on lookup is `Ok(None)`, never an error
//! - Updates replace the whole record; there is no field-level merge
//!
//! ## Built-in Plugins
//!
//! Formats: `json`. Destinations: `localdir`, `memory`. See
//! [`supported_formats`] and [`supported_destinations`] for the
//! registry view, and [`generate_config`] for a ready-to-edit
//! configuration template.
//!
//! ## Example
//!
//! ```rust
//! use recstore_core::{Attributes, Scalar, Store, StoreConfig};
//!
//! let store = Store::open(&StoreConfig::new("json", "memory")).unwrap();
//!
//! let mut record = Attributes::new();
//! record.insert("name".to_string(), Scalar::from("Ada"));
//! record.insert("age".to_string(), Scalar::from(36i64));
//!
//! store.insert("p1", &record, false).unwrap();
//! assert_eq!(store.find("p1").unwrap(), Some(record));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod record;
mod registry;
mod store;

/// Crate version, as compiled.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use registry::{generate_config, supported_destinations, supported_formats};
pub use store::Store;

// Plugin contracts and the data model, re-exported so most users can
// depend on this crate alone.
pub use recstore_codec::{Attributes, Codec, CodecError, CodecResult, JsonCodec, Scalar};
pub use recstore_storage::{
    Destination, DestinationError, DestinationResult, EntryIter, LocalDirDestination,
    MemoryDestination,
};
