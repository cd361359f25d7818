//! # RecStore Storage
//!
//! Storage destination trait and implementations for RecStore.
//!
//! This crate provides the persistence abstraction for RecStore.
//! Destinations are **opaque string stores** addressed by record
//! identifier - they do not interpret the data they store.
//!
//! ## Design Principles
//!
//! - Destinations speak identifiers and serialized strings, nothing else
//! - No knowledge of record formats or attribute mappings
//! - Must be `Send + Sync` for concurrent access
//! - The record store owns duplicate policy and validation
//!
//! ## Available Destinations
//!
//! - [`LocalDirDestination`] - One file per record in a local directory
//! - [`MemoryDestination`] - For testing and ephemeral storage
//!
//! ## Example
//!
//! ```rust
//! use recstore_storage::{Destination, MemoryDestination};
//!
//! let dest = MemoryDestination::new();
//! dest.init().unwrap();
//! dest.store("alpha", "{\"name\":\"Ada\"}").unwrap();
//! assert_eq!(dest.retrieve("alpha").unwrap(), "{\"name\":\"Ada\"}");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod destination;
mod error;
mod localdir;
mod memory;

pub use destination::{Destination, EntryIter};
pub use error::{DestinationError, DestinationResult};
pub use localdir::LocalDirDestination;
pub use memory::MemoryDestination;
