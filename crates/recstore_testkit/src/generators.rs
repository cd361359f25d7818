//! Property-based test generators using proptest.
//!
//! Provides strategies for generating random records that satisfy the
//! data model, so every generated value is accepted by store
//! validation.

use proptest::prelude::*;
use recstore_codec::{Attributes, Scalar};

/// Strategy for generating valid record identifiers.
///
/// Identifiers start with an alphanumeric character, so `.` and `..`
/// cannot occur, and the alphabet excludes path separators.
pub fn identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9][a-zA-Z0-9_.-]{0,31}").expect("Invalid regex")
}

/// Strategy for generating attribute keys.
pub fn attribute_key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,15}").expect("Invalid regex")
}

/// Strategy for generating scalar values of every kind.
///
/// Floats are drawn from a finite range since non-finite values are
/// rejected at serialization.
pub fn scalar_strategy() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        3 => any::<i64>().prop_map(Scalar::Integer),
        3 => prop::string::string_regex("[ -~]{0,24}")
            .expect("Invalid regex")
            .prop_map(Scalar::Text),
        2 => (-1.0e12..1.0e12f64).prop_map(Scalar::Float),
        1 => any::<bool>().prop_map(Scalar::Bool),
    ]
}

/// Strategy for generating non-empty attribute mappings.
pub fn attributes_strategy() -> impl Strategy<Value = Attributes> {
    prop::collection::btree_map(attribute_key_strategy(), scalar_strategy(), 1..8)
}

/// Strategy for generating a batch of records with distinct identifiers.
pub fn record_batch_strategy(max_records: usize) -> impl Strategy<Value = Vec<(String, Attributes)>> {
    prop::collection::btree_map(identifier_strategy(), attributes_strategy(), 1..max_records)
        .prop_map(|batch| batch.into_iter().collect())
}

/// A randomly generated store operation.
#[derive(Debug, Clone)]
pub enum StoreOperation {
    /// Insert a record, overwriting any previous one.
    Insert {
        /// Record identifier.
        identifier: String,
        /// Record attributes.
        attributes: Attributes,
    },
    /// Upsert a record.
    Update {
        /// Record identifier.
        identifier: String,
        /// Record attributes.
        attributes: Attributes,
    },
    /// Delete a record, ignoring absence.
    Delete {
        /// Record identifier.
        identifier: String,
    },
    /// Look a record up.
    Find {
        /// Record identifier.
        identifier: String,
    },
}

/// Strategy for generating store operations.
///
/// Identifiers are drawn from a small pool so that operations in a
/// sequence actually collide with each other.
pub fn operation_strategy() -> impl Strategy<Value = StoreOperation> {
    fn pooled_identifier() -> impl Strategy<Value = String> {
        prop::string::string_regex("[a-e][0-9]").expect("Invalid regex")
    }

    prop_oneof![
        3 => (pooled_identifier(), attributes_strategy())
            .prop_map(|(identifier, attributes)| StoreOperation::Insert { identifier, attributes }),
        2 => (pooled_identifier(), attributes_strategy())
            .prop_map(|(identifier, attributes)| StoreOperation::Update { identifier, attributes }),
        1 => pooled_identifier()
            .prop_map(|identifier| StoreOperation::Delete { identifier }),
        2 => pooled_identifier()
            .prop_map(|identifier| StoreOperation::Find { identifier }),
    ]
}

/// Strategy for generating a sequence of operations.
pub fn operation_sequence_strategy(
    min_ops: usize,
    max_ops: usize,
) -> impl Strategy<Value = Vec<StoreOperation>> {
    prop::collection::vec(operation_strategy(), min_ops..max_ops)
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Creates a configuration for thorough tests.
    #[must_use]
    pub fn thorough() -> Self {
        Self {
            cases: 1024,
            max_shrink_iters: 10000,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}
