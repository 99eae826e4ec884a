//! Error types for SeedForge

use thiserror::Error;

/// Main error type for seeding operations.
///
/// Every variant is a programming or configuration error; none of them
/// are transient.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The shape descriptor has no constructor.
    #[error("Instantiation error: shape `{shape}` has no usable constructor")]
    Instantiation { shape: &'static str },

    /// A matched field received a value its declared type cannot hold.
    #[error("Assignment type error: `{shape}.{field}` expects {expected}, found {found}")]
    AssignmentType {
        shape: &'static str,
        field: &'static str,
        expected: String,
        found: &'static str,
    },

    /// A matched field is read-only and exposes no storage to assign into.
    #[error("Missing backing storage: `{shape}.{field}` is read-only")]
    MissingBackingStorage {
        shape: &'static str,
        field: &'static str,
    },

    /// The identifier field named by the shape or configuration does not exist.
    #[error("Unknown identifier field: shape `{shape}` has no field `{field}`")]
    UnknownIdField { shape: &'static str, field: String },

    /// A record in a batch failed to convert.
    #[error("Seed record #{index} failed: {source}")]
    Record {
        index: usize,
        #[source]
        source: Box<SeedError>,
    },
}

impl SeedError {
    /// Wraps this error with the index of the batch record that produced it.
    pub fn in_record(self, index: usize) -> Self {
        SeedError::Record {
            index,
            source: Box::new(self),
        }
    }
}

/// Result type alias for seeding operations
pub type Result<T> = std::result::Result<T, SeedError>;
