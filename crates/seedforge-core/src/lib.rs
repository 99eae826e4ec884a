//! SeedForge Core - Core types for deterministic seed identifiers
//!
//! This crate provides the building blocks of the seeding pipeline:
//! - A platform-independent string hash
//! - Dynamically-typed field values and seed records
//! - Shape descriptors describing entity fields at runtime
//! - The object copier and the identifier deriver

pub mod copier;
pub mod domain;
pub mod error;
pub mod hash;
pub mod identifier;
pub mod record;
pub mod value;

#[cfg(test)]
pub(crate) mod test_utils;

pub use copier::{copy, overlay, overlay_owned};
pub use domain::{FieldAccessor, FieldDescriptor, SeedEntity, ShapeDescriptor, TypedFieldAccessor};
pub use error::{Result, SeedError};
pub use hash::{optional_string_hash, string_hash};
pub use identifier::{derive_id, id_components, IdComponents};
pub use record::{EntityFields, FieldSource, SeedRecord};
pub use value::{ConversionError, FieldType, Value};
