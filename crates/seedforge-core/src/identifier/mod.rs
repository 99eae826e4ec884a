//! Deterministic identifier derivation.
//!
//! An identifier is assembled from four 32-bit components, each written
//! little-endian:
//!
//! | bytes   | component          |
//! |---------|--------------------|
//! | 0..4    | `type_hash`        |
//! | 4..8    | `instance_hash`    |
//! | 8..12   | `field_type_hash`  |
//! | 12..16  | `field_value_hash` |
//!
//! `instance_hash` is `!field_type_hash ^ !field_value_hash`, which carries no
//! entropy beyond the last two components. It is kept so that identifiers
//! stay byte-compatible with previously generated seed data.

#[cfg(test)]
mod tests;

use std::fmt;

use uuid::Uuid;

use crate::domain::{SeedEntity, ShapeDescriptor};
use crate::hash::string_hash;

/// The four hash components of a derived identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdComponents {
    /// Hash of the shape's qualified name.
    pub type_hash: i32,
    /// `!field_type_hash ^ !field_value_hash`.
    pub instance_hash: i32,
    /// XOR of every declared field type name hash.
    pub field_type_hash: i32,
    /// XOR of every field value hash.
    pub field_value_hash: i32,
}

impl IdComponents {
    /// Computes the components for `instance` using `descriptor`.
    ///
    /// Every declared field takes part, including the identifier field
    /// itself. XOR accumulation makes the result independent of field
    /// declaration order.
    pub fn compute<E: 'static>(descriptor: &ShapeDescriptor<E>, instance: &E) -> Self {
        let type_hash = string_hash(descriptor.qualified_name);

        let mut field_type_hash = 0i32;
        let mut field_value_hash = 0i32;
        for field in &descriptor.fields {
            field_type_hash ^= string_hash(&field.type_name());
            field_value_hash ^= field.value_hash(instance);
        }

        Self {
            type_hash,
            instance_hash: !field_type_hash ^ !field_value_hash,
            field_type_hash,
            field_value_hash,
        }
    }

    /// Serializes the components into the identifier's byte layout.
    pub fn to_bytes(&self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        bytes[0..4].copy_from_slice(&self.type_hash.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.instance_hash.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.field_type_hash.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.field_value_hash.to_le_bytes());
        bytes
    }

    /// Splits an identifier back into its components.
    pub fn from_uuid(id: Uuid) -> Self {
        let bytes = id.as_bytes();
        let word = |at: usize| {
            i32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
        };
        Self {
            type_hash: word(0),
            instance_hash: word(4),
            field_type_hash: word(8),
            field_value_hash: word(12),
        }
    }

    /// Returns the identifier these components describe.
    pub fn to_uuid(&self) -> Uuid {
        Uuid::from_bytes(self.to_bytes())
    }
}

impl fmt::Display for IdComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "type={:08x} instance={:08x} field_types={:08x} field_values={:08x}",
            self.type_hash, self.instance_hash, self.field_type_hash, self.field_value_hash
        )
    }
}

/// Computes the identifier components of `instance`.
pub fn id_components<E: SeedEntity>(instance: &E) -> IdComponents {
    IdComponents::compute(&E::descriptor(), instance)
}

/// Derives the deterministic identifier of `instance`.
///
/// Pure function of the shape's qualified name and the declared types and
/// values of its fields. Never fails; a shape with no fields still yields an
/// identifier carrying its type hash.
pub fn derive_id<E: SeedEntity>(instance: &E) -> Uuid {
    id_components(instance).to_uuid()
}
