//! SeedForge - Deterministic identifiers for ORM seed data
//!
//! Derive a descriptor for your entity and hand loosely-typed seed records
//! to the pipeline; every row comes back with an identifier computed from
//! its own contents, identical on every run.
//!
//! # Example
//!
//! ```rust
//! use seedforge::prelude::*;
//!
//! #[derive(SeedEntity)]
//! pub struct Foo {
//!     id: Uuid,
//!     name: String,
//! }
//!
//! let rows: Vec<Foo> = seed_data_with_unique_id(vec![
//!     seed_record! { name: "Foo 1" },
//!     seed_record! { name: "Foo 2" },
//! ])
//! .unwrap();
//!
//! assert_ne!(rows[0].id, rows[1].id);
//! assert_ne!(rows[0].id, Uuid::nil());
//! ```

// Lets the derive macros' `::seedforge` paths resolve inside this crate.
extern crate self as seedforge;

// User-facing macros
pub use seedforge_macros::{seed_entity, SeedEntity};

pub use seedforge_core::seed_record;
pub use seedforge_core::{
    copy, derive_id, id_components, optional_string_hash, overlay, overlay_owned, string_hash,
    ConversionError, EntityFields, FieldSource, FieldType, IdComponents, Result, SeedEntity,
    SeedError, SeedRecord, Value,
};
pub use seedforge_config::{BatchPolicy, ConfigError, SeedConfig, SeedFile};
pub use uuid::Uuid;

#[cfg(feature = "console")]
pub mod console;
mod seed;

pub use seed::{
    copy_with_unique_id, seed_data_with_unique_id, SeedDataExt, SeedSink, Seeder,
};

/// Internal types for macro-generated code. Do not use directly.
#[doc(hidden)]
pub mod __internal {
    pub use seedforge_core::domain::{
        FieldDescriptor, SeedEntity, ShapeDescriptor, TypedFieldAccessor,
    };
}

pub mod prelude {
    pub use super::{seed_entity, seed_record, SeedEntity};
    pub use super::{
        copy, copy_with_unique_id, derive_id, id_components, overlay, seed_data_with_unique_id,
        string_hash,
    };
    pub use super::{SeedDataExt, SeedError, SeedRecord, SeedSink, Seeder, Uuid, Value};
}
