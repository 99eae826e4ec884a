//! Object copier.
//!
//! Copies named values from a [`FieldSource`] into an entity shape, matching
//! source names against the shape's field names. Destination fields with no
//! source counterpart keep their zero value; source fields with no
//! destination counterpart are skipped.


use tracing::trace;

use crate::domain::{SeedEntity, ShapeDescriptor};
use crate::error::{Result, SeedError};
use crate::record::FieldSource;

/// Creates a new zero-initialized `E` and copies every matching field from
/// `source` into it.
///
/// # Errors
///
/// - `SeedError::Instantiation` if the shape has no constructor
/// - `SeedError::AssignmentType` if a value does not fit its field's type
/// - `SeedError::MissingBackingStorage` if a matched field is read-only
///
/// # Examples
///
/// ```ignore
/// let foo: Foo = copy(&seed_record! { name: "Foo 1" })?;
/// assert_eq!(foo.name(), "Foo 1");
/// ```
pub fn copy<E: SeedEntity>(source: &impl FieldSource) -> Result<E> {
    let descriptor = E::descriptor();
    let mut instance = descriptor.instantiate()?;
    apply(&descriptor, &mut instance, source)?;
    Ok(instance)
}

/// Copies every matching field from `source` onto an existing instance.
///
/// Assignment stops at the first failing field; fields assigned before it
/// keep their new values.
pub fn overlay<E: SeedEntity>(instance: &mut E, source: &impl FieldSource) -> Result<()> {
    apply(&E::descriptor(), instance, source)
}

/// By-value variant of [`overlay`].
pub fn overlay_owned<E: SeedEntity>(mut instance: E, source: &impl FieldSource) -> Result<E> {
    overlay(&mut instance, source)?;
    Ok(instance)
}

/// Copies matching fields using an already-built descriptor.
pub fn apply<E: 'static>(
    descriptor: &ShapeDescriptor<E>,
    instance: &mut E,
    source: &impl FieldSource,
) -> Result<()> {
    for (name, value) in source.field_values() {
        let Some(field) = descriptor.find_field(name) else {
            trace!(
                event = "unmatched_field",
                shape = descriptor.qualified_name,
                field = name,
                "source field has no destination, skipping"
            );
            continue;
        };

        let assigned = field
            .accessor
            .assign(instance, value)
            .map_err(|e| SeedError::AssignmentType {
                shape: descriptor.qualified_name,
                field: field.name,
                expected: e.expected.into_owned(),
                found: e.found,
            })?;

        if !assigned {
            return Err(SeedError::MissingBackingStorage {
                shape: descriptor.qualified_name,
                field: field.name,
            });
        }
    }
    Ok(())
}
