//! Entity shapes and their runtime descriptors.
//!
//! A shape is the destination type of a seed record:
//! - `SeedEntity`: implemented by every shape, hands out its descriptor
//! - `ShapeDescriptor`: qualified name, identifier field, constructor, fields
//! - `FieldDescriptor`: one declared field and its typed accessor

mod descriptor;
mod field;


pub use descriptor::ShapeDescriptor;
pub use field::{FieldAccessor, FieldDescriptor, TypedFieldAccessor};

/// A destination shape for seed records.
///
/// The descriptor is the only thing the copier and the identifier deriver
/// know about a shape. Use `#[derive(SeedEntity)]` from `seedforge` to
/// generate it, or implement it by hand.
///
/// # Example
///
/// ```
/// use seedforge_core::{SeedEntity, ShapeDescriptor, FieldDescriptor, TypedFieldAccessor};
/// use uuid::Uuid;
///
/// struct Tag {
///     id: Uuid,
///     label: String,
/// }
///
/// impl SeedEntity for Tag {
///     fn descriptor() -> ShapeDescriptor<Self> {
///         ShapeDescriptor::new("my_app::Tag")
///             .with_constructor(|| Tag { id: Uuid::nil(), label: String::new() })
///             .with_field(FieldDescriptor::new(
///                 "id",
///                 TypedFieldAccessor::new(|t: &Tag| &t.id, |t: &mut Tag| &mut t.id),
///             ))
///             .with_field(FieldDescriptor::new(
///                 "label",
///                 TypedFieldAccessor::new(|t: &Tag| &t.label, |t: &mut Tag| &mut t.label),
///             ))
///     }
/// }
///
/// assert_eq!(Tag::descriptor().field_count(), 2);
/// ```
pub trait SeedEntity: Sized + Send + Sync + 'static {
    /// Returns the structural description of this shape.
    fn descriptor() -> ShapeDescriptor<Self>;
}
