//! Test utilities for seedforge-core
//!
//! Hand-written shapes used across the crate's test modules. The derive
//! macro lives downstream, so these spell their descriptors out.

use uuid::Uuid;

use crate::domain::{FieldDescriptor, SeedEntity, ShapeDescriptor, TypedFieldAccessor};

/// The canonical two-field shape: an identifier and a name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Foo {
    pub id: Uuid,
    pub name: String,
}

impl SeedEntity for Foo {
    fn descriptor() -> ShapeDescriptor<Self> {
        ShapeDescriptor::new("seedforge_core::test_utils::Foo")
            .with_constructor(Foo::default)
            .with_field(FieldDescriptor::new(
                "id",
                TypedFieldAccessor::new(|e: &Foo| &e.id, |e: &mut Foo| &mut e.id),
            ))
            .with_field(FieldDescriptor::new(
                "name",
                TypedFieldAccessor::new(|e: &Foo| &e.name, |e: &mut Foo| &mut e.name),
            ))
    }
}

/// Same qualified name and fields as `Foo`, declared in the opposite order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FooReordered {
    pub name: String,
    pub id: Uuid,
}

impl SeedEntity for FooReordered {
    fn descriptor() -> ShapeDescriptor<Self> {
        ShapeDescriptor::new("seedforge_core::test_utils::Foo")
            .with_constructor(FooReordered::default)
            .with_field(FieldDescriptor::new(
                "name",
                TypedFieldAccessor::new(
                    |e: &FooReordered| &e.name,
                    |e: &mut FooReordered| &mut e.name,
                ),
            ))
            .with_field(FieldDescriptor::new(
                "id",
                TypedFieldAccessor::new(
                    |e: &FooReordered| &e.id,
                    |e: &mut FooReordered| &mut e.id,
                ),
            ))
    }
}

/// Structurally identical to `Foo` under a different name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bar {
    pub id: Uuid,
    pub name: String,
}

impl SeedEntity for Bar {
    fn descriptor() -> ShapeDescriptor<Self> {
        ShapeDescriptor::new("seedforge_core::test_utils::Bar")
            .with_constructor(Bar::default)
            .with_field(FieldDescriptor::new(
                "id",
                TypedFieldAccessor::new(|e: &Bar| &e.id, |e: &mut Bar| &mut e.id),
            ))
            .with_field(FieldDescriptor::new(
                "name",
                TypedFieldAccessor::new(|e: &Bar| &e.name, |e: &mut Bar| &mut e.name),
            ))
    }
}

/// A shape with a mix of field types and a custom identifier field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Gadget {
    pub key: Uuid,
    pub label: String,
    pub count: i32,
    pub serial: Option<i64>,
    pub note: Option<String>,
    pub active: bool,
}

impl SeedEntity for Gadget {
    fn descriptor() -> ShapeDescriptor<Self> {
        ShapeDescriptor::new("seedforge_core::test_utils::Gadget")
            .with_constructor(Gadget::default)
            .with_id_field("key")
            .with_field(FieldDescriptor::new(
                "key",
                TypedFieldAccessor::new(|e: &Gadget| &e.key, |e: &mut Gadget| &mut e.key),
            ))
            .with_field(FieldDescriptor::new(
                "label",
                TypedFieldAccessor::new(|e: &Gadget| &e.label, |e: &mut Gadget| &mut e.label),
            ))
            .with_field(FieldDescriptor::new(
                "count",
                TypedFieldAccessor::new(|e: &Gadget| &e.count, |e: &mut Gadget| &mut e.count),
            ))
            .with_field(FieldDescriptor::new(
                "serial",
                TypedFieldAccessor::new(|e: &Gadget| &e.serial, |e: &mut Gadget| &mut e.serial),
            ))
            .with_field(FieldDescriptor::new(
                "note",
                TypedFieldAccessor::new(|e: &Gadget| &e.note, |e: &mut Gadget| &mut e.note),
            ))
            .with_field(FieldDescriptor::new(
                "active",
                TypedFieldAccessor::new(|e: &Gadget| &e.active, |e: &mut Gadget| &mut e.active),
            ))
    }
}

/// A shape whose `code` field is read-only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frozen {
    pub id: Uuid,
    pub code: String,
}

impl SeedEntity for Frozen {
    fn descriptor() -> ShapeDescriptor<Self> {
        ShapeDescriptor::new("seedforge_core::test_utils::Frozen")
            .with_constructor(Frozen::default)
            .with_field(FieldDescriptor::new(
                "id",
                TypedFieldAccessor::new(|e: &Frozen| &e.id, |e: &mut Frozen| &mut e.id),
            ))
            .with_field(FieldDescriptor::new(
                "code",
                TypedFieldAccessor::read_only(|e: &Frozen| &e.code),
            ))
    }
}

/// A shape that cannot be instantiated.
#[derive(Clone, Debug, PartialEq)]
pub struct Sealed {
    pub id: Uuid,
}

impl SeedEntity for Sealed {
    fn descriptor() -> ShapeDescriptor<Self> {
        ShapeDescriptor::new("seedforge_core::test_utils::Sealed").with_field(
            FieldDescriptor::new(
                "id",
                TypedFieldAccessor::new(|e: &Sealed| &e.id, |e: &mut Sealed| &mut e.id),
            ),
        )
    }
}

/// A shape with no declared fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Empty;

impl SeedEntity for Empty {
    fn descriptor() -> ShapeDescriptor<Self> {
        ShapeDescriptor::new("seedforge_core::test_utils::Empty").with_constructor(|| Empty)
    }
}
