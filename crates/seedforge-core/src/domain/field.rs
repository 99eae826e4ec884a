//! Field descriptors and typed accessors.

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use crate::value::{ConversionError, FieldType, Value};

/// Type-erased access to one field of an entity.
///
/// This is the structural replacement for runtime reflection: each declared
/// field carries an accessor that can read, hash and (optionally) assign it.
pub trait FieldAccessor<E>: Send + Sync {
    /// Stable name of the declared field type.
    fn type_name(&self) -> Cow<'static, str>;

    /// Reads the field as a dynamically-typed value.
    fn value(&self, entity: &E) -> Value;

    /// Deterministic hash of the field's current value.
    fn value_hash(&self, entity: &E) -> i32;

    /// Returns true if the field can be assigned.
    fn is_writable(&self) -> bool;

    /// Converts `value` to the declared type and stores it.
    ///
    /// Returns `Ok(false)` without touching the entity if the field is
    /// read-only.
    fn assign(&self, entity: &mut E, value: Value) -> Result<bool, ConversionError>;

    /// Clone this accessor.
    fn clone_box(&self) -> Box<dyn FieldAccessor<E>>;
}

impl<E> Clone for Box<dyn FieldAccessor<E>> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// A concrete field accessor for a specific entity and field type.
///
/// # Type Parameters
/// * `E` - The entity type
/// * `F` - The declared field type
pub struct TypedFieldAccessor<E, F> {
    /// Function to borrow the field.
    get: fn(&E) -> &F,
    /// Function to borrow the field's storage mutably; `None` for read-only fields.
    get_mut: Option<fn(&mut E) -> &mut F>,
    _phantom: PhantomData<fn() -> F>,
}

impl<E, F> TypedFieldAccessor<E, F>
where
    E: 'static,
    F: FieldType,
{
    /// Creates an accessor for a writable field.
    pub fn new(get: fn(&E) -> &F, get_mut: fn(&mut E) -> &mut F) -> Self {
        Self {
            get,
            get_mut: Some(get_mut),
            _phantom: PhantomData,
        }
    }

    /// Creates an accessor for a field with no assignable storage.
    pub fn read_only(get: fn(&E) -> &F) -> Self {
        Self {
            get,
            get_mut: None,
            _phantom: PhantomData,
        }
    }
}

impl<E, F> Clone for TypedFieldAccessor<E, F> {
    fn clone(&self) -> Self {
        Self {
            get: self.get,
            get_mut: self.get_mut,
            _phantom: PhantomData,
        }
    }
}

impl<E, F> FieldAccessor<E> for TypedFieldAccessor<E, F>
where
    E: 'static,
    F: FieldType,
{
    fn type_name(&self) -> Cow<'static, str> {
        F::type_name()
    }

    fn value(&self, entity: &E) -> Value {
        (self.get)(entity).to_value()
    }

    fn value_hash(&self, entity: &E) -> i32 {
        (self.get)(entity).value_hash()
    }

    fn is_writable(&self) -> bool {
        self.get_mut.is_some()
    }

    fn assign(&self, entity: &mut E, value: Value) -> Result<bool, ConversionError> {
        let Some(get_mut) = self.get_mut else {
            return Ok(false);
        };
        *get_mut(entity) = F::from_value(value)?;
        Ok(true)
    }

    fn clone_box(&self) -> Box<dyn FieldAccessor<E>> {
        Box::new(self.clone())
    }
}

/// Describes one declared field of an entity shape.
pub struct FieldDescriptor<E> {
    /// Seed name the field is matched by.
    pub name: &'static str,
    /// Accessor for the field.
    pub accessor: Box<dyn FieldAccessor<E>>,
}

impl<E> FieldDescriptor<E> {
    /// Creates a new field descriptor.
    pub fn new<A>(name: &'static str, accessor: A) -> Self
    where
        A: FieldAccessor<E> + 'static,
    {
        Self {
            name,
            accessor: Box::new(accessor),
        }
    }

    /// Returns the stable name of the declared type.
    pub fn type_name(&self) -> Cow<'static, str> {
        self.accessor.type_name()
    }

    /// Reads the field from `entity`.
    pub fn value(&self, entity: &E) -> Value {
        self.accessor.value(entity)
    }

    /// Hashes the field's value on `entity`.
    pub fn value_hash(&self, entity: &E) -> i32 {
        self.accessor.value_hash(entity)
    }

    /// Returns true if the field has assignable storage.
    pub fn is_writable(&self) -> bool {
        self.accessor.is_writable()
    }
}

impl<E> Clone for FieldDescriptor<E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            accessor: self.accessor.clone(),
        }
    }
}

impl<E> fmt::Debug for FieldDescriptor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("type_name", &self.accessor.type_name())
            .field("writable", &self.accessor.is_writable())
            .finish()
    }
}
