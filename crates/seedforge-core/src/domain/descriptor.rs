//! Shape descriptor.

use std::any::TypeId;
use std::fmt;

use super::FieldDescriptor;
use crate::error::{Result, SeedError};

/// Conventional name of the identifier field.
pub const DEFAULT_ID_FIELD: &str = "id";

/// Describes an entity shape at runtime.
pub struct ShapeDescriptor<E> {
    /// Fully qualified name of the shape; hashed into every identifier.
    pub qualified_name: &'static str,
    /// TypeId of the shape.
    pub type_id: TypeId,
    /// Seed name of the identifier field.
    pub id_field: &'static str,
    /// Builds a zero-initialized instance.
    pub constructor: Option<fn() -> E>,
    /// Declared fields, in declaration order.
    pub fields: Vec<FieldDescriptor<E>>,
}

impl<E: 'static> ShapeDescriptor<E> {
    /// Creates a descriptor with no constructor and no fields.
    pub fn new(qualified_name: &'static str) -> Self {
        ShapeDescriptor {
            qualified_name,
            type_id: TypeId::of::<E>(),
            id_field: DEFAULT_ID_FIELD,
            constructor: None,
            fields: Vec::new(),
        }
    }

    /// Sets the constructor used to create fresh instances.
    pub fn with_constructor(mut self, constructor: fn() -> E) -> Self {
        self.constructor = Some(constructor);
        self
    }

    /// Sets the identifier field.
    pub fn with_id_field(mut self, field: &'static str) -> Self {
        self.id_field = field;
        self
    }

    /// Adds a field descriptor.
    pub fn with_field(mut self, field: FieldDescriptor<E>) -> Self {
        self.fields.push(field);
        self
    }

    /// Creates a zero-initialized instance.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::Instantiation` if no constructor is set.
    pub fn instantiate(&self) -> Result<E> {
        let constructor = self.constructor.ok_or(SeedError::Instantiation {
            shape: self.qualified_name,
        })?;
        Ok(constructor())
    }

    /// Finds a field by its seed name. Matching is case-sensitive.
    pub fn find_field(&self, name: &str) -> Option<&FieldDescriptor<E>> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns the identifier field descriptor, if declared.
    pub fn id_field_descriptor(&self) -> Option<&FieldDescriptor<E>> {
        self.find_field(self.id_field)
    }

    /// Returns the number of declared fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

impl<E> Clone for ShapeDescriptor<E> {
    fn clone(&self) -> Self {
        Self {
            qualified_name: self.qualified_name,
            type_id: self.type_id,
            id_field: self.id_field,
            constructor: self.constructor,
            fields: self.fields.clone(),
        }
    }
}

impl<E> fmt::Debug for ShapeDescriptor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeDescriptor")
            .field("qualified_name", &self.qualified_name)
            .field("id_field", &self.id_field)
            .field("fields", &self.fields)
            .finish()
    }
}
