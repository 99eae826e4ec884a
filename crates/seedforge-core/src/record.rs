//! Seed records and field sources.
//!
//! A `FieldSource` is anything the copier can read named values from: a
//! loosely-typed `SeedRecord`, or an existing entity viewed through its
//! descriptor with `EntityFields`.

use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use crate::domain::SeedEntity;
use crate::value::Value;

/// A source of named field values.
pub trait FieldSource {
    /// Returns the source's fields in order.
    fn field_values(&self) -> Vec<(&str, Value)>;
}

impl<T: FieldSource + ?Sized> FieldSource for &T {
    fn field_values(&self) -> Vec<(&str, Value)> {
        (**self).field_values()
    }
}

/// An ordered bag of named values describing one entity to seed.
///
/// Later entries with the same name override earlier ones when copied.
///
/// # Examples
///
/// ```
/// use seedforge_core::{SeedRecord, Value};
///
/// let record = SeedRecord::new().with("name", "Foo 1").with("rank", 3);
///
/// assert_eq!(record.get("name"), Some(&Value::Text("Foo 1".into())));
/// assert_eq!(record.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedRecord {
    fields: Vec<(String, Value)>,
}

impl SeedRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds a field in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.push((name.into(), value.into()));
    }

    /// Returns the last value recorded under `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no entries.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl FieldSource for SeedRecord {
    fn field_values(&self) -> Vec<(&str, Value)> {
        self.fields
            .iter()
            .map(|(n, v)| (n.as_str(), v.clone()))
            .collect()
    }
}

impl<N, V> FromIterator<(N, V)> for SeedRecord
where
    N: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut record = SeedRecord::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

impl<'de> Deserialize<'de> for SeedRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SeedRecordVisitor)
    }
}

struct SeedRecordVisitor;

impl<'de> Visitor<'de> for SeedRecordVisitor {
    type Value = SeedRecord;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of field names to scalar values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<SeedRecord, A::Error> {
        let mut record = SeedRecord::new();
        while let Some((name, value)) = map.next_entry::<String, Value>()? {
            record.insert(name, value);
        }
        Ok(record)
    }
}

/// Views an existing entity as a field source through its descriptor.
pub struct EntityFields<'a, E>(pub &'a E);

impl<E: SeedEntity> FieldSource for EntityFields<'_, E> {
    fn field_values(&self) -> Vec<(&str, Value)> {
        E::descriptor()
            .fields
            .iter()
            .map(|f| (f.name, f.value(self.0)))
            .collect()
    }
}

/// Builds a [`SeedRecord`] from `name: value` pairs.
///
/// # Examples
///
/// ```
/// use seedforge_core::{seed_record, Value};
///
/// let record = seed_record! { name: "Foo 1", rank: 3 };
/// assert_eq!(record.get("rank"), Some(&Value::Int(3)));
/// ```
#[macro_export]
macro_rules! seed_record {
    () => {
        $crate::record::SeedRecord::new()
    };
    ($($name:ident : $value:expr),+ $(,)?) => {
        $crate::record::SeedRecord::new()
            $(.with(stringify!($name), $value))+
    };
}
