//! Dynamically-typed field values.
//!
//! Seed records carry their fields as [`Value`]s. Entity fields declare a
//! concrete [`FieldType`], which knows how to take a `Value` apart, how to
//! name itself and how to hash itself deterministically.

mod field_type;


use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use uuid::Uuid;

pub use field_type::{ConversionError, FieldType};

/// A single loosely-typed field value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Absent value.
    #[default]
    Null,
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer too large for `Int`, or explicitly unsigned input.
    UInt(u64),
    Float(f64),
    Char(char),
    Text(String),
    Uuid(Uuid),
    #[cfg(feature = "decimal")]
    Decimal(rust_decimal::Decimal),
}

impl Value {
    /// Returns a short name for the kind of value held, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "integer",
            Value::UInt(_) => "unsigned integer",
            Value::Float(_) => "float",
            Value::Char(_) => "char",
            Value::Text(_) => "text",
            Value::Uuid(_) => "uuid",
            #[cfg(feature = "decimal")]
            Value::Decimal(_) => "decimal",
        }
    }

    /// Returns true if this is `Value::Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the text if this is a `Value::Text`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::UInt(u) => write!(f, "{}", u),
            Value::Float(x) => write!(f, "{}", x),
            Value::Char(c) => write!(f, "{:?}", c),
            Value::Text(s) => write!(f, "{:?}", s),
            Value::Uuid(u) => write!(f, "{}", u),
            #[cfg(feature = "decimal")]
            Value::Decimal(d) => write!(f, "{}", d),
        }
    }
}

macro_rules! impl_value_from {
    ($variant:ident <= $($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v.into())
                }
            }
        )+
    };
}

impl_value_from!(Bool <= bool);
impl_value_from!(Int <= i8, i16, i32, i64);
impl_value_from!(UInt <= u8, u16, u32, u64);
impl_value_from!(Float <= f32, f64);
impl_value_from!(Char <= char);
impl_value_from!(Text <= String, &str);
impl_value_from!(Uuid <= Uuid);

#[cfg(feature = "decimal")]
impl_value_from!(Decimal <= rust_decimal::Decimal);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

// Seed documents only produce scalars. Text stays text: a string never
// silently turns into a char or a uuid.
impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a scalar seed value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(i64::try_from(v).map_or(Value::UInt(v), Value::Int))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Float(v))
    }

    fn visit_char<E: de::Error>(self, v: char) -> Result<Value, E> {
        Ok(Value::Char(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::Text(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::Text(v))
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, _seq: A) -> Result<Value, A::Error> {
        Err(de::Error::invalid_type(de::Unexpected::Seq, &self))
    }

    fn visit_map<A: MapAccess<'de>>(self, _map: A) -> Result<Value, A::Error> {
        Err(de::Error::invalid_type(de::Unexpected::Map, &self))
    }
}
