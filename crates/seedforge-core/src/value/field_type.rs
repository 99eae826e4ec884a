//! Concrete field types and their conversions.

use std::borrow::Cow;

use thiserror::Error;
use uuid::Uuid;

use super::Value;
use crate::hash::{fold_u64, string_hash};

/// A type that can be declared as an entity field.
///
/// Implementations fix three things forever: the declared type name that
/// feeds the field-type hash, the value hash, and which [`Value`] kinds are
/// accepted on assignment. Changing any of them changes every identifier
/// derived from a shape using the type.
pub trait FieldType: Sized + Send + Sync + 'static {
    /// Stable, fully qualified name of the declared type.
    fn type_name() -> Cow<'static, str>;

    /// Deterministic 32-bit hash of the value. Absent values hash to 0.
    fn value_hash(&self) -> i32;

    /// Converts the field into a dynamically-typed value.
    fn to_value(&self) -> Value;

    /// Converts a dynamically-typed value into the field type.
    ///
    /// Text is never parsed into numbers, chars or uuids.
    fn from_value(value: Value) -> Result<Self, ConversionError>;
}

/// A value could not be converted into a declared field type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}, found {found}")]
pub struct ConversionError {
    /// Declared type name of the field.
    pub expected: Cow<'static, str>,
    /// Kind of the offending value.
    pub found: &'static str,
}

impl ConversionError {
    /// Creates an error for a value of the wrong kind.
    pub fn mismatch<T: FieldType>(value: &Value) -> Self {
        Self {
            expected: T::type_name(),
            found: value.kind(),
        }
    }

    /// Creates an error for an integer that does not fit the declared type.
    pub fn out_of_range<T: FieldType>() -> Self {
        Self {
            expected: T::type_name(),
            found: "out-of-range integer",
        }
    }

    /// Creates an error for a finite float that overflows the declared type.
    pub fn float_out_of_range<T: FieldType>() -> Self {
        Self {
            expected: T::type_name(),
            found: "out-of-range float",
        }
    }
}

macro_rules! impl_int_field_type {
    ($($ty:ident as $variant:ident => |$v:ident| $hash:expr;)+) => {
        $(
            impl FieldType for $ty {
                fn type_name() -> Cow<'static, str> {
                    Cow::Borrowed(stringify!($ty))
                }

                fn value_hash(&self) -> i32 {
                    let $v = *self;
                    $hash
                }

                fn to_value(&self) -> Value {
                    Value::$variant(*self as _)
                }

                fn from_value(value: Value) -> Result<Self, ConversionError> {
                    let converted = match value {
                        Value::Int(i) => $ty::try_from(i).ok(),
                        Value::UInt(u) => $ty::try_from(u).ok(),
                        other => return Err(ConversionError::mismatch::<Self>(&other)),
                    };
                    converted.ok_or_else(ConversionError::out_of_range::<Self>)
                }
            }
        )+
    };
}

impl_int_field_type! {
    i8 as Int => |v| i32::from(v);
    i16 as Int => |v| i32::from(v);
    i32 as Int => |v| v;
    i64 as Int => |v| fold_u64(v as u64);
    isize as Int => |v| fold_u64(v as i64 as u64);
    u8 as UInt => |v| i32::from(v);
    u16 as UInt => |v| i32::from(v);
    u32 as UInt => |v| v as i32;
    u64 as UInt => |v| fold_u64(v);
    usize as UInt => |v| fold_u64(v as u64);
}

impl FieldType for bool {
    fn type_name() -> Cow<'static, str> {
        Cow::Borrowed("bool")
    }

    fn value_hash(&self) -> i32 {
        i32::from(*self)
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(ConversionError::mismatch::<Self>(&other)),
        }
    }
}

// Integers convert into floats only when the float holds them exactly.
fn exact_f64(n: i128) -> Option<f64> {
    let x = n as f64;
    (x as i128 == n).then_some(x)
}

fn exact_f32(n: i128) -> Option<f32> {
    let x = n as f32;
    (x as i128 == n).then_some(x)
}

impl FieldType for f64 {
    fn type_name() -> Cow<'static, str> {
        Cow::Borrowed("f64")
    }

    fn value_hash(&self) -> i32 {
        // +0.0 and -0.0 compare equal and must hash equal.
        if *self == 0.0 {
            0
        } else {
            fold_u64(self.to_bits())
        }
    }

    fn to_value(&self) -> Value {
        Value::Float(*self)
    }

    fn from_value(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::Float(x) => Ok(x),
            Value::Int(i) => {
                exact_f64(i128::from(i)).ok_or_else(ConversionError::out_of_range::<Self>)
            }
            Value::UInt(u) => {
                exact_f64(i128::from(u)).ok_or_else(ConversionError::out_of_range::<Self>)
            }
            other => Err(ConversionError::mismatch::<Self>(&other)),
        }
    }
}

impl FieldType for f32 {
    fn type_name() -> Cow<'static, str> {
        Cow::Borrowed("f32")
    }

    fn value_hash(&self) -> i32 {
        if *self == 0.0 {
            0
        } else {
            self.to_bits() as i32
        }
    }

    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }

    fn from_value(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::Float(x) => {
                let narrowed = x as f32;
                if x.is_finite() && !narrowed.is_finite() {
                    Err(ConversionError::float_out_of_range::<Self>())
                } else {
                    Ok(narrowed)
                }
            }
            Value::Int(i) => {
                exact_f32(i128::from(i)).ok_or_else(ConversionError::out_of_range::<Self>)
            }
            Value::UInt(u) => {
                exact_f32(i128::from(u)).ok_or_else(ConversionError::out_of_range::<Self>)
            }
            other => Err(ConversionError::mismatch::<Self>(&other)),
        }
    }
}

impl FieldType for char {
    fn type_name() -> Cow<'static, str> {
        Cow::Borrowed("char")
    }

    fn value_hash(&self) -> i32 {
        u32::from(*self) as i32
    }

    fn to_value(&self) -> Value {
        Value::Char(*self)
    }

    fn from_value(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::Char(c) => Ok(c),
            other => Err(ConversionError::mismatch::<Self>(&other)),
        }
    }
}

impl FieldType for String {
    fn type_name() -> Cow<'static, str> {
        Cow::Borrowed("alloc::string::String")
    }

    fn value_hash(&self) -> i32 {
        string_hash(self)
    }

    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::Text(s) => Ok(s),
            other => Err(ConversionError::mismatch::<Self>(&other)),
        }
    }
}

impl FieldType for Uuid {
    fn type_name() -> Cow<'static, str> {
        Cow::Borrowed("uuid::Uuid")
    }

    /// XOR of the four little-endian 32-bit words; the nil uuid hashes to 0.
    fn value_hash(&self) -> i32 {
        self.as_bytes()
            .chunks_exact(4)
            .map(|word| i32::from_le_bytes([word[0], word[1], word[2], word[3]]))
            .fold(0, |acc, word| acc ^ word)
    }

    fn to_value(&self) -> Value {
        Value::Uuid(*self)
    }

    fn from_value(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::Uuid(u) => Ok(u),
            other => Err(ConversionError::mismatch::<Self>(&other)),
        }
    }
}

impl<T: FieldType> FieldType for Option<T> {
    fn type_name() -> Cow<'static, str> {
        Cow::Owned(format!("core::option::Option<{}>", T::type_name()))
    }

    fn value_hash(&self) -> i32 {
        self.as_ref().map_or(0, T::value_hash)
    }

    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, T::to_value)
    }

    fn from_value(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some).map_err(|e| ConversionError {
                expected: Self::type_name(),
                found: e.found,
            }),
        }
    }
}

#[cfg(feature = "decimal")]
impl FieldType for rust_decimal::Decimal {
    fn type_name() -> Cow<'static, str> {
        Cow::Borrowed("rust_decimal::Decimal")
    }

    /// Hashes the normalized text form, so `1.50` and `1.5` hash equal.
    fn value_hash(&self) -> i32 {
        string_hash(&self.normalize().to_string())
    }

    fn to_value(&self) -> Value {
        Value::Decimal(*self)
    }

    fn from_value(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::Decimal(d) => Ok(d),
            Value::Int(i) => Ok(Self::from(i)),
            Value::UInt(u) => Ok(Self::from(u)),
            other => Err(ConversionError::mismatch::<Self>(&other)),
        }
    }
}
