//! Native values produced and consumed by the primitive type codec.

use std::fmt;

use chrono::{DateTime, Utc};

/// A decoded PLC primitive value.
///
/// | Variant | PLC types |
/// |---------|-----------|
/// | Bool | BOOL |
/// | U8 / I8 | BYTE, USINT / SINT |
/// | U16 / I16 | UINT, WORD / INT |
/// | U32 / I32 | UDINT, DWORD, TIME, TIME_OF_DAY, DATE, DATE_AND_TIME / DINT |
/// | U64 / I64 | LWORD, ULINT, LTIME / LINT |
/// | F32 / F64 | REAL / LREAL |
/// | Date | DATE, DATE_AND_TIME with native date conversion |
///
/// Encoding accepts any variant that fits the target type, so `Value::I32(5)`
/// can be written as a `BYTE`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Bool(bool),
    U8(u8),
    I8(i8),
    U16(u16),
    I16(i16),
    U32(u32),
    I32(i32),
    U64(u64),
    I64(i64),
    F32(f32),
    F64(f64),
    /// A point in time, with second resolution on the wire.
    Date(DateTime<Utc>),
}

impl Value {
    /// Return the value as an integer, if it is an integer or a bool.
    pub fn as_i128(&self) -> Option<i128> {
        Some(match *self {
            Value::Bool(b) => i128::from(b),
            Value::U8(v) => i128::from(v),
            Value::I8(v) => i128::from(v),
            Value::U16(v) => i128::from(v),
            Value::I16(v) => i128::from(v),
            Value::U32(v) => i128::from(v),
            Value::I32(v) => i128::from(v),
            Value::U64(v) => i128::from(v),
            Value::I64(v) => i128::from(v),
            Value::F32(_) | Value::F64(_) | Value::Date(_) => return None,
        })
    }

    /// Return the value as a float, if it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::F32(v) => Some(f64::from(v)),
            Value::F64(v) => Some(v),
            _ => self.as_i128().map(|v| v as f64),
        }
    }

    /// Return the date, if this is a `Date`.
    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match *self {
            Value::Date(d) => Some(d),
            _ => None,
        }
    }

    /// Check if the value is `true` or numerically equal to one.
    pub fn is_true(&self) -> bool {
        match *self {
            Value::Bool(b) => b,
            _ => self.as_f64() == Some(1.0),
        }
    }

    /// Returns the type name as a string for logging/debugging.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::U8(_) => "u8",
            Value::I8(_) => "i8",
            Value::U16(_) => "u16",
            Value::I16(_) => "i16",
            Value::U32(_) => "u32",
            Value::I32(_) => "i32",
            Value::U64(_) => "u64",
            Value::I64(_) => "i64",
            Value::F32(_) => "f32",
            Value::F64(_) => "f64",
            Value::Date(_) => "date",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{}", v),
            Value::U8(v) => write!(f, "{}", v),
            Value::I8(v) => write!(f, "{}", v),
            Value::U16(v) => write!(f, "{}", v),
            Value::I16(v) => write!(f, "{}", v),
            Value::U32(v) => write!(f, "{}", v),
            Value::I32(v) => write!(f, "{}", v),
            Value::U64(v) => write!(f, "{}", v),
            Value::I64(v) => write!(f, "{}", v),
            Value::F32(v) => write!(f, "{}", v),
            Value::F64(v) => write!(f, "{}", v),
            Value::Date(v) => write!(f, "{}", v.to_rfc3339()),
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Value::$variant(v)
            }
        }
    )*};
}

impl_from!(
    bool => Bool,
    u8 => U8,
    i8 => I8,
    u16 => U16,
    i16 => I16,
    u32 => U32,
    i32 => I32,
    u64 => U64,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    DateTime<Utc> => Date,
);
