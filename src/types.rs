//! The primitive PLC data types and their binary representation.
//!
//! Every type has a fixed size and is stored little-endian.  Types are looked
//! up by name; names are trimmed and case-insensitive, but otherwise have to
//! match one of the aliases exactly:
//!
//! ```
//! use ads_proto::types::{self, Settings};
//! use ads_proto::Value;
//!
//! let bytes = types::encode(&Settings::raw(), "int", &Value::I16(-1), None).unwrap();
//! assert_eq!(bytes.as_bytes(), [0xff, 0xff]);
//! assert_eq!(types::decode(&Settings::raw(), "INT", &[0xff, 0xff]).unwrap(), Value::I16(-1));
//! ```
//!
//! `STRING(n)` types are recognized by [`is_known_type`], but their size and
//! layout have to be handled by the caller.

use std::fmt;

use byteorder::{ByteOrder, LE};
use chrono::DateTime;
use tracing::{debug, trace};

use crate::errors::{Error, Result};
use crate::value::Value;

/// Settings that affect encoding and decoding.
///
/// They are passed into every call; the codec keeps no state of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Convert `DATE` and `DATE_AND_TIME` from and to [`Value::Date`].
    /// Otherwise they are raw second counts ([`Value::U32`]).
    pub convert_dates_to_native: bool,
}

impl Settings {
    /// Create new `Settings`.
    pub fn new(convert_dates_to_native: bool) -> Self {
        Self { convert_dates_to_native }
    }

    /// Create new `Settings` that keep dates as raw second counts.
    pub fn raw() -> Self {
        Self::new(false)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(true)
    }
}

type EncodeFn = fn(&Value, &mut [u8], &Settings) -> Option<()>;
type DecodeFn = fn(&[u8], &Settings) -> Option<Value>;

/// Describes one primitive type and all names it is known by.
pub struct BaseType {
    names: &'static [&'static str],
    size: usize,
    encode: EncodeFn,
    decode: DecodeFn,
}

impl fmt::Debug for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseType")
         .field("names", &self.names)
         .field("size", &self.size)
         .finish()
    }
}

impl BaseType {
    /// Return the canonical name.
    pub fn name(&self) -> &'static str {
        self.names[0]
    }

    /// Return all accepted names, canonical name first.
    pub fn aliases(&self) -> &'static [&'static str] {
        self.names
    }

    /// Return the size in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    fn check_len(&self, len: usize) -> Result<()> {
        if len < self.size {
            debug!(ty = self.name(), len, size = self.size, "buffer too small");
            return Err(Error::BufferTooSmall(self.name(), len, self.size));
        }
        Ok(())
    }

    /// Write `value` into the first `size` bytes of `buf`.
    pub fn encode_into(&self, settings: &Settings, value: &Value, buf: &mut [u8]) -> Result<()> {
        self.check_len(buf.len())?;
        (self.encode)(value, &mut buf[..self.size], settings)
            .ok_or_else(|| Error::InvalidValue(self.name(), value.to_string()))
    }

    /// Read a value from the first `size` bytes of `buf`.
    pub fn decode_from(&self, settings: &Settings, buf: &[u8]) -> Result<Value> {
        self.check_len(buf.len())?;
        let data = &buf[..self.size];
        (self.decode)(data, settings)
            .ok_or_else(|| Error::InvalidValue(self.name(), format!("{:02x?}", data)))
    }
}

/// The result of [`encode`]: which buffer the value was written to.
///
/// Either way, the bytes belong to the caller.
#[derive(Debug, PartialEq, Eq)]
pub enum Encoded<'b> {
    /// The written prefix of the buffer passed by the caller.
    Caller(&'b mut [u8]),
    /// A new buffer of exactly the type's size.
    Owned(Vec<u8>),
}

impl Encoded<'_> {
    /// Return the encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Encoded::Caller(buf) => buf,
            Encoded::Owned(vec) => vec,
        }
    }

    /// Return the number of bytes written.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Check if no bytes were written.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if the buffer was allocated by `encode`.
    pub fn is_owned(&self) -> bool {
        matches!(self, Encoded::Owned(_))
    }

    /// Convert into an owned vector, copying if the caller's buffer was used.
    pub fn into_vec(self) -> Vec<u8> {
        match self {
            Encoded::Caller(buf) => buf.to_vec(),
            Encoded::Owned(vec) => vec,
        }
    }
}

impl AsRef<[u8]> for Encoded<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Find the type with the given name.
pub fn find(name: &str) -> Option<&'static BaseType> {
    let name = name.trim().to_ascii_uppercase();
    BASE_TYPES.iter().find(|ty| ty.names.iter().any(|&alias| alias == name))
}

/// Check if the name is a known primitive type or a `STRING(n)` type.
pub fn is_known_type(name: &str) -> bool {
    find(name).is_some() || name.to_ascii_uppercase().contains("STRING(")
}

fn find_required(name: &str) -> Result<&'static BaseType> {
    find(name).ok_or_else(|| {
        debug!(name, "primitive type not found");
        Error::TypeNotFound(name.into())
    })
}

/// Encode `value` as the named type.
///
/// If `buffer` is given, the value is written to its first bytes, otherwise a
/// new buffer of exactly the type's size is allocated.
pub fn encode<'b>(settings: &Settings, name: &str, value: &Value,
                  buffer: Option<&'b mut [u8]>) -> Result<Encoded<'b>> {
    let ty = find_required(name)?;
    match buffer {
        Some(buf) => {
            ty.encode_into(settings, value, buf)?;
            trace!(ty = ty.name(), size = ty.size, %value, "encoded into caller buffer");
            let (written, _) = buf.split_at_mut(ty.size);
            Ok(Encoded::Caller(written))
        }
        None => {
            let mut buf = vec![0; ty.size];
            ty.encode_into(settings, value, &mut buf)?;
            trace!(ty = ty.name(), size = ty.size, %value, "encoded into new buffer");
            Ok(Encoded::Owned(buf))
        }
    }
}

/// Decode a value of the named type from the start of `buffer`.
pub fn decode(settings: &Settings, name: &str, buffer: &[u8]) -> Result<Value> {
    let ty = find_required(name)?;
    let value = ty.decode_from(settings, buffer)?;
    trace!(ty = ty.name(), size = ty.size, %value, "decoded");
    Ok(value)
}

/// A fixed-size number with a little-endian wire form.
trait Wire: Copy + Into<Value> {
    fn write(self, buf: &mut [u8]);
    fn read(buf: &[u8]) -> Self;
}

impl Wire for u8 {
    fn write(self, buf: &mut [u8]) {
        buf[0] = self;
    }
    fn read(buf: &[u8]) -> Self {
        buf[0]
    }
}

impl Wire for i8 {
    fn write(self, buf: &mut [u8]) {
        buf[0] = self as u8;
    }
    fn read(buf: &[u8]) -> Self {
        buf[0] as i8
    }
}

macro_rules! impl_wire {
    ($($ty:ty: $read:ident, $write:ident;)*) => {$(
        impl Wire for $ty {
            fn write(self, buf: &mut [u8]) {
                LE::$write(buf, self)
            }
            fn read(buf: &[u8]) -> Self {
                LE::$read(buf)
            }
        }
    )*};
}

impl_wire! {
    u16: read_u16, write_u16;
    i16: read_i16, write_i16;
    u32: read_u32, write_u32;
    i32: read_i32, write_i32;
    u64: read_u64, write_u64;
    i64: read_i64, write_i64;
    f32: read_f32, write_f32;
    f64: read_f64, write_f64;
}

fn encode_bool(value: &Value, buf: &mut [u8], _: &Settings) -> Option<()> {
    buf[0] = u8::from(value.is_true());
    Some(())
}

fn decode_bool(buf: &[u8], _: &Settings) -> Option<Value> {
    Some(Value::Bool(buf[0] == 1))
}

fn encode_int<T: Wire + TryFrom<i128>>(value: &Value, buf: &mut [u8], _: &Settings) -> Option<()> {
    T::try_from(value.as_i128()?).ok()?.write(buf);
    Some(())
}

fn decode_num<T: Wire>(buf: &[u8], _: &Settings) -> Option<Value> {
    Some(T::read(buf).into())
}

fn encode_real(value: &Value, buf: &mut [u8], _: &Settings) -> Option<()> {
    let v = value.as_f64()?;
    let real = v as f32;
    // finite values beyond the f32 range would become infinite
    if v.is_finite() && !real.is_finite() {
        return None;
    }
    real.write(buf);
    Some(())
}

fn encode_lreal(value: &Value, buf: &mut [u8], _: &Settings) -> Option<()> {
    value.as_f64()?.write(buf);
    Some(())
}

fn encode_date(value: &Value, buf: &mut [u8], settings: &Settings) -> Option<()> {
    let secs = match value.as_date() {
        Some(date) if settings.convert_dates_to_native => i128::from(date.timestamp()),
        Some(_) => return None,
        None => value.as_i128()?,
    };
    u32::try_from(secs).ok()?.write(buf);
    Some(())
}

fn decode_date(buf: &[u8], settings: &Settings) -> Option<Value> {
    let secs = u32::read(buf);
    if settings.convert_dates_to_native {
        DateTime::from_timestamp(i64::from(secs), 0).map(Value::Date)
    } else {
        Some(Value::U32(secs))
    }
}

/// All primitive types known to the codec.
pub static BASE_TYPES: &[BaseType] = &[
    BaseType {
        names: &["BOOL"],
        size: 1,
        encode: encode_bool,
        decode: decode_bool,
    },
    BaseType {
        names: &["BYTE", "USINT"],
        size: 1,
        encode: encode_int::<u8>,
        decode: decode_num::<u8>,
    },
    BaseType {
        names: &["SINT"],
        size: 1,
        encode: encode_int::<i8>,
        decode: decode_num::<i8>,
    },
    BaseType {
        names: &["UINT", "WORD"],
        size: 2,
        encode: encode_int::<u16>,
        decode: decode_num::<u16>,
    },
    BaseType {
        names: &["INT"],
        size: 2,
        encode: encode_int::<i16>,
        decode: decode_num::<i16>,
    },
    BaseType {
        names: &["DINT"],
        size: 4,
        encode: encode_int::<i32>,
        decode: decode_num::<i32>,
    },
    BaseType {
        names: &["UDINT", "DWORD", "TIME", "TIME_OF_DAY"],
        size: 4,
        encode: encode_int::<u32>,
        decode: decode_num::<u32>,
    },
    BaseType {
        names: &["DATE_AND_TIME", "DATE"],
        size: 4,
        encode: encode_date,
        decode: decode_date,
    },
    BaseType {
        names: &["REAL"],
        size: 4,
        encode: encode_real,
        decode: decode_num::<f32>,
    },
    BaseType {
        names: &["LREAL"],
        size: 8,
        encode: encode_lreal,
        decode: decode_num::<f64>,
    },
    BaseType {
        names: &["LWORD", "ULINT", "LTIME"],
        size: 8,
        encode: encode_int::<u64>,
        decode: decode_num::<u64>,
    },
    BaseType {
        names: &["LINT"],
        size: 8,
        encode: encode_int::<i64>,
        decode: decode_num::<i64>,
    },
];
