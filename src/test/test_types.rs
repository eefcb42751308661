// Tests for the primitive type codec.

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;

use crate::types::{self, decode, encode, find, is_known_type, Settings, BASE_TYPES};
use crate::{Error, Value};

fn enc(name: &str, value: Value) -> Vec<u8> {
    encode(&Settings::raw(), name, &value, None).unwrap().into_vec()
}

fn dec(name: &str, data: &[u8]) -> Value {
    decode(&Settings::raw(), name, data).unwrap()
}

#[test]
fn test_concrete() {
    assert_eq!(enc("INT", Value::I16(-1)), [0xFF, 0xFF]);
    assert_eq!(dec("INT", &[0xFF, 0xFF]), Value::I16(-1));
    assert_eq!(enc("BOOL", Value::Bool(true)), [1]);
    assert_eq!(enc("DWORD", Value::U32(256)), [0, 1, 0, 0]);
    assert_eq!(enc("LINT", Value::I64(-2)), [0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
    assert_eq!(enc("REAL", Value::F32(1.5)), [0, 0, 0xC0, 0x3F]);
    assert_eq!(enc("LREAL", Value::F64(-2.0)), [0, 0, 0, 0, 0, 0, 0, 0xC0]);
    assert_eq!(enc("SINT", Value::I8(-128)), [0x80]);
}

#[test]
fn test_bool() {
    assert_eq!(enc("BOOL", Value::Bool(false)), [0]);
    assert_eq!(enc("BOOL", Value::I32(1)), [1]);
    assert_eq!(enc("BOOL", Value::F64(1.0)), [1]);
    assert_eq!(enc("BOOL", Value::I32(2)), [0]);
    assert_eq!(dec("BOOL", &[1]), Value::Bool(true));
    assert_eq!(dec("BOOL", &[0]), Value::Bool(false));
    assert_eq!(dec("BOOL", &[2]), Value::Bool(false));
}

#[test]
fn test_unsigned_decode() {
    assert_eq!(dec("UINT", &[0xFF, 0xFF]), Value::U16(u16::MAX));
    assert_eq!(dec("WORD", &[0x34, 0x12]), Value::U16(0x1234));
    assert_eq!(dec("LWORD", &[0xFF; 8]), Value::U64(u64::MAX));
    assert_eq!(dec("LINT", &[0xFF; 8]), Value::I64(-1));
    assert_eq!(dec("TIME", &[0x10, 0x27, 0, 0]), Value::U32(10000));
}

#[test]
fn test_coercion() {
    // any integer variant that fits is accepted
    assert_eq!(enc("BYTE", Value::I32(255)), [0xFF]);
    assert_eq!(enc("LREAL", Value::I32(3)), enc("LREAL", Value::F64(3.0)));
    assert_eq!(enc("UDINT", Value::Bool(true)), [1, 0, 0, 0]);

    let settings = Settings::raw();
    assert_eq!(encode(&settings, "USINT", &Value::U16(256), None),
               Err(Error::InvalidValue("BYTE", "256".into())));
    assert!(matches!(encode(&settings, "UINT", &Value::I16(-1), None),
                     Err(Error::InvalidValue("UINT", _))));
    assert!(matches!(encode(&settings, "DINT", &Value::F32(1.0), None),
                     Err(Error::InvalidValue("DINT", _))));

    // REAL rejects values it can only store as infinity
    assert!(matches!(encode(&settings, "REAL", &Value::F64(1e300), None),
                     Err(Error::InvalidValue("REAL", _))));
    assert!(matches!(encode(&settings, "REAL", &Value::F64(-1e39), None),
                     Err(Error::InvalidValue("REAL", _))));
    assert_eq!(enc("REAL", Value::F64(f64::INFINITY)), f32::INFINITY.to_le_bytes());
    assert_eq!(enc("REAL", Value::F64(f64::from(f32::MAX))), f32::MAX.to_le_bytes());
}

#[test]
fn test_all_types() {
    let values = [
        ("BOOL", Value::Bool(true)),
        ("BYTE", Value::U8(200)),
        ("SINT", Value::I8(-100)),
        ("UINT", Value::U16(60000)),
        ("INT", Value::I16(-30000)),
        ("DINT", Value::I32(-2_000_000_000)),
        ("UDINT", Value::U32(4_000_000_000)),
        ("DATE_AND_TIME", Value::U32(1_577_836_800)),
        ("REAL", Value::F32(-0.25)),
        ("LREAL", Value::F64(1e-300)),
        ("LWORD", Value::U64(u64::MAX - 1)),
        ("LINT", Value::I64(i64::MIN)),
    ];
    assert_eq!(values.len(), BASE_TYPES.len());
    for (name, value) in values {
        let ty = find(name).unwrap();
        let bytes = enc(name, value);
        assert_eq!(bytes.len(), ty.size());
        assert_eq!(dec(name, &bytes), value, "{}", name);
    }
}

#[test]
fn test_find() {
    assert_eq!(find("INT").unwrap().name(), "INT");
    assert_eq!(find("DINT").unwrap().name(), "DINT");
    assert_eq!(find(" uint\t").unwrap().name(), "UINT");
    assert_eq!(find("word").unwrap().name(), "UINT");
    assert_eq!(find("usint").unwrap().name(), "BYTE");
    assert_eq!(find("Time_Of_Day").unwrap().name(), "UDINT");
    assert_eq!(find("DATE").unwrap().name(), "DATE_AND_TIME");
    assert_eq!(find("LTIME").unwrap().name(), "LWORD");

    // only whole names match, never parts of them
    assert!(find("IN").is_none());
    assert!(find("NT").is_none());
    assert!(find("TIME_OF").is_none());
    assert!(find("INTEGER").is_none());
    assert!(find("").is_none());
    assert!(find("STRING(80)").is_none());

    for ty in BASE_TYPES {
        for alias in ty.aliases() {
            assert!(std::ptr::eq(find(alias).unwrap(), ty));
            assert!(std::ptr::eq(find(&alias.to_lowercase()).unwrap(), ty));
        }
    }
}

#[test]
fn test_known_type() {
    assert!(is_known_type("LREAL"));
    assert!(is_known_type(" String(80) "));
    assert!(is_known_type("string(80)"));
    assert!(is_known_type("WSTRING(10)"));
    assert!(!is_known_type("STRING"));
    assert!(!is_known_type("FOO"));
    // known, but sized by the caller
    assert_eq!(decode(&Settings::raw(), "STRING(80)", &[0; 81]),
               Err(Error::TypeNotFound("STRING(80)".into())));
}

#[test]
fn test_not_found() {
    let settings = Settings::default();
    assert_eq!(encode(&settings, "FOO", &Value::U8(1), None),
               Err(Error::TypeNotFound("FOO".into())));
    assert_eq!(decode(&settings, "BAR", &[0; 8]), Err(Error::TypeNotFound("BAR".into())));
}

#[test]
fn test_caller_buffer() {
    let mut buf = [0xAA; 6];
    {
        let encoded = encode(&Settings::raw(), "DINT", &Value::I32(0x0102_0304),
                             Some(&mut buf[..])).unwrap();
        assert!(!encoded.is_owned());
        assert_eq!(encoded.len(), 4);
        assert_eq!(encoded.as_bytes(), [4, 3, 2, 1]);
    }
    assert_eq!(buf, [4, 3, 2, 1, 0xAA, 0xAA]);

    let encoded = encode(&Settings::raw(), "WORD", &Value::U16(7), None).unwrap();
    assert!(encoded.is_owned());
    assert_eq!(encoded.into_vec(), [7, 0]);

    // decoding only looks at the first bytes
    assert_eq!(dec("INT", &[1, 0, 0xFF, 0xFF]), Value::I16(1));
}

#[test]
fn test_buffer_too_small() {
    let settings = Settings::raw();
    let mut buf = [0; 4];
    assert_eq!(encode(&settings, "LREAL", &Value::F64(1.0), Some(&mut buf[..])),
               Err(Error::BufferTooSmall("LREAL", 4, 8)));
    assert_eq!(buf, [0; 4]);
    assert_eq!(decode(&settings, "ULINT", &[0; 7]), Err(Error::BufferTooSmall("LWORD", 7, 8)));
    assert_eq!(decode(&settings, "BOOL", &[]), Err(Error::BufferTooSmall("BOOL", 0, 1)));
}

#[test]
fn test_dates() {
    let native = Settings::default();
    let raw = Settings::raw();
    assert!(native.convert_dates_to_native);
    assert!(!raw.convert_dates_to_native);

    let date = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    let bytes = 1_577_836_800u32.to_le_bytes();

    let encoded = encode(&native, "DATE_AND_TIME", &Value::Date(date), None).unwrap();
    assert_eq!(encoded.as_bytes(), bytes);
    assert_eq!(decode(&native, "DATE", &bytes), Ok(Value::Date(date)));
    assert_eq!(decode(&raw, "DATE", &bytes), Ok(Value::U32(1_577_836_800)));

    // raw second counts are accepted either way
    assert_eq!(encode(&native, "DATE", &Value::U32(1_577_836_800), None).unwrap().as_bytes(),
               bytes);
    // sub-second parts are dropped
    let later = DateTime::from_timestamp(1_577_836_800, 500_000_000).unwrap();
    assert_eq!(encode(&native, "DATE", &Value::Date(later), None).unwrap().as_bytes(), bytes);

    // dates need conversion enabled, and must fit into 32 bits
    assert!(matches!(encode(&raw, "DATE", &Value::Date(date), None),
                     Err(Error::InvalidValue("DATE_AND_TIME", _))));
    let early = Utc.with_ymd_and_hms(1960, 1, 1, 0, 0, 0).unwrap();
    assert!(matches!(encode(&native, "DATE", &Value::Date(early), None),
                     Err(Error::InvalidValue("DATE_AND_TIME", _))));

    // other types ignore the setting
    assert_eq!(decode(&native, "UDINT", &bytes), Ok(Value::U32(1_577_836_800)));
}

proptest! {
    #[test]
    fn roundtrip_dint(v: i32) {
        prop_assert_eq!(dec("DINT", &enc("DINT", Value::I32(v))), Value::I32(v));
    }

    #[test]
    fn roundtrip_lint(v: i64) {
        prop_assert_eq!(dec("LINT", &enc("LINT", Value::I64(v))), Value::I64(v));
    }

    #[test]
    fn roundtrip_ulint(v: u64) {
        prop_assert_eq!(dec("ULINT", &enc("ULINT", Value::U64(v))), Value::U64(v));
    }

    #[test]
    fn roundtrip_real(v in -1e30f32..1e30f32) {
        prop_assert_eq!(dec("REAL", &enc("REAL", Value::F32(v))), Value::F32(v));
    }

    #[test]
    fn roundtrip_lreal(v in -1e300f64..1e300f64) {
        prop_assert_eq!(dec("LREAL", &enc("LREAL", Value::F64(v))), Value::F64(v));
    }

    #[test]
    fn roundtrip_date(secs: u32) {
        let settings = Settings::default();
        let date = DateTime::from_timestamp(i64::from(secs), 0).unwrap();
        let encoded = types::encode(&settings, "DATE", &Value::Date(date), None).unwrap();
        prop_assert_eq!(encoded.as_bytes(), secs.to_le_bytes());
        prop_assert_eq!(types::decode(&settings, "DATE", encoded.as_bytes()).unwrap(),
                        Value::Date(date));
    }
}
