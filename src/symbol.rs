//! Flags and type tags found in symbol and data type descriptions.

use std::fmt;

use itertools::Itertools;
use strum::{Display, EnumIter, EnumString, FromRepr, IntoStaticStr};

ads_flags! {
    /// Flags of a symbol entry (ADSSYMBOLFLAG_*).
    pub struct SymbolFlags: u32 {
        const NONE = 0 => "None";
        const PERSISTENT = 0x0001 => "Persistent";
        const BIT_VALUE = 0x0002 => "BitValue";
        const REFERENCE_TO = 0x0004 => "ReferenceTo";
        const TYPE_GUID = 0x0008 => "TypeGuid";
        const TCOM_INTERFACE_PTR = 0x0010 => "TComInterfacePtr";
        const READ_ONLY = 0x0020 => "ReadOnly";
        const ITF_METHOD_ACCESS = 0x0040 => "ItfMethodAccess";
        const METHOD_DEREF = 0x0080 => "MethodDeref";
        /// Four bit context mask.
        const CONTEXT_MASK = 0x0F00 => "ContextMask";
        const ATTRIBUTES = 0x1000 => "Attributes";
        /// Symbol is static.
        const STATIC = 0x2000 => "Static";
        /// Persistent data is not restored after a cold reset.
        const INIT_ON_RESET = 0x4000 => "InitOnReset";
        /// Extended flags follow in the symbol entry.
        const EXTENDED_FLAGS = 0x8000 => "ExtendedFlags";
    }
}

ads_flags! {
    /// Flags of a data type entry (ADSDATATYPEFLAG_*).
    pub struct DataTypeFlags: u32 {
        const DATA_TYPE = 0x0000_0001 => "DataType";
        const DATA_ITEM = 0x0000_0002 => "DataItem";
        const REFERENCE_TO = 0x0000_0004 => "ReferenceTo";
        const METHOD_DEREF = 0x0000_0008 => "MethodDeref";
        const OVERSAMPLE = 0x0000_0010 => "Oversample";
        const BIT_VALUES = 0x0000_0020 => "BitValues";
        const PROP_ITEM = 0x0000_0040 => "PropItem";
        const TYPE_GUID = 0x0000_0080 => "TypeGuid";
        const PERSISTENT = 0x0000_0100 => "Persistent";
        const COPY_MASK = 0x0000_0200 => "CopyMask";
        const TCOM_INTERFACE_PTR = 0x0000_0400 => "TComInterfacePtr";
        const METHOD_INFOS = 0x0000_0800 => "MethodInfos";
        const ATTRIBUTES = 0x0000_1000 => "Attributes";
        const ENUM_INFOS = 0x0000_2000 => "EnumInfos";
        /// The data type is aligned.
        const ALIGNED = 0x0001_0000 => "Aligned";
        /// Data item is static, do not use its offset.
        const STATIC = 0x0002_0000 => "Static";
        /// "ContainsSpLevels" for data types, "HasSpLevels" for data items.
        const SP_LEVELS = 0x0004_0000 => "SpLevels";
        /// Do not restore persistent data.
        const IGNORE_PERSIST = 0x0008_0000 => "IgnorePersist";
        /// Array of any size; out of range access fails with "Invalid array index".
        const ANY_SIZE_ARRAY = 0x0010_0000 => "AnySizeArray";
        /// Data type used for persistent variables.
        const PERSISTENT_DATATYPE = 0x0020_0000 => "PersistantDatatype";
        /// Persistent data is not restored after a cold reset.
        const INIT_ON_RESULT = 0x0040_0000 => "InitOnResult";
        const NONE = 0 => "None";
    }
}

impl fmt::Display for SymbolFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names().iter().format(", "))
    }
}

impl fmt::Display for DataTypeFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names().iter().format(", "))
    }
}

/// The primitive category a PLC reports for a symbol or data type (ADST_*).
///
/// The values are not contiguous.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(Display, EnumIter, EnumString, FromRepr, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum AdsDataType {
    /// Empty type
    #[strum(serialize = "ADST_VOID")]
    Void = 0,
    #[strum(serialize = "ADST_INT16")]
    Int16 = 2,
    #[strum(serialize = "ADST_INT32")]
    Int32 = 3,
    #[strum(serialize = "ADST_REAL32")]
    Real32 = 4,
    #[strum(serialize = "ADST_REAL64")]
    Real64 = 5,
    #[strum(serialize = "ADST_INT8")]
    Int8 = 16,
    #[strum(serialize = "ADST_UINT8")]
    UInt8 = 17,
    #[strum(serialize = "ADST_UINT16")]
    UInt16 = 18,
    #[strum(serialize = "ADST_UINT32")]
    UInt32 = 19,
    #[strum(serialize = "ADST_INT64")]
    Int64 = 20,
    #[strum(serialize = "ADST_UINT64")]
    UInt64 = 21,
    #[strum(serialize = "ADST_STRING")]
    String = 30,
    #[strum(serialize = "ADST_WSTRING")]
    WString = 31,
    /// 80-bit extended float
    #[strum(serialize = "ADST_REAL80")]
    Real80 = 32,
    #[strum(serialize = "ADST_BIT")]
    Bit = 33,
    /// Internal only
    #[strum(serialize = "ADST_MAXTYPES")]
    MaxTypes = 34,
    /// Blob
    #[strum(serialize = "ADST_BIGTYPE")]
    BigType = 65,
}

impl AdsDataType {
    /// Return the fixed byte size of this type, if it has one.
    ///
    /// Strings, blobs and bits are sized by the symbol, not by the tag.
    pub fn size(self) -> Option<usize> {
        use AdsDataType::*;
        match self {
            Void => Some(0),
            Int8 | UInt8 => Some(1),
            Int16 | UInt16 => Some(2),
            Int32 | UInt32 | Real32 => Some(4),
            Int64 | UInt64 | Real64 => Some(8),
            Real80 => Some(10),
            String | WString | Bit | MaxTypes | BigType => None,
        }
    }

    /// Return the canonical primitive type name for use with the codec in
    /// [`types`](crate::types), if there is one.
    pub fn base_type_name(self) -> Option<&'static str> {
        use AdsDataType::*;
        Some(match self {
            Bit => "BOOL",
            Int8 => "SINT",
            UInt8 => "USINT",
            Int16 => "INT",
            UInt16 => "UINT",
            Int32 => "DINT",
            UInt32 => "UDINT",
            Int64 => "LINT",
            UInt64 => "ULINT",
            Real32 => "REAL",
            Real64 => "LREAL",
            Void | String | WString | Real80 | MaxTypes | BigType => return None,
        })
    }
}

impl_constant!(AdsDataType: u32);
