//! Reserved index groups as defined
//! [here](https://infosys.beckhoff.com/content/1033/tc3_ads_intro/117241867.html?id=1944752650545554679)
//! and [here](https://github.com/Beckhoff/ADS/blob/master/AdsLib/standalone/AdsDef.h).
//!
//! The sum command groups (`SumCommand*`) carry a list of sub-requests in
//! their data; see the Beckhoff docs for the format.

use strum::{Display, EnumIter, EnumString, FromRepr, IntoStaticStr};

/// A reserved index group.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(Display, EnumIter, EnumString, FromRepr, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum IndexGroup {
    /// PLC: Read/write process image of inputs.
    PlcRWIB = 0x4000,
    /// PLC: Read/write process image of outputs.
    PlcRWOB = 0x4010,
    /// PLC: Read/write PLC memory (%M fields).
    PlcRWMB = 0x4020,
    /// PLC: Read/write PLC memory as bits (%MX fields).  Offset is (byte*8 + bit) address.
    PlcRWMX = 0x4021,
    /// PLC: Read byte length of %M area (only offset 0).
    PlcSizeM = 0x4025,
    /// PLC: Read/write retain data area.
    PlcRWRB = 0x4030,
    /// PLC: Read byte length of the retain data area (only offset 0).
    PlcSizeRB = 0x4035,
    /// PLC: Read/write data area.
    PlcRWDB = 0x4040,
    /// PLC: Read byte length of data area (only offset 0).
    PlcSizeDB = 0x4045,

    SymbolTable = 0xF000,
    SymbolName = 0xF001,
    SymbolValue = 0xF002,
    /// Get u32 handle to the name in the write data.  Index offset is 0.
    SymbolHandleByName = 0xF003,
    SymbolValueByName = 0xF004,
    /// Read/write data for a symbol by handle.  The handle is the index offset.
    SymbolValueByHandle = 0xF005,
    /// Release a symbol handle.  Index offset is 0.
    SymbolReleaseHandle = 0xF006,
    SymbolInfoByName = 0xF007,
    SymbolVersion = 0xF008,
    SymbolInfoByNameEx = 0xF009,
    SymbolDownload = 0xF00A,
    SymbolUpload = 0xF00B,
    SymbolUploadInfo = 0xF00C,
    SymbolDownload2 = 0xF00D,
    SymbolDataTypeUpload = 0xF00E,
    /// 24 bytes of upload info.
    SymbolUploadInfo2 = 0xF00F,
    /// Notification of named handle.
    SymbolNote = 0xF010,
    DataDataTypeInfoByNameEx = 0xF011,

    /// Read/write process image of physical inputs (%I fields).
    IOImageRWIB = 0xF020,
    /// Read/write process image of physical inputs as bits (%IX fields).
    IOImageRWIX = 0xF021,
    /// Read byte length of the physical inputs (only offset 0).
    IOImageSizeI = 0xF025,
    /// Read/write process image of physical outputs (%Q fields).
    IOImageRWOB = 0xF030,
    /// Read/write process image of physical outputs as bits (%QX fields).
    IOImageRWOX = 0xF031,
    /// Read byte length of the physical outputs (only offset 0).
    IOImageSizeO = 0xF035,
    /// Write inputs to zero.
    IOImageClearI = 0xF040,
    /// Write outputs to zero.
    IOImageClearO = 0xF050,
    IOImageRWIOB = 0xF060,

    /// Combine multiple index group/offset reads.
    SumCommandRead = 0xF080,
    /// Combine multiple index group/offset writes.
    SumCommandWrite = 0xF081,
    /// Combine multiple index group/offset write+reads.
    SumCommandReadWrite = 0xF082,
    /// W: {list of IGrp, IOffs, Length}
    /// R: {list of results, Length} followed by {list of data (expected lengths)}
    SumCommandReadEx = 0xF083,
    /// W: {list of IGrp, IOffs, Length}
    /// R: {list of results, Length} followed by {list of data (returned lengths)}
    SumCommandReadEx2 = 0xF084,
    /// W: {list of IGrp, IOffs, Attrib}
    /// R: {list of results, handles}
    SumCommandAddDevNote = 0xF085,
    /// W: {list of handles}
    /// R: {list of results}
    SumCommandDelDevNote = 0xF086,

    DeviceData = 0xF100,
}

impl IndexGroup {
    /// Check if this is one of the sum command groups.
    pub fn is_sum_command(self) -> bool {
        (IndexGroup::SumCommandRead as u32..=IndexGroup::SumCommandDelDevNote as u32)
            .contains(&(self as u32))
    }
}

impl_constant!(IndexGroup: u32);
