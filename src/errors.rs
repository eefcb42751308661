//! Defines error types and the table of ADS error codes.

use crate::table::UNKNOWN;

/// Result alias for `ads_proto::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// A collection of different errors that can happen when encoding or
/// decoding values, or when checking ADS result codes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The primitive type name is not known to the codec.
    #[error("primitive type {0:?} not found")]
    TypeNotFound(String),

    /// The buffer is shorter than the type's size (type, buffer length, size).
    #[error("{0}: buffer of {1} bytes is too small, need {2}")]
    BufferTooSmall(&'static str, usize, usize),

    /// The value cannot be represented by the type (type, value).
    #[error("{0}: cannot represent value {1}")]
    InvalidValue(&'static str, String),

    /// The ADS server responded with an error code.
    #[error("{0}: {1} ({2:#x})")]
    Ads(&'static str, &'static str, u32),
}

/// The list of known ADS error codes from
/// [here](https://infosys.beckhoff.com/content/1033/tc3_ads_intro_howto/374277003.html?id=2736996179007627436),
/// sorted by code.
pub const ADS_ERRORS: &[(u32, &str)] = &[
    (0x000, "No error"),
    (0x001, "Internal error"),
    (0x002, "No Rtime"),
    (0x003, "Allocation locked memory error"),
    (0x004, "Insert mailbox error"),
    (0x005, "Wrong receive HMSG"),
    (0x006, "Target port not found"),
    (0x007, "Target machine not found"),
    (0x008, "Unknown command ID"),
    (0x009, "Bad task ID"),
    (0x00A, "No IO"),
    (0x00B, "Unknown ADS command"),
    (0x00C, "Win 32 error"),
    (0x00D, "Port not connected"),
    (0x00E, "Invalid ADS length"),
    (0x00F, "Invalid AMS Net ID"),
    (0x010, "Low Installation level"),
    (0x011, "No debug available"),
    (0x012, "Port disabled"),
    (0x013, "Port already connected"),
    (0x014, "ADS Sync Win32 error"),
    (0x015, "ADS Sync Timeout"),
    (0x016, "ADS Sync AMS error"),
    (0x017, "ADS Sync no index map"),
    (0x018, "Invalid ADS port"),
    (0x019, "No memory"),
    (0x01A, "TCP send error"),
    (0x01B, "Host unreachable"),
    (0x01C, "Invalid AMS fragment"),
    (0x500, "No locked memory can be allocated"),
    (0x501, "The size of the router memory could not be changed"),
    (0x502, "The mailbox has reached the maximum number of possible messages. The current sent message was rejected"),
    (0x503, "The mailbox has reached the maximum number of possible messages."),
    (0x504, "Unknown port type"),
    (0x505, "Router is not initialized"),
    (0x506, "The desired port number is already assigned"),
    (0x507, "Port not registered"),
    (0x508, "The maximum number of Ports reached"),
    (0x509, "Invalid port"),
    (0x50A, "TwinCAT Router not active"),
    (0x700, "General device error"),
    (0x701, "Service is not supported by server"),
    (0x702, "Invalid index group"),
    (0x703, "Invalid index offset"),
    (0x704, "Reading/writing not permitted"),
    (0x705, "Parameter size not correct"),
    (0x706, "Invalid parameter value(s)"),
    (0x707, "Device is not in a ready state"),
    (0x708, "Device is busy"),
    (0x709, "Invalid context (must be in Windows)"),
    (0x70A, "Out of memory"),
    (0x70B, "Invalid parameter value(s)"),
    (0x70C, "Not found (files, ...)"),
    (0x70D, "Syntax error in command or file"),
    (0x70E, "Objects do not match"),
    (0x70F, "Object already exists"),
    (0x710, "Symbol not found"),
    (0x711, "Symbol version invalid"),
    (0x712, "Server is in invalid state"),
    (0x713, "AdsTransMode not supported"),
    (0x714, "Notification handle is invalid"),
    (0x715, "Notification client not registered"),
    (0x716, "No more notification handles"),
    (0x717, "Size for watch too big"),
    (0x718, "Device not initialized"),
    (0x719, "Device has a timeout"),
    (0x71A, "Query interface failed"),
    (0x71B, "Wrong interface required"),
    (0x71C, "Class ID is invalid"),
    (0x71D, "Object ID is invalid"),
    (0x71E, "Request is pending"),
    (0x71F, "Request is aborted"),
    (0x720, "Signal warning"),
    (0x721, "Invalid array index"),
    (0x722, "Symbol not active"),
    (0x723, "Access denied"),
    (0x724, "Missing license"),
    (0x725, "License expired"),
    (0x726, "License exceeded"),
    (0x727, "License invalid"),
    (0x728, "License invalid system id"),
    (0x729, "License not time limited"),
    (0x72A, "License issue time in the future"),
    (0x72B, "License time period to long"),
    (0x72C, "Exception occured during system start"),
    (0x72D, "License file read twice"),
    (0x72E, "Invalid signature"),
    (0x72F, "Public key certificate"),
    (0x740, "Error class <client error>"),
    (0x741, "Invalid parameter at service"),
    (0x742, "Polling list is empty"),
    (0x743, "Var connection already in use"),
    (0x744, "Invoke ID in use"),
    (0x745, "Timeout elapsed"),
    (0x746, "Error in win32 subsystem"),
    (0x747, "Invalid client timeout value"),
    (0x748, "Ads-port not opened"),
    (0x750, "Internal error in ads sync"),
    (0x751, "Hash table overflow"),
    (0x752, "Key not found in hash"),
    (0x753, "No more symbols in cache"),
    (0x754, "Invalid response received"),
    (0x755, "Sync port is locked"),
    (0x1000, "Internal fatal error in the TwinCAT real-time system"),
    (0x1001, "Timer value not vaild"),
    (0x1002, "Task pointer has the invalid value ZERO"),
    (0x1003, "Task stack pointer has the invalid value ZERO"),
    (0x1004, "The demand task priority is already assigned"),
    (0x1005, "No more free TCB (Task Control Block) available. Maximum number of TCBs is 64"),
    (0x1006, "No more free semaphores available. Maximum number of semaphores is 64"),
    (0x1007, "No more free queue available. Maximum number of queue is 64"),
    (0x100D, "An external synchronization interrupt is already applied"),
    (0x100E, "No external synchronization interrupt applied"),
    (0x100F, "The apply of the external synchronization interrupt failed"),
    (0x1010, "Call of a service function in the wrong context"),
    (0x1017, "Intel VT-x extension is not supported"),
    (0x1018, "Intel VT-x extension is not enabled in system BIOS"),
    (0x1019, "Missing function in Intel VT-x extension"),
    (0x101A, "Enabling Intel VT-x fails"),
];

/// Return the message for an ADS error code, or `UNKNOWN`.
pub fn error_message(code: u32) -> &'static str {
    match ADS_ERRORS.binary_search_by_key(&code, |e| e.0) {
        Ok(idx) => ADS_ERRORS[idx].1,
        Err(_) => UNKNOWN,
    }
}

/// Return an `Error` corresponding to the given ADS result code.
///
/// A result code of zero means success and returns `Ok(())`.
pub fn ads_error(action: &'static str, err: u32) -> Result<()> {
    if err == 0 {
        return Ok(());
    }
    Err(Error::Ads(action, error_message(err), err))
}
