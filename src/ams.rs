//! AMS-level constants: header lengths, AMS/TCP commands and router states.

use strum::{Display, EnumIter, EnumString, FromRepr, IntoStaticStr};

/// Length of the AMS/TCP header (reserved u16 + length u32).
pub const AMS_TCP_HEADER_LENGTH: usize = 6;
/// Length of the AMS header following the AMS/TCP header.
pub const AMS_HEADER_LENGTH: usize = 32;
/// Length of an AMS NetID.
pub const AMS_NET_ID_LENGTH: usize = 6;
/// Length of an ADS index group.
pub const ADS_INDEX_GROUP_LENGTH: usize = 4;
/// Length of an ADS index offset.
pub const ADS_INDEX_OFFSET_LENGTH: usize = 4;
/// Largest invoke ID before it wraps around.
pub const ADS_INVOKE_ID_MAX_VALUE: u32 = u32::MAX;

/// The command in the first two bytes of the AMS/TCP header.
///
/// Exactly one of these is set per frame.
#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(Display, EnumIter, EnumString, FromRepr, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum AmsHeaderFlag {
    /// The frame carries an ADS command.
    #[strum(serialize = "AMS_TCP_PORT_AMS_CMD")]
    AmsCmd = 0x0000,
    /// Close a port opened with the router.
    #[strum(serialize = "AMS_TCP_PORT_CLOSE")]
    PortClose = 0x0001,
    /// Open a port with the router.
    #[strum(serialize = "AMS_TCP_PORT_CONNECT")]
    PortConnect = 0x1000,
    /// Note from the router (router state changed).
    #[strum(serialize = "AMS_TCP_PORT_ROUTER_NOTE")]
    RouterNote = 0x1001,
    /// Request the local NetID.
    #[strum(serialize = "GET_LOCAL_NETID")]
    GetLocalNetId = 0x1002,
}

/// State of an AMS router, as sent in router notes.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(Display, EnumIter, EnumString, FromRepr, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum RouterState {
    Stop = 0,
    Start = 1,
    Removed = 2,
}

impl_constant!(AmsHeaderFlag: u16, RouterState: u32);
