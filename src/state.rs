//! State flags of the AMS header, and the ADS state of a device.

use std::fmt;

use itertools::Itertools;
use strum::{Display, EnumIter, EnumString, FromRepr, IntoStaticStr};

ads_flags! {
    /// The state flags field of the AMS header.
    ///
    /// Several bits can be set at once, e.g. `RESPONSE | ADS_COMMAND` for a
    /// regular reply.
    pub struct StateFlags: u16 {
        /// The frame is a response (AMSCMDSF_RESPONSE).
        const RESPONSE = 0x0001 => "Response";
        /// No response expected (AMSCMDSF_NORETURN).
        const NO_RETURN = 0x0002 => "NoReturn";
        /// ADS command.
        const ADS_COMMAND = 0x0004 => "AdsCommand";
        /// Internally generated command (AMSCMDSF_SYSCMD).
        const SYS_COMMAND = 0x0008 => "SysCommand";
        /// High priority (AMSCMDSF_HIGHPRIO).
        const HIGH_PRIORITY = 0x0010 => "HighPriority";
        /// Data length grew by an 8 byte timestamp (AMSCMDSF_TIMESTAMPADDED).
        const TIMESTAMP_ADDED = 0x0020 => "TimeStampAdded";
        /// Sent over UDP instead of TCP (AMSCMDSF_UDP).
        const UDP = 0x0040 => "Udp";
        /// Command during the init phase of TwinCAT (AMSCMDSF_INITCMD).
        const INIT_CMD = 0x0080 => "InitCmd";
        /// Broadcast (AMSCMDSF_BROADCAST).
        const BROADCAST = 0x8000 => "Broadcast";
    }
}

impl StateFlags {
    /// Flags of an outgoing ADS request.
    pub const REQUEST: StateFlags = StateFlags::ADS_COMMAND;

    /// Check if the response bit is set.
    pub fn is_response(self) -> bool {
        self.contains(Self::RESPONSE)
    }

    /// Check if the UDP bit is set.
    pub fn is_udp(self) -> bool {
        self.contains(Self::UDP)
    }

    /// Like `names`, with `Tcp` appended if the UDP bit is missing and
    /// `Request` appended if the response bit is missing.
    pub fn describe(self) -> Vec<&'static str> {
        let mut names = self.names();
        if !self.is_udp() {
            names.push("Tcp");
        }
        if !self.is_response() {
            names.push("Request");
        }
        names
    }
}

impl fmt::Display for StateFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe().iter().format(", "))
    }
}

/// The ADS state of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Display, EnumIter, EnumString, FromRepr, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
#[allow(missing_docs)]
#[repr(u16)]
pub enum AdsState {
    Invalid = 0,
    Idle = 1,
    Reset = 2,
    Initialize = 3,
    Start = 4,
    Run = 5,
    Stop = 6,
    SaveConfig = 7,
    LoadConfig = 8,
    PowerFailure = 9,
    PowerGood = 10,
    Error = 11,
    Shutdown = 12,
    Suspend = 13,
    Resume = 14,
    Config = 15,
    Reconfig = 16,
    Stopping = 17,
    Incompatible = 18,
    Exception = 19,
}

impl_constant!(AdsState: u16);
