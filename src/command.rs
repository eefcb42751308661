//! ADS command IDs carried in the AMS header.

use strum::{Display, EnumIter, EnumString, FromRepr, IntoStaticStr};

/// An ADS protocol command.
// https://infosys.beckhoff.com/content/1033/tc3_ads_intro/115847307.html?id=7738940192708835096
#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(Display, EnumIter, EnumString, FromRepr, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum Command {
    /// Invalid or uninitialized command, also parsed from "None"
    #[strum(to_string = "Invalid", serialize = "None")]
    Invalid = 0,
    /// Return device info
    ReadDeviceInfo = 1,
    /// Read some data
    Read = 2,
    /// Write some data
    Write = 3,
    /// Read the ADS and device state
    ReadState = 4,
    /// Set the ADS and device state
    WriteControl = 5,
    /// Add a notification for a given index
    AddNotification = 6,
    /// Delete a notification
    DeleteNotification = 7,
    /// Change occurred in a given notification,
    /// can be sent by the PLC only
    Notification = 8,
    /// Write some data, then read back some data
    /// (used as a poor-man's function call)
    ReadWrite = 9,
}

impl Command {
    /// Alias of `Invalid` used by some runtimes for uninitialized commands.
    pub const NONE: Command = Command::Invalid;

    /// A short description of the action, used as error context.
    pub fn action(self) -> &'static str {
        match self {
            Command::Invalid => "invalid command",
            Command::ReadDeviceInfo => "get device info",
            Command::Read => "read data",
            Command::Write => "write data",
            Command::ReadWrite => "write and read data",
            Command::ReadState => "read state",
            Command::WriteControl => "write control",
            Command::AddNotification => "add notification",
            Command::DeleteNotification => "delete notification",
            Command::Notification => "notification",
        }
    }
}

impl_constant!(Command: u16);
