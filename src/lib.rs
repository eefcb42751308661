//! Constants and primitive value codec for the ADS protocol
//!
//! # Introduction
//!
//! ADS is the native protocol used by programmable logic controllers (PLCs) and
//! the TwinCAT automation system produced by [Beckhoff GmbH](https://www.beckhoff.com/).
//!
//! The [specification](https://infosys.beckhoff.de/content/1031/tc3_adscommon/html/tcadscommon_introads.htm)
//! can be found on their Information System pages.
//!
//! This crate contains the parts every client, server or protocol analyzer
//! needs: the numeric constants of the AMS and ADS headers and payloads, with
//! lookups from values back to their names, and the binary layout of the PLC
//! primitive types.  It does no I/O.
//!
//! ```
//! use ads_proto::{Command, Constant, StateFlags};
//!
//! assert_eq!(Command::lookup(2), "Read");
//! assert_eq!(Command::lookup(200), "UNKNOWN");
//! assert_eq!(StateFlags::from_bits(5).to_string(), "Response, AdsCommand, Tcp");
//! ```

#[macro_use]
pub mod table;
pub mod ams;
pub mod command;
pub mod state;
pub mod index;
pub mod symbol;
pub mod notif;
pub mod errors;
pub mod value;
pub mod types;

#[cfg(test)]
mod test;

pub use ams::{AmsHeaderFlag, RouterState};
pub use command::Command;
pub use errors::{Error, Result};
pub use index::IndexGroup;
pub use notif::TransmissionMode;
pub use state::{AdsState, StateFlags};
pub use symbol::{AdsDataType, DataTypeFlags, SymbolFlags};
pub use table::{Constant, UNKNOWN};
pub use types::{BaseType, Encoded, Settings};
pub use value::Value;

pub const ADS_PORT: u16 = 0xBF02;
pub const ADS_UDP_PORT: u16 = 0xBF03;
