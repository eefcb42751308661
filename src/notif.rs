//! Constants for ADS notifications.

use strum::{Display, EnumIter, EnumString, FromRepr, IntoStaticStr};

/// When notifications should be generated.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(Display, EnumIter, EnumString, FromRepr, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum TransmissionMode {
    /// No transmission.
    None = 0,
    ClientCycle = 1,
    ClientOnChange = 2,
    /// Notify each server cycle.
    Cyclic = 3,
    /// Notify when the content changes.
    OnChange = 4,
    /// Notify each cycle of the task the variable belongs to.
    CyclicInContext = 5,
    /// Notify on change, checked in the task the variable belongs to.
    OnChangeInContext = 6,
}

impl_constant!(TransmissionMode: u32);
