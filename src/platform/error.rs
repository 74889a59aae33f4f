//! Platform error types
//!
//! This module defines the error kinds surfaced by the GPIO wrapper.

use core::fmt;

use crate::platform::traits::DriverStatus;

/// Result type for GPIO operations
pub type Result<T> = core::result::Result<T, GpioError>;

/// GPIO errors, one kind per operation
///
/// Each variant carries the raw status the pin driver reported. Any status
/// other than [`DriverStatus::PASS`] is a failure; the code is diagnostic data
/// only and does not refine the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioError {
    /// Driver rejected the pin configuration (invalid pin, mux conflict,
    /// driver not started)
    HardwareInit(DriverStatus),
    /// Driver failed to apply a level (pin not initialized, bus error)
    HardwareWrite(DriverStatus),
    /// Driver failed to sample the pin
    HardwareRead(DriverStatus),
}

impl GpioError {
    /// Raw driver status behind this error
    pub fn status(&self) -> DriverStatus {
        match self {
            GpioError::HardwareInit(s)
            | GpioError::HardwareWrite(s)
            | GpioError::HardwareRead(s) => *s,
        }
    }
}

impl fmt::Display for GpioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpioError::HardwareInit(s) => write!(f, "GPIO init failed (driver status {})", s),
            GpioError::HardwareWrite(s) => write!(f, "GPIO write failed (driver status {})", s),
            GpioError::HardwareRead(s) => write!(f, "GPIO read failed (driver status {})", s),
        }
    }
}
