//! Platform abstraction traits
//!
//! This module defines the traits that driver implementations must provide.

pub mod gpio;

// Re-export trait interfaces
pub use gpio::{Direction, DriverStatus, GpioConfig, InvalidLevel, Level, PinDriver, PinId};
