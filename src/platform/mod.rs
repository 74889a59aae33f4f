//! Platform abstraction layer
//!
//! This module defines the contract the vendor pin driver must satisfy and
//! the driver implementations shipped with the crate. All register-level
//! access stays behind [`PinDriver`].

pub mod ehal;
pub mod error;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{GpioError, Result};
pub use traits::{Direction, DriverStatus, GpioConfig, InvalidLevel, Level, PinDriver, PinId};
