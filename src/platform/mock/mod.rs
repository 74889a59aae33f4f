//! Mock driver implementations for testing
//!
//! This module provides mock implementations of the driver contracts that can
//! be used for unit testing without real hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```ignore
//! use wei_hal::hal::gpio::GpioPort;
//! use wei_hal::platform::mock::MockPinDriver;
//! use wei_hal::platform::{Direction, Level, PinId};
//!
//! let driver = MockPinDriver::new();
//! let mut led = GpioPort::init(driver.clone(), PinId::LED_GREEN, Direction::Output, Level::Low)?;
//! led.set_level(Level::High)?;
//! assert_eq!(driver.level(PinId::LED_GREEN), Some(Level::High));
//! # Ok::<(), wei_hal::platform::GpioError>(())
//! ```

#![cfg(any(test, feature = "mock"))]

mod gpio;

pub use gpio::{DriverCall, MockPinDriver};
