//! Hardware abstraction layer
//!
//! Board-level wrappers built on the driver contracts in [`crate::platform`].

pub mod gpio;

pub use gpio::GpioPort;
