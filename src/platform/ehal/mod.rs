//! embedded-hal backed pin driver
//!
//! Lets any HAL that implements the `embedded-hal` 1.0 digital traits stand
//! in for the vendor pin driver.

mod gpio;

pub use gpio::EhalPinDriver;
