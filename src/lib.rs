#![cfg_attr(not(test), no_std)]

//! wei_hal - Board support for the WE-I vision/ML development board
//!
//! This library provides a GPIO wrapper over an injected vendor pin driver,
//! and the evaluation harness that runs a quantized letter classifier over
//! bundled test samples.

#[cfg(all(feature = "mock", not(test)))]
extern crate std;

// Logging infrastructure
pub mod core;

// Driver contracts and driver implementations
pub mod platform;

// Hardware abstraction built on the driver contracts
pub mod hal;

// Classifier evaluation harness
pub mod inference;
