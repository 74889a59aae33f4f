//! embedded-hal GPIO driver
//!
//! This module adapts pins implementing `embedded_hal::digital::{OutputPin, InputPin}`
//! to the [`PinDriver`] contract.

use embedded_hal::digital::{InputPin, OutputPin, PinState};
use heapless::Vec;

use crate::platform::traits::{Direction, DriverStatus, GpioConfig, Level, PinDriver, PinId};

struct BoundPin<P> {
    id: PinId,
    pin: P,
    // None until the pin has been initialized
    direction: Option<Direction>,
}

/// Pin driver over `embedded-hal` digital pins
///
/// Holds up to `N` pins, each bound to a [`PinId`]. The pin type must support
/// both driving and sampling (flex/IO pins); direction is tracked here since
/// the digital traits have no notion of it.
///
/// # Behaviour
///
/// - `init` on an unbound pin fails; an output is driven to the initial level
/// - `set` fails on unbound or uninitialized pins and on pins initialized as
///   inputs
/// - `get` fails on unbound or uninitialized pins
/// - any error from the underlying pin maps to [`DriverStatus::ERROR`]
pub struct EhalPinDriver<P, const N: usize> {
    pins: Vec<BoundPin<P>, N>,
}

impl<P, const N: usize> EhalPinDriver<P, N>
where
    P: OutputPin + InputPin,
{
    /// Create a driver with no pins bound
    pub const fn new() -> Self {
        Self { pins: Vec::new() }
    }

    /// Bind a HAL pin to `id`
    ///
    /// # Errors
    ///
    /// Hands the pin back if `id` is already bound or all `N` slots are used.
    pub fn bind(&mut self, id: PinId, pin: P) -> Result<(), P> {
        if self.find(id).is_some() {
            crate::log_warn!("{} already bound", id);
            return Err(pin);
        }
        self.pins
            .push(BoundPin {
                id,
                pin,
                direction: None,
            })
            .map_err(|bound| bound.pin)
    }

    /// Unbind `id` and hand back its HAL pin
    ///
    /// The line is left in whatever state it was last driven to.
    pub fn unbind(&mut self, id: PinId) -> Option<P> {
        let index = self.pins.iter().position(|bound| bound.id == id)?;
        Some(self.pins.swap_remove(index).pin)
    }

    /// Borrow the HAL pin bound to `id`
    pub fn pin(&self, id: PinId) -> Option<&P> {
        self.pins.iter().find(|bound| bound.id == id).map(|bound| &bound.pin)
    }

    /// Number of bound pins
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    /// Returns `true` if no pin is bound
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    fn find(&mut self, id: PinId) -> Option<&mut BoundPin<P>> {
        self.pins.iter_mut().find(|bound| bound.id == id)
    }
}

impl<P, const N: usize> Default for EhalPinDriver<P, N>
where
    P: OutputPin + InputPin,
{
    fn default() -> Self {
        Self::new()
    }
}

fn drive<P: OutputPin>(pin: &mut P, level: Level) -> DriverStatus {
    match pin.set_state(PinState::from(level.is_high())) {
        Ok(()) => DriverStatus::PASS,
        Err(_) => DriverStatus::ERROR,
    }
}

impl<P, const N: usize> PinDriver for EhalPinDriver<P, N>
where
    P: OutputPin + InputPin,
{
    fn init(&mut self, config: &GpioConfig) -> DriverStatus {
        let Some(bound) = self.find(config.pin) else {
            crate::log_warn!("init: {} is not bound", config.pin);
            return DriverStatus::ERROR;
        };

        if config.direction == Direction::Output {
            let status = drive(&mut bound.pin, config.level);
            if !status.is_pass() {
                crate::log_debug!("init: driving {} failed", config.pin);
                return status;
            }
        }

        bound.direction = Some(config.direction);
        DriverStatus::PASS
    }

    fn set(&mut self, config: &GpioConfig) -> DriverStatus {
        let Some(bound) = self.find(config.pin) else {
            crate::log_warn!("set: {} is not bound", config.pin);
            return DriverStatus::ERROR;
        };

        match bound.direction {
            Some(Direction::Output) => drive(&mut bound.pin, config.level),
            Some(Direction::Input) => {
                crate::log_debug!("set: {} is configured as input", config.pin);
                DriverStatus::ERROR
            }
            None => {
                crate::log_debug!("set: {} is not initialized", config.pin);
                DriverStatus::ERROR
            }
        }
    }

    fn get(&mut self, config: &mut GpioConfig) -> DriverStatus {
        let Some(bound) = self.find(config.pin) else {
            crate::log_warn!("get: {} is not bound", config.pin);
            return DriverStatus::ERROR;
        };

        if bound.direction.is_none() {
            crate::log_debug!("get: {} is not initialized", config.pin);
            return DriverStatus::ERROR;
        }

        match bound.pin.is_high() {
            Ok(high) => {
                config.level = Level::from(high);
                DriverStatus::PASS
            }
            Err(_) => DriverStatus::ERROR,
        }
    }
}
