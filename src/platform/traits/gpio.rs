//! GPIO driver contract
//!
//! This module defines the interface the vendor pin driver must provide, and
//! the value types exchanged across it.

use core::fmt;

/// Opaque identifier of a physical pin
///
/// Assigned once when a port is created. The wrapper does not track which
/// identifiers are in use; one owner per physical pin is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId(pub u8);

impl PinId {
    /// General purpose pin 0 on the expansion header
    pub const PGPIO0: PinId = PinId(0);
    /// General purpose pin 1 on the expansion header
    pub const PGPIO1: PinId = PinId(1);
    /// General purpose pin 2 on the expansion header
    pub const PGPIO2: PinId = PinId(2);
    /// Green user LED
    pub const LED_GREEN: PinId = PinId(3);
    /// Red user LED
    pub const LED_RED: PinId = PinId(4);

    /// Raw pin number
    pub const fn number(self) -> u8 {
        self.0
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GPIO{}", self.0)
    }
}

/// Pin direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Pin senses an external signal
    Input,
    /// Pin drives a signal
    Output,
}

/// Logical pin level
///
/// Only 0 and 1 are representable; raw integers go through `TryFrom<u8>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Level {
    /// Logic 0
    #[default]
    Low = 0,
    /// Logic 1
    High = 1,
}

impl Level {
    /// Returns `true` for [`Level::High`]
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }

    /// Returns the level as 0 or 1
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level.is_high()
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.as_u8()
    }
}

/// Raw value that is neither 0 nor 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidLevel(pub u8);

impl TryFrom<u8> for Level {
    type Error = InvalidLevel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Level::Low),
            1 => Ok(Level::High),
            other => Err(InvalidLevel(other)),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Status code returned by the pin driver
///
/// [`DriverStatus::PASS`] is success. Every other code is a failure and is
/// treated uniformly by the wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriverStatus(i32);

impl DriverStatus {
    /// Operation applied
    pub const PASS: DriverStatus = DriverStatus(0);
    /// Generic failure code used by the vendor library
    pub const ERROR: DriverStatus = DriverStatus(-1);

    /// Wrap a raw status code
    pub const fn from_code(code: i32) -> Self {
        DriverStatus(code)
    }

    /// Raw status code
    pub const fn code(self) -> i32 {
        self.0
    }

    /// Returns `true` only for [`DriverStatus::PASS`]
    pub const fn is_pass(self) -> bool {
        self.0 == Self::PASS.0
    }
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pin configuration record exchanged with the driver
///
/// `level` is written by the caller for outputs and filled in by the driver
/// on a successful [`PinDriver::get`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GpioConfig {
    /// Physical pin
    pub pin: PinId,
    /// Pin direction
    pub direction: Direction,
    /// Logical level
    pub level: Level,
}

impl GpioConfig {
    /// Create a configuration record
    pub const fn new(pin: PinId, direction: Direction, level: Level) -> Self {
        Self {
            pin,
            direction,
            level,
        }
    }
}

/// Vendor pin driver interface
///
/// Implementations perform the register-level work for a named pin. Calls are
/// synchronous and complete in bounded time.
///
/// # Safety Invariants
///
/// - Only one owner per physical pin
/// - No concurrent access to the same pin from multiple contexts
pub trait PinDriver {
    /// Program direction, initial level and pin mux from `config`
    fn init(&mut self, config: &GpioConfig) -> DriverStatus;

    /// Drive `config.level` onto the pin
    fn set(&mut self, config: &GpioConfig) -> DriverStatus;

    /// Sample the pin
    ///
    /// On [`DriverStatus::PASS`] the sampled level is written to
    /// `config.level`. On failure the record contents are unspecified.
    fn get(&mut self, config: &mut GpioConfig) -> DriverStatus;
}

impl<T: PinDriver + ?Sized> PinDriver for &mut T {
    fn init(&mut self, config: &GpioConfig) -> DriverStatus {
        (**self).init(config)
    }

    fn set(&mut self, config: &GpioConfig) -> DriverStatus {
        (**self).set(config)
    }

    fn get(&mut self, config: &mut GpioConfig) -> DriverStatus {
        (**self).get(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_raw() {
        assert_eq!(Level::try_from(0), Ok(Level::Low));
        assert_eq!(Level::try_from(1), Ok(Level::High));
        assert_eq!(Level::try_from(2), Err(InvalidLevel(2)));
        assert_eq!(Level::try_from(255), Err(InvalidLevel(255)));
    }

    #[test]
    fn test_level_bool_conversion() {
        assert_eq!(Level::from(true), Level::High);
        assert_eq!(Level::from(false), Level::Low);
        assert!(bool::from(Level::High));
        assert_eq!(u8::from(Level::High), 1);
        assert_eq!(Level::default(), Level::Low);
    }

    #[test]
    fn test_driver_status() {
        assert!(DriverStatus::PASS.is_pass());
        assert!(!DriverStatus::ERROR.is_pass());
        assert!(!DriverStatus::from_code(42).is_pass());
        assert_eq!(DriverStatus::from_code(0), DriverStatus::PASS);
    }

    #[test]
    fn test_pin_display() {
        assert_eq!(format!("{}", PinId::LED_RED), "GPIO4");
        assert_eq!(PinId(9).number(), 9);
    }

    struct CountingDriver {
        calls: u32,
    }

    impl PinDriver for CountingDriver {
        fn init(&mut self, _config: &GpioConfig) -> DriverStatus {
            self.calls += 1;
            DriverStatus::PASS
        }

        fn set(&mut self, _config: &GpioConfig) -> DriverStatus {
            self.calls += 1;
            DriverStatus::PASS
        }

        fn get(&mut self, config: &mut GpioConfig) -> DriverStatus {
            self.calls += 1;
            config.level = Level::High;
            DriverStatus::PASS
        }
    }

    #[test]
    fn test_mut_ref_forwards_to_driver() {
        let mut driver = CountingDriver { calls: 0 };
        let mut config = GpioConfig::new(PinId::PGPIO0, Direction::Input, Level::Low);
        {
            let mut by_ref = &mut driver;
            assert!(by_ref.init(&config).is_pass());
            assert!(by_ref.get(&mut config).is_pass());
        }
        assert_eq!(driver.calls, 2);
        assert_eq!(config.level, Level::High);
    }
}
