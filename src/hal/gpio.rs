//! GPIO port wrapper
//!
//! [`GpioPort`] binds one pin to a [`PinDriver`] and turns the driver's raw
//! status codes into [`GpioError`] kinds. It holds no hardware resource of
//! its own: dropping a port leaves the pin in the last driven state.
//!
//! # Direction misuse
//!
//! Requests are passed to the driver as-is. Calling [`GpioPort::set_level`]
//! on an input port, or [`GpioPort::get_level`] on an output port, is left to
//! the driver to accept or reject.
//!
//! # Example
//!
//! ```
//! use wei_hal::hal::gpio::GpioPort;
//! use wei_hal::platform::{Direction, DriverStatus, GpioConfig, Level, PinDriver, PinId};
//!
//! struct Loopback(Level);
//!
//! impl PinDriver for Loopback {
//!     fn init(&mut self, config: &GpioConfig) -> DriverStatus {
//!         self.0 = config.level;
//!         DriverStatus::PASS
//!     }
//!     fn set(&mut self, config: &GpioConfig) -> DriverStatus {
//!         self.0 = config.level;
//!         DriverStatus::PASS
//!     }
//!     fn get(&mut self, config: &mut GpioConfig) -> DriverStatus {
//!         config.level = self.0;
//!         DriverStatus::PASS
//!     }
//! }
//!
//! let mut port = GpioPort::init(Loopback(Level::Low), PinId(3), Direction::Output, Level::Low)?;
//! port.set_level(Level::High)?;
//! assert_eq!(port.get_level()?, Level::High);
//! # Ok::<(), wei_hal::platform::GpioError>(())
//! ```

use crate::platform::{
    error::{GpioError, Result},
    traits::{Direction, GpioConfig, Level, PinDriver, PinId},
};

/// An initialized GPIO pin
///
/// A port only exists once the driver has accepted its configuration, so
/// `set_level`/`get_level` can never reach an uninitialized pin. Pin and
/// direction are fixed for the lifetime of the port.
///
/// Several ports may share one driver through `&mut D` or a cloned driver
/// handle. Nothing stops two ports from naming the same physical pin; keep
/// one port per pin.
#[derive(Debug)]
pub struct GpioPort<D: PinDriver> {
    config: GpioConfig,
    driver: D,
}

impl<D: PinDriver> GpioPort<D> {
    /// Configure `pin` through `driver` and return the port
    ///
    /// The physical pin changes state as soon as the driver accepts the
    /// configuration. No retry is attempted.
    ///
    /// # Errors
    ///
    /// Returns `GpioError::HardwareInit` with the driver status if the driver
    /// rejects the configuration. No port is produced in that case.
    pub fn init(mut driver: D, pin: PinId, direction: Direction, initial: Level) -> Result<Self> {
        let config = GpioConfig::new(pin, direction, initial);
        let status = driver.init(&config);
        if !status.is_pass() {
            return Err(GpioError::HardwareInit(status));
        }
        Ok(Self { config, driver })
    }

    /// Drive `level` onto the pin
    ///
    /// The cached level is updated before the driver is called and keeps the
    /// requested value even if the write fails.
    ///
    /// # Errors
    ///
    /// Returns `GpioError::HardwareWrite` with the driver status on failure.
    pub fn set_level(&mut self, level: Level) -> Result<()> {
        self.config.level = level;
        let status = self.driver.set(&self.config);
        if !status.is_pass() {
            return Err(GpioError::HardwareWrite(status));
        }
        Ok(())
    }

    /// Sample the pin
    ///
    /// On success the sampled level replaces the cached level.
    ///
    /// # Errors
    ///
    /// Returns `GpioError::HardwareRead` with the driver status on failure.
    /// The cached level is left untouched.
    pub fn get_level(&mut self) -> Result<Level> {
        let mut sampled = self.config;
        let status = self.driver.get(&mut sampled);
        if !status.is_pass() {
            return Err(GpioError::HardwareRead(status));
        }
        self.config.level = sampled.level;
        Ok(sampled.level)
    }

    /// Physical pin of this port
    pub fn pin(&self) -> PinId {
        self.config.pin
    }

    /// Direction the port was initialized with
    pub fn direction(&self) -> Direction {
        self.config.direction
    }

    /// Last requested or last sampled level, without touching hardware
    pub fn level(&self) -> Level {
        self.config.level
    }

    /// Configuration record as last handed to the driver
    pub fn config(&self) -> &GpioConfig {
        &self.config
    }

    /// Give up the port and return its driver
    ///
    /// The pin keeps its current electrical state.
    pub fn release(self) -> D {
        self.driver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{DriverCall, MockPinDriver};
    use crate::platform::DriverStatus;

    const DIRECTIONS: [Direction; 2] = [Direction::Input, Direction::Output];
    const LEVELS: [Level; 2] = [Level::Low, Level::High];

    fn bound(
        driver: &MockPinDriver,
        pin: PinId,
        direction: Direction,
        initial: Level,
    ) -> GpioPort<MockPinDriver> {
        GpioPort::init(driver.clone(), pin, direction, initial).unwrap()
    }

    #[test]
    fn test_init_then_get_returns_initial_level() {
        for pin in [0u8, 3, 9, 31] {
            for direction in DIRECTIONS {
                for initial in LEVELS {
                    let driver = MockPinDriver::new();
                    let mut port = GpioPort::init(driver, PinId(pin), direction, initial).unwrap();
                    assert_eq!(port.get_level(), Ok(initial));
                    assert_eq!(port.pin(), PinId(pin));
                    assert_eq!(port.direction(), direction);
                }
            }
        }
    }

    #[test]
    fn test_output_set_then_get() {
        let mut port =
            GpioPort::init(MockPinDriver::new(), PinId(5), Direction::Output, Level::Low).unwrap();
        for level in [Level::High, Level::Low, Level::High] {
            port.set_level(level).unwrap();
            assert_eq!(port.get_level(), Ok(level));
        }
    }

    #[test]
    fn test_scenario_pin3_output() {
        let driver = MockPinDriver::new();
        let mut port = bound(&driver, PinId(3), Direction::Output, Level::Low);
        assert_eq!(port.set_level(Level::High), Ok(()));
        assert_eq!(port.get_level(), Ok(Level::High));

        let config = GpioConfig::new(PinId(3), Direction::Output, Level::Low);
        let high = GpioConfig {
            level: Level::High,
            ..config
        };
        assert_eq!(
            driver.calls(),
            vec![
                DriverCall::Init(config),
                DriverCall::Set(high),
                DriverCall::Get(PinId(3)),
            ]
        );
    }

    #[test]
    fn test_scenario_pin9_input_init_failure() {
        let driver = MockPinDriver::new();
        driver.fail_init_with(DriverStatus::ERROR);

        let result = GpioPort::init(driver.clone(), PinId(9), Direction::Input, Level::Low);
        assert_eq!(
            result.map(|_| ()),
            Err(GpioError::HardwareInit(DriverStatus::ERROR))
        );
        assert_eq!(driver.direction(PinId(9)), None);
    }

    #[test]
    fn test_init_failure_keeps_raw_status() {
        let driver = MockPinDriver::with_max_pin(4);
        let err = GpioPort::init(driver, PinId(5), Direction::Output, Level::High)
            .err()
            .unwrap();
        assert_eq!(err, GpioError::HardwareInit(DriverStatus::ERROR));
        assert_eq!(err.status().code(), -1);
    }

    #[test]
    fn test_failed_write_caches_attempted_level() {
        let driver = MockPinDriver::new();
        let mut port = bound(&driver, PinId(2), Direction::Output, Level::Low);

        driver.fail_set_with(DriverStatus::from_code(-3));
        assert_eq!(
            port.set_level(Level::High),
            Err(GpioError::HardwareWrite(DriverStatus::from_code(-3)))
        );
        assert_eq!(port.level(), Level::High);
        assert_eq!(driver.level(PinId(2)), Some(Level::Low));
    }

    #[test]
    fn test_failed_read_keeps_cached_level() {
        let driver = MockPinDriver::new();
        let mut port = bound(&driver, PinId(7), Direction::Input, Level::Low);
        driver.set_line_level(PinId(7), Level::High);
        driver.fail_get_with(DriverStatus::ERROR);

        assert_eq!(
            port.get_level(),
            Err(GpioError::HardwareRead(DriverStatus::ERROR))
        );
        assert_eq!(port.level(), Level::Low);

        driver.clear_failures();
        assert_eq!(port.get_level(), Ok(Level::High));
        assert_eq!(port.level(), Level::High);
    }

    #[test]
    fn test_input_follows_external_signal() {
        let driver = MockPinDriver::new();
        let mut port = bound(&driver, PinId::PGPIO1, Direction::Input, Level::Low);

        driver.set_line_level(PinId::PGPIO1, Level::High);
        assert_eq!(port.level(), Level::Low);
        assert_eq!(port.get_level(), Ok(Level::High));

        driver.set_line_level(PinId::PGPIO1, Level::Low);
        assert_eq!(port.get_level(), Ok(Level::Low));
    }

    #[test]
    fn test_set_on_input_is_passed_through() {
        let driver = MockPinDriver::new();
        let mut port = bound(&driver, PinId(4), Direction::Input, Level::Low);
        driver.clear_calls();

        assert_eq!(port.set_level(Level::High), Ok(()));
        assert_eq!(
            driver.calls(),
            vec![DriverCall::Set(GpioConfig::new(PinId(4), Direction::Input, Level::High))]
        );
    }

    #[test]
    fn test_ports_share_driver_by_reference() {
        let mut driver = MockPinDriver::new();
        {
            let mut green =
                GpioPort::init(&mut driver, PinId::LED_GREEN, Direction::Output, Level::Low)
                    .unwrap();
            green.set_level(Level::High).unwrap();
        }
        {
            let red = GpioPort::init(&mut driver, PinId::LED_RED, Direction::Output, Level::High)
                .unwrap();
            assert_eq!(red.level(), Level::High);
        }
        assert_eq!(driver.level(PinId::LED_GREEN), Some(Level::High));
        assert_eq!(driver.level(PinId::LED_RED), Some(Level::High));
    }

    #[test]
    fn test_release_leaves_pin_state() {
        let driver = MockPinDriver::new();
        let mut port = bound(&driver, PinId(1), Direction::Output, Level::Low);
        port.set_level(Level::High).unwrap();

        let released = port.release();
        assert_eq!(released.level(PinId(1)), Some(Level::High));
        assert_eq!(released.direction(PinId(1)), Some(Direction::Output));
    }

    #[test]
    fn test_aliased_pins_are_not_tracked() {
        let driver = MockPinDriver::new();
        let mut a = bound(&driver, PinId(6), Direction::Output, Level::Low);
        let mut b = bound(&driver, PinId(6), Direction::Output, Level::Low);

        a.set_level(Level::High).unwrap();
        assert_eq!(b.level(), Level::Low);
        assert_eq!(b.get_level(), Ok(Level::High));
    }
}
