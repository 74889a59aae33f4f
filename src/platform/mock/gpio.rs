//! Mock pin driver implementation for testing

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::vec::Vec;

use crate::platform::traits::{Direction, DriverStatus, GpioConfig, Level, PinDriver, PinId};

/// One recorded driver call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverCall {
    /// `init` with the record as passed
    Init(GpioConfig),
    /// `set` with the record as passed
    Set(GpioConfig),
    /// `get` for the given pin
    Get(PinId),
}

#[derive(Debug)]
struct MockState {
    max_pin: u8,
    configured: BTreeMap<PinId, Direction>,
    lines: BTreeMap<PinId, Level>,
    calls: Vec<DriverCall>,
    fail_init: Option<DriverStatus>,
    fail_set: Option<DriverStatus>,
    fail_get: Option<DriverStatus>,
}

/// Mock pin driver
///
/// Simulates a board-wide pin controller. Clones share the same state, so
/// several ports can be bound to one driver while a test keeps a handle to
/// inspect pin levels and the call history.
///
/// Writes are echoed faithfully: a `set` on a configured pin changes the line
/// level regardless of direction, and a `get` returns the line level.
#[derive(Debug, Clone)]
pub struct MockPinDriver {
    state: Rc<RefCell<MockState>>,
}

impl MockPinDriver {
    /// Highest pin number accepted by default
    pub const DEFAULT_MAX_PIN: u8 = 31;

    /// Create a mock driver accepting pins `0..=DEFAULT_MAX_PIN`
    pub fn new() -> Self {
        Self::with_max_pin(Self::DEFAULT_MAX_PIN)
    }

    /// Create a mock driver accepting pins `0..=max_pin`
    pub fn with_max_pin(max_pin: u8) -> Self {
        Self {
            state: Rc::new(RefCell::new(MockState {
                max_pin,
                configured: BTreeMap::new(),
                lines: BTreeMap::new(),
                calls: Vec::new(),
                fail_init: None,
                fail_set: None,
                fail_get: None,
            })),
        }
    }

    /// Make every subsequent `init` fail with `status`
    pub fn fail_init_with(&self, status: DriverStatus) {
        self.state.borrow_mut().fail_init = Some(status);
    }

    /// Make every subsequent `set` fail with `status`
    pub fn fail_set_with(&self, status: DriverStatus) {
        self.state.borrow_mut().fail_set = Some(status);
    }

    /// Make every subsequent `get` fail with `status`
    pub fn fail_get_with(&self, status: DriverStatus) {
        self.state.borrow_mut().fail_get = Some(status);
    }

    /// Stop forcing failures
    pub fn clear_failures(&self) {
        let mut state = self.state.borrow_mut();
        state.fail_init = None;
        state.fail_set = None;
        state.fail_get = None;
    }

    /// Drive a line from outside (simulates an external signal on an input)
    pub fn set_line_level(&self, pin: PinId, level: Level) {
        self.state.borrow_mut().lines.insert(pin, level);
    }

    /// Current line level, if the line has ever been driven or configured
    pub fn level(&self, pin: PinId) -> Option<Level> {
        self.state.borrow().lines.get(&pin).copied()
    }

    /// Direction the pin was configured with, if initialized
    pub fn direction(&self, pin: PinId) -> Option<Direction> {
        self.state.borrow().configured.get(&pin).copied()
    }

    /// Snapshot of every driver call so far
    pub fn calls(&self) -> Vec<DriverCall> {
        self.state.borrow().calls.clone()
    }

    /// Forget the recorded call history
    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }
}

impl Default for MockPinDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl PinDriver for MockPinDriver {
    fn init(&mut self, config: &GpioConfig) -> DriverStatus {
        let mut state = self.state.borrow_mut();
        state.calls.push(DriverCall::Init(*config));

        if let Some(status) = state.fail_init {
            return status;
        }
        if config.pin.number() > state.max_pin {
            return DriverStatus::ERROR;
        }

        state.configured.insert(config.pin, config.direction);
        match config.direction {
            Direction::Output => {
                state.lines.insert(config.pin, config.level);
            }
            Direction::Input => {
                // An externally driven line keeps its level
                state.lines.entry(config.pin).or_insert(config.level);
            }
        }
        DriverStatus::PASS
    }

    fn set(&mut self, config: &GpioConfig) -> DriverStatus {
        let mut state = self.state.borrow_mut();
        state.calls.push(DriverCall::Set(*config));

        if let Some(status) = state.fail_set {
            return status;
        }
        if !state.configured.contains_key(&config.pin) {
            return DriverStatus::ERROR;
        }

        state.lines.insert(config.pin, config.level);
        DriverStatus::PASS
    }

    fn get(&mut self, config: &mut GpioConfig) -> DriverStatus {
        let mut state = self.state.borrow_mut();
        state.calls.push(DriverCall::Get(config.pin));

        if let Some(status) = state.fail_get {
            // Leave junk behind, as a real driver may on a failed read
            config.level = Level::from(!config.level.is_high());
            return status;
        }
        if !state.configured.contains_key(&config.pin) {
            return DriverStatus::ERROR;
        }

        match state.lines.get(&config.pin) {
            Some(level) => {
                config.level = *level;
                DriverStatus::PASS
            }
            None => DriverStatus::ERROR,
        }
    }
}
