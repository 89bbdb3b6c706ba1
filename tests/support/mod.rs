//! Recording controllers for tests.

#![allow(dead_code)]

use motor_controller_config::motor::{
    BasicMotorController, ConfigurableMotorController, CurrentLimitedMotorController, ErrorType,
};
use motor_controller_config::{NeutralMode, Seconds, TalonFxConfiguration};

/// Transport failure reported by a mock controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unreachable;

/// One write to a simple controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Write {
    Inverted(bool),
    NeutralMode(NeutralMode),
    ContinuousCurrentLimit(i32),
    PeakCurrentLimit(i32),
    PeakCurrentDuration(i32),
    EnableCurrentLimit(bool),
    OpenLoopRamp(Seconds),
}

/// Simple controller that records every write.
#[derive(Debug, Default)]
pub struct MockSimpleController {
    pub writes: Vec<Write>,
    pub offline: bool,
}

impl MockSimpleController {
    fn record(&mut self, write: Write) -> Result<(), Unreachable> {
        if self.offline {
            return Err(Unreachable);
        }
        self.writes.push(write);
        Ok(())
    }
}

impl ErrorType for MockSimpleController {
    type Error = Unreachable;
}

impl BasicMotorController for MockSimpleController {
    fn set_inverted(&mut self, inverted: bool) -> Result<(), Unreachable> {
        self.record(Write::Inverted(inverted))
    }

    fn set_neutral_mode(&mut self, mode: NeutralMode) -> Result<(), Unreachable> {
        self.record(Write::NeutralMode(mode))
    }

    fn config_open_loop_ramp(&mut self, ramp: Seconds) -> Result<(), Unreachable> {
        self.record(Write::OpenLoopRamp(ramp))
    }
}

impl CurrentLimitedMotorController for MockSimpleController {
    fn config_continuous_current_limit(&mut self, amps: i32) -> Result<(), Unreachable> {
        self.record(Write::ContinuousCurrentLimit(amps))
    }

    fn config_peak_current_limit(&mut self, amps: i32) -> Result<(), Unreachable> {
        self.record(Write::PeakCurrentLimit(amps))
    }

    fn config_peak_current_duration(&mut self, duration_ms: i32) -> Result<(), Unreachable> {
        self.record(Write::PeakCurrentDuration(duration_ms))
    }

    fn enable_current_limit(&mut self, enable: bool) -> Result<(), Unreachable> {
        self.record(Write::EnableCurrentLimit(enable))
    }
}

/// Advanced controller that records every applied configuration.
#[derive(Debug, Default)]
pub struct MockAdvancedController {
    pub applied: Vec<TalonFxConfiguration>,
    pub offline: bool,
}

impl ErrorType for MockAdvancedController {
    type Error = Unreachable;
}

impl ConfigurableMotorController for MockAdvancedController {
    fn apply_configuration(&mut self, config: &TalonFxConfiguration) -> Result<(), Unreachable> {
        if self.offline {
            return Err(Unreachable);
        }
        self.applied.push(*config);
        Ok(())
    }
}
