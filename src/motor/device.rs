//! Controller capability traits.
//!
//! The transport to the physical controller is supplied by the caller. These
//! traits name the operations a configuration needs and nothing else; every
//! call is blocking and either succeeds or reports the device's own error.

use core::fmt::Debug;

use crate::config::units::Seconds;
use crate::config::{NeutralMode, TalonFxConfiguration};

/// Error type reported by a controller.
pub trait ErrorType {
    /// Device-specific error, returned to the caller unchanged.
    type Error: Debug;
}

/// A controller that takes individual output settings.
pub trait BasicMotorController: ErrorType {
    /// Invert the output direction.
    fn set_inverted(&mut self, inverted: bool) -> Result<(), Self::Error>;

    /// Set the behavior at zero command.
    fn set_neutral_mode(&mut self, mode: NeutralMode) -> Result<(), Self::Error>;

    /// Set the open-loop ramp period.
    fn config_open_loop_ramp(&mut self, ramp: Seconds) -> Result<(), Self::Error>;
}

/// A simple controller that also limits its own current draw.
pub trait CurrentLimitedMotorController: BasicMotorController {
    /// Current the controller may sustain indefinitely, in whole amps.
    fn config_continuous_current_limit(&mut self, amps: i32) -> Result<(), Self::Error>;

    /// Current that triggers limiting once held for the peak duration, in whole amps.
    fn config_peak_current_limit(&mut self, amps: i32) -> Result<(), Self::Error>;

    /// How long the peak current may be held, in milliseconds.
    fn config_peak_current_duration(&mut self, duration_ms: i32) -> Result<(), Self::Error>;

    /// Turn current limiting on or off.
    fn enable_current_limit(&mut self, enable: bool) -> Result<(), Self::Error>;
}

/// A controller that accepts a whole configuration in one transaction.
///
/// The transaction is atomic: it either applies everything or fails.
pub trait ConfigurableMotorController: ErrorType {
    /// Overwrite every configuration frame on the device.
    fn apply_configuration(&mut self, config: &TalonFxConfiguration) -> Result<(), Self::Error>;
}
