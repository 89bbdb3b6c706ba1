//! Fixed configurations for simple controllers.
//!
//! These are immutable values applied field by field. They carry no state
//! between calls, so `configure` can be repeated freely.

use serde::Deserialize;

use crate::config::units::Seconds;
use crate::config::NeutralMode;

use super::device::{BasicMotorController, CurrentLimitedMotorController};

/// Peak current limit used when none is given.
pub const DEFAULT_PEAK_CURRENT_LIMIT_AMPS: i32 = 80;

/// Gap between the peak limit and the continuous limit derived from it.
pub const CONTINUOUS_CURRENT_MARGIN_AMPS: i32 = 10;

/// How long the peak current may be held before limiting kicks in.
pub const PEAK_CURRENT_DURATION_MS: i32 = 100;

/// Configuration for a current-limited simple controller.
///
/// The continuous limit is always `peak - 10` amps; callers that need another
/// margin should configure the device directly.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TalonSrxConfig {
    /// Invert the output direction.
    #[serde(default)]
    pub inverted: bool,

    /// Behavior at zero command.
    #[serde(default)]
    pub neutral_mode: NeutralMode,

    /// Peak current limit in whole amps.
    #[serde(default = "default_peak_current_limit")]
    pub peak_current_limit_amps: i32,

    /// Open-loop ramp period.
    #[serde(default, rename = "open_loop_ramp_s")]
    pub open_loop_ramp: Seconds,
}

fn default_peak_current_limit() -> i32 {
    DEFAULT_PEAK_CURRENT_LIMIT_AMPS
}

impl TalonSrxConfig {
    /// Create a configuration with an 80 A peak limit and no ramp.
    pub const fn new(inverted: bool, neutral_mode: NeutralMode) -> Self {
        Self {
            inverted,
            neutral_mode,
            peak_current_limit_amps: DEFAULT_PEAK_CURRENT_LIMIT_AMPS,
            open_loop_ramp: Seconds::ZERO,
        }
    }

    /// Same configuration with another peak current limit.
    #[must_use]
    pub fn with_peak_current_limit(mut self, amps: i32) -> Self {
        self.peak_current_limit_amps = amps;
        self
    }

    /// Same configuration with another open-loop ramp period.
    #[must_use]
    pub fn with_open_loop_ramp(mut self, ramp: Seconds) -> Self {
        self.open_loop_ramp = ramp;
        self
    }

    /// Continuous current limit derived from the peak limit.
    ///
    /// Wraps instead of overflowing; the device rejects what it cannot take.
    #[inline]
    pub const fn continuous_current_limit_amps(&self) -> i32 {
        self.peak_current_limit_amps.wrapping_sub(CONTINUOUS_CURRENT_MARGIN_AMPS)
    }

    /// Write every setting to the device.
    ///
    /// Order: inversion, neutral mode, continuous limit, peak limit, peak
    /// duration, limit enable, open-loop ramp. Values are not range-checked;
    /// the device decides what it accepts.
    ///
    /// # Errors
    ///
    /// Returns the first device error; later settings are not written.
    pub fn configure<D>(&self, device: &mut D) -> Result<(), D::Error>
    where
        D: CurrentLimitedMotorController,
    {
        trace!(
            "configuring current-limited controller: peak {} A, ramp {} s",
            self.peak_current_limit_amps,
            self.open_loop_ramp.value()
        );

        device.set_inverted(self.inverted)?;
        device.set_neutral_mode(self.neutral_mode)?;
        device.config_continuous_current_limit(self.continuous_current_limit_amps())?;
        device.config_peak_current_limit(self.peak_current_limit_amps)?;
        device.config_peak_current_duration(PEAK_CURRENT_DURATION_MS)?;
        device.enable_current_limit(true)?;
        device.config_open_loop_ramp(self.open_loop_ramp)?;

        Ok(())
    }
}

/// Configuration for a simple controller without current limiting.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct VictorSpxConfig {
    /// Invert the output direction.
    #[serde(default)]
    pub inverted: bool,

    /// Behavior at zero command.
    #[serde(default)]
    pub neutral_mode: NeutralMode,

    /// Open-loop ramp period.
    #[serde(default, rename = "open_loop_ramp_s")]
    pub open_loop_ramp: Seconds,
}

impl VictorSpxConfig {
    /// Create a configuration with no ramp.
    pub const fn new(inverted: bool, neutral_mode: NeutralMode) -> Self {
        Self {
            inverted,
            neutral_mode,
            open_loop_ramp: Seconds::ZERO,
        }
    }

    /// Same configuration with another open-loop ramp period.
    #[must_use]
    pub fn with_open_loop_ramp(mut self, ramp: Seconds) -> Self {
        self.open_loop_ramp = ramp;
        self
    }

    /// Write inversion, neutral mode and open-loop ramp to the device.
    ///
    /// # Errors
    ///
    /// Returns the first device error; later settings are not written.
    pub fn configure<D>(&self, device: &mut D) -> Result<(), D::Error>
    where
        D: BasicMotorController,
    {
        device.set_inverted(self.inverted)?;
        device.set_neutral_mode(self.neutral_mode)?;
        device.config_open_loop_ramp(self.open_loop_ramp)?;

        Ok(())
    }
}
