//! Ramp rate configuration.
//!
//! A ramp period is the time the output takes to go from zero to full command.
//! Open- and closed-loop control each keep a period per control domain
//! (duty cycle, voltage, torque).

use super::units::Seconds;

/// Ramp periods used for open-loop control.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OpenLoopRampsConfigs {
    /// Duty-cycle output ramp.
    pub duty_cycle_open_loop_ramp_period: Seconds,
    /// Voltage output ramp.
    pub voltage_open_loop_ramp_period: Seconds,
    /// Torque-current output ramp.
    pub torque_open_loop_ramp_period: Seconds,
}

impl OpenLoopRampsConfigs {
    /// Same period for every domain.
    pub const fn uniform(period: Seconds) -> Self {
        Self {
            duty_cycle_open_loop_ramp_period: period,
            voltage_open_loop_ramp_period: period,
            torque_open_loop_ramp_period: period,
        }
    }
}

/// Ramp periods used for closed-loop control.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClosedLoopRampsConfigs {
    /// Duty-cycle output ramp.
    pub duty_cycle_closed_loop_ramp_period: Seconds,
    /// Voltage output ramp.
    pub voltage_closed_loop_ramp_period: Seconds,
    /// Torque-current output ramp.
    pub torque_closed_loop_ramp_period: Seconds,
}

impl ClosedLoopRampsConfigs {
    /// Same period for every domain.
    pub const fn uniform(period: Seconds) -> Self {
        Self {
            duty_cycle_closed_loop_ramp_period: period,
            voltage_closed_loop_ramp_period: period,
            torque_closed_loop_ramp_period: period,
        }
    }
}
