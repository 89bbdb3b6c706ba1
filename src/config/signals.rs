//! Hardware signal tokens.
//!
//! Closed value sets owned by the controller firmware. They are carried through
//! configuration untouched; this crate never interprets them.

use serde::Deserialize;

/// Idle behavior of a simple (current-limited or basic) controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum NeutralMode {
    /// Keep whatever the controller has persisted.
    #[default]
    EepromSetting,
    /// Let the motor spin freely.
    Coast,
    /// Short the windings to resist motion.
    Brake,
}

/// Which rotation direction counts as positive output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum InvertedValue {
    /// Positive output spins the rotor counter-clockwise (facing the shaft).
    #[default]
    CounterClockwisePositive,
    /// Positive output spins the rotor clockwise (facing the shaft).
    ClockwisePositive,
}

/// Idle behavior of an advanced controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum NeutralModeValue {
    /// Let the motor spin freely.
    #[default]
    Coast,
    /// Short the windings to resist motion.
    Brake,
}

/// How the gravity feed-forward term is applied by the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum GravityTypeValue {
    /// Constant output, as for an elevator.
    #[default]
    ElevatorStatic,
    /// Output scaled by the cosine of the mechanism angle, as for an arm.
    ArmCosine,
}

/// Sensor that feeds position and velocity to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum FeedbackSensorSourceValue {
    /// The motor's integrated rotor sensor.
    #[default]
    RotorSensor,
    /// A remote CANcoder read over the bus.
    RemoteCancoder,
    /// A CANcoder fused with the rotor sensor.
    FusedCancoder,
    /// A CANcoder synchronised with the rotor sensor.
    SyncCancoder,
    /// Yaw of a remote Pigeon 2.
    RemotePigeon2Yaw,
    /// Pitch of a remote Pigeon 2.
    RemotePigeon2Pitch,
    /// Roll of a remote Pigeon 2.
    RemotePigeon2Roll,
}

impl FeedbackSensorSourceValue {
    /// Whether this source reads a device other than the motor itself.
    pub fn is_remote(self) -> bool {
        !matches!(self, FeedbackSensorSourceValue::RotorSensor)
    }
}
