//! Advanced motor declarations from TOML.

use heapless::Vec;
use serde::Deserialize;

use super::motion::MotionMagicConfigs;
use super::signals::{FeedbackSensorSourceValue, GravityTypeValue, InvertedValue, NeutralModeValue};
use super::units::{Amps, Seconds};

/// Gains declared for one slot.
#[derive(Debug, Clone, Deserialize)]
pub struct SlotEntry {
    /// Slot index (0, 1 or 2).
    pub slot: u8,
    /// Proportional gain.
    #[serde(default)]
    pub kp: f64,
    /// Integral gain.
    #[serde(default)]
    pub ki: f64,
    /// Derivative gain.
    #[serde(default)]
    pub kd: f64,
    /// Static feed-forward.
    #[serde(default)]
    pub ks: f64,
    /// Velocity feed-forward.
    #[serde(default)]
    pub kv: f64,
    /// Acceleration feed-forward.
    #[serde(default)]
    pub ka: f64,
    /// Gravity feed-forward; left at its current value when omitted.
    #[serde(default)]
    pub kg: Option<f64>,
}

/// Remote sensor wiring.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RemoteSensorEntry {
    /// CAN id of the sensor.
    pub id: i32,
    /// Sensor source token.
    pub source: FeedbackSensorSourceValue,
    /// Rotor rotations per sensor rotation.
    #[serde(default = "default_ratio")]
    pub rotor_to_sensor_ratio: f64,
}

fn default_ratio() -> f64 {
    1.0
}

/// Advanced controller declaration.
///
/// Every field is optional; anything omitted keeps the controller default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TalonFxEntry {
    /// Inversion token.
    #[serde(default)]
    pub inverted: Option<InvertedValue>,

    /// Neutral mode token.
    #[serde(default)]
    pub neutral_mode: Option<NeutralModeValue>,

    /// Ramp period applied to every control domain.
    #[serde(default, rename = "ramp_rate_s")]
    pub ramp_rate: Option<Seconds>,

    /// Stator current limit.
    #[serde(default, rename = "stator_current_limit_amps")]
    pub stator_current_limit: Option<Amps>,

    /// Supply current limit.
    #[serde(default, rename = "supply_current_limit_amps")]
    pub supply_current_limit: Option<Amps>,

    /// Gravity type shared by all slots.
    #[serde(default)]
    pub gravity_type: Option<GravityTypeValue>,

    /// Profiled-motion limits.
    #[serde(default)]
    pub motion_profile: Option<MotionMagicConfigs>,

    /// Remote sensor wiring.
    #[serde(default)]
    pub remote_sensor: Option<RemoteSensorEntry>,

    /// Sensor rotations per mechanism rotation.
    #[serde(default)]
    pub sensor_to_mechanism_ratio: Option<f64>,

    /// Per-slot gains (at most one entry per slot).
    #[serde(default)]
    pub slots: Vec<SlotEntry, 3>,
}
