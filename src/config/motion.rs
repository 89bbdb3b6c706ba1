//! Profiled-motion limits.

use serde::Deserialize;

use super::units::{RotationsPerSecond, RotationsPerSecondSquared};

/// Velocity and acceleration ceilings for onboard profiled motion.
///
/// Both values are always written together; there is no partial profile.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionMagicConfigs {
    /// Cruise velocity ceiling.
    #[serde(rename = "cruise_velocity_rps")]
    pub cruise_velocity: RotationsPerSecond,
    /// Acceleration ceiling.
    #[serde(rename = "acceleration_rps2")]
    pub acceleration: RotationsPerSecondSquared,
}

impl MotionMagicConfigs {
    /// Create a profile from both ceilings.
    pub const fn new(cruise_velocity: RotationsPerSecond, acceleration: RotationsPerSecondSquared) -> Self {
        Self {
            cruise_velocity,
            acceleration,
        }
    }
}
