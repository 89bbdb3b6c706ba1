//! Current limit configuration.

use super::units::Amps;

/// Stator current limit applied when nothing else is configured.
pub const DEFAULT_STATOR_CURRENT_LIMIT: Amps = Amps(120.0);

/// Supply current limit applied when nothing else is configured.
pub const DEFAULT_SUPPLY_CURRENT_LIMIT: Amps = Amps(70.0);

/// Stator and supply current ceilings.
///
/// The two limits are independent: neither is ever derived from the other.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CurrentLimitsConfigs {
    /// Ceiling on motor winding current.
    pub stator_current_limit: Amps,
    /// Whether the stator limit is enforced.
    pub stator_current_limit_enable: bool,
    /// Ceiling on current drawn from the power input.
    pub supply_current_limit: Amps,
    /// Whether the supply limit is enforced.
    pub supply_current_limit_enable: bool,
}

impl Default for CurrentLimitsConfigs {
    fn default() -> Self {
        Self {
            stator_current_limit: DEFAULT_STATOR_CURRENT_LIMIT,
            stator_current_limit_enable: true,
            supply_current_limit: DEFAULT_SUPPLY_CURRENT_LIMIT,
            supply_current_limit_enable: true,
        }
    }
}

impl CurrentLimitsConfigs {
    /// Set and enable the stator limit.
    pub fn limit_stator(&mut self, amps: Amps) {
        self.stator_current_limit = amps;
        self.stator_current_limit_enable = true;
    }

    /// Set and enable the supply limit.
    pub fn limit_supply(&mut self, amps: Amps) {
        self.supply_current_limit = amps;
        self.supply_current_limit_enable = true;
    }
}
