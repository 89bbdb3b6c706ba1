//! Motor output configuration.

use super::signals::{InvertedValue, NeutralModeValue};

/// Direction and idle behavior of the motor output.
///
/// Defaults are the controller's own power-on values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorOutputConfigs {
    /// Which rotation counts as positive.
    pub inverted: InvertedValue,
    /// Behavior at zero command.
    pub neutral_mode: NeutralModeValue,
}
