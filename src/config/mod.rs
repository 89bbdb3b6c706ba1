//! Configuration module for motor-controller-config.
//!
//! Parameter groups, the advanced-controller aggregate that unites them, and
//! loading of named motor declarations from TOML files (with `std` feature).

mod aggregate;
mod feedback;
mod limits;
#[cfg(feature = "std")]
mod loader;
mod motion;
mod motor;
mod output;
mod ramps;
pub mod signals;
mod slot;
mod system;
pub mod units;
mod validation;

pub use aggregate::{ParameterGroup, StagedGroups, TalonFxConfiguration};
pub use feedback::FeedbackConfigs;
pub use limits::{CurrentLimitsConfigs, DEFAULT_STATOR_CURRENT_LIMIT, DEFAULT_SUPPLY_CURRENT_LIMIT};
pub use motion::MotionMagicConfigs;
pub use motor::{RemoteSensorEntry, SlotEntry, TalonFxEntry};
pub use output::MotorOutputConfigs;
pub use ramps::{ClosedLoopRampsConfigs, OpenLoopRampsConfigs};
pub use slot::{GainSlot, GainSlots, SlotConfigs};
pub use system::SystemConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export tokens and unit types at config level
pub use signals::{FeedbackSensorSourceValue, GravityTypeValue, InvertedValue, NeutralMode, NeutralModeValue};
pub use units::{Amps, RotationsPerSecond, RotationsPerSecondSquared, Seconds};
