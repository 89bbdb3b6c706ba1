//! Motor module for motor-controller-config.
//!
//! Configuration builders for each controller tier and the capability traits
//! a device must implement to receive them.

mod builder;
pub mod device;
mod simple;

pub use builder::TalonFxConfig;
pub use device::{
    BasicMotorController, ConfigurableMotorController, CurrentLimitedMotorController, ErrorType,
};
pub use simple::{
    TalonSrxConfig, VictorSpxConfig, CONTINUOUS_CURRENT_MARGIN_AMPS,
    DEFAULT_PEAK_CURRENT_LIMIT_AMPS, PEAK_CURRENT_DURATION_MS,
};
