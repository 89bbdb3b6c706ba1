//! # motor-controller-config
//!
//! Configuration builders for smart motor controllers, applied to the device in
//! one step at startup.
//!
//! ## Features
//!
//! - **Two controller tiers**: fixed configs for simple controllers, a fluent
//!   builder for advanced ones with gain slots, ramps, current limits, motion
//!   profiles and remote feedback
//! - **Defaults filled in**: anything not set keeps the controller's power-on value
//! - **Idempotent**: `configure` is a full overwrite and can be repeated
//! - **Vendor-neutral**: devices are reached through small capability traits
//! - **Configuration-driven**: declare motors in TOML files
//! - **no_std compatible**: core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use motor_controller_config::{GainSlot, GravityTypeValue, NeutralModeValue, TalonFxConfig};
//! use motor_controller_config::config::units::UnitExt;
//!
//! let arm = TalonFxConfig::new()
//!     .with_neutral_mode(NeutralModeValue::Brake)
//!     .with_current_limit(60.0_f64.amps())
//!     .with_ramp_rate(0.1_f64.seconds())
//!     .with_pid_constants(12.0, 0.0, 0.4, GainSlot::Slot0)
//!     .with_gravity_type(GravityTypeValue::ArmCosine);
//!
//! arm.configure(&mut arm_motor)?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[macro_use]
mod log;

// Core modules
pub mod config;
pub mod error;
pub mod motor;

// Re-exports for ergonomic API
pub use config::{
    FeedbackSensorSourceValue, GainSlot, GravityTypeValue, InvertedValue, NeutralMode,
    NeutralModeValue, ParameterGroup, SystemConfig, TalonFxConfiguration, validate_config,
};
pub use error::{Error, Result};
pub use motor::{TalonFxConfig, TalonSrxConfig, VictorSpxConfig};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Amps, RotationsPerSecond, RotationsPerSecondSquared, Seconds};
