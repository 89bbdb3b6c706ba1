//! Unit types for physical quantities.
//!
//! Every value a controller accepts in physical units goes through one of these
//! newtypes, so a limit given in amps in one call cannot be confused with a
//! ramp period given in seconds in another.

use core::ops::Mul;

use serde::Deserialize;

/// Electrical current in amperes.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Amps(pub f64);

impl Amps {
    /// Create a new Amps value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

/// Time span in seconds.
///
/// Ramp periods are expressed as the time for the output to go from zero to
/// full command.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Seconds(pub f64);

impl Seconds {
    /// Zero seconds (no ramping).
    pub const ZERO: Self = Self(0.0);

    /// Create a new Seconds value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Create from milliseconds.
    #[inline]
    pub fn from_millis(millis: u32) -> Self {
        Self(millis as f64 / 1000.0)
    }
}

/// Mechanism velocity in rotations per second.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct RotationsPerSecond(pub f64);

impl RotationsPerSecond {
    /// Create a new RotationsPerSecond value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Create from rotations per minute.
    #[inline]
    pub fn from_rpm(rpm: f64) -> Self {
        Self(rpm / 60.0)
    }
}

impl Mul<f64> for RotationsPerSecond {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

/// Mechanism acceleration in rotations per second squared.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct RotationsPerSecondSquared(pub f64);

impl RotationsPerSecondSquared {
    /// Create a new RotationsPerSecondSquared value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Mul<f64> for RotationsPerSecondSquared {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

/// Extension trait for creating unit types from primitives.
pub trait UnitExt {
    /// Convert to Amps.
    fn amps(self) -> Amps;
    /// Convert to Seconds.
    fn seconds(self) -> Seconds;
    /// Convert to RotationsPerSecond.
    fn rps(self) -> RotationsPerSecond;
    /// Convert to RotationsPerSecondSquared.
    fn rps_squared(self) -> RotationsPerSecondSquared;
}

impl UnitExt for f64 {
    #[inline]
    fn amps(self) -> Amps {
        Amps(self)
    }

    #[inline]
    fn seconds(self) -> Seconds {
        Seconds(self)
    }

    #[inline]
    fn rps(self) -> RotationsPerSecond {
        RotationsPerSecond(self)
    }

    #[inline]
    fn rps_squared(self) -> RotationsPerSecondSquared {
        RotationsPerSecondSquared(self)
    }
}
