//! Error types for motor-controller-config.
//!
//! Device failures are not represented here: they are returned to the caller
//! as the device's own error type, unchanged.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for configuration loading and slot addressing.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or lookup error
    Config(ConfigError),
    /// Gain slot addressing error
    Slot(SlotError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Motor name not found in configuration
    MotorNotFound(heapless::String<32>),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Gain slot errors.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotError {
    /// Slot index outside the controller's slot set (0, 1, 2)
    Unsupported(u8),
    /// The same slot is declared twice for one motor
    Duplicate {
        /// Motor name
        motor: heapless::String<32>,
        /// Repeated slot index
        slot: u8,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Slot(e) => write!(f, "Gain slot error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::MotorNotFound(name) => write!(f, "Motor '{}' not found", name),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for SlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotError::Unsupported(index) => {
                write!(f, "Unsupported gain slot {}. Valid slots: 0, 1, 2", index)
            }
            SlotError::Duplicate { motor, slot } => {
                write!(f, "Motor '{}' declares gain slot {} more than once", motor, slot)
            }
        }
    }
}

/// Copy `s` into a bounded string, dropping whatever does not fit.
pub(crate) fn truncated<const N: usize>(s: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<SlotError> for Error {
    fn from(e: SlotError) -> Self {
        Error::Slot(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for SlotError {}
