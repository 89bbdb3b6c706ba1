//! System configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use super::motor::TalonFxEntry;
use crate::motor::{TalonSrxConfig, VictorSpxConfig};

/// Root configuration structure from TOML.
///
/// Motors are grouped by controller tier and keyed by name.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// Current-limited simple controllers.
    #[serde(default)]
    pub talon_srx: FnvIndexMap<String<32>, TalonSrxConfig, 16>,

    /// Simple controllers without current limiting.
    #[serde(default)]
    pub victor_spx: FnvIndexMap<String<32>, VictorSpxConfig, 16>,

    /// Advanced controllers.
    #[serde(default)]
    pub talon_fx: FnvIndexMap<String<32>, TalonFxEntry, 16>,
}

impl SystemConfig {
    /// Get a current-limited simple controller configuration by name.
    pub fn talon_srx(&self, name: &str) -> Option<&TalonSrxConfig> {
        self.talon_srx
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// Get a basic simple controller configuration by name.
    pub fn victor_spx(&self, name: &str) -> Option<&VictorSpxConfig> {
        self.victor_spx
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// Get an advanced controller declaration by name.
    pub fn talon_fx(&self, name: &str) -> Option<&TalonFxEntry> {
        self.talon_fx
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// List every declared motor name, across all tiers.
    pub fn motor_names(&self) -> impl Iterator<Item = &str> {
        self.talon_srx
            .keys()
            .chain(self.victor_spx.keys())
            .chain(self.talon_fx.keys())
            .map(|s| s.as_str())
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            talon_srx: FnvIndexMap::new(),
            victor_spx: FnvIndexMap::new(),
            talon_fx: FnvIndexMap::new(),
        }
    }
}
