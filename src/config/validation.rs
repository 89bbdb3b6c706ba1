//! Configuration validation.
//!
//! Numeric ranges are the controller's business and are not checked here.
//! Only the shape of slot declarations is.

use crate::error::{truncated, Error, Result, SlotError};

use super::slot::GainSlot;
use super::SystemConfig;

/// Validate a system configuration.
///
/// Checks:
/// - Every slot index names an existing gain slot
/// - No advanced motor declares the same slot twice
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (name, entry) in config.talon_fx.iter() {
        validate_talon_fx(name.as_str(), entry)?;
    }

    Ok(())
}

fn validate_talon_fx(name: &str, entry: &super::TalonFxEntry) -> Result<()> {
    let mut seen = [false; 3];

    for slot_entry in entry.slots.iter() {
        let slot = GainSlot::try_from(slot_entry.slot).map_err(Error::Slot)?;
        let seen_slot = &mut seen[slot.index() as usize];
        if *seen_slot {
            return Err(Error::Slot(SlotError::Duplicate {
                motor: truncated(name),
                slot: slot.index(),
            }));
        }
        *seen_slot = true;
    }

    Ok(())
}
