//! Closed-loop gain slots.

use super::signals::GravityTypeValue;
use crate::error::SlotError;

/// Index of one of the controller's gain slots.
///
/// Advanced controllers store exactly three independent gain sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GainSlot {
    /// Slot 0.
    Slot0,
    /// Slot 1.
    Slot1,
    /// Slot 2.
    Slot2,
}

impl GainSlot {
    /// All slots in index order.
    pub const ALL: [GainSlot; 3] = [GainSlot::Slot0, GainSlot::Slot1, GainSlot::Slot2];

    /// Numeric index of the slot.
    #[inline]
    pub const fn index(self) -> u8 {
        match self {
            GainSlot::Slot0 => 0,
            GainSlot::Slot1 => 1,
            GainSlot::Slot2 => 2,
        }
    }
}

impl TryFrom<u8> for GainSlot {
    type Error = SlotError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(GainSlot::Slot0),
            1 => Ok(GainSlot::Slot1),
            2 => Ok(GainSlot::Slot2),
            other => Err(SlotError::Unsupported(other)),
        }
    }
}

/// Gains stored in a single slot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SlotConfigs {
    /// Proportional gain.
    pub kp: f64,
    /// Integral gain.
    pub ki: f64,
    /// Derivative gain.
    pub kd: f64,
    /// Static feed-forward (output to overcome friction).
    pub ks: f64,
    /// Velocity feed-forward.
    pub kv: f64,
    /// Acceleration feed-forward.
    pub ka: f64,
    /// Gravity feed-forward.
    pub kg: f64,
    /// How `kg` is applied.
    pub gravity_type: GravityTypeValue,
}

/// The controller's three gain slots.
///
/// Writes through [`GainSlots::slot_mut`] touch one slot only. The gravity type
/// is the single shared slot property: it is always written to every slot at
/// once through [`GainSlots::set_shared_gravity_type`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GainSlots([SlotConfigs; 3]);

impl GainSlots {
    /// Gains in one slot.
    #[inline]
    pub fn slot(&self, slot: GainSlot) -> &SlotConfigs {
        &self.0[slot.index() as usize]
    }

    /// Mutable gains in one slot.
    #[inline]
    pub fn slot_mut(&mut self, slot: GainSlot) -> &mut SlotConfigs {
        &mut self.0[slot.index() as usize]
    }

    /// Write the gravity type into all three slots.
    pub fn set_shared_gravity_type(&mut self, gravity_type: GravityTypeValue) {
        for slot in self.0.iter_mut() {
            slot.gravity_type = gravity_type;
        }
    }

    /// Iterate over `(slot, gains)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (GainSlot, &SlotConfigs)> {
        GainSlot::ALL.into_iter().zip(self.0.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_try_from() {
        assert_eq!(GainSlot::try_from(0), Ok(GainSlot::Slot0));
        assert_eq!(GainSlot::try_from(2), Ok(GainSlot::Slot2));
        assert_eq!(GainSlot::try_from(3), Err(SlotError::Unsupported(3)));
        assert_eq!(GainSlot::try_from(255), Err(SlotError::Unsupported(255)));
    }

    #[test]
    fn test_slot_index_round_trip() {
        for slot in GainSlot::ALL {
            assert_eq!(GainSlot::try_from(slot.index()), Ok(slot));
        }
    }

    #[test]
    fn test_slot_mut_isolated() {
        let mut slots = GainSlots::default();
        slots.slot_mut(GainSlot::Slot1).kp = 2.5;

        assert_eq!(slots.slot(GainSlot::Slot0), &SlotConfigs::default());
        assert_eq!(slots.slot(GainSlot::Slot1).kp, 2.5);
        assert_eq!(slots.slot(GainSlot::Slot2), &SlotConfigs::default());
    }

    #[test]
    fn test_shared_gravity_type() {
        let mut slots = GainSlots::default();
        slots.slot_mut(GainSlot::Slot0).kg = 0.4;
        slots.set_shared_gravity_type(GravityTypeValue::ArmCosine);

        for (_, gains) in slots.iter() {
            assert_eq!(gains.gravity_type, GravityTypeValue::ArmCosine);
        }
        assert_eq!(slots.slot(GainSlot::Slot0).kg, 0.4);
    }
}
