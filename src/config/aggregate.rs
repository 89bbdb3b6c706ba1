//! Complete advanced-controller configuration.

use super::feedback::FeedbackConfigs;
use super::limits::CurrentLimitsConfigs;
use super::motion::MotionMagicConfigs;
use super::output::MotorOutputConfigs;
use super::ramps::{ClosedLoopRampsConfigs, OpenLoopRampsConfigs};
use super::slot::{GainSlot, GainSlots};

/// One independently staged group of settings.
///
/// Each group maps onto a single configuration frame on the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParameterGroup {
    /// Gains in slot 0.
    Slot0,
    /// Gains in slot 1.
    Slot1,
    /// Gains in slot 2.
    Slot2,
    /// Inversion and neutral mode.
    MotorOutput,
    /// Open-loop ramp periods.
    OpenLoopRamps,
    /// Closed-loop ramp periods.
    ClosedLoopRamps,
    /// Stator and supply current limits.
    CurrentLimits,
    /// Profiled-motion limits.
    MotionMagic,
    /// Sensor feedback wiring.
    Feedback,
}

impl ParameterGroup {
    /// Every group, in frame order.
    pub const ALL: [ParameterGroup; 9] = [
        ParameterGroup::Slot0,
        ParameterGroup::Slot1,
        ParameterGroup::Slot2,
        ParameterGroup::MotorOutput,
        ParameterGroup::OpenLoopRamps,
        ParameterGroup::ClosedLoopRamps,
        ParameterGroup::CurrentLimits,
        ParameterGroup::MotionMagic,
        ParameterGroup::Feedback,
    ];

    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

impl From<GainSlot> for ParameterGroup {
    fn from(slot: GainSlot) -> Self {
        match slot {
            GainSlot::Slot0 => ParameterGroup::Slot0,
            GainSlot::Slot1 => ParameterGroup::Slot1,
            GainSlot::Slot2 => ParameterGroup::Slot2,
        }
    }
}

/// Set of groups staged since the builder was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StagedGroups(u16);

impl StagedGroups {
    /// Mark a group as staged.
    #[inline]
    pub fn mark(&mut self, group: ParameterGroup) {
        self.0 |= group.bit();
    }

    /// Whether a group has been staged.
    #[inline]
    pub fn contains(&self, group: ParameterGroup) -> bool {
        self.0 & group.bit() != 0
    }

    /// Whether nothing has been staged.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of staged groups.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Raw bitmask, bit `n` set for the `n`th entry of [`ParameterGroup::ALL`].
    #[inline]
    pub fn bits(&self) -> u16 {
        self.0
    }

    /// Iterate over staged groups in frame order.
    pub fn iter(&self) -> impl Iterator<Item = ParameterGroup> + '_ {
        ParameterGroup::ALL
            .into_iter()
            .filter(move |group| self.contains(*group))
    }
}

/// Every configuration frame of an advanced controller.
///
/// Groups not touched by a builder keep the controller's power-on defaults.
/// Applying this value is a full overwrite, never a delta.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TalonFxConfiguration {
    /// Closed-loop gains.
    pub slots: GainSlots,
    /// Inversion and neutral mode.
    pub motor_output: MotorOutputConfigs,
    /// Open-loop ramp periods.
    pub open_loop_ramps: OpenLoopRampsConfigs,
    /// Closed-loop ramp periods.
    pub closed_loop_ramps: ClosedLoopRampsConfigs,
    /// Current limits.
    pub current_limits: CurrentLimitsConfigs,
    /// Profiled-motion limits.
    pub motion_magic: MotionMagicConfigs,
    /// Sensor feedback wiring.
    pub feedback: FeedbackConfigs,
}
