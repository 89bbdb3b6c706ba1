//! Builder for advanced controller configurations.

use crate::config::units::{Amps, RotationsPerSecond, RotationsPerSecondSquared, Seconds};
use crate::config::{
    ClosedLoopRampsConfigs, FeedbackSensorSourceValue, GainSlot, GravityTypeValue,
    InvertedValue, MotionMagicConfigs, NeutralModeValue, OpenLoopRampsConfigs,
    ParameterGroup, SlotConfigs, StagedGroups, SystemConfig, TalonFxConfiguration,
    TalonFxEntry,
};
use crate::error::{truncated, ConfigError, Error, Result, SlotError};

use super::device::ConfigurableMotorController;

/// Builder for an advanced controller configuration.
///
/// Every `with_*` call writes one parameter group and stages it whole into the
/// aggregate, so calls may come in any order and the last write to a field
/// wins. Groups never touched keep the controller's power-on defaults.
///
/// # Example
///
/// ```rust,ignore
/// use motor_controller_config::{GainSlot, TalonFxConfig};
/// use motor_controller_config::config::units::UnitExt;
///
/// let elevator = TalonFxConfig::new()
///     .with_neutral_mode(NeutralModeValue::Brake)
///     .with_current_limit(80.0_f64.amps())
///     .with_pid_constants(3.0, 0.0, 0.1, GainSlot::Slot0)
///     .with_motion_profile(4.0_f64.rps(), 8.0_f64.rps_squared());
///
/// elevator.configure(&mut motor)?;
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[must_use]
pub struct TalonFxConfig {
    configuration: TalonFxConfiguration,
    staged: StagedGroups,
}

impl TalonFxConfig {
    /// Create a builder with every group at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure from a parsed declaration.
    ///
    /// # Errors
    ///
    /// Returns `SlotError::Unsupported` if the entry names a slot outside 0..=2.
    pub fn from_entry(entry: &TalonFxEntry) -> Result<Self> {
        let mut builder = Self::new();

        if let Some(inverted) = entry.inverted {
            builder = builder.with_inverted_value(inverted);
        }
        if let Some(mode) = entry.neutral_mode {
            builder = builder.with_neutral_mode(mode);
        }
        if let Some(ramp) = entry.ramp_rate {
            builder = builder.with_ramp_rate(ramp);
        }
        if let Some(amps) = entry.stator_current_limit {
            builder = builder.with_current_limit(amps);
        }
        if let Some(amps) = entry.supply_current_limit {
            builder = builder.with_supply_current_limit(amps);
        }
        if let Some(profile) = entry.motion_profile {
            builder = builder.with_motion_profile(profile.cruise_velocity, profile.acceleration);
        }
        if let Some(sensor) = entry.remote_sensor {
            builder = builder.with_remote_sensor(sensor.id, sensor.source, sensor.rotor_to_sensor_ratio);
        }
        if let Some(ratio) = entry.sensor_to_mechanism_ratio {
            builder = builder.with_sensor_to_mechanism_ratio(ratio);
        }

        for slot_entry in entry.slots.iter() {
            let slot = GainSlot::try_from(slot_entry.slot).map_err(Error::Slot)?;
            builder = builder.with_pid_constants(slot_entry.kp, slot_entry.ki, slot_entry.kd, slot);
            builder = match slot_entry.kg {
                Some(kg) => builder.with_ff_gravity_constants(
                    slot_entry.ks,
                    slot_entry.kv,
                    slot_entry.ka,
                    kg,
                    slot,
                ),
                None => builder.with_ff_constants(slot_entry.ks, slot_entry.kv, slot_entry.ka, slot),
            };
        }

        if let Some(gravity_type) = entry.gravity_type {
            builder = builder.with_gravity_type(gravity_type);
        }

        Ok(builder)
    }

    /// Configure from SystemConfig by motor name.
    pub fn from_config(config: &SystemConfig, motor_name: &str) -> Result<Self> {
        let entry = config.talon_fx(motor_name).ok_or_else(|| {
            Error::Config(ConfigError::MotorNotFound(
                truncated(motor_name),
            ))
        })?;

        Self::from_entry(entry)
    }

    fn stage(mut self, group: ParameterGroup, write: impl FnOnce(&mut TalonFxConfiguration)) -> Self {
        write(&mut self.configuration);
        self.staged.mark(group);
        trace!("staged {}", group);
        self
    }

    fn stage_slot(self, slot: GainSlot, write: impl FnOnce(&mut SlotConfigs)) -> Self {
        self.stage(slot.into(), |config| write(config.slots.slot_mut(slot)))
    }

    /// Set PID gains in one slot.
    pub fn with_pid_constants(self, kp: f64, ki: f64, kd: f64, slot: GainSlot) -> Self {
        self.stage_slot(slot, |gains| {
            gains.kp = kp;
            gains.ki = ki;
            gains.kd = kd;
        })
    }

    /// Set PID gains in a slot given by raw index.
    ///
    /// # Errors
    ///
    /// An index outside 0..=2 leaves the configuration untouched and hands the
    /// builder back together with `SlotError::Unsupported`.
    pub fn try_with_pid_constants(
        self,
        kp: f64,
        ki: f64,
        kd: f64,
        index: u8,
    ) -> core::result::Result<Self, (Self, Error)> {
        match GainSlot::try_from(index) {
            Ok(slot) => Ok(self.with_pid_constants(kp, ki, kd, slot)),
            Err(e) => Err(self.reject_slot(e)),
        }
    }

    /// Set static, velocity and acceleration feed-forward in one slot.
    ///
    /// The gravity gain of the slot is left as it is.
    pub fn with_ff_constants(self, ks: f64, kv: f64, ka: f64, slot: GainSlot) -> Self {
        self.stage_slot(slot, |gains| {
            gains.ks = ks;
            gains.kv = kv;
            gains.ka = ka;
        })
    }

    /// Set every feed-forward gain, gravity included, in one slot.
    pub fn with_ff_gravity_constants(self, ks: f64, kv: f64, ka: f64, kg: f64, slot: GainSlot) -> Self {
        self.stage_slot(slot, |gains| {
            gains.ks = ks;
            gains.kv = kv;
            gains.ka = ka;
            gains.kg = kg;
        })
    }

    /// Set feed-forward gains in a slot given by raw index.
    ///
    /// # Errors
    ///
    /// Same policy as [`TalonFxConfig::try_with_pid_constants`].
    pub fn try_with_ff_constants(
        self,
        ks: f64,
        kv: f64,
        ka: f64,
        kg: Option<f64>,
        index: u8,
    ) -> core::result::Result<Self, (Self, Error)> {
        match GainSlot::try_from(index) {
            Ok(slot) => Ok(match kg {
                Some(kg) => self.with_ff_gravity_constants(ks, kv, ka, kg, slot),
                None => self.with_ff_constants(ks, kv, ka, slot),
            }),
            Err(e) => Err(self.reject_slot(e)),
        }
    }

    fn reject_slot(self, e: SlotError) -> (Self, Error) {
        if let SlotError::Unsupported(index) = &e {
            warn!("rejected write to unsupported gain slot {}", *index);
        }
        (self, Error::Slot(e))
    }

    /// Set the gravity type.
    ///
    /// This is the one slot property shared by all slots: it is written to
    /// slots 0, 1 and 2 at once, whichever of them hold gains.
    pub fn with_gravity_type(self, gravity_type: GravityTypeValue) -> Self {
        GainSlot::ALL.into_iter().fold(self, |builder, slot| {
            builder.stage_slot(slot, |gains| gains.gravity_type = gravity_type)
        })
    }

    /// Set which rotation direction is positive.
    pub fn with_inverted_value(self, inverted: InvertedValue) -> Self {
        self.stage(ParameterGroup::MotorOutput, |config| {
            config.motor_output.inverted = inverted;
        })
    }

    /// Set the behavior at zero command.
    pub fn with_neutral_mode(self, mode: NeutralModeValue) -> Self {
        self.stage(ParameterGroup::MotorOutput, |config| {
            config.motor_output.neutral_mode = mode;
        })
    }

    /// Set one ramp period for duty-cycle, voltage and torque control, open
    /// and closed loop alike.
    pub fn with_ramp_rate(self, ramp: Seconds) -> Self {
        self.stage(ParameterGroup::OpenLoopRamps, |config| {
            config.open_loop_ramps = OpenLoopRampsConfigs::uniform(ramp);
        })
        .stage(ParameterGroup::ClosedLoopRamps, |config| {
            config.closed_loop_ramps = ClosedLoopRampsConfigs::uniform(ramp);
        })
    }

    /// Set and enable the stator current limit.
    pub fn with_current_limit(self, amps: Amps) -> Self {
        self.stage(ParameterGroup::CurrentLimits, |config| {
            config.current_limits.limit_stator(amps);
        })
    }

    /// Set and enable the supply current limit.
    pub fn with_supply_current_limit(self, amps: Amps) -> Self {
        self.stage(ParameterGroup::CurrentLimits, |config| {
            config.current_limits.limit_supply(amps);
        })
    }

    /// Set the profiled-motion velocity and acceleration ceilings.
    pub fn with_motion_profile(
        self,
        cruise_velocity: RotationsPerSecond,
        acceleration: RotationsPerSecondSquared,
    ) -> Self {
        self.stage(ParameterGroup::MotionMagic, |config| {
            config.motion_magic = MotionMagicConfigs::new(cruise_velocity, acceleration);
        })
    }

    /// Read feedback from a remote sensor.
    pub fn with_remote_sensor(
        self,
        id: i32,
        source: FeedbackSensorSourceValue,
        rotor_to_sensor_ratio: f64,
    ) -> Self {
        self.stage(ParameterGroup::Feedback, |config| {
            config.feedback.feedback_remote_sensor_id = id;
            config.feedback.feedback_sensor_source = source;
            config.feedback.rotor_to_sensor_ratio = rotor_to_sensor_ratio;
        })
    }

    /// Set the sensor-to-mechanism gear ratio.
    pub fn with_sensor_to_mechanism_ratio(self, ratio: f64) -> Self {
        self.stage(ParameterGroup::Feedback, |config| {
            config.feedback.sensor_to_mechanism_ratio = ratio;
        })
    }

    /// The configuration that `configure` pushes.
    #[inline]
    pub fn configuration(&self) -> &TalonFxConfiguration {
        &self.configuration
    }

    /// Groups written since the builder was created.
    #[inline]
    pub fn staged(&self) -> StagedGroups {
        self.staged
    }

    /// Push the whole configuration to the device in one transaction.
    ///
    /// Works with no prior `with_*` calls (everything at defaults) and may be
    /// repeated: each call is a full overwrite.
    ///
    /// # Errors
    ///
    /// Returns the device's error unchanged. Nothing is retried.
    pub fn configure<D>(&self, device: &mut D) -> core::result::Result<(), D::Error>
    where
        D: ConfigurableMotorController,
    {
        debug!(
            "applying controller configuration, staged groups {=u16:b}",
            self.staged.bits()
        );
        device.apply_configuration(&self.configuration)
    }
}
