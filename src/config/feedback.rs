//! Sensor feedback wiring.

use super::signals::FeedbackSensorSourceValue;

/// Which sensor feeds the controller and how it relates to the mechanism.
///
/// Remote-sensor wiring and the sensor-to-mechanism ratio are orthogonal and
/// can be set in either order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FeedbackConfigs {
    /// CAN id of the remote sensor; ignored for the rotor sensor.
    pub feedback_remote_sensor_id: i32,
    /// Sensor the controller reads.
    pub feedback_sensor_source: FeedbackSensorSourceValue,
    /// Rotor rotations per sensor rotation.
    pub rotor_to_sensor_ratio: f64,
    /// Sensor rotations per mechanism rotation.
    pub sensor_to_mechanism_ratio: f64,
}

impl Default for FeedbackConfigs {
    fn default() -> Self {
        Self {
            feedback_remote_sensor_id: 0,
            feedback_sensor_source: FeedbackSensorSourceValue::RotorSensor,
            rotor_to_sensor_ratio: 1.0,
            sensor_to_mechanism_ratio: 1.0,
        }
    }
}

impl FeedbackConfigs {
    /// Rotor rotations per mechanism rotation.
    pub fn rotor_to_mechanism_ratio(&self) -> f64 {
        self.rotor_to_sensor_ratio * self.sensor_to_mechanism_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotor_to_mechanism_ratio() {
        let feedback = FeedbackConfigs {
            rotor_to_sensor_ratio: 12.0,
            sensor_to_mechanism_ratio: 1.5,
            ..Default::default()
        };
        assert_eq!(feedback.rotor_to_mechanism_ratio(), 18.0);
    }
}
