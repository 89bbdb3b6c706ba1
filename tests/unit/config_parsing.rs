//! Unit tests for TOML configuration parsing.

use motor_controller_config::config::{
    FeedbackSensorSourceValue, GravityTypeValue, InvertedValue, NeutralMode, NeutralModeValue,
    SystemConfig,
};
use motor_controller_config::{Amps, RotationsPerSecond, Seconds};

/// Test parsing a current-limited simple controller with every field set.
#[test]
fn test_parse_talon_srx_config() {
    let toml_str = r#"
[talon_srx.intake]
inverted = true
neutral_mode = "brake"
peak_current_limit_amps = 40
open_loop_ramp_s = 0.25
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let intake = config.talon_srx("intake").expect("Motor not found");

    assert!(intake.inverted);
    assert_eq!(intake.neutral_mode, NeutralMode::Brake);
    assert_eq!(intake.peak_current_limit_amps, 40);
    assert_eq!(intake.open_loop_ramp, Seconds(0.25));
}

/// Test that omitted simple-controller fields fall back to defaults.
#[test]
fn test_parse_talon_srx_defaults() {
    let toml_str = r#"
[talon_srx.feeder]
inverted = false
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let feeder = config.talon_srx("feeder").expect("Motor not found");

    assert_eq!(feeder.neutral_mode, NeutralMode::EepromSetting);
    assert_eq!(feeder.peak_current_limit_amps, 80);
    assert_eq!(feeder.open_loop_ramp, Seconds(0.0));
}

/// Test parsing a basic simple controller.
#[test]
fn test_parse_victor_spx_config() {
    let toml_str = r#"
[victor_spx.conveyor]
inverted = true
neutral_mode = "coast"
open_loop_ramp_s = 0.5
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let conveyor = config.victor_spx("conveyor").expect("Motor not found");

    assert!(conveyor.inverted);
    assert_eq!(conveyor.neutral_mode, NeutralMode::Coast);
    assert_eq!(conveyor.open_loop_ramp, Seconds(0.5));
}

/// Test parsing an advanced controller with every group declared.
#[test]
fn test_parse_talon_fx_entry() {
    let toml_str = r#"
[talon_fx.elevator]
inverted = "clockwise_positive"
neutral_mode = "brake"
ramp_rate_s = 0.1
stator_current_limit_amps = 80.0
supply_current_limit_amps = 40.0
gravity_type = "elevator_static"
motion_profile = { cruise_velocity_rps = 4.0, acceleration_rps2 = 8.0 }
remote_sensor = { id = 21, source = "fused_cancoder", rotor_to_sensor_ratio = 12.0 }
sensor_to_mechanism_ratio = 1.5

[[talon_fx.elevator.slots]]
slot = 0
kp = 3.0
kd = 0.1
kg = 0.3
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let elevator = config.talon_fx("elevator").expect("Motor not found");

    assert_eq!(elevator.inverted, Some(InvertedValue::ClockwisePositive));
    assert_eq!(elevator.neutral_mode, Some(NeutralModeValue::Brake));
    assert_eq!(elevator.ramp_rate, Some(Seconds(0.1)));
    assert_eq!(elevator.stator_current_limit, Some(Amps(80.0)));
    assert_eq!(elevator.supply_current_limit, Some(Amps(40.0)));
    assert_eq!(elevator.gravity_type, Some(GravityTypeValue::ElevatorStatic));

    let profile = elevator.motion_profile.expect("Motion profile not found");
    assert_eq!(profile.cruise_velocity, RotationsPerSecond(4.0));

    let sensor = elevator.remote_sensor.expect("Remote sensor not found");
    assert_eq!(sensor.id, 21);
    assert_eq!(sensor.source, FeedbackSensorSourceValue::FusedCancoder);
    assert_eq!(sensor.rotor_to_sensor_ratio, 12.0);

    assert_eq!(elevator.sensor_to_mechanism_ratio, Some(1.5));
    assert_eq!(elevator.slots.len(), 1);
    assert_eq!(elevator.slots[0].kp, 3.0);
    assert_eq!(elevator.slots[0].ki, 0.0);
    assert_eq!(elevator.slots[0].kg, Some(0.3));
}

/// Test that a motion profile must give both ceilings.
#[test]
fn test_partial_motion_profile_rejected() {
    let toml_str = r#"
[talon_fx.arm]
motion_profile = { cruise_velocity_rps = 4.0 }
"#;

    let result: Result<SystemConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "Should reject a profile without acceleration");
}

/// Test that more than three slot entries do not fit.
#[test]
fn test_too_many_slots_rejected() {
    let toml_str = r#"
[[talon_fx.arm.slots]]
slot = 0
[[talon_fx.arm.slots]]
slot = 1
[[talon_fx.arm.slots]]
slot = 2
[[talon_fx.arm.slots]]
slot = 0
"#;

    let result: Result<SystemConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "Should reject a fourth slot entry");
}

/// Test that unknown hardware tokens are rejected during parsing.
#[test]
fn test_invalid_token_rejected() {
    let toml_str = r#"
[talon_fx.arm]
gravity_type = "pendulum"
"#;

    let result: Result<SystemConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "Should reject unknown gravity type");
}
