//! Unit tests for configuration validation.

use motor_controller_config::config::SystemConfig;
use motor_controller_config::error::SlotError;
use motor_controller_config::{parse_config, validate_config, Error};

/// Test that every in-range slot passes validation.
#[test]
fn test_valid_slots_pass() {
    let toml_str = r#"
[[talon_fx.arm.slots]]
slot = 0
kp = 1.0
[[talon_fx.arm.slots]]
slot = 2
kp = 2.0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test that an out-of-range slot fails loudly.
#[test]
fn test_unsupported_slot_fails() {
    let toml_str = r#"
[[talon_fx.arm.slots]]
slot = 4
kp = 1.0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert_eq!(
        validate_config(&config),
        Err(Error::Slot(SlotError::Unsupported(4)))
    );
}

/// Test that a slot declared twice names the motor.
#[test]
fn test_duplicate_slot_fails() {
    let toml_str = r#"
[[talon_fx.wrist.slots]]
slot = 1
kp = 1.0
[[talon_fx.wrist.slots]]
slot = 1
kp = 2.0
"#;

    match parse_config(toml_str) {
        Err(Error::Slot(SlotError::Duplicate { motor, slot })) => {
            assert_eq!(motor.as_str(), "wrist");
            assert_eq!(slot, 1);
        }
        other => panic!("Expected duplicate slot error, got {:?}", other),
    }
}

/// Test that simple controllers need no validation beyond parsing.
#[test]
fn test_out_of_range_values_pass_through() {
    let toml_str = r#"
[talon_srx.intake]
peak_current_limit_amps = -20

[talon_fx.arm]
stator_current_limit_amps = -5.0
"#;

    let config = parse_config(toml_str).expect("Range checks belong to the device");
    assert_eq!(config.talon_srx("intake").unwrap().peak_current_limit_amps, -20);
}
