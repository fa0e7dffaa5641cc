//! Tests for the validated mesh configuration.

use super::*;

#[test]
fn default_config_is_valid() {
    let cfg = MeshConfig::default();
    assert!(cfg.tolerance > 0.0);
    assert!(cfg.default_slices >= MIN_SLICES);
    assert!(cfg.default_stacks >= MIN_STACKS);
    assert_eq!(
        MeshConfig::new(
            cfg.tolerance,
            cfg.default_slices,
            cfg.default_stacks,
            cfg.default_radius
        ),
        Ok(cfg)
    );
}

#[test]
fn new_validates_inputs() {
    assert_eq!(
        MeshConfig::new(0.0, 4, 3, 10.0).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        MeshConfig::new(1.0e-9, 2, 3, 10.0).unwrap_err(),
        ConfigError::InvalidSlices(2)
    );
    assert_eq!(
        MeshConfig::new(1.0e-9, 4, 1, 10.0).unwrap_err(),
        ConfigError::InvalidStacks(1)
    );
    assert_eq!(
        MeshConfig::new(1.0e-9, 4, 3, -1.0).unwrap_err(),
        ConfigError::InvalidRadius(-1.0)
    );
}

#[test]
fn nan_tolerance_is_rejected() {
    assert!(matches!(
        MeshConfig::new(f64::NAN, 4, 3, 10.0),
        Err(ConfigError::InvalidTolerance(_))
    ));
}

#[test]
fn error_messages_name_the_field() {
    let message = ConfigError::InvalidStacks(1).to_string();
    assert!(message.contains("default_stacks"));
    assert!(message.contains('1'));
}
