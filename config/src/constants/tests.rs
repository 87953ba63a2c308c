//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane and positive.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let cfg = GlobalConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// ```
#[test]
fn default_constants_are_valid() {
    let cfg = GlobalConfig::default();
    assert!(cfg.tolerance > 0.0);
    assert_eq!(cfg.unit_scale, INCHES_TO_FEET);
}

/// Validates the builder rejects invalid values.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// assert!(GlobalConfig::new(0.0, 1.0).is_err());
/// ```
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(0.0, 1.0).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        GlobalConfig::new(1.0e-9, -2.0).unwrap_err(),
        ConfigError::InvalidUnitScale(-2.0)
    );
    assert!(GlobalConfig::new(f64::NAN, 1.0).is_err());
    assert!(GlobalConfig::new(1.0e-9, f64::INFINITY).is_err());
}

#[test]
fn config_error_messages_name_the_field() {
    assert!(ConfigError::InvalidTolerance(0.0)
        .to_string()
        .contains("tolerance"));
    assert!(ConfigError::InvalidUnitScale(0.0)
        .to_string()
        .contains("unit_scale"));
}
