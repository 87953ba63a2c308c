//! Centralized configuration values shared across the deck board pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Numerical tolerance used by profile validation and groove detection.
///
/// Values are in the working unit (feet); a tolerance of `1e-9` ft is far
/// below any meaningful board measurement.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

// =============================================================================
// UNIT CONSTANTS
// =============================================================================

/// Scale factor from the authoring unit (inches) to the working unit (feet).
///
/// # Examples
/// ```
/// use config::constants::INCHES_TO_FEET;
/// assert_eq!(12.0 * INCHES_TO_FEET, 1.0);
/// ```
pub const INCHES_TO_FEET: f64 = 1.0 / 12.0;

// =============================================================================
// PROFILE CONSTANTS
// =============================================================================

/// Smallest number of points that can describe a closed cross-section.
///
/// # Examples
/// ```
/// use config::constants::MIN_PROFILE_POINTS;
/// assert_eq!(MIN_PROFILE_POINTS, 3);
/// ```
pub const MIN_PROFILE_POINTS: usize = 3;

/// Cross-section of the standard grooved deck board, in inches.
///
/// `x` is the lateral offset from the board centerline and `y` the vertical
/// offset from the top of the crown (always `<= 0`). The outline is traced
/// clockwise (x right, y up) starting at the crown apex:
///
/// ```text
///              0
///   10 ------- * ------- 1        1/16" crown
///    |                   |
///    9                   2
///     >8               3<         V groove, 1/4" deep x 1/4" tall
///    7                   4
///    |                   |
///    6 ----------------- 5
/// ```
///
/// The apex must stay first: cap triangulation fans out from point 0 and
/// needs it to see every other point past the grooves.
///
/// # Examples
/// ```
/// use config::constants::DECK_BOARD_PROFILE_INCHES;
/// assert_eq!(DECK_BOARD_PROFILE_INCHES[0], [0.0, 0.0]);
/// assert_eq!(DECK_BOARD_PROFILE_INCHES.len(), 11);
/// ```
pub const DECK_BOARD_PROFILE_INCHES: [[f64; 2]; 11] = [
    [0.0, 0.0],
    [2.75, -0.0625],
    [2.75, -0.375],
    [2.5, -0.5],
    [2.75, -0.625],
    [2.75, -1.0],
    [-2.75, -1.0],
    [-2.75, -0.625],
    [-2.5, -0.5],
    [-2.75, -0.375],
    [-2.75, -0.0625],
];

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

/// Gap left between neighbouring boards, in inches.
///
/// Only board placement uses this; mesh generation ignores it.
///
/// # Examples
/// ```
/// use config::constants::{DECK_BOARD_GAP_INCHES, INCHES_TO_FEET};
/// let gap_ft = DECK_BOARD_GAP_INCHES * INCHES_TO_FEET;
/// assert!(gap_ft > 0.0);
/// ```
pub const DECK_BOARD_GAP_INCHES: f64 = 0.1875;

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Numeric tolerance propagated into profile validation.
    pub tolerance: f64,
    /// Multiplier converting authoring coordinates into the working unit.
    pub unit_scale: f64,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and unit scale.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 1.0).expect("valid config");
    /// assert_eq!(cfg.unit_scale, 1.0);
    /// ```
    pub fn new(tolerance: f64, unit_scale: f64) -> Result<Self, ConfigError> {
        if !(tolerance > 0.0) || !tolerance.is_finite() {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if !(unit_scale > 0.0) || !unit_scale.is_finite() {
            return Err(ConfigError::InvalidUnitScale(unit_scale));
        }
        Ok(Self {
            tolerance,
            unit_scale,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            unit_scale: INCHES_TO_FEET,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative, or not finite.
    InvalidTolerance(f64),
    /// Raised when the unit scale is zero, negative, or not finite.
    InvalidUnitScale(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidUnitScale(value) => {
                write!(f, "unit_scale must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
