//! # Board Profiles
//!
//! The closed 2D cross-section that gets extruded into a board, plus the
//! dimensions derived from it.
//!
//! ## Conventions
//!
//! - `x` is the lateral offset from the board centerline
//! - `y` is the vertical offset from the top face (`y <= 0`); points above
//!   the top face are rejected
//! - Points are traced clockwise with x right and y up, which is the same
//!   as clockwise when looking down the negative extrusion axis. Side walls
//!   only face outward under this winding, so construction rejects anything
//!   else.
//! - The outline is implicitly closed; the last point connects to the first.
//!
//! A profile is built once and only read afterwards, so one instance can be
//! shared by reference between any number of extrusions.

mod board;
mod dimensions;


pub use board::{deck_board_layout, deck_board_profile, BoardLayout};
pub use dimensions::ProfileDimensions;

use crate::error::{MeshError, MeshResult};
use config::constants::{GlobalConfig, EPSILON_TOLERANCE, MIN_PROFILE_POINTS};
use glam::DVec2;
use tracing::{debug, instrument};

/// One cross-section vertex in the working unit.
pub type ProfilePoint = DVec2;

/// An immutable, validated board cross-section.
///
/// # Example
///
/// ```rust
/// use deck_mesh::profile::ProfileDefinition;
/// use glam::DVec2;
///
/// let square = ProfileDefinition::new(vec![
///     DVec2::new(-0.5, 0.0),
///     DVec2::new(0.5, 0.0),
///     DVec2::new(0.5, -1.0),
///     DVec2::new(-0.5, -1.0),
/// ])
/// .unwrap();
/// assert_eq!(square.len(), 4);
/// assert_eq!(square.dimensions().width, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDefinition {
    points: Vec<ProfilePoint>,
    dimensions: ProfileDimensions,
    min_x: f64,
    signed_area: f64,
}

impl ProfileDefinition {
    /// Validates `points` (already in the working unit) with the default
    /// tolerance.
    ///
    /// # Errors
    ///
    /// [`MeshError::Configuration`] when there are fewer than 3 points, a
    /// coordinate is not finite, a point lies above the top face, or the
    /// outline is not clockwise.
    pub fn new(points: Vec<ProfilePoint>) -> MeshResult<Self> {
        Self::with_tolerance(points, EPSILON_TOLERANCE)
    }

    /// Scales authoring-unit coordinates by `config.unit_scale` and validates
    /// the result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use config::constants::GlobalConfig;
    /// use deck_mesh::profile::ProfileDefinition;
    ///
    /// // A 12" x 6" rectangle, authored in inches.
    /// let inches = [[-6.0, 0.0], [6.0, 0.0], [6.0, -6.0], [-6.0, -6.0]];
    /// let profile = ProfileDefinition::from_authoring_units(&inches, &GlobalConfig::default())
    ///     .unwrap();
    /// assert_eq!(profile.dimensions().width, 1.0);
    /// assert_eq!(profile.dimensions().total_height, 0.5);
    /// ```
    ///
    /// # Errors
    ///
    /// [`MeshError::Config`] when `config` does not pass
    /// [`GlobalConfig::new`], otherwise as [`ProfileDefinition::new`].
    pub fn from_authoring_units(raw: &[[f64; 2]], config: &GlobalConfig) -> MeshResult<Self> {
        let config = GlobalConfig::new(config.tolerance, config.unit_scale)?;
        let points = raw
            .iter()
            .map(|&[x, y]| DVec2::new(x * config.unit_scale, y * config.unit_scale))
            .collect();
        Self::with_tolerance(points, config.tolerance)
    }

    /// Validates `points` using an explicit tolerance for degenerate-area and
    /// flank detection. `tolerance` must be finite and positive.
    #[instrument(skip(points), fields(point_count = points.len()))]
    pub fn with_tolerance(points: Vec<ProfilePoint>, tolerance: f64) -> MeshResult<Self> {
        if !(tolerance > 0.0) || !tolerance.is_finite() {
            return Err(MeshError::configuration(format!(
                "tolerance must be finite and positive, got {tolerance}"
            )));
        }

        if points.len() < MIN_PROFILE_POINTS {
            return Err(MeshError::configuration(format!(
                "profile needs at least {MIN_PROFILE_POINTS} points, got {}",
                points.len()
            )));
        }

        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(MeshError::configuration(format!(
                "profile point {index} is not finite: {:?}",
                points[index]
            )));
        }

        if let Some(index) = points.iter().position(|p| p.y > tolerance) {
            return Err(MeshError::configuration(format!(
                "profile point {index} lies above the top face: {:?}",
                points[index]
            )));
        }

        let signed_area = shoelace_area(&points);
        if signed_area > tolerance {
            return Err(MeshError::configuration(format!(
                "profile must be traced clockwise, signed area is {signed_area}"
            )));
        }
        if signed_area >= -tolerance {
            return Err(MeshError::configuration("profile encloses no area"));
        }

        let dimensions = ProfileDimensions::measure(&points, tolerance);
        let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);

        debug!(
            width = dimensions.width,
            total_height = dimensions.total_height,
            signed_area,
            "profile validated"
        );

        Ok(Self {
            points,
            dimensions,
            min_x,
            signed_area,
        })
    }

    /// Returns the outline points in tracing order.
    #[inline]
    pub fn points(&self) -> &[ProfilePoint] {
        &self.points
    }

    /// Returns the number of points, `N`.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a validated profile has at least 3 points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the derived board dimensions.
    #[inline]
    pub fn dimensions(&self) -> &ProfileDimensions {
        &self.dimensions
    }

    /// Returns the smallest lateral offset of the outline.
    #[inline]
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    /// Returns the lateral extent of the outline.
    #[inline]
    pub fn width(&self) -> f64 {
        self.dimensions.width
    }

    /// Returns the shoelace area; negative for a clockwise outline.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        self.signed_area
    }
}

/// Signed area of a closed polygon; positive when counter-clockwise.
fn shoelace_area(points: &[DVec2]) -> f64 {
    let n = points.len();
    let twice: f64 = (0..n)
        .map(|i| points[i].perp_dot(points[(i + 1) % n]))
        .sum();
    0.5 * twice
}
