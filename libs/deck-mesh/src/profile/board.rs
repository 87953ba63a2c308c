//! The standard deck board and its placement constants.

use super::{ProfileDefinition, ProfileDimensions};
use crate::error::{MeshError, MeshResult};
use config::constants::{GlobalConfig, DECK_BOARD_GAP_INCHES, DECK_BOARD_PROFILE_INCHES};

/// Spacing constants for laying boards side by side.
///
/// Mesh generation never reads these; they are published for placement code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    /// Gap between neighbouring boards.
    pub gap: f64,
    /// Centre-to-centre distance, `width + gap`.
    pub pitch: f64,
}

impl BoardLayout {
    /// Derives the pitch from a board's width and the requested gap.
    pub fn new(dimensions: &ProfileDimensions, gap: f64) -> MeshResult<Self> {
        if !(gap >= 0.0) || !gap.is_finite() {
            return Err(MeshError::configuration(format!(
                "board gap must be non-negative, got {gap}"
            )));
        }
        Ok(Self {
            gap,
            pitch: dimensions.width + gap,
        })
    }
}

/// Builds the standard grooved deck board from the authored measurements.
///
/// # Example
///
/// ```rust
/// use deck_mesh::profile::deck_board_profile;
///
/// let profile = deck_board_profile().unwrap();
/// assert_eq!(profile.len(), 11);
/// assert!(profile.dimensions().groove_depth > 0.0);
/// ```
pub fn deck_board_profile() -> MeshResult<ProfileDefinition> {
    ProfileDefinition::from_authoring_units(&DECK_BOARD_PROFILE_INCHES, &GlobalConfig::default())
}

/// Builds the layout constants for `profile` using the standard board gap.
pub fn deck_board_layout(profile: &ProfileDefinition) -> MeshResult<BoardLayout> {
    let config = GlobalConfig::default();
    BoardLayout::new(profile.dimensions(), DECK_BOARD_GAP_INCHES * config.unit_scale)
}
