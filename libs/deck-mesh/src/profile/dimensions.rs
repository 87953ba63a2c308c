//! Board measurements derived from a profile outline.

use glam::DVec2;

/// Derived dimensions of a board cross-section, in the working unit.
///
/// Grooves are measured on the `+x` flank: the flank is every point lying on
/// the maximum lateral offset, and the groove is whatever cuts in from that
/// flank between its highest and lowest points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileDimensions {
    /// Lateral extent of the outline.
    pub width: f64,
    /// Vertical extent measured along the flank.
    pub thickness: f64,
    /// Vertical extent of the whole outline.
    pub total_height: f64,
    /// How far the groove cuts in from the flank; 0 without a groove.
    pub groove_depth: f64,
    /// Opening of the groove between its lips; 0 without a groove.
    pub groove_height: f64,
}

impl ProfileDimensions {
    /// Measures a validated outline.
    ///
    /// `points` must be non-empty; callers validate before measuring.
    pub(crate) fn measure(points: &[DVec2], tolerance: f64) -> Self {
        let mut min = DVec2::splat(f64::INFINITY);
        let mut max = DVec2::splat(f64::NEG_INFINITY);
        for p in points {
            min = min.min(*p);
            max = max.max(*p);
        }
        let center_x = 0.5 * (min.x + max.x);

        let flank: Vec<f64> = points
            .iter()
            .filter(|p| (p.x - max.x).abs() <= tolerance)
            .map(|p| p.y)
            .collect();
        let flank_top = flank.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let flank_bottom = flank.iter().copied().fold(f64::INFINITY, f64::min);

        let groove: Vec<DVec2> = points
            .iter()
            .filter(|p| {
                p.x > center_x
                    && p.x < max.x - tolerance
                    && p.y < flank_top - tolerance
                    && p.y > flank_bottom + tolerance
            })
            .copied()
            .collect();

        let (groove_depth, groove_height) = if groove.is_empty() {
            (0.0, 0.0)
        } else {
            let inner_x = groove.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
            let groove_top = groove.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
            let groove_bottom = groove.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);

            // Lips are the flank points closest to the groove on either side
            let upper_lip = flank
                .iter()
                .copied()
                .filter(|&y| y >= groove_top)
                .fold(f64::INFINITY, f64::min);
            let lower_lip = flank
                .iter()
                .copied()
                .filter(|&y| y <= groove_bottom)
                .fold(f64::NEG_INFINITY, f64::max);

            (max.x - inner_x, upper_lip - lower_lip)
        };

        Self {
            width: max.x - min.x,
            thickness: flank_top - flank_bottom,
            total_height: max.y - min.y,
            groove_depth,
            groove_height,
        }
    }
}
