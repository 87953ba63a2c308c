//! # Ring Vertex Generation
//!
//! Places one copy of the profile at each end of the run for the side walls,
//! and a second, separately indexed copy at each end for the caps.
//!
//! ## Ring Isolation
//!
//! The cap rings sit exactly on top of the side rings. Keeping them as
//! distinct vertices stops the cut ends from sharing normals with the side
//! walls, so the ends shade flat while the sides shade smooth. Merging them
//! would visibly round off the board's cut edges.

use crate::error::{MeshError, MeshResult};
use crate::profile::ProfileDefinition;
use glam::{DVec2, DVec3};
use std::ops::Range;

/// The four vertex rings of an extruded profile, in buffer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ring {
    /// Side-wall ring at `z = -length / 2`.
    NearSide,
    /// Side-wall ring at `z = +length / 2`.
    FarSide,
    /// Cap ring at `z = -length / 2`.
    NearCap,
    /// Cap ring at `z = +length / 2`.
    FarCap,
}

impl Ring {
    /// All rings in buffer order.
    pub const ALL: [Ring; 4] = [Ring::NearSide, Ring::FarSide, Ring::NearCap, Ring::FarCap];

    /// Index of the ring's first vertex for a profile of `n` points.
    #[inline]
    pub fn base(self, n: usize) -> usize {
        let block = match self {
            Ring::NearSide => 0,
            Ring::FarSide => 1,
            Ring::NearCap => 2,
            Ring::FarCap => 3,
        };
        block * n
    }

    /// Vertex range of the ring for a profile of `n` points.
    #[inline]
    pub fn range(self, n: usize) -> Range<usize> {
        let base = self.base(n);
        base..base + n
    }

    /// True for the rings on the `-z` end.
    #[inline]
    pub fn is_near(self) -> bool {
        matches!(self, Ring::NearSide | Ring::NearCap)
    }
}

/// Positions and texture coordinates of all four rings.
#[derive(Debug, Clone, PartialEq)]
pub struct RingVertices {
    /// `4N` positions laid out ring by ring.
    pub positions: Vec<DVec3>,
    /// `4N` texture coordinates matching `positions`.
    pub uvs: Vec<DVec2>,
}

/// Generates the four rings of a profile extruded over `length`.
///
/// `u` runs from 0 at the profile's leftmost point to 1 at its rightmost;
/// `v` is 0 on the near end and 1 on the far end. Neither depends on
/// `length`, so the side texture stretches over the whole run.
///
/// # Errors
///
/// [`MeshError::InvalidDimension`] when `length` is not a positive, finite
/// number.
pub fn generate_rings(profile: &ProfileDefinition, length: f64) -> MeshResult<RingVertices> {
    if !(length > 0.0) || !length.is_finite() {
        return Err(MeshError::invalid_dimension(length));
    }

    let n = profile.len();
    let half = length / 2.0;
    let min_x = profile.min_x();
    let width = profile.width();

    let mut positions = Vec::with_capacity(4 * n);
    let mut uvs = Vec::with_capacity(4 * n);

    for ring in Ring::ALL {
        let (z, v) = if ring.is_near() { (-half, 0.0) } else { (half, 1.0) };
        for p in profile.points() {
            positions.push(DVec3::new(p.x, p.y, z));
            uvs.push(DVec2::new((p.x - min_x) / width, v));
        }
    }

    Ok(RingVertices { positions, uvs })
}
