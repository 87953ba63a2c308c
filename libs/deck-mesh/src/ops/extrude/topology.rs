//! # Extrusion Topology
//!
//! Index lists for the side walls and the two end caps. Both depend only on
//! the number of profile points, never on positions.

use super::rings::Ring;
use crate::error::{MeshError, MeshResult};
use config::constants::MIN_PROFILE_POINTS;

/// Checks that `n` points can be triangulated and that all `4N` vertex
/// indices fit in a `u32`. Returns `n` as a `u32`.
fn check_point_count(n: usize) -> MeshResult<u32> {
    if n < MIN_PROFILE_POINTS {
        return Err(MeshError::invalid_topology(format!(
            "cannot triangulate a profile with {n} points"
        )));
    }
    n.checked_mul(Ring::ALL.len())
        .and_then(|vertices| u32::try_from(vertices).ok())
        .ok_or_else(|| {
            MeshError::invalid_topology(format!(
                "{n} profile points overflow 32-bit vertex indices"
            ))
        })?;
    // 4N fits, so N does too.
    Ok(n as u32)
}

/// Side-wall triangles between the near and far side rings.
///
/// Each profile edge `i -> i+1` (wrapping at the end) becomes a quad split
/// into `(i, N+i, N+j)` and `(i, N+j, j)`. With a clockwise profile those
/// triangles face away from the board. Returns `6N` indices.
pub fn side_wall_indices(n: usize) -> MeshResult<Vec<u32>> {
    let count = check_point_count(n)?;

    let near = Ring::NearSide.base(n) as u32;
    let far = Ring::FarSide.base(n) as u32;
    let mut indices = Vec::with_capacity(6 * n);

    for i in 0..count {
        let j = (i + 1) % count;

        // Two triangles per quad
        indices.extend_from_slice(&[near + i, far + i, far + j]);
        indices.extend_from_slice(&[near + i, far + j, near + j]);
    }

    Ok(indices)
}

/// End-cap triangles over the isolated cap rings.
///
/// Each cap is a fan around its ring's first vertex. The near cap keeps the
/// profile's clockwise order and faces `-z`; the far cap reverses each
/// triangle and faces `+z`. Returns `6(N-2)` indices, near cap first.
///
/// The fan is only correct when the first profile point can see every other
/// point; profiles with notches hidden from it get overlapping caps.
pub fn cap_fan_indices(n: usize) -> MeshResult<Vec<u32>> {
    let count = check_point_count(n)?;

    let near = Ring::NearCap.base(n) as u32;
    let far = Ring::FarCap.base(n) as u32;
    let mut indices = Vec::with_capacity(6 * (n - 2));

    for k in 1..count - 1 {
        indices.extend_from_slice(&[near, near + k, near + k + 1]);
    }
    for k in 1..count - 1 {
        indices.extend_from_slice(&[far, far + k + 1, far + k]);
    }

    Ok(indices)
}
