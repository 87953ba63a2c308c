//! # Profile Extrusion
//!
//! Sweeps a board profile along the Z axis, centred on `z = 0`.
//!
//! ## Pipeline
//!
//! ```text
//! ProfileDefinition + length
//!       ↓
//! rings     (4 rings x N vertices: near side, far side, near cap, far cap)
//!       ↓
//! topology  (6N side-wall indices, 6(N-2) cap-fan indices)
//!       ↓
//! assemble  (one index buffer, "side" and "cap" groups, vertex normals)
//!       ↓
//! Mesh
//! ```
//!
//! Extrusion is a pure function of its inputs: identical profile and length
//! give bit-identical buffers, and nothing is cached between calls.

mod assemble;
mod rings;
mod topology;


pub use assemble::assemble;
pub use rings::{generate_rings, Ring, RingVertices};
pub use topology::{cap_fan_indices, side_wall_indices};

use crate::error::MeshResult;
use crate::mesh::Mesh;
use crate::profile::ProfileDefinition;
use tracing::{debug, instrument};

/// Extrudes `profile` over `length`, from `z = -length/2` to `z = +length/2`.
///
/// # Errors
///
/// [`MeshError::InvalidDimension`](crate::MeshError::InvalidDimension) when
/// `length` is not positive.
///
/// # Example
///
/// ```rust
/// use deck_mesh::ops::extrude_profile;
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
/// let mesh = extrude_profile(&square, 10.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 16);
/// assert_eq!(mesh.index_count(), 36);
/// ```
#[instrument(skip(profile), fields(points = profile.len()))]
pub fn extrude_profile(profile: &ProfileDefinition, length: f64) -> MeshResult<Mesh> {
    let rings = generate_rings(profile, length)?;
    let side = side_wall_indices(profile.len())?;
    let cap = cap_fan_indices(profile.len())?;

    let mesh = assemble(rings, side, cap);
    debug!(
        vertices = mesh.vertex_count(),
        indices = mesh.index_count(),
        "profile extruded"
    );
    Ok(mesh)
}
