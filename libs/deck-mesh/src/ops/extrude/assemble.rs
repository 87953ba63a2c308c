//! # Mesh Assembly
//!
//! Concatenates side and cap indices and records which material draws
//! which run. Vertices are passed through untouched; the duplicated cap
//! rings are deliberate and must not be merged.

use super::rings::RingVertices;
use crate::mesh::{MaterialSlot, Mesh, MeshGroup};

/// Builds the final mesh: side indices first, then cap indices.
pub fn assemble(rings: RingVertices, side: Vec<u32>, cap: Vec<u32>) -> Mesh {
    let side_count = side.len();
    let cap_count = cap.len();

    let mut indices = side;
    indices.extend_from_slice(&cap);

    let groups = vec![
        MeshGroup {
            start: 0,
            count: side_count,
            material: MaterialSlot::Side,
        },
        MeshGroup {
            start: side_count,
            count: cap_count,
            material: MaterialSlot::Cap,
        },
    ];

    Mesh::from_parts(rings.positions, rings.uvs, indices, groups)
}
