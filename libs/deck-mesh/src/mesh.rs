//! # Mesh Data Structure
//!
//! Render-ready output of an extrusion: positions, texture coordinates,
//! normals, a triangle index buffer, and the material groups that partition
//! that buffer.

use glam::{DVec2, DVec3};
use serde::Serialize;
use std::ops::Range;

/// Material a group of triangles is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialSlot {
    /// Long faces of the board; textured along the run.
    Side,
    /// Cut ends of the board; flat colour.
    Cap,
}

impl MaterialSlot {
    /// Stable material index for backends that bind materials by position.
    pub fn index(self) -> u32 {
        match self {
            MaterialSlot::Side => 0,
            MaterialSlot::Cap => 1,
        }
    }

    /// Returns the slot name.
    pub fn as_str(self) -> &'static str {
        match self {
            MaterialSlot::Side => "side",
            MaterialSlot::Cap => "cap",
        }
    }
}

/// A contiguous run of the index buffer drawn with one material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MeshGroup {
    /// First index (not triangle) of the run.
    pub start: usize,
    /// Number of indices in the run.
    pub count: usize,
    /// Material the run is drawn with.
    pub material: MaterialSlot,
}

impl MeshGroup {
    /// Returns the index-buffer range covered by this group.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.count
    }
}

/// An indexed triangle mesh with per-vertex UVs and normals.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the rendering boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    positions: Vec<DVec3>,
    uvs: Vec<DVec2>,
    normals: Vec<DVec3>,
    indices: Vec<u32>,
    groups: Vec<MeshGroup>,
}

impl Mesh {
    /// Builds a mesh and derives its vertex normals from the triangles.
    ///
    /// `positions` and `uvs` must have the same length.
    pub(crate) fn from_parts(
        positions: Vec<DVec3>,
        uvs: Vec<DVec2>,
        indices: Vec<u32>,
        groups: Vec<MeshGroup>,
    ) -> Self {
        let normals = vertex_normals(&positions, &indices);
        Self {
            positions,
            uvs,
            normals,
            indices,
            groups,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the length of the index buffer.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Returns the texture coordinates, one per vertex.
    #[inline]
    pub fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    /// Returns the unit vertex normals, one per vertex.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns the flat triangle index buffer.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Returns the material groups in index-buffer order.
    #[inline]
    pub fn groups(&self) -> &[MeshGroup] {
        &self.groups
    }

    /// Returns the first group drawn with `material`.
    pub fn group(&self, material: MaterialSlot) -> Option<&MeshGroup> {
        self.groups.iter().find(|g| g.material == material)
    }

    /// Returns the indices of the first group drawn with `material`.
    pub fn group_indices(&self, material: MaterialSlot) -> &[u32] {
        self.group(material)
            .and_then(|g| self.indices.get(g.range()))
            .unwrap_or(&[])
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.positions.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.positions[0];
        let mut max = self.positions[0];

        for v in &self.positions[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - Attribute buffers all have one entry per vertex
    /// - The index buffer holds whole triangles
    /// - All triangle indices are valid
    /// - Groups start at 0, follow each other without gaps or overlap, and
    ///   cover the whole index buffer
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.positions.len();
        if self.uvs.len() != vertex_count || self.normals.len() != vertex_count {
            return false;
        }

        if self.indices.len() % 3 != 0 {
            return false;
        }

        if self.indices.iter().any(|&i| i as usize >= vertex_count) {
            return false;
        }

        let mut cursor = 0;
        for group in &self.groups {
            if group.start != cursor {
                return false;
            }
            cursor += group.count;
        }

        cursor == self.indices.len()
    }

    /// Exports positions as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn positions_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.positions.len() * 3);
        for v in &self.positions {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports texture coordinates as f32 array for GPU.
    ///
    /// Returns flattened [u, v, u, v, ...] array.
    pub fn uvs_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.uvs.len() * 2);
        for uv in &self.uvs {
            result.push(uv.x as f32);
            result.push(uv.y as f32);
        }
        result
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.normals.len() * 3);
        for n in &self.normals {
            result.push(n.x as f32);
            result.push(n.y as f32);
            result.push(n.z as f32);
        }
        result
    }
}

/// Area-weighted vertex normals.
///
/// Each triangle adds its unnormalized face normal to its three corners, so
/// normals only blend between triangles that share a vertex index. Vertices
/// that are positionally coincident but separately indexed keep independent
/// normals.
fn vertex_normals(positions: &[DVec3], indices: &[u32]) -> Vec<DVec3> {
    let mut normals = vec![DVec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let v0 = positions[a];
        let v1 = positions[b];
        let v2 = positions[c];

        let normal = (v1 - v0).cross(v2 - v0);

        normals[a] += normal;
        normals[b] += normal;
        normals[c] += normal;
    }

    // Normalize
    for normal in &mut normals {
        let len = normal.length();
        if len > 0.0 {
            *normal /= len;
        }
    }

    normals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Mesh {
        Mesh::from_parts(
            vec![DVec3::ZERO, DVec3::X, DVec3::Y],
            vec![DVec2::ZERO, DVec2::X, DVec2::Y],
            vec![0, 1, 2],
            vec![MeshGroup {
                start: 0,
                count: 3,
                material: MaterialSlot::Side,
            }],
        )
    }

    #[test]
    fn test_mesh_counts() {
        let mesh = triangle();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.index_count(), 3);
        assert!(!mesh.is_empty());
    }

    #[test]
    fn test_mesh_normals_follow_winding() {
        let mesh = triangle();
        for n in mesh.normals() {
            assert_eq!(*n, DVec3::Z);
        }
    }

    #[test]
    fn test_coincident_vertices_keep_separate_normals() {
        // Two triangles meeting at a right angle, once sharing the edge
        // vertices and once with the edge duplicated.
        let positions = vec![
            DVec3::ZERO,
            DVec3::X,
            DVec3::Y,
            DVec3::ZERO,
            DVec3::X,
            DVec3::new(0.0, 0.0, -1.0),
        ];
        let uvs = vec![DVec2::ZERO; 6];
        let group = |count| {
            vec![MeshGroup {
                start: 0,
                count,
                material: MaterialSlot::Side,
            }]
        };

        let split = Mesh::from_parts(positions.clone(), uvs.clone(), vec![0, 1, 2, 3, 4, 5], group(6));
        assert_eq!(split.normals()[0], DVec3::Z);
        assert_eq!(split.normals()[3], DVec3::Y);

        let shared = Mesh::from_parts(positions, uvs, vec![0, 1, 2, 0, 1, 5], group(6));
        let blended = shared.normals()[0];
        assert!(blended.z > 0.0 && blended.y > 0.0);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mesh = triangle();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::ZERO);
        assert_eq!(max, DVec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_mesh_validate_valid() {
        assert!(triangle().validate());
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mesh = Mesh {
            indices: vec![0, 1, 3],
            ..triangle()
        };
        assert!(!mesh.validate());
    }

    #[test]
    fn test_mesh_validate_group_gap() {
        let mesh = Mesh {
            groups: vec![MeshGroup {
                start: 1,
                count: 2,
                material: MaterialSlot::Side,
            }],
            ..triangle()
        };
        assert!(!mesh.validate());
    }

    #[test]
    fn test_mesh_validate_group_short() {
        let mesh = Mesh {
            groups: Vec::new(),
            ..triangle()
        };
        assert!(!mesh.validate());
    }

    #[test]
    fn test_group_lookup() {
        let mesh = triangle();
        assert_eq!(mesh.group_indices(MaterialSlot::Side), &[0, 1, 2]);
        assert!(mesh.group(MaterialSlot::Cap).is_none());
        assert!(mesh.group_indices(MaterialSlot::Cap).is_empty());
    }

    #[test]
    fn test_mesh_exports_f32() {
        let mesh = triangle();
        assert_eq!(
            mesh.positions_f32(),
            vec![0.0f32, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]
        );
        assert_eq!(mesh.uvs_f32(), vec![0.0f32, 0.0, 1.0, 0.0, 0.0, 1.0]);
        assert_eq!(mesh.normals_f32()[2], 1.0);
    }

    #[test]
    fn test_material_slot_names() {
        assert_eq!(MaterialSlot::Side.as_str(), "side");
        assert_eq!(MaterialSlot::Cap.as_str(), "cap");
        assert_eq!(MaterialSlot::Side.index(), 0);
        assert_eq!(MaterialSlot::Cap.index(), 1);
    }
}
