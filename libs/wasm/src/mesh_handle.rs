//! # Mesh Handle
//!
//! WASM-friendly wrapper for mesh data that can be transferred to JavaScript.

use deck_mesh::{Mesh, MeshGroup};
use wasm_bindgen::prelude::*;

/// A handle to an extruded board mesh that can be accessed from JavaScript.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = extrude_board(12.0);
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.vertices(), 3));
/// geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.normals(), 3));
/// geometry.setAttribute('uv', new THREE.BufferAttribute(mesh.uvs(), 2));
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
///
/// // One draw call per material: [start, count, materialIndex, ...]
/// const groups = mesh.groups();
/// for (let i = 0; i < groups.length; i += 3) {
///   geometry.addGroup(groups[i], groups[i + 1], groups[i + 2]);
/// }
/// new THREE.Mesh(geometry, [sideMaterial, capMaterial]);
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Texture coordinates as [u, v, u, v, ...]
    uvs: Vec<f32>,
    /// Vertex normals as [nx, ny, nz, ...]
    normals: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    indices: Vec<u32>,
    /// Material groups in index-buffer order
    groups: Vec<MeshGroup>,
    /// Number of vertices
    vertex_count: u32,
    /// Number of triangles
    triangle_count: u32,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Length: vertex_count * 3
    pub fn vertices(&self) -> Vec<f32> {
        self.vertices.clone()
    }

    /// Returns the texture coordinates as a Float32Array.
    ///
    /// Length: vertex_count * 2
    pub fn uvs(&self) -> Vec<f32> {
        self.uvs.clone()
    }

    /// Returns the vertex normals as a Float32Array.
    ///
    /// Length: vertex_count * 3
    pub fn normals(&self) -> Vec<f32> {
        self.normals.clone()
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Length: triangle_count * 3
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }

    /// Returns the material groups as a Uint32Array of
    /// `[start, count, materialIndex, ...]` triples.
    pub fn groups(&self) -> Vec<u32> {
        self.groups
            .iter()
            .flat_map(|g| [g.start as u32, g.count as u32, g.material.index()])
            .collect()
    }

    /// Returns the material groups as a JSON array of
    /// `{ start, count, material }` objects.
    ///
    /// # Errors
    /// Returns a JavaScript error if serialization fails.
    pub fn groups_json(&self) -> Result<String, JsValue> {
        self.groups_json_internal()
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Returns true if the mesh is empty.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

impl MeshHandle {
    /// Creates a MeshHandle from a Mesh.
    pub fn from_mesh(mesh: &Mesh) -> Self {
        Self {
            vertices: mesh.positions_f32(),
            uvs: mesh.uvs_f32(),
            normals: mesh.normals_f32(),
            indices: mesh.indices().to_vec(),
            groups: mesh.groups().to_vec(),
            vertex_count: mesh.vertex_count() as u32,
            triangle_count: mesh.triangle_count() as u32,
        }
    }

    /// Host-side JSON serialization of the material groups.
    pub fn groups_json_internal(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.groups)
    }
}
