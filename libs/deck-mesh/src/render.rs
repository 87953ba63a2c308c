//! # Rendering Backend Interface
//!
//! The narrow seam between generated geometry and whatever draws it. A
//! backend receives plain f32/u32 buffers and one bind call per material
//! group; it never sees glam types or how the mesh was built.

use crate::mesh::{Mesh, MeshGroup};

/// A consumer of mesh buffers, such as a GPU upload path or a scene graph.
pub trait RenderBackend {
    /// Error reported by the backend.
    type Error;

    /// Receives positions as `[x, y, z, ...]`.
    fn load_positions(&mut self, positions: &[f32]) -> Result<(), Self::Error>;

    /// Receives texture coordinates as `[u, v, ...]`.
    fn load_uvs(&mut self, uvs: &[f32]) -> Result<(), Self::Error>;

    /// Receives unit normals as `[nx, ny, nz, ...]`.
    fn load_normals(&mut self, normals: &[f32]) -> Result<(), Self::Error>;

    /// Receives the triangle index buffer.
    fn load_indices(&mut self, indices: &[u32]) -> Result<(), Self::Error>;

    /// Binds one index-buffer run to its material.
    fn bind_group(&mut self, group: &MeshGroup) -> Result<(), Self::Error>;
}

/// Hands `mesh` to `backend`: buffers first, then each group in order.
///
/// Stops at the first backend error.
pub fn submit<B: RenderBackend>(mesh: &Mesh, backend: &mut B) -> Result<(), B::Error> {
    backend.load_positions(&mesh.positions_f32())?;
    backend.load_uvs(&mesh.uvs_f32())?;
    backend.load_normals(&mesh.normals_f32())?;
    backend.load_indices(mesh.indices())?;
    for group in mesh.groups() {
        backend.bind_group(group)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::MaterialSlot;
    use crate::ops::extrude_profile;
    use crate::profile::deck_board_profile;

    #[derive(Default)]
    struct RecordingBackend {
        calls: Vec<String>,
        positions: usize,
        uvs: usize,
        indices: usize,
        groups: Vec<MeshGroup>,
        fail_on_bind: bool,
    }

    impl RenderBackend for RecordingBackend {
        type Error = String;

        fn load_positions(&mut self, positions: &[f32]) -> Result<(), String> {
            self.calls.push("positions".into());
            self.positions = positions.len();
            Ok(())
        }

        fn load_uvs(&mut self, uvs: &[f32]) -> Result<(), String> {
            self.calls.push("uvs".into());
            self.uvs = uvs.len();
            Ok(())
        }

        fn load_normals(&mut self, _normals: &[f32]) -> Result<(), String> {
            self.calls.push("normals".into());
            Ok(())
        }

        fn load_indices(&mut self, indices: &[u32]) -> Result<(), String> {
            self.calls.push("indices".into());
            self.indices = indices.len();
            Ok(())
        }

        fn bind_group(&mut self, group: &MeshGroup) -> Result<(), String> {
            if self.fail_on_bind {
                return Err("no material".into());
            }
            self.calls.push(format!("bind:{}", group.material.as_str()));
            self.groups.push(*group);
            Ok(())
        }
    }

    #[test]
    fn test_submit_loads_buffers_then_groups() {
        let mesh = extrude_profile(&deck_board_profile().unwrap(), 10.0).unwrap();
        let mut backend = RecordingBackend::default();

        submit(&mesh, &mut backend).unwrap();

        assert_eq!(
            backend.calls,
            vec!["positions", "uvs", "normals", "indices", "bind:side", "bind:cap"]
        );
        assert_eq!(backend.positions, mesh.vertex_count() * 3);
        assert_eq!(backend.uvs, mesh.vertex_count() * 2);
        assert_eq!(backend.indices, mesh.index_count());
        assert_eq!(backend.groups[0].material, MaterialSlot::Side);
        assert_eq!(backend.groups[1].material, MaterialSlot::Cap);
    }

    #[test]
    fn test_submit_propagates_backend_error() {
        let mesh = extrude_profile(&deck_board_profile().unwrap(), 10.0).unwrap();
        let mut backend = RecordingBackend {
            fail_on_bind: true,
            ..Default::default()
        };

        assert_eq!(submit(&mesh, &mut backend), Err("no material".to_string()));
    }
}
