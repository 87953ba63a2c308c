//! # Deck Mesh
//!
//! Procedural geometry for deck boards. A fixed 2D board cross-section is
//! extruded along a run length into vertex, texture-coordinate, normal, and
//! index buffers, partitioned into a textured "side" group and a flat "cap"
//! group.
//!
//! ## Architecture
//!
//! ```text
//! config (inches) → profile (feet, validated) → ops::extrude → Mesh → render backend
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use deck_mesh::{extrude_profile, profile::deck_board_profile, MaterialSlot};
//!
//! let profile = deck_board_profile()?;
//! let mesh = extrude_profile(&profile, 12.0)?;
//!
//! assert_eq!(mesh.vertex_count(), 4 * profile.len());
//! assert!(mesh.group(MaterialSlot::Cap).is_some());
//! # Ok::<(), deck_mesh::MeshError>(())
//! ```
//!
//! Profiles are immutable once built and extrusion keeps no state, so one
//! profile can feed any number of extrusions, on any number of threads.

pub mod error;
pub mod mesh;
pub mod ops;
pub mod profile;
pub mod render;

pub use error::{MeshError, MeshResult};
pub use mesh::{MaterialSlot, Mesh, MeshGroup};
pub use ops::extrude_profile;
pub use profile::{ProfileDefinition, ProfileDimensions};
pub use render::{submit, RenderBackend};
