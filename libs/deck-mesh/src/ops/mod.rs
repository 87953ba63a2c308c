//! # Mesh Operations
//!
//! Operations that turn board profiles into meshes.

pub mod extrude;

pub use extrude::extrude_profile;
