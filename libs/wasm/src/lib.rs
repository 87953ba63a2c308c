//! WASM-facing entry points for deck board geometry.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests use the `*_internal` helpers, which return
//! Rust error types directly and do not need a JS host.
//!
//! ```
//! let mesh = deck_wasm::extrude_board_internal(8.0).unwrap();
//! assert_eq!(mesh.vertex_count(), 44);
//! ```

use deck_mesh::profile::{deck_board_layout, deck_board_profile};
use deck_mesh::{extrude_profile, MeshError, ProfileDefinition};
use std::sync::OnceLock;
use wasm_bindgen::prelude::*;

mod mesh_handle;

pub use mesh_handle::MeshHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "deck-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// The standard board profile, built on first use and shared afterwards.
fn standard_profile() -> Result<&'static ProfileDefinition, MeshError> {
    static PROFILE: OnceLock<ProfileDefinition> = OnceLock::new();
    if let Some(profile) = PROFILE.get() {
        return Ok(profile);
    }
    let profile = deck_board_profile()?;
    Ok(PROFILE.get_or_init(|| profile))
}

/// Dimensions and spacing of the standard deck board, in feet.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const board = board_constants();
/// // const x = index * board.pitch_ft;
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConstants {
    width_ft: f64,
    thickness_ft: f64,
    total_height_ft: f64,
    groove_depth_ft: f64,
    groove_height_ft: f64,
    gap_ft: f64,
    pitch_ft: f64,
}

#[wasm_bindgen]
impl BoardConstants {
    /// Lateral extent of the board.
    #[wasm_bindgen(getter)]
    pub fn width_ft(&self) -> f64 {
        self.width_ft
    }

    /// Height of the board at its edges.
    #[wasm_bindgen(getter)]
    pub fn thickness_ft(&self) -> f64 {
        self.thickness_ft
    }

    /// Height of the board including the crown.
    #[wasm_bindgen(getter)]
    pub fn total_height_ft(&self) -> f64 {
        self.total_height_ft
    }

    /// Depth of the edge groove.
    #[wasm_bindgen(getter)]
    pub fn groove_depth_ft(&self) -> f64 {
        self.groove_depth_ft
    }

    /// Opening height of the edge groove.
    #[wasm_bindgen(getter)]
    pub fn groove_height_ft(&self) -> f64 {
        self.groove_height_ft
    }

    /// Gap between neighbouring boards.
    #[wasm_bindgen(getter)]
    pub fn gap_ft(&self) -> f64 {
        self.gap_ft
    }

    /// Centre-to-centre spacing of neighbouring boards.
    #[wasm_bindgen(getter)]
    pub fn pitch_ft(&self) -> f64 {
        self.pitch_ft
    }
}

/// Returns the standard board's dimensions and layout spacing.
///
/// # Errors
/// Returns a JavaScript error if the built-in profile fails validation.
#[wasm_bindgen]
pub fn board_constants() -> Result<BoardConstants, JsValue> {
    board_constants_internal().map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only helper behind [`board_constants`].
pub fn board_constants_internal() -> Result<BoardConstants, MeshError> {
    let profile = standard_profile()?;
    let layout = deck_board_layout(profile)?;
    let dims = profile.dimensions();

    Ok(BoardConstants {
        width_ft: dims.width,
        thickness_ft: dims.thickness,
        total_height_ft: dims.total_height,
        groove_depth_ft: dims.groove_depth,
        groove_height_ft: dims.groove_height,
        gap_ft: layout.gap,
        pitch_ft: layout.pitch,
    })
}

/// Extrudes the standard board over `length_ft` feet.
///
/// The board runs along Z, centred on the origin, with its top face at
/// `y = 0`.
///
/// # Errors
/// Returns a JavaScript error with a human-readable message when the
/// length is not positive.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // try {
/// //   const mesh = extrude_board(16.0);
/// //   console.log("Vertices:", mesh.vertex_count);
/// // } catch (error) {
/// //   console.error("Extrusion failed:", error);
/// // }
/// ```
#[wasm_bindgen]
pub fn extrude_board(length_ft: f64) -> Result<MeshHandle, JsValue> {
    extrude_board_internal(length_ft).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only helper behind [`extrude_board`].
pub fn extrude_board_internal(length_ft: f64) -> Result<MeshHandle, MeshError> {
    let profile = standard_profile()?;
    let mesh = extrude_profile(profile, length_ft)?;
    Ok(MeshHandle::from_mesh(&mesh))
}
