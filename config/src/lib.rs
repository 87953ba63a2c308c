//! # Config Crate
//!
//! Centralized configuration constants for the deck board mesh pipeline.
//! Board measurements, unit conversion, and geometric tolerances are defined
//! here so that the mesh generator and the browser surface never carry
//! literal measurement data of their own.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DECK_BOARD_PROFILE_INCHES, INCHES_TO_FEET};
//!
//! // Authoring data is in inches; the working unit is feet.
//! let [x, _y] = DECK_BOARD_PROFILE_INCHES[1];
//! let x_ft = x * INCHES_TO_FEET;
//! assert!(x_ft > 0.0 && x_ft < 1.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: Measurements defined once, used everywhere
//! - **Authoring Units**: Tables stay in inches, as measured
//! - **Immutable**: Values are constants or `Copy` snapshots, never mutated

pub mod constants;

#[cfg(test)]
mod tests;
