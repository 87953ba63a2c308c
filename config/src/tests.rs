//! # Tests for Config Constants
//!
//! Unit tests verifying the measurement tables and conversion factors.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON_TOLERANCE > 0.0, "EPSILON_TOLERANCE must be positive");
}

#[test]
fn test_epsilon_below_smallest_measurement() {
    // Smallest authored feature is the 1/16" crown
    assert!(EPSILON_TOLERANCE < 0.0625 * INCHES_TO_FEET);
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[test]
fn test_inches_to_feet() {
    assert_eq!(6.0 * INCHES_TO_FEET, 0.5);
    assert_eq!(24.0 * INCHES_TO_FEET, 2.0);
}

// =============================================================================
// PROFILE TABLE TESTS
// =============================================================================

#[test]
fn test_profile_has_enough_points() {
    assert!(DECK_BOARD_PROFILE_INCHES.len() >= MIN_PROFILE_POINTS);
}

#[test]
fn test_profile_below_top_face() {
    for [_, y] in DECK_BOARD_PROFILE_INCHES {
        assert!(y <= 0.0, "y offsets are measured down from the top");
    }
}

#[test]
fn test_profile_symmetric_about_centerline() {
    let xs: Vec<f64> = DECK_BOARD_PROFILE_INCHES.iter().map(|p| p[0]).collect();
    let min = xs.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(min, -max);
    assert_eq!(max - min, 5.5);
}

#[test]
fn test_profile_traced_clockwise() {
    let n = DECK_BOARD_PROFILE_INCHES.len();
    let twice_area: f64 = (0..n)
        .map(|i| {
            let [x0, y0] = DECK_BOARD_PROFILE_INCHES[i];
            let [x1, y1] = DECK_BOARD_PROFILE_INCHES[(i + 1) % n];
            x0 * y1 - x1 * y0
        })
        .sum();
    assert!(twice_area < 0.0, "profile must be clockwise");
}

// =============================================================================
// LAYOUT TESTS
// =============================================================================

#[test]
fn test_gap_smaller_than_board() {
    assert!(DECK_BOARD_GAP_INCHES > 0.0);
    assert!(DECK_BOARD_GAP_INCHES < 1.0);
}
