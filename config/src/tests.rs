//! # Tests for Config Constants
//!
//! Sanity checks on the constants shared across the workspace.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_surface_tolerance_not_tighter_than_epsilon() {
    assert!(EPSILON_TOLERANCE >= EPSILON);
}

#[test]
fn test_approx_equal_respects_tolerance() {
    assert!(approx_equal(5.0, 5.0 + 1e-12, EPSILON));
    assert!(!approx_equal(5.0, 5.001, EPSILON));
}

// =============================================================================
// TESSELLATION TESTS
// =============================================================================

#[test]
fn test_default_radius_matches_generator_script() {
    assert_eq!(DEFAULT_RADIUS, 10.0);
}

#[test]
fn test_defaults_are_not_degenerate() {
    assert!(DEFAULT_SLICES >= MIN_SLICES);
    assert!(DEFAULT_STACKS >= MIN_STACKS);
}

#[test]
fn test_min_slices_closes_a_ring() {
    // A ring needs at least 3 points to form a polygon
    assert!(MIN_SLICES >= 3);
}

// =============================================================================
// FILE NAME TESTS
// =============================================================================

#[test]
fn test_file_names_are_distinct() {
    let names = [
        POINTS_FILE,
        TRIANGLES_FILE,
        QUADS_FILE,
        TETRAHEDRA_FILE,
        PRISMS_FILE,
        PARALLELEPIPEDS_FILE,
    ];
    for (i, a) in names.iter().enumerate() {
        for b in &names[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
