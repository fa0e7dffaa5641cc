//! # Config Crate
//!
//! Centralized configuration constants for the sphere mesh tools.
//! Tessellation defaults, tolerances and the canonical mesh file names live
//! here so the geometry, I/O and CLI crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_RADIUS, DEFAULT_SLICES, DEFAULT_STACKS, EPSILON};
//!
//! // Points on the default sphere sit DEFAULT_RADIUS away from the origin
//! let distance: f64 = 10.0;
//! assert!((distance - DEFAULT_RADIUS).abs() < EPSILON);
//!
//! // Default tessellation is the smallest mesh with a body band
//! assert_eq!((DEFAULT_SLICES, DEFAULT_STACKS), (4, 3));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure values and a validated config snapshot
//! - **File Compatible**: File names match the plotting scripts' inputs

pub mod constants;

#[cfg(test)]
mod tests;
