//! # Configuration Constants
//!
//! Tessellation defaults, precision values and file names shared by the
//! sphere mesh crates.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Tessellation**: Default and minimum slice/stack counts, radius
//! - **Files**: Names of the whitespace-delimited mesh files

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Numerical tolerance used when checking that generated points lie on a
/// sphere surface. Looser than [`EPSILON`] because `sin`/`cos` round-off
/// scales with the radius.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Radius used by the UV sphere generator when none is given.
pub const DEFAULT_RADIUS: f64 = 10.0;

/// Default number of longitudinal divisions.
pub const DEFAULT_SLICES: u32 = 4;

/// Default number of latitudinal divisions.
pub const DEFAULT_STACKS: u32 = 3;

/// Fewest slices that close a ring into a polygon.
pub const MIN_SLICES: u32 = 3;

/// Fewest stacks that produce at least one interior ring.
pub const MIN_STACKS: u32 = 2;

// =============================================================================
// FILE NAMES
// =============================================================================

/// Point coordinates, one `x y z` triple per line.
pub const POINTS_FILE: &str = "points";

/// Polar cap triangles of a surface mesh.
pub const TRIANGLES_FILE: &str = "triangles";

/// Body band quads of a surface mesh.
pub const QUADS_FILE: &str = "quads";

/// Tetrahedra with a trailing region tag.
pub const TETRAHEDRA_FILE: &str = "tetrahedrons";

/// Six-node cap prisms of a shell mesh.
pub const PRISMS_FILE: &str = "prisms";

/// Eight-node band cells of a shell mesh.
pub const PARALLELEPIPEDS_FILE: &str = "parallelepipeds";

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of mesh defaults that can be shared between crates.
///
/// # Examples
/// ```
/// use config::constants::MeshConfig;
/// let config = MeshConfig::default();
/// assert!(config.tolerance > 0.0);
/// assert_eq!(config.default_radius, 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshConfig {
    /// Numeric tolerance propagated into geometry checks.
    pub tolerance: f64,
    /// Slice count used when a caller does not pick one.
    pub default_slices: u32,
    /// Stack count used when a caller does not pick one.
    pub default_stacks: u32,
    /// Sphere radius used when a caller does not pick one.
    pub default_radius: f64,
}

impl MeshConfig {
    /// Builds a configuration enforcing strict validation of every field.
    ///
    /// # Examples
    /// ```
    /// use config::constants::MeshConfig;
    /// let cfg = MeshConfig::new(1.0e-6, 24, 12, 5.0).expect("valid config");
    /// assert_eq!(cfg.default_slices, 24);
    /// ```
    pub fn new(
        tolerance: f64,
        default_slices: u32,
        default_stacks: u32,
        default_radius: f64,
    ) -> Result<Self, ConfigError> {
        if tolerance.is_nan() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if default_slices < MIN_SLICES {
            return Err(ConfigError::InvalidSlices(default_slices));
        }
        if default_stacks < MIN_STACKS {
            return Err(ConfigError::InvalidStacks(default_stacks));
        }
        if !default_radius.is_finite() || default_radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(default_radius));
        }
        Ok(Self {
            tolerance,
            default_slices,
            default_stacks,
            default_radius,
        })
    }
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            default_slices: DEFAULT_SLICES,
            default_stacks: DEFAULT_STACKS,
            default_radius: DEFAULT_RADIUS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or NaN.
    InvalidTolerance(f64),
    /// Raised when the slice count cannot close a ring.
    InvalidSlices(u32),
    /// Raised when the stack count leaves no interior ring.
    InvalidStacks(u32),
    /// Raised when the radius is not a positive finite number.
    InvalidRadius(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidSlices(value) => {
                write!(f, "default_slices must be >= {MIN_SLICES}: {value}")
            }
            ConfigError::InvalidStacks(value) => {
                write!(f, "default_stacks must be >= {MIN_STACKS}: {value}")
            }
            ConfigError::InvalidRadius(value) => {
                write!(f, "default_radius must be positive and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Checks if two f64 values are approximately equal within `tolerance`.
///
/// # Example
///
/// ```rust
/// use config::constants::{approx_equal, EPSILON};
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11, EPSILON));
/// assert!(!approx_equal(1.0, 1.1, EPSILON));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

#[cfg(test)]
mod tests;
