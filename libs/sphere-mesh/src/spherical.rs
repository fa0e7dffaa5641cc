//! # Spherical Coordinates
//!
//! Conversion from `(radius, theta, phi)` to Cartesian space. `theta` is the
//! azimuth around the z axis and `phi` the polar angle measured from +z.

use glam::DVec3;

/// A point in spherical coordinates.
///
/// # Example
///
/// ```rust
/// use sphere_mesh::SphericalPoint;
/// use glam::DVec3;
///
/// let pole = SphericalPoint::new(10.0, 0.0, 0.0).to_cartesian(DVec3::ZERO);
/// assert_eq!(pole, DVec3::new(0.0, 0.0, 10.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalPoint {
    /// Distance from the centre
    pub radius: f64,
    /// Azimuthal angle in radians
    pub theta: f64,
    /// Polar angle in radians, `0` at the north pole
    pub phi: f64,
}

impl SphericalPoint {
    /// Creates a spherical point.
    pub const fn new(radius: f64, theta: f64, phi: f64) -> Self {
        Self { radius, theta, phi }
    }

    /// Converts to Cartesian coordinates around `center`.
    #[inline]
    pub fn to_cartesian(self, center: DVec3) -> DVec3 {
        let ring_radius = self.radius * self.phi.sin();
        DVec3::new(
            ring_radius * self.theta.cos(),
            ring_radius * self.theta.sin(),
            self.radius * self.phi.cos(),
        ) + center
    }
}

/// Converts every point around a shared centre, preserving order.
pub fn to_cartesian_all(points: &[SphericalPoint], center: DVec3) -> Vec<DVec3> {
    points.iter().map(|p| p.to_cartesian(center)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_equator_points() {
        let p = SphericalPoint::new(3.0, FRAC_PI_2, FRAC_PI_2).to_cartesian(DVec3::ZERO);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 3.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_south_pole() {
        let p = SphericalPoint::new(2.0, 0.0, PI).to_cartesian(DVec3::ZERO);
        assert_relative_eq!(p.z, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_center_offset() {
        let center = DVec3::new(1.0, -2.0, 5.0);
        let p = SphericalPoint::new(1.0, 0.0, FRAC_PI_2).to_cartesian(center);
        assert_relative_eq!(p.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, -2.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_distance_is_radius() {
        let points: Vec<_> = (0..8)
            .map(|i| SphericalPoint::new(5.0, i as f64 * 0.7, i as f64 * 0.3))
            .collect();
        for p in to_cartesian_all(&points, DVec3::ZERO) {
            assert_relative_eq!(p.length(), 5.0, epsilon = 1e-12);
        }
    }
}
