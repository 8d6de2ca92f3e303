//! Oriented 2D configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::angles::{angle_diff, normalize_angle_positive};
use crate::vec2::Vec2;

/// A rigid 2D configuration: position in meters plus heading in radians.
///
/// The heading is stored exactly as given; construction performs no
/// normalization, so callers may compose headings across several turns
/// without losing winding information. Functions that need a canonical
/// domain normalize internally.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose2 {
    /// Position in meters
    pub pos: Vec2,
    /// Heading in radians, counter-clockwise positive, any finite domain
    pub heading: f64,
}

impl Pose2 {
    /// Create a pose from coordinates and heading.
    #[inline]
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self {
            pos: Vec2::new(x, y),
            heading,
        }
    }

    /// Create a pose from a position vector and heading.
    #[inline]
    pub fn from_parts(pos: Vec2, heading: f64) -> Self {
        Self { pos, heading }
    }

    /// Unit vector pointing along the heading.
    #[inline]
    pub fn heading_vector(&self) -> Vec2 {
        let (sin_h, cos_h) = self.heading.sin_cos();
        Vec2::new(cos_h, sin_h)
    }

    /// Interpolate between two poses.
    ///
    /// Blends position linearly and heading along the shortest angular
    /// path. `t` should be in [0, 1] where 0 returns `a` and 1 returns
    /// `b`. The interpolated heading is reported in `[0, 2π)`.
    pub fn interpolate(a: &Pose2, b: &Pose2, t: f64) -> Pose2 {
        let heading = normalize_angle_positive(a.heading + t * angle_diff(a.heading, b.heading));
        Pose2::from_parts(a.pos + (b.pos - a.pos) * t, heading)
    }
}

impl fmt::Display for Pose2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.pos.x, self.pos.y, self.heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn test_heading_not_normalized_at_construction() {
        let p = Pose2::new(0.0, 0.0, 3.0 * PI);
        assert_eq!(p.heading, 3.0 * PI);
    }

    #[test]
    fn test_heading_vector() {
        let east = Pose2::new(0.0, 0.0, 0.0).heading_vector();
        assert_relative_eq!(east.x, 1.0);
        assert_relative_eq!(east.y, 0.0);

        let north = Pose2::new(0.0, 0.0, FRAC_PI_2).heading_vector();
        assert_relative_eq!(north.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(north.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_interpolate_endpoints() {
        let a = Pose2::new(0.0, 0.0, 0.5);
        let b = Pose2::new(2.0, 4.0, 1.5);

        let p = Pose2::interpolate(&a, &b, 0.0);
        assert_relative_eq!(p.pos.x, 0.0);
        assert_relative_eq!(p.pos.y, 0.0);
        assert_relative_eq!(p.heading, 0.5);

        let p = Pose2::interpolate(&a, &b, 1.0);
        assert_relative_eq!(p.pos.x, 2.0);
        assert_relative_eq!(p.pos.y, 4.0);
        assert_relative_eq!(p.heading, 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_interpolate_midpoint() {
        let a = Pose2::new(0.0, 0.0, 0.0);
        let b = Pose2::new(2.0, 4.0, FRAC_PI_2);

        let p = Pose2::interpolate(&a, &b, 0.5);
        assert_relative_eq!(p.pos.x, 1.0);
        assert_relative_eq!(p.pos.y, 2.0);
        assert_relative_eq!(p.heading, PI / 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_interpolate_heading_wraps_shortest_path() {
        let a = Pose2::new(0.0, 0.0, PI - 0.1);
        let b = Pose2::new(0.0, 0.0, -PI + 0.1);

        let p = Pose2::interpolate(&a, &b, 0.5);
        // Midway across the ±π cut, reported in [0, 2π)
        assert_relative_eq!(p.heading, PI, epsilon = 1e-12);
    }

    #[test]
    fn test_interpolate_heading_domain() {
        let a = Pose2::new(0.0, 0.0, -0.3);
        let b = Pose2::new(1.0, 0.0, -0.1);

        for i in 0..=10 {
            let p = Pose2::interpolate(&a, &b, i as f64 / 10.0);
            assert!((0.0..TAU).contains(&p.heading), "heading out of [0, 2π): {}", p.heading);
        }
    }
}
