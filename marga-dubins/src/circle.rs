//! Turning circles and arc measurement.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};

use marga_geom::angles::normalize_angle;
use marga_geom::{Pose2, Vec2};

use crate::path::TurnDirection;

/// A turning circle with a fixed traversal direction.
///
/// One of the two constant-curvature circles tangent to a pose: the
/// vehicle sits on the circumference with its heading tangent to the
/// circle, and traverses it in `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectedCircle {
    /// Center of the circle
    pub center: Vec2,
    /// Radius in meters
    pub radius: f64,
    /// Traversal direction of the arc
    pub direction: TurnDirection,
}

/// Compute the left and right turning circles tangent to `pose`.
///
/// The left circle (counter-clockwise traversal) sits `radius` meters
/// along the heading rotated +90°; the right circle (clockwise) along
/// the opposite normal. Always succeeds for a finite pose and positive
/// radius.
pub fn turning_circles(pose: Pose2, radius: f64) -> (DirectedCircle, DirectedCircle) {
    let left_normal = pose.heading_vector().rotated(FRAC_PI_2);

    let left = DirectedCircle {
        center: pose.pos + left_normal * radius,
        radius,
        direction: TurnDirection::CounterClockwise,
    };
    let right = DirectedCircle {
        center: pose.pos - left_normal * radius,
        radius,
        direction: TurnDirection::Clockwise,
    };
    (left, right)
}

/// Arc length swept on `circle` from `start_angle` to `end_angle`, in
/// meters.
///
/// Angles are polar angles of points on the circumference, accepted in
/// any domain. The sweep is measured along the circle's traversal
/// direction, so a raw difference whose sign disagrees with the
/// direction is taken the long way around instead. The result is in
/// `[0, 2π·radius]`.
pub fn arc_length(circle: &DirectedCircle, start_angle: f64, end_angle: f64) -> f64 {
    let mut theta = normalize_angle(end_angle) - normalize_angle(start_angle);
    if theta < 0.0 && circle.direction == TurnDirection::CounterClockwise {
        theta += TAU;
    } else if theta > 0.0 && circle.direction == TurnDirection::Clockwise {
        theta -= TAU;
    }
    (theta * circle.radius).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn circle(direction: TurnDirection) -> DirectedCircle {
        DirectedCircle {
            center: Vec2::new(0.0, 0.0),
            radius: 2.0,
            direction,
        }
    }

    #[test]
    fn test_turning_circles_east_heading() {
        let pose = Pose2::new(0.0, 0.0, 0.0);
        let (left, right) = turning_circles(pose, 1.5);

        assert_relative_eq!(left.center.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(left.center.y, 1.5, epsilon = 1e-12);
        assert_eq!(left.direction, TurnDirection::CounterClockwise);

        assert_relative_eq!(right.center.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(right.center.y, -1.5, epsilon = 1e-12);
        assert_eq!(right.direction, TurnDirection::Clockwise);
    }

    #[test]
    fn test_turning_circles_north_heading() {
        let pose = Pose2::new(1.0, 2.0, FRAC_PI_2);
        let (left, right) = turning_circles(pose, 1.0);

        assert_relative_eq!(left.center.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(left.center.y, 2.0, epsilon = 1e-12);
        assert_relative_eq!(right.center.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(right.center.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_circles_pass_through_pose() {
        let pose = Pose2::new(-2.0, 0.5, 2.2);
        let (left, right) = turning_circles(pose, 0.7);
        assert_relative_eq!(left.center.distance(&pose.pos), 0.7, epsilon = 1e-12);
        assert_relative_eq!(right.center.distance(&pose.pos), 0.7, epsilon = 1e-12);
    }

    #[test]
    fn test_arc_length_quarter_turn() {
        // CCW from 0 to π/2: quarter circle
        let c = circle(TurnDirection::CounterClockwise);
        assert_relative_eq!(arc_length(&c, 0.0, FRAC_PI_2), FRAC_PI_2 * 2.0, epsilon = 1e-12);

        // Same endpoints clockwise: three quarters the other way
        let c = circle(TurnDirection::Clockwise);
        assert_relative_eq!(arc_length(&c, 0.0, FRAC_PI_2), 1.5 * PI * 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_arc_length_direction_correction_across_cut() {
        // Raw difference crosses the ±π branch cut
        let c = circle(TurnDirection::CounterClockwise);
        assert_relative_eq!(
            arc_length(&c, PI - 0.1, -PI + 0.1),
            0.2 * 2.0,
            epsilon = 1e-12
        );

        let c = circle(TurnDirection::Clockwise);
        assert_relative_eq!(
            arc_length(&c, -PI + 0.1, PI - 0.1),
            0.2 * 2.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_arc_length_zero_sweep() {
        let c = circle(TurnDirection::Clockwise);
        assert_relative_eq!(arc_length(&c, 1.0, 1.0), 0.0);
    }

    #[test]
    fn test_arc_length_any_input_domain() {
        let c = circle(TurnDirection::CounterClockwise);
        assert_relative_eq!(
            arc_length(&c, 0.0 + 4.0 * PI, FRAC_PI_2 - 6.0 * PI),
            FRAC_PI_2 * 2.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_arc_length_bounded_by_full_revolution() {
        let c = circle(TurnDirection::Clockwise);
        for i in 0..32 {
            for j in 0..32 {
                let a = -PI + TAU * i as f64 / 32.0;
                let b = -PI + TAU * j as f64 / 32.0;
                let len = arc_length(&c, a, b);
                assert!((0.0..=TAU * c.radius).contains(&len));
            }
        }
    }
}
