//! Discretized sampling of a path into pose sequences.

use std::f64::consts::FRAC_PI_2;

use marga_geom::{Pose2, Vec2};

use crate::circle::{arc_length, DirectedCircle};
use crate::path::{DubinsPath, TurnDirection};

impl DubinsPath {
    /// Sample the path as a pose sequence, one pose roughly every
    /// `resolution_m` meters of travel.
    ///
    /// Each section contributes its exact boundary poses plus
    /// intermediate poses at `resolution_m` spacing along the arcs; the
    /// straight section contributes its two bounding poses. Section
    /// boundaries therefore appear twice in the output, which keeps
    /// every section individually complete for downstream consumers.
    ///
    /// A non-positive `resolution_m` yields boundary poses only.
    pub fn sample(&self, resolution_m: f64) -> Vec<Pose2> {
        let start_circle = DirectedCircle {
            center: self.pivot1(),
            radius: self.radius,
            direction: self.dir1,
        };
        let goal_circle = DirectedCircle {
            center: self.pivot2(),
            radius: self.radius,
            direction: self.dir2,
        };

        let turn1_start = (self.start.pos - start_circle.center).angle();
        let turn1_end = turn1_start + self.dir1.signum() * self.arc1;

        let turn2_end = (self.goal.pos - goal_circle.center).angle();
        let turn2_start = turn2_end - self.dir2.signum() * self.arc2;

        let straight_start = self.straight_start();
        let straight_end = self.straight_end();

        let mut poses = turn_poses(&start_circle, turn1_start, turn1_end, resolution_m);
        poses.extend(straight_poses(straight_start.pos, straight_end.pos));
        poses.extend(turn_poses(&goal_circle, turn2_start, turn2_end, resolution_m));
        poses
    }
}

/// Poses along an arc from `start_angle` to `end_angle`, traversed in
/// the circle's direction.
///
/// The vehicle heading at a circumference angle is that angle rotated
/// ∓90° for clockwise/counter-clockwise traversal.
fn turn_poses(
    circle: &DirectedCircle,
    start_angle: f64,
    end_angle: f64,
    resolution_m: f64,
) -> Vec<Pose2> {
    let heading_offset = match circle.direction {
        TurnDirection::Clockwise => -FRAC_PI_2,
        TurnDirection::CounterClockwise => FRAC_PI_2,
    };
    let pose_at = |angle: f64| {
        let (sin_a, cos_a) = angle.sin_cos();
        Pose2::from_parts(
            circle.center + Vec2::new(cos_a, sin_a) * circle.radius,
            angle + heading_offset,
        )
    };

    let sweep = arc_length(circle, start_angle, end_angle);
    let intermediate = if resolution_m > 0.0 {
        (sweep / resolution_m).floor() as usize
    } else {
        0
    };

    let mut poses = Vec::with_capacity(intermediate + 2);
    poses.push(pose_at(start_angle));

    let angle_step = circle.direction.signum() * resolution_m / circle.radius;
    let mut angle = start_angle;
    for _ in 0..intermediate {
        angle += angle_step;
        poses.push(pose_at(angle));
    }

    poses.push(pose_at(end_angle));
    poses
}

/// The two bounding poses of a straight section, headed along it.
fn straight_poses(start: Vec2, end: Vec2) -> Vec<Pose2> {
    let heading = (end - start).angle();
    vec![
        Pose2::from_parts(start, heading),
        Pose2::from_parts(end, heading),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_dubins_paths;
    use approx::assert_relative_eq;

    #[test]
    fn test_turn_poses_quarter_arc() {
        let circle = DirectedCircle {
            center: Vec2::new(0.0, 0.0),
            radius: 1.0,
            direction: TurnDirection::CounterClockwise,
        };
        let poses = turn_poses(&circle, 0.0, FRAC_PI_2, 0.1);

        // π/2 ≈ 1.571 of arc at 0.1 m spacing: 15 intermediates + 2 ends
        assert_eq!(poses.len(), 17);

        let first = poses.first().unwrap();
        assert_relative_eq!(first.pos.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(first.pos.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(first.heading, FRAC_PI_2, epsilon = 1e-12);

        let last = poses.last().unwrap();
        assert_relative_eq!(last.pos.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(last.pos.y, 1.0, epsilon = 1e-12);

        // Every sample sits on the circle
        for pose in &poses {
            assert_relative_eq!(pose.pos.length(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_turn_poses_clockwise_decreases_angle() {
        let circle = DirectedCircle {
            center: Vec2::new(0.0, 0.0),
            radius: 1.0,
            direction: TurnDirection::Clockwise,
        };
        let poses = turn_poses(&circle, FRAC_PI_2, 0.0, 0.2);

        for pair in poses.windows(2) {
            let a = (pair[0].pos - circle.center).angle();
            let b = (pair[1].pos - circle.center).angle();
            assert!(b <= a + 1e-12, "clockwise sweep must not increase angle");
        }
    }

    #[test]
    fn test_straight_poses_heading() {
        let poses = straight_poses(Vec2::new(0.0, 0.0), Vec2::new(3.0, 3.0));
        assert_eq!(poses.len(), 2);
        assert_relative_eq!(poses[0].heading, std::f64::consts::FRAC_PI_4, epsilon = 1e-12);
        assert_relative_eq!(poses[1].pos.x, 3.0);
    }

    #[test]
    fn test_sample_straight_dominant_path() {
        let start = Pose2::new(0.0, 0.0, 0.0);
        let goal = Pose2::new(10.0, 0.0, 0.0);
        let paths = generate_dubins_paths(start, goal, 1.0);

        let rr = paths
            .iter()
            .find(|p| p.dir1 == TurnDirection::Clockwise && p.dir2 == TurnDirection::Clockwise)
            .unwrap();
        let poses = rr.sample(0.5);

        // Zero arcs: two boundary poses per turn plus the straight pair
        assert_eq!(poses.len(), 6);
        for pose in &poses {
            assert_relative_eq!(pose.pos.y, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_sample_poses_lie_on_path() {
        let start = Pose2::new(0.0, 0.0, 0.0);
        let goal = Pose2::new(4.0, 3.0, 2.0);
        let paths = generate_dubins_paths(start, goal, 1.0);
        assert!(!paths.is_empty());

        for path in &paths {
            let poses = path.sample(0.05);
            assert!(poses.len() >= 6);

            let first = poses.first().unwrap();
            assert_relative_eq!(first.pos.x, start.pos.x, epsilon = 1e-9);
            assert_relative_eq!(first.pos.y, start.pos.y, epsilon = 1e-9);
            let last = poses.last().unwrap();
            assert_relative_eq!(last.pos.x, goal.pos.x, epsilon = 1e-9);
            assert_relative_eq!(last.pos.y, goal.pos.y, epsilon = 1e-9);

            // Exactly the discretization contract: per-arc intermediates
            // plus two boundary poses per section
            let expected = (path.arc1 * path.radius / 0.05).floor() as usize
                + (path.arc2 * path.radius / 0.05).floor() as usize
                + 6;
            assert_eq!(poses.len(), expected);
        }
    }

    #[test]
    fn test_sample_non_positive_resolution_gives_boundaries_only() {
        let start = Pose2::new(0.0, 0.0, 0.0);
        let goal = Pose2::new(10.0, 0.0, 0.0);
        let paths = generate_dubins_paths(start, goal, 1.0);
        let poses = paths[0].sample(0.0);
        assert_eq!(poses.len(), 6);
    }
}
