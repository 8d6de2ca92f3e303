//! Dubins path representation and evaluation.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt;

use marga_geom::angles::{angle_diff, normalize_angle_positive};
use marga_geom::{Pose2, Vec2};

use crate::error::{DubinsError, Result};

/// Direction a circular arc is traversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnDirection {
    /// Right turn, negative angular sweep
    Clockwise,
    /// Left turn, positive angular sweep
    CounterClockwise,
}

impl TurnDirection {
    /// Sign of the angular sweep along this direction.
    #[inline]
    pub fn signum(self) -> f64 {
        match self {
            TurnDirection::Clockwise => -1.0,
            TurnDirection::CounterClockwise => 1.0,
        }
    }

    /// Short mnemonic, `"CW"` or `"CCW"`.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            TurnDirection::Clockwise => "CW",
            TurnDirection::CounterClockwise => "CCW",
        }
    }
}

impl fmt::Display for TurnDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Angle swept a fraction `t` of the way from `from` toward `to`,
/// respecting the rotational sense of `dir`.
///
/// When the shortest signed difference already points the commanded
/// way, the interpolation follows it; otherwise the sweep takes the
/// complementary (long) arc. The result is normalized to `[0, 2π)`.
pub(crate) fn interp_angle(from: f64, to: f64, t: f64, dir: TurnDirection) -> f64 {
    let diff = angle_diff(from, to);

    let swept = if (diff < 0.0 && dir == TurnDirection::Clockwise)
        || (diff > 0.0 && dir == TurnDirection::CounterClockwise)
    {
        from + t * diff
    } else {
        let sign = if diff > 0.0 {
            1.0
        } else if diff < 0.0 {
            -1.0
        } else {
            0.0
        };
        from + t * -sign * (TAU - diff.abs())
    };

    normalize_angle_positive(swept)
}

/// A turn-straight-turn path between two oriented poses.
///
/// Stores only the defining parameters; pivots, transition poses and
/// lengths are derived on demand. Instances come from the CSC builder
/// functions behind [`generate_dubins_paths`](crate::generate_dubins_paths)
/// and are immutable afterwards.
///
/// Valid paths satisfy `arc1 >= 0`, `arc2 >= 0` and `radius > 0`; the
/// generator never emits a path whose tangent construction was
/// infeasible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DubinsPath {
    /// Start pose
    pub start: Pose2,
    /// Goal pose
    pub goal: Pose2,
    /// Radius, in meters, of both turns
    pub radius: f64,
    /// Sweep, in radians, of the first turn (direction in `dir1`)
    pub arc1: f64,
    /// Sweep, in radians, of the second turn (direction in `dir2`)
    pub arc2: f64,
    /// Direction of the first turn
    pub dir1: TurnDirection,
    /// Direction of the second turn
    pub dir2: TurnDirection,
}

impl DubinsPath {
    /// Assemble a path from explicit parameters.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start: Pose2,
        goal: Pose2,
        radius: f64,
        arc1: f64,
        arc2: f64,
        dir1: TurnDirection,
        dir2: TurnDirection,
    ) -> Self {
        Self {
            start,
            goal,
            radius,
            arc1,
            arc2,
            dir1,
            dir2,
        }
    }

    /// Recover a path from a sampled pose sequence.
    ///
    /// A pose sequence does not identify the generating arcs, so this
    /// always fails with [`DubinsError::PoseSequenceUnsupported`]; build
    /// paths through the generator instead.
    pub fn from_waypoints(_waypoints: &[Pose2]) -> Result<Self> {
        Err(DubinsError::PoseSequenceUnsupported)
    }

    /// Center of the start turning circle.
    pub fn pivot1(&self) -> Vec2 {
        let normal = self
            .start
            .heading_vector()
            .rotated(self.dir1.signum() * FRAC_PI_2);
        self.start.pos + normal * self.radius
    }

    /// Center of the goal turning circle.
    pub fn pivot2(&self) -> Vec2 {
        let normal = self
            .goal
            .heading_vector()
            .rotated(self.dir2.signum() * FRAC_PI_2);
        self.goal.pos + normal * self.radius
    }

    /// Pose at which the first turn hands over to the straight section.
    pub fn straight_start(&self) -> Pose2 {
        let pivot = self.pivot1();
        let to_start = self.start.pos - pivot;
        let dir = self.dir1.signum();
        Pose2::from_parts(
            pivot + to_start.rotated(dir * self.arc1),
            self.start.heading + dir * self.arc1,
        )
    }

    /// Pose at which the straight section hands over to the second turn.
    pub fn straight_end(&self) -> Pose2 {
        let pivot = self.pivot2();
        let to_goal = self.goal.pos - pivot;
        let dir = self.dir2.signum();
        Pose2::from_parts(
            pivot + to_goal.rotated(-dir * self.arc2),
            self.goal.heading - dir * self.arc2,
        )
    }

    /// Normalized parameter at the start of the path.
    #[inline]
    pub fn t0(&self) -> f64 {
        0.0
    }

    /// Normalized parameter at the turn1 → straight transition.
    ///
    /// `0.0` for a zero-length path.
    pub fn t1(&self) -> f64 {
        let len = self.length();
        if len == 0.0 {
            return 0.0;
        }
        self.arc1 * self.radius / len
    }

    /// Normalized parameter at the straight → turn2 transition.
    ///
    /// `0.0` for a zero-length path.
    pub fn t2(&self) -> f64 {
        let len = self.length();
        if len == 0.0 {
            return 0.0;
        }
        (len - self.arc2 * self.radius) / len
    }

    /// Normalized parameter at the end of the path.
    #[inline]
    pub fn t3(&self) -> f64 {
        1.0
    }

    /// Total path length in meters: turn1 + straight + turn2.
    pub fn length(&self) -> f64 {
        self.arc1 * self.radius
            + self.straight_start().pos.distance(&self.straight_end().pos)
            + self.arc2 * self.radius
    }

    /// Pose a fraction `t` of the way along the path.
    ///
    /// `t` is clamped to `[0, 1]`: `at(0.0)` returns `start` and
    /// `at(1.0)` returns `goal` exactly. Interior poses carry headings
    /// normalized to `[0, 2π)`.
    pub fn at(&self, t: f64) -> Pose2 {
        if t <= 0.0 {
            return self.start;
        }
        if t >= 1.0 {
            return self.goal;
        }

        let t1 = self.t1();
        let t2 = self.t2();

        if t < t1 {
            // on the start turn
            let a = t / t1;
            let pivot = self.pivot1();
            let dir = self.dir1.signum();
            let to_start = self.start.pos - pivot;
            Pose2::from_parts(
                pivot + to_start.rotated(dir * a * self.arc1),
                interp_angle(
                    self.start.heading,
                    self.start.heading + dir * self.arc1,
                    a,
                    self.dir1,
                ),
            )
        } else if t > t2 {
            // on the goal turn
            let a = (t - t2) / (1.0 - t2);
            let pivot = self.pivot2();
            let dir = self.dir2.signum();
            let to_goal = self.goal.pos - pivot;
            Pose2::from_parts(
                pivot + to_goal.rotated(-dir * (1.0 - a) * self.arc2),
                interp_angle(
                    self.goal.heading - dir * self.arc2,
                    self.goal.heading,
                    a,
                    self.dir2,
                ),
            )
        } else {
            // on the straight section; a zero-span straight (t1 == t2)
            // collapses to its start rather than dividing 0/0
            let a = if t2 > t1 { (t - t1) / (t2 - t1) } else { 0.0 };
            Pose2::interpolate(&self.straight_start(), &self.straight_end(), a)
        }
    }
}

impl fmt::Display for DubinsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ start: {}, goal: {}, radius: {}, arc1: {} {}, arc2: {} {} }}",
            self.start, self.goal, self.radius, self.arc1, self.dir1, self.arc2, self.dir2
        )
    }
}
