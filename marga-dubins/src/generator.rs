//! Enumeration of the feasible CSC path candidates.

use log::{debug, trace};

use marga_geom::{Pose2, Vec2};

use crate::circle::{arc_length, turning_circles, DirectedCircle};
use crate::error::{DubinsError, Result};
use crate::path::{DubinsPath, TurnDirection};
use crate::tangent::{inner_tangent, outer_tangent, Segment};

/// Angular sweep, in radians, on `circle` from the point `from` to the
/// point `to`, measured along the circle's direction.
fn turn_sweep(circle: &DirectedCircle, from: Vec2, to: Vec2) -> f64 {
    let start_angle = (from - circle.center).angle();
    let end_angle = (to - circle.center).angle();
    arc_length(circle, start_angle, end_angle) / circle.radius
}

/// Shared CSC assembly: both turn sweeps from the tangent endpoints.
#[allow(clippy::too_many_arguments)]
fn construct_csc_path(
    start: Pose2,
    goal: Pose2,
    radius: f64,
    start_circle: &DirectedCircle,
    goal_circle: &DirectedCircle,
    tangent: &Segment,
    dir1: TurnDirection,
    dir2: TurnDirection,
) -> DubinsPath {
    let arc1 = turn_sweep(start_circle, start.pos, tangent.a);
    let arc2 = turn_sweep(goal_circle, tangent.b, goal.pos);
    DubinsPath::new(start, goal, radius, arc1, arc2, dir1, dir2)
}

fn construct_rr_path(
    start: Pose2,
    goal: Pose2,
    radius: f64,
    start_circle: &DirectedCircle,
    goal_circle: &DirectedCircle,
    tangent: &Segment,
) -> DubinsPath {
    construct_csc_path(
        start,
        goal,
        radius,
        start_circle,
        goal_circle,
        tangent,
        TurnDirection::Clockwise,
        TurnDirection::Clockwise,
    )
}

fn construct_ll_path(
    start: Pose2,
    goal: Pose2,
    radius: f64,
    start_circle: &DirectedCircle,
    goal_circle: &DirectedCircle,
    tangent: &Segment,
) -> DubinsPath {
    construct_csc_path(
        start,
        goal,
        radius,
        start_circle,
        goal_circle,
        tangent,
        TurnDirection::CounterClockwise,
        TurnDirection::CounterClockwise,
    )
}

fn construct_lr_path(
    start: Pose2,
    goal: Pose2,
    radius: f64,
    start_circle: &DirectedCircle,
    goal_circle: &DirectedCircle,
    tangent: &Segment,
) -> DubinsPath {
    construct_csc_path(
        start,
        goal,
        radius,
        start_circle,
        goal_circle,
        tangent,
        TurnDirection::CounterClockwise,
        TurnDirection::Clockwise,
    )
}

fn construct_rl_path(
    start: Pose2,
    goal: Pose2,
    radius: f64,
    start_circle: &DirectedCircle,
    goal_circle: &DirectedCircle,
    tangent: &Segment,
) -> DubinsPath {
    construct_csc_path(
        start,
        goal,
        radius,
        start_circle,
        goal_circle,
        tangent,
        TurnDirection::Clockwise,
        TurnDirection::CounterClockwise,
    )
}

/// Three-arc RLR construction.
///
/// Deliberately not provided: the CCC geometry was never validated for
/// this generator and guessing it risks silently wrong paths. Always
/// fails with [`DubinsError::CccUnsupported`].
pub fn construct_rlr_path(_start: Pose2, _goal: Pose2, _radius: f64) -> Result<DubinsPath> {
    Err(DubinsError::CccUnsupported)
}

/// Three-arc LRL construction.
///
/// See [`construct_rlr_path`]; always fails with
/// [`DubinsError::CccUnsupported`].
pub fn construct_lrl_path(_start: Pose2, _goal: Pose2, _radius: f64) -> Result<DubinsPath> {
    Err(DubinsError::CccUnsupported)
}

/// Compute the feasible CSC Dubins path candidates from `start` to
/// `goal` for a vehicle with minimum turning radius `radius`.
///
/// Builds both turning circles per pose, tries the four tangent
/// constructions, and assembles one path per feasible family, appended
/// in RR, LL, LR, RL order. The inner-tangent families drop out when
/// their circles are closer than the sum of the radii, so the result
/// holds between 0 and 4 paths. No sorting is applied; callers pick
/// the shortest candidate if that is what they need.
///
/// `radius` must be positive and finite.
pub fn generate_dubins_paths(start: Pose2, goal: Pose2, radius: f64) -> Vec<DubinsPath> {
    let (start_left, start_right) = turning_circles(start, radius);
    let (goal_left, goal_right) = turning_circles(goal, radius);

    let rr_tangent = outer_tangent(&start_right, &goal_right);
    let ll_tangent = outer_tangent(&start_left, &goal_left);
    let lr_tangent = inner_tangent(&start_left, &goal_right);
    let rl_tangent = inner_tangent(&start_right, &goal_left);

    let mut paths = Vec::with_capacity(4);

    if let Some(tangent) = rr_tangent {
        paths.push(construct_rr_path(
            start,
            goal,
            radius,
            &start_right,
            &goal_right,
            &tangent,
        ));
    } else {
        trace!("RR tangent infeasible for start {} goal {}", start, goal);
    }

    if let Some(tangent) = ll_tangent {
        paths.push(construct_ll_path(
            start,
            goal,
            radius,
            &start_left,
            &goal_left,
            &tangent,
        ));
    } else {
        trace!("LL tangent infeasible for start {} goal {}", start, goal);
    }

    if let Some(tangent) = lr_tangent {
        paths.push(construct_lr_path(
            start,
            goal,
            radius,
            &start_left,
            &goal_right,
            &tangent,
        ));
    } else {
        trace!("LR tangent infeasible for start {} goal {}", start, goal);
    }

    if let Some(tangent) = rl_tangent {
        paths.push(construct_rl_path(
            start,
            goal,
            radius,
            &start_right,
            &goal_left,
            &tangent,
        ));
    } else {
        trace!("RL tangent infeasible for start {} goal {}", start, goal);
    }

    debug!(
        "{} of 4 CSC families feasible, radius {:.3}",
        paths.len(),
        radius
    );
    paths
}
