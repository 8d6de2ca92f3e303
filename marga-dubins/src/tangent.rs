//! Tangent segments between pairs of turning circles.
//!
//! A CSC path travels its straight section along a line tangent to both
//! turning circles. Same-direction pairs (LL, RR) use an outer tangent;
//! opposite-direction pairs (LR, RL) use an inner (crossing) tangent.
//! Infeasible constructions yield `None` and the corresponding family is
//! simply omitted from the generated set.

use serde::{Deserialize, Serialize};

use marga_geom::Vec2;

use crate::circle::DirectedCircle;
use crate::path::TurnDirection;

/// A candidate tangent line between two turning circles.
///
/// `a` lies on the first circle, `b` on the second; the vehicle travels
/// the straight section from `a` to `b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Tangent point on the first circle
    pub a: Vec2,
    /// Tangent point on the second circle
    pub b: Vec2,
}

impl Segment {
    /// Length of the straight section.
    #[inline]
    pub fn length(&self) -> f64 {
        self.a.distance(&self.b)
    }
}

/// Tangent points from the angle construction.
///
/// `v2` is the center-line direction rotated by the tangent angle; the
/// auxiliary point `p1 + r_aux·v2` fixes the direction the tangent line
/// leaves the first circle.
fn tangent_from_rotation(p1: Vec2, p2: Vec2, r1: f64, r_aux: f64, v2: Vec2) -> Segment {
    let aux = p1 + v2 * r_aux;
    let a = p1 + v2 * r1;
    let b = a + (p2 - aux);
    Segment { a, b }
}

/// Outer tangent between two same-direction circles (RR or LL).
///
/// Supports differing radii by running the construction from the larger
/// circle toward the smaller; the tangent angle comes from
/// `acos((r1 - r2) / D)` on the auxiliary-circle analysis. Returns
/// `None` when the centers coincide or one circle contains the other,
/// which cannot occur for the equal-radius pairs the generator produces
/// (there the quotient is 0 whenever `D > 0`).
pub fn outer_tangent(dc1: &DirectedCircle, dc2: &DirectedCircle) -> Option<Segment> {
    let first_is_larger = dc1.radius > dc2.radius;
    let (p1, p2, r1, r2) = if first_is_larger {
        (dc1.center, dc2.center, dc1.radius, dc2.radius)
    } else {
        (dc2.center, dc1.center, dc2.radius, dc1.radius)
    };
    let r_diff = r1 - r2;

    let v1 = p2 - p1;
    let d = v1.length();
    if d == 0.0 {
        return None;
    }
    let quotient = r_diff / d;
    if quotient.abs() > 1.0 {
        return None;
    }
    let gamma = quotient.acos();

    let dir = v1 / d;
    let upper = tangent_from_rotation(p1, p2, r1, r_diff, dir.rotated(gamma));
    let lower = tangent_from_rotation(p1, p2, r1, r_diff, dir.rotated(-gamma));

    let mut tangent = if dc1.direction == TurnDirection::Clockwise {
        if first_is_larger { upper } else { lower }
    } else if first_is_larger {
        lower
    } else {
        upper
    };

    if !first_is_larger {
        // construction ran from dc2, so the endpoints are reversed
        std::mem::swap(&mut tangent.a, &mut tangent.b);
    }
    Some(tangent)
}

/// Inner (crossing) tangent between two opposite-direction circles (LR
/// or RL).
///
/// The crossing tangent exists only when the center separation is at
/// least the sum of the radii; closer circles yield `None`. The tangent
/// angle comes from `acos((r1 + r2) / D)`.
pub fn inner_tangent(dc1: &DirectedCircle, dc2: &DirectedCircle) -> Option<Segment> {
    let (p1, p2) = (dc1.center, dc2.center);
    let r_sum = dc1.radius + dc2.radius;

    let v1 = p2 - p1;
    let d = v1.length();
    if d < r_sum {
        return None;
    }
    let gamma = (r_sum / d).acos();

    let dir = v1 / d;
    let upper = tangent_from_rotation(p1, p2, dc1.radius, r_sum, dir.rotated(gamma));
    let lower = tangent_from_rotation(p1, p2, dc1.radius, r_sum, dir.rotated(-gamma));

    Some(if dc1.direction == TurnDirection::Clockwise {
        upper
    } else {
        lower
    })
}
