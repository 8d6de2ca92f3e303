//! # Marga-Geom: 2D geometry foundation
//!
//! Plane-geometry primitives shared by the Marga motion planners:
//!
//! - [`Vec2`]: 2D vector in meters with the usual arithmetic surface
//! - [`Pose2`]: oriented 2D configuration (position + heading)
//! - [`angles`]: angle normalization and angular arithmetic
//!
//! All quantities are `f64`. Angles are radians, counter-clockwise
//! positive, following the ROS REP-103 convention (X-forward, Y-left).
//!
//! ## Heading domain
//!
//! Headings are accepted in any finite domain and are *not* normalized at
//! construction; the angle utilities produce well-defined results for any
//! input. Interpolated headings ([`Pose2::interpolate`]) are reported
//! normalized to `[0, 2π)`.

pub mod angles;
mod pose;
mod vec2;

pub use pose::Pose2;
pub use vec2::Vec2;
