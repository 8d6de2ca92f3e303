//! # Marga-Dubins: shortest bounded-curvature path generation
//!
//! Generates Dubins path candidates between oriented 2D poses for a
//! vehicle with a minimum turning radius. A Dubins path is at most
//! three segments; this crate builds the four CSC (curve-straight-curve)
//! families RR, LL, LR, RL by explicit circle-and-tangent geometry:
//!
//! - **Turning circles**: the two constant-curvature circles tangent
//!   to each pose ([`turning_circles`])
//! - **Tangent construction**: outer tangents for same-direction pairs,
//!   inner tangents for opposite-direction pairs; infeasible tangents
//!   drop the family from the result ([`outer_tangent`],
//!   [`inner_tangent`])
//! - **Evaluation**: each [`DubinsPath`] reports its arc sweeps, total
//!   length, and interpolated pose at any normalized parameter, and can
//!   be discretized into a pose sequence
//!
//! The three-arc CCC families (RLR/LRL) are deliberately not provided
//! and fail loudly ([`DubinsError::CccUnsupported`]).
//!
//! ## Quick start
//!
//! ```
//! use marga_dubins::{generate_dubins_paths, Pose2};
//!
//! let start = Pose2::new(0.0, 0.0, 0.0);
//! let goal = Pose2::new(10.0, 5.0, 1.2);
//!
//! let paths = generate_dubins_paths(start, goal, 1.0);
//! assert!(!paths.is_empty());
//!
//! for path in &paths {
//!     let midpoint = path.at(0.5);
//!     println!("{} {} -> {:.2} m, mid {}", path.dir1, path.dir2, path.length(), midpoint);
//! }
//! ```
//!
//! ## Layers
//!
//! - [`circle`] / [`tangent`]: geometric construction primitives
//! - [`path`]: the path entity and its evaluation
//! - [`generator`]: family enumeration ([`generate_dubins_paths`])
//! - [`planner`]: configuration-carrying front-end
//!
//! All evaluation is pure arithmetic over the inputs (no shared state,
//! no I/O), so queries may run concurrently without synchronization.

pub mod circle;
pub mod error;
pub mod generator;
pub mod path;
pub mod planner;
mod sampling;
pub mod tangent;

pub use circle::{arc_length, turning_circles, DirectedCircle};
pub use error::{DubinsError, Result};
pub use generator::{construct_lrl_path, construct_rlr_path, generate_dubins_paths};
pub use path::{DubinsPath, TurnDirection};
pub use planner::{DubinsConfig, DubinsPlanner};
pub use tangent::{inner_tangent, outer_tangent, Segment};

pub use marga_geom::{Pose2, Vec2};
