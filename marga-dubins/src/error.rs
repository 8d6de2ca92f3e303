//! Error types for Dubins path generation.

use thiserror::Error;

/// Errors surfaced by the Dubins planner.
///
/// Geometric infeasibility of a single CSC family is not an error: that
/// family is simply absent from the generated set. These variants cover
/// the operations the crate deliberately refuses and invalid
/// configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DubinsError {
    /// The three-arc RLR/LRL constructions are deliberately not provided.
    #[error("CCC path families (RLR/LRL) are not implemented")]
    CccUnsupported,

    /// A sampled pose sequence does not carry enough information to
    /// recover the generating arcs.
    #[error("reconstructing a Dubins path from a pose sequence is not supported")]
    PoseSequenceUnsupported,

    /// Turning radius must be positive.
    #[error("turning radius must be positive, got {0}")]
    InvalidRadius(f64),

    /// Sampling resolution must be positive.
    #[error("sample resolution must be positive, got {0}")]
    InvalidResolution(f64),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DubinsError>;
