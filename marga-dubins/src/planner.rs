//! Configuration-carrying front-end over the path generator.

use log::debug;

use marga_geom::Pose2;

use crate::error::{DubinsError, Result};
use crate::generator::generate_dubins_paths;
use crate::path::DubinsPath;

/// Configuration for the Dubins planner.
#[derive(Debug, Clone)]
pub struct DubinsConfig {
    /// Minimum turning radius in meters.
    ///
    /// The curvature of every generated path stays at or below
    /// `1 / turning_radius`.
    pub turning_radius: f64,

    /// Resolution in meters used when discretizing a path into poses.
    pub sample_resolution: f64,
}

impl Default for DubinsConfig {
    fn default() -> Self {
        Self {
            // max linear velocity over max angular velocity for a small
            // differential-drive platform: 0.2 / 0.5
            turning_radius: 0.4,
            sample_resolution: 0.05,
        }
    }
}

impl DubinsConfig {
    /// Check the configuration for values the geometry cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !(self.turning_radius > 0.0 && self.turning_radius.is_finite()) {
            return Err(DubinsError::InvalidRadius(self.turning_radius));
        }
        if !(self.sample_resolution > 0.0 && self.sample_resolution.is_finite()) {
            return Err(DubinsError::InvalidResolution(self.sample_resolution));
        }
        Ok(())
    }
}

/// Dubins path planner for a fixed vehicle configuration.
///
/// Thin stateless wrapper over [`generate_dubins_paths`] that carries
/// the turning radius and sampling resolution so call sites don't
/// thread them through every query.
pub struct DubinsPlanner {
    config: DubinsConfig,
}

impl DubinsPlanner {
    /// Create a planner with a validated configuration.
    pub fn new(config: DubinsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a planner with the default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: DubinsConfig::default(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &DubinsConfig {
        &self.config
    }

    /// All feasible CSC candidates from `start` to `goal`, unsorted.
    pub fn plan(&self, start: Pose2, goal: Pose2) -> Vec<DubinsPath> {
        generate_dubins_paths(start, goal, self.config.turning_radius)
    }

    /// The shortest feasible candidate, or `None` when no family is
    /// geometrically feasible.
    pub fn shortest(&self, start: Pose2, goal: Pose2) -> Option<DubinsPath> {
        let best = self
            .plan(start, goal)
            .into_iter()
            .min_by(|a, b| a.length().total_cmp(&b.length()));
        if let Some(ref p) = best {
            debug!("shortest candidate: {} ({:.3} m)", p, p.length());
        }
        best
    }

    /// Discretize `path` at the configured resolution.
    pub fn sample(&self, path: &DubinsPath) -> Vec<Pose2> {
        path.sample(self.config.sample_resolution)
    }
}
