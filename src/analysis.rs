//! Summaries and projections of reconstructed paths.
//!
//! These helpers feed the plot views: the displacement plot draws the
//! top-down (X, Z) projection, and the history view compares stored paths.

use crate::error::{ReconstructionError, Result};
use crate::math::Position;

/// Project a path onto the top-down plane as `[x, z]` pairs.
#[must_use]
pub fn project_top_down(path: &[Position]) -> Vec<[f64; 2]> {
    path.iter().map(|p| [p.x, p.z]).collect()
}

/// Geometric summary of a displacement path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSummary {
    /// Number of points.
    pub n_points: usize,

    /// Sum of straight-line segment lengths.
    pub path_length: f64,

    /// Last point minus first point.
    pub net_displacement: Position,

    /// Largest distance of any point from the origin.
    pub max_excursion: f64,

    /// Per-axis `(min, max)` over all points.
    pub bounds: [(f64, f64); 3],
}

impl PathSummary {
    /// Summarize `path`. Returns `None` for an empty path.
    #[must_use]
    pub fn from_path(path: &[Position]) -> Option<Self> {
        let first = path.first()?;
        let last = path.last()?;

        let path_length: f64 = path.windows(2).map(|w| (w[1] - w[0]).norm()).sum();
        let max_excursion = path.iter().map(|p| p.norm()).fold(0.0, f64::max);

        let mut bounds = [(f64::INFINITY, f64::NEG_INFINITY); 3];
        for p in path {
            for (axis, bound) in bounds.iter_mut().enumerate() {
                bound.0 = bound.0.min(p[axis]);
                bound.1 = bound.1.max(p[axis]);
            }
        }

        Some(Self {
            n_points: path.len(),
            path_length,
            net_displacement: last - first,
            max_excursion,
            bounds,
        })
    }

    /// Extent `max - min` along each axis.
    #[must_use]
    pub fn extent(&self) -> [f64; 3] {
        [
            self.bounds[0].1 - self.bounds[0].0,
            self.bounds[1].1 - self.bounds[1].0,
            self.bounds[2].1 - self.bounds[2].0,
        ]
    }
}

/// Root-mean-square point distance between two index-aligned paths.
///
/// # Errors
///
/// Returns [`ReconstructionError::LengthMismatch`] if the paths differ in length.
pub fn path_rmse(expected: &[Position], actual: &[Position]) -> Result<f64> {
    if expected.len() != actual.len() {
        return Err(ReconstructionError::length_mismatch(
            expected.len(),
            actual.len(),
        ));
    }
    if expected.is_empty() {
        return Ok(0.0);
    }

    let mse = expected
        .iter()
        .zip(actual)
        .map(|(e, a)| (e - a).norm_squared())
        .sum::<f64>()
        / expected.len() as f64;

    Ok(mse.sqrt())
}
