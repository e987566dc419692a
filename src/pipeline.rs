//! Displacement path reconstruction from raw acceleration samples.
//!
//! # Pipeline Overview
//!
//! 1. Smooth with a centered moving average
//! 2. Subtract gravity from the vertical axis
//! 3. Integrate acceleration to velocity (trapezoidal)
//! 4. Subtract the per-sample drift `velocity[n-1] / n` from every velocity
//! 5. Integrate corrected velocity to position (trapezoidal)
//!
//! Every stage consumes the previous stage's full output and returns a fresh
//! sequence of the same length. An empty input short-circuits to `[origin]`
//! before any stage runs.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::config::ReconstructionConfig;
use crate::error::Result;
use crate::gravity::remove_gravity;
use crate::math::{
    correct_drift, drift_per_sample, integrate_trapezoidal, is_finite, origin, Position, Sample,
    Velocity,
};
use crate::smoothing::moving_average;

/// Every intermediate sequence of one reconstruction.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconstruction {
    /// Moving-average output, one per input sample.
    pub smoothed: Vec<Sample>,

    /// Smoothed samples with gravity removed.
    pub compensated: Vec<Sample>,

    /// Velocity before drift correction.
    pub raw_velocity: Vec<Velocity>,

    /// Constant subtracted from every raw velocity.
    pub drift_per_sample: Velocity,

    /// Drift-corrected velocity.
    pub velocity: Vec<Velocity>,

    /// The displacement path, anchored at the origin.
    pub positions: Vec<Position>,
}

impl Reconstruction {
    /// Number of points in the displacement path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false: the path holds at least the origin.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Consume the reconstruction, keeping only the displacement path.
    #[must_use]
    pub fn into_path(self) -> Vec<Position> {
        self.positions
    }
}

/// Reconstruct a displacement path with the default configuration.
///
/// Returns one position per sample, or `[origin]` for an empty input.
/// Non-finite samples propagate arithmetically; nothing is clamped.
///
/// # Example
///
/// ```
/// use canopy_motion::{math::sample, reconstruct};
///
/// let resting = vec![sample(0.0, 0.0, 9.81); 3];
/// let path = reconstruct(&resting);
/// assert_eq!(path.len(), 3);
/// assert!(path.iter().all(|p| p.norm() < 1e-12));
/// ```
#[must_use]
pub fn reconstruct(samples: &[Sample]) -> Vec<Position> {
    run_stages(samples, &ReconstructionConfig::default()).into_path()
}

/// Reconstruct a displacement path with an explicit configuration.
///
/// # Errors
///
/// Returns an error if `config` fails validation. The samples themselves
/// never cause an error.
pub fn reconstruct_with_config(
    samples: &[Sample],
    config: &ReconstructionConfig,
) -> Result<Vec<Position>> {
    config.validate()?;
    Ok(run_stages(samples, config).into_path())
}

/// Reconstruct and keep every intermediate sequence.
///
/// # Errors
///
/// Returns an error if `config` fails validation.
pub fn reconstruct_detailed(
    samples: &[Sample],
    config: &ReconstructionConfig,
) -> Result<Reconstruction> {
    config.validate()?;
    Ok(run_stages(samples, config))
}

/// Reconstruct several independent recordings in parallel.
///
/// Output order matches input order.
///
/// # Errors
///
/// Returns an error if `config` fails validation.
pub fn reconstruct_many<S>(
    recordings: &[S],
    config: &ReconstructionConfig,
) -> Result<Vec<Vec<Position>>>
where
    S: AsRef<[Sample]> + Sync,
{
    config.validate()?;
    debug!(recordings = recordings.len(), "reconstructing batch");
    Ok(recordings
        .par_iter()
        .map(|samples| run_stages(samples.as_ref(), config).into_path())
        .collect())
}

fn run_stages(samples: &[Sample], config: &ReconstructionConfig) -> Reconstruction {
    if samples.is_empty() {
        debug!("empty sample sequence, returning origin");
        return Reconstruction {
            smoothed: Vec::new(),
            compensated: Vec::new(),
            raw_velocity: Vec::new(),
            drift_per_sample: Velocity::zeros(),
            velocity: Vec::new(),
            positions: vec![origin()],
        };
    }

    let non_finite = samples.iter().filter(|s| !is_finite(s)).count();
    if non_finite > 0 {
        warn!(non_finite, total = samples.len(), "non-finite samples will propagate");
    }

    let smoothed = moving_average(samples, config.half_window);
    let compensated = remove_gravity(&smoothed, config.gravity, config.vertical_axis);

    let raw_velocity = integrate_trapezoidal(&compensated, config.dt);
    let drift = drift_per_sample(&raw_velocity);
    let velocity = correct_drift(&raw_velocity, &drift);

    let positions = integrate_trapezoidal(&velocity, config.dt);

    debug!(
        samples = samples.len(),
        drift = drift.norm(),
        dt = config.dt,
        half_window = config.half_window,
        "reconstructed displacement path"
    );

    Reconstruction {
        smoothed,
        compensated,
        raw_velocity,
        drift_per_sample: drift,
        velocity,
        positions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::sample;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_empty_returns_origin() {
        assert_eq!(reconstruct(&[]), vec![origin()]);

        let detail = reconstruct_detailed(&[], &ReconstructionConfig::default()).unwrap();
        assert!(detail.smoothed.is_empty());
        assert!(detail.raw_velocity.is_empty());
        assert_eq!(detail.drift_per_sample, Velocity::zeros());
        assert_eq!(detail.positions, vec![origin()]);
    }

    #[test]
    fn test_single_sample_anchored() {
        let path = reconstruct(&[sample(1.0, 2.0, 3.0)]);
        assert_eq!(path, vec![origin()]);
    }

    #[test]
    fn test_resting_device_stays_at_origin() {
        let samples = vec![sample(0.0, 0.0, 9.81); 3];
        let detail = reconstruct_detailed(&samples, &ReconstructionConfig::default()).unwrap();

        for s in &detail.compensated {
            assert_abs_diff_eq!(s.norm(), 0.0, epsilon = 1e-12);
        }
        for p in &detail.positions {
            assert_abs_diff_eq!(p.norm(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_stage_lengths_match() {
        let samples: Vec<_> = (0..25)
            .map(|i| {
                let t = f64::from(i) * 0.1;
                sample(t.sin(), t.cos(), 9.81 + 0.1 * t)
            })
            .collect();
        let detail = reconstruct_detailed(&samples, &ReconstructionConfig::default()).unwrap();

        assert_eq!(detail.smoothed.len(), 25);
        assert_eq!(detail.compensated.len(), 25);
        assert_eq!(detail.raw_velocity.len(), 25);
        assert_eq!(detail.velocity.len(), 25);
        assert_eq!(detail.len(), 25);
        assert_eq!(detail.raw_velocity[0], Velocity::zeros());
        assert_eq!(detail.positions[0], origin());
    }

    #[test]
    fn test_drift_removed_from_final_velocity() {
        let samples: Vec<_> = (0..12).map(|i| sample(0.3, -0.1 * f64::from(i), 9.9)).collect();
        let detail = reconstruct_detailed(&samples, &ReconstructionConfig::default()).unwrap();

        let n = detail.raw_velocity.len() as f64;
        let last = detail.raw_velocity[detail.raw_velocity.len() - 1];
        let residual = last - detail.drift_per_sample * n;
        assert_abs_diff_eq!(residual.norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ReconstructionConfig::default().with_dt(-0.1);
        assert!(reconstruct_with_config(&[sample(0.0, 0.0, 0.0)], &config).is_err());
        assert!(reconstruct_detailed(&[], &config).is_err());
    }

    #[test]
    fn test_many_preserves_order() {
        let config = ReconstructionConfig::default();
        let a = vec![sample(1.0, 0.0, 9.81); 4];
        let b: Vec<Sample> = Vec::new();
        let c = vec![sample(0.0, 2.0, 9.81); 7];

        let paths = reconstruct_many(&[a.clone(), b, c.clone()], &config).unwrap();
        assert_eq!(paths.len(), 3);
        assert_eq!(paths[0], reconstruct(&a));
        assert_eq!(paths[1], vec![origin()]);
        assert_eq!(paths[2], reconstruct(&c));
    }
}
