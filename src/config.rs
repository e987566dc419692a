//! Configuration for motion reconstruction.
//!
//! [`ReconstructionConfig`] holds the constants the pipeline used to hard-code:
//! the sample interval, the smoothing half-window and the gravity constant.
//!
//! # Example
//!
//! ```
//! use canopy_motion::ReconstructionConfig;
//!
//! // 10 Hz feed, 5-sample half-window, standard gravity on Z
//! let config = ReconstructionConfig::default();
//! assert_eq!(config.dt, 0.1);
//!
//! // 50 Hz feed with a tighter window
//! let fast = ReconstructionConfig::from_sample_rate(50.0).with_half_window(2);
//! assert!(fast.validate().is_ok());
//! ```

use crate::error::{ReconstructionError, Result};
use crate::math::Axis;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default sample interval in time units (10 Hz capture).
pub const DEFAULT_DT: f64 = 0.1;

/// Default smoothing half-window, in samples.
pub const DEFAULT_HALF_WINDOW: usize = 5;

/// Standard gravity, in the acceleration units of the feed.
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Tunable parameters of the reconstruction pipeline.
///
/// All samples are assumed equally spaced at `dt`; no timestamps are read.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReconstructionConfig {
    /// Fixed interval between consecutive samples.
    pub dt: f64,

    /// Half-width `w` of the centered moving average. The full window spans
    /// `2w + 1` samples and shrinks near the sequence ends.
    pub half_window: usize,

    /// Constant subtracted from the vertical axis of every smoothed sample.
    pub gravity: f64,

    /// Axis treated as vertical. The feed is assumed to stay aligned with it.
    pub vertical_axis: Axis,
}

impl Default for ReconstructionConfig {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            half_window: DEFAULT_HALF_WINDOW,
            gravity: STANDARD_GRAVITY,
            vertical_axis: Axis::Z,
        }
    }
}

impl ReconstructionConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for a feed sampled at `hz` samples per time unit.
    #[must_use]
    pub fn from_sample_rate(hz: f64) -> Self {
        Self {
            dt: 1.0 / hz,
            ..Self::default()
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `dt` is not a positive finite number or if
    /// `gravity` is not finite.
    pub fn validate(&self) -> Result<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(ReconstructionError::invalid_config(
                "dt must be positive and finite",
            ));
        }
        if !self.gravity.is_finite() {
            return Err(ReconstructionError::invalid_config(
                "gravity must be finite",
            ));
        }
        Ok(())
    }

    /// Samples per time unit implied by `dt`.
    #[must_use]
    pub fn sample_rate(&self) -> f64 {
        1.0 / self.dt
    }

    /// Full smoothing window length away from the sequence ends.
    ///
    /// Saturates at `usize::MAX` for very large half-windows.
    #[must_use]
    pub const fn window_len(&self) -> usize {
        self.half_window.saturating_mul(2).saturating_add(1)
    }

    /// Set the sample interval.
    #[must_use]
    pub const fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// Set the smoothing half-window.
    #[must_use]
    pub const fn with_half_window(mut self, half_window: usize) -> Self {
        self.half_window = half_window;
        self
    }

    /// Set the gravity constant.
    #[must_use]
    pub const fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the vertical axis.
    #[must_use]
    pub const fn with_vertical_axis(mut self, axis: Axis) -> Self {
        self.vertical_axis = axis;
        self
    }
}
