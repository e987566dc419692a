//! Mathematical utilities for motion reconstruction.
//!
//! This module provides:
//! - [`vector`]: sample/velocity/position vector types and axis helpers
//! - [`integration`]: trapezoidal integration and drift correction

pub mod integration;
pub mod vector;

pub use integration::{correct_drift, drift_per_sample, integrate_trapezoidal};
pub use vector::{is_finite, origin, sample, Axis, Position, Sample, Velocity};
