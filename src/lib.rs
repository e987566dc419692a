//! Canopy Motion
//!
//! Displacement path reconstruction from 3-axis acceleration samples.
//!
//! A finished capture is a sequence of equally spaced acceleration samples.
//! [`reconstruct`] turns it into a path of positions anchored at the origin,
//! one per sample, through a fixed batch pipeline:
//!
//! 1. Centered moving-average smoothing ([`smoothing`])
//! 2. Gravity removal on the vertical axis ([`gravity`])
//! 3. Trapezoidal integration to velocity, then linear drift correction
//! 4. Trapezoidal integration to position
//!
//! # Quick Start
//!
//! ```
//! use canopy_motion::{math::sample, reconstruct, reconstruct_with_config, ReconstructionConfig};
//!
//! let samples = vec![
//!     sample(0.0, 0.0, 9.81),
//!     sample(0.5, 0.0, 9.81),
//!     sample(1.0, 0.0, 9.81),
//!     sample(0.5, 0.0, 9.81),
//!     sample(0.0, 0.0, 9.81),
//! ];
//!
//! let path = reconstruct(&samples);
//! assert_eq!(path.len(), samples.len());
//! assert_eq!(path[0].norm(), 0.0);
//!
//! // 20 Hz feed
//! let config = ReconstructionConfig::from_sample_rate(20.0);
//! let path = reconstruct_with_config(&samples, &config)?;
//! assert_eq!(path.len(), 5);
//! # Ok::<(), canopy_motion::ReconstructionError>(())
//! ```
//!
//! # Numeric Policy
//!
//! The pipeline is a total function. An empty input yields `[origin]`, and
//! NaN or infinite samples propagate through every stage unchanged; callers
//! that need validation do it before reconstruction.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

pub mod analysis;
pub mod capture;
pub mod config;
pub mod error;
pub mod gravity;
pub mod math;
pub mod pipeline;
pub mod record;
pub mod smoothing;

// Re-exports for convenient access
pub use analysis::{path_rmse, project_top_down, PathSummary};
pub use capture::{CaptureSession, Recording};
pub use config::{ReconstructionConfig, DEFAULT_DT, DEFAULT_HALF_WINDOW, STANDARD_GRAVITY};
pub use error::{ReconstructionError, Result};
pub use math::{Axis, Position, Sample, Velocity};
pub use pipeline::{
    reconstruct, reconstruct_detailed, reconstruct_many, reconstruct_with_config, Reconstruction,
};
pub use record::{Coordinates, PathRecord};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
