//! Three-axis vector types shared by every pipeline stage.
//!
//! Samples, velocities and positions are all `nalgebra::Vector3<f64>`; the
//! aliases only document which quantity a sequence carries.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One raw 3-axis acceleration reading.
pub type Sample = Vector3<f64>;

/// Integrated velocity at one capture tick.
pub type Velocity = Vector3<f64>;

/// Reconstructed position at one capture tick.
pub type Position = Vector3<f64>;

/// Coordinate axis of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// Left/right.
    X,
    /// Forward/backward in the feed's frame.
    Y,
    /// Up/down. Gravity acts along this axis by default.
    #[default]
    Z,
}

impl Axis {
    /// All axes in component order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Component index of this axis in a `Vector3`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

/// The path origin, `(0, 0, 0)`.
#[inline]
#[must_use]
pub fn origin() -> Position {
    Vector3::zeros()
}

/// Build a sample from its three axis values.
#[inline]
#[must_use]
pub fn sample(x: f64, y: f64, z: f64) -> Sample {
    Vector3::new(x, y, z)
}

/// Whether every component of `v` is finite.
#[inline]
#[must_use]
pub fn is_finite(v: &Vector3<f64>) -> bool {
    v.iter().all(|c| c.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_index() {
        assert_eq!(Axis::X.index(), 0);
        assert_eq!(Axis::Y.index(), 1);
        assert_eq!(Axis::Z.index(), 2);
        assert_eq!(Axis::default(), Axis::Z);
    }

    #[test]
    fn test_is_finite() {
        assert!(is_finite(&sample(1.0, -2.0, 3.5)));
        assert!(!is_finite(&sample(f64::NAN, 0.0, 0.0)));
        assert!(!is_finite(&sample(0.0, 0.0, f64::INFINITY)));
    }

    #[test]
    fn test_origin() {
        assert_eq!(origin(), sample(0.0, 0.0, 0.0));
    }
}
