//! Gravity compensation.
//!
//! A fixed constant is subtracted from the vertical axis of every sample.
//! There is no orientation tracking: the feed's vertical axis is taken to
//! stay aligned with true vertical for the whole capture.

use crate::math::{Axis, Sample};

/// Subtract `gravity` from the `vertical` component of every sample.
///
/// Other axes pass through untouched; length and order are preserved.
#[must_use]
pub fn remove_gravity(samples: &[Sample], gravity: f64, vertical: Axis) -> Vec<Sample> {
    let k = vertical.index();
    samples
        .iter()
        .map(|s| {
            let mut out = *s;
            out[k] -= gravity;
            out
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::sample;

    #[test]
    fn test_resting_device_cancels() {
        let raw = vec![sample(0.0, 0.0, 9.81); 3];
        let compensated = remove_gravity(&raw, 9.81, Axis::Z);
        assert_eq!(compensated, vec![sample(0.0, 0.0, 0.0); 3]);
    }

    #[test]
    fn test_only_vertical_axis_changes() {
        let raw = vec![sample(1.0, 2.0, 3.0)];
        let compensated = remove_gravity(&raw, 1.0, Axis::Z);
        assert_eq!(compensated, vec![sample(1.0, 2.0, 2.0)]);

        let compensated = remove_gravity(&raw, 1.0, Axis::Y);
        assert_eq!(compensated, vec![sample(1.0, 1.0, 3.0)]);
    }

    #[test]
    fn test_empty() {
        assert!(remove_gravity(&[], 9.81, Axis::Z).is_empty());
    }
}
