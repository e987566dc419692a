//! Numerical integration and drift correction.
//!
//! Both integration passes of the pipeline share [`integrate_trapezoidal`]:
//! acceleration to velocity, then corrected velocity to position. Each pass
//! starts from the zero vector.

use nalgebra::Vector3;

/// Cumulative trapezoidal integral of `values` at a fixed step `dt`.
///
/// `out[0]` is zero and `out[i] = out[i-1] + (values[i] + values[i-1]) * dt / 2`.
/// The output has the same length as the input; an empty input yields an
/// empty output.
///
/// # Example
///
/// ```
/// use canopy_motion::math::integrate_trapezoidal;
/// use nalgebra::Vector3;
///
/// let accel = vec![Vector3::new(1.0, 0.0, 0.0); 3];
/// let velocity = integrate_trapezoidal(&accel, 0.5);
/// assert_eq!(velocity[2].x, 1.0);
/// ```
#[must_use]
pub fn integrate_trapezoidal(values: &[Vector3<f64>], dt: f64) -> Vec<Vector3<f64>> {
    let mut out = Vec::with_capacity(values.len());
    if values.is_empty() {
        return out;
    }

    out.push(Vector3::zeros());
    for (i, pair) in values.windows(2).enumerate() {
        let step = (pair[1] + pair[0]) * dt / 2.0;
        out.push(out[i] + step);
    }
    out
}

/// Per-sample drift estimate: the final velocity divided by the sequence length.
///
/// Assumes the device ends at rest and that drift grew linearly over the
/// session. Returns zero for an empty sequence.
#[must_use]
pub fn drift_per_sample(velocity: &[Vector3<f64>]) -> Vector3<f64> {
    match velocity.last() {
        Some(last) => last / velocity.len() as f64,
        None => Vector3::zeros(),
    }
}

/// Subtract a constant drift from every velocity.
#[must_use]
pub fn correct_drift(velocity: &[Vector3<f64>], drift: &Vector3<f64>) -> Vec<Vector3<f64>> {
    velocity.iter().map(|v| v - drift).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_integrate_empty() {
        assert!(integrate_trapezoidal(&[], 0.1).is_empty());
    }

    #[test]
    fn test_integrate_single() {
        let out = integrate_trapezoidal(&[Vector3::new(4.0, 5.0, 6.0)], 0.1);
        assert_eq!(out, vec![Vector3::zeros()]);
    }

    #[test]
    fn test_integrate_constant() {
        // Constant acceleration 2.0 over dt=0.1 gains 0.2 per step.
        let values = vec![Vector3::new(2.0, 0.0, -1.0); 4];
        let out = integrate_trapezoidal(&values, 0.1);
        assert_eq!(out.len(), 4);
        for (i, v) in out.iter().enumerate() {
            assert_relative_eq!(v.x, 0.2 * i as f64, epsilon = 1e-12);
            assert_relative_eq!(v.y, 0.0);
            assert_relative_eq!(v.z, -0.1 * i as f64, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_integrate_ramp_is_trapezoidal() {
        // f(t) = t sampled at t = 0, 1, 2; trapezoids are exact for linear f.
        let values: Vec<_> = (0..3).map(|i| Vector3::new(f64::from(i), 0.0, 0.0)).collect();
        let out = integrate_trapezoidal(&values, 1.0);
        assert_relative_eq!(out[1].x, 0.5);
        assert_relative_eq!(out[2].x, 2.0);
    }

    #[test]
    fn test_drift_per_sample() {
        let velocity = vec![
            Vector3::zeros(),
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(3.0, 6.0, 9.0),
        ];
        let drift = drift_per_sample(&velocity);
        assert_relative_eq!(drift.x, 1.0);
        assert_relative_eq!(drift.y, 2.0);
        assert_relative_eq!(drift.z, 3.0);
    }

    #[test]
    fn test_drift_empty_and_single() {
        assert_eq!(drift_per_sample(&[]), Vector3::zeros());
        assert_eq!(drift_per_sample(&[Vector3::zeros()]), Vector3::zeros());
    }

    #[test]
    fn test_correct_drift_zero_sum() {
        let velocity = vec![Vector3::zeros(), Vector3::new(0.4, -0.2, 0.8)];
        let drift = drift_per_sample(&velocity);
        let corrected = correct_drift(&velocity, &drift);
        assert_eq!(corrected.len(), 2);
        let residual = velocity[1] - drift * velocity.len() as f64;
        assert_relative_eq!(residual.norm(), 0.0, epsilon = 1e-15);
        assert_relative_eq!(corrected[0].x, -0.2);
        assert_relative_eq!(corrected[1].x, 0.2);
    }
}
