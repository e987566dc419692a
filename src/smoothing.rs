//! Centered moving-average smoothing.
//!
//! Output index `i` is the per-axis arithmetic mean of the input samples with
//! index `j` in `max(0, i - w) <= j < min(n, i + w + 1)`. Near the ends the
//! window is truncated, never zero-padded, so the output keeps the input
//! length.

use crate::math::Sample;

/// Smooth `samples` with a centered moving average of half-width `half_window`.
///
/// An empty input yields an empty output. A half-window of zero, or a
/// single-sample input, returns the samples unchanged.
///
/// # Example
///
/// ```
/// use canopy_motion::{math::sample, smoothing::moving_average};
///
/// let raw = vec![sample(0.0, 0.0, 0.0), sample(3.0, 0.0, 0.0), sample(0.0, 0.0, 0.0)];
/// let smoothed = moving_average(&raw, 1);
/// assert_eq!(smoothed[0].x, 1.5);
/// assert_eq!(smoothed[1].x, 1.0);
/// ```
#[must_use]
pub fn moving_average(samples: &[Sample], half_window: usize) -> Vec<Sample> {
    let n = samples.len();
    (0..n)
        .map(|i| {
            let start = i.saturating_sub(half_window);
            let end = n.min(i.saturating_add(half_window).saturating_add(1));
            window_mean(&samples[start..end])
        })
        .collect()
}

/// Per-axis mean of a non-empty window, summed in index order.
fn window_mean(window: &[Sample]) -> Sample {
    let sum = window.iter().fold(Sample::zeros(), |acc, s| acc + s);
    sum / window.len() as f64
}
