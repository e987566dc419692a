//! Sample accumulation for a live capture.
//!
//! [`CaptureSession`] collects samples as the feed delivers them. The
//! pipeline never runs incrementally: [`CaptureSession::preview`] reruns the
//! full batch over a snapshot, and [`CaptureSession::finish`] hands back an
//! immutable [`Recording`] for the final reconstruction.

use tracing::{debug, trace};

use crate::config::ReconstructionConfig;
use crate::error::{ReconstructionError, Result};
use crate::math::{Position, Sample};
use crate::pipeline::reconstruct_with_config;

/// Growing sample buffer for one capture window.
///
/// # Example
///
/// ```
/// use canopy_motion::{math::sample, CaptureSession, ReconstructionConfig};
///
/// let mut session = CaptureSession::new();
/// session.push(sample(0.0, 0.0, 9.81));
/// session.push(sample(0.2, 0.0, 9.81));
///
/// let recording = session.finish();
/// let path = recording.reconstruct(&ReconstructionConfig::default())?;
/// assert_eq!(path.len(), 2);
/// # Ok::<(), canopy_motion::ReconstructionError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CaptureSession {
    samples: Vec<Sample>,
}

impl CaptureSession {
    /// Create an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session with room for `capacity` samples.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Append one sample. Insertion order is chronological order.
    pub fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
        trace!(len = self.samples.len(), "sample captured");
    }

    /// Append a batch of samples in order.
    pub fn extend<I>(&mut self, samples: I)
    where
        I: IntoIterator<Item = Sample>,
    {
        self.samples.extend(samples);
        trace!(len = self.samples.len(), "sample batch captured");
    }

    /// Number of samples captured so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether nothing has been captured yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Most recent raw sample.
    #[must_use]
    pub fn latest(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Raw samples captured so far, for the unprocessed view.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Reconstruct the samples captured so far.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails validation.
    pub fn preview(&self, config: &ReconstructionConfig) -> Result<Vec<Position>> {
        reconstruct_with_config(&self.samples, config)
    }

    /// Drop every captured sample and start over.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// End the capture and freeze the samples.
    #[must_use]
    pub fn finish(self) -> Recording {
        debug!(samples = self.samples.len(), "capture finished");
        Recording {
            samples: self.samples,
        }
    }

    /// End the capture, rejecting a session that recorded nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ReconstructionError::EmptyCapture`] if no samples were pushed.
    pub fn finish_strict(self) -> Result<Recording> {
        if self.samples.is_empty() {
            return Err(ReconstructionError::EmptyCapture);
        }
        Ok(self.finish())
    }
}

/// Finalized, immutable sample sequence from one capture.
#[derive(Debug, Clone, PartialEq)]
pub struct Recording {
    samples: Vec<Sample>,
}

impl Recording {
    /// Wrap an already-captured sample sequence.
    #[must_use]
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// The captured samples, in chronological order.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Number of captured samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the recording holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Reconstruct the displacement path of this recording.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails validation.
    pub fn reconstruct(&self, config: &ReconstructionConfig) -> Result<Vec<Position>> {
        reconstruct_with_config(&self.samples, config)
    }
}

impl AsRef<[Sample]> for Recording {
    fn as_ref(&self) -> &[Sample] {
        &self.samples
    }
}

impl From<Vec<Sample>> for Recording {
    fn from(samples: Vec<Sample>) -> Self {
        Self::new(samples)
    }
}
