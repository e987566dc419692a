//! History record payload.
//!
//! A [`PathRecord`] is what the history store keeps for one planted path:
//! an identifier, the capture timestamp, the displacement path and a display
//! color. The store itself lives outside this crate; this module only
//! defines the payload and its JSON shape (`serde` feature).

use chrono::{DateTime, Utc};

use crate::capture::Recording;
use crate::config::ReconstructionConfig;
use crate::error::Result;
use crate::math::{Position, Sample};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display color given to new records.
pub const DEFAULT_COLOR: &str = "#e74c3c";

/// One point on the wire, with upper-case axis names.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinates {
    #[cfg_attr(feature = "serde", serde(rename = "X"))]
    pub x: f64,
    #[cfg_attr(feature = "serde", serde(rename = "Y"))]
    pub y: f64,
    #[cfg_attr(feature = "serde", serde(rename = "Z"))]
    pub z: f64,
}

impl From<Position> for Coordinates {
    fn from(p: Position) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

impl From<Coordinates> for Sample {
    fn from(c: Coordinates) -> Self {
        Self::new(c.x, c.y, c.z)
    }
}

/// A planted path as stored in history.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathRecord {
    /// Record identifier, a millisecond epoch in the history store.
    pub id: u64,
    /// When the path was planted.
    pub timestamp: DateTime<Utc>,
    /// Displacement path, one entry per captured sample.
    pub coordinates: Vec<Coordinates>,
    /// CSS color used to draw the record's tree.
    #[cfg_attr(feature = "serde", serde(rename = "rainbowColor"))]
    pub color: String,
}

impl PathRecord {
    /// Build a record from an already-reconstructed path.
    #[must_use]
    pub fn new(id: u64, timestamp: DateTime<Utc>, path: &[Position]) -> Self {
        Self {
            id,
            timestamp,
            coordinates: path.iter().copied().map(Coordinates::from).collect(),
            color: DEFAULT_COLOR.to_string(),
        }
    }

    /// Reconstruct `recording` and wrap the resulting path in a record.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails validation.
    pub fn plant(
        id: u64,
        timestamp: DateTime<Utc>,
        recording: &Recording,
        config: &ReconstructionConfig,
    ) -> Result<Self> {
        let path = recording.reconstruct(config)?;
        Ok(Self::new(id, timestamp, &path))
    }

    /// Set the display color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// The stored path as position vectors.
    #[must_use]
    pub fn positions(&self) -> Vec<Position> {
        self.coordinates.iter().copied().map(Position::from).collect()
    }

    /// Encode as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not a valid record.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
