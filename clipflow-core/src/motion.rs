//! Motion direction and per-clip motion profile types.
//!
//! Profiles are produced once per run by the external motion analyzer and are
//! consumed read-only by the scorer and optimizer. This module owns the
//! compass geometry and the numeric-domain validation; the accuracy of the
//! analyzer's direction/intensity extraction is the analyzer's own contract.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::manifest::ClipId;

/// Maximum angular distance between two compass directions, in degrees.
pub const MAX_ANGULAR_DISTANCE: f64 = 180.0;

/// Dominant motion direction over a clip's boundary segment.
///
/// Eight compass points plus `Static` for segments with no detected motion.
/// Serialized with the analyzer's manifest spelling (`"N"` .. `"NW"`,
/// `"static"`); any other string fails deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MotionDirection {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "NE")]
    Northeast,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "SE")]
    Southeast,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "SW")]
    Southwest,
    #[serde(rename = "W")]
    West,
    #[serde(rename = "NW")]
    Northwest,
    #[serde(rename = "static")]
    Static,
}

impl MotionDirection {
    /// Compass angle in degrees, clockwise from North. `None` for `Static`.
    pub fn compass_degrees(self) -> Option<f64> {
        match self {
            MotionDirection::North => Some(0.0),
            MotionDirection::Northeast => Some(45.0),
            MotionDirection::East => Some(90.0),
            MotionDirection::Southeast => Some(135.0),
            MotionDirection::South => Some(180.0),
            MotionDirection::Southwest => Some(225.0),
            MotionDirection::West => Some(270.0),
            MotionDirection::Northwest => Some(315.0),
            MotionDirection::Static => None,
        }
    }

    /// Smallest angular distance between two directions, in degrees
    /// (0 to 180). `None` if either direction is `Static`.
    pub fn angular_distance(a: MotionDirection, b: MotionDirection) -> Option<f64> {
        let (a_deg, b_deg) = (a.compass_degrees()?, b.compass_degrees()?);
        let diff = (a_deg - b_deg).abs();
        Some(diff.min(360.0 - diff))
    }
}

impl fmt::Display for MotionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MotionDirection::North => "N",
            MotionDirection::Northeast => "NE",
            MotionDirection::East => "E",
            MotionDirection::Southeast => "SE",
            MotionDirection::South => "S",
            MotionDirection::Southwest => "SW",
            MotionDirection::West => "W",
            MotionDirection::Northwest => "NW",
            MotionDirection::Static => "static",
        };
        f.write_str(label)
    }
}

/// Motion summary for a single clip, as extracted by the external analyzer.
///
/// `intensity` and `confidence` are normalized to [0.0, 1.0]; `frame_count`
/// is analyzer metadata carried through for reporting only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionProfile {
    /// Dominant direction over the clip's opening segment.
    pub start_direction: MotionDirection,

    /// Dominant direction over the clip's closing segment.
    pub end_direction: MotionDirection,

    /// Overall motion magnitude, normalized to [0.0, 1.0].
    pub intensity: f64,

    /// Analysis reliability, normalized to [0.0, 1.0]. Lower at the `fast`
    /// analysis tier, higher at `precise`.
    pub confidence: f64,

    /// Number of frames the analyzer sampled, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_count: Option<u64>,
}

impl MotionProfile {
    /// Creates a profile without analyzer frame metadata.
    pub fn new(
        start_direction: MotionDirection,
        end_direction: MotionDirection,
        intensity: f64,
        confidence: f64,
    ) -> Self {
        Self {
            start_direction,
            end_direction,
            intensity,
            confidence,
            frame_count: None,
        }
    }

    /// Checks that every scalar field lies in its declared domain.
    ///
    /// Returns `CoreError::InvalidProfile` naming the clip and the offending
    /// field. Direction fields are constrained by the enum itself.
    pub fn validate(&self, clip: &ClipId) -> CoreResult<()> {
        check_unit_range(clip, "intensity", self.intensity)?;
        check_unit_range(clip, "confidence", self.confidence)?;
        Ok(())
    }
}

fn check_unit_range(clip: &ClipId, field: &'static str, value: f64) -> CoreResult<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::InvalidProfile {
            clip: clip.clone(),
            field,
            value,
        })
    }
}
