//! Motion manifest: the feature store consumed by the sequencer.
//!
//! A manifest maps every clip in the working set to the motion profile the
//! external analyzer produced for it, plus a metadata block describing the
//! analysis run. Manifests are persisted as JSON and are read-only for the
//! duration of an optimization run.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::SpeedTier;
use crate::error::{CoreError, CoreResult};
use crate::motion::{MotionDirection, MotionProfile};

/// Manifest format version written into new manifests.
pub const MANIFEST_VERSION: &str = "1.0";

/// Stable identifier for a clip, typically its file name.
///
/// Ids are immutable once assigned and order lexicographically; every
/// deterministic tie-break in the library resolves to the lowest id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClipId(String);

impl ClipId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClipId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ClipId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Metadata block describing the analysis run that produced a manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestMetadata {
    /// Manifest format version.
    pub version: String,

    /// Creation timestamp, RFC 3339.
    pub created: String,

    /// Last modification timestamp, RFC 3339.
    pub last_modified: String,

    /// Number of clips in the manifest.
    pub clip_count: usize,

    /// Analysis speed tier the external analyzer ran at.
    pub speed: SpeedTier,
}

/// One motion profile per clip, keyed by [`ClipId`].
///
/// Clips are held in a `BTreeMap` so that iteration order is the id order,
/// keeping every downstream traversal deterministic regardless of insertion
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionManifest {
    pub metadata: ManifestMetadata,
    clips: BTreeMap<ClipId, MotionProfile>,
}

impl MotionManifest {
    /// Creates an empty manifest for the given analysis tier.
    pub fn new(speed: SpeedTier) -> Self {
        let now = chrono::Local::now().to_rfc3339();
        Self {
            metadata: ManifestMetadata {
                version: MANIFEST_VERSION.to_string(),
                created: now.clone(),
                last_modified: now,
                clip_count: 0,
                speed,
            },
            clips: BTreeMap::new(),
        }
    }

    /// Adds or replaces a clip's motion profile, updating the metadata block.
    pub fn add_clip(&mut self, id: ClipId, profile: MotionProfile) {
        self.clips.insert(id, profile);
        self.metadata.clip_count = self.clips.len();
        self.metadata.last_modified = chrono::Local::now().to_rfc3339();
    }

    /// Returns the profile for a clip, if present.
    pub fn get(&self, id: &ClipId) -> Option<&MotionProfile> {
        self.clips.get(id)
    }

    /// Returns the profile for a clip, failing with `MissingProfile` when the
    /// clip has no manifest entry.
    pub fn profile(&self, id: &ClipId) -> CoreResult<&MotionProfile> {
        self.clips
            .get(id)
            .ok_or_else(|| CoreError::MissingProfile { clip: id.clone() })
    }

    /// Clip ids in id order.
    pub fn clip_ids(&self) -> impl Iterator<Item = &ClipId> {
        self.clips.keys()
    }

    /// (id, profile) pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&ClipId, &MotionProfile)> {
        self.clips.iter()
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    pub fn contains(&self, id: &ClipId) -> bool {
        self.clips.contains_key(id)
    }

    /// Loads a manifest from a JSON file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let data = fs::read_to_string(path)?;
        let manifest: MotionManifest = serde_json::from_str(&data)?;
        log::debug!(
            "Loaded manifest with {} clip(s) from {}",
            manifest.len(),
            path.display()
        );
        Ok(manifest)
    }

    /// Saves the manifest as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        log::debug!("Saved manifest with {} clip(s) to {}", self.len(), path.display());
        Ok(())
    }

    /// Validates every profile's numeric domains.
    ///
    /// Runs before any optimization so that corrupt analyzer output fails
    /// fast instead of skewing scores; direction domains are enforced by
    /// deserialization itself.
    pub fn validate(&self) -> CoreResult<()> {
        for (id, profile) in &self.clips {
            profile.validate(id)?;
        }
        Ok(())
    }

    /// Summary statistics over the manifest's profiles.
    pub fn statistics(&self) -> ManifestStatistics {
        let mut start_directions = BTreeMap::new();
        let mut end_directions = BTreeMap::new();
        let mut intensity_sum = 0.0;
        let mut confidence_sum = 0.0;

        for profile in self.clips.values() {
            *start_directions.entry(profile.start_direction).or_insert(0) += 1;
            *end_directions.entry(profile.end_direction).or_insert(0) += 1;
            intensity_sum += profile.intensity;
            confidence_sum += profile.confidence;
        }

        let count = self.clips.len();
        let mean = |sum: f64| if count == 0 { 0.0 } else { sum / count as f64 };

        ManifestStatistics {
            clip_count: count,
            start_directions,
            end_directions,
            mean_intensity: mean(intensity_sum),
            mean_confidence: mean(confidence_sum),
        }
    }
}

/// Aggregate statistics for a manifest, used by the CLI's validate command.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestStatistics {
    pub clip_count: usize,
    pub start_directions: BTreeMap<MotionDirection, usize>,
    pub end_directions: BTreeMap<MotionDirection, usize>,
    pub mean_intensity: f64,
    pub mean_confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(start: MotionDirection, end: MotionDirection, intensity: f64) -> MotionProfile {
        MotionProfile::new(start, end, intensity, 0.9)
    }

    #[test]
    fn test_add_and_get() {
        let mut manifest = MotionManifest::new(SpeedTier::Balanced);
        assert!(manifest.is_empty());

        let id = ClipId::from("clip_0001.mp4");
        manifest.add_clip(id.clone(), profile(MotionDirection::East, MotionDirection::West, 0.5));

        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest.metadata.clip_count, 1);
        assert!(manifest.contains(&id));
        assert_eq!(manifest.get(&id).unwrap().intensity, 0.5);

        // Replacing keeps the count stable
        manifest.add_clip(id.clone(), profile(MotionDirection::East, MotionDirection::West, 0.7));
        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest.get(&id).unwrap().intensity, 0.7);
    }

    #[test]
    fn test_missing_profile_error() {
        let manifest = MotionManifest::new(SpeedTier::Balanced);
        let id = ClipId::from("absent.mp4");
        assert!(matches!(
            manifest.profile(&id),
            Err(CoreError::MissingProfile { .. })
        ));
    }

    #[test]
    fn test_iteration_is_id_ordered() {
        let mut manifest = MotionManifest::new(SpeedTier::Fast);
        for name in ["zulu.mp4", "alpha.mp4", "mike.mp4"] {
            manifest.add_clip(
                ClipId::from(name),
                profile(MotionDirection::Static, MotionDirection::Static, 0.0),
            );
        }

        let ids: Vec<&str> = manifest.clip_ids().map(ClipId::as_str).collect();
        assert_eq!(ids, vec!["alpha.mp4", "mike.mp4", "zulu.mp4"]);
    }

    #[test]
    fn test_statistics() {
        let mut manifest = MotionManifest::new(SpeedTier::Precise);
        manifest.add_clip(
            ClipId::from("a.mp4"),
            profile(MotionDirection::East, MotionDirection::South, 0.2),
        );
        manifest.add_clip(
            ClipId::from("b.mp4"),
            profile(MotionDirection::East, MotionDirection::Static, 0.6),
        );

        let stats = manifest.statistics();
        assert_eq!(stats.clip_count, 2);
        assert_eq!(stats.start_directions[&MotionDirection::East], 2);
        assert_eq!(stats.end_directions[&MotionDirection::South], 1);
        assert_eq!(stats.end_directions[&MotionDirection::Static], 1);
        assert!((stats.mean_intensity - 0.4).abs() < 1e-12);
        assert!((stats.mean_confidence - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_validation_reports_clip_and_field() {
        let mut manifest = MotionManifest::new(SpeedTier::Balanced);
        manifest.add_clip(
            ClipId::from("good.mp4"),
            profile(MotionDirection::East, MotionDirection::West, 0.5),
        );
        manifest.add_clip(
            ClipId::from("out_of_range.mp4"),
            profile(MotionDirection::East, MotionDirection::West, 1.5),
        );

        match manifest.validate() {
            Err(CoreError::InvalidProfile { clip, field, value }) => {
                assert_eq!(clip.as_str(), "out_of_range.mp4");
                assert_eq!(field, "intensity");
                assert_eq!(value, 1.5);
            }
            other => panic!("Unexpected result: {:?}", other),
        }
    }
}
