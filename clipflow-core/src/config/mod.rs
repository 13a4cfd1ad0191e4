//! Configuration structures and constants for the clipflow-core library.
//!
//! This module provides the settings consumed by the sequence optimizer and
//! the speed-tier description of the external motion analyzer.

mod builder;

pub use builder::AnalysisSettingsBuilder;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

// Default constants

/// Default quality floor for adjacent transitions. Pairs scoring below the
/// floor are flagged in the report but never removed from the ordering.
pub const DEFAULT_MIN_TRANSITION_SCORE: f64 = 0.5;

/// Default lookahead depth: number of future placements simulated before
/// committing each clip.
pub const DEFAULT_LOOKAHEAD: usize = 3;

/// Smallest permitted lookahead depth (immediate score only).
pub const MIN_LOOKAHEAD: usize = 1;

/// Largest permitted lookahead depth.
pub const MAX_LOOKAHEAD: usize = 5;

/// Default weight of direction continuity in the combined transition score.
/// Intensity continuity receives the complement.
pub const DEFAULT_DIRECTION_WEIGHT: f64 = 0.5;

/// Default number of candidates expanded with lookahead at each step.
/// Remaining candidates are still scored for their immediate transition but
/// are not simulated further, keeping each step's work bounded.
pub const DEFAULT_MAX_BRANCHES: usize = 8;

/// Analysis speed tier of the external motion analyzer.
///
/// The tier trades extraction cost against precision upstream of this
/// library; it never changes the optimizer's algorithm. The per-tier sampling
/// parameters are published here so front ends can display what a manifest
/// was produced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SpeedTier {
    /// Analyze every 5th frame with coarse thresholds.
    Fast,
    /// Default tier: every 2nd frame, moderate thresholds.
    #[default]
    Balanced,
    /// Analyze every frame with strict thresholds.
    Precise,
}

impl SpeedTier {
    /// Frame sampling interval the analyzer uses at this tier.
    pub fn sample_rate(self) -> u32 {
        match self {
            SpeedTier::Fast => 5,
            SpeedTier::Balanced => 2,
            SpeedTier::Precise => 1,
        }
    }

    /// Minimum vector magnitude the analyzer counts as motion.
    pub fn vector_threshold(self) -> f64 {
        match self {
            SpeedTier::Fast => 0.5,
            SpeedTier::Balanced => 0.3,
            SpeedTier::Precise => 0.2,
        }
    }

    /// Confidence the analyzer requires before reporting a direction.
    pub fn confidence_threshold(self) -> f64 {
        match self {
            SpeedTier::Fast => 0.6,
            SpeedTier::Balanced => 0.7,
            SpeedTier::Precise => 0.8,
        }
    }
}

impl std::fmt::Display for SpeedTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SpeedTier::Fast => "fast",
            SpeedTier::Balanced => "balanced",
            SpeedTier::Precise => "precise",
        };
        f.write_str(label)
    }
}

/// Settings for one sequencing run.
///
/// Typically created by the consumer of the library (e.g. clipflow-cli) via
/// [`AnalysisSettingsBuilder`] and passed to the optimizer. All fields have
/// defaults, so only overrides need to be set.
///
/// # Examples
///
/// ```rust
/// use clipflow_core::config::AnalysisSettingsBuilder;
///
/// let settings = AnalysisSettingsBuilder::new()
///     .lookahead(2)
///     .min_transition_score(0.6)
///     .build();
/// settings.validate().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Speed tier the external analyzer ran at. Carried in manifests and
    /// reports; does not affect the optimizer.
    pub speed: SpeedTier,

    /// Quality floor for adjacent transitions, in [0.0, 1.0].
    pub min_transition_score: f64,

    /// Search depth: number of future placements simulated per candidate,
    /// in [1, 5].
    pub lookahead: usize,

    /// Weight of direction continuity in the combined score, in [0.0, 1.0].
    pub direction_weight: f64,

    /// Number of candidates expanded with lookahead at each step (at least 1).
    pub max_branches: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            speed: SpeedTier::Balanced,
            min_transition_score: DEFAULT_MIN_TRANSITION_SCORE,
            lookahead: DEFAULT_LOOKAHEAD,
            direction_weight: DEFAULT_DIRECTION_WEIGHT,
            max_branches: DEFAULT_MAX_BRANCHES,
        }
    }
}

impl AnalysisSettings {
    /// Weight of intensity continuity: the complement of `direction_weight`.
    pub fn intensity_weight(&self) -> f64 {
        1.0 - self.direction_weight
    }

    /// Checks every field against its declared domain.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.min_transition_score.is_finite()
            || !(0.0..=1.0).contains(&self.min_transition_score)
        {
            return Err(CoreError::InvalidConfig(format!(
                "min_transition_score must be in [0.0, 1.0], got {}",
                self.min_transition_score
            )));
        }
        if !(MIN_LOOKAHEAD..=MAX_LOOKAHEAD).contains(&self.lookahead) {
            return Err(CoreError::InvalidConfig(format!(
                "lookahead must be in [{}, {}], got {}",
                MIN_LOOKAHEAD, MAX_LOOKAHEAD, self.lookahead
            )));
        }
        if !self.direction_weight.is_finite() || !(0.0..=1.0).contains(&self.direction_weight) {
            return Err(CoreError::InvalidConfig(format!(
                "direction_weight must be in [0.0, 1.0], got {}",
                self.direction_weight
            )));
        }
        if self.max_branches == 0 {
            return Err(CoreError::InvalidConfig(
                "max_branches must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
