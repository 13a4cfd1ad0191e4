//! Builder pattern for [`AnalysisSettings`].
//!
//! Provides a fluent API for assembling settings from defaults plus
//! overrides, the usual path for the CLI where every option is optional.

use super::{AnalysisSettings, SpeedTier};

/// Builder for creating [`AnalysisSettings`] instances.
///
/// # Examples
///
/// ```rust
/// use clipflow_core::config::{AnalysisSettingsBuilder, SpeedTier};
///
/// let settings = AnalysisSettingsBuilder::new()
///     .speed(SpeedTier::Precise)
///     .min_transition_score(0.6)
///     .lookahead(4)
///     .direction_weight(0.7)
///     .max_branches(12)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct AnalysisSettingsBuilder {
    settings: AnalysisSettings,
}

impl Default for AnalysisSettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisSettingsBuilder {
    /// Creates a builder seeded with the default settings.
    pub fn new() -> Self {
        Self {
            settings: AnalysisSettings::default(),
        }
    }

    /// Sets the external analyzer's speed tier.
    pub fn speed(mut self, speed: SpeedTier) -> Self {
        self.settings.speed = speed;
        self
    }

    /// Sets the quality floor for adjacent transitions.
    pub fn min_transition_score(mut self, score: f64) -> Self {
        self.settings.min_transition_score = score;
        self
    }

    /// Sets the lookahead depth.
    pub fn lookahead(mut self, lookahead: usize) -> Self {
        self.settings.lookahead = lookahead;
        self
    }

    /// Sets the direction-continuity weight (intensity receives the
    /// complement).
    pub fn direction_weight(mut self, weight: f64) -> Self {
        self.settings.direction_weight = weight;
        self
    }

    /// Sets the number of candidates expanded with lookahead per step.
    pub fn max_branches(mut self, branches: usize) -> Self {
        self.settings.max_branches = branches;
        self
    }

    /// Returns the assembled settings. Call
    /// [`AnalysisSettings::validate`] before handing them to the optimizer.
    pub fn build(self) -> AnalysisSettings {
        self.settings
    }
}
