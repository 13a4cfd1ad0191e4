//! Sequence plan types produced by the optimizer.

use serde::Serialize;

use crate::manifest::ClipId;
use crate::scoring::TransitionScore;

/// A transition committed into a [`SequencePlan`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedTransition {
    pub from: ClipId,
    pub to: ClipId,
    pub score: TransitionScore,
    /// True when the realized score fell below the configured quality floor.
    /// Flagged transitions stay in the ordering; the report surfaces them so
    /// an operator can review the weak joins.
    pub flagged: bool,
}

/// The optimizer's output: an ordering of clip ids plus the transition score
/// realized at each adjacent pair.
///
/// For a completed run `order` is a permutation of the input set — same
/// length, every id exactly once. `complete` is false only when a run was
/// cooperatively canceled, in which case `order` holds the committed prefix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequencePlan {
    pub order: Vec<ClipId>,
    pub transitions: Vec<PlannedTransition>,
    pub complete: bool,
}

impl SequencePlan {
    /// Number of clips placed.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Mean realized transition score; 0.0 when there are no transitions.
    pub fn mean_score(&self) -> f64 {
        if self.transitions.is_empty() {
            return 0.0;
        }
        let total: f64 = self.transitions.iter().map(|t| t.score.score).sum();
        total / self.transitions.len() as f64
    }

    /// Lowest realized transition score, if any transitions exist.
    pub fn min_score(&self) -> Option<f64> {
        self.transitions
            .iter()
            .map(|t| t.score.score)
            .min_by(f64::total_cmp)
    }

    /// Number of transitions below the quality floor.
    pub fn flagged_count(&self) -> usize {
        self.transitions.iter().filter(|t| t.flagged).count()
    }
}
