//! Sequence optimizer: bounded-lookahead greedy construction.
//!
//! Consumes a read-only [`MotionManifest`] and produces a [`SequencePlan`]:
//! a permutation of the clip set ordered for visual flow, with the realized
//! transition score of every adjacent pair. The search is a heuristic, not an
//! exact solver; see the module tests and `report` for the quality floor
//! handling.
//!
//! Every choice the optimizer makes is deterministic: the seed is the lowest
//! clip id, candidate ranking and winner selection break ties toward the
//! lowest id, and candidate expansions are reduced sequentially after the
//! parallel fork-join. Two runs over the same manifest and settings yield
//! identical plans.

mod lookahead;
mod plan;

pub use plan::{PlannedTransition, SequencePlan};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::AnalysisSettings;
use crate::error::{CoreError, CoreResult};
use crate::manifest::MotionManifest;

use lookahead::{ScoreTable, select_next};

/// Cooperative cancellation flag for long optimization runs.
///
/// Checked between top-level placement steps only, never mid-step, so a
/// canceled run still commits whole placements. Clone the flag into whatever
/// task should be able to cancel the run.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation; the optimizer stops before its next step.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Progress callback: (clips placed, total clips).
type ProgressFn<'a> = Box<dyn Fn(usize, usize) + Send + Sync + 'a>;

/// Builds an ordering over a manifest's clips.
///
/// # Examples
///
/// ```rust
/// use clipflow_core::config::AnalysisSettings;
/// use clipflow_core::manifest::{ClipId, MotionManifest};
/// use clipflow_core::motion::{MotionDirection, MotionProfile};
/// use clipflow_core::sequencing::SequenceOptimizer;
///
/// let mut manifest = MotionManifest::new(Default::default());
/// manifest.add_clip(
///     ClipId::from("a.mp4"),
///     MotionProfile::new(MotionDirection::North, MotionDirection::East, 0.8, 1.0),
/// );
/// manifest.add_clip(
///     ClipId::from("b.mp4"),
///     MotionProfile::new(MotionDirection::East, MotionDirection::South, 0.7, 1.0),
/// );
///
/// let plan = SequenceOptimizer::new(&manifest, AnalysisSettings::default())
///     .run()
///     .unwrap();
/// assert_eq!(plan.order.len(), 2);
/// ```
pub struct SequenceOptimizer<'a> {
    manifest: &'a MotionManifest,
    settings: AnalysisSettings,
    cancel: Option<CancelFlag>,
    progress: Option<ProgressFn<'a>>,
}

impl<'a> SequenceOptimizer<'a> {
    pub fn new(manifest: &'a MotionManifest, settings: AnalysisSettings) -> Self {
        Self {
            manifest,
            settings,
            cancel: None,
            progress: None,
        }
    }

    /// Attaches a cancellation flag checked between placement steps.
    pub fn with_cancel_flag(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Attaches a progress callback invoked after each committed placement.
    pub fn with_progress(mut self, progress: impl Fn(usize, usize) + Send + Sync + 'a) -> Self {
        self.progress = Some(Box::new(progress));
        self
    }

    /// Runs the search and returns the plan.
    ///
    /// Settings and every profile are validated before any scoring happens;
    /// fewer than 2 clips fail with `InsufficientClips` (a single clip has no
    /// transitions to optimize and should be passed through by the caller).
    pub fn run(&self) -> CoreResult<SequencePlan> {
        self.settings.validate()?;
        self.manifest.validate()?;

        let total = self.manifest.len();
        if total < 2 {
            return Err(CoreError::InsufficientClips { count: total });
        }

        log::info!(
            "Optimizing sequence over {} clips (lookahead {}, max branches {})",
            total,
            self.settings.lookahead,
            self.settings.max_branches
        );

        let table = ScoreTable::build(self.manifest, &self.settings);

        // Seed with the lowest clip id; index 0 in the id-ordered table
        let mut order: Vec<usize> = Vec::with_capacity(total);
        let mut remaining = vec![true; total];
        let mut tail = 0;
        order.push(tail);
        remaining[tail] = false;
        self.report_progress(1, total);

        let mut complete = true;
        while order.len() < total {
            if self.cancel.as_ref().is_some_and(CancelFlag::is_cancelled) {
                log::warn!(
                    "Optimization canceled after {} of {} placements",
                    order.len(),
                    total
                );
                complete = false;
                break;
            }

            let next = select_next(&table, tail, &remaining, &self.settings);
            log::debug!(
                "Placed {} after {} (step {}/{})",
                table.id(next),
                table.id(tail),
                order.len() + 1,
                total
            );
            order.push(next);
            remaining[next] = false;
            tail = next;
            self.report_progress(order.len(), total);
        }

        Ok(self.finish_plan(&table, &order, complete))
    }

    fn report_progress(&self, placed: usize, total: usize) {
        if let Some(progress) = &self.progress {
            progress(placed, total);
        }
    }

    /// Realizes the committed ordering into a plan, flagging weak joins.
    fn finish_plan(&self, table: &ScoreTable, order: &[usize], complete: bool) -> SequencePlan {
        let floor = self.settings.min_transition_score;
        let transitions = order
            .windows(2)
            .map(|pair| {
                let score = table.score(pair[0], pair[1]);
                PlannedTransition {
                    from: table.id(pair[0]).clone(),
                    to: table.id(pair[1]).clone(),
                    flagged: score.score < floor,
                    score,
                }
            })
            .collect();

        SequencePlan {
            order: order.iter().map(|&index| table.id(index).clone()).collect(),
            transitions,
            complete,
        }
    }
}

/// Convenience wrapper: optimize a manifest with the given settings and no
/// cancellation or progress hooks.
pub fn optimize(manifest: &MotionManifest, settings: &AnalysisSettings) -> CoreResult<SequencePlan> {
    SequenceOptimizer::new(manifest, settings.clone()).run()
}
