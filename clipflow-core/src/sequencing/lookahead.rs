//! Candidate selection with bounded greedy lookahead.
//!
//! All pairwise scores are computed once into a [`ScoreTable`] before the
//! search starts, so the per-step candidate expansions share nothing mutable
//! and can run in parallel. Clip indices follow id order throughout, which
//! makes "lowest index" and "lowest id" the same tie-break.

use rayon::prelude::*;

use crate::config::AnalysisSettings;
use crate::manifest::{ClipId, MotionManifest};
use crate::scoring::{TransitionScore, score_transition};

/// Precomputed transition scores for every ordered clip pair.
pub(super) struct ScoreTable {
    ids: Vec<ClipId>,
    scores: Vec<TransitionScore>,
}

impl ScoreTable {
    /// Scores all ordered pairs in the manifest. Ids come out in id order.
    pub(super) fn build(manifest: &MotionManifest, settings: &AnalysisSettings) -> Self {
        let ids: Vec<ClipId> = manifest.clip_ids().cloned().collect();
        let profiles: Vec<_> = manifest.iter().map(|(_, profile)| profile).collect();
        let n = ids.len();

        let scores: Vec<TransitionScore> = (0..n * n)
            .into_par_iter()
            .map(|cell| {
                let (from, to) = (cell / n, cell % n);
                score_transition(profiles[from], profiles[to], settings)
            })
            .collect();

        Self { ids, scores }
    }

    pub(super) fn len(&self) -> usize {
        self.ids.len()
    }

    pub(super) fn id(&self, index: usize) -> &ClipId {
        &self.ids[index]
    }

    pub(super) fn score(&self, from: usize, to: usize) -> TransitionScore {
        self.scores[from * self.ids.len() + to]
    }
}

/// Picks the next clip to append after `tail`.
///
/// Candidates are ranked by immediate score (ties toward the lowest id) and
/// the top `max_branches` are expanded: each expansion simulates up to
/// `lookahead - 1` further best-immediate placements and accumulates the
/// path score. The candidate with the highest accumulated score wins; ties
/// again resolve to the lowest id. Expansions are independent, so they run
/// fork-join in parallel; the winner selection afterwards is sequential and
/// deterministic.
pub(super) fn select_next(
    table: &ScoreTable,
    tail: usize,
    remaining: &[bool],
    settings: &AnalysisSettings,
) -> usize {
    let mut ranked: Vec<(usize, f64)> = remaining
        .iter()
        .enumerate()
        .filter(|&(_, live)| *live)
        .map(|(index, _)| (index, table.score(tail, index).score))
        .collect();
    debug_assert!(!ranked.is_empty());

    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked.truncate(settings.max_branches);

    let simulate_depth = settings.lookahead - 1;
    let totals: Vec<(usize, f64)> = ranked
        .into_par_iter()
        .map(|(candidate, immediate)| {
            let mut rest = remaining.to_vec();
            rest[candidate] = false;
            let path = simulate_greedy_path(table, candidate, rest, simulate_depth);
            (candidate, immediate + path)
        })
        .collect();

    let mut best = totals[0];
    for &(candidate, total) in &totals[1..] {
        let ordering = total.total_cmp(&best.1);
        if ordering == std::cmp::Ordering::Greater
            || (ordering == std::cmp::Ordering::Equal && candidate < best.0)
        {
            best = (candidate, total);
        }
    }
    best.0
}

/// Accumulated score of up to `depth` best-immediate placements from `tail`.
///
/// Each simulated step applies the same rule the real construction does:
/// take the remaining clip with the best immediate score, lowest id on ties.
/// Near the end of a sequence the remaining set may run out before `depth`
/// does; the path is simply shorter.
fn simulate_greedy_path(
    table: &ScoreTable,
    mut tail: usize,
    mut remaining: Vec<bool>,
    depth: usize,
) -> f64 {
    let mut total = 0.0;

    for _ in 0..depth {
        let mut best: Option<(usize, f64)> = None;
        for (index, live) in remaining.iter().enumerate() {
            if !live {
                continue;
            }
            let score = table.score(tail, index).score;
            // Ascending index scan: strictly-greater keeps the lowest id on ties
            if best.is_none_or(|(_, best_score)| score.total_cmp(&best_score).is_gt()) {
                best = Some((index, score));
            }
        }

        match best {
            Some((index, score)) => {
                total += score;
                remaining[index] = false;
                tail = index;
            }
            None => break,
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisSettingsBuilder;
    use crate::manifest::MotionManifest;
    use crate::motion::{MotionDirection, MotionProfile};

    fn manifest_of(clips: &[(&str, MotionDirection, MotionDirection, f64)]) -> MotionManifest {
        let mut manifest = MotionManifest::new(Default::default());
        for &(id, start, end, intensity) in clips {
            manifest.add_clip(ClipId::from(id), MotionProfile::new(start, end, intensity, 1.0));
        }
        manifest
    }

    #[test]
    fn test_score_table_layout() {
        use MotionDirection::*;
        let manifest = manifest_of(&[
            ("a.mp4", North, East, 0.5),
            ("b.mp4", East, South, 0.5),
        ]);
        let settings = AnalysisSettings::default();
        let table = ScoreTable::build(&manifest, &settings);

        assert_eq!(table.len(), 2);
        assert_eq!(table.id(0).as_str(), "a.mp4");
        assert_eq!(table.id(1).as_str(), "b.mp4");

        // a ends East and b starts East: perfect continuity forward
        assert_eq!(table.score(0, 1).score, 1.0);
        // b ends South while a starts North: no continuity backward
        assert_eq!(table.score(1, 0).direction, 0.0);
    }

    #[test]
    fn test_select_next_prefers_lookahead_payoff() {
        use MotionDirection::*;
        // From "a": "c" has the better immediate transition (1.0 vs 0.95),
        // but "b" leads into the strong b -> d join while "c" dead-ends into
        // neutral static continuations.
        let manifest = manifest_of(&[
            ("a.mp4", Static, East, 0.5),
            ("b.mp4", East, South, 0.4),
            ("c.mp4", East, Static, 0.5),
            ("d.mp4", South, West, 0.4),
        ]);
        let settings = AnalysisSettingsBuilder::new().lookahead(2).build();
        let table = ScoreTable::build(&manifest, &settings);

        let remaining = vec![false, true, true, true];
        let chosen = select_next(&table, 0, &remaining, &settings);
        assert_eq!(table.id(chosen).as_str(), "b.mp4");

        // With no lookahead the immediate winner is taken instead
        let greedy = AnalysisSettingsBuilder::new().lookahead(1).build();
        let chosen = select_next(&table, 0, &remaining, &greedy);
        assert_eq!(table.id(chosen).as_str(), "c.mp4");
    }

    #[test]
    fn test_select_next_breaks_ties_by_lowest_id() {
        use MotionDirection::*;
        // "b" and "c" are byte-identical profiles: every score ties
        let manifest = manifest_of(&[
            ("a.mp4", Static, East, 0.5),
            ("b.mp4", East, South, 0.5),
            ("c.mp4", East, South, 0.5),
        ]);
        let settings = AnalysisSettings::default();
        let table = ScoreTable::build(&manifest, &settings);

        let remaining = vec![false, true, true];
        let chosen = select_next(&table, 0, &remaining, &settings);
        assert_eq!(table.id(chosen).as_str(), "b.mp4");
    }

    #[test]
    fn test_simulated_path_shorter_than_depth() {
        use MotionDirection::*;
        let manifest = manifest_of(&[
            ("a.mp4", Static, East, 0.5),
            ("b.mp4", East, South, 0.5),
        ]);
        let settings = AnalysisSettingsBuilder::new().lookahead(5).build();
        let table = ScoreTable::build(&manifest, &settings);

        // Only one clip remains: the deep lookahead simply runs out
        let remaining = vec![false, true];
        let chosen = select_next(&table, 0, &remaining, &settings);
        assert_eq!(chosen, 1);
    }
}
