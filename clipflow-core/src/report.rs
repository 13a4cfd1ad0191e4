//! Transition report rendering.
//!
//! Pure text assembly over a finished plan: no I/O, no side effects. Writing
//! the report anywhere is the caller's responsibility.

use std::fmt::Write;

use crate::config::AnalysisSettings;
use crate::sequencing::SequencePlan;

const RULE: &str = "========================================";
const THIN_RULE: &str = "----------------------------------------";

/// Renders a plan's transitions and summary statistics as a human-readable
/// report.
///
/// One line per adjacent pair — clip ids, realized score, components — with
/// a `[WEAK]` marker on every pair below the configured quality floor, then
/// mean score, minimum score, and the flagged count. Canceled plans carry an
/// explicit INCOMPLETE banner so a prefix is never mistaken for a full
/// ordering.
pub fn build_report(plan: &SequencePlan, settings: &AnalysisSettings) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Transition Report");
    let _ = writeln!(out, "{RULE}");

    if !plan.complete {
        let _ = writeln!(
            out,
            "INCOMPLETE: run was canceled; ordering covers only the first {} clip(s) placed",
            plan.len()
        );
        let _ = writeln!(out, "{THIN_RULE}");
    }

    if plan.transitions.is_empty() {
        let _ = writeln!(out, "No transitions ({} clip(s) placed).", plan.len());
        let _ = writeln!(out, "{RULE}");
        return out;
    }

    for (index, transition) in plan.transitions.iter().enumerate() {
        let marker = if transition.flagged { "  [WEAK]" } else { "" };
        let _ = writeln!(
            out,
            "{:4}. {} -> {}  score {:.3}  (direction {:.3}, intensity {:.3}){}",
            index + 1,
            transition.from,
            transition.to,
            transition.score.score,
            transition.score.direction,
            transition.score.intensity,
            marker
        );
    }

    let _ = writeln!(out, "{THIN_RULE}");
    let _ = writeln!(out, "Transitions:  {}", plan.transitions.len());
    let _ = writeln!(out, "Mean score:   {:.3}", plan.mean_score());
    if let Some(min) = plan.min_score() {
        let _ = writeln!(out, "Min score:    {min:.3}");
    }
    let _ = writeln!(
        out,
        "Flagged:      {} (below {:.2})",
        plan.flagged_count(),
        settings.min_transition_score
    );
    let _ = writeln!(out, "{RULE}");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ClipId;
    use crate::scoring::TransitionScore;
    use crate::sequencing::PlannedTransition;

    fn transition(from: &str, to: &str, score: f64, flagged: bool) -> PlannedTransition {
        PlannedTransition {
            from: ClipId::from(from),
            to: ClipId::from(to),
            score: TransitionScore {
                score,
                direction: score,
                intensity: score,
            },
            flagged,
        }
    }

    fn sample_plan() -> SequencePlan {
        SequencePlan {
            order: vec![ClipId::from("a.mp4"), ClipId::from("b.mp4"), ClipId::from("c.mp4")],
            transitions: vec![
                transition("a.mp4", "b.mp4", 0.9, false),
                transition("b.mp4", "c.mp4", 0.3, true),
            ],
            complete: true,
        }
    }

    #[test]
    fn test_report_contents() {
        let report = build_report(&sample_plan(), &AnalysisSettings::default());

        assert!(report.contains("Transition Report"));
        assert!(report.contains("a.mp4 -> b.mp4  score 0.900"));
        assert!(report.contains("b.mp4 -> c.mp4  score 0.300"));
        assert!(report.contains("Transitions:  2"));
        assert!(report.contains("Mean score:   0.600"));
        assert!(report.contains("Min score:    0.300"));
        assert!(report.contains("Flagged:      1 (below 0.50)"));
        assert!(!report.contains("INCOMPLETE"));
    }

    #[test]
    fn test_weak_marker_only_on_flagged_pairs() {
        let report = build_report(&sample_plan(), &AnalysisSettings::default());

        let lines: Vec<&str> = report.lines().collect();
        let strong = lines.iter().find(|l| l.contains("a.mp4 -> b.mp4")).unwrap();
        let weak = lines.iter().find(|l| l.contains("b.mp4 -> c.mp4")).unwrap();
        assert!(!strong.contains("[WEAK]"));
        assert!(weak.ends_with("[WEAK]"));
    }

    #[test]
    fn test_incomplete_banner() {
        let mut plan = sample_plan();
        plan.complete = false;

        let report = build_report(&plan, &AnalysisSettings::default());
        assert!(report.contains("INCOMPLETE"));
        assert!(report.contains("first 3 clip(s) placed"));
    }

    #[test]
    fn test_report_is_deterministic() {
        let plan = sample_plan();
        let settings = AnalysisSettings::default();
        assert_eq!(build_report(&plan, &settings), build_report(&plan, &settings));
    }
}
