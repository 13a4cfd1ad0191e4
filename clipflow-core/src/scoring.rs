//! Transition scoring between ordered clip pairs.
//!
//! The scorer is a pure function over two motion profiles: no state, no
//! randomness, safe to call concurrently. Scoring an ordered pair always
//! yields the same value, which keeps plans and reports reproducible.

use serde::Serialize;

use crate::config::AnalysisSettings;
use crate::motion::{MAX_ANGULAR_DISTANCE, MotionDirection, MotionProfile};

/// Continuity assigned when either boundary has no detected motion.
///
/// A static boundary must not bias the search either way, so it maps to the
/// midpoint rather than to a penalty or a reward.
const NEUTRAL_DIRECTION_CONTINUITY: f64 = 0.5;

/// Compatibility score for an ordered clip pair.
///
/// `score` is the confidence-scaled combination the optimizer ranks by;
/// `direction` and `intensity` are the raw continuity components, kept for
/// the transition report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransitionScore {
    /// Combined score in [0.0, 1.0].
    pub score: f64,
    /// Direction continuity component in [0.0, 1.0].
    pub direction: f64,
    /// Intensity continuity component in [0.0, 1.0].
    pub intensity: f64,
}

/// Scores the transition from the end of one clip into the start of another.
///
/// Direction continuity measures how well `from`'s end direction aligns with
/// `to`'s start direction on the compass circle; intensity continuity is the
/// closeness of the two overall magnitudes. The weighted combination is then
/// scaled by the geometric mean of both confidences, so low-confidence
/// profiles pull their transitions toward zero ("we don't trust this
/// transition") instead of toward an artificially neutral value.
pub fn score_transition(
    from: &MotionProfile,
    to: &MotionProfile,
    settings: &AnalysisSettings,
) -> TransitionScore {
    let direction = direction_continuity(from.end_direction, to.start_direction);
    let intensity = 1.0 - (from.intensity - to.intensity).abs();

    let weighted =
        settings.direction_weight * direction + settings.intensity_weight() * intensity;
    let confidence = (from.confidence * to.confidence).sqrt();

    TransitionScore {
        score: weighted * confidence,
        direction,
        intensity,
    }
}

fn direction_continuity(from_end: MotionDirection, to_start: MotionDirection) -> f64 {
    match MotionDirection::angular_distance(from_end, to_start) {
        Some(distance) => 1.0 - distance / MAX_ANGULAR_DISTANCE,
        None => NEUTRAL_DIRECTION_CONTINUITY,
    }
}
