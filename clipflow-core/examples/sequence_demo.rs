//! Sequence Optimizer Example
//!
//! This example builds a small motion manifest in code, runs the
//! bounded-lookahead optimizer over it, and prints the transition report.
//!
//! Run with:
//! ```
//! cargo run --example sequence_demo
//! ```

use clipflow_core::{
    AnalysisSettingsBuilder, ClipId, MotionDirection, MotionManifest, MotionProfile, build_report,
    optimize,
};

fn main() -> clipflow_core::CoreResult<()> {
    env_logger::init();

    let mut manifest = MotionManifest::new(Default::default());
    let clips = [
        ("clip_0001.mp4", MotionDirection::Static, MotionDirection::East, 0.80, 1.0),
        ("clip_0002.mp4", MotionDirection::East, MotionDirection::South, 0.75, 1.0),
        ("clip_0003.mp4", MotionDirection::South, MotionDirection::West, 0.20, 1.0),
        ("clip_0004.mp4", MotionDirection::North, MotionDirection::North, 0.90, 1.0),
    ];
    for (id, start, end, intensity, confidence) in clips {
        manifest.add_clip(ClipId::from(id), MotionProfile::new(start, end, intensity, confidence));
    }

    let settings = AnalysisSettingsBuilder::new()
        .lookahead(2)
        .min_transition_score(0.5)
        .build();

    let plan = optimize(&manifest, &settings)?;

    println!("Computed order:");
    for (index, id) in plan.order.iter().enumerate() {
        println!("  {:2}. {}", index + 1, id);
    }
    println!();
    println!("{}", build_report(&plan, &settings));

    Ok(())
}
