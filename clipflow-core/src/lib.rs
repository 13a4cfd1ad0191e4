//! Core library for feature-driven clip sequencing.
//!
//! This crate takes a set of short clips annotated with motion profiles
//! (produced by an external motion analyzer) and computes an ordering that
//! maximizes perceived visual flow between consecutive clips, using a
//! bounded-lookahead scored search. It also provides color-continuity
//! ordering, manifest persistence, and transition report generation.
//! Decoding, feature extraction, and the final re-encode/concatenation are
//! external collaborators.
//!
//! ## Usage Example
//!
//! ```rust
//! use clipflow_core::{
//!     AnalysisSettings, ClipId, MotionDirection, MotionManifest, MotionProfile,
//!     build_report, optimize,
//! };
//!
//! let mut manifest = MotionManifest::new(Default::default());
//! manifest.add_clip(
//!     ClipId::from("clip_0001.mp4"),
//!     MotionProfile::new(MotionDirection::North, MotionDirection::East, 0.8, 1.0),
//! );
//! manifest.add_clip(
//!     ClipId::from("clip_0002.mp4"),
//!     MotionProfile::new(MotionDirection::East, MotionDirection::South, 0.7, 1.0),
//! );
//!
//! let settings = AnalysisSettings::default();
//! let plan = optimize(&manifest, &settings).unwrap();
//! println!("{}", build_report(&plan, &settings));
//! ```

pub mod apply;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod manifest;
pub mod motion;
pub mod report;
pub mod scoring;
pub mod sequencing;

// Re-exports for public API
pub use apply::apply_sequence;
pub use config::{AnalysisSettings, AnalysisSettingsBuilder, SpeedTier};
pub use discovery::find_clip_files;
pub use error::{CoreError, CoreResult};
pub use manifest::{ClipId, ManifestStatistics, MotionManifest};
pub use motion::{MotionDirection, MotionProfile};
pub use report::build_report;
pub use scoring::{TransitionScore, score_transition};
pub use sequencing::{
    CancelFlag, PlannedTransition, SequenceOptimizer, SequencePlan, optimize,
};
