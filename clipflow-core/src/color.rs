//! Color-continuity ordering.
//!
//! A lighter alternative to the motion sequencer: clips are ordered by
//! dominant-color similarity, or toward a named target palette. Dominant
//! colors are extracted upstream (the external analyzer clusters sampled
//! frames); this module only consumes the resulting HSV triples.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::manifest::ClipId;

/// Weights for the HSV distance. Hue dominates: a hue shift reads as a
/// different color where an equal saturation or value shift reads as the
/// same color under different light.
const HUE_WEIGHT: f64 = 2.0;
const SATURATION_WEIGHT: f64 = 1.0;
const VALUE_WEIGHT: f64 = 1.0;

/// An HSV color with all channels normalized to [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    fn validate(&self, clip: &ClipId) -> CoreResult<()> {
        for (field, value) in [("h", self.h), ("s", self.s), ("v", self.v)] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(CoreError::InvalidProfile {
                    clip: clip.clone(),
                    field,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Weighted distance between two HSV colors. Hue wraps around the circle.
pub fn color_distance(a: Hsv, b: Hsv) -> f64 {
    let h_diff = (a.h - b.h).abs();
    let h_diff = h_diff.min(1.0 - h_diff);
    HUE_WEIGHT * h_diff
        + SATURATION_WEIGHT * (a.s - b.s).abs()
        + VALUE_WEIGHT * (a.v - b.v).abs()
}

/// Dominant colors extracted for one clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorProfile {
    pub colors: Vec<Hsv>,
}

impl ColorProfile {
    pub fn new(colors: Vec<Hsv>) -> Self {
        Self { colors }
    }
}

/// Per-clip dominant colors, keyed by [`ClipId`], persisted as JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColorManifest {
    clips: BTreeMap<ClipId, ColorProfile>,
}

impl ColorManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_clip(&mut self, id: ClipId, profile: ColorProfile) {
        self.clips.insert(id, profile);
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Loads a color manifest from a JSON file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let data = fs::read_to_string(path)?;
        let manifest: ColorManifest = serde_json::from_str(&data)?;
        log::debug!(
            "Loaded color manifest with {} clip(s) from {}",
            manifest.len(),
            path.display()
        );
        Ok(manifest)
    }

    /// Checks that every profile has at least one color and that every
    /// channel lies in [0.0, 1.0].
    pub fn validate(&self) -> CoreResult<()> {
        for (id, profile) in &self.clips {
            if profile.colors.is_empty() {
                return Err(CoreError::EmptyColorProfile { clip: id.clone() });
            }
            for color in &profile.colors {
                color.validate(id)?;
            }
        }
        Ok(())
    }
}

/// Named target palettes for transition-mode ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Rainbow,
    Sunset,
    Ocean,
}

static RAINBOW: [Hsv; 6] = [
    Hsv::new(0.0, 1.0, 1.0),   // Red
    Hsv::new(0.167, 1.0, 1.0), // Yellow
    Hsv::new(0.333, 1.0, 1.0), // Green
    Hsv::new(0.5, 1.0, 1.0),   // Cyan
    Hsv::new(0.667, 1.0, 1.0), // Blue
    Hsv::new(0.833, 1.0, 1.0), // Magenta
];

static SUNSET: [Hsv; 6] = [
    Hsv::new(0.05, 0.8, 1.0), // Orange-red
    Hsv::new(0.08, 0.7, 0.9), // Deep orange
    Hsv::new(0.11, 0.6, 0.8), // Warm orange
    Hsv::new(0.15, 0.5, 0.7), // Soft orange
    Hsv::new(0.2, 0.4, 0.6),  // Pink-orange
    Hsv::new(0.7, 0.3, 0.5),  // Purple-blue
];

static OCEAN: [Hsv; 6] = [
    Hsv::new(0.5, 0.3, 0.9),  // Light blue
    Hsv::new(0.5, 0.5, 0.8),  // Medium blue
    Hsv::new(0.5, 0.7, 0.7),  // Ocean blue
    Hsv::new(0.55, 0.8, 0.6), // Deep blue
    Hsv::new(0.6, 0.9, 0.5),  // Dark blue
    Hsv::new(0.65, 1.0, 0.4), // Navy blue
];

impl Palette {
    /// Target colors a clip set is ordered toward, first to last.
    pub fn targets(self) -> &'static [Hsv] {
        match self {
            Palette::Rainbow => &RAINBOW,
            Palette::Sunset => &SUNSET,
            Palette::Ocean => &OCEAN,
        }
    }
}

impl std::fmt::Display for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Palette::Rainbow => "rainbow",
            Palette::Sunset => "sunset",
            Palette::Ocean => "ocean",
        };
        f.write_str(label)
    }
}

/// Minimum distance between any color pair of two profiles.
fn clip_distance(a: &ColorProfile, b: &ColorProfile) -> f64 {
    let mut min = f64::INFINITY;
    for &from in &a.colors {
        for &to in &b.colors {
            let distance = color_distance(from, to);
            if distance < min {
                min = distance;
            }
        }
    }
    min
}

/// Orders clips as a similarity chain: start at the lowest id, then
/// repeatedly append the remaining clip closest in color to the current
/// tail. Distance ties resolve to the lowest id.
pub fn order_by_similarity(manifest: &ColorManifest) -> CoreResult<Vec<ClipId>> {
    manifest.validate()?;
    if manifest.len() < 2 {
        return Err(CoreError::InsufficientClips {
            count: manifest.len(),
        });
    }

    let clips: Vec<(&ClipId, &ColorProfile)> = manifest.clips.iter().collect();
    let mut remaining = vec![true; clips.len()];
    let mut order = Vec::with_capacity(clips.len());

    let mut current = 0;
    remaining[current] = false;
    order.push(clips[current].0.clone());

    for _ in 1..clips.len() {
        let mut best: Option<(usize, f64)> = None;
        for (index, live) in remaining.iter().enumerate() {
            if !live {
                continue;
            }
            let distance = clip_distance(clips[current].1, clips[index].1);
            // Ascending index scan: strictly-closer keeps the lowest id on ties
            if best.is_none_or(|(_, best_distance)| distance.total_cmp(&best_distance).is_lt()) {
                best = Some((index, distance));
            }
        }

        if let Some((index, _)) = best {
            remaining[index] = false;
            order.push(clips[index].0.clone());
            current = index;
        }
    }

    Ok(order)
}

/// Orders clips toward a target palette: each clip maps to the index of the
/// palette color nearest any of its dominant colors, then clips sort by
/// (target index, distance, id).
pub fn order_by_palette(manifest: &ColorManifest, palette: Palette) -> CoreResult<Vec<ClipId>> {
    manifest.validate()?;
    if manifest.len() < 2 {
        return Err(CoreError::InsufficientClips {
            count: manifest.len(),
        });
    }

    let targets = palette.targets();
    let mut mapping: Vec<(usize, f64, &ClipId)> = manifest
        .clips
        .iter()
        .map(|(id, profile)| {
            let mut best_target = 0;
            let mut best_distance = f64::INFINITY;
            for &color in &profile.colors {
                for (index, &target) in targets.iter().enumerate() {
                    let distance = color_distance(color, target);
                    if distance.total_cmp(&best_distance).is_lt() {
                        best_distance = distance;
                        best_target = index;
                    }
                }
            }
            (best_target, best_distance, id)
        })
        .collect();

    mapping.sort_by(|a, b| {
        a.0.cmp(&b.0)
            .then(a.1.total_cmp(&b.1))
            .then(a.2.cmp(b.2))
    });

    Ok(mapping.into_iter().map(|(_, _, id)| id.clone()).collect())
}
