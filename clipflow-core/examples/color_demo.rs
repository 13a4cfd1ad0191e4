//! Color Ordering Example
//!
//! This example builds a color manifest in code and prints both orderings:
//! the similarity chain and a rainbow palette pass.
//!
//! Run with:
//! ```
//! cargo run --example color_demo
//! ```

use clipflow_core::ClipId;
use clipflow_core::color::{
    ColorManifest, ColorProfile, Hsv, Palette, order_by_palette, order_by_similarity,
};

fn main() -> clipflow_core::CoreResult<()> {
    env_logger::init();

    let mut manifest = ColorManifest::new();
    let clips = [
        ("meadow.mp4", Hsv::new(0.31, 0.9, 0.8)),
        ("harbor.mp4", Hsv::new(0.58, 0.8, 0.7)),
        ("ember.mp4", Hsv::new(0.02, 1.0, 0.9)),
        ("lagoon.mp4", Hsv::new(0.52, 0.7, 0.8)),
    ];
    for (id, color) in clips {
        manifest.add_clip(ClipId::from(id), ColorProfile::new(vec![color]));
    }

    println!("Similarity chain:");
    for (index, id) in order_by_similarity(&manifest)?.iter().enumerate() {
        println!("  {:2}. {}", index + 1, id);
    }

    println!();
    println!("Rainbow palette:");
    for (index, id) in order_by_palette(&manifest, Palette::Rainbow)?.iter().enumerate() {
        println!("  {:2}. {}", index + 1, id);
    }

    Ok(())
}
