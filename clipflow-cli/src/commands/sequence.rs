// clipflow-cli/src/commands/sequence.rs
//
// Implementation of the `sequence` command: load a motion manifest, run the
// bounded-lookahead optimizer, print the transition report, and optionally
// persist the plan and apply the ordering to files.

use std::fs;

use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use once_cell::sync::Lazy;

use clipflow_core::apply::apply_sequence;
use clipflow_core::config::AnalysisSettingsBuilder;
use clipflow_core::error::CoreResult;
use clipflow_core::manifest::MotionManifest;
use clipflow_core::report::build_report;
use clipflow_core::sequencing::SequenceOptimizer;

use crate::cli::SequenceArgs;
use crate::output::{print_heading, print_info, print_success, print_warning, timestamp};

static PROGRESS_STYLE: Lazy<ProgressStyle> = Lazy::new(|| {
    ProgressStyle::with_template("{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} clips placed")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##-")
});

/// Execute the sequence command
pub fn execute_sequence(args: SequenceArgs) -> CoreResult<()> {
    print_heading("Clip Sequencing");
    print_info("Run started", timestamp());
    print_info("Manifest", args.manifest.display());

    info!("Loading motion manifest from {}", args.manifest.display());
    let manifest = MotionManifest::load(&args.manifest)?;
    manifest.validate()?;
    print_info("Clips", manifest.len());
    print_info("Analysis speed", manifest.metadata.speed);

    // Settings: manifest speed tier plus any CLI overrides
    let mut builder = AnalysisSettingsBuilder::new().speed(manifest.metadata.speed);
    if let Some(lookahead) = args.lookahead {
        builder = builder.lookahead(lookahead as usize);
    }
    if let Some(min_score) = args.min_score {
        builder = builder.min_transition_score(min_score);
    }
    if let Some(weight) = args.direction_weight {
        builder = builder.direction_weight(weight);
    }
    if let Some(branches) = args.max_branches {
        builder = builder.max_branches(branches);
    }
    let settings = builder.build();
    settings.validate()?;
    print_info("Lookahead", settings.lookahead);
    print_info("Quality floor", format!("{:.2}", settings.min_transition_score));

    info!("Optimizing sequence over {} clip(s)", manifest.len());
    let progress = ProgressBar::new(manifest.len() as u64);
    progress.set_style(PROGRESS_STYLE.clone());

    let bar = progress.clone();
    let plan = SequenceOptimizer::new(&manifest, settings.clone())
        .with_progress(move |placed, _total| bar.set_position(placed as u64))
        .run()?;
    progress.finish_and_clear();

    println!("{}", build_report(&plan, &settings));
    if plan.flagged_count() > 0 {
        print_warning(&format!(
            "{} transition(s) fell below the quality floor; review the report before joining",
            plan.flagged_count()
        ));
    }

    if let Some(path) = &args.plan_json {
        let json = serde_json::to_string_pretty(&plan)?;
        fs::write(path, json)?;
        print_info("Plan written to", path.display());
    }

    if args.apply {
        // clap guarantees both directories are present with --apply
        if let (Some(input_dir), Some(output_dir)) = (&args.input_dir, &args.output_dir) {
            info!("Applying sequence to {}", output_dir.display());
            let created = apply_sequence(&plan.order, input_dir, output_dir)?;
            print_success(&format!(
                "Applied {} clip(s) to {}",
                created.len(),
                output_dir.display()
            ));
        }
    }

    print_info("Run finished", timestamp());
    print_success("Sequencing complete");
    Ok(())
}
