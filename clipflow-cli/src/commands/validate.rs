// clipflow-cli/src/commands/validate.rs
//
// Implementation of the `validate` command: check a motion manifest's
// numeric domains and print its statistics.

use log::info;

use clipflow_core::error::CoreResult;
use clipflow_core::manifest::MotionManifest;

use crate::cli::ValidateArgs;
use crate::output::{print_heading, print_info, print_section, print_success};

/// Execute the validate command
pub fn execute_validate(args: ValidateArgs) -> CoreResult<()> {
    print_heading("Manifest Validation");
    print_info("Manifest", args.manifest.display());

    info!("Loading motion manifest from {}", args.manifest.display());
    let manifest = MotionManifest::load(&args.manifest)?;
    manifest.validate()?;

    print_section("Analysis Run");
    let speed = manifest.metadata.speed;
    print_info("Manifest version", &manifest.metadata.version);
    print_info("Created", &manifest.metadata.created);
    print_info("Last modified", &manifest.metadata.last_modified);
    print_info(
        "Analysis speed",
        format!(
            "{} (every {} frame(s), vector threshold {:.1}, confidence threshold {:.1})",
            speed,
            speed.sample_rate(),
            speed.vector_threshold(),
            speed.confidence_threshold()
        ),
    );

    print_section("Statistics");
    let stats = manifest.statistics();
    print_info("Clips", stats.clip_count);
    print_info("Mean intensity", format!("{:.3}", stats.mean_intensity));
    print_info("Mean confidence", format!("{:.3}", stats.mean_confidence));

    println!();
    println!("Start directions:");
    for (direction, count) in &stats.start_directions {
        println!("  {:>6}: {}", direction.to_string(), count);
    }
    println!("End directions:");
    for (direction, count) in &stats.end_directions {
        println!("  {:>6}: {}", direction.to_string(), count);
    }

    print_success("Manifest is valid");
    Ok(())
}
