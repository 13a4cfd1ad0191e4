// clipflow-cli/src/commands/color.rs
//
// Implementation of the `color` command: load a color manifest and order
// clips by dominant-color similarity or toward a target palette.

use log::info;

use clipflow_core::apply::apply_sequence;
use clipflow_core::color::{ColorManifest, order_by_palette, order_by_similarity};
use clipflow_core::error::CoreResult;

use crate::cli::ColorArgs;
use crate::output::{print_heading, print_info, print_success, timestamp};

/// Execute the color command
pub fn execute_color(args: ColorArgs) -> CoreResult<()> {
    print_heading("Color Ordering");
    print_info("Run started", timestamp());
    print_info("Manifest", args.manifest.display());

    info!("Loading color manifest from {}", args.manifest.display());
    let manifest = ColorManifest::load(&args.manifest)?;
    print_info("Clips", manifest.len());

    let order = match args.palette {
        Some(palette) => {
            let palette = palette.into();
            print_info("Mode", format!("palette ({palette})"));
            order_by_palette(&manifest, palette)?
        }
        None => {
            print_info("Mode", "similarity");
            order_by_similarity(&manifest)?
        }
    };

    println!();
    for (index, id) in order.iter().enumerate() {
        println!("{:4}. {}", index + 1, id);
    }
    println!();

    if args.apply {
        // clap guarantees both directories are present with --apply
        if let (Some(input_dir), Some(output_dir)) = (&args.input_dir, &args.output_dir) {
            info!("Applying ordering to {}", output_dir.display());
            let created = apply_sequence(&order, input_dir, output_dir)?;
            print_success(&format!(
                "Applied {} clip(s) to {}",
                created.len(),
                output_dir.display()
            ));
        }
    }

    print_info("Run finished", timestamp());
    print_success("Color ordering complete");
    Ok(())
}
