// clipflow-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Clipflow: Clip sequencing tool",
    long_about = "Computes clip orderings for rejoining cut clips, using motion or color \
                  continuity via the clipflow-core library."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Computes a motion-flow ordering from a motion manifest
    Sequence(SequenceArgs),
    /// Computes a color-continuity ordering from a color manifest
    Color(ColorArgs),
    /// Validates a motion manifest and prints its statistics
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
pub struct SequenceArgs {
    /// Motion manifest JSON produced by the motion analyzer
    #[arg(short = 'm', long = "manifest", required = true, value_name = "MANIFEST")]
    pub manifest: PathBuf,

    /// Optional: Override the lookahead depth (1-5)
    #[arg(long, value_name = "DEPTH", value_parser = clap::value_parser!(u8).range(1..=5))]
    pub lookahead: Option<u8>,

    /// Optional: Override the quality floor for transitions (0.0-1.0)
    #[arg(long, value_name = "SCORE")]
    pub min_score: Option<f64>,

    /// Optional: Override the direction-continuity weight (0.0-1.0)
    #[arg(long, value_name = "WEIGHT")]
    pub direction_weight: Option<f64>,

    /// Optional: Override the number of candidates expanded per step
    #[arg(long, value_name = "COUNT")]
    pub max_branches: Option<usize>,

    /// Optional: Write the computed plan as JSON to this path
    #[arg(long, value_name = "FILE")]
    pub plan_json: Option<PathBuf>,

    /// Apply the ordering to clip files on disk (requires --input-dir and --output-dir)
    #[arg(long, requires = "input_dir", requires = "output_dir")]
    pub apply: bool,

    /// Directory containing the clip files named in the manifest
    #[arg(short = 'i', long = "input-dir", value_name = "INPUT_DIR")]
    pub input_dir: Option<PathBuf>,

    /// Directory where the ordered sequence files will be created
    #[arg(short = 'o', long = "output-dir", value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,
}

/// Target palette for color transition-mode ordering.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteArg {
    Rainbow,
    Sunset,
    Ocean,
}

impl From<PaletteArg> for clipflow_core::color::Palette {
    fn from(palette: PaletteArg) -> Self {
        match palette {
            PaletteArg::Rainbow => Self::Rainbow,
            PaletteArg::Sunset => Self::Sunset,
            PaletteArg::Ocean => Self::Ocean,
        }
    }
}

#[derive(Parser, Debug)]
pub struct ColorArgs {
    /// Color manifest JSON with per-clip dominant colors
    #[arg(short = 'm', long = "manifest", required = true, value_name = "MANIFEST")]
    pub manifest: PathBuf,

    /// Optional: Order toward a target palette instead of by similarity
    #[arg(long, value_enum, value_name = "PALETTE")]
    pub palette: Option<PaletteArg>,

    /// Apply the ordering to clip files on disk (requires --input-dir and --output-dir)
    #[arg(long, requires = "input_dir", requires = "output_dir")]
    pub apply: bool,

    /// Directory containing the clip files named in the manifest
    #[arg(short = 'i', long = "input-dir", value_name = "INPUT_DIR")]
    pub input_dir: Option<PathBuf>,

    /// Directory where the ordered sequence files will be created
    #[arg(short = 'o', long = "output-dir", value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Motion manifest JSON to validate
    #[arg(short = 'm', long = "manifest", required = true, value_name = "MANIFEST")]
    pub manifest: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_parse_sequence_basic_args() {
        let args = vec!["clipflow", "sequence", "--manifest", "motion_manifest.json"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Sequence(sequence_args) => {
                assert_eq!(sequence_args.manifest, PathBuf::from("motion_manifest.json"));
                assert!(sequence_args.lookahead.is_none());
                assert!(sequence_args.min_score.is_none());
                assert!(sequence_args.plan_json.is_none());
                assert!(!sequence_args.apply);
            }
            _ => panic!("Expected Sequence command"),
        }
    }

    #[test]
    fn test_parse_sequence_with_overrides() {
        let args = vec![
            "clipflow",
            "sequence",
            "-m",
            "manifest.json",
            "--lookahead",
            "4",
            "--min-score",
            "0.6",
            "--direction-weight",
            "0.7",
            "--max-branches",
            "12",
            "--plan-json",
            "plan.json",
        ];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Sequence(sequence_args) => {
                assert_eq!(sequence_args.lookahead, Some(4));
                assert_eq!(sequence_args.min_score, Some(0.6));
                assert_eq!(sequence_args.direction_weight, Some(0.7));
                assert_eq!(sequence_args.max_branches, Some(12));
                assert_eq!(sequence_args.plan_json, Some(PathBuf::from("plan.json")));
            }
            _ => panic!("Expected Sequence command"),
        }
    }

    #[test]
    fn test_parse_sequence_rejects_out_of_range_lookahead() {
        let args = vec!["clipflow", "sequence", "-m", "manifest.json", "--lookahead", "9"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_parse_apply_requires_directories() {
        let args = vec!["clipflow", "sequence", "-m", "manifest.json", "--apply"];
        assert!(Cli::try_parse_from(args).is_err());

        let args = vec![
            "clipflow", "sequence", "-m", "manifest.json", "--apply", "-i", "clips", "-o", "ordered",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Sequence(sequence_args) => {
                assert!(sequence_args.apply);
                assert_eq!(sequence_args.input_dir, Some(PathBuf::from("clips")));
                assert_eq!(sequence_args.output_dir, Some(PathBuf::from("ordered")));
            }
            _ => panic!("Expected Sequence command"),
        }
    }

    #[test]
    fn test_parse_color_with_palette() {
        let args = vec!["clipflow", "color", "-m", "colors.json", "--palette", "sunset"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Color(color_args) => {
                assert_eq!(color_args.manifest, PathBuf::from("colors.json"));
                assert_eq!(color_args.palette, Some(PaletteArg::Sunset));
            }
            _ => panic!("Expected Color command"),
        }
    }

    #[test]
    fn test_parse_validate() {
        let args = vec!["clipflow", "validate", "--manifest", "manifest.json"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Validate(validate_args) => {
                assert_eq!(validate_args.manifest, PathBuf::from("manifest.json"));
            }
            _ => panic!("Expected Validate command"),
        }
    }
}
