// clipflow-cli/src/main.rs
//
// This file defines the command-line entry point for the clipflow clip
// sequencing tool.
//
// Responsibilities include:
// - Parsing user-provided arguments (structures defined in cli.rs).
// - Setting up logging via env_logger (RUST_LOG).
// - Dispatching to the command implementations in commands/.
// - Translating core errors into a styled message and exit code.

use std::process;

use clap::Parser;
use console::style;

use clipflow_cli::cli::{Cli, Commands};
use clipflow_cli::commands;

fn main() {
    // RUST_LOG=debug surfaces the optimizer's step tracing
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sequence(args) => commands::sequence::execute_sequence(args),
        Commands::Color(args) => commands::color::execute_color(args),
        Commands::Validate(args) => commands::validate::execute_validate(args),
    };

    if let Err(error) = result {
        eprintln!("{} {}", style("Error:").red().bold(), error);
        process::exit(1);
    }
}
