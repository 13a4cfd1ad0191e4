// clipflow-cli/src/output.rs
//
// Styled terminal output helpers shared by the subcommands.

use std::fmt::Display;

use console::style;

/// Print a heading with clear separation
pub fn print_heading(text: &str) {
    let line = "=".repeat(50);
    println!("\n{}", style(&line).cyan());
    println!("{}", style(text).bold());
    println!("{}\n", style(&line).cyan());
}

/// Print a section heading (smaller than main heading)
pub fn print_section(text: &str) {
    let line = "-".repeat(40);
    println!("\n{}", style(&line).cyan());
    println!("{}", style(text).bold());
    println!("{}", style(&line).cyan());
}

/// Print an info line with label and value, with the label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    println!("{}: {}", style(label).cyan(), value);
}

/// Print a success message
pub fn print_success(text: &str) {
    println!("{} {}", style("[OK]").green(), text);
}

/// Print a warning message
pub fn print_warning(text: &str) {
    println!("{} {}", style("[WARN]").yellow(), text);
}

/// Returns the current local timestamp for run banners,
/// e.g. "2024-06-01 12:30:45".
pub fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
