//! Pure formatting functions for UI output.
//!
//! All user-facing text goes through here: errors to stderr, progress and
//! results to stdout. Styling is left to `console`, which drops colors when
//! the stream is not a terminal.

use console::style;

use crate::domain::{CanonicalSource, RuleSet, Version};
use crate::rewriter::Mismatch;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Render the mismatch list of a failed check, one `- ` bullet per entry.
pub fn format_mismatches(mismatches: &[Mismatch]) -> String {
    let mut out = String::from("version check failed:\n");
    for mismatch in mismatches {
        out.push_str(&format!("- {}\n", mismatch));
    }
    out
}

/// Print the complete outcome of a check.
pub fn display_check_result(version: &Version, mismatches: &[Mismatch]) {
    if mismatches.is_empty() {
        display_success(&format!("version check passed: {}", version));
    } else {
        print!("{}", format_mismatches(mismatches));
    }
}

/// Files a dry run would have written.
///
/// # Arguments
/// * `version` - The version the bump targeted
/// * `paths` - Staged paths; empty means nothing would change
pub fn display_dry_run(version: &Version, paths: &[String]) {
    if paths.is_empty() {
        display_status(&format!("Dry run: no changes needed for {}", version));
        return;
    }
    display_status(&format!(
        "Dry run: {} file(s) would be updated to {}",
        paths.len(),
        version
    ));
    for path in paths {
        println!("  {}", style(path).cyan());
    }
}

/// Display the canonical source and every rule in application order.
pub fn display_rules(source: &CanonicalSource, rules: &RuleSet) {
    println!("{}", style("Canonical source:").bold());
    println!("  {}  {}", source.path, style(&source.pattern).dim());
    println!("\n{}", style(format!("Rules ({}):", rules.len())).bold());
    for (i, rule) in rules.iter().enumerate() {
        println!(
            "  {:>2}. {} (x{})  {}",
            i + 1,
            rule.path,
            rule.expected,
            style(&rule.pattern).dim()
        );
    }
}
