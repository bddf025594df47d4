//! Display functions for command results

use super::formatters::{format_duration, humanize, percentage};
use crate::core::CATALOG;
use crate::counter::Estimate;
use crate::generator::GenerationSummary;
use colored::Colorize;
use std::path::Path;

const BANNER: &str = r"
                 __ _   _ _     _
                / _| | | (_)   | |
  ___ _ __ __ _| |_| |_| |_ ___| |_
 / __| '__/ _' |  _| __| | / __| __|
| (__| | | (_| | | | |_| | \__ \ |_
 \___|_|  \__,_|_|  \__|_|_|___/\__|
";

/// Print the banner with the crate version
pub fn print_intro(version: &str) {
    println!("{}", BANNER.bright_cyan());
    println!("v{version}\n");
}

/// Print the placeholder catalog as a table
pub fn print_placeholders() {
    println!("{}\n", "Available Placeholders:".bold());
    println!("{}", format!("{:<15} {}", "PLACEHOLDER", "DESCRIPTION").green());
    println!("{}", format!("{:<15} {}", "-".repeat(15), "-".repeat(50)).green());

    for placeholder in &CATALOG {
        println!(
            "{} {}",
            format!("{:<15}", placeholder.token).yellow(),
            placeholder.description
        );
    }
}

/// Print how many seed words were loaded for a category
pub fn print_loaded_words(category: &str, count: usize) {
    println!(
        "{} {} {}",
        "Loaded".cyan(),
        humanize(count).bold(),
        format!("words for {category}").cyan()
    );
}

/// Print the estimate, with a per-pattern breakdown when `verbose`
pub fn print_estimate(estimate: &Estimate, verbose: bool) {
    println!(
        "\n{} {} {}",
        "Approximately".cyan(),
        humanize(estimate.total).bold(),
        format!(
            "passwords will be generated (of {} combinations)",
            humanize(estimate.total_combinations)
        )
        .cyan()
    );

    if !verbose {
        return;
    }

    println!("\n{}", "─".repeat(70).cyan());
    println!(
        "{}",
        format!("{:<40} {:>14} {:>14}", "PATTERN", "COMBINATIONS", "VALID").green()
    );
    for pattern in &estimate.patterns {
        let line = format!(
            "{:<40} {:>14} {:>14}",
            pattern.pattern,
            humanize(pattern.combinations),
            humanize(pattern.valid)
        );
        if pattern.combinations == 0 {
            println!("{}", line.dimmed());
        } else {
            println!("{line}");
        }
    }
    println!("{}", "─".repeat(70).cyan());
}

/// Print the final counters of a completed run
pub fn print_summary(summary: &GenerationSummary, path: &Path) {
    let accepted = u128::from(summary.accepted);
    let emitted = u128::from(summary.emitted);

    println!(
        "\n{} {} {}",
        "Generated".green(),
        humanize(summary.written).bold(),
        "total passwords".green()
    );
    println!(
        "  Jobs: {}  Accepted: {} ({:.1}%)  Rejected: {}",
        humanize(summary.emitted),
        humanize(summary.accepted),
        percentage(accepted, emitted),
        humanize(summary.rejected)
    );
    if summary.duplicates > 0 {
        println!("  Duplicates skipped: {}", humanize(summary.duplicates));
    }
    println!("  Time: {}", format_duration(summary.elapsed));
    println!(
        "{} {}\n",
        "Output saved to:".green(),
        path.display().to_string().bold()
    );
}

/// Print the partial result of a cancelled run
pub fn print_cancelled(written: u64, path: &Path) {
    println!(
        "\n{} {} {}",
        "Cancelled after".yellow(),
        humanize(written).bold(),
        "passwords".yellow()
    );
    println!(
        "{} {}\n",
        "Partial output kept in:".yellow(),
        path.display().to_string().bold()
    );
}
