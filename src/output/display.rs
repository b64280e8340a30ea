//! Display functions for command results

use super::formatters::{format_columns, mode_label};
use crate::commands::{BatchReport, SolveOutcome};
use colored::Colorize;

/// Width budget for the result columns
const RESULT_WIDTH: usize = 60;

/// Print the result of a one-shot solve
pub fn print_solve_outcome(outcome: &SolveOutcome) {
    let report = &outcome.report;

    println!("\n{}", "─".repeat(RESULT_WIDTH).cyan());
    println!(
        "Pattern: {}   [{}]",
        report.pattern().to_uppercase().bright_yellow().bold(),
        mode_label(report.mode())
    );
    println!("{}", "─".repeat(RESULT_WIDTH).cyan());

    if report.match_count() == 0 {
        println!("\n{}", "No matches found.".red());
    } else {
        println!();
        for row in format_columns(report.words(), RESULT_WIDTH) {
            println!("  {row}");
        }
    }

    println!();
    println!(
        "{} match{} in {:.1}ms",
        report.match_count().to_string().bright_cyan().bold(),
        if report.match_count() == 1 { "" } else { "es" },
        outcome.duration.as_secs_f64() * 1000.0
    );

    if report.is_capped() {
        println!(
            "{}",
            format!(
                "Showing the first {} matches only; narrow the pattern to see the rest.",
                report.match_count()
            )
            .yellow()
        );
    }
}

/// Print the aggregate result of a batch run
pub fn print_batch_report(report: &BatchReport) {
    println!("\n{}", "═".repeat(RESULT_WIDTH).cyan());
    println!(" {} ", "BATCH RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(RESULT_WIDTH).cyan());
    println!();

    for line in &report.lines {
        match &line.outcome {
            Ok(count) => {
                println!(
                    "  {:>4}  {:<20} {count:>6} matches",
                    line.line_number, line.pattern
                );
            }
            Err(e) => {
                println!(
                    "  {:>4}  {:<20} {}",
                    line.line_number,
                    line.pattern,
                    format!("error: {e}").red()
                );
            }
        }
    }

    println!("\n  Patterns:      {}", report.lines.len());
    println!("  Total matches: {}", report.total_matches);
    if report.error_count > 0 {
        println!(
            "  Errors:        {}",
            report.error_count.to_string().red().bold()
        );
    }
    println!("  Time:          {:.2}s", report.duration.as_secs_f64());
}
