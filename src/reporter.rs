//! Report formatting and printing utilities.
//!
//! Separate from the analysis so the crate can be used as a library
//! without printing side effects.

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::issue::{Issue, Severity};

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print issues in a cargo-style format.
///
/// Issues are sorted and displayed with:
/// - Severity and message
/// - Clickable file location (path:line:col)
/// - Source code context with caret indicator
/// - Summary of total errors/warnings
pub fn print_report(issues: &[Issue]) {
    let mut sorted = issues.to_vec();
    sorted.sort();

    let max_line_width = sorted
        .iter()
        .map(|i| i.line.to_string().len())
        .max()
        .unwrap_or(1);

    for issue in &sorted {
        let severity_str = match issue.severity {
            Severity::Error => "error".bold().red(),
            Severity::Warning => "warning".bold().yellow(),
        };

        println!(
            "{}: {}  {}",
            severity_str,
            issue.message,
            issue.rule.to_string().dimmed().cyan()
        );
        println!(
            "  {} {}:{}:{}",
            "-->".blue(),
            issue.file_path,
            issue.line,
            issue.col
        );

        if let Some(source_line) = &issue.source_line {
            let caret = match issue.severity {
                Severity::Error => "^".red(),
                Severity::Warning => "^".yellow(),
            };

            println!("{:>width$} {}", "", "|".blue(), width = max_line_width);
            println!(
                "{:>width$} {} {}",
                issue.line.to_string().blue(),
                "|".blue(),
                source_line,
                width = max_line_width
            );
            // Caret under the column (1-based); use display width so CJK
            // text in the line does not misalign it.
            let prefix: String = source_line
                .chars()
                .take(issue.col.saturating_sub(1))
                .collect();
            println!(
                "{:>width$} {} {}{}",
                "",
                "|".blue(),
                " ".repeat(prefix.width()),
                caret,
                width = max_line_width
            );
        }
        println!();
    }

    print_summary(&sorted);
}

fn print_summary(issues: &[Issue]) {
    let errors = issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count();
    let warnings = issues.len() - errors;

    let mut parts = Vec::new();
    if errors > 0 {
        parts.push(format!("{} error(s)", errors).red().bold().to_string());
    }
    if warnings > 0 {
        parts.push(format!("{} warning(s)", warnings).yellow().bold().to_string());
    }
    if !parts.is_empty() {
        println!("Found {}.", parts.join(", "));
    }
}

/// Printed when a run finds nothing to report.
pub fn print_no_issue(files_checked: usize) {
    println!(
        "{} No AMD definitions found in {} file(s).",
        SUCCESS_MARK.green(),
        files_checked
    );
}
