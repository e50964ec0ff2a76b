//! Fix command - rewrite convertible `define()` calls in place.
//!
//! Calls classified as blocked (non-variable arguments, non-string paths)
//! and nested calls are reported but left untouched; only mechanical
//! conversions are ever written.
//!
//! Use `--apply` to actually write files (default is dry-run mode).

use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;

use super::analyze_paths;
use crate::cli::ExitStatus;
use crate::cli::args::FixCommand;
use crate::editor::apply_fixes;
use crate::issue::{Fix, Issue, Severity};
use crate::reporter;

pub fn fix(cmd: FixCommand) -> Result<ExitStatus> {
    let apply = cmd.apply;
    let analyses = analyze_paths(&cmd.common)?;
    let file_count = analyses.len();

    let mut remaining: Vec<Issue> = Vec::new();
    let mut converted = 0usize;
    let mut files_changed = 0usize;

    for analysis in &analyses {
        remaining.extend(
            analysis
                .issues
                .iter()
                .filter(|issue| issue.fix.is_none())
                .cloned(),
        );

        let fixes: Vec<Fix> = analysis
            .issues
            .iter()
            .filter_map(|issue| issue.fix.clone())
            .collect();
        if fixes.is_empty() {
            continue;
        }

        converted += fixes.len();
        files_changed += 1;

        if apply {
            let fixed = apply_fixes(&analysis.content, &fixes)?;
            fs::write(&analysis.file_path, fixed)
                .with_context(|| format!("failed to write {}", analysis.file_path))?;
        } else {
            println!(
                "{}: {} define call(s)",
                analysis.file_path,
                fixes.len().to_string().bold()
            );
            if cmd.common.verbose {
                for fix in &fixes {
                    for line in fix.replacement.lines() {
                        println!("  {} {}", "+".green(), line);
                    }
                }
            }
        }
    }

    if converted == 0 && remaining.is_empty() {
        reporter::print_no_issue(file_count);
        return Ok(ExitStatus::Success);
    }

    if apply {
        println!(
            "{} {} define call(s) in {} file(s).",
            "Converted".green().bold(),
            converted,
            files_changed
        );
    } else if converted > 0 {
        println!(
            "{} convert {} define call(s) in {} file(s). Run with {} to write changes.",
            "Would".bold(),
            converted,
            files_changed,
            "--apply".bold()
        );
    }

    if !remaining.is_empty() {
        println!();
        reporter::print_report(&remaining);
    }

    let has_errors = remaining.iter().any(|i| i.severity == Severity::Error);
    Ok(if has_errors {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    })
}
