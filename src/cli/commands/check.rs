use anyhow::Result;

use super::analyze_paths;
use crate::cli::ExitStatus;
use crate::cli::args::CheckCommand;
use crate::issue::{Issue, Severity};
use crate::reporter;

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let analyses = analyze_paths(&cmd.common)?;
    let file_count = analyses.len();

    let issues: Vec<Issue> = analyses
        .into_iter()
        .flat_map(|analysis| analysis.issues)
        .collect();

    if issues.is_empty() {
        reporter::print_no_issue(file_count);
        return Ok(ExitStatus::Success);
    }

    reporter::print_report(&issues);

    let has_errors = issues.iter().any(|i| i.severity == Severity::Error);
    Ok(if has_errors {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    })
}
