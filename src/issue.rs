use std::{cmp::Ordering, fmt, ops::Range};

use crate::convert::BlockReason;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    AmdDefine,
    NestedDefine,
    ParseError,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::AmdDefine => write!(f, "amd-define"),
            Rule::NestedDefine => write!(f, "nested-define"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

/// An automatic rewrite: replace `range` (byte offsets into the original
/// file content) with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fix {
    pub range: Range<usize>,
    pub replacement: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
    pub message: String,
    pub severity: Severity,
    pub rule: Rule,
    pub source_line: Option<String>,
    pub fix: Option<Fix>,
}

impl Issue {
    /// A convertible `define` call, carrying its rewrite.
    pub fn amd_convertible(
        file_path: &str,
        line: usize,
        col: usize,
        source_line: Option<String>,
        fix: Fix,
    ) -> Self {
        Self {
            file_path: file_path.to_string(),
            line,
            col,
            message: "AMD style is not allowed, use static import/export".to_string(),
            severity: Severity::Error,
            rule: Rule::AmdDefine,
            source_line,
            fix: Some(fix),
        }
    }

    /// A `define` call that cannot be converted automatically; no fix.
    pub fn amd_blocked(
        file_path: &str,
        line: usize,
        col: usize,
        reason: BlockReason,
        source_line: Option<String>,
    ) -> Self {
        let message = match reason {
            BlockReason::ArgumentsNotVariables => {
                "AMD style is not allowed, arguments must be variables"
            }
            BlockReason::PathsNotStrings => {
                "AMD style is not allowed, dependency paths must be string literals"
            }
        };
        Self {
            file_path: file_path.to_string(),
            line,
            col,
            message: message.to_string(),
            severity: Severity::Error,
            rule: Rule::AmdDefine,
            source_line,
            fix: None,
        }
    }

    pub fn nested_define(
        file_path: &str,
        line: usize,
        col: usize,
        source_line: Option<String>,
    ) -> Self {
        Self {
            file_path: file_path.to_string(),
            line,
            col,
            message: "nested define call is not converted".to_string(),
            severity: Severity::Warning,
            rule: Rule::NestedDefine,
            source_line,
            fix: None,
        }
    }

    pub fn parse_error(file_path: &str, error: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: 1,
            col: 1,
            message: format!("Failed to parse: {}", error),
            severity: Severity::Error,
            rule: Rule::ParseError,
            source_line: None,
            fix: None,
        }
    }

    pub fn read_error(file_path: &str, error: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: 1,
            col: 1,
            message: format!("Failed to read: {}", error),
            severity: Severity::Error,
            rule: Rule::ParseError,
            source_line: None,
            fix: None,
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> Ordering {
        // Sort by: file_path, line, col, message.
        //
        // Message comparison is needed for deterministic ordering: files
        // are analyzed in parallel and several issues can share a position.
        self.file_path
            .cmp(&other.file_path)
            .then_with(|| self.line.cmp(&other.line))
            .then_with(|| self.col.cmp(&other.col))
            .then_with(|| self.message.cmp(&other.message))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
