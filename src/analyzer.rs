//! Per-file analysis driver.
//!
//! Parses one file, feeds every top-level call statement through the
//! converter, and maps classifications onto [`Issue`]s. A separate visitor
//! pass flags `define` calls that are not in top-level position; those are
//! reported but never rewritten.

use std::collections::HashSet;
use std::fs;
use std::sync::Arc;

use swc_common::{BytePos, SourceMap, Span};
use swc_ecma_ast::{CallExpr, Expr, ModuleItem, Program, Stmt};
use swc_ecma_visit::{Visit, VisitWith};

use crate::convert::{CallPosition, Classification, SourceText, convert_define_call, is_define_call};
use crate::issue::{Fix, Issue};
use crate::parser;

/// Everything the commands need about one analyzed file.
pub struct FileAnalysis {
    pub file_path: String,
    /// Original file content; fixes are byte ranges into this.
    pub content: String,
    pub issues: Vec<Issue>,
}

/// Read and analyze one file. I/O and parse failures become issues rather
/// than errors, so one broken file never aborts a whole run.
pub fn analyze_file(file_path: &str, source_map: Arc<SourceMap>) -> FileAnalysis {
    match fs::read_to_string(file_path) {
        Ok(content) => {
            let issues = analyze_source(file_path, &content, source_map);
            FileAnalysis {
                file_path: file_path.to_string(),
                content,
                issues,
            }
        }
        Err(err) => FileAnalysis {
            file_path: file_path.to_string(),
            content: String::new(),
            issues: vec![Issue::read_error(file_path, &err.to_string())],
        },
    }
}

/// Analyze already-loaded source text.
pub fn analyze_source(file_path: &str, content: &str, source_map: Arc<SourceMap>) -> Vec<Issue> {
    let parsed = match parser::parse_source(content.to_string(), file_path, source_map) {
        Ok(parsed) => parsed,
        Err(err) => return vec![Issue::parse_error(file_path, &err.to_string())],
    };
    let src = SourceText::new(content, parsed.start_pos);

    let mut issues = Vec::new();
    let mut top_level_defines: HashSet<BytePos> = HashSet::new();

    for stmt in top_level_stmts(&parsed.program) {
        let Stmt::Expr(expr_stmt) = stmt else { continue };
        let Expr::Call(call) = &*expr_stmt.expr else {
            continue;
        };
        if is_define_call(call) {
            top_level_defines.insert(call.span.lo);
        }

        let position = CallPosition::TopLevel {
            stmt_span: expr_stmt.span,
        };
        // Diagnostics anchor at the call node, whichever check failed.
        let (line, col, source_line) = locate(&parsed.source_map, call.span.lo);
        match convert_define_call(call, position, &src) {
            Classification::NotApplicable => {}
            Classification::Blocked(reason) => {
                issues.push(Issue::amd_blocked(file_path, line, col, reason, source_line));
            }
            Classification::Convertible(replacement) => {
                let fix = Fix {
                    range: replacement.range,
                    replacement: replacement.text,
                };
                issues.push(Issue::amd_convertible(file_path, line, col, source_line, fix));
            }
        }
    }

    let mut collector = DefineCallCollector::default();
    parsed.program.visit_with(&mut collector);
    for span in collector.calls {
        if !top_level_defines.contains(&span.lo) {
            let (line, col, source_line) = locate(&parsed.source_map, span.lo);
            issues.push(Issue::nested_define(file_path, line, col, source_line));
        }
    }

    issues
}

fn top_level_stmts(program: &Program) -> Vec<&Stmt> {
    match program {
        Program::Module(module) => module
            .body
            .iter()
            .filter_map(|item| match item {
                ModuleItem::Stmt(stmt) => Some(stmt),
                ModuleItem::ModuleDecl(_) => None,
            })
            .collect(),
        Program::Script(script) => script.body.iter().collect(),
    }
}

fn locate(source_map: &SourceMap, pos: BytePos) -> (usize, usize, Option<String>) {
    let loc = source_map.lookup_char_pos(pos);
    let source_line = loc.file.get_line(loc.line - 1).map(|line| line.to_string());
    (loc.line, loc.col_display + 1, source_line)
}

/// Collects every `define(...)` call site in the file, nested or not.
#[derive(Default)]
struct DefineCallCollector {
    calls: Vec<Span>,
}

impl Visit for DefineCallCollector {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        if is_define_call(node) {
            self.calls.push(node.span);
        }
        node.visit_children_with(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::Rule;

    fn analyze(source: &str) -> Vec<Issue> {
        analyze_source("test.js", source, Arc::new(SourceMap::default()))
    }

    #[test]
    fn nested_define_is_a_warning_without_fix() {
        let issues = analyze("if (x) { define(['a'], function(a) {}); }");

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, Rule::NestedDefine);
        assert!(issues[0].fix.is_none());
    }

    #[test]
    fn define_inside_expression_is_not_rewritten() {
        let issues = analyze("var mod = define(['a'], function(a) {});");

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, Rule::NestedDefine);
    }

    #[test]
    fn broken_source_reports_parse_error() {
        let issues = analyze("define((");

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, Rule::ParseError);
    }

    #[test]
    fn issue_anchors_at_the_call_node() {
        let issues = analyze("\ndefine(['x'], function({n}) {});");

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line, 2);
        assert_eq!(issues[0].col, 1);
    }
}
