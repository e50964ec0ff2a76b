//! Body Rewriter: assembles the final replacement text from the generated
//! imports and the factory callback's body.
//!
//! The block's direct child statements are emitted in order, joined by
//! single newlines, each statement's own text preserved byte-for-byte. Two
//! statements are rewritten along the way: a `"use strict"` directive is
//! dropped (modules are always strict), and a direct `return` becomes
//! `export default`. By the time this stage runs the Import List Builder
//! has already succeeded, so nothing here can fail.

use swc_common::{BytePos, Span, Spanned};
use swc_ecma_ast::{BlockStmt, Expr, Lit, ReturnStmt, Stmt};

use super::classify::{Callback, CallbackBody};
use super::source::SourceText;

const RETURN_KEYWORD: &str = "return";

/// Full replacement text for the converted definition: imports first, each
/// newline-terminated, then the rewritten body.
pub(crate) fn replacement_text(
    callback: &Callback<'_>,
    imports: &[String],
    src: &SourceText<'_>,
) -> String {
    let mut out = String::new();
    for import in imports {
        out.push_str(import);
    }
    match callback.body() {
        Some(CallbackBody::Block(block)) => out.push_str(&block_body_text(block, src)),
        // An expression-bodied arrow implicitly returns the module value.
        Some(CallbackBody::Expr(expr)) => {
            out.push_str("export default ");
            out.push_str(src.span_text(expr.span()));
            out.push(';');
        }
        None => {}
    }
    out
}

fn block_body_text(block: &BlockStmt, src: &SourceText<'_>) -> String {
    let mut parts = Vec::with_capacity(block.stmts.len());
    let mut in_prologue = true;
    // Just past the opening brace.
    let mut prev_end = BytePos(block.span.lo.0 + 1);

    for stmt in &block.stmts {
        // Statement spans exclude surrounding trivia; the gap holds any
        // comments written between statements.
        push_comment_lines(src.span_text(Span::new(prev_end, stmt.span().lo)), &mut parts);
        prev_end = stmt.span().hi;

        if in_prologue {
            match directive_value(stmt) {
                Some("use strict") => continue,
                Some(_) => {}
                None => in_prologue = false,
            }
        }
        match stmt {
            Stmt::Return(ret) => parts.push(export_default_text(ret, src)),
            _ => parts.push(src.span_text(stmt.span()).to_string()),
        }
    }
    // Comments between the last statement and the closing brace.
    push_comment_lines(
        src.span_text(Span::new(prev_end, BytePos(block.span.hi.0 - 1))),
        &mut parts,
    );
    parts.join("\n")
}

/// Keep inter-statement comments, one trimmed line per output line.
/// Whitespace-only gaps contribute nothing.
fn push_comment_lines(gap: &str, parts: &mut Vec<String>) {
    for line in gap.lines() {
        let line = line.trim();
        if !line.is_empty() {
            parts.push(line.to_string());
        }
    }
}

/// The directive string of a prologue statement, or `None` when the
/// statement ends the directive prologue.
fn directive_value(stmt: &Stmt) -> Option<&str> {
    match stmt {
        Stmt::Expr(expr_stmt) => match &*expr_stmt.expr {
            // `Str.value` is WTF-8; a non-UTF-8 literal cannot be a known
            // directive and ends the prologue.
            Expr::Lit(Lit::Str(lit)) => lit.value.as_str(),
            _ => None,
        },
        _ => None,
    }
}

/// `return <expr>;` → `export default <expr>;`, keeping the expression text
/// and any trailing punctuation exactly as authored.
fn export_default_text(ret: &ReturnStmt, src: &SourceText<'_>) -> String {
    if ret.arg.is_none() {
        // `export default;` would not parse; a bare return exports the
        // value the callback would have produced.
        return "export default undefined;".to_string();
    }
    let text = src.span_text(ret.span);
    format!("export default{}", &text[RETURN_KEYWORD.len()..])
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use swc_common::SourceMap;
    use swc_ecma_ast::Program;

    use super::*;

    fn first_stmt(source: &str) -> (Stmt, crate::parser::ParsedFile) {
        let parsed =
            crate::parser::parse_source(source.to_string(), "t.js", Arc::new(SourceMap::default()))
                .unwrap();
        let Program::Script(script) = &parsed.program else {
            panic!("expected a script");
        };
        (script.body[0].clone(), parsed)
    }

    #[test]
    fn directive_value_of_a_string_statement() {
        let (stmt, _parsed) = first_stmt("\"use strict\";");
        assert_eq!(directive_value(&stmt), Some("use strict"));
    }

    #[test]
    fn non_string_statements_end_the_prologue() {
        let (stmt, _parsed) = first_stmt("var a = 1;");
        assert_eq!(directive_value(&stmt), None);
    }

    #[test]
    fn comment_lines_are_trimmed_and_kept() {
        let mut parts = Vec::new();
        push_comment_lines("\n    // setup\n    ", &mut parts);

        assert_eq!(parts, vec!["// setup"]);
    }

    #[test]
    fn whitespace_gaps_contribute_nothing() {
        let mut parts = Vec::new();
        push_comment_lines("  \n\t\n", &mut parts);

        assert!(parts.is_empty());
    }
}
