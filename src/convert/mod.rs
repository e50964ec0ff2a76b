//! The AMD → ES module converter.
//!
//! A pure, stateless pipeline over one call expression:
//! classify → build imports → rewrite body. The two failure states skip the
//! rewrite entirely; they are classification outcomes, not faults.
//!
//! - `classify`: is this a top-level `define(...)` with a factory callback?
//! - `imports`: one `import` statement per dependency path, in order.
//! - `rewrite`: body text splicing (`return` → `export default`, directive
//!   stripping) and final assembly.
//!
//! The converter never touches state outside the call node and the
//! read-only [`SourceText`] it is handed, so call sites and files can be
//! processed in parallel without coordination.

mod classify;
mod imports;
mod rewrite;
mod source;

use std::ops::Range;

use swc_common::Span;
use swc_ecma_ast::CallExpr;

pub use classify::{DEFINE_CALLEE, is_define_call};
pub use source::SourceText;

/// Why a `define` call cannot be converted automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    /// A factory parameter (or the whole factory) is not a plain bound
    /// name — e.g. a destructuring pattern, or no callback at all.
    ArgumentsNotVariables,
    /// A dependency path is not a plain string literal.
    PathsNotStrings,
}

/// The generated fix: replace `range` (file-local byte offsets) with `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub range: Range<usize>,
    pub text: String,
}

/// Outcome of running the converter over one call expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Not an AMD definition (wrong callee, or not in top-level position).
    NotApplicable,
    /// An AMD definition that cannot be converted safely.
    Blocked(BlockReason),
    /// An AMD definition with its mechanical rewrite.
    Convertible(Replacement),
}

/// Where the call sits in the program.
///
/// Only direct top-level statements are eligible; for those the enclosing
/// expression-statement span is the replacement target, so a trailing
/// semicolon is swallowed rather than left as a dangling empty statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallPosition {
    TopLevel { stmt_span: Span },
    Nested,
}

/// Run the full pipeline over one call expression.
pub fn convert_define_call(
    call: &CallExpr,
    position: CallPosition,
    src: &SourceText<'_>,
) -> Classification {
    let CallPosition::TopLevel { stmt_span } = position else {
        return Classification::NotApplicable;
    };

    let parts = match classify::classify(call) {
        classify::Classified::NotDefine => return Classification::NotApplicable,
        classify::Classified::NoCallback => {
            return Classification::Blocked(BlockReason::ArgumentsNotVariables);
        }
        classify::Classified::Define(parts) => parts,
    };

    let imports = match imports::build_imports(&parts, src) {
        Ok(imports) => imports,
        Err(reason) => return Classification::Blocked(reason),
    };

    Classification::Convertible(Replacement {
        range: src.range(stmt_span),
        text: rewrite::replacement_text(&parts.callback, &imports, src),
    })
}
