//! Call Classifier: decides whether a call expression is an AMD module
//! definition and, if so, pulls out the pieces the later stages work on.

use swc_ecma_ast::{ArrayLit, ArrowExpr, BlockStmt, BlockStmtOrExpr, CallExpr, Callee, Expr, Function, Pat};

/// The reserved AMD definition callee.
pub const DEFINE_CALLEE: &str = "define";

/// Outcome of classifying a single call expression.
pub(crate) enum Classified<'a> {
    /// Not an AMD definition at all; the converter has nothing to say.
    NotDefine,
    /// `define(...)` with no function or arrow argument. There is nothing
    /// to bind the imported names to, so conversion is impossible.
    NoCallback,
    /// An AMD definition with the parts the next stages need.
    Define(DefineParts<'a>),
}

pub(crate) struct DefineParts<'a> {
    /// Dependency-path array. `None` when the first argument is not an
    /// array literal; the import list is then empty.
    pub paths: Option<&'a ArrayLit>,
    /// The factory callback (first function or arrow argument).
    pub callback: Callback<'a>,
}

/// The AMD factory callback, either a classic function expression or an
/// arrow function.
pub(crate) enum Callback<'a> {
    Function(&'a Function),
    Arrow(&'a ArrowExpr),
}

pub(crate) enum CallbackBody<'a> {
    Block(&'a BlockStmt),
    Expr(&'a Expr),
}

impl<'a> Callback<'a> {
    /// Parameter patterns in declaration order.
    pub fn params(&self) -> Vec<&'a Pat> {
        match self {
            Callback::Function(f) => f.params.iter().map(|p| &p.pat).collect(),
            Callback::Arrow(a) => a.params.iter().collect(),
        }
    }

    pub fn body(&self) -> Option<CallbackBody<'a>> {
        match self {
            Callback::Function(f) => f.body.as_ref().map(CallbackBody::Block),
            Callback::Arrow(a) => match &*a.body {
                BlockStmtOrExpr::BlockStmt(block) => Some(CallbackBody::Block(block)),
                BlockStmtOrExpr::Expr(expr) => Some(CallbackBody::Expr(expr)),
            },
        }
    }
}

/// Whether the call's callee is the bare identifier `define`.
pub fn is_define_call(call: &CallExpr) -> bool {
    match &call.callee {
        Callee::Expr(callee) => {
            matches!(&**callee, Expr::Ident(ident) if ident.sym.as_str() == DEFINE_CALLEE)
        }
        _ => false,
    }
}

/// Classify a call expression. Top-level position has already been
/// established by the caller; this only looks at the call's shape.
pub(crate) fn classify(call: &CallExpr) -> Classified<'_> {
    if !is_define_call(call) {
        return Classified::NotDefine;
    }

    let callback = call.args.iter().find_map(|arg| {
        if arg.spread.is_some() {
            return None;
        }
        match &*arg.expr {
            Expr::Fn(fn_expr) => Some(Callback::Function(&fn_expr.function)),
            Expr::Arrow(arrow) => Some(Callback::Arrow(arrow)),
            _ => None,
        }
    });
    let Some(callback) = callback else {
        return Classified::NoCallback;
    };

    let paths = call.args.first().and_then(|arg| {
        if arg.spread.is_some() {
            return None;
        }
        match &*arg.expr {
            Expr::Array(arr) => Some(arr),
            _ => None,
        }
    });

    Classified::Define(DefineParts { paths, callback })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use swc_common::SourceMap;
    use swc_ecma_ast::{Program, Stmt};

    use super::*;

    fn first_call(source: &str) -> CallExpr {
        let parsed =
            crate::parser::parse_source(source.to_string(), "t.js", Arc::new(SourceMap::default()))
                .unwrap();
        let Program::Script(script) = parsed.program else {
            panic!("expected a script");
        };
        let Some(Stmt::Expr(stmt)) = script.body.into_iter().next() else {
            panic!("expected an expression statement");
        };
        let Expr::Call(call) = *stmt.expr else {
            panic!("expected a call");
        };
        call
    }

    #[test]
    fn recognizes_the_define_callee() {
        assert!(is_define_call(&first_call("define([])")));
        assert!(!is_define_call(&first_call("require([])")));
    }

    #[test]
    fn bare_dependency_list_has_no_callback() {
        let call = first_call("define(['x'])");
        assert!(matches!(classify(&call), Classified::NoCallback));
    }

    #[test]
    fn callback_may_appear_after_non_function_arguments() {
        let call = first_call("define('mod', ['a'], function(a) {})");
        let Classified::Define(parts) = classify(&call) else {
            panic!("expected a definition");
        };

        // A non-array first argument means an empty dependency list.
        assert!(parts.paths.is_none());
        assert_eq!(parts.callback.params().len(), 1);
    }
}
