//! Import List Builder: turns the dependency-path array plus the callback's
//! parameter list into one `import` statement per path, in array order.
//!
//! Per index, parameter validity is checked before path validity; the first
//! violation in index order decides the block reason. A path without a
//! matching parameter becomes a side-effect import.

use swc_ecma_ast::{Expr, ExprOrSpread, Lit, Pat};

use super::BlockReason;
use super::classify::DefineParts;
use super::source::SourceText;

/// Build the ordered import statements, each newline-terminated.
///
/// No deduplication and no reordering: repeated paths are emitted
/// repeatedly, exactly as they appear in the array.
pub(crate) fn build_imports(
    parts: &DefineParts<'_>,
    src: &SourceText<'_>,
) -> Result<Vec<String>, BlockReason> {
    let Some(paths) = parts.paths else {
        return Ok(Vec::new());
    };
    let params = parts.callback.params();

    let mut imports = Vec::with_capacity(paths.elems.len());
    for (i, elem) in paths.elems.iter().enumerate() {
        let name = match params.get(i) {
            Some(Pat::Ident(binding)) => Some(src.span_text(binding.id.span)),
            Some(_) => return Err(BlockReason::ArgumentsNotVariables),
            None => None,
        };
        let path = string_path(elem.as_ref(), src).ok_or(BlockReason::PathsNotStrings)?;

        imports.push(match name {
            Some(name) => format!("import {name} from \"{path}\";\n"),
            None => format!("import \"{path}\";\n"),
        });
    }
    Ok(imports)
}

/// The raw character content of a string-literal path, original quotes
/// stripped. Anything else (holes, spreads, concatenations, non-string
/// literals) is not a usable path.
fn string_path<'a>(elem: Option<&ExprOrSpread>, src: &SourceText<'a>) -> Option<&'a str> {
    let elem = elem?;
    if elem.spread.is_some() {
        return None;
    }
    match &*elem.expr {
        Expr::Lit(Lit::Str(lit)) => {
            let raw = src.span_text(lit.span);
            // The emitted import always double-quotes; the content is kept
            // verbatim, not re-escaped.
            Some(&raw[1..raw.len() - 1])
        }
        _ => None,
    }
}
