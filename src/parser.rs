//! SWC parse wrapper.
//!
//! AMD sources are plain JavaScript scripts, while already-migrated files
//! are ES modules; `parse_program` accepts both, so the tool can run over a
//! half-converted tree without tripping on `import` statements.

use std::sync::Arc;

use anyhow::{Result, anyhow};
use swc_common::{BytePos, FileName, GLOBALS, Globals, SourceMap};
use swc_ecma_ast::Program;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax};

pub struct ParsedFile {
    pub program: Program,
    pub source_map: Arc<SourceMap>,
    /// Base position of this file inside `source_map`; spans are rebased
    /// against it to get file-local byte offsets.
    pub start_pos: BytePos,
}

/// Parse a JavaScript source string into an AST.
///
/// Accepts a shared SourceMap for thread-safe parallel parsing.
pub fn parse_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedFile> {
    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);
        let start_pos = source_file.start_pos;

        let syntax = Syntax::Es(EsSyntax::default());
        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        let program = parser
            .parse_program()
            .map_err(|e| anyhow!("failed to parse {}: {:?}", file_path, e.kind()))?;

        // The parser recovers from some syntax errors; a file is only safe
        // to rewrite when it parsed cleanly.
        if let Some(err) = parser.take_errors().into_iter().next() {
            return Err(anyhow!("failed to parse {}: {:?}", file_path, err.kind()));
        }

        Ok(ParsedFile {
            program,
            source_map,
            start_pos,
        })
    })
}
