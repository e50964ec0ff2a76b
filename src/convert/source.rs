//! Read-only source text accessor.
//!
//! SWC spans are absolute positions inside a shared `SourceMap`; every file
//! starts at its own base `BytePos`. `SourceText` rebases spans onto the
//! file-local byte offsets of the original source string, which is what the
//! converter splices and what fixes are expressed against.

use std::ops::Range;

use swc_common::{BytePos, Span};

/// Exact-source lookup for one parsed file.
#[derive(Debug, Clone, Copy)]
pub struct SourceText<'a> {
    text: &'a str,
    base: BytePos,
}

impl<'a> SourceText<'a> {
    /// `base` is the `start_pos` of the file inside the `SourceMap` it was
    /// parsed with.
    pub fn new(text: &'a str, base: BytePos) -> Self {
        Self { text, base }
    }

    /// File-local byte range covered by a span.
    pub fn range(&self, span: Span) -> Range<usize> {
        let lo = (span.lo.0 - self.base.0) as usize;
        let hi = (span.hi.0 - self.base.0) as usize;
        lo..hi
    }

    /// The exact source substring a span covers.
    pub fn span_text(&self, span: Span) -> &'a str {
        &self.text[self.range(span)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebases_spans_onto_file_offsets() {
        // Files in a fresh SourceMap start at BytePos(1).
        let src = SourceText::new("define([])", BytePos(1));
        let span = Span::new(BytePos(1), BytePos(7));

        assert_eq!(src.range(span), 0..6);
        assert_eq!(src.span_text(span), "define");
    }
}
