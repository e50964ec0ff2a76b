//! Text edit application.
//!
//! Fixes are expressed as (byte range, replacement) pairs against the
//! original file content. All edits for a file are applied in a single
//! left-to-right pass over the source, so earlier replacements never shift
//! the offsets of later ones.

use anyhow::{Result, bail};

use crate::issue::Fix;

/// Apply a set of non-overlapping edits to `source`.
///
/// Ranges must lie within the source and must not overlap; both indicate a
/// bug in the analysis that produced them, not user error.
pub fn apply_fixes(source: &str, fixes: &[Fix]) -> Result<String> {
    let mut ordered: Vec<&Fix> = fixes.iter().collect();
    ordered.sort_by_key(|fix| fix.range.start);

    let mut out = String::with_capacity(source.len());
    let mut cursor = 0usize;
    for fix in ordered {
        if fix.range.start < cursor || fix.range.end > source.len() {
            bail!(
                "overlapping or out-of-bounds edit at {}..{}",
                fix.range.start,
                fix.range.end
            );
        }
        out.push_str(&source[cursor..fix.range.start]);
        out.push_str(&fix.replacement);
        cursor = fix.range.end;
    }
    out.push_str(&source[cursor..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fix(range: std::ops::Range<usize>, replacement: &str) -> Fix {
        Fix {
            range,
            replacement: replacement.to_string(),
        }
    }

    #[test]
    fn applies_edits_in_offset_order() {
        let source = "aaa bbb ccc";
        let fixes = vec![fix(8..11, "C"), fix(0..3, "A")];

        assert_eq!(apply_fixes(source, &fixes).unwrap(), "A bbb C");
    }

    #[test]
    fn no_edits_returns_source_unchanged() {
        assert_eq!(apply_fixes("abc", &[]).unwrap(), "abc");
    }

    #[test]
    fn rejects_overlapping_edits() {
        let fixes = vec![fix(0..4, "x"), fix(2..6, "y")];

        assert!(apply_fixes("abcdef", &fixes).is_err());
    }

    #[test]
    fn rejects_out_of_bounds_edit() {
        assert!(apply_fixes("ab", &[fix(0..5, "x")]).is_err());
    }
}
