//! Case folding used to build comparison views of queries and candidates.
//!
//! Folding is byte-wise and limited to the ASCII range: `A..=Z` become
//! `a..=z`, every other byte (including each byte of a multi-byte UTF-8
//! sequence) is left untouched. No locale or Unicode case mapping is applied.

use std::borrow::Cow;

/// Returns the case-folded view of `s`.
///
/// Borrows `s` when it contains no ASCII upper-case letter.
pub fn normalize(s: &str) -> Cow<'_, str> {
    if s.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(s.to_ascii_lowercase())
    } else {
        Cow::Borrowed(s)
    }
}

/// Folds `s` into `buf`, replacing its previous content.
pub fn fold_into(s: &str, buf: &mut Vec<u8>) {
    buf.clear();
    buf.extend(s.bytes().map(|b| b.to_ascii_lowercase()));
}
