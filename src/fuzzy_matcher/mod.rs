//! Fuzzy matching primitives.
//!
//! This module provides the case folding, the cheap subsequence prefilter and
//! the alignment scorer that the search engine is built on.

/// Alignment scorer (dynamic programming with affine gaps and context bonuses)
pub mod align;
/// ASCII-range case folding
pub mod normalize;
pub(crate) mod util;

pub use self::util::is_subsequence;

pub(crate) type IndexType = usize;
/// Signed score produced by a matcher; higher is better.
pub type ScoreType = i64;

/// Trait for fuzzy matching a pattern against a choice
pub trait FuzzyMatcher: Send + Sync {
    /// fuzzy match choice with pattern, and return the score of matching
    ///
    /// `None` means the pattern cannot be aligned with the choice at all.
    fn fuzzy_match(&self, choice: &str, pattern: &str) -> Option<ScoreType>;
}
