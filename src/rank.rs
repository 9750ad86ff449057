//! Ordering and truncation of scored candidates.

use std::cmp::Reverse;

use serde::Serialize;

use crate::fuzzy_matcher::ScoreType;

/// Number of results kept when the caller does not ask for another cap.
///
/// Matches the choice-list limit of the autocomplete surfaces this crate feeds.
pub const DEFAULT_MAX_RESULTS: usize = 25;

/// A candidate that matched the query, with its score.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MatchResult {
    /// The candidate exactly as the caller supplied it
    pub candidate: String,
    /// Alignment score, higher is better
    pub score: ScoreType,
}

impl MatchResult {
    /// Creates a new result
    pub fn new(candidate: impl Into<String>, score: ScoreType) -> Self {
        Self {
            candidate: candidate.into(),
            score,
        }
    }
}

/// Sorts `results` best-first and keeps at most `max_results` of them.
///
/// Higher scores come first; equal scores are ordered by the raw candidate
/// string, ascending and byte-wise, so the output never depends on the order
/// results were produced in.
pub fn rank(mut results: Vec<MatchResult>, max_results: usize) -> Vec<MatchResult> {
    results.sort_unstable_by(|a, b| {
        (Reverse(a.score), a.candidate.as_str()).cmp(&(Reverse(b.score), b.candidate.as_str()))
    });
    results.truncate(max_results);
    results
}
