//! Owned candidate universes for autocomplete fields.
//!
//! A [`Catalog`] keeps its own sorted copy of a candidate list (topic tags,
//! image categories, ...) together with the result cap of the field it feeds.
//! Refreshing the list is the caller's business: build a new catalog or
//! [`clear`](Catalog::clear) the old one.

use crate::engine::SearchEngine;
use crate::fuzzy_matcher::normalize::normalize;
use crate::rank::{DEFAULT_MAX_RESULTS, MatchResult};

/// The fixed difficulty levels.
pub const DIFFICULTIES: [&str; 3] = ["Easy", "Medium", "Hard"];

/// A sorted candidate universe with a result cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<String>,
    max_results: usize,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl Catalog {
    /// Copies `entries` and sorts them ascending, ignoring ASCII case.
    ///
    /// Entries that differ only in case keep a fixed order (upper-case first).
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        entries.sort_unstable_by(|a, b| normalize(a).cmp(&normalize(b)).then_with(|| a.cmp(b)));
        debug!("catalog with {} entries", entries.len());
        Self {
            entries,
            ..Self::default()
        }
    }

    /// A catalog of the [`DIFFICULTIES`].
    pub fn difficulties() -> Self {
        Self::new(DIFFICULTIES)
    }

    /// Sets the number of results a search returns.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// All entries, sorted.
    pub fn all(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry; later searches return nothing.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries matching `query`, best first.
    pub fn search(&self, query: &str) -> Vec<String> {
        self.search_scored(query).into_iter().map(|r| r.candidate).collect()
    }

    /// Entries matching `query` with their scores, best first.
    ///
    /// A blank query (empty or whitespace only) lists the first entries in
    /// catalog order, each with score 0.
    pub fn search_scored(&self, query: &str) -> Vec<MatchResult> {
        if query.trim().is_empty() {
            return self
                .entries
                .iter()
                .take(self.max_results)
                .map(|entry| MatchResult::new(entry.as_str(), 0))
                .collect();
        }
        SearchEngine::builder()
            .max_results(self.max_results)
            .build()
            .search(query, &self.entries)
    }
}

impl<S: Into<String>> FromIterator<S> for Catalog {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
