//! The search facade: prefilter, score and rank a whole candidate list.

use std::fmt::{Display, Error, Formatter};

use crate::fuzzy_matcher::FuzzyMatcher;
use crate::fuzzy_matcher::align::{AlignMatcher, ScoreConfig};
use crate::options::SearchOptions;
use crate::rank::{DEFAULT_MAX_RESULTS, MatchResult, rank};

//------------------------------------------------------------------------------
/// Builder for [`SearchEngine`]
#[derive(Debug, Clone)]
pub struct SearchEngineBuilder {
    max_results: usize,
    config: ScoreConfig,
}

impl Default for SearchEngineBuilder {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            config: ScoreConfig::DEFAULT,
        }
    }
}

impl SearchEngineBuilder {
    /// Maximum number of results a search returns
    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Scoring weights handed to the matcher
    pub fn config(mut self, config: ScoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Finalizes the builder
    pub fn build(self) -> SearchEngine {
        SearchEngine {
            matcher: AlignMatcher::with_config(self.config),
            max_results: self.max_results,
        }
    }
}

/// Ranks candidate lists against queries.
///
/// The engine keeps no state between searches besides scratch buffers that
/// are fully rewritten for every candidate; the same inputs always produce the
/// same output.
#[derive(Debug)]
pub struct SearchEngine {
    matcher: AlignMatcher,
    max_results: usize,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl SearchEngine {
    /// Returns a default builder for chaining
    pub fn builder() -> SearchEngineBuilder {
        SearchEngineBuilder::default()
    }

    /// Creates an engine configured from the given options.
    pub fn from_options(options: &SearchOptions) -> Self {
        Self::builder().max_results(options.max_results).build()
    }

    /// The result cap of this engine
    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Returns the candidates matching `query`, best first, at most
    /// [`max_results`](Self::max_results) of them.
    ///
    /// An empty query matches every candidate with score 0, so the result is
    /// the alphabetically first candidates. Otherwise candidates of which the
    /// query is not a case-insensitive subsequence are left out.
    pub fn search<S: AsRef<str>>(&self, query: &str, candidates: &[S]) -> Vec<MatchResult> {
        debug!("{self}: query {query:?} over {} candidates", candidates.len());

        let matched: Vec<MatchResult> = if query.is_empty() {
            candidates.iter().map(|c| MatchResult::new(c.as_ref(), 0)).collect()
        } else {
            candidates
                .iter()
                .filter_map(|c| {
                    let c = c.as_ref();
                    self.matcher.fuzzy_match(c, query).map(|score| MatchResult::new(c, score))
                })
                .collect()
        };

        trace!("matched {} of {}", matched.len(), candidates.len());
        rank(matched, self.max_results)
    }
}

impl Display for SearchEngine {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(Search: max {})", self.max_results)
    }
}

/// Ranks `candidates` against `query` and keeps at most `max_results`.
///
/// Shorthand for a freshly built [`SearchEngine`] with default weights.
///
/// # Example:
/// ```
/// let results = fuzzrank::search("ea", &["Easy", "Medium", "Hard"], 10);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].candidate, "Easy");
/// ```
pub fn search<S: AsRef<str>>(query: &str, candidates: &[S], max_results: usize) -> Vec<MatchResult> {
    SearchEngine::builder().max_results(max_results).build().search(query, candidates)
}

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use super::*;

    const DIFFICULTIES: [&str; 3] = ["Easy", "Medium", "Hard"];

    fn names(results: Vec<MatchResult>) -> Vec<String> {
        results.into_iter().map(|r| r.candidate).collect()
    }

    #[test]
    fn test_empty_query_is_alphabetical() {
        assert_eq!(names(search("", &DIFFICULTIES, 10)), ["Easy", "Hard", "Medium"]);
        assert_eq!(names(search("", &DIFFICULTIES, 2)), ["Easy", "Hard"]);
        assert!(search("", &DIFFICULTIES, 10).iter().all(|r| r.score == 0));
    }

    #[test]
    fn test_difficulty_examples() {
        assert_eq!(names(search("ea", &DIFFICULTIES, 10)), ["Easy"]);
        assert_eq!(names(search("d", &DIFFICULTIES, 10)), ["Hard", "Medium"]);
    }

    #[test]
    fn test_empty_candidate_list() {
        let empty: [&str; 0] = [];
        assert!(search("", &empty, 10).is_empty());
        assert!(search("tree", &empty, 10).is_empty());
    }

    #[test]
    fn test_empty_candidate_string() {
        assert_eq!(names(search("", &["", "a"], 10)), ["", "a"]);
        assert_eq!(names(search("a", &["", "a"], 10)), ["a"]);
    }

    #[test]
    fn test_owned_candidates() {
        let topics: Vec<String> = vec!["Graph".into(), "Greedy".into(), "Heap".into()];
        assert_eq!(names(search("gr", &topics, 10)), ["Graph", "Greedy"]);
    }

    #[test]
    fn test_builder_and_options() {
        let engine = SearchEngine::builder().max_results(1).build();
        assert_eq!(engine.max_results(), 1);
        assert_eq!(names(engine.search("", &DIFFICULTIES)), ["Easy"]);
        assert_eq!(engine.to_string(), "(Search: max 1)");

        let options = SearchOptions::default();
        assert_eq!(SearchEngine::from_options(&options).max_results(), DEFAULT_MAX_RESULTS);
    }

    #[test]
    fn test_leading_char_has_no_bonus() {
        // the trailing gap decides; a leading 'T' is worth no more than any 't'
        let results = search("t", &["Tree", "xt"], 10);
        assert_eq!(results, [MatchResult::new("xt", 32), MatchResult::new("Tree", 27)]);
    }

    #[test]
    fn test_custom_weights() {
        let candidates = ["Segment Tree", "xt"];
        assert_eq!(names(search("t", &candidates, 10)), ["Segment Tree", "xt"]);

        // without the boundary bonus the 'T' after the space is an ordinary 't'
        let engine = SearchEngine::builder()
            .config(ScoreConfig {
                bonus_boundary: 0,
                ..ScoreConfig::DEFAULT
            })
            .build();
        let results = engine.search("t", &candidates);
        assert_eq!(results, [MatchResult::new("xt", 32), MatchResult::new("Segment Tree", 27)]);
    }
}
