//! Alignment scorer for autocomplete candidates.
//!
//! Fuzzy matching is treated as an alignment problem restricted to "match or
//! skip": every query character must be matched, in order, against some
//! candidate character, and unmatched candidate characters between matches
//! form gaps. Two tables are filled row by row:
//!
//! - `best[i][j]`: the best score aligning the first `i` query characters
//!   within the first `j` candidate characters.
//! - `gap[i][j]`: the best score reachable by extending an open gap after the
//!   `i`-th query character has been placed.
//!
//! Gaps are affine (a cost to open, a smaller cost to extend). Each matched
//! character earns a base score plus context bonuses: word boundaries,
//! camelCase humps, non-word separators and consecutive runs. The first query
//! character's score is multiplied, so where the match *starts* dominates.
//!
//! Comparison is byte-wise with ASCII case folding. Bonuses look at the raw
//! candidate so that camelCase humps are still visible.
//!
//! # Example:
//! ```
//! use fuzzrank::fuzzy_matcher::FuzzyMatcher;
//! use fuzzrank::fuzzy_matcher::align::AlignMatcher;
//!
//! let matcher = AlignMatcher::default();
//!
//! assert_eq!(None, matcher.fuzzy_match("Medium", "ea"));
//! assert_eq!(Some(50), matcher.fuzzy_match("Easy", "ea"));
//! ```

use std::cell::RefCell;
use std::cmp::max;

use thread_local::ThreadLocal;

use crate::fuzzy_matcher::normalize::fold_into;
use crate::fuzzy_matcher::util::is_subsequence;
use crate::fuzzy_matcher::{FuzzyMatcher, IndexType, ScoreType};

type Score = ScoreType;

/// Value of a cell no alignment has reached yet.
const FLOOR: Score = Score::MIN / 2;

// ---------------------------------------------------------------------------
// Scoring weights
// ---------------------------------------------------------------------------

/// Fixed weights of the alignment scorer.
///
/// The matcher is handed one of these at construction and never mutates it.
/// [`ScoreConfig::DEFAULT`] holds the weights every ranking is calibrated
/// against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreConfig {
    /// Base credit per matched character.
    pub match_score: Score,
    /// Added when a gap is opened after a match.
    pub gap_start: Score,
    /// Added for each further unmatched character of an open gap.
    pub gap_extension: Score,
    /// Matched character after a separator or a lower→upper hump.
    pub bonus_boundary: Score,
    /// Matched character after any other non-alphanumeric character.
    pub bonus_non_word: Score,
    /// Upper-case matched character right after a lower-case one, when
    /// larger than `bonus_boundary`.
    pub bonus_camel: Score,
    /// Matched character continuing a run of matches.
    pub bonus_consecutive: Score,
    /// Multiplies the whole score of the first query character.
    pub first_char_multiplier: Score,
}

impl ScoreConfig {
    /// The calibrated weights.
    pub const DEFAULT: ScoreConfig = ScoreConfig {
        match_score: 16,
        gap_start: -3,
        gap_extension: -1,
        bonus_boundary: 16,
        bonus_non_word: 8,
        bonus_camel: 8,
        bonus_consecutive: 6,
        first_char_multiplier: 2,
    };
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[inline]
fn is_separator(ch: u8) -> bool {
    matches!(ch, b' ' | b'_' | b'-' | b'.')
}

/// Positional bonus for matching the candidate byte at `pos` (0-based).
///
/// Only the preceding byte counts, so the first byte earns nothing. A
/// lower→upper hump is a word boundary; `bonus_camel` applies there only when
/// it is the larger weight.
#[inline]
fn boundary_bonus(config: &ScoreConfig, raw: &[u8], pos: IndexType) -> Score {
    if pos == 0 {
        return 0;
    }
    let prev = raw[pos - 1];
    let cur = raw[pos];
    if is_separator(prev) {
        config.bonus_boundary
    } else if prev.is_ascii_lowercase() && cur.is_ascii_uppercase() {
        max(config.bonus_boundary, config.bonus_camel)
    } else if !prev.is_ascii_alphanumeric() {
        config.bonus_non_word
    } else {
        0
    }
}

/// Adds `delta` unless `score` is still at the floor.
#[inline(always)]
fn extend(score: Score, delta: Score) -> Score {
    if score <= FLOOR { FLOOR } else { score + delta }
}

// ---------------------------------------------------------------------------
// Score tables
// ---------------------------------------------------------------------------

/// Scratch space for one alignment: both DP tables as flat row-major buffers,
/// plus the folded query and candidate.
///
/// Reused from one candidate to the next; [`ScoreTable::reset`] rewrites every
/// cell the recurrence reads.
#[derive(Debug, Default)]
struct ScoreTable {
    cols: usize,
    best: Vec<Score>,
    gap: Vec<Score>,
    query: Vec<u8>,
    candidate: Vec<u8>,
}

impl ScoreTable {
    fn reset(&mut self, query: &str, candidate: &str) {
        fold_into(query, &mut self.query);
        fold_into(candidate, &mut self.candidate);

        let rows = self.query.len() + 1;
        self.cols = self.candidate.len() + 1;
        let len = rows * self.cols;

        self.best.clear();
        self.best.resize(len, FLOOR);
        self.gap.clear();
        self.gap.resize(len, FLOOR);

        // an empty query prefix is aligned everywhere for free
        self.best[..self.cols].fill(0);
    }

    /// Fills both tables and returns the bottom-right cell of `best`.
    fn fill(&mut self, config: &ScoreConfig, raw_candidate: &[u8]) -> Score {
        let ScoreTable {
            cols,
            best,
            gap,
            query,
            candidate,
        } = self;
        let cols = *cols;
        let m = query.len();
        let n = candidate.len();

        for i in 1..=m {
            let q = query[i - 1];
            for j in 1..=n {
                let here = i * cols + j;
                let left = here - 1;
                let up = here - cols;
                let diag = up - 1;

                let mut carried = FLOOR;
                if j > 1 {
                    gap[here] = max(
                        extend(gap[left], config.gap_extension),
                        extend(best[left], config.gap_start),
                    );
                    carried = gap[here];
                }
                if i > 1 {
                    carried = max(carried, best[up]);
                }

                best[here] = if q == candidate[j - 1] {
                    let mut char_score = config.match_score + boundary_bonus(config, raw_candidate, j - 1);
                    if i > 1 && j > 1 && query[i - 2] == candidate[j - 2] {
                        char_score += config.bonus_consecutive;
                    }
                    if i == 1 {
                        char_score *= config.first_char_multiplier;
                    }
                    max(extend(best[diag], char_score), carried)
                } else {
                    carried
                };
            }
        }

        best[m * cols + n]
    }
}

// ---------------------------------------------------------------------------
// Public matcher struct
// ---------------------------------------------------------------------------

/// Fuzzy matcher scoring candidates by best alignment.
///
/// The tables are kept per thread and reused between calls unless caching is
/// disabled with [`AlignMatcher::use_cache`].
#[derive(Debug)]
pub struct AlignMatcher {
    config: ScoreConfig,
    use_cache: bool,
    table: ThreadLocal<RefCell<ScoreTable>>,
}

impl Default for AlignMatcher {
    fn default() -> Self {
        Self::with_config(ScoreConfig::DEFAULT)
    }
}

impl AlignMatcher {
    /// Creates a matcher using the given weights.
    pub fn with_config(config: ScoreConfig) -> Self {
        Self {
            config,
            use_cache: true,
            table: ThreadLocal::new(),
        }
    }

    /// Enables or disables keeping the score tables between calls.
    pub fn use_cache(mut self, use_cache: bool) -> Self {
        self.use_cache = use_cache;
        self
    }

    /// The weights this matcher scores with.
    pub fn config(&self) -> &ScoreConfig {
        &self.config
    }

    /// Runs the alignment without the subsequence prefilter.
    ///
    /// Only meaningful for pairs where `query` is a subsequence of
    /// `candidate`; returns `None` when no alignment exists.
    pub fn score(&self, query: &str, candidate: &str) -> Option<ScoreType> {
        let result = {
            let mut table = self.table.get_or(|| RefCell::new(ScoreTable::default())).borrow_mut();
            table.reset(query, candidate);
            table.fill(&self.config, candidate.as_bytes())
        };

        if !self.use_cache {
            if let Some(cell) = self.table.get() {
                cell.replace(ScoreTable::default());
            }
        }

        if result <= FLOOR {
            warn!("no alignment of {query:?} in {candidate:?}");
            None
        } else {
            Some(result)
        }
    }
}

impl FuzzyMatcher for AlignMatcher {
    fn fuzzy_match(&self, choice: &str, pattern: &str) -> Option<ScoreType> {
        if !is_subsequence(pattern, choice) {
            return None;
        }
        self.score(pattern, choice)
    }
}

/// Fuzzy match `choice` against `pattern` with the default weights.
pub fn fuzzy_match(choice: &str, pattern: &str) -> Option<ScoreType> {
    AlignMatcher::default().fuzzy_match(choice, pattern)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use super::*;
    use crate::fuzzy_matcher::util::assert_order;

    #[test]
    fn test_no_match() {
        assert_eq!(None, fuzzy_match("Medium", "ea"));
        assert_eq!(None, fuzzy_match("Hard", "ea"));
        assert_eq!(None, fuzzy_match("", "a"));
        assert_eq!(None, fuzzy_match("abc", "abcd"));
    }

    #[test]
    fn test_exact_scores() {
        // E 16*2, a 16+6, then two trailing gap steps
        assert_eq!(Some(50), fuzzy_match("Easy", "ea"));
        assert_eq!(Some(32), fuzzy_match("Hard", "d"));
        // d 16*2, then gap -3 -1 -1
        assert_eq!(Some(27), fuzzy_match("Medium", "d"));
        assert_eq!(Some(72), fuzzy_match("Array", "arr"));
        assert_eq!(Some(98), fuzzy_match("Tree", "tree"));
    }

    #[test]
    fn test_empty_pattern_scores_zero() {
        assert_eq!(Some(0), fuzzy_match("Easy", ""));
        assert_eq!(Some(0), fuzzy_match("", ""));
    }

    #[test]
    fn test_boundary_bonus() {
        let matcher = AlignMatcher::default();
        let after_space = matcher.fuzzy_match("Segment Tree", "t").unwrap();
        let inner = matcher.fuzzy_match("Segmentree", "t").unwrap();
        assert!(after_space > inner, "after_space={after_space} > inner={inner}");

        for sep in ["a_b", "a-b", "a.b", "a b"] {
            assert_eq!(Some(64), matcher.fuzzy_match(sep, "b"), "{sep}");
        }
    }

    #[test]
    fn test_no_bonus_at_start() {
        // nothing precedes the first byte
        assert_eq!(Some(27), fuzzy_match("Easy", "e"));
        assert_eq!(Some(32), fuzzy_match("T", "t"));
        let matcher = AlignMatcher::default();
        assert_eq!(matcher.fuzzy_match("Tree", "t"), Some(27));
        assert_eq!(matcher.fuzzy_match("xt", "t"), Some(32));
    }

    #[test]
    fn test_non_word_bonus() {
        let matcher = AlignMatcher::default();
        assert_eq!(Some(48), matcher.fuzzy_match("a(b", "b"));
        assert_eq!(Some(48), matcher.fuzzy_match("a/b", "b"));
        assert_eq!(Some(32), matcher.fuzzy_match("aab", "b"));
    }

    #[test]
    fn test_camel_case_bonus() {
        let matcher = AlignMatcher::default();
        // a hump counts as a full word boundary
        assert_eq!(matcher.fuzzy_match("aB", "b"), matcher.fuzzy_match("a_b", "b"));
        assert_eq!(Some(64), matcher.fuzzy_match("aB", "b"));
        assert_eq!(Some(66), matcher.fuzzy_match("HashMap", "hm"));
        assert_eq!(Some(50), matcher.fuzzy_match("Hashmap", "hm"));

        // with a weaker boundary weight, humps fall back to the camel bonus
        let weak_boundary = AlignMatcher::with_config(ScoreConfig {
            bonus_boundary: 0,
            ..ScoreConfig::DEFAULT
        });
        assert_eq!(Some(48), weak_boundary.fuzzy_match("aB", "b"));
        assert_eq!(Some(32), weak_boundary.fuzzy_match("a_b", "b"));
    }

    #[test]
    fn test_consecutive_bonus() {
        let matcher = AlignMatcher::default();
        let consecutive = matcher.fuzzy_match("foobar", "foo").unwrap();
        let scattered = matcher.fuzzy_match("fxoxo", "foo").unwrap();
        assert!(
            consecutive > scattered,
            "consecutive={} > scattered={}",
            consecutive,
            scattered
        );
    }

    #[test]
    fn test_first_char_multiplier() {
        let doubled = AlignMatcher::default();
        let flat = AlignMatcher::with_config(ScoreConfig {
            first_char_multiplier: 1,
            ..ScoreConfig::DEFAULT
        });
        assert_eq!(Some(32), doubled.fuzzy_match("T", "t"));
        assert_eq!(Some(16), flat.fuzzy_match("T", "t"));
        assert_eq!(Some(32), doubled.fuzzy_match("Hard", "d"));
        assert_eq!(Some(16), flat.fuzzy_match("Hard", "d"));
    }

    #[test]
    fn test_best_alignment_wins() {
        // the inner 'a' beats the leading 'A' once its longer tail gap counts
        let matcher = AlignMatcher::default();
        assert_eq!(Some(29), matcher.fuzzy_match("Array", "a"));
        // the leading 'T' is kept even though a later 't' exists
        assert_eq!(Some(59), matcher.fuzzy_match("Segment Tree", "t"));
    }

    #[test]
    fn test_match_quality_ordering() {
        let matcher = AlignMatcher::default();
        // Word start beats inner word
        assert_order(&matcher, "tree", &["Segment Tree", "Subtree"]);
        // Initials
        assert_order(&matcher, "bs", &["Binary Search", "Bits", "Basics"]);
        // Shorter is better
        assert_order(&matcher, "ma", &["Map", "Math", "Matrix"]);
    }

    #[test]
    fn test_non_ascii_does_not_panic() {
        let matcher = AlignMatcher::default();
        assert!(matcher.fuzzy_match("Hello, 世界", "H世").is_some());
        assert!(matcher.fuzzy_match("café", "É").is_none());
        assert!(matcher.fuzzy_match("\u{1F600}x", "x").is_some());
    }

    #[test]
    fn test_table_reuse_is_stateless() {
        let cached = AlignMatcher::default();
        let uncached = AlignMatcher::default().use_cache(false);
        let pairs = [
            ("Binary Indexed Tree", "bit"),
            ("a", "a"),
            ("Breadth-First Search", "bfs"),
            ("Two Pointers", "tp"),
        ];
        for (choice, pattern) in pairs {
            assert_eq!(cached.fuzzy_match(choice, pattern), uncached.fuzzy_match(choice, pattern));
        }
        // and the same call again after the table has grown
        assert_eq!(cached.fuzzy_match("a", "a"), Some(32));
    }
}
