//! Convenience re-exports of commonly used types
//!
//! This module re-exports the most commonly used types and traits from fuzzrank,
//! making it easier to import everything needed with a single `use` statement.
pub use crate::catalog::{Catalog, DIFFICULTIES};
pub use crate::engine::{SearchEngine, SearchEngineBuilder, search};
pub use crate::fuzzy_matcher::align::{AlignMatcher, ScoreConfig};
pub use crate::fuzzy_matcher::{FuzzyMatcher, ScoreType, is_subsequence};
pub use crate::options::{SearchOptions, SearchOptionsBuilder};
pub use crate::rank::{DEFAULT_MAX_RESULTS, MatchResult, rank};
