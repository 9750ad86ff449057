//! fuzzrank ranks candidate strings against a short fuzzy query.
//!
//! It is meant for autocomplete fields: given what the user typed so far and
//! the list of valid values (difficulty names, topic tags, categories...),
//! it returns the values that fuzzily match, best first, capped to the number
//! of choices the field can show.
//!
//! A candidate matches when the query is a case-insensitive subsequence of it.
//! Matches are scored by an alignment that rewards word starts, camelCase
//! humps and contiguous runs, and penalises gaps. Case folding is ASCII only.
//!
//! # Examples
//!
//! ```
//! use fuzzrank::prelude::*;
//!
//! let difficulties = ["Easy", "Medium", "Hard"];
//!
//! let results = search("d", &difficulties, DEFAULT_MAX_RESULTS);
//! let names: Vec<&str> = results.iter().map(|r| r.candidate.as_str()).collect();
//! assert_eq!(names, ["Hard", "Medium"]);
//!
//! // an empty query lists candidates alphabetically
//! let results = search("", &difficulties, 2);
//! assert_eq!(results[0].candidate, "Easy");
//! assert_eq!(results[1].candidate, "Hard");
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

pub use crate::catalog::{Catalog, DIFFICULTIES};
pub use crate::engine::{SearchEngine, SearchEngineBuilder, search};
pub use crate::fuzzy_matcher::ScoreType;
pub use crate::fuzzy_matcher::align::ScoreConfig;
pub use crate::options::{SearchOptions, SearchOptionsBuilder};
pub use crate::rank::{DEFAULT_MAX_RESULTS, MatchResult, rank};

pub mod catalog;
mod engine;
pub mod fuzzy_matcher;
pub mod options;
pub mod prelude;
mod rank;
