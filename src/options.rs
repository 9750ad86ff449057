//! Configuration options for fuzzrank.
//!
//! `SearchOptions` configures a search and, with the `cli` feature, doubles as
//! the argument parser of the `fzr` binary.

use derive_builder::Builder;

use crate::rank::DEFAULT_MAX_RESULTS;

/// fzr - rank candidates read from stdin against a fuzzy query
///
/// Reads one candidate per line and prints the matching ones, best first.
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(default)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(
    feature = "cli",
    command(name = "fzr", args_override_self = true, verbatim_doc_comment, version, about)
)]
pub struct SearchOptions {
    //  --- Search ---
    /// Query to rank the candidates against
    ///
    /// An empty query lists the candidates alphabetically.
    #[cfg_attr(feature = "cli", arg(short, long, default_value = "", help_heading = "Search"))]
    #[builder(setter(into))]
    pub query: String,

    /// Maximum number of results to print
    #[cfg_attr(
        feature = "cli",
        arg(short = 'n', long, default_value_t = DEFAULT_MAX_RESULTS, help_heading = "Search")
    )]
    pub max_results: usize,

    //  --- Input/Output ---
    /// Read input delimited by ASCII NUL characters
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Input/Output"))]
    pub read0: bool,

    /// Print output delimited by ASCII NUL characters
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Input/Output"))]
    pub print0: bool,

    /// Prefix each result with its score and a tab
    #[cfg_attr(feature = "cli", arg(long, conflicts_with = "json", help_heading = "Input/Output"))]
    pub print_score: bool,

    /// Print each result as a JSON object on its own line
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Input/Output"))]
    pub json: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            query: String::new(),
            max_results: DEFAULT_MAX_RESULTS,
            read0: false,
            print0: false,
            print_score: false,
            json: false,
        }
    }
}

impl SearchOptions {
    /// Delimiter between input candidates
    pub fn input_delimiter(&self) -> u8 {
        if self.read0 { b'\0' } else { b'\n' }
    }

    /// Terminator written after each printed result
    pub fn output_ending(&self) -> &'static str {
        if self.print0 { "\0" } else { "\n" }
    }
}
