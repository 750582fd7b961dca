//! Error type shared by the library and the command-line tool.

use std::path::PathBuf;

use thiserror::Error;

/// Every failure is terminal for the run: no partial output is produced.
#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "the file cannot be found: {}\nmake sure it is a '.md' file and the path is correct",
        path.display()
    )]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "markdown syntax error: unbalanced `{marker}` markers ({opening} opening, {closing} closing)"
    )]
    MarkerImbalance {
        marker: &'static str,
        opening: usize,
        closing: usize,
    },

    #[error("markdown syntax error: `{marker}` at line {line}, column {column} has no partner")]
    UnpairedMarker {
        marker: &'static str,
        line: usize,
        column: usize,
    },

    #[error(
        "markdown syntax error: double tag `{marker}` at line {line}, column {column} (inside of [ {enclosing} ])"
    )]
    DoubleTagConflict {
        marker: &'static str,
        enclosing: &'static str,
        line: usize,
        column: usize,
    },

    #[error("invalid format `{value}`, allowed choices are html, ansi")]
    InvalidFormat { value: String },

    #[error("failed to write output to {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid delimiter rule `{marker}`: {reason}")]
    InvalidRule {
        marker: &'static str,
        reason: &'static str,
    },

    #[error("input is {len} bytes, the limit is {max}")]
    InputTooLarge { len: usize, max: usize },
}
