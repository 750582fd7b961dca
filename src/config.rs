//! Run configuration for the command-line tool.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::{Options, OutputFormat};

/// Extension appended to input paths that lack it.
pub const SOURCE_EXTENSION: &str = "md";

/// Immutable settings of one run, built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Source file, always ending in `.md`.
    pub input: PathBuf,
    /// Output file, if any. Standard output is written either way.
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub escape_html: bool,
}

impl Config {
    /// Resolve command-line values.
    ///
    /// Without an explicit format, output files get HTML and the terminal
    /// gets ANSI.
    pub fn new(
        input: impl Into<PathBuf>,
        output: Option<PathBuf>,
        format: Option<OutputFormat>,
        escape_html: bool,
    ) -> Self {
        let format = format.unwrap_or(match output {
            Some(_) => OutputFormat::Html,
            None => OutputFormat::Ansi,
        });
        Self {
            input: with_source_extension(input.into()),
            output,
            format,
            escape_html,
        }
    }

    /// Library options for this run.
    pub fn options(&self) -> Options {
        Options {
            format: self.format,
            escape_html: self.escape_html,
        }
    }
}

/// Append `.md` unless the path already ends with it.
///
/// `notes.txt` becomes `notes.txt.md`, not `notes.md`.
pub fn with_source_extension(path: PathBuf) -> PathBuf {
    if has_source_extension(&path) {
        return path;
    }
    let mut name: OsString = path.into_os_string();
    name.push(".");
    name.push(SOURCE_EXTENSION);
    PathBuf::from(name)
}

fn has_source_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
}
