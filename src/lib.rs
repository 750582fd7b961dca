//! marktag: a small Markdown dialect to HTML tags or ANSI escapes
//!
//! Paragraphs come from CRLF line breaks, spans from four delimiters:
//! fenced code (```` ``` ````), bold (`**`), italic (`_`) and inline code
//! (`` ` ``).
//!
//! # Design Principles
//! - No regex: byte-level scanning with `memchr`
//! - No tree: tagged documents are flat span lists over the input
//! - Fail fast: an unbalanced or ambiguous marker aborts the whole run
//! - Ranges into the input buffer, no copies until rendering
//!
//! # Example
//! ```
//! let html = marktag::to_html("Hi, **I am** title!").unwrap();
//! assert_eq!(html, "<p>Hi, <b>I am</b> title!</p>\n");
//! ```

pub mod block;
pub mod config;
pub mod error;
pub mod escape;
pub mod inline;
pub mod io;
pub mod limits;
pub mod range;
pub mod render;
pub mod rules;

// Re-export primary types
pub use block::{segment, Layout, Segmented};
pub use config::Config;
pub use error::Error;
pub use inline::{InlineTagger, TagEvent, TaggedDocument};
pub use range::Range;
pub use render::{html_to_ansi, render, AnsiWriter, HtmlWriter, OutputFormat};
pub use rules::{DelimiterRule, DEFAULT_RULES};

/// Conversion options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Final representation.
    pub format: OutputFormat,
    /// Escape `<`, `>`, `&` and `"` in text runs of the HTML stage.
    pub escape_html: bool,
}

/// Convert Markdown to HTML.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = marktag::to_html("one\r\n_two_").unwrap();
/// assert_eq!(html, "<p>one</p>\n<p><i>two</i></p>\n");
/// ```
pub fn to_html(input: &str) -> Result<String, Error> {
    to_html_with_options(input, &Options::default())
}

/// Convert Markdown to HTML, honouring `options.escape_html`.
///
/// `options.format` is ignored; see [`convert`].
pub fn to_html_with_options(input: &str, options: &Options) -> Result<String, Error> {
    to_html_with_rules(input, &DEFAULT_RULES, options)
}

/// Convert Markdown to HTML with a custom rule table.
pub fn to_html_with_rules(
    input: &str,
    rules: &[DelimiterRule],
    options: &Options,
) -> Result<String, Error> {
    limits::check_input_len(input)?;
    let doc = segment(input);
    let tagged = InlineTagger::new(rules)?.tag(&doc)?;
    Ok(render::render_html(&tagged, options.escape_html))
}

/// Convert Markdown directly to ANSI escapes, without the HTML stage.
///
/// # Example
/// ```
/// let ansi = marktag::to_ansi("**hi**").unwrap();
/// assert_eq!(ansi, "\x1b[1mhi\x1b[0m\n");
/// ```
pub fn to_ansi(input: &str) -> Result<String, Error> {
    to_ansi_with_rules(input, &DEFAULT_RULES)
}

/// Convert Markdown directly to ANSI escapes with a custom rule table.
pub fn to_ansi_with_rules(input: &str, rules: &[DelimiterRule]) -> Result<String, Error> {
    limits::check_input_len(input)?;
    let doc = segment(input);
    let tagged = InlineTagger::new(rules)?.tag(&doc)?;
    Ok(render::render_ansi(&tagged))
}

/// Full pipeline: Markdown to HTML, then HTML to `options.format`.
///
/// For ANSI output the result equals [`to_ansi`] as long as the text itself
/// contains no structural tags (or `escape_html` is set).
pub fn convert(input: &str, options: &Options) -> Result<String, Error> {
    let html = to_html_with_options(input, options)?;
    match options.format {
        OutputFormat::Html => Ok(html),
        OutputFormat::Ansi => Ok(html_to_ansi(&html, &DEFAULT_RULES, options.escape_html)),
    }
}
