//! Paragraph segmenter implementation.

use memchr::memmem;

use crate::Range;

/// Line-break separator that turns a document into one paragraph per line.
const PARAGRAPH_BREAK: &[u8] = b"\r\n";

/// How the source was split into paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// No CRLF pairs: the whole trimmed input is one paragraph.
    Single,
    /// CRLF pairs present: every line is its own paragraph.
    PerLine,
}

/// Source text plus its paragraph blocks, in source order.
#[derive(Debug, Clone)]
pub struct Segmented<'a> {
    source: &'a str,
    layout: Layout,
    paragraphs: Vec<Range>,
}

impl<'a> Segmented<'a> {
    /// The unmodified source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Detected layout.
    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Paragraph content ranges. Never empty.
    #[inline]
    pub fn paragraphs(&self) -> &[Range] {
        &self.paragraphs
    }

    /// Paragraph contents as text.
    pub fn paragraph_texts(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.paragraphs.iter().map(|r| r.slice(self.source))
    }
}

/// Split `source` into paragraph blocks.
///
/// # Example
/// ```
/// use marktag::block::{segment, Layout};
///
/// let doc = segment("first\r\nsecond");
/// assert_eq!(doc.layout(), Layout::PerLine);
/// assert_eq!(doc.paragraph_texts().collect::<Vec<_>>(), ["first", "second"]);
/// ```
pub fn segment(source: &str) -> Segmented<'_> {
    let bytes = source.as_bytes();
    let finder = memmem::Finder::new(PARAGRAPH_BREAK);

    let mut paragraphs = Vec::new();
    let mut line_start = 0;
    for pos in finder.find_iter(bytes) {
        paragraphs.push(Range::from_usize(line_start, pos));
        line_start = pos + PARAGRAPH_BREAK.len();
    }

    let layout = if paragraphs.is_empty() {
        paragraphs.push(trimmed_range(bytes));
        Layout::Single
    } else {
        // The text after the last break closes the document, even when empty.
        paragraphs.push(Range::from_usize(line_start, bytes.len()));
        Layout::PerLine
    };

    tracing::debug!(?layout, paragraphs = paragraphs.len(), "segmented source");

    Segmented {
        source,
        layout,
        paragraphs,
    }
}

/// Range of `bytes` without leading and trailing ASCII whitespace.
fn trimmed_range(bytes: &[u8]) -> Range {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |p| p + 1);
    Range::from_usize(start, end)
}
