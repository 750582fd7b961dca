//! Output writers and the HTML to ANSI re-render.
//!
//! Both writers append into a pre-allocated buffer sized from the input,
//! and are driven by the same [`TagEvent`] stream.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use memchr::memmem;

use crate::escape;
use crate::inline::{TagEvent, TaggedDocument};
use crate::rules::{DelimiterRule, PARAGRAPH_TAG};
use crate::Error;

/// Target representation of the converted text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Structural tags: `<p>`, `<b>`, `<i>`, `<tt>`, `<pre>`.
    #[default]
    Html,
    /// Terminal escape sequences.
    Ansi,
}

impl OutputFormat {
    /// Accepted format names, in display order.
    pub const ALLOWED: [&'static str; 2] = ["html", "ansi"];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Ansi => "ansi",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(OutputFormat::Html),
            "ansi" => Ok(OutputFormat::Ansi),
            _ => Err(Error::InvalidFormat {
                value: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receiver of tag events.
trait EventSink {
    fn paragraph_start(&mut self);
    fn paragraph_end(&mut self);
    fn text(&mut self, text: &str);
    fn open(&mut self, rule: &DelimiterRule);
    fn close(&mut self, rule: &DelimiterRule);
}

fn drive<S: EventSink>(sink: &mut S, doc: &TaggedDocument<'_, '_>) {
    let source = doc.source();
    for event in doc.events() {
        match event {
            TagEvent::ParagraphStart => sink.paragraph_start(),
            TagEvent::ParagraphEnd => sink.paragraph_end(),
            TagEvent::Text(range) => sink.text(range.slice(source)),
            TagEvent::Open(rule) => sink.open(rule),
            TagEvent::Close(rule) => sink.close(rule),
        }
    }
}

/// HTML output writer with pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use marktag::render::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(100);
/// writer.paragraph_start();
/// writer.write_escaped_text(b"Hello <World>");
/// writer.paragraph_end();
///
/// assert_eq!(writer.into_string(), "<p>Hello &lt;World&gt;</p>\n");
/// ```
pub struct HtmlWriter {
    out: Vec<u8>,
    escape: bool,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Tags add roughly a quarter on top of typical input.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self::with_capacity(input_len + input_len / 4 + 16)
    }

    /// Create with explicit capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: Vec::with_capacity(capacity),
            escape: false,
        }
    }

    /// Escape `<`, `>`, `&` and `"` in text written through [`Self::write_text`].
    #[inline]
    pub fn escaping(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    /// Write a static string (compile-time known).
    #[inline]
    pub fn write_str(&mut self, s: &'static str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    /// Write a dynamic string without escaping.
    #[inline]
    pub fn write_string(&mut self, s: &str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    /// Write a single byte.
    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        self.out.push(b);
    }

    /// Write text content, escaped when the writer escapes.
    #[inline]
    pub fn write_text(&mut self, text: &str) {
        if self.escape {
            self.write_escaped_text(text.as_bytes());
        } else {
            self.write_string(text);
        }
    }

    /// Write text with HTML escaping.
    #[inline]
    pub fn write_escaped_text(&mut self, text: &[u8]) {
        escape::escape_text_into(&mut self.out, text);
    }

    /// Write a newline.
    #[inline]
    pub fn newline(&mut self) {
        self.out.push(b'\n');
    }

    /// Get output as str.
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: only `&str` slices, ASCII tags and ASCII entities are written
        unsafe { std::str::from_utf8_unchecked(&self.out) }
    }

    /// Take ownership as String.
    #[inline]
    pub fn into_string(self) -> String {
        // SAFETY: only `&str` slices, ASCII tags and ASCII entities are written
        unsafe { String::from_utf8_unchecked(self.out) }
    }

    /// Write opening tag: `<tagname>`
    #[inline]
    pub fn open_tag(&mut self, tag: &'static str) {
        self.write_byte(b'<');
        self.write_str(tag);
        self.write_byte(b'>');
    }

    /// Write closing tag: `</tagname>`
    #[inline]
    pub fn close_tag(&mut self, tag: &'static str) {
        self.write_str("</");
        self.write_str(tag);
        self.write_byte(b'>');
    }

    /// Write paragraph start: `<p>`
    #[inline]
    pub fn paragraph_start(&mut self) {
        self.open_tag(PARAGRAPH_TAG);
    }

    /// Write paragraph end: `</p>\n`
    #[inline]
    pub fn paragraph_end(&mut self) {
        self.close_tag(PARAGRAPH_TAG);
        self.newline();
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for HtmlWriter {
    fn paragraph_start(&mut self) {
        HtmlWriter::paragraph_start(self);
    }

    fn paragraph_end(&mut self) {
        HtmlWriter::paragraph_end(self);
    }

    fn text(&mut self, text: &str) {
        self.write_text(text);
    }

    fn open(&mut self, rule: &DelimiterRule) {
        self.open_tag(rule.tag);
    }

    fn close(&mut self, rule: &DelimiterRule) {
        self.close_tag(rule.tag);
    }
}

/// ANSI output writer. Text is copied verbatim.
#[derive(Debug, Default)]
pub struct AnsiWriter {
    out: String,
}

impl AnsiWriter {
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: String::with_capacity(input_len + input_len / 8 + 16),
        }
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }
}

impl EventSink for AnsiWriter {
    fn paragraph_start(&mut self) {}

    fn paragraph_end(&mut self) {
        self.out.push('\n');
    }

    fn text(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn open(&mut self, rule: &DelimiterRule) {
        self.out.push_str(rule.ansi_open);
    }

    fn close(&mut self, rule: &DelimiterRule) {
        self.out.push_str(rule.ansi_close);
    }
}

/// Render a tagged document as HTML.
pub fn render_html(doc: &TaggedDocument<'_, '_>, escape_html: bool) -> String {
    let mut writer = HtmlWriter::with_capacity_for(doc.source().len()).escaping(escape_html);
    drive(&mut writer, doc);
    writer.into_string()
}

/// Render a tagged document directly as ANSI.
pub fn render_ansi(doc: &TaggedDocument<'_, '_>) -> String {
    let mut writer = AnsiWriter::with_capacity_for(doc.source().len());
    drive(&mut writer, doc);
    writer.into_string()
}

/// Re-render HTML produced by [`render_html`] in the requested format.
///
/// `unescape` must be set when the HTML was produced with escaping, so the
/// ANSI text matches direct conversion.
pub fn render<'h>(
    html: &'h str,
    format: OutputFormat,
    rules: &[DelimiterRule],
    unescape: bool,
) -> Cow<'h, str> {
    match format {
        OutputFormat::Html => Cow::Borrowed(html),
        OutputFormat::Ansi => Cow::Owned(html_to_ansi(html, rules, unescape)),
    }
}

/// Replace structural tags with ANSI sequences.
///
/// Tags are matched pairwise, per rule in priority order: each `<tag>` with
/// the next `</tag>` after it. An opening tag without a closing tag is kept.
/// Paragraph tags are removed last, leaving the newline after each paragraph.
pub fn html_to_ansi(html: &str, rules: &[DelimiterRule], unescape: bool) -> String {
    let mut text = html.to_owned();
    for rule in rules {
        text = replace_pairs(&text, rule.tag, rule.ansi_open, rule.ansi_close);
    }
    text = replace_pairs(&text, PARAGRAPH_TAG, "", "");

    if unescape {
        if let Cow::Owned(decoded) = html_escape::decode_html_entities(&text) {
            return decoded;
        }
    }
    text
}

fn replace_pairs(text: &str, tag: &str, open_with: &str, close_with: &str) -> String {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");
    let open_finder = memmem::Finder::new(open.as_bytes());
    let close_finder = memmem::Finder::new(close.as_bytes());

    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    while let Some(found) = open_finder.find(&bytes[pos..]) {
        let open_at = pos + found;
        let content_start = open_at + open.len();
        let Some(found) = close_finder.find(&bytes[content_start..]) else {
            break;
        };
        let close_at = content_start + found;

        out.push_str(&text[pos..open_at]);
        out.push_str(open_with);
        out.push_str(&text[content_start..close_at]);
        out.push_str(close_with);
        pos = close_at + close.len();
    }
    out.push_str(&text[pos..]);
    out
}
