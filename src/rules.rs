//! Delimiter rules.
//!
//! A rule ties a marker (a run of one repeated ASCII punctuation byte) to an
//! HTML tag and a pair of ANSI escape sequences. Rules are applied in slice
//! order, so the order of a table is its priority.

use crate::Error;

/// Universal ANSI reset sequence.
pub const ANSI_RESET: &str = "\x1b[0m";

/// Tag wrapped around every paragraph block.
pub const PARAGRAPH_TAG: &str = "p";

/// One delimiter rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterRule {
    /// Marker text, e.g. `**`.
    pub marker: &'static str,
    /// HTML tag name (without angle brackets).
    pub tag: &'static str,
    /// ANSI sequence emitted at the start of a span.
    pub ansi_open: &'static str,
    /// ANSI sequence emitted at the end of a span.
    pub ansi_close: &'static str,
    /// Spans of an opaque rule hide every later marker inside them.
    /// Opaque markers may also stand alone between whitespace.
    pub opaque: bool,
}

impl DelimiterRule {
    /// The single byte the marker repeats.
    #[inline]
    pub fn marker_byte(&self) -> u8 {
        self.marker.as_bytes()[0]
    }

    /// Marker length in bytes.
    #[inline]
    pub fn marker_len(&self) -> usize {
        self.marker.len()
    }
}

/// Fenced code block: ```` ``` ````.
pub const CODE_BLOCK: DelimiterRule = DelimiterRule {
    marker: "```",
    tag: "pre",
    ansi_open: "\x1b[7m",
    ansi_close: ANSI_RESET,
    opaque: true,
};

/// Bold: `**`.
pub const BOLD: DelimiterRule = DelimiterRule {
    marker: "**",
    tag: "b",
    ansi_open: "\x1b[1m",
    ansi_close: ANSI_RESET,
    opaque: false,
};

/// Italic: `_`.
pub const ITALIC: DelimiterRule = DelimiterRule {
    marker: "_",
    tag: "i",
    ansi_open: "\x1b[3m",
    ansi_close: ANSI_RESET,
    opaque: false,
};

/// Inline code: `` ` ``.
pub const INLINE_CODE: DelimiterRule = DelimiterRule {
    marker: "`",
    tag: "tt",
    ansi_open: "\x1b[33m",
    ansi_close: ANSI_RESET,
    opaque: false,
};

/// Default rule table in priority order.
pub const DEFAULT_RULES: [DelimiterRule; 4] = [CODE_BLOCK, BOLD, ITALIC, INLINE_CODE];

/// Check that a rule table can be tokenized unambiguously.
pub fn validate_rules(rules: &[DelimiterRule]) -> Result<(), Error> {
    for (i, rule) in rules.iter().enumerate() {
        let invalid = |reason| Error::InvalidRule {
            marker: rule.marker,
            reason,
        };

        let Some(&first) = rule.marker.as_bytes().first() else {
            return Err(invalid("marker is empty"));
        };
        if !first.is_ascii_punctuation() {
            return Err(invalid("marker must be ASCII punctuation"));
        }
        if rule.marker.bytes().any(|b| b != first) {
            return Err(invalid("marker must repeat a single character"));
        }
        if rules[..i].iter().any(|other| other.marker == rule.marker) {
            return Err(invalid("marker is declared twice"));
        }
        if rule.tag.is_empty() || !rule.tag.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(invalid("tag must be a non-empty alphanumeric name"));
        }
        if rule.tag == PARAGRAPH_TAG {
            return Err(invalid("tag is reserved for paragraphs"));
        }
    }
    Ok(())
}
