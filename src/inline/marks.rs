//! Mark collection for inline tagging.
//!
//! Marks are marker runs that qualify as delimiters, collected in a single
//! left-to-right pass before any rule is resolved. A run qualifies when its
//! length equals a rule marker exactly and it sits on a whitespace boundary.

use crate::rules::DelimiterRule;
use crate::Range;

/// Which side of a span a mark can delimit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Whitespace before, non-whitespace after.
    Open,
    /// Non-whitespace before, whitespace after.
    Close,
    /// Alone on its line apart from whitespace (opaque rules only).
    Either,
}

impl Side {
    #[inline]
    pub fn can_open(self) -> bool {
        matches!(self, Side::Open | Side::Either)
    }

    #[inline]
    pub fn can_close(self) -> bool {
        matches!(self, Side::Close | Side::Either)
    }
}

/// A delimiter candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    /// Marker bytes in the source.
    pub range: Range,
    /// Index of the rule in the rule table.
    pub rule: usize,
    pub side: Side,
}

/// Byte lookup table marking the bytes any rule marker is made of.
struct MarkerTable {
    special: [bool; 256],
}

impl MarkerTable {
    fn new(rules: &[DelimiterRule]) -> Self {
        let mut special = [false; 256];
        for rule in rules {
            special[rule.marker_byte() as usize] = true;
        }
        Self { special }
    }

    #[inline]
    fn is_special(&self, b: u8) -> bool {
        self.special[b as usize]
    }
}

/// Scan `text` and collect marks for every rule in `rules`.
///
/// Marks are appended in source order.
pub fn collect_marks(text: &str, rules: &[DelimiterRule], marks: &mut Vec<Mark>) {
    marks.clear();

    let bytes = text.as_bytes();
    let table = MarkerTable::new(rules);
    let len = bytes.len();
    let mut pos = 0;

    while pos < len {
        let b = bytes[pos];
        if !table.is_special(b) {
            pos += 1;
            continue;
        }

        let start = pos;
        while pos < len && bytes[pos] == b {
            pos += 1;
        }
        let run_len = pos - start;

        let Some(rule) = rules
            .iter()
            .position(|r| r.marker_byte() == b && r.marker_len() == run_len)
        else {
            continue;
        };

        let space_before = start == 0 || is_space(bytes[start - 1]);
        let space_after = pos == len || is_space(bytes[pos]);

        let side = match (space_before, space_after) {
            (true, false) => Side::Open,
            (false, true) => Side::Close,
            (true, true) if rules[rule].opaque && fills_line(bytes, start, pos) => Side::Either,
            // Intraword or isolated between spaces: literal text.
            _ => continue,
        };

        marks.push(Mark {
            range: Range::from_usize(start, pos),
            rule,
            side,
        });
    }

    tracing::trace!(marks = marks.len(), "collected marks");
}

/// Whitespace for delimiter boundaries. Start and end of input count too.
#[inline]
fn is_space(b: u8) -> bool {
    b.is_ascii_whitespace()
}

/// The run `start..end` is the only non-whitespace on its line.
fn fills_line(bytes: &[u8], start: usize, end: usize) -> bool {
    let before = bytes[..start].iter().rev().take_while(|&&b| !is_line_break(b));
    let after = bytes[end..].iter().take_while(|&&b| !is_line_break(b));
    before.chain(after).all(|&b| is_space(b))
}

#[inline]
fn is_line_break(b: u8) -> bool {
    matches!(b, b'\r' | b'\n')
}
