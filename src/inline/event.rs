//! Tag events emitted while walking a tagged document.

use crate::rules::DelimiterRule;
use crate::Range;

/// Events in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagEvent<'r> {
    /// Start of a paragraph block.
    ParagraphStart,
    /// End of a paragraph block.
    ParagraphEnd,
    /// Literal source text.
    Text(Range),
    /// Opening marker of a span.
    Open(&'r DelimiterRule),
    /// Closing marker of a span.
    Close(&'r DelimiterRule),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_size() {
        assert!(std::mem::size_of::<TagEvent<'_>>() <= 16);
    }
}
