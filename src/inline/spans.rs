//! Resolved spans and the enclosing-span lookup.
//!
//! Spans of one rule never overlap and are stored sorted by position, so
//! "which earlier span encloses this mark" is a binary search per rule.

use smallvec::SmallVec;

use crate::Range;

/// A matched open/close marker pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Index of the rule in the rule table.
    pub rule: usize,
    /// Opening marker bytes.
    pub open: Range,
    /// Closing marker bytes.
    pub close: Range,
}

impl Span {
    /// Text strictly between the two markers.
    #[inline]
    pub fn content(&self) -> Range {
        Range::new(self.open.end, self.close.start)
    }
}

/// Per-rule sorted span lists.
#[derive(Debug, Default)]
pub struct SpanIndex {
    by_rule: Vec<SmallVec<[Span; 8]>>,
}

impl SpanIndex {
    /// Create an index for a table of `rule_count` rules.
    pub fn new(rule_count: usize) -> Self {
        Self {
            by_rule: (0..rule_count).map(|_| SmallVec::new()).collect(),
        }
    }

    /// Reset for reuse, keeping one list per rule.
    pub fn reset(&mut self, rule_count: usize) {
        self.by_rule.iter_mut().for_each(|list| list.clear());
        self.by_rule.resize_with(rule_count, SmallVec::new);
    }

    /// Record the spans of `rule`. Spans must arrive in source order.
    pub fn extend(&mut self, rule: usize, spans: impl IntoIterator<Item = Span>) {
        let list = &mut self.by_rule[rule];
        for span in spans {
            debug_assert!(list.last().is_none_or(|prev| prev.close.end <= span.open.start));
            list.push(span);
        }
    }

    /// The span of `rule` whose content contains `range`, if any.
    pub fn enclosing_in(&self, rule: usize, range: Range) -> Option<&Span> {
        let list = &self.by_rule[rule];
        // Last span opening at or before the mark.
        let idx = list.partition_point(|s| s.open.start <= range.start);
        let candidate = list[..idx].last()?;
        candidate.content().covers(range).then_some(candidate)
    }

    /// The first span, in rule-priority order, whose content contains `range`.
    pub fn enclosing(&self, range: Range) -> Option<&Span> {
        (0..self.by_rule.len()).find_map(|rule| self.enclosing_in(rule, range))
    }

    /// All spans of one rule, in source order.
    #[cfg(test)]
    pub fn spans_of(&self, rule: usize) -> &[Span] {
        &self.by_rule[rule]
    }

    /// All spans, grouped by rule.
    pub fn iter(&self) -> impl Iterator<Item = &Span> + '_ {
        self.by_rule.iter().flat_map(|list| list.iter())
    }
}
