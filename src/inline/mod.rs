//! Inline tagging.
//!
//! Uses a three-phase approach:
//! 1. Mark Collection: single pass collecting delimiter candidates
//! 2. Mark Resolution: one rule at a time, in priority order, against the
//!    spans already resolved by earlier rules
//! 3. Event Emission: walk paragraphs and resolved markers in source order

pub mod event;
pub mod marks;
mod resolve;
pub mod spans;

pub use event::TagEvent;
pub use spans::Span;

use memchr::{memchr_iter, memrchr};

use crate::block::Segmented;
use crate::rules::{validate_rules, DelimiterRule, DEFAULT_RULES};
use crate::{Error, Range};
use marks::{collect_marks, Mark};
use resolve::resolve_rule;
use spans::SpanIndex;

/// Inline tagger state, reusable across documents.
pub struct InlineTagger<'r> {
    rules: &'r [DelimiterRule],
    /// Reusable mark buffer.
    marks: Vec<Mark>,
    /// Marks of the rule being resolved.
    rule_marks: Vec<Mark>,
    index: SpanIndex,
}

impl InlineTagger<'static> {
    /// Tagger over [`DEFAULT_RULES`].
    pub fn with_default_rules() -> Self {
        Self::unchecked(&DEFAULT_RULES)
    }
}

impl<'r> InlineTagger<'r> {
    /// Create a tagger over a custom rule table, applied in slice order.
    pub fn new(rules: &'r [DelimiterRule]) -> Result<Self, Error> {
        validate_rules(rules)?;
        Ok(Self::unchecked(rules))
    }

    fn unchecked(rules: &'r [DelimiterRule]) -> Self {
        Self {
            rules,
            marks: Vec::with_capacity(64),
            rule_marks: Vec::with_capacity(16),
            index: SpanIndex::new(rules.len()),
        }
    }

    /// The rule table in priority order.
    pub fn rules(&self) -> &'r [DelimiterRule] {
        self.rules
    }

    /// Tag a segmented document.
    ///
    /// Fails on the first unbalanced, unpaired or double-tagged marker; no
    /// partial result is returned.
    pub fn tag<'a>(&mut self, doc: &Segmented<'a>) -> Result<TaggedDocument<'a, 'r>, Error> {
        let source = doc.source();
        let locate = |offset: u32| line_col(source, offset as usize);

        // Phase 1: collect marks
        collect_marks(source, self.rules, &mut self.marks);

        // Phase 2: resolve rule by rule
        self.index.reset(self.rules.len());
        let mut suppressed = 0;
        for rule in 0..self.rules.len() {
            self.rule_marks.clear();
            self.rule_marks
                .extend(self.marks.iter().filter(|m| m.rule == rule));

            let resolved = resolve_rule(rule, self.rules, &self.rule_marks, &self.index, &locate)?;
            suppressed += resolved.suppressed;
            self.index.extend(rule, resolved.spans);
        }

        // Phase 3: order the markers for emission
        let spans: Vec<Span> = self.index.iter().copied().collect();
        let mut edits: Vec<Edit> = spans
            .iter()
            .flat_map(|s| {
                [
                    Edit { range: s.open, rule: s.rule, open: true },
                    Edit { range: s.close, rule: s.rule, open: false },
                ]
            })
            .collect();
        edits.sort_unstable_by_key(|e| e.range.start);

        Ok(TaggedDocument {
            source,
            rules: self.rules,
            paragraphs: doc.paragraphs().to_vec(),
            spans,
            edits,
            suppressed,
        })
    }
}

/// A marker to be replaced by a tag.
#[derive(Debug, Clone, Copy)]
struct Edit {
    range: Range,
    rule: usize,
    open: bool,
}

/// Source text with every resolved span, ready for rendering.
#[derive(Debug, Clone)]
pub struct TaggedDocument<'a, 'r> {
    source: &'a str,
    rules: &'r [DelimiterRule],
    paragraphs: Vec<Range>,
    spans: Vec<Span>,
    edits: Vec<Edit>,
    suppressed: usize,
}

impl<'a, 'r> TaggedDocument<'a, 'r> {
    /// The unmodified source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Resolved spans, grouped by rule in priority order.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Number of spans tagged by the rule with the given marker.
    pub fn span_count(&self, marker: &str) -> usize {
        self.spans
            .iter()
            .filter(|s| self.rules[s.rule].marker == marker)
            .count()
    }

    /// Markers left as literal text inside opaque spans.
    pub fn suppressed(&self) -> usize {
        self.suppressed
    }

    /// Emit events in document order into `events`.
    pub fn events_into(&self, events: &mut Vec<TagEvent<'r>>) {
        events.clear();
        events.reserve(self.paragraphs.len() * 3 + self.edits.len() * 2);

        let mut edits = self.edits.iter().peekable();
        for para in &self.paragraphs {
            events.push(TagEvent::ParagraphStart);

            let mut cursor = para.start;
            while let Some(edit) = edits.next_if(|e| e.range.start < para.end) {
                if edit.range.start > cursor {
                    events.push(TagEvent::Text(Range::new(cursor, edit.range.start)));
                }
                let rule = &self.rules[edit.rule];
                events.push(if edit.open {
                    TagEvent::Open(rule)
                } else {
                    TagEvent::Close(rule)
                });
                cursor = edit.range.end;
            }
            if para.end > cursor {
                events.push(TagEvent::Text(Range::new(cursor, para.end)));
            }

            events.push(TagEvent::ParagraphEnd);
        }
    }

    /// Events in document order.
    pub fn events(&self) -> Vec<TagEvent<'r>> {
        let mut events = Vec::new();
        self.events_into(&mut events);
        events
    }
}

/// 1-based line and column (in chars) of a byte offset.
fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let before = &source.as_bytes()[..offset];
    let line = memchr_iter(b'\n', before).count() + 1;
    let line_start = memrchr(b'\n', before).map_or(0, |p| p + 1);
    let column = source[line_start..offset].chars().count() + 1;
    (line, column)
}
