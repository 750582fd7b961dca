//! Per-rule mark resolution.
//!
//! One rule at a time, in priority order:
//! 1. marks inside an opaque span are suppressed (left as literal text)
//! 2. the remaining marks must balance
//! 3. marks pair positionally: 1st with 2nd, 3rd with 4th, ...
//! 4. a mark inside any other earlier span is a double-tag conflict

use smallvec::SmallVec;

use super::marks::{Mark, Side};
use super::spans::{Span, SpanIndex};
use crate::rules::DelimiterRule;
use crate::Error;

/// Outcome of resolving one rule.
#[derive(Debug, Default)]
pub struct RuleResolution {
    /// Matched spans, in source order.
    pub spans: Vec<Span>,
    /// Marks left as literal text because an opaque span hides them.
    pub suppressed: usize,
}

/// Resolve the marks of rule `rule` against the spans of earlier rules.
///
/// `marks` holds only this rule's marks, in source order. `locate` turns a
/// byte offset into a 1-based (line, column) pair for diagnostics.
pub fn resolve_rule(
    rule: usize,
    rules: &[DelimiterRule],
    marks: &[Mark],
    index: &SpanIndex,
    locate: impl Fn(u32) -> (usize, usize),
) -> Result<RuleResolution, Error> {
    let def = &rules[rule];

    let mut live: SmallVec<[Mark; 16]> = SmallVec::with_capacity(marks.len());
    let mut suppressed = 0;
    for mark in marks {
        debug_assert_eq!(mark.rule, rule);
        let hidden = (0..rule)
            .filter(|&earlier| rules[earlier].opaque)
            .any(|earlier| index.enclosing_in(earlier, mark.range).is_some());
        if hidden {
            suppressed += 1;
        } else {
            live.push(*mark);
        }
    }

    check_balance(def, &live)?;

    let mut spans = Vec::with_capacity(live.len() / 2);
    for pair in live.chunks_exact(2) {
        let (open, close) = (pair[0], pair[1]);
        if !open.side.can_open() {
            return Err(unpaired(def, open, &locate));
        }
        if !close.side.can_close() {
            return Err(unpaired(def, close, &locate));
        }
        spans.push(Span {
            rule,
            open: open.range,
            close: close.range,
        });
    }

    for mark in &live {
        if let Some(outer) = index.enclosing(mark.range) {
            let (line, column) = locate(mark.range.start);
            return Err(Error::DoubleTagConflict {
                marker: def.marker,
                enclosing: rules[outer.rule].marker,
                line,
                column,
            });
        }
    }

    tracing::debug!(
        marker = def.marker,
        spans = spans.len(),
        suppressed,
        "resolved rule"
    );

    Ok(RuleResolution { spans, suppressed })
}

/// Opening and closing counts must match.
///
/// Standalone marks take whichever role their position gives them, so they
/// are counted as opening in even slots and closing in odd slots.
fn check_balance(def: &DelimiterRule, marks: &[Mark]) -> Result<(), Error> {
    let (mut opening, mut closing) = (0, 0);
    for (slot, mark) in marks.iter().enumerate() {
        match mark.side {
            Side::Open => opening += 1,
            Side::Close => closing += 1,
            Side::Either if slot % 2 == 0 => opening += 1,
            Side::Either => closing += 1,
        }
    }

    if opening != closing {
        return Err(Error::MarkerImbalance {
            marker: def.marker,
            opening,
            closing,
        });
    }
    Ok(())
}

fn unpaired(def: &DelimiterRule, mark: Mark, locate: &impl Fn(u32) -> (usize, usize)) -> Error {
    let (line, column) = locate(mark.range.start);
    Error::UnpairedMarker {
        marker: def.marker,
        line,
        column,
    }
}
