//! Evidence extraction.
//!
//! Given a text blob and an ordered rule list, find the first matching rule
//! and return a bounded context snippet around the match. No match is a
//! normal outcome, not an error, and identical input always yields identical
//! output.

use crate::SignalRule;

/// Characters of context kept before the match start.
const CONTEXT_BEFORE: usize = 50;
/// Characters of context kept after the match end.
const CONTEXT_AFTER: usize = 100;

/// Evaluate `rules` in declared order against `text`; on the first match,
/// return the rule's name and the context window around the matched span.
pub(crate) fn find_evidence(text: &str, rules: &[SignalRule]) -> Option<(&'static str, String)> {
    for rule in rules {
        if let Some(m) = rule.pattern.find(text) {
            return Some((rule.name, context_window(text, m.start(), m.end())));
        }
    }
    None
}

/// Cut a window of `CONTEXT_BEFORE` chars before `start` and `CONTEXT_AFTER`
/// chars after `end`, clipped to the text bounds, with whitespace collapsed
/// to single spaces. Clipped sides are marked with "...".
fn context_window(text: &str, start: usize, end: usize) -> String {
    let from = step_back(text, start, CONTEXT_BEFORE);
    let to = step_forward(text, end, CONTEXT_AFTER);

    let mut quote = text[from..to].split_whitespace().collect::<Vec<_>>().join(" ");
    if from > 0 {
        quote.insert_str(0, "...");
    }
    if to < text.len() {
        quote.push_str("...");
    }
    quote
}

/// Walk back `n` chars from byte index `idx`, staying on char boundaries.
fn step_back(text: &str, idx: usize, n: usize) -> usize {
    let mut i = idx;
    for _ in 0..n {
        if i == 0 {
            return 0;
        }
        i -= 1;
        while !text.is_char_boundary(i) {
            i -= 1;
        }
    }
    i
}

/// Walk forward `n` chars from byte index `idx`, staying on char boundaries.
fn step_forward(text: &str, idx: usize, n: usize) -> usize {
    let mut i = idx;
    for _ in 0..n {
        if i >= text.len() {
            return text.len();
        }
        i += 1;
        while i < text.len() && !text.is_char_boundary(i) {
            i += 1;
        }
    }
    i
}
