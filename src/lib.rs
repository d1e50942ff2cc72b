extern crate self as painrank;

use regex::Regex;

#[macro_use]
mod macros;
mod api;
mod evidence;
mod export;
mod ranking;
mod record;
mod scorer;
mod signals;

pub use api::{score, score_all};
pub use export::{ExportError, excerpt, export_csv, export_csv_file, import_csv, import_csv_file};
pub use ranking::{filter_min, rank};
pub use record::{Post, PostKind, ScoredPost, SignalSet};
pub use scorer::Scorer;
pub use signals::Profile;

// --- Internal rule types ----------------------------------------------------

/// A single signal pattern: a name plus a precompiled case-insensitive regex.
///
/// The `Regex` is stored as a static reference (created via the `regex!`
/// helper macro in `src/macros.rs`), so the whole library compiles once per
/// process and stays read-only afterwards.
#[derive(Debug)]
pub(crate) struct SignalRule {
    pub name: &'static str,
    pub pattern: &'static Regex,
}

/// Which record fields a group is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scan {
    /// Combined title + body only.
    Text,
    /// Combined title + body first, then combined author + flair.
    TextThenAuthor,
}

/// How a group turns rule matches into points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Award {
    /// The group contributes its point value at most once, no matter how many
    /// of its rules match.
    Once,
    /// Each distinct matching rule contributes the point value, up to `cap`
    /// rules.
    PerRule { cap: u32 },
}

/// A category of signals: an ordered set of rules sharing a point value.
///
/// Groups marked `required` form the identity gate: they are evaluated in
/// declared order and the first matching tier wins. If no required group
/// matches, the record scores zero and no optional group is evaluated.
/// Libraries without required groups (the additive profile) have no gate.
#[derive(Debug)]
pub(crate) struct SignalGroup {
    pub flag: SignalSet,
    /// Breakdown label, e.g. "Strong Identity".
    pub label: &'static str,
    /// Evidence quote prefix, e.g. "Identity".
    pub evidence_label: &'static str,
    pub points: u32,
    pub required: bool,
    pub scan: Scan,
    pub award: Award,
    pub rules: Vec<SignalRule>,
}

impl SignalGroup {
    /// First-match evidence for this group against the scanned fields.
    pub(crate) fn find(&self, text: &str, author: &str) -> Option<(&'static str, String)> {
        match self.scan {
            Scan::Text => evidence::find_evidence(text, &self.rules),
            Scan::TextThenAuthor => evidence::find_evidence(text, &self.rules)
                .or_else(|| evidence::find_evidence(author, &self.rules)),
        }
    }
}

/// An immutable, fully compiled signal taxonomy for one scoring profile.
#[derive(Debug)]
pub(crate) struct Library {
    pub groups: Vec<SignalGroup>,
}
