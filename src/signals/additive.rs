//! Additive profile: ungated accumulation of independent categories.
//!
//! Meant for feeds that are already founder-adjacent (job boards, startup
//! forums), where demanding first-person identity proof would throw away
//! most of the signal. Numeric and currency patterns (runway months, burn
//! figures) are first-class rules in the urgency group.

use crate::record::SignalSet;
use crate::{Award, Library, Scan, SignalGroup};

/// CEO/founder presence (+30). Not a gate in this profile.
fn ceo_founder() -> SignalGroup {
    SignalGroup {
        flag: SignalSet::CEO_FOUNDER,
        label: "CEO/Founder",
        evidence_label: "Identity",
        points: 30,
        required: false,
        scan: Scan::TextThenAuthor,
        award: Award::Once,
        rules: vec![
            signal!("first person founder", r"(?i)\b(?:I'm|I\s+am)\s+(?:a\s+|the\s+)?(?:CEO|founder|co-founder)\b"),
            signal!("startup ceo", r"(?i)\bstartup\s+(?:CEO|founder)\b"),
            signal!("my startup", r"(?i)\bmy\s+startup\b"),
            signal!("founder mention", r"(?i)\b(?:founder|co-founder|CEO)\b"),
        ],
    }
}

/// Urgent, time-boxed language (+25).
fn urgency() -> SignalGroup {
    SignalGroup {
        flag: SignalSet::URGENCY,
        label: "Urgency",
        evidence_label: "Urgency",
        points: 25,
        required: false,
        scan: Scan::Text,
        award: Award::Once,
        rules: vec![
            signal!("urgent", r"(?i)\burgent(?:ly)?\b"),
            signal!("asap", r"(?i)\basap\b"),
            signal!("immediately", r"(?i)\bimmediately\b"),
            signal!("right now", r"(?i)\bright\s+now\b"),
            signal!("months of runway", r"(?i)\b\d+\s+months?\s+(?:of\s+)?runway\b"),
            signal!("burn figure", r"(?i)\$\d+(?:\.\d+)?\s*[km]\b"),
            signal!("running out", r"(?i)\brunning\s+out\s+of\s+(?:money|time|runway)\b"),
        ],
    }
}

/// Leadership transition or hiring language (+20).
fn transition_hiring() -> SignalGroup {
    SignalGroup {
        flag: SignalSet::TRANSITION,
        label: "Transition/Hiring",
        evidence_label: "Hiring",
        points: 20,
        required: false,
        scan: Scan::Text,
        award: Award::Once,
        rules: vec![
            signal!("looking for a cto", r"(?i)\b(?:looking\s+for|seeking|need)\s+(?:a\s+)?(?:fractional\s+)?(?:CTO|VP\s+(?:of\s+)?Eng(?:ineering)?|engineering\s+leader)\b"),
            signal!("recommend a cto", r"(?i)\brecommend\s+(?:a\s+)?(?:CTO|VP\s+(?:of\s+)?Engineering|engineering\s+leader)\b"),
            signal!("cto left", r"(?i)\b(?:CTO|VP\s+of\s+Engineering)\s+(?:just\s+)?(?:left|quit|resigned)\b"),
            signal!("hiring a cto", r"(?i)\bhiring\s+(?:a\s+)?(?:CTO|VP\s+Engineering|head\s+of\s+engineering)\b"),
        ],
    }
}

/// Shipping velocity problems (+15).
fn velocity() -> SignalGroup {
    SignalGroup {
        flag: SignalSet::VELOCITY,
        label: "Velocity",
        evidence_label: "Velocity",
        points: 15,
        required: false,
        scan: Scan::Text,
        award: Award::Once,
        rules: vec![
            signal!("can't ship", r"(?i)\bcan(?:'t|not)\s+ship\b"),
            signal!("not shipping", r"(?i)\bnot\s+shipping\b"),
            signal!("missed deadlines", r"(?i)\bmissed?\s+(?:every\s+)?deadline"),
            signal!("behind schedule", r"(?i)\bbehind\s+schedule\b"),
            signal!("no release in months", r"(?i)\bno\s+release\s+in\s+\d+\s+months?\b"),
            signal!("velocity", r"(?i)\bvelocity\b"),
        ],
    }
}

/// Engineering pain keywords (+10 each, capped at 3 distinct matches).
fn pain_keywords() -> SignalGroup {
    SignalGroup {
        flag: SignalSet::PAIN_KEYWORDS,
        label: "Pain Keywords",
        evidence_label: "Keywords",
        points: 10,
        required: false,
        scan: Scan::Text,
        award: Award::PerRule { cap: 3 },
        rules: vec![
            signal!("technical debt", r"(?i)\b(?:technical|tech)\s+debt\b"),
            signal!("legacy code", r"(?i)\blegacy\s+(?:code(?:base)?|system)\b"),
            signal!("outages", r"(?i)\b(?:constant\s+)?outages?\b"),
            signal!("bugs everywhere", r"(?i)\bbugs?\s+everywhere\b"),
            signal!("burnout", r"(?i)\bburn(?:ed|t)?[\s-]?out\b"),
            signal!("turnover", r"(?i)\bturnover\b"),
            signal!("scaling problems", r"(?i)\bscaling\s+(?:problems|issues|crisis)\b"),
            signal!("full rewrite", r"(?i)\b(?:full|complete|total)\s+rewrite\b"),
        ],
    }
}

pub(crate) fn get() -> Library {
    Library {
        groups: vec![ceo_founder(), urgency(), transition_hiring(), velocity(), pain_keywords()],
    }
}
