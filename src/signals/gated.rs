//! Gated profile: only confirmed CEOs/founders in genuine pain score at all.
//!
//! Identity comes in two tiers. The strong tier demands first-person proof
//! ("I'm the CEO", "I founded"); the proximity rules ("our startup ... I")
//! are deliberately single combined patterns, not two matchers ANDed at
//! runtime. The weak tier accepts looser phrasing and bare title mentions,
//! which matter mostly for the author/flair field ("Jane, Founder").

use crate::record::SignalSet;
use crate::{Award, Library, Scan, SignalGroup};

/// Strong CEO/founder identity, first person only (+40).
fn strong_identity() -> SignalGroup {
    SignalGroup {
        flag: SignalSet::STRONG_IDENTITY,
        label: "Strong Identity",
        evidence_label: "Identity",
        points: 40,
        required: true,
        scan: Scan::Text,
        award: Award::Once,
        rules: vec![
            signal!("i'm the ceo", r"(?i)\bI'm\s+(?:the\s+)?(?:CEO|founder|co-founder|CTO)\b"),
            signal!("i am the ceo", r"(?i)\bI\s+am\s+(?:the\s+)?(?:CEO|founder|co-founder|CTO)\b"),
            signal!("as the ceo", r"(?i)\bas\s+(?:the\s+)?(?:CEO|founder|co-founder)\b"),
            signal!("i founded", r"(?i)\bI\s+founded\b"),
            signal!("i started this company", r"(?i)\bI\s+started\s+(?:this|the|my)\s+company\b"),
            signal!("my startup", r"(?i)\bmy\s+startup\b"),
            signal!("our startup near I", r"(?i)\bour\s+startup\b.*\bI\b"),
            signal!("my company near I", r"(?i)\bmy\s+company\b.*\bI\b"),
        ],
    }
}

/// Weaker CEO identity signals, still valid but lower confidence (+25).
///
/// Checked against the combined text first, then the combined author/flair.
fn weak_identity() -> SignalGroup {
    SignalGroup {
        flag: SignalSet::WEAK_IDENTITY,
        label: "Weak Identity",
        evidence_label: "Identity",
        points: 25,
        required: true,
        scan: Scan::TextThenAuthor,
        award: Award::Once,
        rules: vec![
            signal!("founder near I", r"(?i)\bfounder\b.*\bI\b"),
            signal!("ceo near I", r"(?i)\bCEO\b.*\bI\b"),
            signal!("I near my company", r"(?i)\bI\b.*\bmy\s+company\b"),
            // Bare titles, last so the first-person rules win for evidence.
            // These carry author signatures like "Jane, Founder".
            signal!("bare founder title", r"(?i)\b(?:founder|co-founder)\b"),
            signal!("bare executive title", r"(?i)\b(?:CEO|CTO)\b"),
        ],
    }
}

/// Visceral pain and anxiety, emotional language (+30).
fn visceral_pain() -> SignalGroup {
    SignalGroup {
        flag: SignalSet::VISCERAL_PAIN,
        label: "Visceral Pain",
        evidence_label: "Pain",
        points: 30,
        required: false,
        scan: Scan::Text,
        award: Award::Once,
        rules: vec![
            signal!("frustrated", r"(?i)\bfrustrat(?:ed|ing)\b"),
            signal!("worried", r"(?i)\bworried\b"),
            signal!("anxious", r"(?i)\banxious\b"),
            signal!("stressed", r"(?i)\bstressed\b"),
            signal!("keeps me up", r"(?i)\bkeeps\s+me\s+(?:up|awake)\b"),
            signal!("can't sleep", r"(?i)\bcan't\s+sleep\b"),
            signal!("losing sleep", r"(?i)\blosing\s+sleep\b"),
            signal!("panicking", r"(?i)\bpanick?(?:ed|ing)\b"),
            signal!("desperate", r"(?i)\bdesperate\b"),
            signal!("afraid", r"(?i)\bafraid\b"),
            signal!("scared", r"(?i)\bscared\b"),
            signal!("terrified", r"(?i)\bterrified\b"),
            signal!("wits end", r"(?i)\bat\s+my\s+wits?\s+end\b"),
            signal!("don't know what to do", r"(?i)\bdon't\s+know\s+what\s+to\s+do\b"),
            signal!("pulling my hair out", r"(?i)\bpulling\s+my\s+hair\s+out\b"),
            signal!("going crazy", r"(?i)\bgoing\s+crazy\b"),
            signal!("driving me crazy", r"(?i)\bdriving\s+me\s+crazy\b"),
            signal!("hate this", r"(?i)\bhate\s+(?:this|it)\b"),
            signal!("want to quit", r"(?i)\bwant\s+to\s+quit\b"),
            signal!("ready to give up", r"(?i)\bready\s+to\s+give\s+up\b"),
        ],
    }
}

/// Cultural and velocity problems (+20).
fn culture_velocity() -> SignalGroup {
    SignalGroup {
        flag: SignalSet::CULTURE_VELOCITY,
        label: "Culture/Velocity",
        evidence_label: "Culture",
        points: 20,
        required: false,
        scan: Scan::Text,
        award: Award::Once,
        rules: vec![
            signal!("velocity is terrible", r"(?i)\bvelocity\s+(?:is\s+)?(?:terrible|awful|slow|dropping|decreased)\b"),
            signal!("can't ship", r"(?i)\bcan't\s+ship\b"),
            signal!("cannot ship", r"(?i)\bcannot\s+ship\b"),
            signal!("not shipping", r"(?i)\bnot\s+shipping\b"),
            signal!("slow to ship", r"(?i)\bslow\s+(?:to\s+)?ship\b"),
            signal!("missed deadlines", r"(?i)\bmissed?\s+(?:every\s+)?deadline"),
            signal!("behind schedule", r"(?i)\bbehind\s+schedule\b"),
            signal!("toxic culture", r"(?i)\bculture\s+(?:is\s+)?(?:toxic|broken|terrible|bad)\b"),
            signal!("dysfunctional team", r"(?i)\bteam\s+(?:is\s+)?(?:dysfunctional|broken|not\s+working)\b"),
            signal!("no one cares", r"(?i)\bno\s+one\s+(?:cares|wants\s+to\s+work)\b"),
            signal!("people are leaving", r"(?i)\bpeople\s+are\s+(?:leaving|quitting)\b"),
            signal!("exodus", r"(?i)\bexodus\b"),
            signal!("mass resignation", r"(?i)\bmass\s+resignation\b"),
            signal!("everyone's leaving", r"(?i)\beveryone's?\s+(?:leaving|quitting)\b"),
            signal!("morale is low", r"(?i)\bmorale\s+is\s+(?:low|terrible|awful)\b"),
        ],
    }
}

/// Specific engineering pain (+10).
fn engineering_pain() -> SignalGroup {
    SignalGroup {
        flag: SignalSet::ENGINEERING_PAIN,
        label: "Engineering Pain",
        evidence_label: "Engineering",
        points: 10,
        required: false,
        scan: Scan::Text,
        award: Award::Once,
        rules: vec![
            signal!("technical debt", r"(?i)\btechnical\s+debt\s+(?:is\s+)?(?:killing|crushing|overwhelming|everywhere)\b"),
            signal!("tech debt", r"(?i)\btech\s+debt\s+(?:out\s+of\s+control|massive|huge)\b"),
            signal!("legacy nightmare", r"(?i)\blegacy\s+(?:codebase|system)\s+(?:is\s+)?(?:unmaintainable|a\s+nightmare)\b"),
            signal!("can't scale", r"(?i)\bcan't\s+(?:scale|grow)\b"),
            signal!("scaling problems", r"(?i)\bscaling\s+(?:problems|issues|crisis)\b"),
            signal!("constant outages", r"(?i)\bconstant\s+(?:outages|fires|incidents)\b"),
            signal!("production on fire", r"(?i)\bproduction\s+(?:is\s+)?(?:on\s+fire|constantly\s+breaking|unstable)\b"),
            signal!("quality suffering", r"(?i)\bquality\s+(?:is\s+)?(?:terrible|awful|suffering)\b"),
            signal!("bugs everywhere", r"(?i)\b(?:critical\s+)?bugs?\s+(?:everywhere|constantly)\b"),
            signal!("high turnover", r"(?i)\bturnover\s+(?:is\s+)?(?:high|terrible|killing\s+us)\b"),
            signal!("can't hire engineers", r"(?i)\bcan't\s+(?:hire|find|retain)\s+(?:good\s+)?(?:engineers?|developers?)\b"),
            signal!("architecture is a mess", r"(?i)\barchitecture\s+(?:is\s+)?(?:a\s+mess|terrible|broken)\b"),
        ],
    }
}

pub(crate) fn get() -> Library {
    Library {
        groups: vec![
            strong_identity(),
            weak_identity(),
            visceral_pain(),
            culture_velocity(),
            engineering_pain(),
        ],
    }
}
