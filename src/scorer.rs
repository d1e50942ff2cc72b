//! The scoring engine.
//!
//! A [`Scorer`] owns one immutable, precompiled [`Library`] and applies it to
//! candidate posts. Scoring is a pure function of the post's text/author
//! fields and the library: no I/O, no shared mutable state, no randomness.
//! Scoring any number of posts in parallel is therefore safe.
//!
//! Setting `PAINRANK_DEBUG_SIGNALS=1` prints a per-group trace of each run.

use crate::record::{Post, ScoredPost, SignalSet};
use crate::signals::{self, Profile};
use crate::{Award, Library, SignalGroup};

/// Breakdown sentinel when the identity gate stays closed.
const GATE_BREAKDOWN: &str = "Not identified as CEO/founder";
/// Evidence sentinel when the identity gate stays closed.
const GATE_EVIDENCE: &str = "No identity detected";
/// Evidence sentinel when categories matched but produced no quotes.
const IDENTITY_ONLY: &str = "Identity only";
/// Sentinels for the ungated profile when nothing matched at all.
const NO_SIGNALS_BREAKDOWN: &str = "No signals matched";
const NO_SIGNALS_EVIDENCE: &str = "No signals detected";

/// Applies a signal library to candidate posts.
pub struct Scorer {
    profile: Profile,
    library: Library,
}

impl Default for Scorer {
    fn default() -> Self {
        Scorer::new(Profile::default())
    }
}

impl Scorer {
    /// Build a scorer for the given profile. Pattern compilation happens
    /// once; the resulting library is read-only.
    pub fn new(profile: Profile) -> Self {
        Scorer { profile, library: signals::get(profile) }
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Score one post. The post itself is never mutated.
    pub fn score(&self, post: &Post) -> ScoredPost {
        let text = format!("{} {}", post.title, post.text);
        let author = format!("{} {}", post.author, post.author_flair);
        let debug = std::env::var_os("PAINRANK_DEBUG_SIGNALS").is_some();

        let mut score: u32 = 0;
        let mut breakdown: Vec<String> = Vec::new();
        let mut quotes: Vec<String> = Vec::new();
        let mut signals = SignalSet::empty();

        // Required tiers first: evaluated in declared order, first match wins.
        let has_gate = self.library.groups.iter().any(|g| g.required);
        let mut identity_found = false;
        for group in self.library.groups.iter().filter(|g| g.required) {
            if identity_found {
                break;
            }
            if let Some((rule, quote)) = group.find(&text, &author) {
                if debug {
                    eprintln!("[signals] {} -> match via '{rule}'", group.label);
                }
                score += group.points;
                breakdown.push(format!("{} (+{})", group.label, group.points));
                quotes.push(format!("{}: \"{}\"", group.evidence_label, quote));
                signals |= group.flag;
                identity_found = true;
            } else if debug {
                eprintln!("[signals] {} -> no match", group.label);
            }
        }

        if has_gate && !identity_found {
            return ScoredPost {
                post: post.clone(),
                score: 0,
                breakdown: GATE_BREAKDOWN.to_string(),
                evidence: GATE_EVIDENCE.to_string(),
                signals,
            };
        }

        // Optional groups, each evaluated independently in declared order.
        for group in self.library.groups.iter().filter(|g| !g.required) {
            let awarded = match group.award {
                Award::Once => self.award_once(group, &text, &author, &mut quotes),
                Award::PerRule { cap } => self.award_per_rule(group, &text, cap, &mut quotes),
            };
            if awarded > 0 {
                if debug {
                    eprintln!("[signals] {} -> +{awarded}", group.label);
                }
                score += awarded;
                breakdown.push(format!("{} (+{awarded})", group.label));
                signals |= group.flag;
            } else if debug {
                eprintln!("[signals] {} -> no match", group.label);
            }
        }

        let breakdown = if breakdown.is_empty() {
            NO_SIGNALS_BREAKDOWN.to_string()
        } else {
            breakdown.join(", ")
        };
        let evidence = if quotes.is_empty() {
            if has_gate { IDENTITY_ONLY } else { NO_SIGNALS_EVIDENCE }.to_string()
        } else {
            quotes.join(" | ")
        };

        ScoredPost { post: post.clone(), score: score.min(100), breakdown, evidence, signals }
    }

    fn award_once(&self, group: &SignalGroup, text: &str, author: &str, quotes: &mut Vec<String>) -> u32 {
        match group.find(text, author) {
            Some((_, quote)) => {
                quotes.push(format!("{}: \"{}\"", group.evidence_label, quote));
                group.points
            }
            None => 0,
        }
    }

    /// Count distinct matching rules up to `cap`; one illustrative quote from
    /// the first matching rule.
    fn award_per_rule(&self, group: &SignalGroup, text: &str, cap: u32, quotes: &mut Vec<String>) -> u32 {
        let mut hits: u32 = 0;
        for rule in &group.rules {
            if rule.pattern.is_match(text) {
                if hits == 0 {
                    // First matching rule supplies the quote.
                    if let Some((_, quote)) =
                        crate::evidence::find_evidence(text, std::slice::from_ref(rule))
                    {
                        quotes.push(format!("{}: \"{}\"", group.evidence_label, quote));
                    }
                }
                hits += 1;
                if hits == cap {
                    break;
                }
            }
        }
        hits * group.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(text: &str) -> Post {
        Post { text: text.to_string(), ..Post::default() }
    }

    #[test]
    fn gate_sentinels_without_identity() {
        let scorer = Scorer::default();
        let scored = scorer.score(&post("Our team uses technical debt reduction techniques"));
        assert_eq!(scored.score, 0);
        assert_eq!(scored.breakdown, GATE_BREAKDOWN);
        assert_eq!(scored.evidence, GATE_EVIDENCE);
        assert!(scored.signals.is_empty());
    }

    #[test]
    fn empty_text_scores_zero_via_gate() {
        let scored = Scorer::default().score(&post(""));
        assert_eq!(scored.score, 0);
        assert_eq!(scored.evidence, GATE_EVIDENCE);
    }

    #[test]
    fn strong_identity_alone_keeps_identity_quote() {
        let scored = Scorer::default().score(&post("I'm the CEO of a small shop"));
        assert_eq!(scored.score, 40);
        assert_eq!(scored.breakdown, "Strong Identity (+40)");
        assert!(scored.evidence.starts_with("Identity: \""));
        assert!(!scored.evidence.contains(" | "));
        assert_eq!(scored.signals, SignalSet::STRONG_IDENTITY);
    }

    #[test]
    fn weak_identity_via_author_field_gates_correctly() {
        let scorer = Scorer::default();
        let candidate = Post {
            author: "Jane, Founder".to_string(),
            text: "I am struggling".to_string(),
            ..Post::default()
        };
        let scored = scorer.score(&candidate);
        assert_eq!(scored.score, 25);
        assert_eq!(scored.breakdown, "Weak Identity (+25)");
        assert_eq!(scored.evidence, "Identity: \"Jane, Founder\"");
    }

    #[test]
    fn strong_tier_suppresses_weak_tier() {
        let scored = Scorer::default().score(&post("I'm the founder, and as a CEO I see it all"));
        assert_eq!(scored.breakdown, "Strong Identity (+40)");
        assert!(!scored.signals.contains(SignalSet::WEAK_IDENTITY));
    }

    #[test]
    fn groups_never_double_count() {
        // Three visceral rules match; the group still awards +30 once.
        let scored =
            Scorer::default().score(&post("I'm the CEO. I'm frustrated, worried, and stressed."));
        assert_eq!(scored.score, 70);
        assert_eq!(scored.breakdown, "Strong Identity (+40), Visceral Pain (+30)");
    }

    #[test]
    fn scoring_is_deterministic() {
        let scorer = Scorer::default();
        let candidate = post("I'm the CEO and I'm frustrated, we can't ship");
        assert_eq!(scorer.score(&candidate), scorer.score(&candidate));
    }

    #[test]
    fn additive_profile_has_no_gate() {
        let scorer = Scorer::new(Profile::Additive);
        let scored = scorer.score(&post("technical debt and legacy code, constant outages"));
        assert_eq!(scored.score, 30);
        assert_eq!(scored.breakdown, "Pain Keywords (+30)");
    }

    #[test]
    fn additive_zero_uses_no_signal_sentinels() {
        let scored = Scorer::new(Profile::Additive).score(&post("nothing interesting here"));
        assert_eq!(scored.score, 0);
        assert_eq!(scored.breakdown, NO_SIGNALS_BREAKDOWN);
        assert_eq!(scored.evidence, NO_SIGNALS_EVIDENCE);
    }

    #[test]
    fn additive_keyword_cap_holds() {
        // Four distinct keyword rules match; cap is 3 -> +30, not +40.
        let scored = Scorer::new(Profile::Additive)
            .score(&post("tech debt, legacy system, outages, and turnover"));
        assert_eq!(scored.score, 30);
    }

    #[test]
    fn additive_score_is_capped_at_100() {
        let text = "I'm a founder, need a CTO asap, we cannot ship, missed every deadline, \
                    tech debt, legacy code, outages everywhere";
        let scored = Scorer::new(Profile::Additive).score(&post(text));
        assert_eq!(scored.score, 100);
    }
}
