use crate::record::{Post, SignalSet};
use crate::scorer::Scorer;
use crate::signals::Profile;

fn post(text: &str) -> Post {
    Post { text: text.to_string(), ..Post::default() }
}

#[test]
fn gated_examples_scoring() {
    // Array of (expected_score, input_text)
    let cases: Vec<(u32, &str)> = vec![
        (100, "I'm the CEO and I'm frustrated, we can't ship and have technical debt everywhere"),
        (0, "Our team uses technical debt reduction techniques"),
        (0, ""),
        (0, "Great engineering culture post with no author identity"),
        (40, "I'm the CEO of a fintech company"),
        (40, "I founded a marketplace for dog walkers"),
        (40, "My startup just crossed 20 people"),
        (40, "Our startup is growing and I handle product"),
        (70, "I am the founder and I'm worried about everything"),
        (60, "As the CEO, everyone's leaving and we are behind schedule"),
        (90, "As the CEO I'm losing sleep, we missed every deadline"),
        (50, "I'm the co-founder. Production is on fire, constant outages."),
        (25, "Founder here, I think we move too slowly"),
        (100, "I started my company 3 years ago. I'm desperate: velocity is terrible and we can't hire engineers."),
    ];

    let scorer = Scorer::default();

    for (expected, text) in cases {
        let scored = scorer.score(&post(text));
        assert_eq!(scored.score, expected, "text: {text:?}, breakdown: {}", scored.breakdown);
    }
}

#[test]
fn gated_full_house_breakdown_order() {
    let scored = Scorer::default()
        .score(&post("I'm the CEO and I'm frustrated, we can't ship and have technical debt everywhere"));
    assert_eq!(
        scored.breakdown,
        "Strong Identity (+40), Visceral Pain (+30), Culture/Velocity (+20), Engineering Pain (+10)"
    );
    assert_eq!(scored.evidence.matches(" | ").count(), 3);
    assert_eq!(
        scored.signals,
        SignalSet::STRONG_IDENTITY
            | SignalSet::VISCERAL_PAIN
            | SignalSet::CULTURE_VELOCITY
            | SignalSet::ENGINEERING_PAIN
    );
}

#[test]
fn score_is_monotonic_in_matched_categories() {
    // Identity held fixed, each added category may only raise the score.
    let steps = [
        "I'm the CEO.",
        "I'm the CEO. I'm frustrated.",
        "I'm the CEO. I'm frustrated. We can't ship.",
        "I'm the CEO. I'm frustrated. We can't ship. Technical debt everywhere.",
    ];
    let scorer = Scorer::default();
    let mut last = 0;
    for text in steps {
        let score = scorer.score(&post(text)).score;
        assert!(score >= last, "score dropped at: {text:?}");
        last = score;
    }
}

#[test]
fn additive_examples_scoring() {
    let cases: Vec<(u32, &str)> = vec![
        (0, ""),
        (0, "Weather was nice this weekend"),
        (30, "Our founder gave a talk"),
        (55, "I'm a founder and we urgently need help"),
        (75, "I'm a founder and need a CTO asap"),
        (50, "Startup CEO here, our CTO just left"),
        (25, "Urgent: 3 months of runway left, burning $40k"),
        (15, "Our velocity dropped again"),
        (30, "tech debt, legacy system, outages, turnover"),
    ];

    let scorer = Scorer::new(Profile::Additive);

    for (expected, text) in cases {
        let scored = scorer.score(&post(text));
        assert_eq!(scored.score, expected, "text: {text:?}, breakdown: {}", scored.breakdown);
    }
}

#[test]
fn additive_numeric_rules_are_first_class() {
    let scorer = Scorer::new(Profile::Additive);
    assert_eq!(scorer.score(&post("only 2 months runway left")).score, 25);
    assert_eq!(scorer.score(&post("we burn $35k monthly")).score, 25);
    assert_eq!(scorer.score(&post("no release in 6 months")).score, 15);
}

#[test]
fn weak_identity_scenario_from_author_only() {
    let scorer = Scorer::default();
    let candidate = Post {
        author: "Jane, Founder".to_string(),
        text: "I am struggling".to_string(),
        ..Post::default()
    };
    let scored = scorer.score(&candidate);
    assert_eq!(scored.score, 25);
    assert!(scored.evidence.contains("Jane, Founder"));
    assert_eq!(scored.signals, SignalSet::WEAK_IDENTITY);
}

#[test]
fn title_and_body_are_combined_for_matching() {
    let scorer = Scorer::default();
    let candidate = Post {
        title: "I'm the CEO and need advice".to_string(),
        text: "frustrated beyond belief".to_string(),
        ..Post::default()
    };
    assert_eq!(scorer.score(&candidate).score, 70);
}

#[test]
fn profile_parses_from_str() {
    assert_eq!("gated".parse::<Profile>(), Ok(Profile::Gated));
    assert_eq!(" Additive ".parse::<Profile>(), Ok(Profile::Additive));
    assert!("bayesian".parse::<Profile>().is_err());
}
