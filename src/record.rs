//! Candidate and scored record types.
//!
//! Collectors of any kind (forum dumps, job boards, manual CSV exports)
//! produce [`Post`] values; the scorer turns each into a [`ScoredPost`].
//! Absent fields degrade to defaults instead of failing, because upstream
//! data is messy by nature.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// What kind of item a post is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PostKind {
    Story,
    Comment,
    #[default]
    Post,
    Tweet,
    Job,
}

impl PostKind {
    /// Parse a source label like `"comment"` or `"Job"`. Unknown labels
    /// return `None`; callers fall back to the default.
    pub fn from_label(label: &str) -> Option<PostKind> {
        match label.trim().to_ascii_lowercase().as_str() {
            "story" => Some(PostKind::Story),
            "comment" => Some(PostKind::Comment),
            "post" => Some(PostKind::Post),
            "tweet" => Some(PostKind::Tweet),
            "job" => Some(PostKind::Job),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PostKind::Story => "story",
            PostKind::Comment => "comment",
            PostKind::Post => "post",
            PostKind::Tweet => "tweet",
            PostKind::Job => "job",
        }
    }
}

/// One fetched item before scoring.
///
/// Immutable once scored; the scorer never mutates the post, it wraps it in a
/// [`ScoredPost`].
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub kind: PostKind,
    pub title: String,
    /// Body text.
    pub text: String,
    pub author: String,
    /// Optional author flair/subtitle, e.g. "Founder @ Acme".
    pub author_flair: String,
    /// Canonical URL.
    pub url: String,
    pub created_at: NaiveDateTime,
    /// Source label, e.g. "hackernews" or "reddit".
    pub source: String,
}

impl Default for Post {
    fn default() -> Self {
        Post {
            kind: PostKind::default(),
            title: String::new(),
            text: String::new(),
            author: String::new(),
            author_flair: String::new(),
            url: String::new(),
            created_at: default_timestamp(),
            source: String::new(),
        }
    }
}

/// Default creation timestamp for posts that arrive without one.
///
/// Fixed under `cfg(test)` so scored records compare byte-identically in
/// tests.
pub(crate) fn default_timestamp() -> NaiveDateTime {
    if cfg!(test) {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        NaiveDateTime::new(date, NaiveTime::MIN)
    } else {
        Local::now().naive_local()
    }
}

bitflags::bitflags! {
    /// Categories that triggered during scoring.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SignalSet: u16 {
        // Gated profile.
        const STRONG_IDENTITY  = 1 << 0;
        const WEAK_IDENTITY    = 1 << 1;
        const VISCERAL_PAIN    = 1 << 2;
        const CULTURE_VELOCITY = 1 << 3;
        const ENGINEERING_PAIN = 1 << 4;
        // Additive profile.
        const CEO_FOUNDER      = 1 << 5;
        const URGENCY          = 1 << 6;
        const TRANSITION       = 1 << 7;
        const VELOCITY         = 1 << 8;
        const PAIN_KEYWORDS    = 1 << 9;
    }
}

impl SignalSet {
    /// True if either identity tier triggered.
    pub fn has_identity(&self) -> bool {
        self.intersects(SignalSet::STRONG_IDENTITY | SignalSet::WEAK_IDENTITY | SignalSet::CEO_FOUNDER)
    }
}

/// A post plus the scoring verdict: points, a human-readable breakdown of
/// triggered categories, and one illustrative evidence quote per category.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPost {
    pub post: Post,
    /// 0..=100.
    pub score: u32,
    /// Categories joined by ", " in evaluation order,
    /// e.g. `Strong Identity (+40), Visceral Pain (+30)`.
    pub breakdown: String,
    /// Labeled quotes joined by " | " in evaluation order.
    pub evidence: String,
    pub signals: SignalSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_defaults_are_lenient() {
        let post = Post::default();
        assert_eq!(post.kind, PostKind::Post);
        assert!(post.title.is_empty());
        assert!(post.author_flair.is_empty());
        assert_eq!(post.created_at, default_timestamp());
    }

    #[test]
    fn kind_labels_round_trip() {
        for kind in [PostKind::Story, PostKind::Comment, PostKind::Post, PostKind::Tweet, PostKind::Job] {
            assert_eq!(PostKind::from_label(kind.as_str()), Some(kind));
        }
        assert_eq!(PostKind::from_label(" Comment "), Some(PostKind::Comment));
        assert_eq!(PostKind::from_label("podcast"), None);
    }

    #[test]
    fn signal_set_identity_check() {
        assert!(SignalSet::WEAK_IDENTITY.has_identity());
        assert!(!(SignalSet::VISCERAL_PAIN | SignalSet::VELOCITY).has_identity());
    }
}
