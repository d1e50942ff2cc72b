//! Public scoring API.
//!
//! Most callers want [`score`] or [`score_all`] with the default gated
//! profile; construct a [`Scorer`] explicitly to pick a profile or to reuse
//! the compiled library across batches.

use once_cell::sync::Lazy;

use crate::ranking;
use crate::record::{Post, ScoredPost};
use crate::scorer::Scorer;

static DEFAULT_SCORER: Lazy<Scorer> = Lazy::new(Scorer::default);

/// Score one post with the default (gated) profile.
///
/// # Example
/// ```
/// use painrank::{Post, score};
///
/// let post = Post { text: "I'm the CEO and we can't ship".into(), ..Post::default() };
/// let scored = score(&post);
/// assert_eq!(scored.score, 60);
/// ```
pub fn score(post: &Post) -> ScoredPost {
    DEFAULT_SCORER.score(post)
}

/// Score a batch with the default profile and return it ranked descending.
pub fn score_all(posts: &[Post]) -> Vec<ScoredPost> {
    let mut scored: Vec<ScoredPost> = posts.iter().map(|p| DEFAULT_SCORER.score(p)).collect();
    ranking::rank(&mut scored);
    scored
}
