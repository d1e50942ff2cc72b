//! Ranking and filtering of scored posts.

use crate::record::ScoredPost;

/// Sort descending by score. The sort is stable: ties keep their original
/// relative order.
pub fn rank(posts: &mut [ScoredPost]) {
    posts.sort_by(|a, b| b.score.cmp(&a.score));
}

/// Keep posts with `score >= threshold` (inclusive).
pub fn filter_min(posts: Vec<ScoredPost>, threshold: u32) -> Vec<ScoredPost> {
    posts.into_iter().filter(|p| p.score >= threshold).collect()
}
