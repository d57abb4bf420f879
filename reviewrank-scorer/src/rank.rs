//! Stable top-K selection over scored reviews.

use reviewrank_core::ScoredReview;

/// Number of reviews shown on a product page by default.
pub const DEFAULT_DISPLAY_COUNT: usize = 20;

/// Which score orders a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RankingKey {
    /// Raw helpful-minus-unhelpful difference.
    UpDownDiff,
    /// Helpful share of votes.
    ApprovalRatio,
    /// Wilson lower bound; the production ordering.
    #[default]
    WilsonLowerBound,
}

/// Top `k` reviews by Wilson lower bound, descending.
///
/// Ties keep their input order, fewer than `k` reviews returns them all,
/// and `k = 0` returns an empty list.
///
/// # Examples
///
/// ```
/// use reviewrank_scorer::top_k_reviews;
///
/// assert!(top_k_reviews(&[], 5).is_empty());
/// ```
#[must_use]
pub fn top_k_reviews(scored: &[ScoredReview], k: usize) -> Vec<ScoredReview> {
    top_k_reviews_by(scored, k, RankingKey::WilsonLowerBound)
}

/// Top `k` reviews ordered by the chosen score, descending.
///
/// The sort is stable, so reviews with equal scores retain their input
/// order.
#[must_use]
pub fn top_k_reviews_by(scored: &[ScoredReview], k: usize, key: RankingKey) -> Vec<ScoredReview> {
    let mut ranked = scored.to_vec();
    ranked.sort_by(|a, b| match key {
        RankingKey::UpDownDiff => b.scores.up_down_diff.cmp(&a.scores.up_down_diff),
        RankingKey::ApprovalRatio => b.scores.approval_ratio.total_cmp(&a.scores.approval_ratio),
        RankingKey::WilsonLowerBound => b
            .scores
            .wilson_lower_bound
            .total_cmp(&a.scores.wilson_lower_bound),
    });
    ranked.truncate(k);
    ranked
}
