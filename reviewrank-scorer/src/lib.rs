//! Scoring engine for ranking user-submitted product reviews.
//!
//! The crate provides two complementary capabilities:
//! - **Per-review confidence scoring** derives three scores from a
//!   review's helpful-vote tally — the raw up/down difference, the
//!   approval ratio, and the lower bound of a Wilson confidence interval
//!   — and selects the top-K reviews by the Wilson bound.
//! - **Time-decayed rating aggregation** partitions a product's reviews
//!   into age buckets and weights recent ratings more heavily than old
//!   ones, so the aggregate tracks current product quality.
//!
//! # Examples
//!
//! ```
//! use std::time::SystemTime;
//! use reviewrank_core::Review;
//! use reviewrank_scorer::{ConfidenceLevel, compute_vote_scores, top_k_reviews};
//!
//! let reviews = vec![
//!     Review::new("u1", "p1", 5.0, SystemTime::UNIX_EPOCH, 2, 2)?,
//!     Review::new("u2", "p1", 4.0, SystemTime::UNIX_EPOCH, 200, 210)?,
//! ];
//!
//! let scored = compute_vote_scores(&reviews, ConfidenceLevel::default());
//! let top = top_k_reviews(&scored, 1);
//! // The well-sampled review outranks the short unanimous one.
//! assert_eq!(top[0].review.reviewer_id, "u2");
//! # Ok::<(), reviewrank_core::ReviewError>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use reviewrank_core::{Review, ScoredReview, VoteScores};

mod confidence;
mod decay;
mod rank;

pub use confidence::{
    ConfidenceLevel, ConfidenceLevelError, WilsonScorer, score_approval_ratio, score_up_down_diff,
    wilson_lower_bound,
};
pub use decay::{
    AgeBucket, BucketMean, BucketSchedule, BucketSummary, ScheduleError, mean_rating,
    rating_breakdown, time_weighted_rating,
};
pub use rank::{DEFAULT_DISPLAY_COUNT, RankingKey, top_k_reviews, top_k_reviews_by};

/// Compute the three vote-confidence scores for every review.
///
/// Scoring is pure and per-review: the same input always yields the same
/// output, and the result order matches the input order.
#[must_use]
pub fn compute_vote_scores(reviews: &[Review], level: ConfidenceLevel) -> Vec<ScoredReview> {
    reviews
        .iter()
        .map(|review| score_review(review, level))
        .collect()
}

fn score_review(review: &Review, level: ConfidenceLevel) -> ScoredReview {
    let votes = review.votes();
    ScoredReview {
        review: review.clone(),
        scores: VoteScores {
            up_down_diff: score_up_down_diff(votes),
            approval_ratio: score_approval_ratio(votes),
            wilson_lower_bound: wilson_lower_bound(votes, level),
        },
    }
}

#[cfg(test)]
mod tests;
