//! Vote-derived trust scores paired with their source review.

use crate::review::Review;

/// The three vote-derived scores for one review.
///
/// Each score trades off differently: the raw difference favours
/// heavily-voted reviews regardless of ratio, the approval ratio ignores
/// sample size entirely, and the Wilson lower bound penalises small
/// samples. Ranking uses the Wilson bound.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoteScores {
    /// Helpful minus unhelpful votes; unbounded and signed.
    pub up_down_diff: i64,
    /// Helpful share of all votes cast, `0.0` for an unvoted review.
    pub approval_ratio: f64,
    /// Lower bound of the Wilson confidence interval for the helpful
    /// proportion.
    pub wilson_lower_bound: f64,
}

/// A review together with its computed scores.
///
/// Derived data: recompute whenever the source votes change rather than
/// patching the scores in place.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredReview {
    /// The source review.
    pub review: Review,
    /// Scores derived from the review's vote tally.
    pub scores: VoteScores,
}
