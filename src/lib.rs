//! Facade crate for the ReviewRank review-ranking engine.
//!
//! This crate re-exports the core domain types and the scoring engine so
//! callers can depend on a single crate.

#![forbid(unsafe_code)]

pub use reviewrank_core::{
    ConfidenceScorer, RATING_MAX, RATING_MIN, Review, ReviewError, ScoredReview, VoteScores,
    VoteTally, VoteTallyError,
};

pub use reviewrank_scorer::{
    AgeBucket, BucketMean, BucketSchedule, BucketSummary, ConfidenceLevel, ConfidenceLevelError,
    DEFAULT_DISPLAY_COUNT, RankingKey, ScheduleError, WilsonScorer, compute_vote_scores,
    mean_rating, rating_breakdown, score_approval_ratio, score_up_down_diff, time_weighted_rating,
    top_k_reviews, top_k_reviews_by, wilson_lower_bound,
};
