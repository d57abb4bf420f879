//! Core domain types for the ReviewRank engine.
//!
//! These models provide basic validation to keep downstream components
//! honest: a [`Review`] cannot carry an off-scale rating or a vote tally
//! where helpful votes exceed the total. Constructors return `Result` to
//! surface invalid input early, before any scoring runs.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod review;
pub mod scored;
pub mod scorer;
pub mod votes;

pub use review::{RATING_MAX, RATING_MIN, Review, ReviewError};
pub use scored::{ScoredReview, VoteScores};
pub use scorer::ConfidenceScorer;
pub use votes::{VoteTally, VoteTallyError};
