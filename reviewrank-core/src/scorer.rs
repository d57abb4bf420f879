//! Score review trustworthiness from vote tallies.
//!
//! The `ConfidenceScorer` trait assigns a trust score to a review's
//! [`VoteTally`]. Concrete estimators live in the scorer crate; the trait
//! is the seam that lets callers swap one in.

use crate::votes::VoteTally;

/// Calculate a trust score for a review's helpful-vote tally.
///
/// Higher scores indicate stronger evidence that the review is helpful.
/// Implementations must be thread-safe (`Send` + `Sync`) so scoring can
/// run across threads. The method is infallible; implementers must return
/// `0.0` when no votes are available.
///
/// Implementations must:
/// - Produce finite (`f64::is_finite`) scores.
/// - Return non-negative values.
/// - Normalise results to the range `0.0..=1.0`.
///
/// Use [`ConfidenceScorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use reviewrank_core::{ConfidenceScorer, VoteTally};
///
/// struct UnitScorer;
///
/// impl ConfidenceScorer for UnitScorer {
///     fn score(&self, _votes: VoteTally) -> f64 {
///         1.0
///     }
/// }
///
/// let votes = VoteTally::new(3, 1);
/// assert_eq!(UnitScorer.score(votes), 1.0);
/// ```
pub trait ConfidenceScorer: Send + Sync {
    /// Return a trust score for `votes`.
    fn score(&self, votes: VoteTally) -> f64;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, 1.0)
    }
}
