//! Confidence scores over helpful/unhelpful vote tallies.
//!
//! Three estimators with different trade-offs: the raw up/down difference
//! favours volume, the approval ratio ignores sample size, and the Wilson
//! lower bound penalises small samples while converging on the ratio as
//! votes accumulate. Ranking uses the Wilson bound; see
//! [How Not To Sort By Average Rating](https://www.evanmiller.org/how-not-to-sort-by-average-rating.html).

use std::f64::consts::SQRT_2;

use statrs::function::erf;
use thiserror::Error;

use reviewrank_core::{ConfidenceScorer, VoteTally};

/// Errors returned by [`ConfidenceLevel::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfidenceLevelError {
    /// The level must lie strictly between zero and one.
    #[error("confidence level {level} is outside the open interval (0, 1)")]
    OutOfRange {
        /// Rejected level.
        level: f64,
    },
}

/// Two-sided confidence level for the Wilson interval.
///
/// Higher levels yield a more conservative lower bound and therefore a
/// stronger penalty for small samples. The default is 95%.
///
/// # Examples
///
/// ```
/// use reviewrank_scorer::ConfidenceLevel;
///
/// let level = ConfidenceLevel::new(0.95)?;
/// assert!((level.z_value() - 1.959_964).abs() < 1e-6);
/// # Ok::<(), reviewrank_scorer::ConfidenceLevelError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// Validate and wrap a confidence level.
    ///
    /// # Errors
    /// Returns [`ConfidenceLevelError::OutOfRange`] when the level is not
    /// a finite value strictly between zero and one.
    pub fn new(level: f64) -> Result<Self, ConfidenceLevelError> {
        if level.is_finite() && level > 0.0 && level < 1.0 {
            Ok(Self(level))
        } else {
            Err(ConfidenceLevelError::OutOfRange { level })
        }
    }

    /// Return the raw level.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Two-sided critical value of the standard normal distribution.
    ///
    /// Equals the quantile at `1 - (1 - level) / 2`; for the default 95%
    /// level this is approximately `1.959964`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the critical value is sqrt(2) times the inverse error function"
    )]
    pub fn z_value(self) -> f64 {
        SQRT_2 * erf::erf_inv(self.0)
    }
}

impl Default for ConfidenceLevel {
    /// The conventional 95% level.
    fn default() -> Self {
        Self(0.95)
    }
}

/// Helpful minus unhelpful votes.
///
/// Unbounded and signed; a review with thousands of mixed votes outranks
/// a short unanimous one, which is why this score is kept for inspection
/// rather than ranking.
#[must_use]
pub fn score_up_down_diff(votes: VoteTally) -> i64 {
    i64::from(votes.helpful_yes()) - i64::from(votes.helpful_no())
}

/// Helpful share of all votes cast, `0.0` for an unvoted review.
///
/// Ignores sample size: one helpful vote out of one ties a thousand out
/// of a thousand.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the ratio divides counts far below 2^53"
)]
pub fn score_approval_ratio(votes: VoteTally) -> f64 {
    let total = votes.total();
    if total == 0 {
        return 0.0;
    }
    f64::from(votes.helpful_yes()) / total as f64
}

/// Lower bound of the Wilson score interval for the helpful proportion.
///
/// Returns `0.0` for an unvoted review. The bound rises with both the
/// approval ratio and the sample size, approaching the raw ratio as the
/// sample grows; two helpful votes out of two score below two hundred out
/// of two hundred and ten.
///
/// # Examples
///
/// ```
/// use reviewrank_core::VoteTally;
/// use reviewrank_scorer::{ConfidenceLevel, wilson_lower_bound};
///
/// let level = ConfidenceLevel::default();
/// let small = wilson_lower_bound(VoteTally::new(2, 0), level);
/// let large = wilson_lower_bound(VoteTally::new(200, 10), level);
/// assert!(small < large);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the interval is a closed-form expression over counts far below 2^53"
)]
pub fn wilson_lower_bound(votes: VoteTally, level: ConfidenceLevel) -> f64 {
    let total = votes.total();
    if total == 0 {
        return 0.0;
    }

    let n = total as f64;
    let z = level.z_value();
    let z2 = z * z;
    let p_hat = f64::from(votes.helpful_yes()) / n;

    let centre = p_hat + z2 / (2.0 * n);
    let margin = z * ((p_hat * (1.0 - p_hat) + z2 / (4.0 * n)) / n).sqrt();
    ((centre - margin) / (1.0 + z2 / n)).clamp(0.0, 1.0)
}

/// [`ConfidenceScorer`] backed by the Wilson lower bound.
///
/// # Examples
///
/// ```
/// use reviewrank_core::{ConfidenceScorer, VoteTally};
/// use reviewrank_scorer::WilsonScorer;
///
/// let scorer = WilsonScorer::default();
/// assert_eq!(scorer.score(VoteTally::new(0, 0)), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WilsonScorer {
    /// Confidence level of the interval.
    pub level: ConfidenceLevel,
}

impl WilsonScorer {
    /// Build a scorer for the given confidence level.
    #[must_use]
    pub const fn new(level: ConfidenceLevel) -> Self {
        Self { level }
    }
}

impl ConfidenceScorer for WilsonScorer {
    fn score(&self, votes: VoteTally) -> f64 {
        Self::sanitise(wilson_lower_bound(votes, self.level))
    }
}
