//! Time-decayed aggregate ratings over review age buckets.
//!
//! A product's average rating hides quality trends: a recent run of
//! one-star reviews disappears into years of praise. The aggregator
//! partitions reviews by age in whole days into half-open buckets, takes
//! the unweighted mean rating inside each bucket, and sums the means
//! weighted by the bucket's configured fraction. Empty buckets contribute
//! nothing to the sum.

use std::time::SystemTime;

use log::warn;
use thiserror::Error;

use reviewrank_core::Review;

const SECONDS_PER_DAY: u64 = 86_400;
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Errors returned by [`BucketSchedule::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ScheduleError {
    /// No buckets were supplied.
    #[error("a bucket schedule requires at least one bucket")]
    Empty,
    /// The first bucket must start at day zero.
    #[error("the first bucket starts at day {start}, not day 0")]
    StartsAfterZero {
        /// Start of the first bucket.
        start: u32,
    },
    /// A bucket does not begin where the previous one ended.
    #[error("bucket starting at day {found} does not continue from day {expected}")]
    NonContiguous {
        /// Day the previous bucket ended at.
        expected: u32,
        /// Day the offending bucket starts at.
        found: u32,
    },
    /// A bucket's upper boundary does not exceed its lower boundary.
    #[error("bucket [{start}, {end}) covers no days")]
    EmptyInterval {
        /// Inclusive start of the bucket.
        start: u32,
        /// Exclusive end of the bucket.
        end: u32,
    },
    /// An open-ended bucket appeared before the final position.
    #[error("only the final bucket may be open-ended")]
    OpenEndedBeforeLast,
    /// The final bucket must be open-ended so every age is covered.
    #[error("the final bucket ends at day {end}, leaving older reviews uncovered")]
    BoundedTail {
        /// Exclusive end of the final bucket.
        end: u32,
    },
    /// A weight was negative or not finite.
    #[error("bucket weight {weight} is not a finite non-negative fraction")]
    InvalidWeight {
        /// Rejected weight.
        weight: f64,
    },
    /// The weights must sum to one.
    #[error("bucket weights sum to {sum}, expected 1")]
    WeightSum {
        /// Sum of the supplied weights.
        sum: f64,
    },
}

/// A half-open interval of review ages in whole days, with a weight.
///
/// `[start, end)` contains a review whose age is at least `start` days
/// and strictly less than `end`; an age exactly on a boundary belongs to
/// the later bucket. `end = None` marks the open-ended tail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeBucket {
    /// Inclusive lower age boundary, in days.
    pub start: u32,
    /// Exclusive upper age boundary in days; `None` when open-ended.
    pub end: Option<u32>,
    /// Fraction of the aggregate contributed by this bucket.
    pub weight: f64,
}

impl AgeBucket {
    /// Bucket covering ages in `start..end` days.
    #[must_use]
    pub const fn bounded(start: u32, end: u32, weight: f64) -> Self {
        Self {
            start,
            end: Some(end),
            weight,
        }
    }

    /// Bucket covering every age from `start` days upward.
    #[must_use]
    pub const fn from_day(start: u32, weight: f64) -> Self {
        Self {
            start,
            end: None,
            weight,
        }
    }

    /// Report whether an age in whole days falls inside the bucket.
    #[must_use]
    pub fn contains(self, age_days: u64) -> bool {
        u64::from(self.start) <= age_days && self.end.is_none_or(|end| age_days < u64::from(end))
    }
}

/// Validated, contiguous bucket schedule covering every review age.
///
/// # Examples
///
/// ```
/// use reviewrank_scorer::{AgeBucket, BucketSchedule};
///
/// let schedule = BucketSchedule::new(vec![
///     AgeBucket::bounded(0, 90, 0.6),
///     AgeBucket::from_day(90, 0.4),
/// ])?;
/// assert_eq!(schedule.buckets().len(), 2);
/// # Ok::<(), reviewrank_scorer::ScheduleError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BucketSchedule {
    buckets: Vec<AgeBucket>,
}

impl BucketSchedule {
    /// Validate and construct a schedule.
    ///
    /// # Errors
    /// Returns a [`ScheduleError`] when the buckets are empty, do not
    /// start at day zero, leave gaps, overlap, end before infinity, or
    /// carry weights that are invalid or do not sum to one.
    #[expect(
        clippy::float_arithmetic,
        reason = "weight validation sums the configured fractions"
    )]
    pub fn new(buckets: Vec<AgeBucket>) -> Result<Self, ScheduleError> {
        let Some(last_index) = buckets.len().checked_sub(1) else {
            return Err(ScheduleError::Empty);
        };

        let mut expected_start = 0_u32;
        let mut weight_sum = 0.0_f64;
        for (index, bucket) in buckets.iter().enumerate() {
            if index == 0 && bucket.start != 0 {
                return Err(ScheduleError::StartsAfterZero {
                    start: bucket.start,
                });
            }
            if bucket.start != expected_start {
                return Err(ScheduleError::NonContiguous {
                    expected: expected_start,
                    found: bucket.start,
                });
            }
            match bucket.end {
                Some(end) if end <= bucket.start => {
                    return Err(ScheduleError::EmptyInterval {
                        start: bucket.start,
                        end,
                    });
                }
                Some(end) if index == last_index => {
                    return Err(ScheduleError::BoundedTail { end });
                }
                Some(end) => expected_start = end,
                None if index != last_index => {
                    return Err(ScheduleError::OpenEndedBeforeLast);
                }
                None => {}
            }
            if !bucket.weight.is_finite() || bucket.weight < 0.0 {
                return Err(ScheduleError::InvalidWeight {
                    weight: bucket.weight,
                });
            }
            weight_sum += bucket.weight;
        }

        if (weight_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ScheduleError::WeightSum { sum: weight_sum });
        }

        Ok(Self { buckets })
    }

    /// The buckets in ascending age order.
    #[must_use]
    pub fn buckets(&self) -> &[AgeBucket] {
        &self.buckets
    }

    /// Index of the bucket containing an age in whole days.
    ///
    /// The schedule covers `[0, ∞)`, so every age resolves; the fallback
    /// keeps the lookup total without an indexing panic.
    fn index_for(&self, age_days: u64) -> usize {
        self.buckets
            .iter()
            .position(|bucket| bucket.contains(age_days))
            .unwrap_or(0)
    }
}

impl Default for BucketSchedule {
    /// The production schedule: 28% for the newest month, 26% for days
    /// 30–90, 24% for days 90–180, and 22% for everything older.
    fn default() -> Self {
        Self {
            buckets: vec![
                AgeBucket::bounded(0, 30, 0.28),
                AgeBucket::bounded(30, 90, 0.26),
                AgeBucket::bounded(90, 180, 0.24),
                AgeBucket::from_day(180, 0.22),
            ],
        }
    }
}

/// Mean rating of one bucket, distinguishing the empty case.
///
/// An empty bucket has no defined mean; modelling it explicitly keeps
/// NaN out of the weighted sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BucketMean {
    /// No reviews fell into the bucket.
    Empty,
    /// Mean rating of the bucket's reviews.
    Value(f64),
}

impl BucketMean {
    /// Weighted contribution to the aggregate; empty buckets contribute
    /// zero.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the contribution multiplies the mean by its weight"
    )]
    pub fn contribution(self, weight: f64) -> f64 {
        match self {
            Self::Empty => 0.0,
            Self::Value(mean) => mean * weight,
        }
    }

    /// The mean as an `Option`, `None` when the bucket was empty.
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Empty => None,
            Self::Value(mean) => Some(mean),
        }
    }
}

/// Per-bucket aggregation detail for one product's reviews.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketSummary {
    /// The bucket the summary describes.
    pub bucket: AgeBucket,
    /// Number of reviews assigned to the bucket.
    pub count: usize,
    /// Mean rating of those reviews.
    pub mean: BucketMean,
}

/// Age of a review in whole elapsed days at `now`.
///
/// Reviews dated after `now` count as zero days old; clock skew in the
/// source data must not push a review out of the newest bucket.
#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "whole elapsed days discard the fractional day"
)]
fn age_in_days(now: SystemTime, reviewed_at: SystemTime) -> u64 {
    match now.duration_since(reviewed_at) {
        Ok(elapsed) => elapsed.as_secs() / SECONDS_PER_DAY,
        Err(_) => {
            warn!("review dated after the reference instant; treating as zero days old");
            0
        }
    }
}

/// Assign reviews to schedule buckets and report each bucket's mean.
///
/// The accumulation is a per-bucket `(sum, count)` reduction, so the
/// result is independent of input order.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "bucket means divide rating sums by counts far below 2^53"
)]
pub fn rating_breakdown(
    reviews: &[Review],
    now: SystemTime,
    schedule: &BucketSchedule,
) -> Vec<BucketSummary> {
    let mut slots = vec![(0.0_f64, 0_usize); schedule.buckets().len()];
    for review in reviews {
        let age = age_in_days(now, review.reviewed_at());
        if let Some(slot) = slots.get_mut(schedule.index_for(age)) {
            slot.0 += review.rating();
            slot.1 += 1;
        }
    }

    schedule
        .buckets()
        .iter()
        .zip(slots)
        .map(|(&bucket, (sum, count))| BucketSummary {
            bucket,
            count,
            mean: if count == 0 {
                BucketMean::Empty
            } else {
                BucketMean::Value(sum / count as f64)
            },
        })
        .collect()
}

/// Time-decayed aggregate rating for one product's reviews.
///
/// Directly comparable to [`mean_rating`]; the two diverge when rating
/// quality is trending up or down.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, SystemTime};
/// use reviewrank_core::Review;
/// use reviewrank_scorer::{BucketSchedule, time_weighted_rating};
///
/// let now = SystemTime::UNIX_EPOCH + Duration::from_secs(86_400 * 400);
/// let reviewed_at = now - Duration::from_secs(86_400 * 5);
/// let review = Review::new("u1", "p1", 4.5, reviewed_at, 0, 0)?;
///
/// let rating = time_weighted_rating(&[review], now, &BucketSchedule::default());
/// assert!((rating - 4.5 * 0.28).abs() < 1e-9);
/// # Ok::<(), reviewrank_core::ReviewError>(())
/// ```
#[must_use]
pub fn time_weighted_rating(
    reviews: &[Review],
    now: SystemTime,
    schedule: &BucketSchedule,
) -> f64 {
    rating_breakdown(reviews, now, schedule)
        .iter()
        .map(|summary| summary.mean.contribution(summary.bucket.weight))
        .sum()
}

/// Unweighted mean rating across all reviews, `None` when there are none.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the mean divides a rating sum by a count far below 2^53"
)]
pub fn mean_rating(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let sum: f64 = reviews.iter().map(Review::rating).sum();
    Some(sum / reviews.len() as f64)
}
