//! Product review records as supplied by an external dataset reader.
//!
//! A [`Review`] is a read-only input for the duration of a scoring run.
//! Validation happens once, at construction; every accessor afterwards is
//! infallible.

use std::time::SystemTime;

use thiserror::Error;

use crate::votes::{VoteTally, VoteTallyError};

/// Inclusive lower bound of the rating scale.
pub const RATING_MIN: f64 = 1.0;
/// Inclusive upper bound of the rating scale.
pub const RATING_MAX: f64 = 5.0;

/// Errors returned by [`Review::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReviewError {
    /// The star rating fell outside the supported scale.
    #[error("rating {rating} is outside the {RATING_MIN}..={RATING_MAX} scale")]
    RatingOutOfScale {
        /// Rating supplied by the dataset.
        rating: f64,
    },
    /// The vote counts were mutually inconsistent.
    #[error(transparent)]
    Votes(#[from] VoteTallyError),
}

/// A single user-submitted product review.
///
/// # Examples
///
/// ```
/// use std::time::SystemTime;
/// use reviewrank_core::Review;
///
/// let review = Review::new("A2BC", "B007", 4.0, SystemTime::UNIX_EPOCH, 8, 10)?;
/// assert_eq!(review.rating(), 4.0);
/// assert_eq!(review.votes().helpful_no(), 2);
/// # Ok::<(), reviewrank_core::ReviewError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Review {
    /// Identifier of the reviewing user.
    pub reviewer_id: String,
    /// Identifier of the reviewed product.
    pub product_id: String,
    rating: f64,
    reviewed_at: SystemTime,
    votes: VoteTally,
}

impl Review {
    /// Validate and construct a review from raw dataset columns.
    ///
    /// # Errors
    /// Returns [`ReviewError::RatingOutOfScale`] when the rating is not a
    /// finite value within the scale, and [`ReviewError::Votes`] when the
    /// helpful count exceeds the total vote count.
    pub fn new(
        reviewer_id: impl Into<String>,
        product_id: impl Into<String>,
        rating: f64,
        reviewed_at: SystemTime,
        helpful_yes: u32,
        total_vote: u32,
    ) -> Result<Self, ReviewError> {
        if !(RATING_MIN..=RATING_MAX).contains(&rating) {
            return Err(ReviewError::RatingOutOfScale { rating });
        }
        let votes = VoteTally::from_counts(helpful_yes, total_vote)?;
        Ok(Self {
            reviewer_id: reviewer_id.into(),
            product_id: product_id.into(),
            rating,
            reviewed_at,
            votes,
        })
    }

    /// The star rating, within [`RATING_MIN`]`..=`[`RATING_MAX`].
    #[must_use]
    pub const fn rating(&self) -> f64 {
        self.rating
    }

    /// Instant at which the review was submitted.
    #[must_use]
    pub const fn reviewed_at(&self) -> SystemTime {
        self.reviewed_at
    }

    /// Helpful-vote tally for the review.
    #[must_use]
    pub const fn votes(&self) -> VoteTally {
        self.votes
    }
}
