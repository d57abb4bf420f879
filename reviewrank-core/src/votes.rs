//! Helpful-vote tallies derived from raw dataset counts.
//!
//! Review datasets record how many readers marked a review helpful and
//! how many votes were cast in total; the unhelpful count is derived.
//! [`VoteTally`] performs that derivation once, at construction, so the
//! scoring code never sees an inconsistent pair.

use thiserror::Error;

/// Errors returned by [`VoteTally::from_counts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VoteTallyError {
    /// More helpful votes were recorded than votes in total.
    #[error("helpful votes ({helpful_yes}) exceed total votes ({total_vote})")]
    HelpfulExceedsTotal {
        /// Helpful votes reported by the dataset.
        helpful_yes: u32,
        /// Total votes reported by the dataset.
        total_vote: u32,
    },
}

/// Helpful and unhelpful vote counts for a single review.
///
/// # Examples
///
/// ```
/// use reviewrank_core::VoteTally;
///
/// let votes = VoteTally::from_counts(8, 10)?;
/// assert_eq!(votes.helpful_yes(), 8);
/// assert_eq!(votes.helpful_no(), 2);
/// # Ok::<(), reviewrank_core::VoteTallyError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoteTally {
    helpful_yes: u32,
    helpful_no: u32,
}

impl VoteTally {
    /// Build a tally from explicit helpful and unhelpful counts.
    #[must_use]
    pub const fn new(helpful_yes: u32, helpful_no: u32) -> Self {
        Self {
            helpful_yes,
            helpful_no,
        }
    }

    /// Derive a tally from the dataset's helpful and total vote columns.
    ///
    /// # Errors
    /// Returns [`VoteTallyError::HelpfulExceedsTotal`] when `helpful_yes`
    /// is greater than `total_vote`, rather than producing a wrapped
    /// unhelpful count.
    pub const fn from_counts(helpful_yes: u32, total_vote: u32) -> Result<Self, VoteTallyError> {
        match total_vote.checked_sub(helpful_yes) {
            Some(helpful_no) => Ok(Self {
                helpful_yes,
                helpful_no,
            }),
            None => Err(VoteTallyError::HelpfulExceedsTotal {
                helpful_yes,
                total_vote,
            }),
        }
    }

    /// Number of readers who marked the review helpful.
    #[must_use]
    pub const fn helpful_yes(self) -> u32 {
        self.helpful_yes
    }

    /// Number of readers who marked the review unhelpful.
    #[must_use]
    pub const fn helpful_no(self) -> u32 {
        self.helpful_no
    }

    /// Total votes cast on the review.
    #[must_use]
    pub const fn total(self) -> u64 {
        self.helpful_yes as u64 + self.helpful_no as u64
    }
}
