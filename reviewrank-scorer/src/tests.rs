//! Unit coverage for confidence scoring and bucket configuration.

use rstest::rstest;

use reviewrank_core::VoteTally;

use crate::{
    AgeBucket, BucketMean, BucketSchedule, ConfidenceLevel, ConfidenceLevelError, ScheduleError,
    score_approval_ratio, score_up_down_diff, wilson_lower_bound,
};

const EPS: f64 = 1e-6;

#[expect(
    clippy::float_arithmetic,
    reason = "test helper compares floating-point scores"
)]
fn assert_approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}

#[rstest]
#[case(0.90, 1.644_853_626_951_471_5)]
#[case(0.95, 1.959_963_984_540_054)]
#[case(0.99, 2.575_829_303_548_9)]
#[expect(
    clippy::expect_used,
    reason = "test fixtures should fail fast on invalid levels"
)]
fn critical_values_match_normal_quantiles(#[case] raw: f64, #[case] z: f64) {
    let level = ConfidenceLevel::new(raw).expect("valid level");
    assert_approx(level.z_value(), z);
}

#[rstest]
#[case(0.0)]
#[case(1.0)]
#[case(-0.5)]
#[case(2.0)]
#[case(f64::NAN)]
fn rejects_out_of_range_levels(#[case] level: f64) {
    assert!(matches!(
        ConfidenceLevel::new(level),
        Err(ConfidenceLevelError::OutOfRange { .. })
    ));
}

#[rstest]
fn wilson_returns_zero_for_empty_sample() {
    let level = ConfidenceLevel::default();
    assert_eq!(wilson_lower_bound(VoteTally::new(0, 0), level), 0.0);
}

#[rstest]
#[case(10, 0, 0.722_467_200_137_110_9)]
#[case(1000, 0, 0.996_173_241_514_444_9)]
#[case(1, 1, 0.094_531_205_734_230_74)]
#[case(80, 20, 0.711_170_834_406_841_1)]
#[case(600, 400, 0.569_309_429_514_266_3)]
fn wilson_known_values_match_reference_outputs(
    #[case] helpful_yes: u32,
    #[case] helpful_no: u32,
    #[case] expected: f64,
) {
    let level = ConfidenceLevel::default();
    let votes = VoteTally::new(helpful_yes, helpful_no);
    assert_approx(wilson_lower_bound(votes, level), expected);
}

#[rstest]
fn wilson_stays_non_negative_with_no_helpful_votes() {
    let level = ConfidenceLevel::default();
    let bound = wilson_lower_bound(VoteTally::new(0, 10), level);
    assert!((0.0..EPS).contains(&bound));
}

#[rstest]
#[expect(
    clippy::expect_used,
    reason = "test fixtures should fail fast on invalid levels"
)]
fn higher_confidence_lowers_the_bound() {
    let votes = VoteTally::new(10, 0);
    let relaxed = ConfidenceLevel::new(0.90).expect("valid level");
    let default = ConfidenceLevel::default();
    let strict = ConfidenceLevel::new(0.99).expect("valid level");
    let relaxed_bound = wilson_lower_bound(votes, relaxed);
    let default_bound = wilson_lower_bound(votes, default);
    let strict_bound = wilson_lower_bound(votes, strict);
    assert!(strict_bound < default_bound);
    assert!(default_bound < relaxed_bound);
}

#[rstest]
#[case(0, 0, 0)]
#[case(8, 2, 6)]
#[case(2, 8, -6)]
fn up_down_diff_is_signed(#[case] helpful_yes: u32, #[case] helpful_no: u32, #[case] expected: i64) {
    assert_eq!(
        score_up_down_diff(VoteTally::new(helpful_yes, helpful_no)),
        expected
    );
}

#[rstest]
#[case(0, 0, 0.0)]
#[case(1, 1, 0.5)]
#[case(8, 2, 0.8)]
#[case(10, 0, 1.0)]
fn approval_ratio_handles_all_tallies(
    #[case] helpful_yes: u32,
    #[case] helpful_no: u32,
    #[case] expected: f64,
) {
    assert_approx(
        score_approval_ratio(VoteTally::new(helpful_yes, helpful_no)),
        expected,
    );
}

#[rstest]
#[expect(
    clippy::expect_used,
    reason = "the default schedule must satisfy its own validation"
)]
fn default_schedule_is_valid() {
    let default = BucketSchedule::default();
    let rebuilt = BucketSchedule::new(default.buckets().to_vec()).expect("default is valid");
    assert_eq!(default, rebuilt);
}

#[rstest]
#[case(vec![], ScheduleError::Empty)]
#[case(
    vec![AgeBucket::from_day(10, 1.0)],
    ScheduleError::StartsAfterZero { start: 10 }
)]
#[case(
    vec![AgeBucket::bounded(0, 30, 0.5), AgeBucket::from_day(40, 0.5)],
    ScheduleError::NonContiguous { expected: 30, found: 40 }
)]
#[case(
    vec![AgeBucket::bounded(0, 0, 0.5), AgeBucket::from_day(0, 0.5)],
    ScheduleError::EmptyInterval { start: 0, end: 0 }
)]
#[case(
    vec![AgeBucket::from_day(0, 0.5), AgeBucket::from_day(0, 0.5)],
    ScheduleError::OpenEndedBeforeLast
)]
#[case(
    vec![AgeBucket::bounded(0, 180, 1.0)],
    ScheduleError::BoundedTail { end: 180 }
)]
#[case(
    vec![AgeBucket::bounded(0, 30, -0.2), AgeBucket::from_day(30, 1.2)],
    ScheduleError::InvalidWeight { weight: -0.2 }
)]
fn schedule_validation_rejects_malformed_buckets(
    #[case] buckets: Vec<AgeBucket>,
    #[case] expected: ScheduleError,
) {
    assert_eq!(BucketSchedule::new(buckets), Err(expected));
}

#[rstest]
#[case(0.5, 0.4)]
#[case(0.6, 0.5)]
fn schedule_validation_rejects_unbalanced_weights(#[case] head: f64, #[case] tail: f64) {
    let result = BucketSchedule::new(vec![
        AgeBucket::bounded(0, 30, head),
        AgeBucket::from_day(30, tail),
    ]);
    assert!(matches!(result, Err(ScheduleError::WeightSum { .. })));
}

#[rstest]
fn schedule_tolerates_rounding_in_weights() {
    let result = BucketSchedule::new(vec![
        AgeBucket::bounded(0, 30, 0.3),
        AgeBucket::bounded(30, 90, 0.3),
        AgeBucket::bounded(90, 180, 0.2),
        AgeBucket::from_day(180, 0.2),
    ]);
    assert!(result.is_ok());
}

#[rstest]
#[case(29, true)]
#[case(30, false)]
#[case(0, true)]
fn buckets_are_half_open(#[case] age_days: u64, #[case] inside: bool) {
    let bucket = AgeBucket::bounded(0, 30, 0.28);
    assert_eq!(bucket.contains(age_days), inside);
}

#[rstest]
fn open_ended_bucket_has_no_upper_limit() {
    let bucket = AgeBucket::from_day(180, 0.22);
    assert!(bucket.contains(180));
    assert!(bucket.contains(u64::MAX));
    assert!(!bucket.contains(179));
}

#[rstest]
fn empty_bucket_mean_contributes_nothing() {
    assert_eq!(BucketMean::Empty.contribution(0.28), 0.0);
    assert_eq!(BucketMean::Empty.value(), None);
}

#[rstest]
#[expect(
    clippy::float_arithmetic,
    reason = "test computes the expected weighted contribution"
)]
fn bucket_mean_contribution_is_weighted() {
    assert_approx(BucketMean::Value(4.0).contribution(0.26), 4.0 * 0.26);
    assert_eq!(BucketMean::Value(4.0).value(), Some(4.0));
}
