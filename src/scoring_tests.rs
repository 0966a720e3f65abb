use super::*;

fn scorer() -> ComplexityScorer {
    ComplexityScorer::from_catalog(&PatternCatalog::builtin().unwrap())
}

#[test]
fn empty_set_scores_zero_and_low() {
    let score = scorer().score(std::iter::empty());
    assert_eq!(score, 0);
    assert_eq!(ComplexityLevel::from_score(score), ComplexityLevel::Low);
}

#[test]
fn single_webpack_config_scores_three_medium() {
    let score = scorer().score([9]);
    assert_eq!(score, 3);
    assert_eq!(ComplexityLevel::from_score(score), ComplexityLevel::Medium);
}

#[test]
fn score_sums_weights() {
    // Global API (2) + Scoped Slots (1) + Webpack Config (3)
    assert_eq!(scorer().score([1, 6, 9]), 6);
}

#[test]
fn unknown_category_defaults_to_weight_one() {
    let scorer = scorer();
    assert_eq!(scorer.weight(99), DEFAULT_WEIGHT);
    assert_eq!(scorer.score([99, 98]), 2);
}

#[test]
fn empty_table_uses_default_weight() {
    let scorer = ComplexityScorer::default();
    assert_eq!(scorer.score([1, 2, 3]), 3);
}

#[test]
fn level_boundaries_have_no_gaps() {
    assert_eq!(ComplexityLevel::from_score(0), ComplexityLevel::Low);
    assert_eq!(ComplexityLevel::from_score(2), ComplexityLevel::Low);
    assert_eq!(ComplexityLevel::from_score(3), ComplexityLevel::Medium);
    assert_eq!(ComplexityLevel::from_score(4), ComplexityLevel::Medium);
    assert_eq!(ComplexityLevel::from_score(5), ComplexityLevel::High);
    assert_eq!(ComplexityLevel::from_score(40), ComplexityLevel::High);
}

#[test]
fn level_is_monotonic() {
    let levels: Vec<_> = (0..20).map(ComplexityLevel::from_score).collect();
    assert!(levels.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn level_display() {
    assert_eq!(ComplexityLevel::Medium.to_string(), "Medium");
}

#[test]
fn buckets_for_no_files_are_all_zero() {
    let buckets = ComplexityScorer::buckets(std::iter::empty());
    assert_eq!(buckets, ComplexityBuckets::default());
    assert!(!buckets.has_high);
}

#[test]
fn buckets_split_evenly() {
    let buckets = ComplexityScorer::buckets([1, 3, 5, 2]);
    assert_eq!(buckets.low_pct, 50);
    assert_eq!(buckets.medium_pct, 25);
    assert_eq!(buckets.high_pct, 25);
    assert!(buckets.has_high);
}

#[test]
fn buckets_round_half_up() {
    // 1/3 = 33.3 -> 33, 2/3 = 66.7 -> 67
    let buckets = ComplexityScorer::buckets([1, 3, 4]);
    assert_eq!(buckets.low_pct, 33);
    assert_eq!(buckets.medium_pct, 67);
    assert_eq!(buckets.high_pct, 0);
    assert!(!buckets.has_high);

    // 1/8 = 12.5 -> 13
    let buckets = ComplexityScorer::buckets([5, 1, 1, 1, 1, 1, 1, 1]);
    assert_eq!(buckets.high_pct, 13);
    assert_eq!(buckets.low_pct, 88);
}

#[test]
fn bucket_percentages_sum_to_about_one_hundred() {
    for n in 1..30u32 {
        let scores: Vec<u32> = (0..n).map(|i| i % 7).collect();
        let b = ComplexityScorer::buckets(scores);
        let sum = b.low_pct + b.medium_pct + b.high_pct;
        assert!((98..=102).contains(&sum), "n={n} sum={sum}");
    }
}
