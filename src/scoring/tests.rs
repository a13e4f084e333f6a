use super::*;
use crate::analysis::SignalSet;

/// A signal set where every canonical checklist entry passes.
fn all_passing() -> SignalSet {
    SignalSet {
        title_contains_keyword: true,
        title_length: 42,
        h1_present: true,
        h1_count: 1,
        h1_contains_keyword: true,
        h2_count: 3,
        h2_contains_keyword: true,
        h3_count: 2,
        h3_contains_keyword: false,
        keyword_occurrences: 9,
        keyword_density: 1.25,
        keyword_density_ok: true,
        image_count: 2,
        images_with_alt: 2,
        images_have_alt: true,
        internal_link_count: 4,
        external_link_count: 2,
        has_internal_links: true,
        has_external_links: true,
        meta_description: true,
        meta_description_length: 150,
        word_count: 720,
        word_count_adequate: true,
    }
}

/// A signal set where every canonical checklist entry fails.
fn all_failing() -> SignalSet {
    SignalSet {
        images_have_alt: false,
        ..SignalSet::default()
    }
}

#[test]
fn test_score_100_iff_all_pass() {
    let scorer = Scorer::new();
    assert_eq!(scorer.score(&all_passing()), 100);

    // Any single failing signal drops it below 100.
    let mut signals = all_passing();
    signals.has_external_links = false;
    assert!(scorer.score(&signals) < 100);
}

#[test]
fn test_score_0_when_all_fail() {
    let scorer = Scorer::new();
    assert_eq!(scorer.score(&all_failing()), 0);
}

#[test]
fn test_empty_table_scores_0() {
    let scorer = Scorer::with_weights(WeightTable::empty());
    assert_eq!(scorer.score(&all_passing()), 0);

    let result = scorer.detailed_score(&all_passing());
    assert_eq!(result.score, 0);
    assert_eq!(result.max_points, 0);
    assert!(result.breakdown.is_empty());
}

#[test]
fn test_score_is_monotonic_in_each_signal() {
    let scorer = Scorer::new();
    let flips: [fn(&mut SignalSet); 10] = [
        |s| s.title_contains_keyword = true,
        |s| s.h1_present = true,
        |s| s.h1_contains_keyword = true,
        |s| s.h2_contains_keyword = true,
        |s| s.keyword_density_ok = true,
        |s| s.images_have_alt = true,
        |s| s.word_count_adequate = true,
        |s| s.has_internal_links = true,
        |s| s.has_external_links = true,
        |s| s.meta_description = true,
    ];

    for flip in flips {
        let base = all_failing();
        let before = scorer.score(&base);

        let mut flipped = base;
        flip(&mut flipped);
        let after = scorer.score(&flipped);

        assert!(after >= before, "flipping a signal to passing lowered the score");
    }
}

#[test]
fn test_partial_score_with_default_weights() {
    // title (15) + word count (10) failing out of 100 -> 75.
    let mut signals = all_passing();
    signals.title_contains_keyword = false;
    signals.word_count_adequate = false;

    let scorer = Scorer::new();
    let result = scorer.detailed_score(&signals);

    assert_eq!(result.score, 75);
    assert_eq!(result.status, ScoreStatus::NeedsReview);
    assert_eq!(result.total_points, 75);
    assert_eq!(result.max_points, 100);
}

#[test]
fn test_breakdown_points_sum_to_total() {
    let mut signals = all_passing();
    signals.h1_present = false;
    signals.meta_description = false;

    let result = Scorer::new().detailed_score(&signals);

    let summed: u64 = result.breakdown.iter().map(|b| b.points as u64).sum();
    assert_eq!(summed, result.total_points);

    let recomputed =
        (result.total_points as f64 / result.max_points as f64 * 100.0).round() as u32;
    assert_eq!(recomputed, result.score);
}

#[test]
fn test_status_boundaries() {
    assert_eq!(ScoreStatus::from_score(0), ScoreStatus::NeedsCorrection);
    assert_eq!(ScoreStatus::from_score(59), ScoreStatus::NeedsCorrection);
    assert_eq!(ScoreStatus::from_score(60), ScoreStatus::NeedsReview);
    assert_eq!(ScoreStatus::from_score(79), ScoreStatus::NeedsReview);
    assert_eq!(ScoreStatus::from_score(80), ScoreStatus::Approved);
    assert_eq!(ScoreStatus::from_score(100), ScoreStatus::Approved);
}

#[test]
fn test_identify_issues_canonical_order() {
    let signals = all_failing();
    let issues = Scorer::new().identify_issues(&signals);

    assert_eq!(
        issues,
        vec![
            Issue::MissingKeywordInTitle,
            Issue::MissingH1,
            Issue::MissingKeywordInH1,
            Issue::MissingKeywordInH2,
            Issue::KeywordDensityIssue,
            Issue::MissingAltTags,
            Issue::LowWordCount,
            Issue::NoInternalLinks,
            Issue::NoExternalLinks,
            Issue::MissingMetaDescription,
        ]
    );
}

#[test]
fn test_identify_issues_only_failing_entries() {
    let mut signals = all_passing();
    signals.title_contains_keyword = false;
    signals.word_count_adequate = false;
    signals.word_count = 120;

    let issues = Scorer::new().identify_issues(&signals);

    assert_eq!(issues, vec![Issue::MissingKeywordInTitle, Issue::LowWordCount]);
}

#[test]
fn test_defensive_low_word_count_is_deduplicated() {
    // Adequacy flag true but the raw count contradicts it: the defensive
    // check appends low_word_count exactly once.
    let mut signals = all_passing();
    signals.word_count = 50;
    signals.word_count_adequate = true;

    let issues = Scorer::new().identify_issues(&signals);

    assert_eq!(issues, vec![Issue::LowWordCount]);
}

#[test]
fn test_defensive_check_respects_custom_floor() {
    let mut signals = all_passing();
    signals.word_count = 720;

    let issues = Scorer::new()
        .with_min_word_count(1000)
        .identify_issues(&signals);

    assert_eq!(issues, vec![Issue::LowWordCount]);
}

#[test]
fn test_correction_suggestions_map_in_order() {
    let issues = vec![Issue::MissingH1, Issue::NoExternalLinks];
    let suggestions = Scorer::new().correction_suggestions(&issues);

    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0], Issue::MissingH1.suggestion());
    assert_eq!(suggestions[1], Issue::NoExternalLinks.suggestion());
}

#[test]
fn test_suggestion_fallback_for_unknown_id() {
    assert_eq!(
        suggestion_for("missing_h1"),
        Issue::MissingH1.suggestion().to_string()
    );
    assert_eq!(suggestion_for("custom_check"), "Fix: custom_check");
}

#[test]
fn test_override_round_trip_scores_100() {
    let scorer = Scorer::with_overrides([
        ("title_contains_keyword".to_string(), 50),
        ("meta_description".to_string(), 1),
    ]);

    assert_eq!(scorer.score(&all_passing()), 100);
}

#[test]
fn test_unknown_table_entry_counts_against_max() {
    // An override can name a signal the set does not carry; it can never
    // pass, so it dilutes the score.
    let scorer = Scorer::with_overrides([("custom_signal".to_string(), 10)]);
    let result = scorer.detailed_score(&all_passing());

    assert_eq!(result.max_points, 110);
    assert_eq!(result.total_points, 100);
    assert_eq!(result.score, 91);

    let custom = result
        .breakdown
        .iter()
        .find(|b| b.signal == "custom_signal")
        .expect("unknown entry still appears in the breakdown");
    assert!(custom.value.is_none());
    assert!(!custom.passed);
    assert_eq!(custom.points, 0);
}

#[test]
fn test_weight_table_validate_rejects_zero() {
    let table = WeightTable::from_entries([("h1_present".to_string(), 0)]);
    assert!(table.validate().is_err());
    assert!(WeightTable::default().validate().is_ok());
}

#[test]
fn test_iter_ordered_canonical_first() {
    let table = WeightTable::with_overrides([
        ("aaa_custom".to_string(), 7),
        ("h1_present".to_string(), 20),
    ]);

    let names: Vec<&str> = table.iter_ordered().map(|(n, _)| n).collect();

    assert_eq!(names[0], "title_contains_keyword");
    assert_eq!(names[1], "h1_present");
    assert_eq!(*names.last().unwrap(), "aaa_custom");
    assert_eq!(names.len(), 11);
}

#[test]
fn test_default_weights_sum_to_100() {
    assert_eq!(WeightTable::default().total(), 100);
}

#[test]
fn test_issue_ids_round_trip() {
    for entry in CHECKLIST {
        let parsed: Issue = entry.issue.id().parse().expect("canonical id parses");
        assert_eq!(parsed, entry.issue);
    }
}
