use super::*;
use crate::analysis::SignalSet;
use crate::config::Config;
use crate::scoring::CHECKLIST;

/// Builds a signal set from one flag per canonical checklist entry,
/// in canonical order.
fn signals_from(pattern: [bool; 10]) -> SignalSet {
    let [title, h1, h1_kw, h2_kw, density, alt, words, internal, external, meta] = pattern;
    SignalSet {
        title_contains_keyword: title,
        title_length: if title { 40 } else { 0 },
        h1_present: h1,
        h1_count: h1 as usize,
        h1_contains_keyword: h1_kw,
        h2_count: 2,
        h2_contains_keyword: h2_kw,
        h3_count: 0,
        h3_contains_keyword: false,
        keyword_occurrences: if density { 6 } else { 0 },
        keyword_density: if density { 1.2 } else { 0.0 },
        keyword_density_ok: density,
        image_count: 2,
        images_with_alt: if alt { 2 } else { 0 },
        images_have_alt: alt,
        internal_link_count: internal as usize,
        external_link_count: external as usize,
        has_internal_links: internal,
        has_external_links: external,
        meta_description: meta,
        meta_description_length: if meta { 150 } else { 0 },
        word_count: if words { 600 } else { 90 },
        word_count_adequate: words,
    }
}

fn sample(pattern: [bool; 10], avg_position: f64) -> TrainingSample {
    TrainingSample::new(signals_from(pattern), avg_position)
}

/// Six strong articles that ranked well, six weak ones that did not,
/// interleaved so every cross-validation fold sees both classes.
fn separable_samples() -> Vec<TrainingSample> {
    let strong = [true; 10];
    let weak = [false; 10];
    (0..6)
        .flat_map(|i| {
            [
                sample(strong, 2.0 + i as f64),
                sample(weak, 40.0 + 5.0 * i as f64),
            ]
        })
        .collect()
}

fn learner() -> WeightLearner {
    WeightLearner::new(&Config::default())
}

#[test]
fn test_insufficient_raw_samples() {
    let samples: Vec<TrainingSample> = (0..5).map(|_| sample([true; 10], 3.0)).collect();

    let outcome = learner().train(&samples);

    assert_eq!(
        outcome,
        TrainingOutcome::InsufficientData {
            required: 10,
            actual: 5
        }
    );
}

#[test]
fn test_insufficient_valid_samples() {
    let mut samples = separable_samples();
    // Corrupt four observations: positions that cannot be real rankings.
    samples[0].avg_position = f64::NAN;
    samples[1].avg_position = 0.0;
    samples[2].avg_position = -4.0;
    samples[3].avg_position = f64::INFINITY;

    let outcome = learner().train(&samples);

    assert_eq!(
        outcome,
        TrainingOutcome::InsufficientValidData {
            required: 10,
            actual: 8
        }
    );
}

#[test]
fn test_single_class_data() {
    let all_good: Vec<TrainingSample> = (0..12).map(|_| sample([true; 10], 3.0)).collect();
    assert_eq!(
        learner().train(&all_good),
        TrainingOutcome::SingleClassData {
            class: OutcomeClass::Good
        }
    );

    let all_poor: Vec<TrainingSample> = (0..12).map(|_| sample([false; 10], 55.0)).collect();
    assert_eq!(
        learner().train(&all_poor),
        TrainingOutcome::SingleClassData {
            class: OutcomeClass::Poor
        }
    );
}

#[test]
fn test_successful_training() {
    let learner = learner();
    let outcome = learner.train(&separable_samples());

    let summary = match outcome {
        TrainingOutcome::Trained(summary) => summary,
        other => panic!("expected training to succeed, got {:?}", other),
    };

    assert_eq!(summary.samples_used, 12);
    assert_eq!(summary.good_outcomes, 6);
    assert_eq!(summary.poor_outcomes, 6);
    // Perfectly separable, interleaved folds: the estimate should be high.
    assert!(summary.accuracy > 0.9, "accuracy was {}", summary.accuracy);

    // Learned weights: one per canonical signal, all positive, sum ≈ 100.
    let weights = &summary.weights;
    assert_eq!(weights.len(), CHECKLIST.len());
    for (_, weight) in weights.iter_ordered() {
        assert!(weight >= 1);
    }
    let total = weights.total();
    assert!((90..=110).contains(&total), "weight sum was {}", total);

    let model = learner.trained_model().expect("model stored after success");
    assert_eq!(model.coefficients.len(), CHECKLIST.len());
    assert_eq!(model.samples_used, 12);
}

#[test]
fn test_prediction_follows_training() {
    let learner = learner();
    assert!(learner.predict_ranking_probability(&signals_from([true; 10])).is_none());

    learner.train(&separable_samples());

    let good = learner
        .predict_ranking_probability(&signals_from([true; 10]))
        .expect("model available");
    let poor = learner
        .predict_ranking_probability(&signals_from([false; 10]))
        .expect("model available");

    assert!(good > 0.5, "good-signal probability was {}", good);
    assert!(poor < 0.5, "poor-signal probability was {}", poor);
    assert!((0.0..=1.0).contains(&good));
    assert!((0.0..=1.0).contains(&poor));
}

#[test]
fn test_custom_ranking_threshold() {
    let learner = learner();
    // Positions 15 are poor under the default threshold (10) but good under 20.
    let samples: Vec<TrainingSample> = (0..6)
        .flat_map(|_| [sample([true; 10], 15.0), sample([false; 10], 55.0)])
        .collect();

    assert_eq!(
        learner.train(&samples),
        TrainingOutcome::SingleClassData {
            class: OutcomeClass::Poor
        }
    );

    match learner.train_with_threshold(&samples, 20.0) {
        TrainingOutcome::Trained(summary) => {
            assert_eq!(summary.good_outcomes, 6);
            assert_eq!(summary.poor_outcomes, 6);
        }
        other => panic!("expected training to succeed, got {:?}", other),
    }
}

#[test]
fn test_uninformative_signals_fall_back_to_equal_split() {
    // Identical signals with mixed outcomes: no coefficient can move, so the
    // derived table is an even split.
    let samples: Vec<TrainingSample> = (0..6)
        .flat_map(|_| [sample([true; 10], 3.0), sample([true; 10], 55.0)])
        .collect();

    let learner = learner();
    match learner.train(&samples) {
        TrainingOutcome::Trained(summary) => {
            for (_, weight) in summary.weights.iter_ordered() {
                assert_eq!(weight, 10);
            }
            assert_eq!(summary.weights.total(), 100);
        }
        other => panic!("expected training to succeed, got {:?}", other),
    }
}

#[test]
fn test_guard_failure_preserves_model() {
    let learner = learner();
    learner.train(&separable_samples());
    let before = learner.trained_model().expect("trained");

    let outcome = learner.train(&[]);
    assert!(matches!(outcome, TrainingOutcome::InsufficientData { .. }));

    let after = learner.trained_model().expect("still trained");
    assert_eq!(before, after);
}

#[test]
fn test_scorer_with_learned_weights() {
    let learner = learner();

    // Untrained: canonical defaults.
    let scorer = learner.scorer_with_learned_weights();
    assert_eq!(scorer.weights().get("title_contains_keyword"), Some(15));

    let summary = match learner.train(&separable_samples()) {
        TrainingOutcome::Trained(summary) => summary,
        other => panic!("expected training to succeed, got {:?}", other),
    };

    let scorer = learner.scorer_with_learned_weights();
    assert_eq!(scorer.weights(), &summary.weights);
}

#[tokio::test]
async fn test_adjust_weights_applies_on_success() {
    let learner = learner();
    let history = MockPerformanceHistory::with_samples(separable_samples());
    let store = MockWeightStore::new();

    let outcome = learner
        .adjust_weights("ws-1", &history, &store)
        .await
        .expect("no collaborator failure");

    assert!(outcome.is_trained());
    let applied = store.applied();
    assert_eq!(applied.len(), 1);
    assert_eq!(applied[0].0, "ws-1");
}

#[tokio::test]
async fn test_adjust_weights_skips_store_on_guard_failure() {
    let learner = learner();
    let history =
        MockPerformanceHistory::with_samples(vec![sample([true; 10], 3.0); 3]);
    let store = MockWeightStore::new();

    let outcome = learner
        .adjust_weights("ws-2", &history, &store)
        .await
        .expect("guard failures are not errors");

    assert!(matches!(outcome, TrainingOutcome::InsufficientData { .. }));
    assert!(store.applied().is_empty());
}

#[tokio::test]
async fn test_adjust_weights_propagates_fetch_failure() {
    let learner = learner();
    let history = MockPerformanceHistory::failing();
    let store = MockWeightStore::new();

    let err = learner
        .adjust_weights("ws-3", &history, &store)
        .await
        .expect_err("fetch failure propagates");

    assert!(matches!(err, LearningError::FetchFailed { .. }));
    assert!(store.applied().is_empty());
    assert!(learner.trained_model().is_none());
}
