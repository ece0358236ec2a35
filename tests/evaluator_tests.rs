//! Integration tests for concurrent targeting-group evaluation.

use std::time::Duration;

use billboard::application::{PredicatePool, TargetingEvaluator};
use billboard::domain::TargetingPredicateResult;
use billboard::testkit::domain::{arc_pred, context, group};
use billboard::testkit::predicate::{
    CountingPredicate, FixedPredicate, PanickingPredicate, SleepingPredicate,
};

fn evaluator_with_timeout(timeout: Duration) -> TargetingEvaluator {
    TargetingEvaluator::new(context("c1", "US"), PredicatePool::new(16), timeout)
}

#[tokio::test]
async fn empty_predicate_list_evaluates_true() {
    let evaluator = evaluator_with_timeout(Duration::from_millis(1000));
    let group = group("ad1", 0.5, vec![]);
    assert_eq!(
        evaluator.evaluate(&group).await,
        TargetingPredicateResult::True
    );
}

#[tokio::test]
async fn timed_out_predicate_fails_the_group() {
    let evaluator = evaluator_with_timeout(Duration::from_millis(50));
    let group = group(
        "ad1",
        0.5,
        vec![
            arc_pred(FixedPredicate::passing()),
            arc_pred(SleepingPredicate::new(
                Duration::from_secs(5),
                TargetingPredicateResult::True,
            )),
        ],
    );
    assert_eq!(
        evaluator.evaluate(&group).await,
        TargetingPredicateResult::False
    );
}

#[tokio::test]
async fn late_true_result_never_flips_the_verdict() {
    let evaluator = evaluator_with_timeout(Duration::from_millis(50));
    let group = group(
        "ad1",
        0.5,
        vec![arc_pred(SleepingPredicate::new(
            Duration::from_millis(200),
            TargetingPredicateResult::True,
        ))],
    );
    let verdict = evaluator.evaluate(&group).await;
    // Let the abandoned task run to completion in the background.
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(verdict, TargetingPredicateResult::False);
}

#[tokio::test]
async fn panicking_predicate_fails_the_group_without_propagating() {
    let evaluator = evaluator_with_timeout(Duration::from_millis(1000));
    let group = group(
        "ad1",
        0.5,
        vec![
            arc_pred(FixedPredicate::passing()),
            arc_pred(PanickingPredicate),
        ],
    );
    assert_eq!(
        evaluator.evaluate(&group).await,
        TargetingPredicateResult::False
    );
}

#[tokio::test]
async fn fast_predicates_beat_a_generous_timeout() {
    let evaluator = evaluator_with_timeout(Duration::from_millis(1000));
    let group = group(
        "ad1",
        0.5,
        vec![
            arc_pred(SleepingPredicate::new(
                Duration::from_millis(10),
                TargetingPredicateResult::True,
            )),
            arc_pred(SleepingPredicate::new(
                Duration::from_millis(10),
                TargetingPredicateResult::True,
            )),
        ],
    );
    assert_eq!(
        evaluator.evaluate(&group).await,
        TargetingPredicateResult::True
    );
}

#[tokio::test]
async fn every_predicate_is_evaluated_exactly_once_per_group() {
    let evaluator = evaluator_with_timeout(Duration::from_millis(1000));
    let counting = CountingPredicate::new();
    let group = group(
        "ad1",
        0.5,
        vec![arc_pred(counting.clone()), arc_pred(counting.clone())],
    );
    evaluator.evaluate(&group).await;
    assert_eq!(counting.evaluations(), 2);
}

#[tokio::test]
async fn groups_evaluate_independently_with_a_shared_pool() {
    let pool = PredicatePool::new(4);
    let evaluator =
        TargetingEvaluator::new(context("c1", "US"), pool.clone(), Duration::from_millis(1000));
    let passing = group("ad1", 0.5, vec![arc_pred(FixedPredicate::passing())]);
    let failing = group("ad2", 0.5, vec![arc_pred(FixedPredicate::failing())]);

    let (first, second) = tokio::join!(evaluator.evaluate(&passing), evaluator.evaluate(&failing));
    assert_eq!(first, TargetingPredicateResult::True);
    assert_eq!(second, TargetingPredicateResult::False);
    // All permits returned once both groups settle.
    assert_eq!(pool.available(), 4);
}
