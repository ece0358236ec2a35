//! Scripted predicates for exercising the evaluator's failure paths.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{RequestContext, TargetingPredicate, TargetingPredicateResult};

/// Always returns the configured result.
#[derive(Debug, Clone)]
pub struct FixedPredicate {
    result: TargetingPredicateResult,
}

impl FixedPredicate {
    /// A predicate that always passes.
    pub fn passing() -> Self {
        Self {
            result: TargetingPredicateResult::True,
        }
    }

    /// A predicate that always fails.
    pub fn failing() -> Self {
        Self {
            result: TargetingPredicateResult::False,
        }
    }

    /// A predicate that can never be evaluated.
    pub fn indeterminate() -> Self {
        Self {
            result: TargetingPredicateResult::Indeterminate,
        }
    }
}

#[async_trait]
impl TargetingPredicate for FixedPredicate {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn evaluate(&self, _ctx: &RequestContext) -> TargetingPredicateResult {
        self.result
    }
}

/// Sleeps for a configured duration before answering, to drive the
/// evaluator past its timeout.
#[derive(Debug, Clone)]
pub struct SleepingPredicate {
    delay: Duration,
    result: TargetingPredicateResult,
}

impl SleepingPredicate {
    /// Answer `result` after `delay`.
    pub fn new(delay: Duration, result: TargetingPredicateResult) -> Self {
        Self { delay, result }
    }
}

#[async_trait]
impl TargetingPredicate for SleepingPredicate {
    fn name(&self) -> &'static str {
        "sleeping"
    }

    async fn evaluate(&self, _ctx: &RequestContext) -> TargetingPredicateResult {
        tokio::time::sleep(self.delay).await;
        self.result
    }
}

/// Panics on evaluation, to exercise the evaluator's task-failure path.
#[derive(Debug, Clone, Default)]
pub struct PanickingPredicate;

#[async_trait]
impl TargetingPredicate for PanickingPredicate {
    fn name(&self) -> &'static str {
        "panicking"
    }

    async fn evaluate(&self, _ctx: &RequestContext) -> TargetingPredicateResult {
        panic!("scripted predicate failure");
    }
}

/// Passes every time and counts how often it was evaluated.
#[derive(Debug, Clone, Default)]
pub struct CountingPredicate {
    evaluations: Arc<AtomicUsize>,
}

impl CountingPredicate {
    /// Create a predicate with a zeroed counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completed evaluations so far.
    pub fn evaluations(&self) -> usize {
        self.evaluations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TargetingPredicate for CountingPredicate {
    fn name(&self) -> &'static str {
        "counting"
    }

    async fn evaluate(&self, _ctx: &RequestContext) -> TargetingPredicateResult {
        self.evaluations.fetch_add(1, Ordering::SeqCst);
        TargetingPredicateResult::True
    }
}
