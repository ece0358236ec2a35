//! Concurrent, fail-closed evaluation of targeting groups.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::warn;

use crate::domain::{RequestContext, TargetingGroup, TargetingPredicateResult};

/// Process-wide bounded permit pool for predicate evaluation.
///
/// Created once at service start and shared by every evaluator; each spawned
/// predicate task holds one permit while it runs, capping global predicate
/// concurrency. `close` drains the pool at shutdown: tasks that cannot get a
/// permit degrade to `Indeterminate` instead of running.
#[derive(Clone)]
pub struct PredicatePool {
    permits: Arc<Semaphore>,
}

impl PredicatePool {
    /// Create a pool allowing up to `max_concurrent` predicate evaluations.
    pub fn new(max_concurrent: usize) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(max_concurrent)),
        }
    }

    /// Stop admitting new predicate evaluations.
    pub fn close(&self) {
        self.permits.close();
    }

    /// Permits currently available.
    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }
}

/// Evaluates targeting groups for one request context.
///
/// One evaluator is built per selection call and reused across all groups of
/// all candidates in that call. The context is shared read-only with every
/// spawned task, so group evaluations never contend with each other.
pub struct TargetingEvaluator {
    ctx: Arc<RequestContext>,
    pool: PredicatePool,
    predicate_timeout: Duration,
}

impl TargetingEvaluator {
    /// Create an evaluator for `ctx`, drawing permits from `pool` and bounding
    /// each predicate evaluation by `predicate_timeout`.
    pub fn new(ctx: RequestContext, pool: PredicatePool, predicate_timeout: Duration) -> Self {
        Self {
            ctx: Arc::new(ctx),
            pool,
            predicate_timeout,
        }
    }

    /// The context this evaluator judges groups against.
    pub fn context(&self) -> &RequestContext {
        &self.ctx
    }

    /// Decide whether `group` is eligible for this evaluator's context.
    ///
    /// Spawns one task per predicate, waits up to the configured timeout for
    /// each, and reduces fail-closed: `True` iff every predicate's observed
    /// result is `True`. A group without predicates is vacuously `True`.
    /// Never returns an error; timeouts and panics degrade the offending
    /// predicate to a non-passing result. Tasks still running when their
    /// timeout expires are left to finish in the background, but their
    /// results are never observed.
    pub async fn evaluate(&self, group: &TargetingGroup) -> TargetingPredicateResult {
        let tasks: Vec<(&'static str, JoinHandle<TargetingPredicateResult>)> = group
            .predicates()
            .iter()
            .map(|predicate| {
                let name = predicate.name();
                let predicate = Arc::clone(predicate);
                let ctx = Arc::clone(&self.ctx);
                let permits = Arc::clone(&self.pool.permits);
                let handle = tokio::spawn(async move {
                    let Ok(_permit) = permits.acquire().await else {
                        // Pool closed: shutting down, nothing may run.
                        return TargetingPredicateResult::Indeterminate;
                    };
                    predicate.evaluate(&ctx).await
                });
                (name, handle)
            })
            .collect();

        let mut all_true = true;
        for (name, handle) in tasks {
            let result = match timeout(self.predicate_timeout, handle).await {
                Ok(Ok(result)) => result,
                Ok(Err(join_error)) => {
                    warn!(
                        predicate = name,
                        content_id = %group.content_id(),
                        %join_error,
                        "predicate task failed; treating as indeterminate"
                    );
                    TargetingPredicateResult::Indeterminate
                }
                Err(_elapsed) => {
                    warn!(
                        predicate = name,
                        content_id = %group.content_id(),
                        timeout_ms = self.predicate_timeout.as_millis() as u64,
                        "predicate timed out; treating as indeterminate"
                    );
                    TargetingPredicateResult::Indeterminate
                }
            };
            if !result.is_true() {
                all_true = false;
            }
        }

        TargetingPredicateResult::from_bool(all_true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CustomerId, MarketplaceId};
    use crate::testkit::domain::{arc_pred, group};
    use crate::testkit::predicate::FixedPredicate;

    fn evaluator() -> TargetingEvaluator {
        let ctx = RequestContext::new(CustomerId::from("c1"), MarketplaceId::from("US"));
        TargetingEvaluator::new(ctx, PredicatePool::new(16), Duration::from_millis(1000))
    }

    #[tokio::test]
    async fn empty_group_is_vacuously_true() {
        let group = group("ad1", 0.5, vec![]);
        assert_eq!(
            evaluator().evaluate(&group).await,
            TargetingPredicateResult::True
        );
    }

    #[tokio::test]
    async fn all_true_predicates_pass() {
        let group = group(
            "ad1",
            0.5,
            vec![
                arc_pred(FixedPredicate::passing()),
                arc_pred(FixedPredicate::passing()),
            ],
        );
        assert_eq!(
            evaluator().evaluate(&group).await,
            TargetingPredicateResult::True
        );
    }

    #[tokio::test]
    async fn one_false_predicate_fails_the_group() {
        let group = group(
            "ad1",
            0.5,
            vec![
                arc_pred(FixedPredicate::passing()),
                arc_pred(FixedPredicate::failing()),
                arc_pred(FixedPredicate::passing()),
            ],
        );
        assert_eq!(
            evaluator().evaluate(&group).await,
            TargetingPredicateResult::False
        );
    }

    #[tokio::test]
    async fn indeterminate_predicate_fails_the_group() {
        let group = group(
            "ad1",
            0.5,
            vec![
                arc_pred(FixedPredicate::passing()),
                arc_pred(FixedPredicate::indeterminate()),
            ],
        );
        assert_eq!(
            evaluator().evaluate(&group).await,
            TargetingPredicateResult::False
        );
    }

    #[tokio::test]
    async fn closed_pool_fails_closed() {
        let ctx = RequestContext::new(CustomerId::from("c1"), MarketplaceId::from("US"));
        let pool = PredicatePool::new(16);
        pool.close();
        let evaluator = TargetingEvaluator::new(ctx, pool, Duration::from_millis(1000));
        let group = group("ad1", 0.5, vec![arc_pred(FixedPredicate::passing())]);
        assert_eq!(
            evaluator.evaluate(&group).await,
            TargetingPredicateResult::False
        );
    }
}
