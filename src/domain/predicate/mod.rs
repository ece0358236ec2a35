//! Targeting predicates and their tri-state evaluation result.
//!
//! A predicate is a pure check against the [`RequestContext`]. Predicates do
//! not enforce their own timeout; the evaluator bounds each evaluation
//! externally and treats anything other than [`TargetingPredicateResult::True`]
//! as not passing.

mod marketplace;
mod recognized;
mod segment;

pub use marketplace::MarketplacePredicate;
pub use recognized::RecognizedCustomerPredicate;
pub use segment::CustomerSegmentPredicate;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::RequestContext;

/// Outcome of evaluating one targeting predicate.
///
/// Deliberately not a boolean: `Indeterminate` records that the predicate
/// could not be evaluated (timeout, panic, missing data), which is distinct
/// from an evaluated-and-failed `False`. Both gate identically — only `True`
/// counts as passing — but they are logged apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetingPredicateResult {
    /// The predicate evaluated and passed.
    True,
    /// The predicate evaluated and did not pass.
    False,
    /// The predicate could not be evaluated.
    Indeterminate,
}

impl TargetingPredicateResult {
    /// Whether this result counts as passing.
    pub fn is_true(self) -> bool {
        matches!(self, Self::True)
    }

    /// Swap `True` and `False`; `Indeterminate` is unaffected, since an
    /// unevaluable predicate stays unevaluable under inversion.
    pub fn invert(self) -> Self {
        match self {
            Self::True => Self::False,
            Self::False => Self::True,
            Self::Indeterminate => Self::Indeterminate,
        }
    }

    /// Map an evaluated boolean into a result.
    pub fn from_bool(passed: bool) -> Self {
        if passed {
            Self::True
        } else {
            Self::False
        }
    }
}

/// A targeting rule evaluated against the request context.
///
/// Implementations must be side-effect-free and hold no mutable state across
/// invocations; the evaluator shares one instance across concurrent tasks.
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use billboard::domain::{RequestContext, TargetingPredicate, TargetingPredicateResult};
///
/// struct WeekendPredicate;
///
/// #[async_trait]
/// impl TargetingPredicate for WeekendPredicate {
///     fn name(&self) -> &'static str {
///         "weekend"
///     }
///
///     async fn evaluate(&self, _ctx: &RequestContext) -> TargetingPredicateResult {
///         TargetingPredicateResult::True
///     }
/// }
/// ```
#[async_trait]
pub trait TargetingPredicate: Send + Sync {
    /// Identifier used in logs when this predicate degrades a group.
    fn name(&self) -> &'static str;

    /// Evaluate against the context. Must be bounded; the caller applies an
    /// external timeout and fails closed on expiry.
    async fn evaluate(&self, ctx: &RequestContext) -> TargetingPredicateResult;
}
