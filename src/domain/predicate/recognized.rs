//! Predicate gating on whether the customer is recognized.

use async_trait::async_trait;

use crate::domain::RequestContext;

use super::{TargetingPredicate, TargetingPredicateResult};

/// Passes when the request carries a non-empty customer id.
///
/// With `excluding`, targets anonymous traffic instead.
#[derive(Debug, Clone, Default)]
pub struct RecognizedCustomerPredicate {
    inverse: bool,
}

impl RecognizedCustomerPredicate {
    /// Match recognized (logged-in) customers.
    pub fn new() -> Self {
        Self { inverse: false }
    }

    /// Match unrecognized (anonymous) customers.
    pub fn excluding() -> Self {
        Self { inverse: true }
    }
}

#[async_trait]
impl TargetingPredicate for RecognizedCustomerPredicate {
    fn name(&self) -> &'static str {
        "recognized_customer"
    }

    async fn evaluate(&self, ctx: &RequestContext) -> TargetingPredicateResult {
        let result = TargetingPredicateResult::from_bool(!ctx.customer_id().is_empty());
        if self.inverse {
            result.invert()
        } else {
            result
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CustomerId, MarketplaceId};

    fn ctx(customer: &str) -> RequestContext {
        RequestContext::new(CustomerId::from(customer), MarketplaceId::from("US"))
    }

    #[tokio::test]
    async fn recognized_customer_passes() {
        let pred = RecognizedCustomerPredicate::new();
        assert_eq!(
            pred.evaluate(&ctx("c1")).await,
            TargetingPredicateResult::True
        );
        assert_eq!(
            pred.evaluate(&ctx("")).await,
            TargetingPredicateResult::False
        );
    }

    #[tokio::test]
    async fn excluding_targets_anonymous_traffic() {
        let pred = RecognizedCustomerPredicate::excluding();
        assert_eq!(
            pred.evaluate(&ctx("")).await,
            TargetingPredicateResult::True
        );
        assert_eq!(
            pred.evaluate(&ctx("c1")).await,
            TargetingPredicateResult::False
        );
    }
}
