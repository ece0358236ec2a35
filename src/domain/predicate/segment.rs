//! Membership predicate over customer segments.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::domain::{CustomerId, RequestContext};

use super::{TargetingPredicate, TargetingPredicateResult};

/// Passes when the request's customer belongs to a configured segment.
///
/// An unrecognized (empty) customer id cannot be resolved to a segment; the
/// predicate reports `Indeterminate` rather than guessing either way.
#[derive(Debug, Clone)]
pub struct CustomerSegmentPredicate {
    segment: HashSet<CustomerId>,
    inverse: bool,
}

impl CustomerSegmentPredicate {
    /// Match customers in `segment`.
    pub fn new(segment: impl IntoIterator<Item = CustomerId>) -> Self {
        Self {
            segment: segment.into_iter().collect(),
            inverse: false,
        }
    }

    /// Match customers not in `segment`.
    pub fn excluding(segment: impl IntoIterator<Item = CustomerId>) -> Self {
        Self {
            segment: segment.into_iter().collect(),
            inverse: true,
        }
    }
}

#[async_trait]
impl TargetingPredicate for CustomerSegmentPredicate {
    fn name(&self) -> &'static str {
        "customer_segment"
    }

    async fn evaluate(&self, ctx: &RequestContext) -> TargetingPredicateResult {
        if ctx.customer_id().is_empty() {
            return TargetingPredicateResult::Indeterminate;
        }
        let member = self.segment.contains(ctx.customer_id());
        let result = TargetingPredicateResult::from_bool(member);
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
    use crate::domain::MarketplaceId;

    fn ctx(customer: &str) -> RequestContext {
        RequestContext::new(CustomerId::from(customer), MarketplaceId::from("US"))
    }

    fn segment() -> Vec<CustomerId> {
        vec![CustomerId::from("c1"), CustomerId::from("c2")]
    }

    #[tokio::test]
    async fn member_passes_non_member_fails() {
        let pred = CustomerSegmentPredicate::new(segment());
        assert_eq!(
            pred.evaluate(&ctx("c1")).await,
            TargetingPredicateResult::True
        );
        assert_eq!(
            pred.evaluate(&ctx("c9")).await,
            TargetingPredicateResult::False
        );
    }

    #[tokio::test]
    async fn excluding_inverts_membership() {
        let pred = CustomerSegmentPredicate::excluding(segment());
        assert_eq!(
            pred.evaluate(&ctx("c1")).await,
            TargetingPredicateResult::False
        );
        assert_eq!(
            pred.evaluate(&ctx("c9")).await,
            TargetingPredicateResult::True
        );
    }

    #[tokio::test]
    async fn unrecognized_customer_is_indeterminate_even_inverted() {
        let pred = CustomerSegmentPredicate::excluding(segment());
        assert_eq!(
            pred.evaluate(&ctx("")).await,
            TargetingPredicateResult::Indeterminate
        );
    }
}
