//! Request context shared by every predicate evaluation in a selection call.

use serde::{Deserialize, Serialize};

use crate::domain::{CustomerId, MarketplaceId};

/// Immutable context for one selection call.
///
/// Built once per call and shared read-only (behind an `Arc`) across all
/// concurrently evaluating predicates, so no synchronization is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    customer_id: CustomerId,
    marketplace_id: MarketplaceId,
}

impl RequestContext {
    /// Create a context for the given customer and marketplace.
    pub fn new(customer_id: CustomerId, marketplace_id: MarketplaceId) -> Self {
        Self {
            customer_id,
            marketplace_id,
        }
    }

    /// The customer the advertisement is being generated for.
    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    /// The marketplace the advertisement will be rendered on.
    pub fn marketplace_id(&self) -> &MarketplaceId {
        &self.marketplace_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_exposes_both_ids() {
        let ctx = RequestContext::new(CustomerId::from("c1"), MarketplaceId::from("US"));
        assert_eq!(ctx.customer_id().as_str(), "c1");
        assert_eq!(ctx.marketplace_id().as_str(), "US");
    }
}
