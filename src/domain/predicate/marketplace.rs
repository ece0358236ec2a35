//! Attribute-match predicate on the request's marketplace.

use async_trait::async_trait;

use crate::domain::{MarketplaceId, RequestContext};

use super::{TargetingPredicate, TargetingPredicateResult};

/// Passes when the request's marketplace equals the configured one.
///
/// With `inverse` set, passes when it differs (e.g. "everywhere except US").
#[derive(Debug, Clone)]
pub struct MarketplacePredicate {
    marketplace_id: MarketplaceId,
    inverse: bool,
}

impl MarketplacePredicate {
    /// Match requests from `marketplace_id`.
    pub fn new(marketplace_id: MarketplaceId) -> Self {
        Self {
            marketplace_id,
            inverse: false,
        }
    }

    /// Match requests from any marketplace other than `marketplace_id`.
    pub fn excluding(marketplace_id: MarketplaceId) -> Self {
        Self {
            marketplace_id,
            inverse: true,
        }
    }
}

#[async_trait]
impl TargetingPredicate for MarketplacePredicate {
    fn name(&self) -> &'static str {
        "marketplace"
    }

    async fn evaluate(&self, ctx: &RequestContext) -> TargetingPredicateResult {
        let matched = ctx.marketplace_id() == &self.marketplace_id;
        let result = TargetingPredicateResult::from_bool(matched);
        if self.inverse {
            result.invert()
        } else {
            result
        }
    }
}
