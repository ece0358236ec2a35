//! Builders for domain primitives used across tests.
//!
//! Concise factory functions so tests focus on assertions rather than
//! construction boilerplate.

use std::sync::Arc;

use crate::domain::{
    AdvertisementContent, ContentId, CustomerId, MarketplaceId, RequestContext, TargetingGroup,
    TargetingPredicate,
};

/// Create an [`AdvertisementContent`] with a placeholder payload.
pub fn content(id: &str) -> AdvertisementContent {
    AdvertisementContent::new(ContentId::from(id), format!("<ad:{id}>"))
}

/// Create a [`TargetingGroup`] for `content_id` with the given CTR and predicates.
pub fn group(
    content_id: &str,
    ctr: f64,
    predicates: Vec<Arc<dyn TargetingPredicate>>,
) -> TargetingGroup {
    TargetingGroup::new(ContentId::from(content_id), ctr, predicates)
}

/// Box a concrete predicate into the trait-object form groups carry.
pub fn arc_pred<P: TargetingPredicate + 'static>(predicate: P) -> Arc<dyn TargetingPredicate> {
    Arc::new(predicate)
}

/// Create a [`RequestContext`] from raw ids.
pub fn context(customer: &str, marketplace: &str) -> RequestContext {
    RequestContext::new(CustomerId::from(customer), MarketplaceId::from(marketplace))
}
