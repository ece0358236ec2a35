//! Lookup ports for advertisement content and targeting data.
//!
//! These are the engine's only collaborators. Both are key-to-list lookups;
//! an absent key is an empty list, not an error. Storage layout is entirely
//! the adapter's concern.

use std::future::Future;

use crate::domain::{AdvertisementContent, ContentId, MarketplaceId, TargetingGroup};
use crate::error::Result;

/// Source of advertisement content per marketplace.
///
/// Implementations must be thread-safe (`Send + Sync`). The order of the
/// returned list is meaningful: the selection engine breaks CTR ties in
/// favor of earlier entries.
pub trait ContentStore: Send + Sync {
    /// All content renderable in the given marketplace. Absent marketplaces
    /// yield an empty list.
    fn content_for_marketplace(
        &self,
        marketplace: &MarketplaceId,
    ) -> impl Future<Output = Result<Vec<AdvertisementContent>>> + Send;
}

/// Source of targeting groups per content id.
pub trait TargetingGroupStore: Send + Sync {
    /// All targeting groups referencing the given content. Absent content
    /// ids yield an empty list.
    fn groups_for_content(
        &self,
        content: &ContentId,
    ) -> impl Future<Output = Result<Vec<TargetingGroup>>> + Send;
}
