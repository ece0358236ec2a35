//! Thread-safe in-memory implementations of the store ports.
//!
//! Suitable for tests and for services that load their advertisement
//! inventory up front. Lookups never fail; absent keys are empty lists.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::domain::{AdvertisementContent, ContentId, MarketplaceId, TargetingGroup};
use crate::error::Result;
use crate::port::{ContentStore, TargetingGroupStore};

/// In-memory content inventory keyed by marketplace.
#[derive(Default)]
pub struct InMemoryContentStore {
    contents: RwLock<HashMap<MarketplaceId, Vec<AdvertisementContent>>>,
}

impl InMemoryContentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the content list for a marketplace.
    ///
    /// List order is preserved; the selection engine's tie-break depends
    /// on it.
    pub fn insert(&self, marketplace: MarketplaceId, contents: Vec<AdvertisementContent>) {
        self.contents.write().insert(marketplace, contents);
    }
}

impl ContentStore for InMemoryContentStore {
    async fn content_for_marketplace(
        &self,
        marketplace: &MarketplaceId,
    ) -> Result<Vec<AdvertisementContent>> {
        Ok(self
            .contents
            .read()
            .get(marketplace)
            .cloned()
            .unwrap_or_default())
    }
}

/// In-memory targeting groups keyed by content id.
#[derive(Default)]
pub struct InMemoryTargetingGroupStore {
    groups: RwLock<HashMap<ContentId, Vec<TargetingGroup>>>,
}

impl InMemoryTargetingGroupStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one targeting group under its content id.
    pub fn insert(&self, group: TargetingGroup) {
        self.groups
            .write()
            .entry(group.content_id().clone())
            .or_default()
            .push(group);
    }
}

impl TargetingGroupStore for InMemoryTargetingGroupStore {
    async fn groups_for_content(&self, content: &ContentId) -> Result<Vec<TargetingGroup>> {
        Ok(self
            .groups
            .read()
            .get(content)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::{content, group};

    #[tokio::test]
    async fn absent_marketplace_is_empty_not_error() {
        let store = InMemoryContentStore::new();
        let listed = store
            .content_for_marketplace(&MarketplaceId::from("EU"))
            .await
            .unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn content_round_trips_in_insertion_order() {
        let store = InMemoryContentStore::new();
        store.insert(
            MarketplaceId::from("US"),
            vec![content("ad1"), content("ad2")],
        );
        let listed = store
            .content_for_marketplace(&MarketplaceId::from("US"))
            .await
            .unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].content_id().as_str(), "ad1");
        assert_eq!(listed[1].content_id().as_str(), "ad2");
    }

    #[tokio::test]
    async fn groups_accumulate_per_content_id() {
        let store = InMemoryTargetingGroupStore::new();
        store.insert(group("ad1", 0.2, vec![]));
        store.insert(group("ad1", 0.9, vec![]));
        let groups = store
            .groups_for_content(&ContentId::from("ad1"))
            .await
            .unwrap();
        assert_eq!(groups.len(), 2);
    }
}
