//! Billboard - Targeted advertisement selection.
//!
//! This crate picks, for a given customer and marketplace, the single best
//! advertisement to render: eligible under targeting rules and, among
//! eligible candidates, the one with the highest click-through rate (CTR).
//!
//! # Architecture
//!
//! The crate uses a hexagonal layout:
//!
//! - **`domain`** - Store-agnostic types: content, targeting groups,
//!   predicates, the tri-state predicate result.
//! - **`port`** - Collaborator traits the engine consumes:
//!   [`ContentStore`](port::ContentStore) and
//!   [`TargetingGroupStore`](port::TargetingGroupStore).
//! - **`application`** - The evaluation and selection services:
//!   [`TargetingEvaluator`](application::TargetingEvaluator) runs a group's
//!   predicates concurrently with a bounded per-predicate timeout and fails
//!   closed; [`AdSelectionService`](application::AdSelectionService) filters
//!   and ranks candidates by CTR.
//! - **`adapter`** - In-memory store implementations.
//! - **`config`** - Configuration loading from TOML.
//! - **`error`** - Error types for the crate.
//!
//! Selection is total: empty marketplaces, missing content, ineligible
//! candidates, and failing predicates all resolve to
//! [`GeneratedAdvertisement::Empty`](domain::GeneratedAdvertisement::Empty),
//! never an error.
//!
//! # Example
//!
//! ```
//! use billboard::adapter::{InMemoryContentStore, InMemoryTargetingGroupStore};
//! use billboard::application::{AdSelectionService, PredicatePool};
//! use billboard::domain::{
//!     AdvertisementContent, ContentId, CustomerId, MarketplaceId, TargetingGroup,
//! };
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let contents = InMemoryContentStore::new();
//! contents.insert(
//!     MarketplaceId::from("US"),
//!     vec![AdvertisementContent::new(ContentId::from("ad1"), "<b>hi</b>")],
//! );
//! let groups = InMemoryTargetingGroupStore::new();
//! groups.insert(TargetingGroup::new(ContentId::from("ad1"), 0.5, vec![]));
//!
//! let service = AdSelectionService::new(contents, groups, PredicatePool::new(64));
//! let ad = service
//!     .select(&CustomerId::from("c1"), &MarketplaceId::from("US"))
//!     .await;
//! assert_eq!(ad.content().unwrap().content_id(), &ContentId::from("ad1"));
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;

pub use error::{Error, Result};
