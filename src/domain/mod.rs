//! Store-agnostic domain types for advertisement selection.

mod advertisement;
mod content;
mod context;
mod ids;
mod targeting;

pub mod predicate;

// Core domain types
pub use advertisement::GeneratedAdvertisement;
pub use content::AdvertisementContent;
pub use context::RequestContext;
pub use ids::{ContentId, CustomerId, MarketplaceId};
pub use targeting::TargetingGroup;

// Predicates
pub use predicate::{
    CustomerSegmentPredicate, MarketplacePredicate, RecognizedCustomerPredicate,
    TargetingPredicate, TargetingPredicateResult,
};
