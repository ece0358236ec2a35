//! Ports consumed by the selection engine.

mod store;

pub use store::{ContentStore, TargetingGroupStore};
