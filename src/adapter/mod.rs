//! Adapters implementing the store ports.

mod memory;

pub use memory::{InMemoryContentStore, InMemoryTargetingGroupStore};
