//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] — Builders for domain primitives: content, groups, contexts.
//! - [`predicate`] — Scripted [`TargetingPredicate`](crate::domain::TargetingPredicate)
//!   implementations: `FixedPredicate`, `SleepingPredicate`, `PanickingPredicate`.

pub mod domain;
pub mod predicate;
