//! Application services (use cases).
//!
//! These services orchestrate domain logic over the store ports to
//! implement advertisement selection.

mod evaluator;
mod selection;

pub use evaluator::{PredicatePool, TargetingEvaluator};
pub use selection::{AdSelectionService, TieBreak, DEFAULT_PREDICATE_TIMEOUT};
