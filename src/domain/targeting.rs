//! Targeting groups associating predicates and a click-through rate with content.

use std::sync::Arc;

use crate::domain::{ContentId, TargetingPredicate};

/// One targeting group for an advertisement.
///
/// A group is eligible for a request when every predicate in it evaluates
/// true; a group without predicates is vacuously eligible. Several groups may
/// target the same content with different CTRs.
#[derive(Clone)]
pub struct TargetingGroup {
    content_id: ContentId,
    click_through_rate: f64,
    predicates: Vec<Arc<dyn TargetingPredicate>>,
}

impl TargetingGroup {
    /// Create a group targeting `content_id` with the given CTR and predicates.
    pub fn new(
        content_id: ContentId,
        click_through_rate: f64,
        predicates: Vec<Arc<dyn TargetingPredicate>>,
    ) -> Self {
        Self {
            content_id,
            click_through_rate,
            predicates,
        }
    }

    /// The content this group targets.
    pub fn content_id(&self) -> &ContentId {
        &self.content_id
    }

    /// Observed click-through rate for this group's audience.
    pub fn click_through_rate(&self) -> f64 {
        self.click_through_rate
    }

    /// Predicates that must all hold for the group to be eligible.
    pub fn predicates(&self) -> &[Arc<dyn TargetingPredicate>] {
        &self.predicates
    }
}

impl std::fmt::Debug for TargetingGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TargetingGroup")
            .field("content_id", &self.content_id)
            .field("click_through_rate", &self.click_through_rate)
            .field(
                "predicates",
                &self.predicates.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
