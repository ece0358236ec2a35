//! Advertisement selection: eligibility filtering and CTR ranking.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::application::evaluator::{PredicatePool, TargetingEvaluator};
use crate::domain::{
    AdvertisementContent, CustomerId, GeneratedAdvertisement, MarketplaceId, RequestContext,
};
use crate::port::{ContentStore, TargetingGroupStore};

/// Default bound on a single predicate evaluation.
pub const DEFAULT_PREDICATE_TIMEOUT: Duration = Duration::from_millis(1000);

/// How to resolve candidates whose best eligible CTRs are exactly equal.
///
/// Both variants are deterministic given their inputs; no ambient randomness
/// is ever consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Prefer the candidate appearing earlier in the content store's order.
    #[default]
    FirstEncountered,
    /// Pick among the tied candidates with a seeded generator. The same seed
    /// and candidate list always produce the same winner.
    Seeded(u64),
}

/// Picks the advertisement to render for a customer in a marketplace.
///
/// The entry point is [`select`](Self::select): fetch candidates, keep those
/// with at least one eligible targeting group, and return the one whose best
/// eligible group has the highest click-through rate. Selection is total;
/// every degenerate input maps to [`GeneratedAdvertisement::Empty`].
pub struct AdSelectionService<C, T> {
    content_store: C,
    targeting_store: T,
    pool: PredicatePool,
    predicate_timeout: Duration,
    tie_break: TieBreak,
}

impl<C, T> AdSelectionService<C, T>
where
    C: ContentStore,
    T: TargetingGroupStore,
{
    /// Create a service with the default predicate timeout and tie-break.
    pub fn new(content_store: C, targeting_store: T, pool: PredicatePool) -> Self {
        Self {
            content_store,
            targeting_store,
            pool,
            predicate_timeout: DEFAULT_PREDICATE_TIMEOUT,
            tie_break: TieBreak::default(),
        }
    }

    /// Override the per-predicate evaluation timeout.
    #[must_use]
    pub fn with_predicate_timeout(mut self, timeout: Duration) -> Self {
        self.predicate_timeout = timeout;
        self
    }

    /// Override the equal-CTR tie-break policy.
    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Select the best advertisement for `customer_id` in `marketplace_id`.
    ///
    /// A candidate is eligible when at least one of its targeting groups
    /// evaluates true for the request; its representative CTR is the highest
    /// CTR among those groups. The winner is the eligible candidate with the
    /// globally highest representative CTR. Returns
    /// [`GeneratedAdvertisement::Empty`] when the marketplace id is empty,
    /// the marketplace has no content, no candidate is eligible, or a store
    /// lookup fails.
    pub async fn select(
        &self,
        customer_id: &CustomerId,
        marketplace_id: &MarketplaceId,
    ) -> GeneratedAdvertisement {
        if marketplace_id.is_empty() {
            warn!("marketplace id is empty; returning empty advertisement");
            return GeneratedAdvertisement::Empty;
        }

        let contents = match self
            .content_store
            .content_for_marketplace(marketplace_id)
            .await
        {
            Ok(contents) => contents,
            Err(error) => {
                warn!(%marketplace_id, %error, "content lookup failed; returning empty advertisement");
                return GeneratedAdvertisement::Empty;
            }
        };
        if contents.is_empty() {
            debug!(%marketplace_id, "no content for marketplace");
            return GeneratedAdvertisement::Empty;
        }

        // One context and one evaluator for the whole call; groups of every
        // candidate are judged against the same immutable request.
        let ctx = RequestContext::new(customer_id.clone(), marketplace_id.clone());
        let evaluator = TargetingEvaluator::new(ctx, self.pool.clone(), self.predicate_timeout);

        // Single pass: each group is fetched and evaluated exactly once, and
        // a candidate's eligibility and representative CTR fall out together.
        let mut scored: Vec<(AdvertisementContent, f64)> = Vec::new();
        for content in contents {
            let groups = match self
                .targeting_store
                .groups_for_content(content.content_id())
                .await
            {
                Ok(groups) => groups,
                Err(error) => {
                    warn!(
                        content_id = %content.content_id(),
                        %error,
                        "targeting group lookup failed; skipping candidate"
                    );
                    continue;
                }
            };

            let mut best_ctr: Option<f64> = None;
            for group in &groups {
                if !evaluator.evaluate(group).await.is_true() {
                    continue;
                }
                let ctr = group.click_through_rate();
                best_ctr = Some(match best_ctr {
                    Some(best) if best.total_cmp(&ctr).is_ge() => best,
                    _ => ctr,
                });
            }

            match best_ctr {
                Some(ctr) => {
                    debug!(content_id = %content.content_id(), ctr, "candidate eligible");
                    scored.push((content, ctr));
                }
                None => {
                    debug!(content_id = %content.content_id(), "no eligible targeting group");
                }
            }
        }

        match self.pick_winner(scored) {
            Some(content) => {
                debug!(content_id = %content.content_id(), "selected advertisement");
                GeneratedAdvertisement::Advertisement(content)
            }
            None => GeneratedAdvertisement::Empty,
        }
    }

    /// Resolve the scored candidates to a winner, honoring the tie-break.
    fn pick_winner(&self, scored: Vec<(AdvertisementContent, f64)>) -> Option<AdvertisementContent> {
        let max_ctr = scored
            .iter()
            .map(|(_, ctr)| *ctr)
            .max_by(f64::total_cmp)?;

        match self.tie_break {
            TieBreak::FirstEncountered => scored
                .into_iter()
                .find(|(_, ctr)| ctr.total_cmp(&max_ctr).is_eq())
                .map(|(content, _)| content),
            TieBreak::Seeded(seed) => {
                let mut tied: Vec<AdvertisementContent> = scored
                    .into_iter()
                    .filter(|(_, ctr)| ctr.total_cmp(&max_ctr).is_eq())
                    .map(|(content, _)| content)
                    .collect();
                let index = StdRng::seed_from_u64(seed).gen_range(0..tied.len());
                Some(tied.swap_remove(index))
            }
        }
    }
}
