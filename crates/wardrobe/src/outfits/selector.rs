use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{AmbientContext, ColorUsageRecord, Garment, GarmentId, OutfitSlot, SlotPlan};
use super::scoring::{GarmentScore, ScoringEngine};

/// Picks the best garment for each slot of a plan.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutfitSelector {
    engine: ScoringEngine,
}

impl OutfitSelector {
    pub fn new(engine: ScoringEngine) -> Self {
        Self { engine }
    }

    /// Walks the plan in order; each garment can fill at most one slot, so a slot that shares
    /// categories with an earlier one ranks whatever the earlier slot left behind.
    pub fn select(
        &self,
        garments: &[Garment],
        context: &AmbientContext,
        history: &ColorUsageRecord,
        plan: &SlotPlan,
    ) -> RankedOutfit {
        let scored: Vec<Candidate<'_>> = garments
            .iter()
            .map(|garment| Candidate {
                garment,
                score: self.engine.score(garment, context, history),
            })
            .collect();

        let mut claimed: HashSet<&GarmentId> = HashSet::new();
        let mut outfit = RankedOutfit::default();

        for requirement in plan.requirements() {
            let mut candidates: Vec<&Candidate<'_>> = scored
                .iter()
                .filter(|candidate| requirement.accepts(candidate.garment.category))
                .filter(|candidate| !claimed.contains(&candidate.garment.id))
                .collect();
            candidates.sort_by(|a, b| rank_order(a, b));

            match candidates.first() {
                Some(winner) => {
                    debug!(
                        slot = requirement.slot.label(),
                        garment_id = winner.garment.id.as_str(),
                        composite_score = winner.score.composite_score,
                        contenders = candidates.len(),
                        "slot filled"
                    );
                    claimed.insert(&winner.garment.id);
                    outfit.entries.push(OutfitEntry {
                        slot: requirement.slot,
                        garment_id: winner.garment.id.clone(),
                        composite_score: winner.score.composite_score,
                    });
                }
                None => {
                    debug!(slot = requirement.slot.label(), "no eligible garment for slot");
                    outfit.gaps.push(requirement.slot);
                }
            }

            outfit.rankings.push(SlotRanking {
                slot: requirement.slot,
                candidates: candidates
                    .into_iter()
                    .map(|candidate| candidate.score.clone())
                    .collect(),
            });
        }

        outfit
    }
}

struct Candidate<'a> {
    garment: &'a Garment,
    score: GarmentScore,
}

/// Best first: composite score, then most recently added (undated garments after dated ones),
/// then lowest garment id.
fn rank_order(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    b.score
        .composite_score
        .cmp(&a.score.composite_score)
        .then_with(|| b.garment.added_at.cmp(&a.garment.added_at))
        .then_with(|| a.garment.id.cmp(&b.garment.id))
}

/// Garment chosen for one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitEntry {
    pub slot: OutfitSlot,
    pub garment_id: GarmentId,
    pub composite_score: u8,
}

/// Every candidate considered for a slot, best first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRanking {
    pub slot: OutfitSlot,
    pub candidates: Vec<GarmentScore>,
}

/// Selection result. `gaps` lists slots nobody could fill; interpreting them is up to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedOutfit {
    pub entries: Vec<OutfitEntry>,
    pub gaps: Vec<OutfitSlot>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rankings: Vec<SlotRanking>,
}

impl RankedOutfit {
    pub fn entry_for(&self, slot: OutfitSlot) -> Option<&OutfitEntry> {
        self.entries.iter().find(|entry| entry.slot == slot)
    }

    pub fn is_complete(&self) -> bool {
        self.gaps.is_empty()
    }

    pub fn total_score(&self) -> u32 {
        self.entries
            .iter()
            .map(|entry| u32::from(entry.composite_score))
            .sum()
    }

    /// Drops the per-slot candidate breakdown, keeping only the chosen garments and gaps.
    pub fn without_breakdown(mut self) -> Self {
        self.rankings.clear();
        self
    }
}
