use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::domain::{AmbientContext, ContextError, SlotPlan, SlotPlanError, WearerId};
use super::repository::{RepositoryError, WardrobeRepository, WardrobeSnapshot};
use super::scoring::ScoringEngine;
use super::selector::{OutfitSelector, RankedOutfit};

/// Parameters of a single recommendation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitRequest {
    #[serde(flatten)]
    pub context: AmbientContext,
    /// Overrides the service's slot plan for this request.
    #[serde(default)]
    pub slots: Option<SlotPlan>,
    /// Overrides the service's breakdown default for this request.
    #[serde(default)]
    pub include_breakdown: Option<bool>,
}

impl OutfitRequest {
    pub fn new(context: AmbientContext) -> Self {
        Self {
            context,
            ..Self::default()
        }
    }
}

/// Recommendation plus the identifiers callers need to render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitRecommendation {
    pub wearer_id: WearerId,
    pub complete: bool,
    pub total_score: u32,
    #[serde(flatten)]
    pub outfit: RankedOutfit,
}

/// Service composing the wardrobe repository with the outfit selector.
pub struct RecommendationService<R> {
    repository: Arc<R>,
    selector: OutfitSelector,
    plan: SlotPlan,
    include_breakdown: bool,
}

impl<R> RecommendationService<R>
where
    R: WardrobeRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            selector: OutfitSelector::new(ScoringEngine::new()),
            plan: SlotPlan::standard(),
            include_breakdown: false,
        }
    }

    pub fn with_plan(mut self, plan: SlotPlan) -> Result<Self, SlotPlanError> {
        plan.validate()?;
        self.plan = plan;
        Ok(self)
    }

    pub fn with_breakdown(mut self, include_breakdown: bool) -> Self {
        self.include_breakdown = include_breakdown;
        self
    }

    pub fn plan(&self) -> &SlotPlan {
        &self.plan
    }

    /// Validate the request, fetch the wearer's wardrobe, and pick one garment per slot.
    pub fn recommend(
        &self,
        wearer_id: &WearerId,
        request: &OutfitRequest,
    ) -> Result<OutfitRecommendation, RecommendationError> {
        request.context.validate()?;
        let plan = match &request.slots {
            Some(plan) => {
                plan.validate()?;
                plan
            }
            None => &self.plan,
        };

        let snapshot = WardrobeSnapshot::fetch(self.repository.as_ref(), wearer_id)?;
        debug!(
            wearer_id = %wearer_id.0,
            garments = snapshot.garments.len(),
            colors = snapshot.color_usage.len(),
            "wardrobe snapshot loaded"
        );

        let outfit = self.selector.select(
            &snapshot.garments,
            &request.context,
            &snapshot.color_usage,
            plan,
        );

        if !outfit.is_complete() {
            let missing: Vec<&str> = outfit.gaps.iter().map(|slot| slot.label()).collect();
            info!(
                wearer_id = %wearer_id.0,
                missing = ?missing,
                "outfit incomplete, no eligible garments for some slots"
            );
        }

        let outfit = if request.include_breakdown.unwrap_or(self.include_breakdown) {
            outfit
        } else {
            outfit.without_breakdown()
        };

        Ok(OutfitRecommendation {
            wearer_id: wearer_id.clone(),
            complete: outfit.is_complete(),
            total_score: outfit.total_score(),
            outfit,
        })
    }
}

/// Error raised by the recommendation service.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error(transparent)]
    Context(#[from] ContextError),
    #[error(transparent)]
    SlotPlan(#[from] SlotPlanError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl RecommendationError {
    /// True when the caller sent something the engine's input contract forbids.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            RecommendationError::Context(_) | RecommendationError::SlotPlan(_)
        )
    }
}
