//! Outfit recommendation: garment scoring, per-slot selection, and the plumbing that feeds them.

pub mod catalog;
pub mod domain;
pub mod history;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod selector;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogImportError, ColorHistories, WardrobeImporter, WardrobeInventory};
pub use domain::{
    AmbientContext, ColorUsage, ColorUsageRecord, ContextError, Garment, GarmentCategory,
    GarmentId, GarmentKind, GarmentType, OutfitSlot, SlotPlan, SlotPlanError, SlotRequirement,
    WearerId, WeatherCondition, WeatherReading,
};
pub use history::tally_wear_events;
pub use repository::{RepositoryError, WardrobeRepository, WardrobeSnapshot};
pub use router::outfit_router;
pub use scoring::{GarmentScore, ScoreSignal, ScoringEngine};
pub use selector::{OutfitEntry, OutfitSelector, RankedOutfit, SlotRanking};
pub use service::{
    OutfitRecommendation, OutfitRequest, RecommendationError, RecommendationService,
};
