use serde::Serialize;

use super::domain::{ColorUsageRecord, Garment, WearerId};

/// Storage seam delivering a wearer's inventory and pre-aggregated color history.
///
/// Implementations return the history already ordered by usage count; the engine never
/// re-sorts it.
pub trait WardrobeRepository: Send + Sync {
    fn garments(&self, wearer_id: &WearerId) -> Result<Vec<Garment>, RepositoryError>;
    fn color_usage(&self, wearer_id: &WearerId) -> Result<ColorUsageRecord, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Inputs fetched for one recommendation request.
#[derive(Debug, Clone, Serialize)]
pub struct WardrobeSnapshot {
    pub wearer_id: WearerId,
    pub garments: Vec<Garment>,
    pub color_usage: ColorUsageRecord,
}

impl WardrobeSnapshot {
    pub fn fetch<R>(repository: &R, wearer_id: &WearerId) -> Result<Self, RepositoryError>
    where
        R: WardrobeRepository + ?Sized,
    {
        Ok(Self {
            wearer_id: wearer_id.clone(),
            garments: repository.garments(wearer_id)?,
            color_usage: repository.color_usage(wearer_id)?,
        })
    }
}
