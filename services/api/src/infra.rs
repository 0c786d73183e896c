use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, RwLock};
use tracing::{info, warn};
use wardrobe::config::WardrobeConfig;
use wardrobe::outfits::{
    CatalogImportError, ColorHistories, ColorUsageRecord, Garment, RepositoryError,
    WardrobeImporter, WardrobeInventory, WardrobeRepository, WearerId,
};

pub(crate) const SAMPLE_GARMENTS_CSV: &str = include_str!("../../../data/garments.csv");
pub(crate) const SAMPLE_WEAR_LOG_CSV: &str = include_str!("../../../data/wear_log.csv");

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Wardrobes held in memory, keyed by wearer. Unknown wearers own nothing.
#[derive(Default, Clone)]
pub(crate) struct InMemoryWardrobeRepository {
    inventory: Arc<RwLock<WardrobeInventory>>,
    histories: Arc<RwLock<ColorHistories>>,
}

impl InMemoryWardrobeRepository {
    pub(crate) fn new(inventory: WardrobeInventory, histories: ColorHistories) -> Self {
        Self {
            inventory: Arc::new(RwLock::new(inventory)),
            histories: Arc::new(RwLock::new(histories)),
        }
    }

    pub(crate) fn sample() -> Result<Self, CatalogImportError> {
        let inventory = WardrobeImporter::garments_from_reader(SAMPLE_GARMENTS_CSV.as_bytes())?;
        let histories = WardrobeImporter::wear_log_from_reader(SAMPLE_WEAR_LOG_CSV.as_bytes())?;
        Ok(Self::new(inventory, histories))
    }

    /// Loads the CSV exports named in config. Without a garments export the repository starts empty.
    pub(crate) fn from_config(config: &WardrobeConfig) -> Result<Self, CatalogImportError> {
        let inventory = match &config.garments_csv {
            Some(path) => WardrobeImporter::garments_from_path(path)?,
            None => {
                warn!("APP_WARDROBE_CSV not set, serving an empty wardrobe");
                WardrobeInventory::new()
            }
        };
        let histories = match &config.wear_log_csv {
            Some(path) => WardrobeImporter::wear_log_from_path(path)?,
            None => ColorHistories::new(),
        };
        info!(
            wearers = inventory.len(),
            histories = histories.len(),
            "wardrobe repository loaded"
        );
        Ok(Self::new(inventory, histories))
    }

    pub(crate) fn wearers(&self) -> Vec<WearerId> {
        self.inventory
            .read()
            .map(|guard| guard.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl WardrobeRepository for InMemoryWardrobeRepository {
    fn garments(&self, wearer_id: &WearerId) -> Result<Vec<Garment>, RepositoryError> {
        let guard = self
            .inventory
            .read()
            .map_err(|_| RepositoryError::Unavailable("inventory lock poisoned".to_string()))?;
        Ok(guard.get(wearer_id).cloned().unwrap_or_default())
    }

    fn color_usage(&self, wearer_id: &WearerId) -> Result<ColorUsageRecord, RepositoryError> {
        let guard = self
            .histories
            .read()
            .map_err(|_| RepositoryError::Unavailable("history lock poisoned".to_string()))?;
        Ok(guard.get(wearer_id).cloned().unwrap_or_default())
    }
}
