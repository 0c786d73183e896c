use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};

use crate::outfits::domain::{
    AmbientContext, ColorUsage, ColorUsageRecord, Garment, GarmentCategory, GarmentId,
    GarmentKind, GarmentType, WearerId, WeatherCondition, WeatherReading,
};
use crate::outfits::repository::{RepositoryError, WardrobeRepository};
use crate::outfits::service::RecommendationService;

pub(super) fn day(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn context(
    temperature: Option<i32>,
    humidity: Option<u8>,
    weather: Option<&str>,
) -> AmbientContext {
    AmbientContext::new(temperature, humidity, weather.map(WeatherReading::from))
}

pub(super) fn rainy_cold() -> AmbientContext {
    AmbientContext::new(
        Some(12),
        Some(85),
        Some(WeatherReading::Known(WeatherCondition::Rain)),
    )
}

pub(super) fn history(colors: &[&str]) -> ColorUsageRecord {
    let total = colors.len() as u32;
    colors
        .iter()
        .enumerate()
        .map(|(index, color)| ColorUsage::new(*color, (total - index as u32) * 3))
        .collect()
}

pub(super) fn unknown_garment(id: &str, label: &str, category: GarmentCategory) -> Garment {
    Garment {
        id: GarmentId(id.to_string()),
        kind: GarmentKind::from(label),
        color: "grey".to_string(),
        category,
        added_at: None,
    }
}

/// Small mixed wardrobe covering every slot of the standard plan except hands.
pub(super) fn wardrobe() -> Vec<Garment> {
    vec![
        Garment::new("hat-wool", GarmentType::Hat, "black").with_added_at(day(1)),
        Garment::new("scarf-knit", GarmentType::Scarf, "red"),
        Garment::new("tee-white", GarmentType::TShirt, "white").with_added_at(day(2)),
        Garment::new("sweater-navy", GarmentType::Sweater, "blue").with_added_at(day(3)),
        Garment::new("raincoat-yellow", GarmentType::Raincoat, "yellow"),
        Garment::new("jacket-denim", GarmentType::Jacket, "blue").with_added_at(day(4)),
        Garment::new("jeans-dark", GarmentType::Jeans, "blue"),
        Garment::new("shorts-khaki", GarmentType::Shorts, "beige"),
        Garment::new("boots-leather", GarmentType::Boots, "black"),
        Garment::new("sandals-summer", GarmentType::Sandals, "brown"),
    ]
}

#[derive(Default, Clone)]
pub(super) struct MemoryWardrobe {
    pub(super) garments: Arc<Mutex<HashMap<WearerId, Vec<Garment>>>>,
    pub(super) colors: Arc<Mutex<HashMap<WearerId, ColorUsageRecord>>>,
}

impl MemoryWardrobe {
    pub(super) fn with_wearer(
        wearer_id: &str,
        garments: Vec<Garment>,
        colors: ColorUsageRecord,
    ) -> Self {
        let repository = Self::default();
        let wearer_id = WearerId(wearer_id.to_string());
        repository
            .garments
            .lock()
            .expect("wardrobe mutex poisoned")
            .insert(wearer_id.clone(), garments);
        repository
            .colors
            .lock()
            .expect("wardrobe mutex poisoned")
            .insert(wearer_id, colors);
        repository
    }
}

impl WardrobeRepository for MemoryWardrobe {
    fn garments(&self, wearer_id: &WearerId) -> Result<Vec<Garment>, RepositoryError> {
        let guard = self.garments.lock().expect("wardrobe mutex poisoned");
        Ok(guard.get(wearer_id).cloned().unwrap_or_default())
    }

    fn color_usage(&self, wearer_id: &WearerId) -> Result<ColorUsageRecord, RepositoryError> {
        let guard = self.colors.lock().expect("wardrobe mutex poisoned");
        Ok(guard.get(wearer_id).cloned().unwrap_or_default())
    }
}

pub(super) struct UnavailableWardrobe;

impl WardrobeRepository for UnavailableWardrobe {
    fn garments(&self, _wearer_id: &WearerId) -> Result<Vec<Garment>, RepositoryError> {
        Err(RepositoryError::Unavailable("inventory store offline".to_string()))
    }

    fn color_usage(&self, _wearer_id: &WearerId) -> Result<ColorUsageRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("inventory store offline".to_string()))
    }
}

pub(super) fn build_service() -> RecommendationService<MemoryWardrobe> {
    let repository = MemoryWardrobe::with_wearer(
        "wearer-1",
        wardrobe(),
        history(&["black", "blue", "white", "red"]),
    );
    RecommendationService::new(Arc::new(repository))
}
