//! End-to-end scenarios through the public importer, repository seam, and service facade.

use std::sync::Arc;

use wardrobe::outfits::{
    AmbientContext, ColorHistories, ColorUsageRecord, Garment, GarmentCategory, GarmentKind,
    OutfitRequest, OutfitSlot, RecommendationService, RepositoryError, WardrobeImporter,
    WardrobeInventory, WardrobeRepository, WearerId, WeatherReading,
};

struct CsvWardrobe {
    inventory: WardrobeInventory,
    histories: ColorHistories,
}

impl CsvWardrobe {
    fn sample() -> Self {
        let inventory =
            WardrobeImporter::garments_from_reader(&include_bytes!("../../../data/garments.csv")[..])
                .expect("sample garments import");
        let histories =
            WardrobeImporter::wear_log_from_reader(&include_bytes!("../../../data/wear_log.csv")[..])
                .expect("sample wear log imports");
        Self {
            inventory,
            histories,
        }
    }
}

impl WardrobeRepository for CsvWardrobe {
    fn garments(&self, wearer_id: &WearerId) -> Result<Vec<Garment>, RepositoryError> {
        Ok(self.inventory.get(wearer_id).cloned().unwrap_or_default())
    }

    fn color_usage(&self, wearer_id: &WearerId) -> Result<ColorUsageRecord, RepositoryError> {
        Ok(self.histories.get(wearer_id).cloned().unwrap_or_default())
    }
}

fn wearer(id: &str) -> WearerId {
    WearerId(id.to_string())
}

fn request(temperature: i32, humidity: u8, weather: &str) -> OutfitRequest {
    OutfitRequest::new(AmbientContext::new(
        Some(temperature),
        Some(humidity),
        Some(WeatherReading::from(weather)),
    ))
}

#[test]
fn sample_wear_log_is_ordered_by_frequency() {
    let wardrobe = CsvWardrobe::sample();
    let history = wardrobe.color_usage(&wearer("ana")).expect("history");
    let colors: Vec<&str> = history
        .entries()
        .iter()
        .map(|entry| entry.color.as_str())
        .collect();

    assert_eq!(colors, vec!["black", "white", "blue", "navy", "red", "camel"]);
}

#[test]
fn cold_rainy_day_dresses_ana_for_the_weather() {
    let service = RecommendationService::new(Arc::new(CsvWardrobe::sample()));

    let recommendation = service
        .recommend(&wearer("ana"), &request(6, 88, "Rain"))
        .expect("recommendation succeeds");
    let outfit = &recommendation.outfit;

    assert!(recommendation.complete);
    assert_eq!(outfit.entries.len(), 7);

    let outerwear = outfit.entry_for(OutfitSlot::Outerwear).expect("outerwear");
    assert_eq!(outerwear.garment_id.as_str(), "ana-jacket-01");
    assert_eq!(outerwear.composite_score, 36);

    let foot = outfit.entry_for(OutfitSlot::Foot).expect("footwear");
    assert_eq!(foot.garment_id.as_str(), "ana-boots-01");
    assert_eq!(foot.composite_score, 38);

    let lower = outfit.entry_for(OutfitSlot::LowerBody).expect("bottom");
    assert_eq!(lower.garment_id.as_str(), "ana-jeans-01");

    assert_eq!(recommendation.total_score, 166);
}

#[test]
fn warm_clear_day_reports_gaps_for_a_small_wardrobe() {
    let service = RecommendationService::new(Arc::new(CsvWardrobe::sample()));

    let recommendation = service
        .recommend(&wearer("ben"), &request(24, 40, "sunny"))
        .expect("recommendation succeeds");
    let outfit = &recommendation.outfit;

    assert!(!recommendation.complete);
    assert_eq!(
        outfit.gaps,
        vec![
            OutfitSlot::Head,
            OutfitSlot::Neck,
            OutfitSlot::Outerwear,
            OutfitSlot::Hand
        ]
    );
    assert_eq!(
        outfit
            .entry_for(OutfitSlot::UpperBody)
            .expect("top")
            .garment_id
            .as_str(),
        "ben-tee-01"
    );
    assert_eq!(recommendation.total_score, 60);
}

#[test]
fn unrecognized_garment_types_still_fill_their_slot() {
    let wardrobe = CsvWardrobe::sample();
    let garments = wardrobe.garments(&wearer("ben")).expect("garments");
    let cargo = garments
        .iter()
        .find(|garment| garment.id.as_str() == "ben-cargo-01")
        .expect("cargo pants imported");
    assert_eq!(cargo.kind, GarmentKind::Unrecognized("cargo pants".to_string()));
    assert_eq!(cargo.category, GarmentCategory::Bottom);

    let service = RecommendationService::new(Arc::new(wardrobe));
    let recommendation = service
        .recommend(&wearer("ben"), &request(24, 40, "clear"))
        .expect("recommendation succeeds");
    let lower = recommendation
        .outfit
        .entry_for(OutfitSlot::LowerBody)
        .expect("bottom filled");
    assert_eq!(lower.garment_id.as_str(), "ben-cargo-01");
    assert_eq!(lower.composite_score, 5);
}

#[test]
fn recommendation_serializes_for_callers() {
    let service = RecommendationService::new(Arc::new(CsvWardrobe::sample()));
    let mut request = request(6, 88, "rain");
    request.include_breakdown = Some(true);

    let recommendation = service
        .recommend(&wearer("ana"), &request)
        .expect("recommendation succeeds");
    let json = serde_json::to_value(&recommendation).expect("serializes");

    assert_eq!(json["wearer_id"], "ana");
    assert_eq!(json["entries"][0]["slot"], "head");
    let head_candidates = json["rankings"][0]["candidates"]
        .as_array()
        .expect("candidates");
    assert_eq!(head_candidates[0]["garment_type"], "hat");
    assert_eq!(head_candidates[0]["composite_score"], 24);
}
