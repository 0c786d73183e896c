use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for a garment in a wearer's inventory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GarmentId(pub String);

impl GarmentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier wrapper for the person owning a wardrobe.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WearerId(pub String);

/// Closed set of garment types the scoring tables know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GarmentType {
    Hat,
    Shirt,
    Jacket,
    Shoes,
    Socks,
    Scarf,
    Gloves,
    Shorts,
    Skirt,
    Dress,
    Blouse,
    Sweater,
    Hoodie,
    Coat,
    Vest,
    TShirt,
    Jeans,
    Leggings,
    Boots,
    Sandals,
    Sneakers,
    Raincoat,
    Poncho,
    Cardigan,
    Pants,
}

impl GarmentType {
    pub const ALL: [GarmentType; 25] = [
        GarmentType::Hat,
        GarmentType::Shirt,
        GarmentType::Jacket,
        GarmentType::Shoes,
        GarmentType::Socks,
        GarmentType::Scarf,
        GarmentType::Gloves,
        GarmentType::Shorts,
        GarmentType::Skirt,
        GarmentType::Dress,
        GarmentType::Blouse,
        GarmentType::Sweater,
        GarmentType::Hoodie,
        GarmentType::Coat,
        GarmentType::Vest,
        GarmentType::TShirt,
        GarmentType::Jeans,
        GarmentType::Leggings,
        GarmentType::Boots,
        GarmentType::Sandals,
        GarmentType::Sneakers,
        GarmentType::Raincoat,
        GarmentType::Poncho,
        GarmentType::Cardigan,
        GarmentType::Pants,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GarmentType::Hat => "hat",
            GarmentType::Shirt => "shirt",
            GarmentType::Jacket => "jacket",
            GarmentType::Shoes => "shoes",
            GarmentType::Socks => "socks",
            GarmentType::Scarf => "scarf",
            GarmentType::Gloves => "gloves",
            GarmentType::Shorts => "shorts",
            GarmentType::Skirt => "skirt",
            GarmentType::Dress => "dress",
            GarmentType::Blouse => "blouse",
            GarmentType::Sweater => "sweater",
            GarmentType::Hoodie => "hoodie",
            GarmentType::Coat => "coat",
            GarmentType::Vest => "vest",
            GarmentType::TShirt => "t-shirt",
            GarmentType::Jeans => "jeans",
            GarmentType::Leggings => "leggings",
            GarmentType::Boots => "boots",
            GarmentType::Sandals => "sandals",
            GarmentType::Sneakers => "sneakers",
            GarmentType::Raincoat => "raincoat",
            GarmentType::Poncho => "poncho",
            GarmentType::Cardigan => "cardigan",
            GarmentType::Pants => "pants",
        }
    }

    /// Case-insensitive lookup; returns `None` for labels outside the closed set.
    pub fn from_label(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        match normalized.as_str() {
            "tshirt" | "t_shirt" | "tee" => Some(GarmentType::TShirt),
            other => GarmentType::ALL
                .iter()
                .copied()
                .find(|kind| kind.label() == other),
        }
    }

    /// Category a garment of this type falls into when the catalog does not say otherwise.
    pub fn default_category(self) -> GarmentCategory {
        match self {
            GarmentType::Hat => GarmentCategory::Headwear,
            GarmentType::Scarf => GarmentCategory::Neckwear,
            GarmentType::Shirt
            | GarmentType::Blouse
            | GarmentType::Sweater
            | GarmentType::Hoodie
            | GarmentType::TShirt
            | GarmentType::Cardigan
            | GarmentType::Vest => GarmentCategory::Top,
            GarmentType::Jacket | GarmentType::Coat | GarmentType::Raincoat | GarmentType::Poncho => {
                GarmentCategory::Outerwear
            }
            GarmentType::Shorts
            | GarmentType::Skirt
            | GarmentType::Jeans
            | GarmentType::Leggings
            | GarmentType::Pants => GarmentCategory::Bottom,
            GarmentType::Dress => GarmentCategory::OnePiece,
            GarmentType::Socks => GarmentCategory::Hosiery,
            GarmentType::Gloves => GarmentCategory::Handwear,
            GarmentType::Shoes | GarmentType::Boots | GarmentType::Sandals | GarmentType::Sneakers => {
                GarmentCategory::Footwear
            }
        }
    }
}

/// Garment type as received from a collaborator. Unknown labels are carried through so the
/// scorers can apply their documented defaults instead of rejecting the garment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GarmentKind {
    Known(GarmentType),
    Unrecognized(String),
}

impl GarmentKind {
    pub fn known(&self) -> Option<GarmentType> {
        match self {
            GarmentKind::Known(kind) => Some(*kind),
            GarmentKind::Unrecognized(_) => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            GarmentKind::Known(kind) => kind.label(),
            GarmentKind::Unrecognized(label) => label,
        }
    }
}

impl From<&str> for GarmentKind {
    fn from(raw: &str) -> Self {
        match GarmentType::from_label(raw) {
            Some(kind) => GarmentKind::Known(kind),
            None => GarmentKind::Unrecognized(raw.trim().to_lowercase()),
        }
    }
}

impl From<String> for GarmentKind {
    fn from(raw: String) -> Self {
        GarmentKind::from(raw.as_str())
    }
}

impl From<GarmentType> for GarmentKind {
    fn from(kind: GarmentType) -> Self {
        GarmentKind::Known(kind)
    }
}

impl From<GarmentKind> for String {
    fn from(kind: GarmentKind) -> Self {
        kind.label().to_string()
    }
}

/// Weather categories reported by the upstream weather provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Clouds,
    Rain,
    Clear,
    Snow,
    Mist,
    Thunderstorm,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 6] = [
        WeatherCondition::Clouds,
        WeatherCondition::Rain,
        WeatherCondition::Clear,
        WeatherCondition::Snow,
        WeatherCondition::Mist,
        WeatherCondition::Thunderstorm,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WeatherCondition::Clouds => "clouds",
            WeatherCondition::Rain => "rain",
            WeatherCondition::Clear => "clear",
            WeatherCondition::Snow => "snow",
            WeatherCondition::Mist => "mist",
            WeatherCondition::Thunderstorm => "thunderstorm",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "clouds" | "cloudy" | "overcast" => Some(WeatherCondition::Clouds),
            "rain" | "rainy" | "drizzle" => Some(WeatherCondition::Rain),
            "clear" | "sunny" => Some(WeatherCondition::Clear),
            "snow" | "snowy" => Some(WeatherCondition::Snow),
            "mist" | "fog" | "haze" => Some(WeatherCondition::Mist),
            "thunderstorm" | "storm" => Some(WeatherCondition::Thunderstorm),
            _ => None,
        }
    }
}

/// Weather signal as received, normalized to lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WeatherReading {
    Known(WeatherCondition),
    Unrecognized(String),
}

impl WeatherReading {
    pub fn label(&self) -> &str {
        match self {
            WeatherReading::Known(condition) => condition.label(),
            WeatherReading::Unrecognized(label) => label,
        }
    }
}

impl From<&str> for WeatherReading {
    fn from(raw: &str) -> Self {
        match WeatherCondition::from_label(raw) {
            Some(condition) => WeatherReading::Known(condition),
            None => WeatherReading::Unrecognized(raw.trim().to_lowercase()),
        }
    }
}

impl From<String> for WeatherReading {
    fn from(raw: String) -> Self {
        WeatherReading::from(raw.as_str())
    }
}

impl From<WeatherCondition> for WeatherReading {
    fn from(condition: WeatherCondition) -> Self {
        WeatherReading::Known(condition)
    }
}

impl From<WeatherReading> for String {
    fn from(reading: WeatherReading) -> Self {
        reading.label().to_string()
    }
}

/// Ambient conditions for a recommendation. A `None` field means the signal does not apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmbientContext {
    #[serde(default)]
    pub temperature: Option<i32>,
    #[serde(default)]
    pub humidity: Option<u8>,
    #[serde(default)]
    pub weather: Option<WeatherReading>,
}

impl AmbientContext {
    pub fn new(
        temperature: Option<i32>,
        humidity: Option<u8>,
        weather: Option<WeatherReading>,
    ) -> Self {
        Self {
            temperature,
            humidity,
            weather,
        }
    }

    /// Boundary check for callers; the scorers themselves accept any value.
    pub fn validate(&self) -> Result<(), ContextError> {
        match self.humidity {
            Some(humidity) if humidity > 100 => Err(ContextError::HumidityOutOfRange(humidity)),
            _ => Ok(()),
        }
    }
}

/// Contract violations detected before a context reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    #[error("humidity must be a percentage between 0 and 100, got {0}")]
    HumidityOutOfRange(u8),
}

/// Catalog grouping used to decide which slot a garment can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GarmentCategory {
    Headwear,
    Neckwear,
    Top,
    Outerwear,
    Bottom,
    OnePiece,
    Hosiery,
    Handwear,
    Footwear,
}

impl GarmentCategory {
    pub fn label(self) -> &'static str {
        match self {
            GarmentCategory::Headwear => "headwear",
            GarmentCategory::Neckwear => "neckwear",
            GarmentCategory::Top => "top",
            GarmentCategory::Outerwear => "outerwear",
            GarmentCategory::Bottom => "bottom",
            GarmentCategory::OnePiece => "one_piece",
            GarmentCategory::Hosiery => "hosiery",
            GarmentCategory::Handwear => "handwear",
            GarmentCategory::Footwear => "footwear",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "headwear" => Some(GarmentCategory::Headwear),
            "neckwear" => Some(GarmentCategory::Neckwear),
            "top" => Some(GarmentCategory::Top),
            "outerwear" => Some(GarmentCategory::Outerwear),
            "bottom" => Some(GarmentCategory::Bottom),
            "one_piece" => Some(GarmentCategory::OnePiece),
            "hosiery" => Some(GarmentCategory::Hosiery),
            "handwear" => Some(GarmentCategory::Handwear),
            "footwear" => Some(GarmentCategory::Footwear),
            _ => None,
        }
    }
}

/// Single inventory item handed to the engine by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Garment {
    pub id: GarmentId,
    pub kind: GarmentKind,
    pub color: String,
    pub category: GarmentCategory,
    #[serde(default)]
    pub added_at: Option<DateTime<Utc>>,
}

impl Garment {
    pub fn new(id: impl Into<String>, kind: GarmentType, color: impl Into<String>) -> Self {
        Self {
            id: GarmentId(id.into()),
            kind: GarmentKind::Known(kind),
            color: color.into(),
            category: kind.default_category(),
            added_at: None,
        }
    }

    pub fn with_category(mut self, category: GarmentCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_added_at(mut self, added_at: DateTime<Utc>) -> Self {
        self.added_at = Some(added_at);
        self
    }
}

/// How often a wearer has worn a given color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorUsage {
    pub color: String,
    pub usage_count: u32,
}

impl ColorUsage {
    pub fn new(color: impl Into<String>, usage_count: u32) -> Self {
        Self {
            color: color.into(),
            usage_count,
        }
    }
}

/// Frequency-ordered color history. The order is taken as given and never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorUsageRecord(Vec<ColorUsage>);

impl ColorUsageRecord {
    pub fn new(entries: Vec<ColorUsage>) -> Self {
        Self(entries)
    }

    pub fn entries(&self) -> &[ColorUsage] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 1-based position of the first entry matching `color`, ignoring case.
    pub fn rank_of(&self, color: &str) -> Option<usize> {
        let needle = color.to_lowercase();
        self.0
            .iter()
            .position(|entry| entry.color.to_lowercase() == needle)
            .map(|index| index + 1)
    }
}

impl FromIterator<ColorUsage> for ColorUsageRecord {
    fn from_iter<I: IntoIterator<Item = ColorUsage>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Position in an outfit that one garment fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutfitSlot {
    Head,
    Neck,
    UpperBody,
    Outerwear,
    LowerBody,
    Hand,
    Foot,
}

impl OutfitSlot {
    pub fn label(self) -> &'static str {
        match self {
            OutfitSlot::Head => "head",
            OutfitSlot::Neck => "neck",
            OutfitSlot::UpperBody => "upper body",
            OutfitSlot::Outerwear => "outerwear",
            OutfitSlot::LowerBody => "lower body",
            OutfitSlot::Hand => "hand",
            OutfitSlot::Foot => "foot",
        }
    }
}

/// Categories that may fill a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRequirement {
    pub slot: OutfitSlot,
    pub categories: Vec<GarmentCategory>,
}

impl SlotRequirement {
    pub fn new(slot: OutfitSlot, categories: impl Into<Vec<GarmentCategory>>) -> Self {
        Self {
            slot,
            categories: categories.into(),
        }
    }

    pub fn accepts(&self, category: GarmentCategory) -> bool {
        self.categories.contains(&category)
    }
}

/// Ordered slot-to-category mapping. Earlier slots claim garments first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotPlan(Vec<SlotRequirement>);

impl SlotPlan {
    pub fn new(requirements: Vec<SlotRequirement>) -> Self {
        Self(requirements)
    }

    /// Seven-slot default. No slot accepts hosiery, so socks only appear under a custom plan
    /// that names the category.
    pub fn standard() -> Self {
        Self(vec![
            SlotRequirement::new(OutfitSlot::Head, [GarmentCategory::Headwear]),
            SlotRequirement::new(OutfitSlot::Neck, [GarmentCategory::Neckwear]),
            SlotRequirement::new(
                OutfitSlot::UpperBody,
                [GarmentCategory::Top, GarmentCategory::OnePiece],
            ),
            SlotRequirement::new(OutfitSlot::Outerwear, [GarmentCategory::Outerwear]),
            SlotRequirement::new(OutfitSlot::LowerBody, [GarmentCategory::Bottom]),
            SlotRequirement::new(OutfitSlot::Hand, [GarmentCategory::Handwear]),
            SlotRequirement::new(OutfitSlot::Foot, [GarmentCategory::Footwear]),
        ])
    }

    pub fn requirements(&self) -> &[SlotRequirement] {
        &self.0
    }

    pub fn validate(&self) -> Result<(), SlotPlanError> {
        if self.0.is_empty() {
            return Err(SlotPlanError::Empty);
        }

        for (index, requirement) in self.0.iter().enumerate() {
            if requirement.categories.is_empty() {
                return Err(SlotPlanError::NoCategories(requirement.slot));
            }
            if self.0[..index]
                .iter()
                .any(|earlier| earlier.slot == requirement.slot)
            {
                return Err(SlotPlanError::DuplicateSlot(requirement.slot));
            }
        }

        Ok(())
    }
}

impl Default for SlotPlan {
    fn default() -> Self {
        Self::standard()
    }
}

/// Malformed slot plans rejected at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlotPlanError {
    #[error("slot plan must name at least one slot")]
    Empty,
    #[error("slot {0:?} does not list any garment category")]
    NoCategories(OutfitSlot),
    #[error("slot {0:?} appears more than once")]
    DuplicateSlot(OutfitSlot),
}
