mod color;
mod rules;
mod tables;

pub use color::color_score;
pub use rules::{humidity_score, temperature_score, weather_score};

use super::domain::{AmbientContext, ColorUsageRecord, Garment, GarmentId, GarmentKind};
use serde::{Deserialize, Serialize};

/// Upper bound of every individual signal score.
pub const MAX_SIGNAL_SCORE: u8 = 10;

/// Upper bound of the composite score (four signals summed).
pub const MAX_COMPOSITE_SCORE: u8 = 4 * MAX_SIGNAL_SCORE;

/// Signals that feed the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSignal {
    Temperature,
    Humidity,
    Weather,
    Color,
}

/// Stateless scorer combining the attribute scorers and the color ranker.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn score(
        &self,
        garment: &Garment,
        context: &AmbientContext,
        history: &ColorUsageRecord,
    ) -> GarmentScore {
        let temperature_score = temperature_score(&garment.kind, context.temperature);
        let humidity_score = humidity_score(&garment.kind, context.humidity);
        let weather_score = weather_score(&garment.kind, context.weather.as_ref());
        let color_score = color_score(&garment.color, history);

        GarmentScore {
            garment_id: garment.id.clone(),
            garment_type: garment.kind.clone(),
            temperature_score,
            humidity_score,
            weather_score,
            color_score,
            composite_score: composite(
                temperature_score,
                humidity_score,
                weather_score,
                color_score,
            ),
        }
    }
}

/// Unweighted sum of the four signals, in [0, 40].
pub fn composite(temperature: u8, humidity: u8, weather: u8, color: u8) -> u8 {
    temperature
        .saturating_add(humidity)
        .saturating_add(weather)
        .saturating_add(color)
}

/// Per-garment breakdown, recomputed on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GarmentScore {
    pub garment_id: GarmentId,
    pub garment_type: GarmentKind,
    pub temperature_score: u8,
    pub humidity_score: u8,
    pub weather_score: u8,
    pub color_score: u8,
    pub composite_score: u8,
}

impl GarmentScore {
    pub fn components(&self) -> [(ScoreSignal, u8); 4] {
        [
            (ScoreSignal::Temperature, self.temperature_score),
            (ScoreSignal::Humidity, self.humidity_score),
            (ScoreSignal::Weather, self.weather_score),
            (ScoreSignal::Color, self.color_score),
        ]
    }
}
