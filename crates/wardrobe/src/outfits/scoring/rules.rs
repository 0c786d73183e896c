use tracing::debug;

use super::super::domain::{GarmentKind, WeatherReading};
use super::tables::{humidity_rule, temperature_rule, weather_affinity, WEATHER_MISS_SCORE};

/// Temperature fit in [0, 10]. Missing readings and garments outside the table score 0.
pub fn temperature_score(kind: &GarmentKind, temperature: Option<i32>) -> u8 {
    let Some(temperature) = temperature else {
        return 0;
    };

    match kind {
        GarmentKind::Known(garment) => temperature_rule(*garment)
            .map(|rule| rule.apply(temperature))
            .unwrap_or(0),
        GarmentKind::Unrecognized(label) => {
            debug!(garment_type = %label, "unknown garment type in temperature table");
            0
        }
    }
}

/// Humidity fit in [0, 10]. Missing readings and garments outside the table score 0.
pub fn humidity_score(kind: &GarmentKind, humidity: Option<u8>) -> u8 {
    let Some(humidity) = humidity else {
        return 0;
    };

    match kind {
        GarmentKind::Known(garment) => humidity_rule(*garment)
            .map(|rule| rule.apply(i32::from(humidity)))
            .unwrap_or(0),
        GarmentKind::Unrecognized(label) => {
            debug!(garment_type = %label, "unknown garment type in humidity table");
            0
        }
    }
}

/// Weather-category fit in [0, 10].
///
/// A missing reading scores 0. A reading or garment that the table does not cover scores the
/// neutral 5 instead.
pub fn weather_score(kind: &GarmentKind, weather: Option<&WeatherReading>) -> u8 {
    let Some(reading) = weather else {
        return 0;
    };

    let condition = match reading {
        WeatherReading::Known(condition) => *condition,
        WeatherReading::Unrecognized(label) => {
            debug!(weather = %label, "unknown weather category, using neutral score");
            return WEATHER_MISS_SCORE;
        }
    };

    match kind {
        GarmentKind::Known(garment) => {
            weather_affinity(condition, *garment).unwrap_or(WEATHER_MISS_SCORE)
        }
        GarmentKind::Unrecognized(label) => {
            debug!(
                garment_type = %label,
                weather = condition.label(),
                "unknown garment type in weather table, using neutral score"
            );
            WEATHER_MISS_SCORE
        }
    }
}
