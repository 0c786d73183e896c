use super::super::domain::{GarmentType, WeatherCondition};

/// Score returned by the weather table when a category or garment has no entry.
pub(crate) const WEATHER_MISS_SCORE: u8 = 5;

/// Predicate over an integer reading. Bounds are inclusive unless the variant says otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Threshold {
    /// `value < limit`
    Below(i32),
    /// `value <= limit`
    AtMost(i32),
    /// `value >= limit`
    AtLeast(i32),
    /// `low <= value <= high`
    Between(i32, i32),
}

impl Threshold {
    pub(crate) fn matches(self, value: i32) -> bool {
        match self {
            Threshold::Below(limit) => value < limit,
            Threshold::AtMost(limit) => value <= limit,
            Threshold::AtLeast(limit) => value >= limit,
            Threshold::Between(low, high) => (low..=high).contains(&value),
        }
    }
}

/// Threshold predicate with the score awarded on a hit and the score otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ThresholdRule {
    pub(crate) threshold: Threshold,
    pub(crate) hit: u8,
    pub(crate) otherwise: u8,
}

impl ThresholdRule {
    const fn new(threshold: Threshold, hit: u8, otherwise: u8) -> Self {
        Self {
            threshold,
            hit,
            otherwise,
        }
    }

    pub(crate) fn apply(self, value: i32) -> u8 {
        if self.threshold.matches(value) {
            self.hit
        } else {
            self.otherwise
        }
    }
}

/// Temperature rules in °C. `None` means the garment is temperature-neutral and scores 0.
pub(crate) const fn temperature_rule(kind: GarmentType) -> Option<ThresholdRule> {
    use Threshold::*;

    let rule = match kind {
        GarmentType::Hat => ThresholdRule::new(Below(10), 8, 3),
        GarmentType::Shirt => ThresholdRule::new(Between(15, 25), 8, 4),
        GarmentType::Jacket => ThresholdRule::new(Below(20), 10, 0),
        GarmentType::Shoes => ThresholdRule::new(Between(0, 30), 6, 3),
        GarmentType::Socks => ThresholdRule::new(Below(25), 6, 3),
        GarmentType::Scarf => ThresholdRule::new(Below(10), 10, 0),
        GarmentType::Gloves => ThresholdRule::new(Below(5), 10, 0),
        GarmentType::Shorts => ThresholdRule::new(AtLeast(25), 10, 0),
        GarmentType::Skirt => ThresholdRule::new(AtLeast(20), 8, 2),
        GarmentType::Dress => ThresholdRule::new(Between(20, 30), 9, 3),
        GarmentType::Blouse => ThresholdRule::new(Between(18, 28), 8, 4),
        GarmentType::Sweater => ThresholdRule::new(Below(15), 10, 2),
        GarmentType::Hoodie => ThresholdRule::new(Between(5, 18), 9, 3),
        GarmentType::Coat => ThresholdRule::new(Below(10), 10, 0),
        GarmentType::Vest => ThresholdRule::new(Between(10, 20), 7, 3),
        GarmentType::TShirt => ThresholdRule::new(Between(20, 30), 10, 5),
        GarmentType::Jeans => ThresholdRule::new(Below(25), 8, 4),
        GarmentType::Leggings => ThresholdRule::new(Below(18), 7, 3),
        GarmentType::Boots => ThresholdRule::new(Below(10), 10, 3),
        GarmentType::Sandals => ThresholdRule::new(AtLeast(25), 10, 0),
        GarmentType::Sneakers => ThresholdRule::new(Between(10, 28), 8, 5),
        GarmentType::Cardigan => ThresholdRule::new(Between(10, 20), 8, 3),
        GarmentType::Pants => ThresholdRule::new(Below(22), 7, 4),
        GarmentType::Raincoat | GarmentType::Poncho => return None,
    };

    Some(rule)
}

/// Relative humidity rules in percent. `None` means humidity does not affect the garment.
pub(crate) const fn humidity_rule(kind: GarmentType) -> Option<ThresholdRule> {
    use Threshold::*;

    let rule = match kind {
        GarmentType::Coat => ThresholdRule::new(AtLeast(70), 10, 5),
        GarmentType::Jacket => ThresholdRule::new(AtLeast(60), 8, 5),
        GarmentType::Raincoat => ThresholdRule::new(AtLeast(80), 10, 2),
        GarmentType::Poncho => ThresholdRule::new(AtLeast(80), 9, 2),
        GarmentType::Boots => ThresholdRule::new(AtLeast(70), 9, 5),
        GarmentType::TShirt => ThresholdRule::new(AtMost(60), 8, 4),
        GarmentType::Shirt => ThresholdRule::new(AtMost(65), 7, 4),
        GarmentType::Blouse => ThresholdRule::new(AtMost(60), 7, 4),
        GarmentType::Shorts => ThresholdRule::new(AtMost(60), 8, 3),
        GarmentType::Skirt => ThresholdRule::new(AtMost(60), 7, 4),
        GarmentType::Dress => ThresholdRule::new(AtMost(60), 7, 4),
        GarmentType::Sweater => ThresholdRule::new(Below(70), 7, 3),
        GarmentType::Hoodie => ThresholdRule::new(Below(75), 7, 4),
        GarmentType::Sandals => ThresholdRule::new(Below(70), 8, 2),
        GarmentType::Sneakers => ThresholdRule::new(Below(80), 7, 3),
        GarmentType::Jeans => ThresholdRule::new(Below(75), 6, 3),
        GarmentType::Leggings => ThresholdRule::new(Between(30, 70), 7, 4),
        GarmentType::Socks => ThresholdRule::new(AtMost(70), 6, 3),
        GarmentType::Hat
        | GarmentType::Shoes
        | GarmentType::Scarf
        | GarmentType::Gloves
        | GarmentType::Vest
        | GarmentType::Cardigan
        | GarmentType::Pants => return None,
    };

    Some(rule)
}

static CLOUDS: &[(GarmentType, u8)] = &[
    (GarmentType::Jacket, 7),
    (GarmentType::Sweater, 7),
    (GarmentType::Hoodie, 8),
    (GarmentType::Cardigan, 8),
    (GarmentType::Jeans, 8),
    (GarmentType::Pants, 7),
    (GarmentType::Sneakers, 7),
    (GarmentType::Shorts, 4),
    (GarmentType::Sandals, 4),
];

static RAIN: &[(GarmentType, u8)] = &[
    (GarmentType::Raincoat, 10),
    (GarmentType::Poncho, 10),
    (GarmentType::Boots, 9),
    (GarmentType::Jacket, 8),
    (GarmentType::Coat, 7),
    (GarmentType::Hat, 6),
    (GarmentType::Hoodie, 6),
    (GarmentType::Sneakers, 4),
    (GarmentType::Skirt, 3),
    (GarmentType::Dress, 3),
    (GarmentType::Shorts, 2),
    (GarmentType::Sandals, 1),
];

static CLEAR: &[(GarmentType, u8)] = &[
    (GarmentType::TShirt, 9),
    (GarmentType::Shorts, 9),
    (GarmentType::Sandals, 9),
    (GarmentType::Dress, 9),
    (GarmentType::Skirt, 8),
    (GarmentType::Blouse, 8),
    (GarmentType::Sneakers, 8),
    (GarmentType::Hat, 7),
    (GarmentType::Boots, 4),
    (GarmentType::Coat, 3),
    (GarmentType::Raincoat, 2),
    (GarmentType::Poncho, 2),
];

static SNOW: &[(GarmentType, u8)] = &[
    (GarmentType::Coat, 10),
    (GarmentType::Boots, 10),
    (GarmentType::Gloves, 10),
    (GarmentType::Scarf, 10),
    (GarmentType::Hat, 9),
    (GarmentType::Sweater, 9),
    (GarmentType::Jacket, 8),
    (GarmentType::Sneakers, 3),
    (GarmentType::Skirt, 2),
    (GarmentType::Dress, 2),
    (GarmentType::TShirt, 2),
    (GarmentType::Shorts, 0),
    (GarmentType::Sandals, 0),
];

static MIST: &[(GarmentType, u8)] = &[
    (GarmentType::Jacket, 7),
    (GarmentType::Hoodie, 7),
    (GarmentType::Cardigan, 7),
    (GarmentType::Scarf, 6),
    (GarmentType::Raincoat, 6),
    (GarmentType::Sandals, 3),
];

static THUNDERSTORM: &[(GarmentType, u8)] = &[
    (GarmentType::Raincoat, 10),
    (GarmentType::Boots, 9),
    (GarmentType::Poncho, 8),
    (GarmentType::Coat, 7),
    (GarmentType::Dress, 2),
    (GarmentType::Skirt, 2),
    (GarmentType::Shorts, 1),
    (GarmentType::Sandals, 0),
];

/// Per-condition garment affinities.
pub(crate) fn weather_table(condition: WeatherCondition) -> &'static [(GarmentType, u8)] {
    match condition {
        WeatherCondition::Clouds => CLOUDS,
        WeatherCondition::Rain => RAIN,
        WeatherCondition::Clear => CLEAR,
        WeatherCondition::Snow => SNOW,
        WeatherCondition::Mist => MIST,
        WeatherCondition::Thunderstorm => THUNDERSTORM,
    }
}

pub(crate) fn weather_affinity(condition: WeatherCondition, kind: GarmentType) -> Option<u8> {
    weather_table(condition)
        .iter()
        .find(|(candidate, _)| *candidate == kind)
        .map(|(_, score)| *score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_bounds_follow_their_variant() {
        assert!(Threshold::Below(20).matches(19));
        assert!(!Threshold::Below(20).matches(20));
        assert!(Threshold::AtMost(60).matches(60));
        assert!(Threshold::AtLeast(25).matches(25));
        assert!(Threshold::Between(20, 30).matches(20));
        assert!(Threshold::Between(20, 30).matches(30));
        assert!(!Threshold::Between(20, 30).matches(31));
    }

    #[test]
    fn every_table_score_stays_within_ten() {
        for kind in GarmentType::ALL {
            for rule in [temperature_rule(kind), humidity_rule(kind)]
                .into_iter()
                .flatten()
            {
                assert!(rule.hit <= 10 && rule.otherwise <= 10, "{kind:?}");
            }
        }

        for condition in WeatherCondition::ALL {
            for (kind, score) in weather_table(condition) {
                assert!(*score <= 10, "{condition:?}/{kind:?}");
            }
        }
    }

    #[test]
    fn weather_tables_list_each_garment_once() {
        for condition in WeatherCondition::ALL {
            let table = weather_table(condition);
            for (index, (kind, _)) in table.iter().enumerate() {
                assert!(
                    table[index + 1..].iter().all(|(other, _)| other != kind),
                    "{kind:?} repeated under {condition:?}"
                );
            }
        }
    }
}
