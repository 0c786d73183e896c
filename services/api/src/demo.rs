use crate::infra::InMemoryWardrobeRepository;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use wardrobe::error::AppError;
use wardrobe::outfits::scoring::MAX_COMPOSITE_SCORE;
use wardrobe::outfits::{
    AmbientContext, ColorHistories, OutfitRecommendation, OutfitRequest, RecommendationService,
    WardrobeImporter, WearerId, WeatherReading,
};

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Garments CSV export (wearer_id,id,type,color,category,added_at)
    #[arg(long)]
    pub(crate) garments: PathBuf,
    /// Optional wear-log CSV export (wearer_id,color,worn_on)
    #[arg(long)]
    pub(crate) wear_log: Option<PathBuf>,
    /// Wearer to dress
    #[arg(long)]
    pub(crate) wearer: String,
    /// Current temperature in whole degrees Celsius
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) temperature: Option<i32>,
    /// Relative humidity percentage (0-100)
    #[arg(long)]
    pub(crate) humidity: Option<u8>,
    /// Weather condition label such as rain, clear or snow
    #[arg(long)]
    pub(crate) weather: Option<String>,
    /// Print every candidate's signal breakdown per slot
    #[arg(long)]
    pub(crate) breakdown: bool,
    /// Emit the recommendation as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print every candidate's signal breakdown per slot
    #[arg(long)]
    pub(crate) breakdown: bool,
}

struct DemoScenario {
    wearer: &'static str,
    title: &'static str,
    temperature: i32,
    humidity: u8,
    weather: &'static str,
}

const DEMO_SCENARIOS: [DemoScenario; 3] = [
    DemoScenario {
        wearer: "ana",
        title: "Cold rainy commute",
        temperature: 6,
        humidity: 88,
        weather: "rain",
    },
    DemoScenario {
        wearer: "ana",
        title: "Hot dry afternoon",
        temperature: 29,
        humidity: 35,
        weather: "clear",
    },
    DemoScenario {
        wearer: "ben",
        title: "Warm sunny morning",
        temperature: 24,
        humidity: 40,
        weather: "sunny",
    },
];

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        garments,
        wear_log,
        wearer,
        temperature,
        humidity,
        weather,
        breakdown,
        json,
    } = args;

    let inventory = WardrobeImporter::garments_from_path(&garments)?;
    let histories = match wear_log {
        Some(path) => WardrobeImporter::wear_log_from_path(&path)?,
        None => ColorHistories::new(),
    };
    let repository = Arc::new(InMemoryWardrobeRepository::new(inventory, histories));
    let service = RecommendationService::new(repository).with_breakdown(breakdown);

    let context = AmbientContext::new(temperature, humidity, weather.map(WeatherReading::from));
    let recommendation = service.recommend(&WearerId(wearer), &OutfitRequest::new(context.clone()))?;

    if json {
        match serde_json::to_string_pretty(&recommendation) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("Recommendation payload unavailable: {err}"),
        }
    } else {
        render_recommendation(&recommendation, &context);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let repository = Arc::new(InMemoryWardrobeRepository::sample()?);
    let wearers: Vec<String> = repository
        .wearers()
        .into_iter()
        .map(|wearer| wearer.0)
        .collect();
    let service = RecommendationService::new(repository).with_breakdown(args.breakdown);

    println!("Outfit recommendation demo");
    println!("Sample wardrobes: {}", wearers.join(", "));

    for scenario in &DEMO_SCENARIOS {
        let context = AmbientContext::new(
            Some(scenario.temperature),
            Some(scenario.humidity),
            Some(WeatherReading::from(scenario.weather)),
        );
        let wearer = WearerId(scenario.wearer.to_string());

        println!("\n{} ({})", scenario.title, scenario.wearer);
        match service.recommend(&wearer, &OutfitRequest::new(context.clone())) {
            Ok(recommendation) => render_recommendation(&recommendation, &context),
            Err(err) => println!("  Recommendation unavailable: {err}"),
        }
    }

    Ok(())
}

fn render_recommendation(recommendation: &OutfitRecommendation, context: &AmbientContext) {
    println!(
        "Conditions: {} | {} | {}",
        context
            .temperature
            .map(|value| format!("{value}\u{b0}C"))
            .unwrap_or_else(|| "temperature n/a".to_string()),
        context
            .humidity
            .map(|value| format!("{value}% humidity"))
            .unwrap_or_else(|| "humidity n/a".to_string()),
        context
            .weather
            .as_ref()
            .map(|reading| reading.label().to_string())
            .unwrap_or_else(|| "weather n/a".to_string()),
    );

    let outfit = &recommendation.outfit;
    println!(
        "Outfit for {} (total score {}{})",
        recommendation.wearer_id.0,
        recommendation.total_score,
        if recommendation.complete {
            ""
        } else {
            ", incomplete"
        }
    );
    for entry in &outfit.entries {
        println!(
            "  - {}: {} ({}/{})",
            entry.slot.label(),
            entry.garment_id.as_str(),
            entry.composite_score,
            MAX_COMPOSITE_SCORE
        );
    }
    if !outfit.gaps.is_empty() {
        let gaps: Vec<&str> = outfit.gaps.iter().map(|slot| slot.label()).collect();
        println!("  Nothing suitable for: {}", gaps.join(", "));
    }

    for ranking in &outfit.rankings {
        println!("  Candidates for {}:", ranking.slot.label());
        for candidate in &ranking.candidates {
            println!(
                "    - {} [{}] temp {} | humidity {} | weather {} | color {} = {}",
                candidate.garment_id.as_str(),
                candidate.garment_type.label(),
                candidate.temperature_score,
                candidate.humidity_score,
                candidate.weather_score,
                candidate.color_score,
                candidate.composite_score
            );
        }
    }
}
