use crate::types::{Crop, Mandi, MandiDeviation, WeatherSnapshot};
use std::collections::HashMap;
use tracing::debug;

/// Top crops recommended for markets without their own demand entry.
pub const DEFAULT_TOP_CROPS: [&str; 3] = ["Soybean", "Maize", "Tomato"];

/// Read-only market tables, built once at startup and shared between requests.
#[derive(Debug)]
pub struct MarketCatalog {
    deviations: Vec<MandiDeviation>,
    weather: HashMap<Mandi, WeatherSnapshot>,
    demand: HashMap<Mandi, [&'static str; 3]>,
}

impl Default for MarketCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketCatalog {
    pub fn new() -> Self {
        let catalog = Self {
            deviations: Mandi::ALL
                .into_iter()
                .map(|mandi| {
                    let (change_per_kg, trend) = deviation(mandi);
                    MandiDeviation {
                        mandi,
                        change_per_kg,
                        trend,
                    }
                })
                .collect(),
            weather: Mandi::ALL
                .into_iter()
                .map(|mandi| (mandi, weather(mandi)))
                .collect(),
            demand: Mandi::ALL
                .into_iter()
                .map(|mandi| (mandi, top_crops(mandi)))
                .collect(),
        };

        debug!(
            "Built market catalog: {} crops, {} mandis",
            Crop::ALL.len(),
            catalog.deviations.len()
        );

        catalog
    }

    /// Per-market deviations in report order.
    pub fn deviations(&self) -> &[MandiDeviation] {
        &self.deviations
    }

    pub fn weather(&self, mandi: Mandi) -> &WeatherSnapshot {
        &self.weather[&mandi]
    }

    /// Weather for a free-text region, falling back to the default market.
    pub fn weather_or_fallback(&self, region: &str) -> &WeatherSnapshot {
        let mandi = Mandi::parse(region).unwrap_or(Mandi::FALLBACK);
        self.weather(mandi)
    }

    /// Ranked top-3 crops for a free-text market, or [`DEFAULT_TOP_CROPS`].
    pub fn top_crops(&self, identifier: &str) -> [&'static str; 3] {
        Mandi::parse(identifier)
            .and_then(|mandi| self.demand.get(&mandi).copied())
            .unwrap_or(DEFAULT_TOP_CROPS)
    }
}

fn deviation(mandi: Mandi) -> (f64, &'static str) {
    match mandi {
        Mandi::Lucknow => (0.50, "+0.8% (Up)"),
        Mandi::Ludhiana => (-0.30, "-1.2% (Down)"),
        Mandi::Indore => (0.80, "+2.5% (Up)"),
        Mandi::Kolkata => (0.00, "Stable"),
        Mandi::Guntur => (-0.50, "-2.0% (Down)"),
        Mandi::Jaipur => (0.20, "+0.8% (Up)"),
        Mandi::Bengaluru => (1.00, "+3.0% (Up)"),
        Mandi::Rajkot => (-1.00, "-3.0% (Down)"),
        Mandi::Karnal => (0.10, "+0.5% (Up)"),
        Mandi::Pune => (0.60, "+2.0% (Up)"),
        Mandi::Chennai => (0.50, "+0.8% (Up)"),
    }
}

fn top_crops(mandi: Mandi) -> [&'static str; 3] {
    match mandi {
        Mandi::Lucknow => ["Wheat", "Mustard", "Maize"],
        Mandi::Ludhiana => ["Wheat", "Cotton", "Maize"],
        Mandi::Karnal => ["Wheat", "Mustard", "Soybean"],
        Mandi::Indore => ["Soybean", "Maize", "Chilli"],
        Mandi::Rajkot => ["Cotton", "Groundnut (Mock)", "Soybean"],
        Mandi::Pune => ["Onion", "Sugarcane", "Tomato"],
        Mandi::Guntur => ["Chilli", "Rice", "Cotton"],
        Mandi::Bengaluru => ["Coffee", "Tomato", "Rice"],
        Mandi::Chennai => ["Rice", "Tomato", "Coffee"],
        Mandi::Kolkata => ["Rice", "Potato", "Tomato"],
        Mandi::Jaipur => ["Mustard", "Wheat", "Soybean"],
    }
}

fn weather(mandi: Mandi) -> WeatherSnapshot {
    let location = mandi.city();
    match mandi {
        Mandi::Chennai => WeatherSnapshot::new(
            location,
            (31, "Partly Cloudy", "78%"),
            [
                ("Tomorrow", 32, 26, "Light Rain"),
                ("Overmorrow", 33, 27, "Sunny"),
                ("Next Day", 32, 26, "Thunderstorms"),
            ],
        ),
        Mandi::Lucknow => WeatherSnapshot::new(
            location,
            (28, "Sunny", "65%"),
            [
                ("Tomorrow", 29, 18, "Clear"),
                ("Overmorrow", 30, 19, "Sunny"),
                ("Next Day", 31, 20, "Hazy"),
            ],
        ),
        Mandi::Pune => WeatherSnapshot::new(
            location,
            (25, "Cloudy", "85%"),
            [
                ("Tomorrow", 26, 21, "Showers"),
                ("Overmorrow", 27, 22, "Light Rain"),
                ("Next Day", 28, 22, "Partly Cloudy"),
            ],
        ),
        Mandi::Bengaluru => WeatherSnapshot::new(
            location,
            (24, "Drizzle", "90%"),
            [
                ("Tomorrow", 25, 20, "Rain"),
                ("Overmorrow", 26, 21, "Showers"),
                ("Next Day", 27, 21, "Cloudy"),
            ],
        ),
        Mandi::Indore => WeatherSnapshot::new(
            location,
            (27, "Clear Sky", "70%"),
            [
                ("Tomorrow", 28, 19, "Sunny"),
                ("Overmorrow", 29, 20, "Clear"),
                ("Next Day", 30, 21, "Partly Cloudy"),
            ],
        ),
        Mandi::Ludhiana => WeatherSnapshot::new(
            location,
            (26, "Haze", "60%"),
            [
                ("Tomorrow", 28, 17, "Sunny"),
                ("Overmorrow", 29, 18, "Clear"),
                ("Next Day", 30, 19, "Haze"),
            ],
        ),
        Mandi::Kolkata => WeatherSnapshot::new(
            location,
            (30, "Humid", "88%"),
            [
                ("Tomorrow", 31, 25, "Showers"),
                ("Overmorrow", 32, 26, "Thunderstorms"),
                ("Next Day", 32, 26, "Rain"),
            ],
        ),
        Mandi::Guntur => WeatherSnapshot::new(
            location,
            (32, "Sunny", "75%"),
            [
                ("Tomorrow", 33, 26, "Partly Cloudy"),
                ("Overmorrow", 34, 27, "Sunny"),
                ("Next Day", 33, 27, "Clear"),
            ],
        ),
        Mandi::Jaipur => WeatherSnapshot::new(
            location,
            (29, "Clear", "55%"),
            [
                ("Tomorrow", 30, 20, "Sunny"),
                ("Overmorrow", 31, 21, "Clear"),
                ("Next Day", 32, 22, "Sunny"),
            ],
        ),
        Mandi::Rajkot => WeatherSnapshot::new(
            location,
            (30, "Sunny", "65%"),
            [
                ("Tomorrow", 31, 22, "Clear"),
                ("Overmorrow", 32, 23, "Sunny"),
                ("Next Day", 33, 24, "Clear"),
            ],
        ),
        Mandi::Karnal => WeatherSnapshot::new(
            location,
            (27, "Hazy Sun", "62%"),
            [
                ("Tomorrow", 29, 18, "Sunny"),
                ("Overmorrow", 30, 19, "Clear"),
                ("Next Day", 31, 20, "Haze"),
            ],
        ),
    }
}
