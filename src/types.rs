use serde::{Deserialize, Serialize};

/// Crops with a known base price per kilogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Crop {
    Tomato,
    Onion,
    Wheat,
    Rice,
    Chilli,
    Cotton,
    Potato,
    Maize,
    Mustard,
    Soybean,
    Coffee,
    Sugarcane,
}

impl Crop {
    pub const ALL: [Crop; 12] = [
        Crop::Tomato,
        Crop::Onion,
        Crop::Wheat,
        Crop::Rice,
        Crop::Chilli,
        Crop::Cotton,
        Crop::Potato,
        Crop::Maize,
        Crop::Mustard,
        Crop::Soybean,
        Crop::Coffee,
        Crop::Sugarcane,
    ];

    /// Parse free text such as `" Tomato "` into a crop.
    pub fn parse(name: &str) -> Option<Self> {
        let key = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|crop| crop.key() == key)
    }

    pub fn key(&self) -> &'static str {
        match self {
            Crop::Tomato => "tomato",
            Crop::Onion => "onion",
            Crop::Wheat => "wheat",
            Crop::Rice => "rice",
            Crop::Chilli => "chilli",
            Crop::Cotton => "cotton",
            Crop::Potato => "potato",
            Crop::Maize => "maize",
            Crop::Mustard => "mustard",
            Crop::Soybean => "soybean",
            Crop::Coffee => "coffee",
            Crop::Sugarcane => "sugarcane",
        }
    }

    /// Base wholesale price in rupees per kilogram.
    pub fn base_price_per_kg(&self) -> f64 {
        match self {
            Crop::Tomato => 42.0,
            Crop::Onion => 30.0,
            Crop::Wheat => 22.50,
            Crop::Rice => 33.00,
            Crop::Chilli => 91.00,
            Crop::Cotton => 63.00,
            Crop::Potato => 18.0,
            Crop::Maize => 19.80,
            Crop::Mustard => 55.00,
            Crop::Soybean => 48.00,
            Crop::Coffee => 230.00,
            Crop::Sugarcane => 3.25,
        }
    }
}

/// Regional wholesale markets, in the order price reports list them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mandi {
    Lucknow,
    Ludhiana,
    Indore,
    Kolkata,
    Guntur,
    Jaipur,
    Bengaluru,
    Rajkot,
    Karnal,
    Pune,
    Chennai,
}

impl Mandi {
    pub const ALL: [Mandi; 11] = [
        Mandi::Lucknow,
        Mandi::Ludhiana,
        Mandi::Indore,
        Mandi::Kolkata,
        Mandi::Guntur,
        Mandi::Jaipur,
        Mandi::Bengaluru,
        Mandi::Rajkot,
        Mandi::Karnal,
        Mandi::Pune,
        Mandi::Chennai,
    ];

    /// Weather and default-region fallback.
    pub const FALLBACK: Mandi = Mandi::Chennai;

    /// Parse a market identifier such as `"pune (MH)"`, ignoring case.
    pub fn parse(identifier: &str) -> Option<Self> {
        let key = identifier.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|mandi| mandi.display_name().to_lowercase() == key)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Mandi::Lucknow => "Lucknow (UP)",
            Mandi::Ludhiana => "Ludhiana (PB)",
            Mandi::Indore => "Indore (MP)",
            Mandi::Kolkata => "Kolkata (WB)",
            Mandi::Guntur => "Guntur (AP)",
            Mandi::Jaipur => "Jaipur (RJ)",
            Mandi::Bengaluru => "Bengaluru (KA)",
            Mandi::Rajkot => "Rajkot (GJ)",
            Mandi::Karnal => "Karnal (HR)",
            Mandi::Pune => "Pune (MH)",
            Mandi::Chennai => "Chennai (TN)",
        }
    }

    /// City name without the state suffix.
    pub fn city(&self) -> &'static str {
        let name = self.display_name();
        name.split(" (").next().unwrap_or(name)
    }
}

/// Fixed per-market price delta applied on top of a crop's base price.
#[derive(Debug, Clone, PartialEq)]
pub struct MandiDeviation {
    pub mandi: Mandi,
    pub change_per_kg: f64,
    pub trend: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temp_c: i32,
    pub condition: String,
    pub humidity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub day: String,
    pub high_c: i32,
    pub low_c: i32,
    pub condition: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: String,
    pub current: CurrentConditions,
    pub forecast: Vec<DailyForecast>,
}

impl WeatherSnapshot {
    pub fn new(
        location: &str,
        (temp_c, condition, humidity): (i32, &str, &str),
        forecast: [(&str, i32, i32, &str); 3],
    ) -> Self {
        Self {
            location: location.to_string(),
            current: CurrentConditions {
                temp_c,
                condition: condition.to_string(),
                humidity: humidity.to_string(),
            },
            forecast: forecast
                .into_iter()
                .map(|(day, high_c, low_c, condition)| DailyForecast {
                    day: day.to_string(),
                    high_c,
                    low_c,
                    condition: condition.to_string(),
                })
                .collect(),
        }
    }
}

/// Round to two decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format with two decimals and comma thousands separators, e.g. `-5,500.00`.
pub fn format_grouped(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}

/// Upper-case the first letter of every alphabetic run and lower-case the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_is_letter = false;
    for ch in text.chars() {
        if previous_is_letter {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        previous_is_letter = ch.is_alphabetic();
    }
    out
}
