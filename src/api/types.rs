use serde::{Deserialize, Serialize, Serializer};

use crate::types::Mandi;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MandiPrice {
    pub mandi: &'static str,
    pub price: f64,
    pub trend: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceReport {
    pub crop: String,
    pub predictions: Vec<MandiPrice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub crop: &'static str,
    pub score: u8,
    pub reason: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemandForecast {
    pub mandi: String,
    pub recommendations: Vec<Recommendation>,
}

/// Query parameters of `/pnl-analysis/calculate`.
///
/// Every numeric field has its own default and is passed through unvalidated:
/// zero yield or negative costs simply flow into the arithmetic.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PnlRequest {
    pub crop: String,
    /// Quintals per acre.
    #[serde(rename = "yield", default = "default_yield")]
    pub yield_qty: f64,
    /// Rupees per kilogram.
    #[serde(rename = "expectedPrice", default = "default_expected_price")]
    pub expected_price: f64,
    #[serde(default = "default_fertilizer")]
    pub fertilizer: f64,
    #[serde(default = "default_pesticide")]
    pub pesticide: f64,
    #[serde(default = "default_labour")]
    pub labour: f64,
    #[serde(default = "default_other")]
    pub other: f64,
}

fn default_yield() -> f64 {
    50.0
}

fn default_expected_price() -> f64 {
    35.0
}

fn default_fertilizer() -> f64 {
    5000.0
}

fn default_pesticide() -> f64 {
    500.0
}

fn default_labour() -> f64 {
    5000.0
}

fn default_other() -> f64 {
    1000.0
}

impl PnlRequest {
    /// A request for `crop` with every other parameter at its default.
    pub fn with_defaults(crop: impl Into<String>) -> Self {
        Self {
            crop: crop.into(),
            yield_qty: default_yield(),
            expected_price: default_expected_price(),
            fertilizer: default_fertilizer(),
            pesticide: default_pesticide(),
            labour: default_labour(),
            other: default_other(),
        }
    }

    pub fn total_cost(&self) -> f64 {
        self.fertilizer + self.pesticide + self.labour + self.other
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskFactor {
    pub factor: &'static str,
    #[serde(serialize_with = "signed")]
    pub impact: i32,
    pub comment: String,
}

fn signed<S: Serializer>(impact: &i32, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{impact:+}"))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PnlReport {
    pub crop: String,
    pub net_impact_score: i32,
    pub advice: String,
    pub reasons: Vec<RiskFactor>,
    pub total_cost: f64,
    pub expected_revenue: f64,
    pub net_profit: f64,
    pub total_yield_kg: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherQuery {
    #[serde(default = "default_region")]
    pub region: String,
}

fn default_region() -> String {
    Mandi::FALLBACK.display_name().to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct AskQuery {
    pub question: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pnl_request_defaults() {
        let request: PnlRequest = serde_json::from_value(json!({"crop": "tomato"})).unwrap();
        assert_eq!(request, PnlRequest::with_defaults("tomato"));
        assert_eq!(request.total_cost(), 11500.0);
    }

    #[test]
    fn test_pnl_request_renamed_fields() {
        let request: PnlRequest =
            serde_json::from_value(json!({"crop": "rice", "yield": 20.0, "expectedPrice": 40.0}))
                .unwrap();
        assert_eq!(request.yield_qty, 20.0);
        assert_eq!(request.expected_price, 40.0);
        assert_eq!(request.labour, 5000.0);
    }

    #[test]
    fn test_risk_factor_impact_is_signed_string() {
        let positive = RiskFactor {
            factor: "Weather",
            impact: 8,
            comment: String::new(),
        };
        let negative = RiskFactor {
            factor: "Supply",
            impact: -5,
            comment: String::new(),
        };
        assert_eq!(serde_json::to_value(&positive).unwrap()["impact"], "+8");
        assert_eq!(serde_json::to_value(&negative).unwrap()["impact"], "-5");
    }

    #[test]
    fn test_recommendation_type_field_name() {
        let rec = Recommendation {
            crop: "Rice",
            score: 95,
            reason: "High Demand",
            kind: "Primary",
        };
        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["type"], "Primary");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_weather_query_default_region() {
        let query: WeatherQuery = serde_json::from_value(json!({})).unwrap();
        assert_eq!(query.region, "Chennai (TN)");
    }
}
