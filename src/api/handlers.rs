use std::sync::Arc;

use super::types::{
    DemandForecast, MandiPrice, PnlReport, PnlRequest, PriceReport, Recommendation, RiskFactor,
};
use crate::data::MarketCatalog;
use crate::types::{format_grouped, round2, title_case, Crop, WeatherSnapshot};
use crate::{Error, Result};

const KG_PER_QUINTAL: f64 = 100.0;
const TRANSPORT_SAVING_RATE: f64 = 0.01;

/// (score, type, reason) for each recommendation rank, best first.
const RANKS: [(u8, &str, &str); 3] = [
    (95, "Primary", "High Demand"),
    (88, "Secondary", "Stable Demand"),
    (75, "Tertiary", "Stable"),
];

/// Pure calculators behind the market endpoints.
pub struct MarketHandler {
    catalog: Arc<MarketCatalog>,
}

impl Default for MarketHandler {
    fn default() -> Self {
        Self::new(Arc::new(MarketCatalog::new()))
    }
}

impl MarketHandler {
    pub fn new(catalog: Arc<MarketCatalog>) -> Self {
        Self { catalog }
    }

    pub fn price_report(&self, crop_name: &str) -> Result<PriceReport> {
        let crop = Crop::parse(crop_name).ok_or_else(|| Error::CropNotFound {
            crop: crop_name.to_string(),
        })?;
        let base_price = crop.base_price_per_kg();

        let predictions = self
            .catalog
            .deviations()
            .iter()
            .map(|deviation| MandiPrice {
                mandi: deviation.mandi.display_name(),
                price: round2(base_price + deviation.change_per_kg),
                trend: deviation.trend,
            })
            .collect();

        Ok(PriceReport {
            crop: title_case(crop_name),
            predictions,
        })
    }

    pub fn demand_forecast(&self, state_mandi: &str) -> DemandForecast {
        let top_crops = self.catalog.top_crops(state_mandi);

        let recommendations = top_crops
            .into_iter()
            .zip(RANKS)
            .map(|(crop, (score, kind, reason))| Recommendation {
                crop,
                score,
                reason,
                kind,
            })
            .collect();

        DemandForecast {
            mandi: state_mandi.to_string(),
            recommendations,
        }
    }

    pub fn pnl_analysis(&self, request: &PnlRequest) -> PnlReport {
        let crop = title_case(&request.crop);
        let total_yield_kg = request.yield_qty * KG_PER_QUINTAL;
        let expected_revenue = total_yield_kg * request.expected_price;
        let total_cost = request.total_cost();
        let net_profit = expected_revenue - total_cost;

        let reasons = risk_factors(&crop, request.expected_price, total_cost);
        let net_impact_score: i32 = reasons.iter().map(|reason| reason.impact).sum();

        PnlReport {
            advice: format!(
                "Net Profit is calculated at ₹{}.",
                format_grouped(net_profit)
            ),
            crop,
            net_impact_score,
            reasons,
            total_cost,
            expected_revenue,
            net_profit,
            total_yield_kg,
        }
    }

    pub fn weather(&self, region: &str) -> WeatherSnapshot {
        self.catalog.weather_or_fallback(region).clone()
    }
}

fn risk_factors(crop: &str, expected_price: f64, total_cost: f64) -> Vec<RiskFactor> {
    vec![
        RiskFactor {
            factor: "Market Risk",
            impact: 10,
            comment: format!(
                "Expected price of ₹{expected_price:.2}/kg for {crop} is well supported by current mandi rates."
            ),
        },
        RiskFactor {
            factor: "Weather",
            impact: 8,
            comment: "Seasonal outlook is favourable through the growing window.".to_string(),
        },
        RiskFactor {
            factor: "Transport",
            impact: 4,
            comment: format!(
                "Pooling transport to the nearest mandi could save about ₹{:.2}.",
                total_cost * TRANSPORT_SAVING_RATE
            ),
        },
        RiskFactor {
            factor: "Supply",
            impact: -5,
            comment: "Heavy arrivals at harvest time may soften prices.".to_string(),
        },
        RiskFactor {
            factor: "Input Cost",
            impact: -3,
            comment: format!(
                "Input costs of ₹{total_cost:.2} leave a thin buffer against price swings."
            ),
        },
    ]
}
