use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tracing::{debug, error, warn};

use super::handlers::MarketHandler;
use super::types::{
    AnswerResponse, AskQuery, ErrorResponse, MessageResponse, PnlRequest, WeatherQuery,
};
use crate::assistant::{failure_answer, Assistant};
use crate::data::MarketCatalog;

pub const WELCOME_MESSAGE: &str = "Welcome to the Agriverse API";

/// Shared, read-only request state.
#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<MarketHandler>,
    pub assistant: Arc<Assistant>,
}

pub struct ApiServer {
    state: AppState,
}

impl ApiServer {
    pub fn new(catalog: Arc<MarketCatalog>, assistant: Assistant) -> Self {
        Self {
            state: AppState {
                handler: Arc::new(MarketHandler::new(catalog)),
                assistant: Arc::new(assistant),
            },
        }
    }

    pub fn assistant(&self) -> &Assistant {
        &self.state.assistant
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(read_root))
            .route("/market-prices/:crop_name", get(market_prices))
            .route("/demand-forecast/:state_mandi", get(demand_forecast))
            .route("/pnl-analysis/calculate", get(calculate_pnl))
            .route("/weather-forecast", get(weather_forecast))
            .route("/ask-assistant", get(ask_assistant))
            .with_state(self.state.clone())
    }
}

async fn read_root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}

async fn market_prices(
    State(state): State<AppState>,
    Path(crop_name): Path<String>,
) -> Response {
    match state.handler.price_report(&crop_name) {
        Ok(report) => Json(report).into_response(),
        Err(e) => {
            debug!("Price lookup failed ({}): {}", e.error_type(), e);
            Json(ErrorResponse {
                error: e.to_string(),
            })
            .into_response()
        }
    }
}

async fn demand_forecast(
    State(state): State<AppState>,
    Path(state_mandi): Path<String>,
) -> Response {
    Json(state.handler.demand_forecast(&state_mandi)).into_response()
}

async fn calculate_pnl(
    State(state): State<AppState>,
    Query(request): Query<PnlRequest>,
) -> Response {
    Json(state.handler.pnl_analysis(&request)).into_response()
}

async fn weather_forecast(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Response {
    Json(state.handler.weather(&query.region)).into_response()
}

async fn ask_assistant(
    State(state): State<AppState>,
    Query(query): Query<AskQuery>,
) -> Json<AnswerResponse> {
    let answer = match state.assistant.answer(&query.question).await {
        Ok(answer) => answer,
        Err(e) if e.is_external() => {
            warn!("AI call failed ({}): {}", e.error_type(), e);
            failure_answer(&e)
        }
        Err(e) => {
            error!("Assistant misconfigured ({}): {}", e.error_type(), e);
            failure_answer(&e)
        }
    };

    Json(AnswerResponse { answer })
}
