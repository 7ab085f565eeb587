use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};
use serde::Serialize;
use tracing::{debug, error, info, instrument};

use crate::fetcher::ForecastFetcher;
use crate::transform::{self, CityWeather};

#[derive(Clone)]
pub struct AppState {
    pub fetcher: ForecastFetcher,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize)]
pub struct WeatherListResponse {
    pub success: bool,
    pub data: Vec<CityWeather>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/weather", get(get_weather))
        .route("/api/health", get(health))
        .with_state(state)
}

#[instrument(skip(_state))]
async fn health(State(_state): State<AppState>) -> impl IntoResponse {
    debug!("Health check requested");
    let response = HealthResponse {
        status: "healthy".to_string(),
    };
    (StatusCode::OK, Json(response))
}

#[instrument(skip(state))]
async fn get_weather(
    State(state): State<AppState>,
) -> Result<Json<WeatherListResponse>, (StatusCode, Json<ErrorResponse>)> {
    debug!("Fetching 36-hour forecast for all counties");

    let locations = state.fetcher.fetch_forecast().await.map_err(|e| {
        error!("Failed to fetch CWA forecast: {}", e);
        // Detail stays in the server log; callers get a fixed message.
        let message = if e.is_configuration() {
            "API Key not configured"
        } else {
            "Failed to fetch weather data"
        };
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: message.to_string(),
            }),
        )
    })?;

    let cities = transform::to_city_weather(locations);
    info!("Returning weather for {} cities", cities.len());

    Ok(Json(WeatherListResponse {
        success: true,
        data: cities,
    }))
}
