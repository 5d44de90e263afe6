//! REST API handlers for revenue forecasts, genre analytics and
//! operational endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use cineforecast_analytics::{GenreAnalytics, SampleCatalog};
use cineforecast_core::genre::{GenreAggregateRow, GenreCharts, GenreSummary};
use cineforecast_core::types::{Language, LanguageOption, MovieInputRecord, PredictionResult};
use cineforecast_core::ForecastError;
use cineforecast_engine::display::{format_millions, format_percent};
use cineforecast_engine::RevenuePredictor;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

/// Shared application state for REST handlers. Everything behind the
/// `Arc`s is read-only.
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<RevenuePredictor>,
    pub analytics: Arc<GenreAnalytics>,
    pub catalog: Arc<SampleCatalog>,
    pub node_id: String,
    pub start_time: Instant,
}

pub type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

/// Map a domain error onto an HTTP status and error body.
fn error_response(err: ForecastError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        ForecastError::InvalidInput(message) => {
            metrics::counter!("api.validation_errors").increment(1);
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "invalid_input".to_string(),
                    message,
                }),
            )
        }
        ForecastError::EmptyDataset => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: "empty_dataset".to_string(),
                message: ForecastError::EmptyDataset.to_string(),
            }),
        ),
        other => {
            error!(error = %other, "Request failed");
            metrics::counter!("api.errors").increment(1);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "internal_error".to_string(),
                    message: "Internal processing error".to_string(),
                }),
            )
        }
    }
}

/// POST /v1/predict — Forecast revenue for one movie.
#[utoipa::path(
    post,
    path = "/v1/predict",
    tag = "Forecast",
    request_body = MovieInputRecord,
    responses(
        (status = 200, description = "Revenue forecast", body = PredictionResponse),
        (status = 400, description = "Input outside the model's domain", body = ErrorResponse),
    )
)]
pub async fn handle_predict(
    State(state): State<AppState>,
    Json(input): Json<MovieInputRecord>,
) -> ApiResult<PredictionResponse> {
    let prediction = state.predictor.predict_revenue(&input).map_err(|e| {
        warn!(error = %e, language = %input.original_language, "Prediction rejected");
        error_response(e)
    })?;

    let response = PredictionResponse {
        prediction_id: Uuid::new_v4(),
        revenue_display: format_millions(prediction.revenue),
        roi_display: format_percent(prediction.roi_percent),
        prediction,
        node_id: state.node_id.clone(),
        generated_at: Utc::now(),
    };

    info!(
        prediction_id = %response.prediction_id,
        revenue = %response.revenue_display,
        roi = %response.roi_display,
        verdict = response.prediction.verdict.as_str(),
        "Prediction served"
    );

    Ok(Json(response))
}

/// GET /v1/languages — Languages the model weighs explicitly.
#[utoipa::path(
    get,
    path = "/v1/languages",
    tag = "Forecast",
    responses(
        (status = 200, description = "Supported original languages", body = [LanguageOption]),
    )
)]
pub async fn handle_languages() -> Json<Vec<LanguageOption>> {
    Json(Language::ALL.into_iter().map(LanguageOption::from).collect())
}

/// GET /v1/analytics/summary — Headline genre figures.
#[utoipa::path(
    get,
    path = "/v1/analytics/summary",
    tag = "Analytics",
    responses(
        (status = 200, description = "Genre summary", body = GenreSummary),
        (status = 422, description = "No genre rows loaded", body = ErrorResponse),
    )
)]
pub async fn handle_summary(State(state): State<AppState>) -> ApiResult<GenreSummary> {
    state.analytics.summarize().map(Json).map_err(error_response)
}

/// GET /v1/analytics/genres — Genre aggregate rows.
#[utoipa::path(
    get,
    path = "/v1/analytics/genres",
    tag = "Analytics",
    responses(
        (status = 200, description = "Genre aggregate rows", body = [GenreAggregateRow]),
    )
)]
pub async fn handle_genres(State(state): State<AppState>) -> Json<Vec<GenreAggregateRow>> {
    Json(state.analytics.rows().to_vec())
}

/// GET /v1/analytics/charts — Data series behind the dashboard charts.
#[utoipa::path(
    get,
    path = "/v1/analytics/charts",
    tag = "Analytics",
    responses(
        (status = 200, description = "Chart series", body = GenreCharts),
        (status = 422, description = "No genre rows loaded", body = ErrorResponse),
    )
)]
pub async fn handle_charts(State(state): State<AppState>) -> ApiResult<GenreCharts> {
    state.analytics.charts().map(Json).map_err(error_response)
}

/// GET /v1/samples/movies — Synthetic movie sample built at startup.
#[utoipa::path(
    get,
    path = "/v1/samples/movies",
    tag = "Analytics",
    responses(
        (status = 200, description = "Synthetic movies", body = [MovieInputRecord]),
    )
)]
pub async fn handle_sample_movies(State(state): State<AppState>) -> Json<Vec<MovieInputRecord>> {
    Json(state.catalog.movies().to_vec())
}

/// GET /health — Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Operations",
    responses(
        (status = 200, description = "Service health", body = HealthResponse),
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        node_id: state.node_id.clone(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// GET /ready — Readiness probe. Ready once genre data is loaded.
#[utoipa::path(
    get,
    path = "/ready",
    tag = "Operations",
    responses(
        (status = 200, description = "Ready"),
        (status = 503, description = "Genre data missing"),
    )
)]
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    if state.analytics.rows().is_empty() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    }
}

/// GET /live — Liveness probe.
#[utoipa::path(
    get,
    path = "/live",
    tag = "Operations",
    responses(
        (status = 200, description = "Alive"),
    )
)]
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /api-docs/openapi.json — OpenAPI document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(crate::swagger::ApiDoc::openapi())
}

#[derive(Serialize, ToSchema)]
pub struct PredictionResponse {
    pub prediction_id: Uuid,
    pub prediction: PredictionResult,
    /// Revenue in millions, e.g. `$749.58M`.
    pub revenue_display: String,
    pub roi_display: String,
    pub node_id: String,
    pub generated_at: DateTime<Utc>,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub node_id: String,
    pub uptime_secs: u64,
}
