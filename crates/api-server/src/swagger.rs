//! OpenAPI specification.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CineForecast API",
        version = "0.1.0",
        description = "Movie box-office revenue forecasts with feature attribution, plus genre-level industry analytics.",
        license(name = "MIT"),
    ),
    tags(
        (name = "Forecast", description = "Revenue prediction and supported languages"),
        (name = "Analytics", description = "Genre aggregates, dashboard summary and chart series"),
        (name = "Operations", description = "Health, readiness, and liveness probes"),
    ),
    paths(
        // Forecast
        crate::rest::handle_predict,
        crate::rest::handle_languages,
        // Analytics
        crate::rest::handle_summary,
        crate::rest::handle_genres,
        crate::rest::handle_charts,
        crate::rest::handle_sample_movies,
        // Operations
        crate::rest::health_check,
        crate::rest::readiness,
        crate::rest::liveness,
    ),
    components(schemas(
        // Forecast types
        cineforecast_core::types::MovieInputRecord,
        cineforecast_core::types::Language,
        cineforecast_core::types::LanguageOption,
        cineforecast_core::types::Feature,
        cineforecast_core::types::FeatureContribution,
        cineforecast_core::types::Attribution,
        cineforecast_core::types::FactorValue,
        cineforecast_core::types::Verdict,
        cineforecast_core::types::PredictionResult,
        // Analytics types
        cineforecast_core::genre::GenreAggregateRow,
        cineforecast_core::genre::GenreSummary,
        cineforecast_core::genre::GenreValue,
        cineforecast_core::genre::BudgetRevenuePoint,
        cineforecast_core::genre::GenreShare,
        cineforecast_core::genre::GenreCharts,
        // REST types
        crate::rest::PredictionResponse,
        crate::rest::ErrorResponse,
        crate::rest::HealthResponse,
    ))
)]
pub struct ApiDoc;
