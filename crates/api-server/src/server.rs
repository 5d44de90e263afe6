//! API server — builds the router and serves HTTP until shutdown.

use crate::rest::{self, AppState};
use axum::routing::{get, post};
use axum::Router;
use cineforecast_analytics::{GenreAnalytics, SampleCatalog};
use cineforecast_core::config::AppConfig;
use cineforecast_engine::RevenuePredictor;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Assemble the full route table over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Forecast
        .route("/v1/predict", post(rest::handle_predict))
        .route("/v1/languages", get(rest::handle_languages))
        // Analytics
        .route("/v1/analytics/summary", get(rest::handle_summary))
        .route("/v1/analytics/genres", get(rest::handle_genres))
        .route("/v1/analytics/charts", get(rest::handle_charts))
        .route("/v1/samples/movies", get(rest::handle_sample_movies))
        // Operational endpoints
        .route("/health", get(rest::health_check))
        .route("/ready", get(rest::readiness))
        .route("/live", get(rest::liveness))
        .route("/api-docs/openapi.json", get(rest::openapi_json))
        // Middleware
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Main API server for the forecast and analytics endpoints.
pub struct ApiServer {
    config: AppConfig,
    state: AppState,
}

impl ApiServer {
    pub fn new(
        config: AppConfig,
        predictor: Arc<RevenuePredictor>,
        catalog: Arc<SampleCatalog>,
    ) -> Self {
        let state = AppState {
            predictor,
            analytics: Arc::new(GenreAnalytics::new(catalog.genres())),
            catalog,
            node_id: config.node_id.clone(),
            start_time: Instant::now(),
        };
        Self { config, state }
    }

    pub fn router(&self) -> Router {
        router(self.state.clone())
    }

    /// Start the HTTP REST server and serve until `shutdown` resolves.
    pub async fn start_http<F>(&self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr = SocketAddr::new(self.config.api.host.parse()?, self.config.api.http_port);

        info!(addr = %addr, "Starting HTTP server");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Start the metrics server on a separate port.
    pub async fn start_metrics(&self) -> anyhow::Result<()> {
        let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
        builder
            .with_http_listener(SocketAddr::new(
                self.config.api.host.parse()?,
                self.config.metrics.port,
            ))
            .install()?;

        info!(port = self.config.metrics.port, "Metrics exporter started");
        Ok(())
    }
}
