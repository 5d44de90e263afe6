//! CineForecast — movie box-office revenue forecasting and genre analytics.
//!
//! Main entry point that initializes all subsystems and starts the server.

use cineforecast_analytics::SampleCatalog;
use cineforecast_api::ApiServer;
use cineforecast_core::config::{AppConfig, ValidationMode};
use cineforecast_engine::RevenuePredictor;
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "cineforecast")]
#[command(about = "Movie box-office revenue forecasting and genre analytics")]
#[command(version)]
struct Cli {
    /// Node identifier (overrides config)
    #[arg(long, env = "CINEFORECAST__NODE_ID")]
    node_id: Option<String>,

    /// HTTP port (overrides config)
    #[arg(long, env = "CINEFORECAST__API__HTTP_PORT")]
    http_port: Option<u16>,

    /// Seed for the synthetic movie sample (overrides config)
    #[arg(long, env = "CINEFORECAST__SAMPLES__SEED")]
    seed: Option<u64>,

    /// Input validation: `lenient` or `strict` (overrides config)
    #[arg(long, env = "CINEFORECAST__PREDICTION__VALIDATION")]
    validation: Option<ValidationMode>,

    /// Do not start the Prometheus exporter
    #[arg(long, default_value_t = false)]
    no_metrics: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cineforecast=info,tower_http=info".into()),
        )
        .json()
        .init();

    let cli = Cli::parse();

    info!("CineForecast starting up");

    // Load configuration
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(node_id) = cli.node_id {
        config.node_id = node_id;
    }
    if let Some(port) = cli.http_port {
        config.api.http_port = port;
    }
    if let Some(seed) = cli.seed {
        config.samples.seed = seed;
    }
    if let Some(mode) = cli.validation {
        config.prediction.validation = mode;
    }
    if cli.no_metrics {
        config.metrics.enabled = false;
    }

    info!(
        node_id = %config.node_id,
        http_port = config.api.http_port,
        validation = ?config.prediction.validation,
        seed = config.samples.seed,
        "Configuration loaded"
    );

    let predictor = Arc::new(RevenuePredictor::new(&config.prediction));
    let catalog = Arc::new(SampleCatalog::build(&config.samples));

    let api_server = ApiServer::new(config.clone(), predictor, catalog);

    if config.metrics.enabled {
        if let Err(e) = api_server.start_metrics().await {
            error!(error = %e, "Failed to start metrics exporter");
        }
    }

    info!("CineForecast is ready to serve traffic");

    // Start HTTP server (blocks until shutdown)
    api_server.start_http(shutdown_signal()).await?;

    info!("Shutdown complete");
    Ok(())
}

/// Resolve on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
