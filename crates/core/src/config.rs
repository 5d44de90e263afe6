use crate::error::ForecastResult;
use serde::Deserialize;
use std::str::FromStr;

/// Root application configuration. Loaded from environment variables
/// with the prefix `CINEFORECAST__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_node_id")]
    pub node_id: String,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub prediction: PredictionConfig,
    #[serde(default)]
    pub samples: SampleConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default_metrics_enabled")]
    pub enabled: bool,
    #[serde(default = "default_metrics_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictionConfig {
    #[serde(default)]
    pub validation: ValidationMode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SampleConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_movie_count")]
    pub movie_count: usize,
}

/// How strictly prediction inputs are checked before scoring.
///
/// `Lenient` rejects only values the formula cannot handle: non-finite
/// numbers, a budget of zero or less, a zero vote count, zero genres or
/// production companies, and negative popularity, rating or runtime.
/// `Strict` additionally enforces the ranges offered by the forecast input
/// form and requires a language from the weight table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    #[default]
    Lenient,
    Strict,
}

impl FromStr for ValidationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            other => Err(format!("unknown validation mode '{other}'")),
        }
    }
}

// Default functions
fn default_node_id() -> String {
    "node-01".to_string()
}
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_http_port() -> u16 {
    8080
}
fn default_metrics_enabled() -> bool {
    true
}
fn default_metrics_port() -> u16 {
    9091
}
fn default_seed() -> u64 {
    42
}
fn default_movie_count() -> usize {
    100
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            http_port: default_http_port(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: default_metrics_enabled(),
            port: default_metrics_port(),
        }
    }
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            movie_count: default_movie_count(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            node_id: default_node_id(),
            api: ApiConfig::default(),
            metrics: MetricsConfig::default(),
            prediction: PredictionConfig::default(),
            samples: SampleConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> ForecastResult<Self> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("CINEFORECAST")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}
