pub mod attribution;
pub mod display;
pub mod engine;
pub mod model;
pub mod validation;

pub use engine::RevenuePredictor;

use cineforecast_core::types::{MovieInputRecord, PredictionResult};
use cineforecast_core::ForecastResult;

/// Forecast with the default (lenient) predictor.
pub fn predict_revenue(input: &MovieInputRecord) -> ForecastResult<PredictionResult> {
    RevenuePredictor::default().predict_revenue(input)
}
