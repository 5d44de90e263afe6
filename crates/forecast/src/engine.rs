//! Revenue prediction engine: validates an input record, scores it with the
//! closed-form model, and derives ROI and the explanatory breakdowns.
//!
//! The engine holds no mutable state; one instance can be shared across
//! threads behind an `Arc` and every call is independent.

use crate::{attribution, model, validation};
use cineforecast_core::config::{PredictionConfig, ValidationMode};
use cineforecast_core::types::{
    Attribution, FactorValue, MovieInputRecord, PredictionResult, Verdict,
};
use cineforecast_core::{ForecastError, ForecastResult};
use std::time::Instant;
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct RevenuePredictor {
    mode: ValidationMode,
}

impl RevenuePredictor {
    pub fn new(config: &PredictionConfig) -> Self {
        info!(validation = ?config.validation, "Revenue predictor initialized");
        Self::with_mode(config.validation)
    }

    pub fn with_mode(mode: ValidationMode) -> Self {
        Self { mode }
    }

    /// Predicted revenue in the budget's currency units.
    pub fn predict(&self, input: &MovieInputRecord) -> ForecastResult<f64> {
        let factors = self.factor_breakdown(input)?;
        let revenue = model::apply(input.budget, &factors);

        if !revenue.is_finite() || revenue <= 0.0 {
            return Err(ForecastError::invalid(format!(
                "input produces a non-positive or non-finite revenue ({revenue})"
            )));
        }
        Ok(revenue)
    }

    /// Return on investment in percent.
    pub fn roi(&self, input: &MovieInputRecord, revenue: f64) -> ForecastResult<f64> {
        if !input.budget.is_finite() || input.budget <= 0.0 {
            return Err(ForecastError::invalid("budget must be positive"));
        }
        if !revenue.is_finite() {
            return Err(ForecastError::invalid("revenue must be a finite number"));
        }
        let roi = (revenue - input.budget) / input.budget * 100.0;
        if !roi.is_finite() {
            return Err(ForecastError::invalid(format!(
                "ROI overflows for revenue {revenue} on budget {}",
                input.budget
            )));
        }
        Ok(roi)
    }

    /// Heuristic per-feature dollar impact, in chart order.
    pub fn attribute(&self, input: &MovieInputRecord) -> ForecastResult<Attribution> {
        validation::validate(input, self.mode)?;
        finite_attribution(input)
    }

    /// The multiplicative factors the model applies to the budget.
    pub fn factor_breakdown(&self, input: &MovieInputRecord) -> ForecastResult<Vec<FactorValue>> {
        validation::validate(input, self.mode)?;
        Ok(model::factors(input).to_vec())
    }

    /// Full forecast: revenue, ROI, verdict and both breakdowns.
    pub fn predict_revenue(&self, input: &MovieInputRecord) -> ForecastResult<PredictionResult> {
        let start = Instant::now();

        let outcome = self.score(input);
        match &outcome {
            Ok(result) => {
                let latency_us = start.elapsed().as_micros() as u64;
                metrics::counter!("predictor.predictions").increment(1);
                metrics::histogram!("predictor.latency_us").record(latency_us as f64);
                debug!(
                    revenue = result.revenue,
                    roi_percent = result.roi_percent,
                    latency_us,
                    "Prediction computed"
                );
            }
            Err(e) => {
                metrics::counter!("predictor.rejections").increment(1);
                debug!(error = %e, "Prediction rejected");
            }
        }
        outcome
    }

    fn score(&self, input: &MovieInputRecord) -> ForecastResult<PredictionResult> {
        let revenue = self.predict(input)?;
        let roi_percent = self.roi(input, revenue)?;

        Ok(PredictionResult {
            revenue,
            roi_percent,
            verdict: Verdict::from_roi(roi_percent),
            attribution: finite_attribution(input)?,
            factors: model::factors(input).to_vec(),
        })
    }
}

/// Attribution amounts scale with the budget and can overflow even when the
/// revenue itself stays finite.
fn finite_attribution(input: &MovieInputRecord) -> ForecastResult<Attribution> {
    let attribution = attribution::attribute(input);
    if let Some(c) = attribution.iter().find(|c| !c.amount.is_finite()) {
        return Err(ForecastError::invalid(format!(
            "{} impact is not a finite amount for budget {}",
            c.feature.label(),
            input.budget
        )));
    }
    Ok(attribution)
}
