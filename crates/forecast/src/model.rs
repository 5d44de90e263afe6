//! Closed-form revenue model.
//!
//! Revenue is the budget scaled by independent multiplicative factors, each
//! centred so that a neutral input yields 1.0, and finally by the weight of
//! the original language. There are no learned parameters; every constant
//! lives here.

use cineforecast_core::types::{language_weight, Feature, FactorValue, MovieInputRecord};

pub const POPULARITY_SCALE: f64 = 50.0;
pub const RATING_SCALE: f64 = 5.0;
pub const VOTE_COUNT_SCALE: f64 = 10.0;
pub const RUNTIME_BASELINE_MINUTES: f64 = 90.0;
pub const RUNTIME_SCALE: f64 = 200.0;
pub const GENRE_SCALE: f64 = 10.0;
pub const COMPANY_SCALE: f64 = 15.0;

/// Number of factors applied on top of the budget.
pub const FACTOR_COUNT: usize = 7;

// Partial effect of each input, before the `1 +` centring.

fn popularity_effect(input: &MovieInputRecord) -> f64 {
    input.popularity / POPULARITY_SCALE
}

fn rating_effect(input: &MovieInputRecord) -> f64 {
    input.vote_average / RATING_SCALE
}

fn vote_count_effect(input: &MovieInputRecord) -> f64 {
    (input.vote_count as f64).ln() / VOTE_COUNT_SCALE
}

fn runtime_effect(input: &MovieInputRecord) -> f64 {
    (input.runtime - RUNTIME_BASELINE_MINUTES) / RUNTIME_SCALE
}

fn genre_effect(input: &MovieInputRecord) -> f64 {
    (f64::from(input.num_genres) - 1.0) / GENRE_SCALE
}

fn company_effect(input: &MovieInputRecord) -> f64 {
    (f64::from(input.num_production_companies) - 1.0) / COMPANY_SCALE
}

/// Multiplicative factors in application order.
///
/// Callers must have validated the input; a zero vote count yields `-inf`.
pub fn factors(input: &MovieInputRecord) -> [FactorValue; FACTOR_COUNT] {
    [
        FactorValue { feature: Feature::Popularity, factor: 1.0 + popularity_effect(input) },
        FactorValue { feature: Feature::Rating, factor: 1.0 + rating_effect(input) },
        FactorValue { feature: Feature::VoteCount, factor: 1.0 + vote_count_effect(input) },
        FactorValue { feature: Feature::Runtime, factor: 1.0 + runtime_effect(input) },
        FactorValue { feature: Feature::Genres, factor: 1.0 + genre_effect(input) },
        FactorValue { feature: Feature::Companies, factor: 1.0 + company_effect(input) },
        FactorValue {
            feature: Feature::Language,
            factor: language_weight(&input.original_language),
        },
    ]
}

/// Apply the factors to the budget left to right.
pub fn apply(budget: f64, factors: &[FactorValue]) -> f64 {
    factors.iter().fold(budget, |acc, f| acc * f.factor)
}
