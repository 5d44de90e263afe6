//! Revenue-impact breakdown for the explanatory bar chart.
//!
//! Each amount is the budget scaled by a feature's partial effect, computed
//! independently of the others. The model is multiplicative, so the amounts
//! do not reconcile to `revenue - budget`; the exact-product view is the
//! factor list in [`crate::model::factors`]. Existing charts depend on these
//! numbers, including the two-branch language term.

use crate::model;
use cineforecast_core::types::{
    Attribution, Feature, FeatureContribution, Language, MovieInputRecord,
};

/// Language term: the English uplift for `en`, the Chinese uplift for every
/// other code.
fn language_effect(input: &MovieInputRecord) -> f64 {
    if input.original_language == Language::En.code() {
        Language::En.weight() - 1.0
    } else {
        Language::Zh.weight() - 1.0
    }
}

pub fn attribute(input: &MovieInputRecord) -> Attribution {
    let budget = input.budget;
    let amounts = [
        (Feature::Budget, budget),
        (Feature::Popularity, input.popularity * budget / model::POPULARITY_SCALE),
        (Feature::Rating, input.vote_average * budget / model::RATING_SCALE),
        (
            Feature::VoteCount,
            (input.vote_count as f64).ln() * budget / model::VOTE_COUNT_SCALE,
        ),
        (
            Feature::Runtime,
            (input.runtime - model::RUNTIME_BASELINE_MINUTES) * budget / model::RUNTIME_SCALE,
        ),
        (
            Feature::Genres,
            (f64::from(input.num_genres) - 1.0) * budget / model::GENRE_SCALE,
        ),
        (
            Feature::Companies,
            (f64::from(input.num_production_companies) - 1.0) * budget / model::COMPANY_SCALE,
        ),
        (Feature::Language, language_effect(input) * budget),
    ];

    Attribution {
        contributions: amounts
            .into_iter()
            .map(|(feature, amount)| FeatureContribution { feature, amount })
            .collect(),
    }
}
