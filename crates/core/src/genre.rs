//! Genre-level aggregate records and the dashboard views derived from them.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One summary row per genre. Revenue and budget are in millions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenreAggregateRow {
    pub genre: String,
    pub avg_revenue: f64,
    pub avg_budget: f64,
    pub roi_percent: f64,
    pub movie_count: u32,
}

impl GenreAggregateRow {
    pub fn new(
        genre: impl Into<String>,
        avg_revenue: f64,
        avg_budget: f64,
        roi_percent: f64,
        movie_count: u32,
    ) -> Self {
        Self {
            genre: genre.into(),
            avg_revenue,
            avg_budget,
            roi_percent,
            movie_count,
        }
    }
}

/// Headline figures for the analytics dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenreSummary {
    pub top_revenue_genre: String,
    /// How far the top genre's average revenue sits above the mean, in percent.
    pub top_revenue_above_avg_pct: f64,
    pub best_roi_genre: String,
    pub best_roi_percent: f64,
    pub avg_budget: f64,
    pub genre_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenreValue {
    pub genre: String,
    pub value: f64,
}

/// Budget vs revenue scatter point, sized by movie count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BudgetRevenuePoint {
    pub genre: String,
    pub avg_budget: f64,
    pub avg_revenue: f64,
    pub movie_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenreShare {
    pub genre: String,
    pub share_pct: f64,
}

/// Data series behind the dashboard charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenreCharts {
    pub revenue_by_genre: Vec<GenreValue>,
    pub budget_vs_revenue: Vec<BudgetRevenuePoint>,
    pub roi_distribution: Vec<GenreShare>,
}
