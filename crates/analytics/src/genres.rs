//! Read-only queries over genre aggregate rows for the analytics dashboard.

use cineforecast_core::genre::{
    BudgetRevenuePoint, GenreAggregateRow, GenreCharts, GenreShare, GenreSummary, GenreValue,
};
use cineforecast_core::{ForecastError, ForecastResult};
use std::sync::Arc;
use tracing::debug;

fn ensure_usable(rows: &[GenreAggregateRow]) -> ForecastResult<()> {
    if rows.is_empty() {
        return Err(ForecastError::EmptyDataset);
    }
    for row in rows {
        let finite = row.avg_revenue.is_finite()
            && row.avg_budget.is_finite()
            && row.roi_percent.is_finite();
        if !finite {
            return Err(ForecastError::invalid(format!(
                "genre '{}' has a non-finite aggregate",
                row.genre
            )));
        }
    }
    Ok(())
}

/// First row holding the maximum of `key`; later ties never replace it.
fn first_max_by<F>(rows: &[GenreAggregateRow], key: F) -> &GenreAggregateRow
where
    F: Fn(&GenreAggregateRow) -> f64,
{
    let mut best = &rows[0];
    for row in &rows[1..] {
        if key(row) > key(best) {
            best = row;
        }
    }
    best
}

/// Each term is divided before summing so a mean of finite values does not
/// overflow.
fn mean<F>(rows: &[GenreAggregateRow], value: F) -> f64
where
    F: Fn(&GenreAggregateRow) -> f64,
{
    let n = rows.len() as f64;
    rows.iter().map(|r| value(r) / n).sum()
}

fn finite_figure(name: &str, value: f64) -> ForecastResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ForecastError::invalid(format!(
            "{name} is out of range for these genre rows"
        )))
    }
}

/// Headline dashboard figures. Fails with `EmptyDataset` on no rows.
pub fn summarize_genres(rows: &[GenreAggregateRow]) -> ForecastResult<GenreSummary> {
    ensure_usable(rows)?;

    let top = first_max_by(rows, |r| r.avg_revenue);
    let best_roi = first_max_by(rows, |r| r.roi_percent);
    let avg_revenue = finite_figure("average revenue", mean(rows, |r| r.avg_revenue))?;
    let avg_budget = finite_figure("average budget", mean(rows, |r| r.avg_budget))?;

    let top_revenue_above_avg_pct = if avg_revenue.abs() > f64::EPSILON {
        finite_figure(
            "top revenue above average",
            (top.avg_revenue - avg_revenue) / avg_revenue * 100.0,
        )?
    } else {
        0.0
    };

    Ok(GenreSummary {
        top_revenue_genre: top.genre.clone(),
        top_revenue_above_avg_pct,
        best_roi_genre: best_roi.genre.clone(),
        best_roi_percent: best_roi.roi_percent,
        avg_budget,
        genre_count: rows.len(),
    })
}

pub fn revenue_by_genre(rows: &[GenreAggregateRow]) -> Vec<GenreValue> {
    rows.iter()
        .map(|r| GenreValue {
            genre: r.genre.clone(),
            value: r.avg_revenue,
        })
        .collect()
}

pub fn budget_vs_revenue(rows: &[GenreAggregateRow]) -> Vec<BudgetRevenuePoint> {
    rows.iter()
        .map(|r| BudgetRevenuePoint {
            genre: r.genre.clone(),
            avg_budget: r.avg_budget,
            avg_revenue: r.avg_revenue,
            movie_count: r.movie_count,
        })
        .collect()
}

/// Each genre's ROI as a share of the ROI total, in percent.
pub fn roi_distribution(rows: &[GenreAggregateRow]) -> ForecastResult<Vec<GenreShare>> {
    ensure_usable(rows)?;

    let total = finite_figure("ROI total", rows.iter().map(|r| r.roi_percent).sum())?;
    if total <= 0.0 {
        return Err(ForecastError::invalid(
            "ROI distribution needs a positive ROI total",
        ));
    }

    Ok(rows
        .iter()
        .map(|r| GenreShare {
            genre: r.genre.clone(),
            share_pct: r.roi_percent / total * 100.0,
        })
        .collect())
}

pub fn charts(rows: &[GenreAggregateRow]) -> ForecastResult<GenreCharts> {
    Ok(GenreCharts {
        roi_distribution: roi_distribution(rows)?,
        revenue_by_genre: revenue_by_genre(rows),
        budget_vs_revenue: budget_vs_revenue(rows),
    })
}

/// Analytics provider over a fixed set of genre rows handed in at startup.
#[derive(Debug, Clone)]
pub struct GenreAnalytics {
    rows: Arc<[GenreAggregateRow]>,
}

impl GenreAnalytics {
    pub fn new(rows: impl Into<Arc<[GenreAggregateRow]>>) -> Self {
        Self { rows: rows.into() }
    }

    pub fn rows(&self) -> &[GenreAggregateRow] {
        &self.rows
    }

    pub fn summarize(&self) -> ForecastResult<GenreSummary> {
        let summary = summarize_genres(&self.rows)?;
        metrics::counter!("analytics.summaries").increment(1);
        debug!(
            top_revenue_genre = %summary.top_revenue_genre,
            best_roi_genre = %summary.best_roi_genre,
            genres = summary.genre_count,
            "Genre summary computed"
        );
        Ok(summary)
    }

    pub fn charts(&self) -> ForecastResult<GenreCharts> {
        charts(&self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_genre_rows;

    #[test]
    fn test_sample_summary() {
        let summary = summarize_genres(&sample_genre_rows()).unwrap();

        assert_eq!(summary.top_revenue_genre, "Sci-Fi");
        // Comedy and Drama tie at 200; the first occurrence wins.
        assert_eq!(summary.best_roi_genre, "Comedy");
        assert_eq!(summary.best_roi_percent, 200.0);
        assert_eq!(summary.avg_budget, 70.0);
        assert_eq!(summary.genre_count, 5);
        assert!((summary.top_revenue_above_avg_pct - 112.0 / 188.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_rows() {
        assert!(matches!(summarize_genres(&[]), Err(ForecastError::EmptyDataset)));
        assert!(matches!(roi_distribution(&[]), Err(ForecastError::EmptyDataset)));
        assert!(matches!(charts(&[]), Err(ForecastError::EmptyDataset)));
        assert!(revenue_by_genre(&[]).is_empty());
    }

    #[test]
    fn test_tie_break_is_first_occurrence() {
        let rows = vec![
            GenreAggregateRow::new("Western", 100.0, 10.0, 50.0, 3),
            GenreAggregateRow::new("Musical", 100.0, 20.0, 50.0, 4),
        ];
        let summary = summarize_genres(&rows).unwrap();
        assert_eq!(summary.top_revenue_genre, "Western");
        assert_eq!(summary.best_roi_genre, "Western");
        assert_eq!(summary.avg_budget, 15.0);
        assert_eq!(summary.top_revenue_above_avg_pct, 0.0);
    }

    #[test]
    fn test_single_row() {
        let rows = vec![GenreAggregateRow::new("Documentary", 5.0, 2.0, 150.0, 9)];
        let summary = summarize_genres(&rows).unwrap();
        assert_eq!(summary.top_revenue_genre, "Documentary");
        assert_eq!(summary.best_roi_genre, "Documentary");
        assert_eq!(summary.avg_budget, 2.0);
    }

    #[test]
    fn test_non_finite_row_rejected() {
        let rows = vec![
            GenreAggregateRow::new("Action", 250.0, 100.0, 150.0, 120),
            GenreAggregateRow::new("Broken", f64::NAN, 1.0, 1.0, 1),
        ];
        assert!(matches!(summarize_genres(&rows), Err(ForecastError::InvalidInput(_))));
    }

    #[test]
    fn test_large_budgets_average_without_overflow() {
        let rows = vec![
            GenreAggregateRow::new("Epic", 1e308, 1e308, 100.0, 1),
            GenreAggregateRow::new("Saga", 1e308, 1e308, 100.0, 1),
        ];
        let summary = summarize_genres(&rows).unwrap();
        assert_eq!(summary.avg_budget, 1e308);
        assert_eq!(summary.top_revenue_above_avg_pct, 0.0);
    }

    #[test]
    fn test_above_average_overflow_rejected() {
        // Revenues cancel to a tiny positive mean against a huge top value.
        let rows = vec![
            GenreAggregateRow::new("Hit", 1e300, 1.0, 10.0, 1),
            GenreAggregateRow::new("Flop", -1e300, 1.0, 10.0, 1),
            GenreAggregateRow::new("Indie", 3e-15, 1.0, 10.0, 1),
        ];
        assert!(matches!(summarize_genres(&rows), Err(ForecastError::InvalidInput(_))));
    }

    #[test]
    fn test_summary_does_not_mutate_rows() {
        let rows = sample_genre_rows();
        let before = rows.clone();
        let _ = summarize_genres(&rows).unwrap();
        assert_eq!(rows, before);
    }

    #[test]
    fn test_roi_distribution_shares() {
        let shares = roi_distribution(&sample_genre_rows()).unwrap();
        let total: f64 = shares.iter().map(|s| s.share_pct).sum();
        assert!((total - 100.0).abs() < 1e-9);

        let comedy = shares.iter().find(|s| s.genre == "Comedy").unwrap();
        assert!((comedy.share_pct - 200.0 / 880.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_roi_distribution_requires_positive_total() {
        let rows = vec![
            GenreAggregateRow::new("Flop", 1.0, 10.0, -90.0, 2),
            GenreAggregateRow::new("Even", 10.0, 10.0, 0.0, 2),
        ];
        assert!(matches!(roi_distribution(&rows), Err(ForecastError::InvalidInput(_))));
    }

    #[test]
    fn test_roi_total_overflow_rejected() {
        let rows = vec![
            GenreAggregateRow::new("Viral", 1.0, 1.0, 1e308, 1),
            GenreAggregateRow::new("Cult", 1.0, 1.0, 1e308, 1),
        ];
        assert!(matches!(roi_distribution(&rows), Err(ForecastError::InvalidInput(_))));
        assert!(matches!(charts(&rows), Err(ForecastError::InvalidInput(_))));
    }

    #[test]
    fn test_chart_series_follow_input_order() {
        let charts = charts(&sample_genre_rows()).unwrap();
        let genres: Vec<&str> = charts.revenue_by_genre.iter().map(|v| v.genre.as_str()).collect();
        assert_eq!(genres, ["Action", "Comedy", "Drama", "Horror", "Sci-Fi"]);
        assert_eq!(charts.revenue_by_genre[4].value, 300.0);

        let drama = &charts.budget_vs_revenue[2];
        assert_eq!(drama.avg_budget, 40.0);
        assert_eq!(drama.avg_revenue, 120.0);
        assert_eq!(drama.movie_count, 150);
    }

    #[test]
    fn test_provider_wraps_rows() {
        let analytics = GenreAnalytics::new(sample_genre_rows());
        assert_eq!(analytics.rows().len(), 5);
        assert_eq!(analytics.summarize().unwrap().top_revenue_genre, "Sci-Fi");
        assert_eq!(analytics.charts().unwrap().roi_distribution.len(), 5);

        let empty = GenreAnalytics::new(Vec::<GenreAggregateRow>::new());
        assert!(matches!(empty.summarize(), Err(ForecastError::EmptyDataset)));
    }
}
