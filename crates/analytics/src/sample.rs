//! Built-in sample data for the dashboard.
//!
//! The catalog is constructed once at startup from [`SampleConfig`] and
//! passed to whoever needs it; it is immutable afterwards.

use cineforecast_core::config::SampleConfig;
use cineforecast_core::genre::GenreAggregateRow;
use cineforecast_core::types::MovieInputRecord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use tracing::info;

/// genre, avg revenue ($M), avg budget ($M), ROI %, movie count
const GENRE_TABLE: [(&str, f64, f64, f64, u32); 5] = [
    ("Action", 250.0, 100.0, 150.0, 120),
    ("Comedy", 180.0, 60.0, 200.0, 85),
    ("Drama", 120.0, 40.0, 200.0, 150),
    ("Horror", 90.0, 30.0, 180.0, 60),
    ("Sci-Fi", 300.0, 120.0, 150.0, 40),
];

const SAMPLE_LANGUAGES: [&str; 5] = ["en", "fr", "es", "zh", "hi"];

pub fn sample_genre_rows() -> Vec<GenreAggregateRow> {
    GENRE_TABLE
        .iter()
        .map(|&(genre, revenue, budget, roi, count)| {
            GenreAggregateRow::new(genre, revenue, budget, roi, count)
        })
        .collect()
}

/// Draw `count` synthetic movies. The same seed always yields the same rows.
pub fn synthetic_movies(seed: u64, count: usize) -> Vec<MovieInputRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| MovieInputRecord {
            budget: rng.gen_range(1_000_000u64..200_000_000) as f64,
            popularity: rng.gen_range(1.0..100.0),
            runtime: rng.gen_range(80u32..180) as f64,
            vote_average: rng.gen_range(3.0..10.0),
            vote_count: rng.gen_range(100..10_000),
            original_language: SAMPLE_LANGUAGES[rng.gen_range(0..SAMPLE_LANGUAGES.len())]
                .to_string(),
            num_genres: rng.gen_range(1..5),
            num_production_companies: rng.gen_range(1..5),
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct SampleCatalog {
    seed: u64,
    genres: Arc<[GenreAggregateRow]>,
    movies: Arc<[MovieInputRecord]>,
}

impl SampleCatalog {
    pub fn build(config: &SampleConfig) -> Self {
        let catalog = Self {
            seed: config.seed,
            genres: sample_genre_rows().into(),
            movies: synthetic_movies(config.seed, config.movie_count).into(),
        };
        info!(
            seed = catalog.seed,
            genres = catalog.genres.len(),
            movies = catalog.movies.len(),
            "Sample catalog built"
        );
        catalog
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shared handle to the genre rows.
    pub fn genres(&self) -> Arc<[GenreAggregateRow]> {
        Arc::clone(&self.genres)
    }

    pub fn movies(&self) -> &[MovieInputRecord] {
        &self.movies
    }
}
