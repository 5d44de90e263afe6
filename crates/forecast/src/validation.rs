//! Input checks applied before a forecast is computed.

use cineforecast_core::config::ValidationMode;
use cineforecast_core::types::{Language, MovieInputRecord};
use cineforecast_core::{ForecastError, ForecastResult};

/// Ranges offered by the forecast input form, enforced in strict mode.
pub mod bounds {
    pub const BUDGET: (f64, f64) = (1_000_000.0, 500_000_000.0);
    pub const POPULARITY: (f64, f64) = (1.0, 100.0);
    pub const RUNTIME: (f64, f64) = (60.0, 240.0);
    pub const VOTE_AVERAGE: (f64, f64) = (0.0, 10.0);
    pub const VOTE_COUNT: (u64, u64) = (100, 100_000);
    pub const GENRES: (u32, u32) = (1, 5);
    pub const COMPANIES: (u32, u32) = (1, 5);
}

fn finite(name: &str, value: f64) -> ForecastResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ForecastError::invalid(format!("{name} must be a finite number")))
    }
}

fn within<T>(name: &str, value: T, (lo, hi): (T, T)) -> ForecastResult<()>
where
    T: PartialOrd + std::fmt::Display,
{
    if value >= lo && value <= hi {
        Ok(())
    } else {
        Err(ForecastError::invalid(format!(
            "{name} must be between {lo} and {hi}, got {value}"
        )))
    }
}

/// Reject inputs the formula cannot score meaningfully.
pub fn validate(input: &MovieInputRecord, mode: ValidationMode) -> ForecastResult<()> {
    finite("budget", input.budget)?;
    finite("popularity", input.popularity)?;
    finite("runtime", input.runtime)?;
    finite("vote_average", input.vote_average)?;

    if input.budget <= 0.0 {
        return Err(ForecastError::invalid("budget must be positive"));
    }
    // ln(vote_count) feeds the model.
    if input.vote_count == 0 {
        return Err(ForecastError::invalid("vote_count must be positive"));
    }
    if input.num_genres == 0 {
        return Err(ForecastError::invalid("num_genres must be at least 1"));
    }
    if input.num_production_companies == 0 {
        return Err(ForecastError::invalid(
            "num_production_companies must be at least 1",
        ));
    }
    if input.popularity < 0.0 {
        return Err(ForecastError::invalid("popularity must not be negative"));
    }
    if input.vote_average < 0.0 {
        return Err(ForecastError::invalid("vote_average must not be negative"));
    }
    if input.runtime < 0.0 {
        return Err(ForecastError::invalid("runtime must not be negative"));
    }

    if mode == ValidationMode::Strict {
        within("budget", input.budget, bounds::BUDGET)?;
        within("popularity", input.popularity, bounds::POPULARITY)?;
        within("runtime", input.runtime, bounds::RUNTIME)?;
        within("vote_average", input.vote_average, bounds::VOTE_AVERAGE)?;
        within("vote_count", input.vote_count, bounds::VOTE_COUNT)?;
        within("num_genres", input.num_genres, bounds::GENRES)?;
        within(
            "num_production_companies",
            input.num_production_companies,
            bounds::COMPANIES,
        )?;
        if Language::from_code(&input.original_language).is_none() {
            return Err(ForecastError::invalid(format!(
                "original_language '{}' is not supported",
                input.original_language
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> MovieInputRecord {
        MovieInputRecord {
            budget: 50_000_000.0,
            popularity: 50.0,
            runtime: 120.0,
            vote_average: 7.5,
            vote_count: 5000,
            original_language: "en".to_string(),
            num_genres: 2,
            num_production_companies: 2,
        }
    }

    fn assert_invalid(input: &MovieInputRecord, mode: ValidationMode) {
        match validate(input, mode) {
            Err(ForecastError::InvalidInput(_)) => {}
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_input_passes_both_modes() {
        assert!(validate(&valid_input(), ValidationMode::Lenient).is_ok());
        assert!(validate(&valid_input(), ValidationMode::Strict).is_ok());
    }

    #[test]
    fn test_hard_invariants() {
        let cases = [
            MovieInputRecord { budget: 0.0, ..valid_input() },
            MovieInputRecord { budget: -5.0, ..valid_input() },
            MovieInputRecord { budget: f64::NAN, ..valid_input() },
            MovieInputRecord { popularity: f64::INFINITY, ..valid_input() },
            MovieInputRecord { vote_count: 0, ..valid_input() },
            MovieInputRecord { num_genres: 0, ..valid_input() },
            MovieInputRecord { num_production_companies: 0, ..valid_input() },
            MovieInputRecord { popularity: -1.0, ..valid_input() },
            MovieInputRecord { vote_average: -0.5, ..valid_input() },
            MovieInputRecord { runtime: -10.0, ..valid_input() },
        ];
        for input in &cases {
            assert_invalid(input, ValidationMode::Lenient);
            assert_invalid(input, ValidationMode::Strict);
        }
    }

    #[test]
    fn test_lenient_accepts_out_of_range_values() {
        let input = MovieInputRecord {
            budget: 1_000.0,
            popularity: 250.0,
            runtime: 30.0,
            vote_average: 12.0,
            vote_count: 3,
            original_language: "ko".to_string(),
            num_genres: 9,
            num_production_companies: 12,
        };
        assert!(validate(&input, ValidationMode::Lenient).is_ok());
        assert_invalid(&input, ValidationMode::Strict);
    }

    #[test]
    fn test_strict_bounds_are_inclusive() {
        let low = MovieInputRecord {
            budget: 1_000_000.0,
            popularity: 1.0,
            runtime: 60.0,
            vote_average: 0.0,
            vote_count: 100,
            original_language: "hi".to_string(),
            num_genres: 1,
            num_production_companies: 1,
        };
        let high = MovieInputRecord {
            budget: 500_000_000.0,
            popularity: 100.0,
            runtime: 240.0,
            vote_average: 10.0,
            vote_count: 100_000,
            original_language: "zh".to_string(),
            num_genres: 5,
            num_production_companies: 5,
        };
        assert!(validate(&low, ValidationMode::Strict).is_ok());
        assert!(validate(&high, ValidationMode::Strict).is_ok());
    }

    #[test]
    fn test_strict_rejects_unknown_language() {
        let input = MovieInputRecord {
            original_language: "de".to_string(),
            ..valid_input()
        };
        assert!(validate(&input, ValidationMode::Lenient).is_ok());
        let err = validate(&input, ValidationMode::Strict).unwrap_err();
        assert!(err.to_string().contains("'de'"));
    }
}
