pub mod config;
pub mod error;
pub mod genre;
pub mod types;

pub use config::AppConfig;
pub use error::{ForecastError, ForecastResult};
