use thiserror::Error;

pub type ForecastResult<T> = Result<T, ForecastError>;

#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Empty dataset: aggregate requested over zero rows")]
    EmptyDataset,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for ForecastError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl ForecastError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// True for errors caused by the caller's data rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::EmptyDataset)
    }
}
