/// Reasons a forecast input or forecaster parameter is rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ForecastError {
    #[error("series must contain at least one observation")]
    EmptySeries,

    #[error("series value at index {index} is not finite: {value}")]
    NonFiniteValue { index: usize, value: f64 },

    #[error("horizon must be a non-negative integer, got {0}")]
    NegativeHorizon(i64),

    #[error("horizon {requested} exceeds maximum of {max}")]
    HorizonTooLarge { requested: i64, max: usize },

    #[error("averaging window must be at least 1, got {0}")]
    InvalidWindow(usize),

    #[error("noise standard deviation must be finite and non-negative, got {0}")]
    InvalidNoise(f64),
}
