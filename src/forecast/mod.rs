pub mod engine;
pub mod error;
pub mod naive;
pub mod noise;
pub mod types;

pub use engine::ForecastEngine;
pub use error::ForecastError;
pub use naive::NaiveForecaster;
pub use noise::NoiseSource;
pub use types::{Horizon, Series, SeriesSource, DEFAULT_SERIES};
