use tracing::debug;

use crate::config::ForecastConfig;
use crate::forecast::error::ForecastError;
use crate::forecast::naive::NaiveForecaster;
use crate::forecast::noise::NoiseSource;
use crate::forecast::types::{Horizon, Series, SeriesSource};

/// Everything a request needs to produce a forecast: the forecaster, the
/// fallback inputs, and the noise source.
#[derive(Debug, Clone)]
pub struct ForecastEngine {
    forecaster: NaiveForecaster,
    default_series: Series,
    default_horizon: i64,
    max_horizon: Option<usize>,
    noise: NoiseSource,
}

impl ForecastEngine {
    pub fn new(config: &ForecastConfig, noise: NoiseSource) -> Result<Self, ForecastError> {
        let forecaster = NaiveForecaster::new(config.window, config.noise_std_dev)?;
        let default_series = Series::new(config.default_series.clone())?;

        // Fail at startup rather than on the first request without a horizon
        Horizon::new(config.default_horizon, config.max_horizon)?;

        Ok(Self {
            forecaster,
            default_series,
            default_horizon: config.default_horizon,
            max_horizon: config.max_horizon,
            noise,
        })
    }

    /// Build from config, seeding the noise source when `seed` is set.
    pub fn from_config(config: &ForecastConfig) -> Result<Self, ForecastError> {
        Self::new(config, NoiseSource::from_seed(config.seed))
    }

    pub fn forecaster(&self) -> &NaiveForecaster {
        &self.forecaster
    }

    pub fn run(
        &self,
        source: SeriesSource,
        horizon: Option<i64>,
    ) -> Result<Vec<f64>, ForecastError> {
        let used_default = source == SeriesSource::Default;
        let series = source.resolve(&self.default_series)?;
        let horizon = Horizon::new(horizon.unwrap_or(self.default_horizon), self.max_horizon)?;

        debug!(
            "Forecasting {} steps from {} observations (default series: {})",
            horizon.steps(),
            series.len(),
            used_default
        );

        let values = self
            .noise
            .with_rng(|rng| self.forecaster.forecast(&series, horizon, rng));

        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with(config: ForecastConfig) -> ForecastEngine {
        ForecastEngine::new(&config, NoiseSource::seeded(1)).unwrap()
    }

    fn quiet_config() -> ForecastConfig {
        ForecastConfig {
            noise_std_dev: 0.0,
            ..ForecastConfig::default()
        }
    }

    #[test]
    fn test_defaults_applied() {
        let engine = engine_with(quiet_config());
        let values = engine.run(SeriesSource::Default, None).unwrap();

        assert_eq!(values.len(), 7);
        assert!(values.iter().all(|v| (v - 41.0 / 3.0).abs() < 1e-12));
    }

    #[test]
    fn test_empty_series_falls_back_to_default() {
        let engine = engine_with(quiet_config());
        let values = engine.run(SeriesSource::from(Some(vec![])), Some(3)).unwrap();

        assert_eq!(values.len(), 3);
        assert!(values.iter().all(|v| (v - 41.0 / 3.0).abs() < 1e-12));
    }

    #[test]
    fn test_short_series_mean_is_exact() {
        let engine = engine_with(quiet_config());
        let values = engine
            .run(SeriesSource::Provided(vec![5.0, 5.0]), Some(2))
            .unwrap();
        assert_eq!(values, vec![5.0, 5.0]);
    }

    #[test]
    fn test_zero_horizon_is_empty() {
        let engine = engine_with(ForecastConfig::default());
        let values = engine.run(SeriesSource::Default, Some(0)).unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_negative_horizon_rejected() {
        let engine = engine_with(ForecastConfig::default());
        let err = engine.run(SeriesSource::Default, Some(-1)).unwrap_err();
        assert_eq!(err, ForecastError::NegativeHorizon(-1));
    }

    #[test]
    fn test_horizon_over_limit_rejected() {
        let engine = engine_with(ForecastConfig {
            max_horizon: Some(10),
            ..ForecastConfig::default()
        });
        let err = engine.run(SeriesSource::Default, Some(11)).unwrap_err();
        assert!(matches!(err, ForecastError::HorizonTooLarge { requested: 11, max: 10 }));
    }

    #[test]
    fn test_large_horizon_accepted_without_limit() {
        let engine = engine_with(quiet_config());
        let values = engine.run(SeriesSource::Default, Some(100_001)).unwrap();
        assert_eq!(values.len(), 100_001);
    }

    #[test]
    fn test_same_seed_same_forecast() {
        let a = engine_with(ForecastConfig::default());
        let b = engine_with(ForecastConfig::default());
        assert_eq!(
            a.run(SeriesSource::Default, None).unwrap(),
            b.run(SeriesSource::Default, None).unwrap()
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ForecastConfig {
            default_series: vec![],
            ..ForecastConfig::default()
        };
        assert_eq!(
            ForecastEngine::from_config(&config).unwrap_err(),
            ForecastError::EmptySeries
        );

        let config = ForecastConfig {
            default_horizon: 50,
            max_horizon: Some(10),
            ..ForecastConfig::default()
        };
        assert!(ForecastEngine::from_config(&config).is_err());
    }
}
