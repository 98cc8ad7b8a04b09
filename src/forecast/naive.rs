use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::forecast::error::ForecastError;
use crate::forecast::types::{Horizon, Series};

/// Trailing-mean forecaster with Gaussian noise per step.
#[derive(Debug, Clone)]
pub struct NaiveForecaster {
    window: usize,
    noise: Normal<f64>,
}

impl NaiveForecaster {
    pub fn new(window: usize, noise_std_dev: f64) -> Result<Self, ForecastError> {
        if window == 0 {
            return Err(ForecastError::InvalidWindow(window));
        }

        if !noise_std_dev.is_finite() {
            return Err(ForecastError::InvalidNoise(noise_std_dev));
        }

        let noise = Normal::new(0.0, noise_std_dev)
            .map_err(|_| ForecastError::InvalidNoise(noise_std_dev))?;

        Ok(Self { window, noise })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn noise_std_dev(&self) -> f64 {
        self.noise.std_dev()
    }

    /// Level every step is centred on.
    pub fn point_estimate(&self, series: &Series) -> f64 {
        series.trailing_mean(self.window)
    }

    /// Draw `horizon` independent values around the point estimate.
    pub fn forecast<R: Rng + ?Sized>(
        &self,
        series: &Series,
        horizon: Horizon,
        rng: &mut R,
    ) -> Vec<f64> {
        let mu = self.point_estimate(series);

        (0..horizon.steps())
            .map(|_| mu + self.noise.sample(&mut *rng))
            .collect()
    }
}
