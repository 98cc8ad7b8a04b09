use crate::forecast::error::ForecastError;

/// Demo series used when a request carries no observations.
pub const DEFAULT_SERIES: [f64; 7] = [10.0, 12.0, 11.0, 13.0, 12.0, 14.0, 15.0];

/// Non-empty sequence of finite observations, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct Series(Vec<f64>);

impl Series {
    pub fn new(values: Vec<f64>) -> Result<Self, ForecastError> {
        if values.is_empty() {
            return Err(ForecastError::EmptySeries);
        }

        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(ForecastError::NonFiniteValue {
                index,
                value: values[index],
            });
        }

        Ok(Self(values))
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Arithmetic mean of the last `window` observations. Falls back to the
    /// whole series when it is shorter than the window.
    pub fn trailing_mean(&self, window: usize) -> f64 {
        let start = self.0.len().saturating_sub(window.max(1));
        let tail = &self.0[start..];
        let n = tail.len() as f64;

        let sum: f64 = tail.iter().sum();
        if sum.is_finite() {
            sum / n
        } else {
            // Large magnitudes can overflow the plain sum
            tail.iter().map(|v| v / n).sum()
        }
    }
}

impl Default for Series {
    fn default() -> Self {
        Self(DEFAULT_SERIES.to_vec())
    }
}

/// Where the observations for a forecast come from.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesSource {
    Provided(Vec<f64>),
    Default,
}

impl SeriesSource {
    /// Resolve into the concrete series to forecast from.
    pub fn resolve(self, default: &Series) -> Result<Series, ForecastError> {
        match self {
            SeriesSource::Provided(values) => Series::new(values),
            SeriesSource::Default => Ok(default.clone()),
        }
    }
}

impl From<Option<Vec<f64>>> for SeriesSource {
    fn from(values: Option<Vec<f64>>) -> Self {
        match values {
            Some(values) if !values.is_empty() => SeriesSource::Provided(values),
            _ => SeriesSource::Default,
        }
    }
}

/// Number of future steps to forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Horizon(usize);

impl Horizon {
    /// `max` of `None` accepts any non-negative step count.
    pub fn new(requested: i64, max: Option<usize>) -> Result<Self, ForecastError> {
        if requested < 0 {
            return Err(ForecastError::NegativeHorizon(requested));
        }

        let limit = max.unwrap_or(usize::MAX);
        let steps = usize::try_from(requested)
            .map_err(|_| ForecastError::HorizonTooLarge { requested, max: limit })?;

        if steps > limit {
            return Err(ForecastError::HorizonTooLarge { requested, max: limit });
        }

        Ok(Self(steps))
    }

    pub fn steps(self) -> usize {
        self.0
    }
}
