use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::forecast::SeriesSource;

#[derive(Debug, Default, Deserialize)]
pub struct ForecastRequest {
    #[serde(default, deserialize_with = "lenient_series")]
    pub series: Option<Vec<f64>>,
    /// Absent means the configured default. An explicit `null` is rejected.
    #[serde(default, deserialize_with = "lenient_horizon")]
    pub horizon: Option<i64>,
}

impl ForecastRequest {
    pub fn into_parts(self) -> (SeriesSource, Option<i64>) {
        (SeriesSource::from(self.series), self.horizon)
    }
}

/// A JSON scalar that may stand in for a number: the number itself or its
/// decimal text.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberInput {
    Int(i64),
    Float(f64),
    Text(String),
}

impl NumberInput {
    fn to_f64(&self) -> Option<f64> {
        match self {
            NumberInput::Int(n) => Some(*n as f64),
            NumberInput::Float(x) => Some(*x),
            NumberInput::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Integers, integral floats (`7.0`) and integer text (`"7"`).
    fn to_i64(&self) -> Option<i64> {
        match self {
            NumberInput::Int(n) => Some(*n),
            NumberInput::Float(x) => integral(*x),
            NumberInput::Text(s) => s.trim().parse().ok(),
        }
    }
}

fn integral(x: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is out of range
    let in_range = x >= i64::MIN as f64 && x < i64::MAX as f64;
    (x.is_finite() && x.fract() == 0.0 && in_range).then_some(x as i64)
}

fn lenient_series<'de, D>(deserializer: D) -> Result<Option<Vec<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(items) = Option::<Vec<NumberInput>>::deserialize(deserializer)
        .map_err(|_| D::Error::custom("series must be a list of numbers or null"))?
    else {
        return Ok(None);
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.to_f64().ok_or_else(|| {
                D::Error::custom(format!("series value at index {} is not a number", index))
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

fn lenient_horizon<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    NumberInput::deserialize(deserializer)
        .ok()
        .and_then(|input| input.to_i64())
        .map(Some)
        .ok_or_else(|| D::Error::custom("horizon must be an integer"))
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ForecastResponse {
    pub forecast: Vec<f64>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: String,
}
