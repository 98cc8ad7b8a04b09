use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::forecast::DEFAULT_SERIES;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub forecast: ForecastConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastConfig {
    /// Number of trailing observations averaged into the point estimate.
    #[serde(default = "default_window")]
    pub window: usize,
    #[serde(default = "default_noise_std_dev")]
    pub noise_std_dev: f64,
    #[serde(default = "default_horizon")]
    pub default_horizon: i64,
    /// Upper bound on a requested horizon. Unset accepts any non-negative value.
    #[serde(default)]
    pub max_horizon: Option<usize>,
    #[serde(default = "default_series")]
    pub default_series: Vec<f64>,
    /// Fixed RNG seed. Unset means fresh entropy per request.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            window: default_window(),
            noise_std_dev: default_noise_std_dev(),
            default_horizon: default_horizon(),
            max_horizon: None,
            default_series: default_series(),
            seed: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }
fn default_window() -> usize { 3 }
fn default_noise_std_dev() -> f64 { 0.3 }
fn default_horizon() -> i64 { 7 }
fn default_series() -> Vec<f64> { DEFAULT_SERIES.to_vec() }

/// Overrides read from the process environment (and `.env`, if present).
#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub config_path: String,
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path))?;

        Ok(config)
    }

    /// Like `load`, but a missing file yields the built-in defaults.
    pub fn load_or_default(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            Self::load(path)
        } else {
            info!("No config file at {}, using defaults", path);
            Ok(Self::default())
        }
    }

    pub fn apply_env(&mut self, env: &EnvConfig) {
        if let Some(host) = &env.host {
            self.server.host = host.clone();
        }
        if let Some(port) = env.port {
            self.server.port = port;
        }
    }

    /// `host:port` string; hostnames are resolved when binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl EnvConfig {
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        let port = match std::env::var("FORECAST_PORT") {
            Ok(port) => Some(
                port.parse()
                    .with_context(|| format!("FORECAST_PORT is not a valid port: {}", port))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            config_path: std::env::var("FORECAST_CONFIG")
                .unwrap_or_else(|_| "config.toml".to_string()),
            host: std::env::var("FORECAST_HOST").ok(),
            port,
        })
    }
}
