//! Naive time-series forecast service.
//!
//! `POST /forecast` takes an optional series and horizon and returns the
//! trailing mean of the last few observations plus Gaussian noise for each
//! future step. `GET /health` reports liveness.

pub mod api;
pub mod config;
pub mod forecast;

pub const SERVICE_NAME: &str = "QSTEEL AI Service";
