pub mod error;
pub mod handlers;
pub mod models;
pub mod server;

use std::sync::Arc;

use crate::forecast::ForecastEngine;

/// Shared state for API handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ForecastEngine>,
    pub service_name: String,
}

impl AppState {
    pub fn new(engine: ForecastEngine, service_name: &str) -> Self {
        Self {
            engine: Arc::new(engine),
            service_name: service_name.to_string(),
        }
    }
}

pub use server::create_router;
