use anyhow::{Context, Result};
use qsteel_forecast::api::{create_router, AppState};
use qsteel_forecast::config::{Config, EnvConfig};
use qsteel_forecast::forecast::ForecastEngine;
use qsteel_forecast::SERVICE_NAME;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,qsteel_forecast=debug,tower_http=debug")),
        )
        .init();

    tracing::info!("{} starting...", SERVICE_NAME);

    // Load configuration
    let env_config = EnvConfig::load()?;
    let mut config = Config::load_or_default(&env_config.config_path)?;
    config.apply_env(&env_config);

    let engine = ForecastEngine::from_config(&config.forecast)
        .context("Invalid [forecast] configuration")?;

    tracing::info!(
        "Forecaster: window={}, noise_std_dev={}, default_horizon={}, max_horizon={:?}",
        engine.forecaster().window(),
        engine.forecaster().noise_std_dev(),
        config.forecast.default_horizon,
        config.forecast.max_horizon
    );
    if let Some(seed) = config.forecast.seed {
        tracing::warn!("Noise RNG seeded with {} (reproducible output)", seed);
    }

    let router = create_router(AppState::new(engine, SERVICE_NAME));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("Shutting down...");
        })
        .await?;

    Ok(())
}
