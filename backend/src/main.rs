//! Backend entry-point: loads settings, wires the connection manager and
//! serves the course endpoints.

mod server;

use std::sync::Arc;

use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use coursehub::inbound::http::health::HealthState;
use coursehub::outbound::persistence::DbConnectionManager;
use coursehub::settings::AppSettings;
use ortho_config::OrthoConfig;
use server::{ServerConfig, create_server};

/// Build Prometheus middleware, logging and discarding failures so metrics
/// never block startup.
#[cfg(feature = "metrics")]
fn initialize_metrics<F, E>(build: F) -> Option<PrometheusMetrics>
where
    F: FnOnce() -> Result<PrometheusMetrics, E>,
    E: std::fmt::Display,
{
    match build() {
        Ok(metrics) => Some(metrics),
        Err(error) => {
            warn!(%error, "Prometheus metrics initialisation failed; continuing without");
            None
        }
    }
}

/// Create the shared connection manager, connecting up front when asked.
///
/// A failed eager connect is logged and left for the first request to retry.
async fn build_connections(settings: &AppSettings) -> Option<Arc<DbConnectionManager>> {
    let Some(database_url) = settings.database_url() else {
        warn!("no database URL configured; course endpoints will fail until one is set");
        return None;
    };
    let connections = Arc::new(DbConnectionManager::postgres(
        settings.pool_config(database_url),
    ));
    if settings.eager_connect {
        match connections.ensure_connected().await {
            Ok(_) => info!("database connected at startup"),
            Err(error) => warn!(%error, "eager database connect failed; will retry on demand"),
        }
    }
    Some(connections)
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let color_scheme = settings
        .color_scheme()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let mut config = ServerConfig::new(settings.bind_addr()?).with_color_scheme(color_scheme);
    if let Some(connections) = build_connections(&settings).await {
        config = config.with_connections(connections);
    }
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(initialize_metrics(|| {
        PrometheusMetricsBuilder::new("coursehub")
            .endpoint("/metrics")
            .build()
    }));

    info!(addr = %config.bind_addr(), "starting server");
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}

#[cfg(test)]
mod tests;
