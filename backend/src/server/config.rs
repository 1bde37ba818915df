//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;
use coursehub::domain::ColorScheme;
use coursehub::outbound::persistence::DbConnectionManager;

/// Builder-style configuration for `create_server`.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) connections: Option<Arc<DbConnectionManager>>,
    pub(crate) color_scheme: ColorScheme,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Fixture-backed configuration with the light scheme.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            connections: None,
            color_scheme: ColorScheme::default(),
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Back the course endpoints with the shared connection manager.
    #[must_use]
    pub fn with_connections(mut self, connections: Arc<DbConnectionManager>) -> Self {
        self.connections = Some(connections);
        self
    }

    /// Default color scheme for the app shell.
    #[must_use]
    pub fn with_color_scheme(mut self, color_scheme: ColorScheme) -> Self {
        self.color_scheme = color_scheme;
        self
    }

    /// Address the server listens on.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
