//! Process settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `COURSEHUB_*` environment variables and
//! configuration files. The connection string additionally falls back to the
//! conventional `DATABASE_URL` so hosted Postgres add-ons work unchanged.

use std::env;
use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{ColorScheme, UnknownColorScheme};
use crate::outbound::persistence::PoolConfig;

/// Fallback variable consulted when no prefixed URL is configured.
pub const DATABASE_URL_FALLBACK: &str = "DATABASE_URL";

const DEFAULT_BIND_HOST: &str = "0.0.0.0";
const DEFAULT_BIND_PORT: u16 = 8080;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const DEFAULT_POOL_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Server and persistence settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "COURSEHUB")]
pub struct AppSettings {
    /// PostgreSQL connection string. Unset means fixture-backed endpoints.
    pub database_url: Option<String>,
    /// Interface to bind.
    pub bind_host: Option<String>,
    /// Port to bind.
    pub bind_port: Option<u16>,
    /// Maximum pooled connections.
    pub pool_max_size: Option<u32>,
    /// Seconds to wait for a pooled connection.
    pub pool_connect_timeout_secs: Option<u64>,
    /// Default shell color scheme (`light` or `dark`).
    pub color_scheme: Option<String>,
    /// Connect to the database before serving instead of on first request.
    #[ortho_config(default = false)]
    pub eager_connect: bool,
}

impl AppSettings {
    /// Configured connection string, else `DATABASE_URL`. Blank values count
    /// as unset.
    pub fn database_url(&self) -> Option<String> {
        self.database_url
            .clone()
            .or_else(|| env::var(DATABASE_URL_FALLBACK).ok())
            .filter(|url| !url.trim().is_empty())
    }

    /// Host to bind, defaulting to all interfaces.
    pub fn bind_host(&self) -> &str {
        self.bind_host.as_deref().unwrap_or(DEFAULT_BIND_HOST)
    }

    /// Port to bind.
    pub fn bind_port(&self) -> u16 {
        self.bind_port.unwrap_or(DEFAULT_BIND_PORT)
    }

    /// Resolve host and port to the first matching socket address.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the host cannot be resolved.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        (self.bind_host(), self.bind_port())
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                std::io::Error::other(format!(
                    "bind host {} resolved to no addresses",
                    self.bind_host()
                ))
            })
    }

    /// Default shell color scheme.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownColorScheme`] for labels other than `light`/`dark`.
    pub fn color_scheme(&self) -> Result<ColorScheme, UnknownColorScheme> {
        self.color_scheme
            .as_deref()
            .map_or(Ok(ColorScheme::default()), str::parse)
    }

    /// Pool settings for `database_url`.
    pub fn pool_config(&self, database_url: impl Into<String>) -> PoolConfig {
        PoolConfig::new(database_url)
            .with_max_size(self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE))
            .with_connection_timeout(Duration::from_secs(
                self.pool_connect_timeout_secs
                    .unwrap_or(DEFAULT_POOL_CONNECT_TIMEOUT_SECS),
            ))
    }
}
